// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::constants::*;
use paapi_core::utils::Redact;
use paapi_core::Context;
use std::fmt::{Debug, Formatter};

/// Config carries all the configuration for the Product Advertising API client.
///
/// Nothing is validated here; [`Client::new`](crate::Client::new) rejects
/// empty credentials, an empty partner tag and unknown marketplaces.
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `PAAPI_ACCESS_KEY_ID`
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `PAAPI_SECRET_ACCESS_KEY`
    pub secret_access_key: Option<String>,
    /// `partner_tag` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `PAAPI_PARTNER_TAG`
    pub partner_tag: Option<String>,
    /// `marketplace` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `PAAPI_MARKETPLACE`
    /// - `US` if neither is set
    pub marketplace: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field(
                "access_key_id",
                &self.access_key_id.as_ref().map(Redact::from),
            )
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(Redact::from),
            )
            .field("partner_tag", &self.partner_tag)
            .field("marketplace", &self.marketplace)
            .finish()
    }
}

impl Config {
    /// Load config from env.
    ///
    /// Fields that are already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let envs = ctx.env_vars();

        if self.access_key_id.is_none() {
            self.access_key_id = envs.get(PAAPI_ACCESS_KEY_ID).cloned();
        }
        if self.secret_access_key.is_none() {
            self.secret_access_key = envs.get(PAAPI_SECRET_ACCESS_KEY).cloned();
        }
        if self.partner_tag.is_none() {
            self.partner_tag = envs.get(PAAPI_PARTNER_TAG).cloned();
        }
        if self.marketplace.is_none() {
            self.marketplace = envs.get(PAAPI_MARKETPLACE).cloned();
        }

        self
    }
}
