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

use crate::constants::{ITEM_ID_LEN, MAX_ITEM_IDS, PARTNER_TYPE_ASSOCIATES};
use paapi_core::{Error, Result};
use serde::Serialize;

/// Body of a GetItems call.
///
/// Field order is the order they are serialized in, which is part of the
/// signed payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct GetItemsRequest<'a> {
    pub item_ids: &'a [&'a str],
    pub resources: &'a [&'a str],
    pub partner_tag: &'a str,
    pub partner_type: &'static str,
}

impl<'a> GetItemsRequest<'a> {
    pub fn new(item_ids: &'a [&'a str], resources: &'a [&'a str], partner_tag: &'a str) -> Self {
        Self {
            item_ids,
            resources,
            partner_tag,
            partner_type: PARTNER_TYPE_ASSOCIATES,
        }
    }
}

/// Check if the input is a well formed ASIN: ten upper-case letters or digits.
pub fn is_valid_item_id(item_id: &str) -> bool {
    item_id.len() == ITEM_ID_LEN
        && item_id
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

/// Validate a batch of item ids for a single GetItems call.
pub fn validate_item_ids(item_ids: &[&str]) -> Result<()> {
    if item_ids.is_empty() {
        return Err(Error::request_invalid("at least one item id is required"));
    }
    if item_ids.len() > MAX_ITEM_IDS {
        return Err(Error::request_invalid(format!(
            "at most {MAX_ITEM_IDS} item ids are allowed per request, got {}",
            item_ids.len()
        )));
    }
    if let Some(invalid) = item_ids.iter().find(|id| !is_valid_item_id(id)) {
        return Err(Error::request_invalid(format!(
            "invalid item id format: {invalid}"
        )));
    }

    Ok(())
}
