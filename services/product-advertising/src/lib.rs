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

//! Product Advertising API 5.0 client.
//!
//! [`RequestSigner`] implements the AWS SigV4 header signing the API
//! requires. [`Client`] builds, signs and sends GetItems calls and hands the
//! decoded response back unchanged.
//!
//! ```no_run
//! use paapi_core::{Context, OsEnv};
//! use paapi_product_advertising::{Client, Config, Resource};
//!
//! # async fn example(http: impl paapi_core::HttpSend) -> paapi_core::Result<()> {
//! let ctx = Context::new().with_env(OsEnv).with_http_send(http);
//! let client = Client::new(ctx.clone(), Config::default().from_env(&ctx))?;
//!
//! let item = client
//!     .get_item("B07PDHSJ1H", &[Resource::ItemInfoTitle.as_str()])
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod marketplace;
pub use marketplace::Marketplace;

mod resource;
pub use resource::Resource;

mod request;
pub use request::{is_valid_item_id, validate_item_ids};

mod sign_request;
pub use sign_request::RequestSigner;

mod client;
pub use client::{Client, GetItemsResponse, DEFAULT_RESOURCE};
