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

// Headers used by the Product Advertising API.
pub const X_AMZ_DATE: &str = "x-amz-date";
pub const X_AMZ_TARGET: &str = "x-amz-target";
pub const CONTENT_ENCODING_AMZ_1_0: &str = "amz-1.0";
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=UTF-8";
pub const ACCEPT_JSON: &str = "application/json, text/javascript";
pub const ACCEPT_LANGUAGE_EN_US: &str = "en-US";

// Signing constants.
pub const AWS4_HMAC_SHA256: &str = "AWS4-HMAC-SHA256";
pub const AWS4_REQUEST: &str = "aws4_request";
pub const SERVICE_NAME: &str = "ProductAdvertisingAPI";

// GetItems operation.
pub const GET_ITEMS_PATH: &str = "/paapi5/getitems";
pub const GET_ITEMS_TARGET: &str = "com.amazon.paapi5.v1.ProductAdvertisingAPIv1.GetItems";
pub const PARTNER_TYPE_ASSOCIATES: &str = "Associates";
pub const MAX_ITEM_IDS: usize = 10;
/// Longest prefix of a failed response body kept in errors and logs.
pub const MAX_ERROR_BODY_LEN: usize = 512;
pub const ITEM_ID_LEN: usize = 10;

// Env values used by the client config.
pub const PAAPI_ACCESS_KEY_ID: &str = "PAAPI_ACCESS_KEY_ID";
pub const PAAPI_SECRET_ACCESS_KEY: &str = "PAAPI_SECRET_ACCESS_KEY";
pub const PAAPI_PARTNER_TAG: &str = "PAAPI_PARTNER_TAG";
pub const PAAPI_MARKETPLACE: &str = "PAAPI_MARKETPLACE";
