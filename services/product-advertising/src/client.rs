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
use crate::request::{validate_item_ids, GetItemsRequest};
use crate::{Config, Credential, Marketplace, RequestSigner, Resource};
use bytes::Bytes;
use http::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_ENCODING, CONTENT_TYPE, HOST};
use http::{HeaderValue, Method};
use log::{debug, warn};
use paapi_core::{Context, Error, ErrorKind, Result};
use serde_json::{Map, Value};

/// Response of a GetItems call, exactly as returned by the service.
pub type GetItemsResponse = Map<String, Value>;

/// Resource requested when the caller doesn't ask for any.
pub const DEFAULT_RESOURCE: Resource = Resource::ItemInfoTitle;

/// Client for the Product Advertising API.
///
/// The client only keeps immutable state: credentials, partner tag and the
/// resolved marketplace. Every call signs with a freshly created
/// [`RequestSigner`], so a client can be shared between tasks.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    credential: Credential,
    partner_tag: String,
    marketplace: Marketplace,
}

impl Client {
    /// Create a new client.
    ///
    /// Fails with [`ErrorKind::ConfigInvalid`] if the access key, secret key
    /// or partner tag is empty, or if the marketplace code is not supported.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        let credential = Credential::new(
            config.access_key_id.unwrap_or_default(),
            config.secret_access_key.unwrap_or_default(),
        );
        if !credential.is_valid() {
            return Err(Error::config_invalid(
                "access key id and secret access key must not be empty",
            ));
        }

        let partner_tag = config.partner_tag.unwrap_or_default();
        if partner_tag.is_empty() {
            return Err(Error::config_invalid("partner tag must not be empty"));
        }

        let marketplace = match config.marketplace.as_deref() {
            Some(code) => code.parse()?,
            None => Marketplace::default(),
        };
        debug!(
            "paapi client for marketplace {marketplace} uses host {} in region {}",
            marketplace.host(),
            marketplace.region()
        );

        Ok(Self {
            ctx,
            credential,
            partner_tag,
            marketplace,
        })
    }

    /// The marketplace this client talks to.
    pub fn marketplace(&self) -> Marketplace {
        self.marketplace
    }

    /// Fetch up to ten items by ASIN.
    ///
    /// An empty `resources` list requests [`DEFAULT_RESOURCE`] only. Selectors
    /// are passed through verbatim.
    pub async fn get_items(
        &self,
        item_ids: &[&str],
        resources: &[&str],
    ) -> Result<GetItemsResponse> {
        validate_item_ids(item_ids)?;

        let default_resources = [DEFAULT_RESOURCE.as_str()];
        let resources = if resources.is_empty() {
            &default_resources[..]
        } else {
            resources
        };

        let payload = serde_json::to_vec(&GetItemsRequest::new(
            item_ids,
            resources,
            &self.partner_tag,
        ))
        .map_err(|e| Error::unexpected("failed to serialize GetItems payload").with_source(e))?;

        let host = self.marketplace.host();
        let mut headers = RequestSigner::new(
            &self.credential.access_key_id,
            &self.credential.secret_access_key,
        )
        .method(Method::POST)
        .path(GET_ITEMS_PATH)
        .service(SERVICE_NAME)
        .region(self.marketplace.region())
        .payload(payload.clone())
        .header(CONTENT_ENCODING.as_str(), CONTENT_ENCODING_AMZ_1_0)
        .header(HOST.as_str(), host)
        .header(X_AMZ_TARGET, GET_ITEMS_TARGET)
        .sign()?;

        // Sent with the request but not covered by the signature.
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(ACCEPT_LANGUAGE_EN_US),
        );

        let mut req = http::Request::builder()
            .method(Method::POST)
            .uri(format!("https://{host}{GET_ITEMS_PATH}"))
            .body(Bytes::from(payload))?;
        *req.headers_mut() = headers;

        debug!(
            "sending GetItems for {} item(s) to {host}",
            item_ids.len()
        );
        let resp = self.ctx.http_send(req).await.map_err(|e| {
            if e.kind() == ErrorKind::Transport {
                e
            } else {
                Error::transport(format!("request failed: {e}")).with_source(e)
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = error_body_excerpt(resp.body());
            warn!("GetItems returned {status}: {body}");
            return Err(
                Error::transport(format!("request failed with status {status}: {body}"))
                    .with_status(status),
            );
        }

        match serde_json::from_slice::<Value>(resp.body()) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(Error::decode(format!(
                "expected a JSON object in GetItems response, got {}",
                json_type_name(&other)
            ))),
            Err(e) => Err(Error::decode(format!(
                "failed to decode GetItems response: {e}"
            ))
            .with_source(e)),
        }
    }

    /// Fetch a single item by ASIN.
    ///
    /// Returns `Ok(None)` if the service answered without any item, or if the
    /// first entry of `ItemsResult.Items` is `null`.
    pub async fn get_item(&self, item_id: &str, resources: &[&str]) -> Result<Option<Value>> {
        let mut resp = self.get_items(&[item_id], resources).await?;

        Ok(resp
            .get_mut("ItemsResult")
            .and_then(|v| v.get_mut("Items"))
            .and_then(|v| v.get_mut(0))
            .filter(|v| !v.is_null())
            .map(Value::take))
    }
}

/// Lossy text of an error body, cut to [`MAX_ERROR_BODY_LEN`] bytes.
fn error_body_excerpt(body: &[u8]) -> String {
    if body.len() <= MAX_ERROR_BODY_LEN {
        return String::from_utf8_lossy(body).into_owned();
    }

    let mut excerpt = String::from_utf8_lossy(&body[..MAX_ERROR_BODY_LEN]).into_owned();
    excerpt.push_str("...");
    excerpt
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
