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

//! Reqwest-backed [`HttpSend`] for paapi.

use async_trait::async_trait;
use bytes::Bytes;
use log::debug;
use paapi_core::{Error, HttpSend, Result};
use reqwest::{Client, Request};
use std::time::Duration;

/// Timeout applied by [`ReqwestHttpSend::default`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HttpSend implementation over a [`reqwest::Client`].
///
/// Failures to complete the exchange are reported as
/// [`ErrorKind::Transport`](paapi_core::ErrorKind::Transport). Responses are
/// returned as-is whatever their status.
#[derive(Debug)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl Default for ReqwestHttpSend {
    fn default() -> Self {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client }
    }
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req).map_err(|e| {
            Error::request_invalid("failed to convert request for reqwest").with_source(e)
        })?;
        debug!("sending {} {}", req.method(), req.url());

        let resp = self.client.execute(req).await.map_err(|e| {
            Error::transport(format!("failed to send request: {e}")).with_source(e)
        })?;

        let status = resp.status();
        let version = resp.version();
        let headers = resp.headers().clone();
        let body = resp.bytes().await.map_err(|e| {
            Error::transport(format!("failed to read response body: {e}"))
                .with_status(status)
                .with_source(e)
        })?;

        let mut out = http::Response::new(body);
        *out.status_mut() = status;
        *out.version_mut() = version;
        *out.headers_mut() = headers;
        Ok(out)
    }
}
