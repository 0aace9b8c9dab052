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

mod get_item;
mod get_items;

use async_trait::async_trait;
use bytes::Bytes;
use http::{Request, Response, StatusCode};
use paapi_core::{Context, Error, HttpSend, Result};
use paapi_product_advertising::{Client, Config};
use std::sync::{Arc, Mutex};

/// Canned reply of the mock transport.
#[derive(Debug, Clone)]
pub enum Reply {
    Status(StatusCode, Bytes),
    Fail(&'static str),
}

/// HttpSend that records every request and answers with a canned reply.
#[derive(Debug, Clone)]
pub struct MockHttpSend {
    reply: Reply,
    requests: Arc<Mutex<Vec<Request<Bytes>>>>,
}

impl MockHttpSend {
    pub fn ok(body: &'static str) -> Self {
        Self::status(StatusCode::OK, body)
    }

    pub fn status(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self::new(Reply::Status(status, body.into()))
    }

    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<Request<Bytes>> {
        self.requests
            .lock()
            .expect("lock poisoned")
            .iter()
            .map(|req| {
                let mut cloned = Request::new(req.body().clone());
                *cloned.method_mut() = req.method().clone();
                *cloned.uri_mut() = req.uri().clone();
                *cloned.headers_mut() = req.headers().clone();
                cloned
            })
            .collect()
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: Request<Bytes>) -> Result<Response<Bytes>> {
        self.requests.lock().expect("lock poisoned").push(req);

        match self.reply.clone() {
            Reply::Status(status, body) => {
                let mut resp = Response::new(body);
                *resp.status_mut() = status;
                Ok(resp)
            }
            Reply::Fail(message) => Err(Error::transport(message)),
        }
    }
}

pub fn init_client(mock: &MockHttpSend, marketplace: &str) -> Client {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_http_send(mock.clone());
    Client::new(
        ctx,
        Config {
            access_key_id: Some("test-access-key".to_string()),
            secret_access_key: Some("test-secret-key".to_string()),
            partner_tag: Some("test-partner-tag".to_string()),
            marketplace: Some(marketplace.to_string()),
        },
    )
    .expect("client config must be valid")
}

pub const ITEMS_RESPONSE: &str = r#"{
    "ItemsResult": {
        "Items": [
            {
                "ASIN": "B07PDHSJ1H",
                "DetailPageURL": "https://www.amazon.co.uk/dp/B07PDHSJ1H",
                "ItemInfo": {
                    "Title": { "DisplayValue": "Test Product Title" },
                    "Features": { "DisplayValues": ["Feature 1", "Feature 2"] }
                },
                "Images": {
                    "Primary": { "Large": { "URL": "https://example.com/image.jpg" } }
                }
            }
        ]
    }
}"#;
