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

use super::{init_client, MockHttpSend, ITEMS_RESPONSE};
use anyhow::Result;
use http::StatusCode;
use paapi_core::ErrorKind;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[tokio::test]
async fn test_get_item_found() -> Result<()> {
    let mock = MockHttpSend::ok(ITEMS_RESPONSE);
    let client = init_client(&mock, "US");

    let item = client
        .get_item("B07PDHSJ1H", &[])
        .await?
        .expect("item must be found");

    assert_eq!(item["ASIN"], "B07PDHSJ1H");
    assert_eq!(
        item["ItemInfo"]["Title"]["DisplayValue"],
        "Test Product Title"
    );

    let body: Value = serde_json::from_slice(mock.requests()[0].body())?;
    assert_eq!(body["ItemIds"], json!(["B07PDHSJ1H"]));
    Ok(())
}

#[tokio::test]
async fn test_get_item_returns_first_of_many() -> Result<()> {
    let mock = MockHttpSend::ok(
        r#"{"ItemsResult":{"Items":[{"ASIN":"B07PDHSJ1H"},{"ASIN":"B00X4WHP5E"}]}}"#,
    );
    let client = init_client(&mock, "US");

    let item = client.get_item("B07PDHSJ1H", &[]).await?;
    assert_eq!(item, Some(json!({"ASIN": "B07PDHSJ1H"})));
    Ok(())
}

#[tokio::test]
async fn test_get_item_not_found() -> Result<()> {
    for body in [
        r#"{"ItemsResult":{"Items":[]}}"#,
        r#"{"ItemsResult":{"Items":[null]}}"#,
        r#"{"ItemsResult":{"Items":null}}"#,
        r#"{"ItemsResult":{}}"#,
        r#"{"Errors":[{"Code":"ItemNotAccessible"}]}"#,
        "{}",
    ] {
        let mock = MockHttpSend::ok(body);
        let client = init_client(&mock, "US");

        let item = client.get_item("B07PDHSJ1H", &[]).await?;
        assert_eq!(item, None, "body {body} must yield no item");
    }
    Ok(())
}

#[tokio::test]
async fn test_get_item_invalid_json() {
    let mock = MockHttpSend::ok("invalid-json");
    let client = init_client(&mock, "US");

    let err = client
        .get_item("B07PDHSJ1H", &[])
        .await
        .expect_err("invalid json must fail");
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn test_get_item_invalid_id() {
    let mock = MockHttpSend::ok(ITEMS_RESPONSE);
    let client = init_client(&mock, "US");

    let err = client
        .get_item("invalid-asin-format", &[])
        .await
        .expect_err("item id must be rejected");
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_get_item_server_error() {
    let mock = MockHttpSend::status(StatusCode::SERVICE_UNAVAILABLE, "busy");
    let client = init_client(&mock, "US");

    let err = client
        .get_item("B07PDHSJ1H", &[])
        .await
        .expect_err("server error must fail");
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
}
