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

use super::{init_client, MockHttpSend, Reply, ITEMS_RESPONSE};
use anyhow::Result;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{Method, StatusCode};
use paapi_core::{Context, ErrorKind};
use paapi_product_advertising::{Client, Config, Resource};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

#[tokio::test]
async fn test_get_items_returns_response_unchanged() -> Result<()> {
    let mock = MockHttpSend::ok(ITEMS_RESPONSE);
    let client = init_client(&mock, "US");

    let resp = client
        .get_items(&["B07PDHSJ1H"], &[Resource::ItemInfoTitle.as_str()])
        .await?;

    let expected: Value = serde_json::from_str(ITEMS_RESPONSE)?;
    assert_eq!(Value::Object(resp), expected);
    Ok(())
}

#[tokio::test]
async fn test_get_items_request_shape() -> Result<()> {
    let mock = MockHttpSend::ok(ITEMS_RESPONSE);
    let client = init_client(&mock, "UK");

    client
        .get_items(
            &["B07PDHSJ1H", "B00X4WHP5E"],
            &["ItemInfo.Title", "Offers.Listings.Price"],
        )
        .await?;

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];

    assert_eq!(req.method(), Method::POST);
    assert_eq!(
        req.uri().to_string(),
        "https://webservices.amazon.co.uk/paapi5/getitems"
    );

    let body: Value = serde_json::from_slice(req.body())?;
    assert_eq!(
        body,
        json!({
            "ItemIds": ["B07PDHSJ1H", "B00X4WHP5E"],
            "Resources": ["ItemInfo.Title", "Offers.Listings.Price"],
            "PartnerTag": "test-partner-tag",
            "PartnerType": "Associates",
        })
    );

    let headers = req.headers();
    assert_eq!(headers["host"], "webservices.amazon.co.uk");
    assert_eq!(headers["content-encoding"], "amz-1.0");
    assert_eq!(
        headers["x-amz-target"],
        "com.amazon.paapi5.v1.ProductAdvertisingAPIv1.GetItems"
    );
    assert_eq!(headers[CONTENT_TYPE], "application/json; charset=UTF-8");
    assert_eq!(headers["accept"], "application/json, text/javascript");
    assert_eq!(headers["accept-language"], "en-US");

    let date = headers["x-amz-date"].to_str()?;
    assert_eq!(date.len(), "20240115T103000Z".len());

    let auth = headers[AUTHORIZATION].to_str()?;
    let scope = format!(
        "Credential=test-access-key/{}/eu-west-1/ProductAdvertisingAPI/aws4_request",
        &date[..8]
    );
    assert!(auth.starts_with("AWS4-HMAC-SHA256 "), "got {auth}");
    assert!(auth.contains(&scope), "got {auth}");
    // Transport-only headers are not part of the signature.
    assert!(
        auth.contains("SignedHeaders=content-encoding;host;x-amz-date;x-amz-target, "),
        "got {auth}"
    );
    Ok(())
}

#[tokio::test]
async fn test_get_items_default_resource() -> Result<()> {
    let mock = MockHttpSend::ok(ITEMS_RESPONSE);
    let client = init_client(&mock, "US");

    client.get_items(&["B07PDHSJ1H"], &[]).await?;

    let body: Value = serde_json::from_slice(mock.requests()[0].body())?;
    assert_eq!(body["Resources"], json!(["ItemInfo.Title"]));
    assert!(body.get("Marketplace").is_none());
    Ok(())
}

#[tokio::test]
async fn test_get_items_passes_duplicate_resources_through() -> Result<()> {
    let mock = MockHttpSend::ok(ITEMS_RESPONSE);
    let client = init_client(&mock, "US");

    client
        .get_items(&["B07PDHSJ1H"], &["ItemInfo.Title", "ItemInfo.Title"])
        .await?;

    let body: Value = serde_json::from_slice(mock.requests()[0].body())?;
    assert_eq!(body["Resources"], json!(["ItemInfo.Title", "ItemInfo.Title"]));
    Ok(())
}

#[test_case(&[]; "empty")]
#[test_case(&["B07PDHSJ1H"; 11]; "too many")]
#[test_case(&["invalid-asin-format"]; "malformed")]
#[tokio::test]
async fn test_get_items_rejects_item_ids(item_ids: &[&str]) {
    let mock = MockHttpSend::ok(ITEMS_RESPONSE);
    let client = init_client(&mock, "US");

    let err = client
        .get_items(item_ids, &[])
        .await
        .expect_err("item ids must be rejected");

    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(err.is_validation_error());
    assert!(mock.requests().is_empty(), "no request must be sent");
}

#[tokio::test]
async fn test_get_items_accepts_ten_item_ids() -> Result<()> {
    let mock = MockHttpSend::ok(ITEMS_RESPONSE);
    let client = init_client(&mock, "US");

    client.get_items(&["B07PDHSJ1H"; 10], &[]).await?;
    assert_eq!(mock.requests().len(), 1);
    Ok(())
}

#[test_case(StatusCode::BAD_REQUEST; "client error")]
#[test_case(StatusCode::TOO_MANY_REQUESTS; "throttled")]
#[test_case(StatusCode::INTERNAL_SERVER_ERROR; "server error")]
#[tokio::test]
async fn test_get_items_error_status(status: StatusCode) {
    let mock = MockHttpSend::status(
        status,
        r#"{"Errors":[{"Code":"InvalidParameterValue","Message":"bad"}]}"#,
    );
    let client = init_client(&mock, "US");

    let err = client
        .get_items(&["B07PDHSJ1H"], &[])
        .await
        .expect_err("error status must fail");

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), Some(status));
    assert!(err.to_string().contains("InvalidParameterValue"));
}

#[tokio::test]
async fn test_get_items_error_status_truncates_body() {
    let body = format!("<html>{}</html>", "x".repeat(4096));
    let mock = MockHttpSend::status(StatusCode::BAD_GATEWAY, body);
    let client = init_client(&mock, "US");

    let err = client
        .get_items(&["B07PDHSJ1H"], &[])
        .await
        .expect_err("error status must fail");

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
    let message = err.to_string();
    assert!(message.contains("<html>xxx"), "got {message}");
    assert!(message.ends_with("..."), "got {message}");
    assert!(!message.contains("</html>"));
    assert!(message.len() < 1024, "message has {} bytes", message.len());
}

#[tokio::test]
async fn test_get_items_connection_failure() {
    let mock = MockHttpSend::new(Reply::Fail("connection refused"));
    let client = init_client(&mock, "US");

    let err = client
        .get_items(&["B07PDHSJ1H"], &[])
        .await
        .expect_err("transport failure must surface");

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), None);
    assert_eq!(err.to_string(), "connection refused");
}

#[tokio::test]
async fn test_get_items_without_http_client() {
    let client = Client::new(
        Context::new(),
        Config {
            access_key_id: Some("test-access-key".to_string()),
            secret_access_key: Some("test-secret-key".to_string()),
            partner_tag: Some("test-partner-tag".to_string()),
            marketplace: None,
        },
    )
    .expect("client config must be valid");

    let err = client
        .get_items(&["B07PDHSJ1H"], &[])
        .await
        .expect_err("noop transport must fail");
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[test_case("invalid-json"; "not json")]
#[test_case("[1, 2, 3]"; "array")]
#[test_case("\"ItemsResult\""; "string")]
#[test_case(""; "empty body")]
#[tokio::test]
async fn test_get_items_undecodable_response(body: &'static str) {
    let mock = MockHttpSend::ok(body);
    let client = init_client(&mock, "US");

    let err = client
        .get_items(&["B07PDHSJ1H"], &[])
        .await
        .expect_err("body must be rejected");

    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(err.status(), None);
}
