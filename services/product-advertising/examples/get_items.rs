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

use anyhow::Result;
use paapi_core::{Context, OsEnv};
use paapi_http_send_reqwest::ReqwestHttpSend;
use paapi_product_advertising::{Client, Config, Resource};

/// Fetch a few items and print the raw response.
///
/// Reads `PAAPI_ACCESS_KEY_ID`, `PAAPI_SECRET_ACCESS_KEY`, `PAAPI_PARTNER_TAG`
/// and optionally `PAAPI_MARKETPLACE` from the environment or a `.env` file.
/// Item ids may be passed as arguments.
#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv::dotenv();
    let _ = env_logger::builder().try_init();

    let ctx = Context::new()
        .with_env(OsEnv)
        .with_http_send(ReqwestHttpSend::default());
    let config = Config::default().from_env(&ctx);
    let client = Client::new(ctx, config)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let item_ids: Vec<&str> = if args.is_empty() {
        vec!["B07PDHSJ1H"]
    } else {
        args.iter().map(String::as_str).collect()
    };

    println!(
        "Fetching {} item(s) from {}",
        item_ids.len(),
        client.marketplace().host()
    );

    let resources = [
        Resource::ItemInfoTitle.as_str(),
        Resource::ImagesPrimaryLarge.as_str(),
        Resource::OffersListingsPrice.as_str(),
    ];
    let resp = client.get_items(&item_ids, &resources).await?;
    println!("{}", serde_json::to_string_pretty(&resp)?);

    if let Some(item) = client.get_item(item_ids[0], &[]).await? {
        println!("First item title: {}", item["ItemInfo"]["Title"]["DisplayValue"]);
    }
    Ok(())
}
