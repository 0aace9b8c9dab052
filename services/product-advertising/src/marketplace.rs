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

use paapi_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Marketplace served by the Product Advertising API.
///
/// Each marketplace resolves to the API host requests are sent to and the
/// region code requests are signed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Marketplace {
    /// `AU`
    Australia,
    /// `BR`
    Brazil,
    /// `CA`
    Canada,
    /// `FR`
    France,
    /// `DE`
    Germany,
    /// `IN`
    India,
    /// `IT`
    Italy,
    /// `JP`
    Japan,
    /// `MX`
    Mexico,
    /// `NL`
    Netherlands,
    /// `SG`
    Singapore,
    /// `SA`
    SaudiArabia,
    /// `ES`
    Spain,
    /// `SE`
    Sweden,
    /// `TR`
    Turkey,
    /// `AE`
    UnitedArabEmirates,
    /// `UK`
    UnitedKingdom,
    /// `US`
    #[default]
    UnitedStates,
}

impl Marketplace {
    /// All supported marketplaces.
    pub const ALL: [Marketplace; 18] = [
        Marketplace::Australia,
        Marketplace::Brazil,
        Marketplace::Canada,
        Marketplace::France,
        Marketplace::Germany,
        Marketplace::India,
        Marketplace::Italy,
        Marketplace::Japan,
        Marketplace::Mexico,
        Marketplace::Netherlands,
        Marketplace::Singapore,
        Marketplace::SaudiArabia,
        Marketplace::Spain,
        Marketplace::Sweden,
        Marketplace::Turkey,
        Marketplace::UnitedArabEmirates,
        Marketplace::UnitedKingdom,
        Marketplace::UnitedStates,
    ];

    /// Country code used to select this marketplace.
    pub fn code(self) -> &'static str {
        match self {
            Marketplace::Australia => "AU",
            Marketplace::Brazil => "BR",
            Marketplace::Canada => "CA",
            Marketplace::France => "FR",
            Marketplace::Germany => "DE",
            Marketplace::India => "IN",
            Marketplace::Italy => "IT",
            Marketplace::Japan => "JP",
            Marketplace::Mexico => "MX",
            Marketplace::Netherlands => "NL",
            Marketplace::Singapore => "SG",
            Marketplace::SaudiArabia => "SA",
            Marketplace::Spain => "ES",
            Marketplace::Sweden => "SE",
            Marketplace::Turkey => "TR",
            Marketplace::UnitedArabEmirates => "AE",
            Marketplace::UnitedKingdom => "UK",
            Marketplace::UnitedStates => "US",
        }
    }

    /// API host for this marketplace.
    pub fn host(self) -> &'static str {
        match self {
            Marketplace::Australia => "webservices.amazon.com.au",
            Marketplace::Brazil => "webservices.amazon.com.br",
            Marketplace::Canada => "webservices.amazon.ca",
            Marketplace::France => "webservices.amazon.fr",
            Marketplace::Germany => "webservices.amazon.de",
            Marketplace::India => "webservices.amazon.in",
            Marketplace::Italy => "webservices.amazon.it",
            Marketplace::Japan => "webservices.amazon.co.jp",
            Marketplace::Mexico => "webservices.amazon.com.mx",
            Marketplace::Netherlands => "webservices.amazon.nl",
            Marketplace::Singapore => "webservices.amazon.sg",
            Marketplace::SaudiArabia => "webservices.amazon.sa",
            Marketplace::Spain => "webservices.amazon.es",
            Marketplace::Sweden => "webservices.amazon.se",
            Marketplace::Turkey => "webservices.amazon.com.tr",
            Marketplace::UnitedArabEmirates => "webservices.amazon.ae",
            Marketplace::UnitedKingdom => "webservices.amazon.co.uk",
            Marketplace::UnitedStates => "webservices.amazon.com",
        }
    }

    /// Signing region for this marketplace.
    pub fn region(self) -> &'static str {
        match self {
            Marketplace::Australia | Marketplace::Japan | Marketplace::Singapore => "us-west-2",
            Marketplace::Brazil
            | Marketplace::Canada
            | Marketplace::Mexico
            | Marketplace::UnitedStates => "us-east-1",
            Marketplace::France
            | Marketplace::Germany
            | Marketplace::India
            | Marketplace::Italy
            | Marketplace::Netherlands
            | Marketplace::SaudiArabia
            | Marketplace::Spain
            | Marketplace::Sweden
            | Marketplace::Turkey
            | Marketplace::UnitedArabEmirates
            | Marketplace::UnitedKingdom => "eu-west-1",
        }
    }

    /// Check if a country code names a supported marketplace.
    pub fn is_valid(code: &str) -> bool {
        Self::ALL.iter().any(|m| m.code() == code)
    }
}

impl FromStr for Marketplace {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.code() == code)
            .ok_or_else(|| Error::config_invalid(format!("unsupported marketplace code: {code}")))
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
