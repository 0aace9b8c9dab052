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

/// Resource selects which parts of an item GetItems should populate.
///
/// The client never validates selectors against this list; it exists so
/// callers don't have to spell the strings by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// `BrowseNodeInfo.BrowseNodes`
    BrowseNodeInfoBrowseNodes,
    /// `BrowseNodeInfo.BrowseNodes.Ancestor`
    BrowseNodeInfoBrowseNodesAncestor,
    /// `BrowseNodeInfo.BrowseNodes.SalesRank`
    BrowseNodeInfoBrowseNodesSalesRank,
    /// `BrowseNodeInfo.WebsiteSalesRank`
    BrowseNodeInfoWebsiteSalesRank,
    /// `CustomerReviews.Count`
    CustomerReviewsCount,
    /// `CustomerReviews.StarRating`
    CustomerReviewsStarRating,
    /// `Images.Primary.Small`
    ImagesPrimarySmall,
    /// `Images.Primary.Medium`
    ImagesPrimaryMedium,
    /// `Images.Primary.Large`
    ImagesPrimaryLarge,
    /// `Images.Variants.Small`
    ImagesVariantsSmall,
    /// `Images.Variants.Medium`
    ImagesVariantsMedium,
    /// `Images.Variants.Large`
    ImagesVariantsLarge,
    /// `ItemInfo.ByLineInfo`
    ItemInfoByLineInfo,
    /// `ItemInfo.ContentInfo`
    ItemInfoContentInfo,
    /// `ItemInfo.ContentRating`
    ItemInfoContentRating,
    /// `ItemInfo.Classifications`
    ItemInfoClassifications,
    /// `ItemInfo.ExternalIds`
    ItemInfoExternalIds,
    /// `ItemInfo.Features`
    ItemInfoFeatures,
    /// `ItemInfo.ManufactureInfo`
    ItemInfoManufactureInfo,
    /// `ItemInfo.ProductInfo`
    ItemInfoProductInfo,
    /// `ItemInfo.TechnicalInfo`
    ItemInfoTechnicalInfo,
    /// `ItemInfo.Title`
    ItemInfoTitle,
    /// `ItemInfo.TradeInInfo`
    ItemInfoTradeInInfo,
    /// `Offers.Listings.Availability.MaxOrderQuantity`
    OffersListingsAvailabilityMaxOrderQuantity,
    /// `Offers.Listings.Availability.Message`
    OffersListingsAvailabilityMessage,
    /// `Offers.Listings.Availability.MinOrderQuantity`
    OffersListingsAvailabilityMinOrderQuantity,
    /// `Offers.Listings.Availability.Type`
    OffersListingsAvailabilityType,
    /// `Offers.Listings.Condition`
    OffersListingsCondition,
    /// `Offers.Listings.Condition.ConditionNote`
    OffersListingsConditionConditionNote,
    /// `Offers.Listings.Condition.SubCondition`
    OffersListingsConditionSubCondition,
    /// `Offers.Listings.DeliveryInfo.IsAmazonFulfilled`
    OffersListingsDeliveryInfoIsAmazonFulfilled,
    /// `Offers.Listings.DeliveryInfo.IsFreeShippingEligible`
    OffersListingsDeliveryInfoIsFreeShippingEligible,
    /// `Offers.Listings.DeliveryInfo.IsPrimeEligible`
    OffersListingsDeliveryInfoIsPrimeEligible,
    /// `Offers.Listings.DeliveryInfo.ShippingCharges`
    OffersListingsDeliveryInfoShippingCharges,
    /// `Offers.Listings.IsBuyBoxWinner`
    OffersListingsIsBuyBoxWinner,
    /// `Offers.Listings.LoyaltyPoints.Points`
    OffersListingsLoyaltyPointsPoints,
    /// `Offers.Listings.MerchantInfo`
    OffersListingsMerchantInfo,
    /// `Offers.Listings.Price`
    OffersListingsPrice,
    /// `Offers.Listings.ProgramEligibility.IsPrimeExclusive`
    OffersListingsProgramEligibilityIsPrimeExclusive,
    /// `Offers.Listings.ProgramEligibility.IsPrimePantry`
    OffersListingsProgramEligibilityIsPrimePantry,
    /// `Offers.Listings.Promotions`
    OffersListingsPromotions,
    /// `Offers.Listings.SavingBasis`
    OffersListingsSavingBasis,
    /// `Offers.Summaries.HighestPrice`
    OffersSummariesHighestPrice,
    /// `Offers.Summaries.LowestPrice`
    OffersSummariesLowestPrice,
    /// `Offers.Summaries.OfferCount`
    OffersSummariesOfferCount,
    /// `ParentASIN`
    ParentASIN,
    /// `RentalOffers.Listings.Availability.MaxOrderQuantity`
    RentalOffersListingsAvailabilityMaxOrderQuantity,
    /// `RentalOffers.Listings.Availability.Message`
    RentalOffersListingsAvailabilityMessage,
    /// `RentalOffers.Listings.Availability.MinOrderQuantity`
    RentalOffersListingsAvailabilityMinOrderQuantity,
    /// `RentalOffers.Listings.Availability.Type`
    RentalOffersListingsAvailabilityType,
    /// `RentalOffers.Listings.BasePrice`
    RentalOffersListingsBasePrice,
    /// `RentalOffers.Listings.Condition`
    RentalOffersListingsCondition,
    /// `RentalOffers.Listings.Condition.ConditionNote`
    RentalOffersListingsConditionConditionNote,
    /// `RentalOffers.Listings.Condition.SubCondition`
    RentalOffersListingsConditionSubCondition,
    /// `RentalOffers.Listings.DeliveryInfo.IsAmazonFulfilled`
    RentalOffersListingsDeliveryInfoIsAmazonFulfilled,
    /// `RentalOffers.Listings.DeliveryInfo.IsFreeShippingEligible`
    RentalOffersListingsDeliveryInfoIsFreeShippingEligible,
    /// `RentalOffers.Listings.DeliveryInfo.IsPrimeEligible`
    RentalOffersListingsDeliveryInfoIsPrimeEligible,
    /// `RentalOffers.Listings.DeliveryInfo.ShippingCharges`
    RentalOffersListingsDeliveryInfoShippingCharges,
    /// `RentalOffers.Listings.MerchantInfo`
    RentalOffersListingsMerchantInfo,
    /// `OffersV2.Listings.Availability`
    OffersV2ListingsAvailability,
    /// `OffersV2.Listings.Condition`
    OffersV2ListingsCondition,
    /// `OffersV2.Listings.DealDetails`
    OffersV2ListingsDealDetails,
    /// `OffersV2.Listings.IsBuyBoxWinner`
    OffersV2ListingsIsBuyBoxWinner,
    /// `OffersV2.Listings.LoyaltyPoints`
    OffersV2ListingsLoyaltyPoints,
    /// `OffersV2.Listings.MerchantInfo`
    OffersV2ListingsMerchantInfo,
    /// `OffersV2.Listings.Price`
    OffersV2ListingsPrice,
    /// `OffersV2.Listings.Type`
    OffersV2ListingsType,
}

impl Resource {
    /// All resources accepted by GetItems.
    pub const ALL: [Resource; 67] = [
        Resource::BrowseNodeInfoBrowseNodes,
        Resource::BrowseNodeInfoBrowseNodesAncestor,
        Resource::BrowseNodeInfoBrowseNodesSalesRank,
        Resource::BrowseNodeInfoWebsiteSalesRank,
        Resource::CustomerReviewsCount,
        Resource::CustomerReviewsStarRating,
        Resource::ImagesPrimarySmall,
        Resource::ImagesPrimaryMedium,
        Resource::ImagesPrimaryLarge,
        Resource::ImagesVariantsSmall,
        Resource::ImagesVariantsMedium,
        Resource::ImagesVariantsLarge,
        Resource::ItemInfoByLineInfo,
        Resource::ItemInfoContentInfo,
        Resource::ItemInfoContentRating,
        Resource::ItemInfoClassifications,
        Resource::ItemInfoExternalIds,
        Resource::ItemInfoFeatures,
        Resource::ItemInfoManufactureInfo,
        Resource::ItemInfoProductInfo,
        Resource::ItemInfoTechnicalInfo,
        Resource::ItemInfoTitle,
        Resource::ItemInfoTradeInInfo,
        Resource::OffersListingsAvailabilityMaxOrderQuantity,
        Resource::OffersListingsAvailabilityMessage,
        Resource::OffersListingsAvailabilityMinOrderQuantity,
        Resource::OffersListingsAvailabilityType,
        Resource::OffersListingsCondition,
        Resource::OffersListingsConditionConditionNote,
        Resource::OffersListingsConditionSubCondition,
        Resource::OffersListingsDeliveryInfoIsAmazonFulfilled,
        Resource::OffersListingsDeliveryInfoIsFreeShippingEligible,
        Resource::OffersListingsDeliveryInfoIsPrimeEligible,
        Resource::OffersListingsDeliveryInfoShippingCharges,
        Resource::OffersListingsIsBuyBoxWinner,
        Resource::OffersListingsLoyaltyPointsPoints,
        Resource::OffersListingsMerchantInfo,
        Resource::OffersListingsPrice,
        Resource::OffersListingsProgramEligibilityIsPrimeExclusive,
        Resource::OffersListingsProgramEligibilityIsPrimePantry,
        Resource::OffersListingsPromotions,
        Resource::OffersListingsSavingBasis,
        Resource::OffersSummariesHighestPrice,
        Resource::OffersSummariesLowestPrice,
        Resource::OffersSummariesOfferCount,
        Resource::ParentASIN,
        Resource::RentalOffersListingsAvailabilityMaxOrderQuantity,
        Resource::RentalOffersListingsAvailabilityMessage,
        Resource::RentalOffersListingsAvailabilityMinOrderQuantity,
        Resource::RentalOffersListingsAvailabilityType,
        Resource::RentalOffersListingsBasePrice,
        Resource::RentalOffersListingsCondition,
        Resource::RentalOffersListingsConditionConditionNote,
        Resource::RentalOffersListingsConditionSubCondition,
        Resource::RentalOffersListingsDeliveryInfoIsAmazonFulfilled,
        Resource::RentalOffersListingsDeliveryInfoIsFreeShippingEligible,
        Resource::RentalOffersListingsDeliveryInfoIsPrimeEligible,
        Resource::RentalOffersListingsDeliveryInfoShippingCharges,
        Resource::RentalOffersListingsMerchantInfo,
        Resource::OffersV2ListingsAvailability,
        Resource::OffersV2ListingsCondition,
        Resource::OffersV2ListingsDealDetails,
        Resource::OffersV2ListingsIsBuyBoxWinner,
        Resource::OffersV2ListingsLoyaltyPoints,
        Resource::OffersV2ListingsMerchantInfo,
        Resource::OffersV2ListingsPrice,
        Resource::OffersV2ListingsType,
    ];

    /// Selector string sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Resource::BrowseNodeInfoBrowseNodes => "BrowseNodeInfo.BrowseNodes",
            Resource::BrowseNodeInfoBrowseNodesAncestor => "BrowseNodeInfo.BrowseNodes.Ancestor",
            Resource::BrowseNodeInfoBrowseNodesSalesRank => "BrowseNodeInfo.BrowseNodes.SalesRank",
            Resource::BrowseNodeInfoWebsiteSalesRank => "BrowseNodeInfo.WebsiteSalesRank",
            Resource::CustomerReviewsCount => "CustomerReviews.Count",
            Resource::CustomerReviewsStarRating => "CustomerReviews.StarRating",
            Resource::ImagesPrimarySmall => "Images.Primary.Small",
            Resource::ImagesPrimaryMedium => "Images.Primary.Medium",
            Resource::ImagesPrimaryLarge => "Images.Primary.Large",
            Resource::ImagesVariantsSmall => "Images.Variants.Small",
            Resource::ImagesVariantsMedium => "Images.Variants.Medium",
            Resource::ImagesVariantsLarge => "Images.Variants.Large",
            Resource::ItemInfoByLineInfo => "ItemInfo.ByLineInfo",
            Resource::ItemInfoContentInfo => "ItemInfo.ContentInfo",
            Resource::ItemInfoContentRating => "ItemInfo.ContentRating",
            Resource::ItemInfoClassifications => "ItemInfo.Classifications",
            Resource::ItemInfoExternalIds => "ItemInfo.ExternalIds",
            Resource::ItemInfoFeatures => "ItemInfo.Features",
            Resource::ItemInfoManufactureInfo => "ItemInfo.ManufactureInfo",
            Resource::ItemInfoProductInfo => "ItemInfo.ProductInfo",
            Resource::ItemInfoTechnicalInfo => "ItemInfo.TechnicalInfo",
            Resource::ItemInfoTitle => "ItemInfo.Title",
            Resource::ItemInfoTradeInInfo => "ItemInfo.TradeInInfo",
            Resource::OffersListingsAvailabilityMaxOrderQuantity => {
                "Offers.Listings.Availability.MaxOrderQuantity"
            }
            Resource::OffersListingsAvailabilityMessage => "Offers.Listings.Availability.Message",
            Resource::OffersListingsAvailabilityMinOrderQuantity => {
                "Offers.Listings.Availability.MinOrderQuantity"
            }
            Resource::OffersListingsAvailabilityType => "Offers.Listings.Availability.Type",
            Resource::OffersListingsCondition => "Offers.Listings.Condition",
            Resource::OffersListingsConditionConditionNote => {
                "Offers.Listings.Condition.ConditionNote"
            }
            Resource::OffersListingsConditionSubCondition => {
                "Offers.Listings.Condition.SubCondition"
            }
            Resource::OffersListingsDeliveryInfoIsAmazonFulfilled => {
                "Offers.Listings.DeliveryInfo.IsAmazonFulfilled"
            }
            Resource::OffersListingsDeliveryInfoIsFreeShippingEligible => {
                "Offers.Listings.DeliveryInfo.IsFreeShippingEligible"
            }
            Resource::OffersListingsDeliveryInfoIsPrimeEligible => {
                "Offers.Listings.DeliveryInfo.IsPrimeEligible"
            }
            Resource::OffersListingsDeliveryInfoShippingCharges => {
                "Offers.Listings.DeliveryInfo.ShippingCharges"
            }
            Resource::OffersListingsIsBuyBoxWinner => "Offers.Listings.IsBuyBoxWinner",
            Resource::OffersListingsLoyaltyPointsPoints => "Offers.Listings.LoyaltyPoints.Points",
            Resource::OffersListingsMerchantInfo => "Offers.Listings.MerchantInfo",
            Resource::OffersListingsPrice => "Offers.Listings.Price",
            Resource::OffersListingsProgramEligibilityIsPrimeExclusive => {
                "Offers.Listings.ProgramEligibility.IsPrimeExclusive"
            }
            Resource::OffersListingsProgramEligibilityIsPrimePantry => {
                "Offers.Listings.ProgramEligibility.IsPrimePantry"
            }
            Resource::OffersListingsPromotions => "Offers.Listings.Promotions",
            Resource::OffersListingsSavingBasis => "Offers.Listings.SavingBasis",
            Resource::OffersSummariesHighestPrice => "Offers.Summaries.HighestPrice",
            Resource::OffersSummariesLowestPrice => "Offers.Summaries.LowestPrice",
            Resource::OffersSummariesOfferCount => "Offers.Summaries.OfferCount",
            Resource::ParentASIN => "ParentASIN",
            Resource::RentalOffersListingsAvailabilityMaxOrderQuantity => {
                "RentalOffers.Listings.Availability.MaxOrderQuantity"
            }
            Resource::RentalOffersListingsAvailabilityMessage => {
                "RentalOffers.Listings.Availability.Message"
            }
            Resource::RentalOffersListingsAvailabilityMinOrderQuantity => {
                "RentalOffers.Listings.Availability.MinOrderQuantity"
            }
            Resource::RentalOffersListingsAvailabilityType => {
                "RentalOffers.Listings.Availability.Type"
            }
            Resource::RentalOffersListingsBasePrice => "RentalOffers.Listings.BasePrice",
            Resource::RentalOffersListingsCondition => "RentalOffers.Listings.Condition",
            Resource::RentalOffersListingsConditionConditionNote => {
                "RentalOffers.Listings.Condition.ConditionNote"
            }
            Resource::RentalOffersListingsConditionSubCondition => {
                "RentalOffers.Listings.Condition.SubCondition"
            }
            Resource::RentalOffersListingsDeliveryInfoIsAmazonFulfilled => {
                "RentalOffers.Listings.DeliveryInfo.IsAmazonFulfilled"
            }
            Resource::RentalOffersListingsDeliveryInfoIsFreeShippingEligible => {
                "RentalOffers.Listings.DeliveryInfo.IsFreeShippingEligible"
            }
            Resource::RentalOffersListingsDeliveryInfoIsPrimeEligible => {
                "RentalOffers.Listings.DeliveryInfo.IsPrimeEligible"
            }
            Resource::RentalOffersListingsDeliveryInfoShippingCharges => {
                "RentalOffers.Listings.DeliveryInfo.ShippingCharges"
            }
            Resource::RentalOffersListingsMerchantInfo => "RentalOffers.Listings.MerchantInfo",
            Resource::OffersV2ListingsAvailability => "OffersV2.Listings.Availability",
            Resource::OffersV2ListingsCondition => "OffersV2.Listings.Condition",
            Resource::OffersV2ListingsDealDetails => "OffersV2.Listings.DealDetails",
            Resource::OffersV2ListingsIsBuyBoxWinner => "OffersV2.Listings.IsBuyBoxWinner",
            Resource::OffersV2ListingsLoyaltyPoints => "OffersV2.Listings.LoyaltyPoints",
            Resource::OffersV2ListingsMerchantInfo => "OffersV2.Listings.MerchantInfo",
            Resource::OffersV2ListingsPrice => "OffersV2.Listings.Price",
            Resource::OffersV2ListingsType => "OffersV2.Listings.Type",
        }
    }
}

impl FromStr for Resource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| Error::request_invalid(format!("unknown resource: {s}")))
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Resource {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
