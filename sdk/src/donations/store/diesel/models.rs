// Copyright 2018-2021 Cargill Incorporated
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The structs in this file are the rust representations of the rows stored in the four
//! donation tables. The order of the fields in each struct must match the corresponding table
//! declaration in the schema.rs file in this module.
//!
//! Conversions between these models and their donation counterparts are provided as well.

use std::convert::TryFrom;

use chrono::{NaiveDate, NaiveDateTime};

use crate::donations::fields::ClaimStatus;
use crate::donations::store::{Claim, DonationStoreError, FoodListing, Provider, Receiver};
use crate::error::InternalError;

use super::schema::{claims, food_listings, providers, receivers};

#[derive(Insertable, Queryable, PartialEq, Debug)]
#[table_name = "providers"]
pub struct ProviderModel {
    pub provider_id: i64,
    pub name: String,
    pub provider_type: String,
    pub address: String,
    pub city: String,
    pub contact: String,
}

#[derive(Insertable, Queryable, PartialEq, Debug)]
#[table_name = "receivers"]
pub struct ReceiverModel {
    pub receiver_id: i64,
    pub name: String,
    pub receiver_type: String,
    pub city: String,
    pub contact: String,
}

#[derive(Insertable, Queryable, PartialEq, Debug)]
#[table_name = "food_listings"]
pub struct FoodListingModel {
    pub food_id: i64,
    pub food_name: String,
    pub quantity: i64,
    pub expiry_date: NaiveDate,
    pub provider_id: i64,
    pub provider_type: String,
    pub location: String,
    pub food_type: String,
    pub meal_type: String,
}

#[derive(Insertable, Queryable, PartialEq, Debug)]
#[table_name = "claims"]
pub struct ClaimModel {
    pub claim_id: i64,
    pub food_id: i64,
    pub receiver_id: i64,
    pub status: String,
    pub timestamp: NaiveDateTime,
}

impl From<Provider> for ProviderModel {
    fn from(provider: Provider) -> Self {
        Self {
            provider_id: provider.provider_id,
            name: provider.name,
            provider_type: provider.provider_type,
            address: provider.address,
            city: provider.city,
            contact: provider.contact,
        }
    }
}

impl From<ProviderModel> for Provider {
    fn from(model: ProviderModel) -> Self {
        Self {
            provider_id: model.provider_id,
            name: model.name,
            provider_type: model.provider_type,
            address: model.address,
            city: model.city,
            contact: model.contact,
        }
    }
}

impl From<Receiver> for ReceiverModel {
    fn from(receiver: Receiver) -> Self {
        Self {
            receiver_id: receiver.receiver_id,
            name: receiver.name,
            receiver_type: receiver.receiver_type,
            city: receiver.city,
            contact: receiver.contact,
        }
    }
}

impl From<ReceiverModel> for Receiver {
    fn from(model: ReceiverModel) -> Self {
        Self {
            receiver_id: model.receiver_id,
            name: model.name,
            receiver_type: model.receiver_type,
            city: model.city,
            contact: model.contact,
        }
    }
}

impl From<FoodListing> for FoodListingModel {
    fn from(listing: FoodListing) -> Self {
        Self {
            food_id: listing.food_id,
            food_name: listing.food_name,
            quantity: listing.quantity,
            expiry_date: listing.expiry_date,
            provider_id: listing.provider_id,
            provider_type: listing.provider_type,
            location: listing.location,
            food_type: listing.food_type,
            meal_type: listing.meal_type,
        }
    }
}

impl From<FoodListingModel> for FoodListing {
    fn from(model: FoodListingModel) -> Self {
        Self {
            food_id: model.food_id,
            food_name: model.food_name,
            quantity: model.quantity,
            expiry_date: model.expiry_date,
            provider_id: model.provider_id,
            provider_type: model.provider_type,
            location: model.location,
            food_type: model.food_type,
            meal_type: model.meal_type,
        }
    }
}

impl From<Claim> for ClaimModel {
    fn from(claim: Claim) -> Self {
        Self {
            claim_id: claim.claim_id,
            food_id: claim.food_id,
            receiver_id: claim.receiver_id,
            status: claim.status.as_str().to_string(),
            timestamp: claim.timestamp,
        }
    }
}

impl TryFrom<ClaimModel> for Claim {
    type Error = DonationStoreError;

    fn try_from(model: ClaimModel) -> Result<Self, Self::Error> {
        // rows written outside this crate may carry any text
        let status = model.status.parse::<ClaimStatus>().map_err(|err| {
            DonationStoreError::InternalError(InternalError::from_source_with_prefix(
                Box::new(err),
                format!("Claim {} has an unreadable status", model.claim_id),
            ))
        })?;

        Ok(Self {
            claim_id: model.claim_id,
            food_id: model.food_id,
            receiver_id: model.receiver_id,
            status,
            timestamp: model.timestamp,
        })
    }
}
