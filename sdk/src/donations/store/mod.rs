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

#[cfg(feature = "diesel")]
pub mod diesel;
mod error;

use chrono::{NaiveDate, NaiveDateTime};

pub use error::DonationStoreError;

use super::fields::{ClaimStatus, Entity, FieldUpdate};

/// An organization or person offering surplus food
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Provider {
    pub provider_id: i64,
    pub name: String,
    pub provider_type: String,
    pub address: String,
    pub city: String,
    pub contact: String,
}

/// An organization or person claiming listed food
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Receiver {
    pub receiver_id: i64,
    pub name: String,
    pub receiver_type: String,
    pub city: String,
    pub contact: String,
}

/// A quantity of one food item made available by a provider
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FoodListing {
    pub food_id: i64,
    pub food_name: String,
    pub quantity: i64,
    pub expiry_date: NaiveDate,
    // Not checked against the providers table.
    pub provider_id: i64,
    pub provider_type: String,
    pub location: String,
    pub food_type: String,
    pub meal_type: String,
}

/// A receiver's request against a food listing
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Claim {
    pub claim_id: i64,
    pub food_id: i64,
    pub receiver_id: i64,
    pub status: ClaimStatus,
    pub timestamp: NaiveDateTime,
}

/// A fully validated row of any of the four tables
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Record {
    Provider(Provider),
    Receiver(Receiver),
    FoodListing(FoodListing),
    Claim(Claim),
}

impl Record {
    pub fn entity(&self) -> Entity {
        match self {
            Record::Provider(_) => Entity::Provider,
            Record::Receiver(_) => Entity::Receiver,
            Record::FoodListing(_) => Entity::FoodListing,
            Record::Claim(_) => Entity::Claim,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Record::Provider(provider) => provider.provider_id,
            Record::Receiver(receiver) => receiver.receiver_id,
            Record::FoodListing(listing) => listing.food_id,
            Record::Claim(claim) => claim.claim_id,
        }
    }
}

pub trait DonationStore: Send + Sync {
    /// Adds a record to the underlying storage
    ///
    /// # Arguments
    ///
    ///  * `record` - The record to be added; its ID is supplied by the operator
    fn add_record(&self, record: Record) -> Result<(), DonationStoreError>;

    /// Sets one column of the row with the given ID
    ///
    /// Returns `DonationStoreError::NotFoundError` if no row has that ID.
    ///
    /// # Arguments
    ///
    ///  * `id` - The primary key of the row to update
    ///  * `update` - The column and its new value
    fn update_record(&self, id: i64, update: FieldUpdate) -> Result<(), DonationStoreError>;

    /// Deletes the row with the given ID, returning the number of rows removed
    ///
    /// # Arguments
    ///
    ///  * `entity` - The table to delete from
    ///  * `id` - The primary key of the row to delete
    fn delete_record(&self, entity: Entity, id: i64) -> Result<usize, DonationStoreError>;

    /// Lists providers, optionally only those in `city`
    fn list_providers(&self, city: Option<&str>) -> Result<Vec<Provider>, DonationStoreError>;

    /// Fetches a provider by ID
    fn fetch_provider(&self, provider_id: i64) -> Result<Option<Provider>, DonationStoreError>;

    /// Lists receivers, optionally only those in `city`
    fn list_receivers(&self, city: Option<&str>) -> Result<Vec<Receiver>, DonationStoreError>;

    /// Fetches a receiver by ID
    fn fetch_receiver(&self, receiver_id: i64) -> Result<Option<Receiver>, DonationStoreError>;

    fn list_food_listings(&self) -> Result<Vec<FoodListing>, DonationStoreError>;

    fn fetch_food_listing(&self, food_id: i64) -> Result<Option<FoodListing>, DonationStoreError>;

    fn list_claims(&self) -> Result<Vec<Claim>, DonationStoreError>;

    fn fetch_claim(&self, claim_id: i64) -> Result<Option<Claim>, DonationStoreError>;
}

impl<DS> DonationStore for Box<DS>
where
    DS: DonationStore + ?Sized,
{
    fn add_record(&self, record: Record) -> Result<(), DonationStoreError> {
        (**self).add_record(record)
    }

    fn update_record(&self, id: i64, update: FieldUpdate) -> Result<(), DonationStoreError> {
        (**self).update_record(id, update)
    }

    fn delete_record(&self, entity: Entity, id: i64) -> Result<usize, DonationStoreError> {
        (**self).delete_record(entity, id)
    }

    fn list_providers(&self, city: Option<&str>) -> Result<Vec<Provider>, DonationStoreError> {
        (**self).list_providers(city)
    }

    fn fetch_provider(&self, provider_id: i64) -> Result<Option<Provider>, DonationStoreError> {
        (**self).fetch_provider(provider_id)
    }

    fn list_receivers(&self, city: Option<&str>) -> Result<Vec<Receiver>, DonationStoreError> {
        (**self).list_receivers(city)
    }

    fn fetch_receiver(&self, receiver_id: i64) -> Result<Option<Receiver>, DonationStoreError> {
        (**self).fetch_receiver(receiver_id)
    }

    fn list_food_listings(&self) -> Result<Vec<FoodListing>, DonationStoreError> {
        (**self).list_food_listings()
    }

    fn fetch_food_listing(&self, food_id: i64) -> Result<Option<FoodListing>, DonationStoreError> {
        (**self).fetch_food_listing(food_id)
    }

    fn list_claims(&self) -> Result<Vec<Claim>, DonationStoreError> {
        (**self).list_claims()
    }

    fn fetch_claim(&self, claim_id: i64) -> Result<Option<Claim>, DonationStoreError> {
        (**self).fetch_claim(claim_id)
    }
}
