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

pub mod models;
mod operations;
pub(in crate) mod schema;

use diesel::r2d2::{ConnectionManager, Pool};

use super::{
    Claim, DonationStore, DonationStoreError, FoodListing, Provider, Receiver, Record,
};
use crate::donations::fields::{Entity, FieldUpdate};

use operations::add_record::DonationStoreAddRecordOperation as _;
use operations::delete_record::DonationStoreDeleteRecordOperation as _;
use operations::fetch_claim::DonationStoreFetchClaimOperation as _;
use operations::fetch_food_listing::DonationStoreFetchFoodListingOperation as _;
use operations::fetch_provider::DonationStoreFetchProviderOperation as _;
use operations::fetch_receiver::DonationStoreFetchReceiverOperation as _;
use operations::list_claims::DonationStoreListClaimsOperation as _;
use operations::list_food_listings::DonationStoreListFoodListingsOperation as _;
use operations::list_providers::DonationStoreListProvidersOperation as _;
use operations::list_receivers::DonationStoreListReceiversOperation as _;
use operations::update_record::DonationStoreUpdateRecordOperation as _;
use operations::DonationStoreOperations;

/// Manages providers, receivers, food listings and claims in the database
#[derive(Clone)]
pub struct DieselDonationStore<C: diesel::Connection + 'static> {
    connection_pool: Pool<ConnectionManager<C>>,
}

impl<C: diesel::Connection> DieselDonationStore<C> {
    /// Creates a new DieselDonationStore
    ///
    /// # Arguments
    ///
    ///  * `connection_pool`: connection pool to the database
    pub fn new(connection_pool: Pool<ConnectionManager<C>>) -> Self {
        DieselDonationStore { connection_pool }
    }
}

#[cfg(feature = "postgres")]
impl DonationStore for DieselDonationStore<diesel::pg::PgConnection> {
    fn add_record(&self, record: Record) -> Result<(), DonationStoreError> {
        DonationStoreOperations::new(&*self.connection_pool.get()?).add_record(record)
    }

    fn update_record(&self, id: i64, update: FieldUpdate) -> Result<(), DonationStoreError> {
        DonationStoreOperations::new(&*self.connection_pool.get()?).update_record(id, update)
    }

    fn delete_record(&self, entity: Entity, id: i64) -> Result<usize, DonationStoreError> {
        DonationStoreOperations::new(&*self.connection_pool.get()?).delete_record(entity, id)
    }

    fn list_providers(&self, city: Option<&str>) -> Result<Vec<Provider>, DonationStoreError> {
        DonationStoreOperations::new(&*self.connection_pool.get()?).list_providers(city)
    }

    fn fetch_provider(&self, provider_id: i64) -> Result<Option<Provider>, DonationStoreError> {
        DonationStoreOperations::new(&*self.connection_pool.get()?).fetch_provider(provider_id)
    }

    fn list_receivers(&self, city: Option<&str>) -> Result<Vec<Receiver>, DonationStoreError> {
        DonationStoreOperations::new(&*self.connection_pool.get()?).list_receivers(city)
    }

    fn fetch_receiver(&self, receiver_id: i64) -> Result<Option<Receiver>, DonationStoreError> {
        DonationStoreOperations::new(&*self.connection_pool.get()?).fetch_receiver(receiver_id)
    }

    fn list_food_listings(&self) -> Result<Vec<FoodListing>, DonationStoreError> {
        DonationStoreOperations::new(&*self.connection_pool.get()?).list_food_listings()
    }

    fn fetch_food_listing(&self, food_id: i64) -> Result<Option<FoodListing>, DonationStoreError> {
        DonationStoreOperations::new(&*self.connection_pool.get()?).fetch_food_listing(food_id)
    }

    fn list_claims(&self) -> Result<Vec<Claim>, DonationStoreError> {
        DonationStoreOperations::new(&*self.connection_pool.get()?).list_claims()
    }

    fn fetch_claim(&self, claim_id: i64) -> Result<Option<Claim>, DonationStoreError> {
        DonationStoreOperations::new(&*self.connection_pool.get()?).fetch_claim(claim_id)
    }
}

#[cfg(feature = "sqlite")]
impl DonationStore for DieselDonationStore<diesel::sqlite::SqliteConnection> {
    fn add_record(&self, record: Record) -> Result<(), DonationStoreError> {
        DonationStoreOperations::new(&*self.connection_pool.get()?).add_record(record)
    }

    fn update_record(&self, id: i64, update: FieldUpdate) -> Result<(), DonationStoreError> {
        DonationStoreOperations::new(&*self.connection_pool.get()?).update_record(id, update)
    }

    fn delete_record(&self, entity: Entity, id: i64) -> Result<usize, DonationStoreError> {
        DonationStoreOperations::new(&*self.connection_pool.get()?).delete_record(entity, id)
    }

    fn list_providers(&self, city: Option<&str>) -> Result<Vec<Provider>, DonationStoreError> {
        DonationStoreOperations::new(&*self.connection_pool.get()?).list_providers(city)
    }

    fn fetch_provider(&self, provider_id: i64) -> Result<Option<Provider>, DonationStoreError> {
        DonationStoreOperations::new(&*self.connection_pool.get()?).fetch_provider(provider_id)
    }

    fn list_receivers(&self, city: Option<&str>) -> Result<Vec<Receiver>, DonationStoreError> {
        DonationStoreOperations::new(&*self.connection_pool.get()?).list_receivers(city)
    }

    fn fetch_receiver(&self, receiver_id: i64) -> Result<Option<Receiver>, DonationStoreError> {
        DonationStoreOperations::new(&*self.connection_pool.get()?).fetch_receiver(receiver_id)
    }

    fn list_food_listings(&self) -> Result<Vec<FoodListing>, DonationStoreError> {
        DonationStoreOperations::new(&*self.connection_pool.get()?).list_food_listings()
    }

    fn fetch_food_listing(&self, food_id: i64) -> Result<Option<FoodListing>, DonationStoreError> {
        DonationStoreOperations::new(&*self.connection_pool.get()?).fetch_food_listing(food_id)
    }

    fn list_claims(&self) -> Result<Vec<Claim>, DonationStoreError> {
        DonationStoreOperations::new(&*self.connection_pool.get()?).list_claims()
    }

    fn fetch_claim(&self, claim_id: i64) -> Result<Option<Claim>, DonationStoreError> {
        DonationStoreOperations::new(&*self.connection_pool.get()?).fetch_claim(claim_id)
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use super::*;

    use chrono::{NaiveDate, NaiveDateTime};

    use crate::donations::fields::{ClaimStatus, ClaimUpdate, FoodListingUpdate, ProviderUpdate};
    use crate::error::ConstraintViolationType;
    use crate::testing::create_connection_pool_and_migrate;

    fn provider(provider_id: i64, city: &str) -> Provider {
        Provider {
            provider_id,
            name: "Acme".to_string(),
            provider_type: "Restaurant".to_string(),
            address: "1 Main St".to_string(),
            city: city.to_string(),
            contact: "555-0100".to_string(),
        }
    }

    fn receiver(receiver_id: i64, city: &str) -> Receiver {
        Receiver {
            receiver_id,
            name: "Shelter".to_string(),
            receiver_type: "NGO".to_string(),
            city: city.to_string(),
            contact: "555-0199".to_string(),
        }
    }

    fn listing(food_id: i64) -> FoodListing {
        FoodListing {
            food_id,
            food_name: "Bread".to_string(),
            quantity: 40,
            expiry_date: NaiveDate::from_ymd(2024, 3, 15),
            provider_id: 101,
            provider_type: "Restaurant".to_string(),
            location: "Springfield".to_string(),
            food_type: "Vegetarian".to_string(),
            meal_type: "Breakfast".to_string(),
        }
    }

    fn timestamp(text: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").expect("valid timestamp")
    }

    #[test]
    fn test_provider_insert_update_fetch() {
        let store = DieselDonationStore::new(create_connection_pool_and_migrate());

        store
            .add_record(Record::Provider(provider(101, "Springfield")))
            .expect("Failed to add provider");
        store
            .update_record(
                101,
                FieldUpdate::Provider(ProviderUpdate::City("Shelbyville".to_string())),
            )
            .expect("Failed to update provider");

        let fetched = store
            .fetch_provider(101)
            .expect("Failed to fetch provider")
            .expect("Provider should exist");

        assert_eq!(fetched, provider(101, "Shelbyville"));
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let store = DieselDonationStore::new(create_connection_pool_and_migrate());

        store
            .add_record(Record::Provider(provider(101, "Springfield")))
            .expect("Failed to add provider");

        let mut duplicate = provider(101, "Elsewhere");
        duplicate.name = "Other".to_string();
        match store.add_record(Record::Provider(duplicate)) {
            Err(DonationStoreError::ConstraintViolationError(err)) => {
                assert_eq!(err.violation_type(), &ConstraintViolationType::Unique);
            }
            res => panic!("Expected a unique constraint violation, got {:?}", res),
        }

        // the first row survives untouched
        assert_eq!(
            store.fetch_provider(101).expect("Failed to fetch provider"),
            Some(provider(101, "Springfield"))
        );
    }

    #[test]
    fn test_update_of_missing_row_is_not_found() {
        let store = DieselDonationStore::new(create_connection_pool_and_migrate());

        match store.update_record(
            999,
            FieldUpdate::Provider(ProviderUpdate::Name("Nobody".to_string())),
        ) {
            Err(DonationStoreError::NotFoundError(msg)) => {
                assert_eq!(msg, "No record found for Provider_ID = 999")
            }
            res => panic!("Expected NotFoundError, got {:?}", res),
        }
    }

    #[test]
    fn test_delete_reports_affected_rows() {
        let store = DieselDonationStore::new(create_connection_pool_and_migrate());

        store
            .add_record(Record::Receiver(receiver(7, "Springfield")))
            .expect("Failed to add receiver");

        assert_eq!(store.delete_record(Entity::Receiver, 7).expect("delete"), 1);
        assert_eq!(store.delete_record(Entity::Receiver, 7).expect("delete"), 0);
        assert_eq!(store.fetch_receiver(7).expect("fetch"), None);
    }

    #[test]
    fn test_city_filter_is_a_bound_value() {
        let store = DieselDonationStore::new(create_connection_pool_and_migrate());

        store
            .add_record(Record::Provider(provider(1, "Springfield")))
            .expect("Failed to add provider");
        store
            .add_record(Record::Provider(provider(2, "Shelbyville")))
            .expect("Failed to add provider");
        store
            .add_record(Record::Provider(provider(3, "Springfield")))
            .expect("Failed to add provider");

        let ids: Vec<i64> = store
            .list_providers(Some("Springfield"))
            .expect("Failed to list providers")
            .into_iter()
            .map(|p| p.provider_id)
            .collect();
        assert_eq!(ids, vec![1, 3]);

        assert_eq!(store.list_providers(None).expect("list").len(), 3);
        assert!(store
            .list_providers(Some("x' OR '1'='1"))
            .expect("list")
            .is_empty());
    }

    #[test]
    fn test_listing_and_claim_round_trip() {
        let store = DieselDonationStore::new(create_connection_pool_and_migrate());

        store
            .add_record(Record::FoodListing(listing(1)))
            .expect("Failed to add listing");
        store
            .add_record(Record::Claim(Claim {
                claim_id: 10,
                food_id: 1,
                receiver_id: 7,
                status: ClaimStatus::Pending,
                timestamp: timestamp("2024-02-28 10:00:00"),
            }))
            .expect("Failed to add claim");

        store
            .update_record(
                1,
                FieldUpdate::FoodListing(FoodListingUpdate::ExpiryDate(NaiveDate::from_ymd(
                    2024, 4, 1,
                ))),
            )
            .expect("Failed to update listing");
        store
            .update_record(10, FieldUpdate::Claim(ClaimUpdate::Status(ClaimStatus::Completed)))
            .expect("Failed to update claim");

        let listings = store.list_food_listings().expect("Failed to list listings");
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].expiry_date, NaiveDate::from_ymd(2024, 4, 1));

        let claim = store
            .fetch_claim(10)
            .expect("Failed to fetch claim")
            .expect("Claim should exist");
        assert_eq!(claim.status, ClaimStatus::Completed);
        assert_eq!(claim.timestamp, timestamp("2024-02-28 10:00:00"));
        assert_eq!(store.list_claims().expect("list").len(), 1);
    }
}
