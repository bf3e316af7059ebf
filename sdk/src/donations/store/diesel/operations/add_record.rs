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

use diesel::{insert_into, prelude::*};

use super::DonationStoreOperations;
use crate::donations::store::diesel::{
    models::{ClaimModel, FoodListingModel, ProviderModel, ReceiverModel},
    schema::{claims, food_listings, providers, receivers},
};
use crate::donations::store::{DonationStoreError, Record};

pub(in crate::donations::store::diesel) trait DonationStoreAddRecordOperation {
    fn add_record(&self, record: Record) -> Result<(), DonationStoreError>;
}

#[cfg(feature = "postgres")]
impl<'a> DonationStoreAddRecordOperation for DonationStoreOperations<'a, diesel::pg::PgConnection> {
    fn add_record(&self, record: Record) -> Result<(), DonationStoreError> {
        match record {
            Record::Provider(provider) => insert_into(providers::table)
                .values(ProviderModel::from(provider))
                .execute(self.conn),
            Record::Receiver(receiver) => insert_into(receivers::table)
                .values(ReceiverModel::from(receiver))
                .execute(self.conn),
            Record::FoodListing(listing) => insert_into(food_listings::table)
                .values(FoodListingModel::from(listing))
                .execute(self.conn),
            Record::Claim(claim) => insert_into(claims::table)
                .values(ClaimModel::from(claim))
                .execute(self.conn),
        }
        .map(|_| ())
        .map_err(DonationStoreError::from)
    }
}

#[cfg(feature = "sqlite")]
impl<'a> DonationStoreAddRecordOperation
    for DonationStoreOperations<'a, diesel::sqlite::SqliteConnection>
{
    fn add_record(&self, record: Record) -> Result<(), DonationStoreError> {
        match record {
            Record::Provider(provider) => insert_into(providers::table)
                .values(ProviderModel::from(provider))
                .execute(self.conn),
            Record::Receiver(receiver) => insert_into(receivers::table)
                .values(ReceiverModel::from(receiver))
                .execute(self.conn),
            Record::FoodListing(listing) => insert_into(food_listings::table)
                .values(FoodListingModel::from(listing))
                .execute(self.conn),
            Record::Claim(claim) => insert_into(claims::table)
                .values(ClaimModel::from(claim))
                .execute(self.conn),
        }
        .map(|_| ())
        .map_err(DonationStoreError::from)
    }
}
