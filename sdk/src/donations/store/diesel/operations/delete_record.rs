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

use diesel::{delete, prelude::*};

use super::DonationStoreOperations;
use crate::donations::fields::Entity;
use crate::donations::store::diesel::schema::{claims, food_listings, providers, receivers};
use crate::donations::store::DonationStoreError;

pub(in crate::donations::store::diesel) trait DonationStoreDeleteRecordOperation {
    fn delete_record(&self, entity: Entity, id: i64) -> Result<usize, DonationStoreError>;
}

#[cfg(feature = "postgres")]
impl<'a> DonationStoreDeleteRecordOperation
    for DonationStoreOperations<'a, diesel::pg::PgConnection>
{
    fn delete_record(&self, entity: Entity, id: i64) -> Result<usize, DonationStoreError> {
        match entity {
            Entity::Provider => {
                delete(providers::table.filter(providers::provider_id.eq(id))).execute(self.conn)
            }
            Entity::Receiver => {
                delete(receivers::table.filter(receivers::receiver_id.eq(id))).execute(self.conn)
            }
            Entity::FoodListing => {
                delete(food_listings::table.filter(food_listings::food_id.eq(id))).execute(self.conn)
            }
            Entity::Claim => delete(claims::table.filter(claims::claim_id.eq(id))).execute(self.conn),
        }
        .map_err(DonationStoreError::from)
    }
}

#[cfg(feature = "sqlite")]
impl<'a> DonationStoreDeleteRecordOperation
    for DonationStoreOperations<'a, diesel::sqlite::SqliteConnection>
{
    fn delete_record(&self, entity: Entity, id: i64) -> Result<usize, DonationStoreError> {
        match entity {
            Entity::Provider => {
                delete(providers::table.filter(providers::provider_id.eq(id))).execute(self.conn)
            }
            Entity::Receiver => {
                delete(receivers::table.filter(receivers::receiver_id.eq(id))).execute(self.conn)
            }
            Entity::FoodListing => {
                delete(food_listings::table.filter(food_listings::food_id.eq(id))).execute(self.conn)
            }
            Entity::Claim => delete(claims::table.filter(claims::claim_id.eq(id))).execute(self.conn),
        }
        .map_err(DonationStoreError::from)
    }
}
