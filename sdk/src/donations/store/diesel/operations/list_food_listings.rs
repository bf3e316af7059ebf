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

use diesel::prelude::*;

use super::DonationStoreOperations;
use crate::donations::store::diesel::{models::FoodListingModel, schema::food_listings};
use crate::donations::store::{DonationStoreError, FoodListing};

pub(in crate::donations::store::diesel) trait DonationStoreListFoodListingsOperation {
    fn list_food_listings(&self) -> Result<Vec<FoodListing>, DonationStoreError>;
}

#[cfg(feature = "postgres")]
impl<'a> DonationStoreListFoodListingsOperation
    for DonationStoreOperations<'a, diesel::pg::PgConnection>
{
    fn list_food_listings(&self) -> Result<Vec<FoodListing>, DonationStoreError> {
        Ok(food_listings::table
            .select(food_listings::all_columns)
            .order(food_listings::food_id)
            .load::<FoodListingModel>(self.conn)?
            .into_iter()
            .map(FoodListing::from)
            .collect())
    }
}

#[cfg(feature = "sqlite")]
impl<'a> DonationStoreListFoodListingsOperation
    for DonationStoreOperations<'a, diesel::sqlite::SqliteConnection>
{
    fn list_food_listings(&self) -> Result<Vec<FoodListing>, DonationStoreError> {
        Ok(food_listings::table
            .select(food_listings::all_columns)
            .order(food_listings::food_id)
            .load::<FoodListingModel>(self.conn)?
            .into_iter()
            .map(FoodListing::from)
            .collect())
    }
}
