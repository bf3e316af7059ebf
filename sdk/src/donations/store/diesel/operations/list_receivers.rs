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
use crate::donations::store::diesel::{models::ReceiverModel, schema::receivers};
use crate::donations::store::{DonationStoreError, Receiver};

pub(in crate::donations::store::diesel) trait DonationStoreListReceiversOperation {
    fn list_receivers(&self, city: Option<&str>) -> Result<Vec<Receiver>, DonationStoreError>;
}

#[cfg(feature = "postgres")]
impl<'a> DonationStoreListReceiversOperation
    for DonationStoreOperations<'a, diesel::pg::PgConnection>
{
    fn list_receivers(&self, city: Option<&str>) -> Result<Vec<Receiver>, DonationStoreError> {
        let mut query = receivers::table
            .into_boxed()
            .select(receivers::all_columns)
            .order(receivers::receiver_id);

        if let Some(city) = city {
            query = query.filter(receivers::city.eq(city));
        }

        Ok(query
            .load::<ReceiverModel>(self.conn)?
            .into_iter()
            .map(Receiver::from)
            .collect())
    }
}

#[cfg(feature = "sqlite")]
impl<'a> DonationStoreListReceiversOperation
    for DonationStoreOperations<'a, diesel::sqlite::SqliteConnection>
{
    fn list_receivers(&self, city: Option<&str>) -> Result<Vec<Receiver>, DonationStoreError> {
        let mut query = receivers::table
            .into_boxed()
            .select(receivers::all_columns)
            .order(receivers::receiver_id);

        if let Some(city) = city {
            query = query.filter(receivers::city.eq(city));
        }

        Ok(query
            .load::<ReceiverModel>(self.conn)?
            .into_iter()
            .map(Receiver::from)
            .collect())
    }
}
