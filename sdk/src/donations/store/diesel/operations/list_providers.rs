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
use crate::donations::store::diesel::{models::ProviderModel, schema::providers};
use crate::donations::store::{DonationStoreError, Provider};

pub(in crate::donations::store::diesel) trait DonationStoreListProvidersOperation {
    fn list_providers(&self, city: Option<&str>) -> Result<Vec<Provider>, DonationStoreError>;
}

#[cfg(feature = "postgres")]
impl<'a> DonationStoreListProvidersOperation
    for DonationStoreOperations<'a, diesel::pg::PgConnection>
{
    fn list_providers(&self, city: Option<&str>) -> Result<Vec<Provider>, DonationStoreError> {
        let mut query = providers::table
            .into_boxed()
            .select(providers::all_columns)
            .order(providers::provider_id);

        if let Some(city) = city {
            query = query.filter(providers::city.eq(city));
        }

        Ok(query
            .load::<ProviderModel>(self.conn)?
            .into_iter()
            .map(Provider::from)
            .collect())
    }
}

#[cfg(feature = "sqlite")]
impl<'a> DonationStoreListProvidersOperation
    for DonationStoreOperations<'a, diesel::sqlite::SqliteConnection>
{
    fn list_providers(&self, city: Option<&str>) -> Result<Vec<Provider>, DonationStoreError> {
        let mut query = providers::table
            .into_boxed()
            .select(providers::all_columns)
            .order(providers::provider_id);

        if let Some(city) = city {
            query = query.filter(providers::city.eq(city));
        }

        Ok(query
            .load::<ProviderModel>(self.conn)?
            .into_iter()
            .map(Provider::from)
            .collect())
    }
}
