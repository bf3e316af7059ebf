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

use std::convert::TryFrom;

use diesel::prelude::*;

use super::DonationStoreOperations;
use crate::donations::store::diesel::{models::ClaimModel, schema::claims};
use crate::donations::store::{Claim, DonationStoreError};

pub(in crate::donations::store::diesel) trait DonationStoreListClaimsOperation {
    fn list_claims(&self) -> Result<Vec<Claim>, DonationStoreError>;
}

#[cfg(feature = "postgres")]
impl<'a> DonationStoreListClaimsOperation
    for DonationStoreOperations<'a, diesel::pg::PgConnection>
{
    fn list_claims(&self) -> Result<Vec<Claim>, DonationStoreError> {
        claims::table
            .select(claims::all_columns)
            .order(claims::claim_id)
            .load::<ClaimModel>(self.conn)?
            .into_iter()
            .map(Claim::try_from)
            .collect()
    }
}

#[cfg(feature = "sqlite")]
impl<'a> DonationStoreListClaimsOperation
    for DonationStoreOperations<'a, diesel::sqlite::SqliteConnection>
{
    fn list_claims(&self) -> Result<Vec<Claim>, DonationStoreError> {
        claims::table
            .select(claims::all_columns)
            .order(claims::claim_id)
            .load::<ClaimModel>(self.conn)?
            .into_iter()
            .map(Claim::try_from)
            .collect()
    }
}
