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

pub(in crate::donations::store::diesel) trait DonationStoreFetchClaimOperation {
    fn fetch_claim(&self, claim_id: i64) -> Result<Option<Claim>, DonationStoreError>;
}

#[cfg(feature = "postgres")]
impl<'a> DonationStoreFetchClaimOperation
    for DonationStoreOperations<'a, diesel::pg::PgConnection>
{
    fn fetch_claim(&self, claim_id: i64) -> Result<Option<Claim>, DonationStoreError> {
        claims::table
            .filter(claims::claim_id.eq(claim_id))
            .first::<ClaimModel>(self.conn)
            .optional()?
            .map(Claim::try_from)
            .transpose()
    }
}

#[cfg(feature = "sqlite")]
impl<'a> DonationStoreFetchClaimOperation
    for DonationStoreOperations<'a, diesel::sqlite::SqliteConnection>
{
    fn fetch_claim(&self, claim_id: i64) -> Result<Option<Claim>, DonationStoreError> {
        claims::table
            .filter(claims::claim_id.eq(claim_id))
            .first::<ClaimModel>(self.conn)
            .optional()?
            .map(Claim::try_from)
            .transpose()
    }
}
