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

pub(super) mod add_record;
pub(super) mod delete_record;
pub(super) mod fetch_claim;
pub(super) mod fetch_food_listing;
pub(super) mod fetch_provider;
pub(super) mod fetch_receiver;
pub(super) mod list_claims;
pub(super) mod list_food_listings;
pub(super) mod list_providers;
pub(super) mod list_receivers;
pub(super) mod update_record;

pub(super) struct DonationStoreOperations<'a, C> {
    conn: &'a C,
}

impl<'a, C> DonationStoreOperations<'a, C>
where
    C: diesel::Connection,
{
    pub fn new(conn: &'a C) -> Self {
        DonationStoreOperations { conn }
    }
}
