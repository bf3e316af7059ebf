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

use super::ReportStoreOperations;
use crate::donations::store::diesel::schema::providers;
use crate::reports::store::ReportStoreError;
use crate::reports::{Cell, ResultTable};

pub(in crate::reports::store::diesel) trait ReportStoreProviderContactsOperation {
    fn provider_contacts(&self, city: &str) -> Result<Vec<ResultTable>, ReportStoreError>;
}

#[cfg(feature = "postgres")]
impl<'a> ReportStoreProviderContactsOperation
    for ReportStoreOperations<'a, diesel::pg::PgConnection>
{
    fn provider_contacts(&self, city: &str) -> Result<Vec<ResultTable>, ReportStoreError> {
        let rows = providers::table
            .filter(providers::city.eq(city))
            .select((providers::name, providers::contact))
            .order(providers::provider_id)
            .load::<(String, String)>(self.conn)?;

        Ok(vec![contacts_table(city, rows)])
    }
}

#[cfg(feature = "sqlite")]
impl<'a> ReportStoreProviderContactsOperation
    for ReportStoreOperations<'a, diesel::sqlite::SqliteConnection>
{
    fn provider_contacts(&self, city: &str) -> Result<Vec<ResultTable>, ReportStoreError> {
        let rows = providers::table
            .filter(providers::city.eq(city))
            .select((providers::name, providers::contact))
            .order(providers::provider_id)
            .load::<(String, String)>(self.conn)?;

        Ok(vec![contacts_table(city, rows)])
    }
}

fn contacts_table(city: &str, rows: Vec<(String, String)>) -> ResultTable {
    ResultTable::new(
        Some(&format!("Providers from {}", city)),
        &["Name", "Contact"],
        rows.into_iter()
            .map(|(name, contact)| vec![Cell::Text(name), Cell::Text(contact)])
            .collect(),
    )
}
