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

pub(super) mod fixed_report;
pub(super) mod provider_contacts;

use diesel::deserialize::QueryableByName;
use diesel::sql_query;
use diesel::RunQueryDsl;

use crate::reports::store::ReportStoreError;

pub(super) struct ReportStoreOperations<'a, C> {
    conn: &'a C,
}

impl<'a, C> ReportStoreOperations<'a, C>
where
    C: diesel::Connection,
{
    pub fn new(conn: &'a C) -> Self {
        ReportStoreOperations { conn }
    }

    /// Loads every row of a raw statement that takes no parameters.
    fn load<T>(&self, statement: &str) -> Result<Vec<T>, ReportStoreError>
    where
        T: QueryableByName<C::Backend>,
    {
        sql_query(statement)
            .load::<T>(self.conn)
            .map_err(ReportStoreError::from)
    }
}
