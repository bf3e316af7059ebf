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

use diesel::{
    r2d2::{ConnectionManager, Pool},
    sqlite::SqliteConnection,
};

use super::StoreFactory;
use crate::donations::store::{diesel::DieselDonationStore, DonationStore};
use crate::reports::store::{diesel::DieselReportStore, ReportStore};

/// A `StoreFactory` backed by a SQLite database.
pub struct SqliteStoreFactory {
    pool: Pool<ConnectionManager<SqliteConnection>>,
}

impl SqliteStoreFactory {
    pub fn new(pool: Pool<ConnectionManager<SqliteConnection>>) -> Self {
        Self { pool }
    }
}

impl StoreFactory for SqliteStoreFactory {
    fn get_donation_store<'a>(&'a self) -> Box<dyn DonationStore + 'a> {
        Box::new(DieselDonationStore::new(self.pool.clone()))
    }

    fn get_report_store<'a>(&'a self) -> Box<dyn ReportStore + 'a> {
        Box::new(DieselReportStore::new(self.pool.clone()))
    }
}
