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

use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;

use crate::migrations::run_sqlite_migrations;

/// Builds a single-connection pool over a fresh in-memory database with the tables created.
pub fn create_connection_pool_and_migrate() -> Pool<ConnectionManager<SqliteConnection>> {
    let connection_manager = ConnectionManager::<SqliteConnection>::new(":memory:");
    let pool = Pool::builder()
        .max_size(1)
        .build(connection_manager)
        .expect("Failed to build connection pool");

    run_sqlite_migrations(&*pool.get().expect("Failed to get connection for migrations"))
        .expect("Failed to run migrations");

    pool
}
