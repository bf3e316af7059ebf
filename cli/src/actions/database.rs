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

use std::str::FromStr;

use diesel::connection::Connection as _;
#[cfg(feature = "postgres")]
use diesel::pg::PgConnection;
#[cfg(feature = "sqlite")]
use diesel::sqlite::SqliteConnection;
#[cfg(feature = "postgres")]
use food_rescue_sdk::migrations::run_postgres_migrations;
#[cfg(feature = "sqlite")]
use food_rescue_sdk::migrations::run_sqlite_migrations;
use food_rescue_sdk::store::ConnectionUri;

use crate::error::CliError;

/// Creates the donation tables, applying any migration the database has not seen yet.
pub fn run_migrations(database_url: &str) -> Result<(), CliError> {
    // disable clippy warning caused for some combinations of features
    #[allow(clippy::match_single_binding)]
    match ConnectionUri::from_str(database_url)
        .map_err(|err| CliError::ActionError(err.to_string()))?
    {
        #[cfg(feature = "postgres")]
        ConnectionUri::Postgres(database_url) => {
            let connection = PgConnection::establish(&database_url).map_err(|err| {
                CliError::ActionError(format!(
                    "Failed to establish database connection to '{}': {}",
                    database_url, err
                ))
            })?;

            run_postgres_migrations(&connection).map_err(|err| {
                CliError::ActionError(format!("Unable to run Postgres migrations: {}", err))
            })?;
        }
        #[cfg(feature = "sqlite")]
        ConnectionUri::Sqlite(connection_string) => {
            let connection = SqliteConnection::establish(&connection_string).map_err(|err| {
                CliError::ActionError(format!(
                    "Failed to establish database connection to '{}': {}",
                    connection_string, err
                ))
            })?;

            run_sqlite_migrations(&connection).map_err(|err| {
                CliError::ActionError(format!("Unable to run SQLite migrations: {}", err))
            })?;
        }
    }

    Ok(())
}
