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

//! An intermediate representation of the dashboard configuration, taken from one source.

/// Displays the source of the configuration value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardConfigSource {
    Default,
    Environment,
    CommandLine,
}

pub struct PartialDashboardConfig {
    source: DashboardConfigSource,
    database_url: Option<String>,
    verbosity: Option<log::LevelFilter>,
}

impl PartialDashboardConfig {
    pub fn new(source: DashboardConfigSource) -> Self {
        PartialDashboardConfig {
            source,
            database_url: None,
            verbosity: None,
        }
    }

    pub fn source(&self) -> DashboardConfigSource {
        self.source
    }

    pub fn database_url(&self) -> Option<String> {
        self.database_url.clone()
    }

    pub fn verbosity(&self) -> Option<log::LevelFilter> {
        self.verbosity
    }

    /// Adds a `database_url` value to the `PartialDashboardConfig` object.
    ///
    /// # Arguments
    ///
    /// * `database_url` - PostgreSQL URL, SQLite file path or `:memory:`
    ///
    pub fn with_database_url(mut self, database_url: Option<String>) -> Self {
        self.database_url = database_url;
        self
    }

    /// Adds a `verbosity` value to the `PartialDashboardConfig` object.
    ///
    /// # Arguments
    ///
    /// * `verbosity` - Most detailed level of log output shown
    ///
    pub fn with_verbosity(mut self, verbosity: Option<log::LevelFilter>) -> Self {
        self.verbosity = verbosity;
        self
    }
}
