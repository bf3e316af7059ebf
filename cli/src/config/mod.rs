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

//! Configuration values the dashboard needs before it can touch the database.
//!
//! Values may come from command line arguments, environment variables or defaults. Each source
//! produces a `PartialDashboardConfig`; `DashboardConfigBuilder` merges them into the final
//! `DashboardConfig`.

mod builder;
mod clap;
mod default;
mod env;
pub mod error;
mod partial;

pub use self::builder::DashboardConfigBuilder;
pub use self::clap::ClapPartialDashboardConfigBuilder;
pub use self::default::DefaultPartialDashboardConfigBuilder;
pub use self::env::EnvPartialDashboardConfigBuilder;
pub use self::error::DashboardConfigError;
pub use self::partial::{DashboardConfigSource, PartialDashboardConfig};

/// Produces a `PartialDashboardConfig` from one source of values.
pub trait PartialDashboardConfigBuilder {
    fn build(self) -> Result<PartialDashboardConfig, DashboardConfigError>;
}

#[derive(Debug)]
pub struct DashboardConfig {
    database_url: (String, DashboardConfigSource),
    verbosity: (log::LevelFilter, DashboardConfigSource),
}

impl DashboardConfig {
    pub fn database_url(&self) -> &str {
        &self.database_url.0
    }

    pub fn database_url_source(&self) -> &DashboardConfigSource {
        &self.database_url.1
    }

    pub fn verbosity(&self) -> log::LevelFilter {
        self.verbosity.0
    }

    pub fn verbosity_source(&self) -> &DashboardConfigSource {
        &self.verbosity.1
    }

    pub fn log_as_debug(&self) {
        debug!(
            "Dashboard Config: database_url: {} (source: {:?})",
            self.database_url(),
            self.database_url_source(),
        );
        debug!(
            "Dashboard Config: verbosity: {} (source: {:?})",
            self.verbosity(),
            self.verbosity_source(),
        );
    }
}
