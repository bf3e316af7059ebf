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

//! Merges partial configurations into the final `DashboardConfig`.

use super::{
    DashboardConfig, DashboardConfigError, DashboardConfigSource, PartialDashboardConfig,
};

/// Collects `PartialDashboardConfig` objects and resolves each value from the highest-precedence
/// source that sets it: command line, then environment, then defaults.
#[derive(Default)]
pub struct DashboardConfigBuilder {
    partial_configs: Vec<PartialDashboardConfig>,
}

impl DashboardConfigBuilder {
    pub fn new() -> Self {
        DashboardConfigBuilder {
            partial_configs: Vec::new(),
        }
    }

    /// Adds a `PartialDashboardConfig` to be considered when building.
    pub fn with_partial_config(mut self, partial: PartialDashboardConfig) -> Self {
        self.partial_configs.push(partial);
        self
    }

    pub fn build(mut self) -> Result<DashboardConfig, DashboardConfigError> {
        self.partial_configs
            .sort_by_key(|partial| precedence(partial.source()));

        let database_url = self
            .partial_configs
            .iter()
            .find_map(|partial| {
                partial
                    .database_url()
                    .map(|value| (value, partial.source()))
            })
            .ok_or_else(|| DashboardConfigError::MissingValue("database URL".to_string()))?;

        let verbosity = self
            .partial_configs
            .iter()
            .find_map(|partial| partial.verbosity().map(|value| (value, partial.source())))
            .ok_or_else(|| DashboardConfigError::MissingValue("verbosity".to_string()))?;

        Ok(DashboardConfig {
            database_url,
            verbosity,
        })
    }
}

fn precedence(source: DashboardConfigSource) -> u8 {
    match source {
        DashboardConfigSource::CommandLine => 0,
        DashboardConfigSource::Environment => 1,
        DashboardConfigSource::Default => 2,
    }
}
