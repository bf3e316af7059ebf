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

//! `PartialDashboardConfig` builder using default values.

use super::{
    DashboardConfigError, DashboardConfigSource, PartialDashboardConfig,
    PartialDashboardConfigBuilder,
};

const DATABASE_URL: &str = "food_rescue.db";

#[derive(Default)]
pub struct DefaultPartialDashboardConfigBuilder;

impl DefaultPartialDashboardConfigBuilder {
    pub fn new() -> Self {
        DefaultPartialDashboardConfigBuilder {}
    }
}

impl PartialDashboardConfigBuilder for DefaultPartialDashboardConfigBuilder {
    fn build(self) -> Result<PartialDashboardConfig, DashboardConfigError> {
        Ok(PartialDashboardConfig::new(DashboardConfigSource::Default)
            .with_database_url(Some(String::from(DATABASE_URL)))
            .with_verbosity(Some(log::LevelFilter::Info)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let generated_default_config = DefaultPartialDashboardConfigBuilder::new()
            .build()
            .expect("Unable to build default config object");

        assert_eq!(
            generated_default_config.source(),
            DashboardConfigSource::Default
        );
        assert_eq!(
            generated_default_config.database_url(),
            Some(String::from(DATABASE_URL))
        );
        assert_eq!(
            generated_default_config.verbosity(),
            Some(log::LevelFilter::Info)
        );
    }
}
