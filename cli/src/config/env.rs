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

//! `PartialDashboardConfig` builder using values from the environment.

use std::env;

use super::{
    DashboardConfigError, DashboardConfigSource, PartialDashboardConfig,
    PartialDashboardConfigBuilder,
};

pub const DATABASE_URL_ENV: &str = "FOOD_RESCUE_DATABASE_URL";

/// Trait to outline a basic read-only environment variable store
pub trait EnvStore {
    /// Returns an environment variable for a given key
    ///
    /// # Arguments
    ///
    /// * `key` - A string slice of the name of the environment variable
    fn get(&self, key: &str) -> Option<String>;
}

/// Implementation of `EnvStore` for OS environment variables
pub struct OsEnvStore;

impl EnvStore for OsEnvStore {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

pub struct EnvPartialDashboardConfigBuilder<S: EnvStore> {
    store: S,
}

impl EnvPartialDashboardConfigBuilder<OsEnvStore> {
    pub fn new() -> Self {
        EnvPartialDashboardConfigBuilder { store: OsEnvStore }
    }
}

impl<S: EnvStore> EnvPartialDashboardConfigBuilder<S> {
    /// Returns a builder that will fetch values from the given store.
    #[cfg(test)]
    pub fn from_store(store: S) -> Self {
        EnvPartialDashboardConfigBuilder { store }
    }
}

impl<S: EnvStore> PartialDashboardConfigBuilder for EnvPartialDashboardConfigBuilder<S> {
    fn build(self) -> Result<PartialDashboardConfig, DashboardConfigError> {
        // An exported but empty variable counts as unset
        let database_url = self
            .store
            .get(DATABASE_URL_ENV)
            .filter(|url| !url.trim().is_empty());

        Ok(PartialDashboardConfig::new(DashboardConfigSource::Environment)
            .with_database_url(database_url))
    }
}

#[cfg(test)]
pub(super) mod tests {
    use super::*;

    use std::collections::HashMap;

    /// Implementation of `EnvStore` that supports arbitrary hashmaps
    pub struct HashmapEnvStore {
        internal: HashMap<String, String>,
    }

    impl HashmapEnvStore {
        pub fn new(internal: HashMap<String, String>) -> Self {
            HashmapEnvStore { internal }
        }
    }

    impl EnvStore for HashmapEnvStore {
        fn get(&self, key: &str) -> Option<String> {
            self.internal.get(key).map(ToOwned::to_owned)
        }
    }

    #[test]
    fn test_empty_env_config() {
        let store = HashmapEnvStore::new(HashMap::new());
        let generated_config = EnvPartialDashboardConfigBuilder::from_store(store)
            .build()
            .expect("Unable to build `EnvPartialDashboardConfigBuilder`");

        assert_eq!(
            generated_config.source(),
            DashboardConfigSource::Environment
        );
        assert_eq!(generated_config.database_url(), None);
        assert_eq!(generated_config.verbosity(), None);
    }

    #[test]
    fn test_setup_env_config() {
        let mut internal = HashMap::new();
        internal.insert(
            DATABASE_URL_ENV.to_string(),
            "postgres://admin@db/food".to_string(),
        );
        let store = HashmapEnvStore::new(internal);

        let generated_config = EnvPartialDashboardConfigBuilder::from_store(store)
            .build()
            .expect("Unable to build `EnvPartialDashboardConfigBuilder`");

        assert_eq!(
            generated_config.database_url(),
            Some(String::from("postgres://admin@db/food"))
        );
    }

    #[test]
    fn test_blank_env_value_is_unset() {
        let mut internal = HashMap::new();
        internal.insert(DATABASE_URL_ENV.to_string(), "  ".to_string());

        let generated_config =
            EnvPartialDashboardConfigBuilder::from_store(HashmapEnvStore::new(internal))
                .build()
                .expect("Unable to build `EnvPartialDashboardConfigBuilder`");

        assert_eq!(generated_config.database_url(), None);
    }
}
