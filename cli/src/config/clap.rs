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

//! `PartialDashboardConfig` builder using values from the command line, represented as clap
//! `ArgMatches`.

use clap::ArgMatches;

use super::{
    DashboardConfigError, DashboardConfigSource, PartialDashboardConfig,
    PartialDashboardConfigBuilder,
};

pub struct ClapPartialDashboardConfigBuilder<'a, 'b> {
    matches: &'b ArgMatches<'a>,
}

impl<'a, 'b> ClapPartialDashboardConfigBuilder<'a, 'b> {
    pub fn new(matches: &'b ArgMatches<'a>) -> Self {
        ClapPartialDashboardConfigBuilder { matches }
    }
}

impl PartialDashboardConfigBuilder for ClapPartialDashboardConfigBuilder<'_, '_> {
    fn build(self) -> Result<PartialDashboardConfig, DashboardConfigError> {
        let database_url = match self.matches.value_of("connect") {
            Some(url) if url.trim().is_empty() => {
                return Err(DashboardConfigError::InvalidArgument(String::from(
                    "`connect` cannot be empty",
                )))
            }
            Some(url) => Some(url.to_string()),
            None => None,
        };

        let verbosity = if self.matches.is_present("quiet") {
            Some(log::LevelFilter::Error)
        } else {
            match self.matches.occurrences_of("verbose") {
                0 => None,
                1 => Some(log::LevelFilter::Debug),
                _ => Some(log::LevelFilter::Trace),
            }
        };

        Ok(PartialDashboardConfig::new(DashboardConfigSource::CommandLine)
            .with_database_url(database_url)
            .with_verbosity(verbosity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::clap_app;

    fn create_arg_matches(args: Vec<&str>) -> ArgMatches<'static> {
        clap_app!(dashboardconfigtest =>
            (about: "Dashboard-Config-Test")
            (@arg verbose: -v +multiple)
            (@arg quiet: -q --quiet conflicts_with[verbose])
            (@arg connect: -C --connect +takes_value))
        .get_matches_from(args)
    }

    #[test]
    fn test_setup_command_line_config() {
        let matches = create_arg_matches(vec![
            "Dashboard-Config-Test",
            "-vv",
            "-C",
            "postgres://admin@db/food",
        ]);
        let generated_config = ClapPartialDashboardConfigBuilder::new(&matches)
            .build()
            .expect("Unable to build command line config");

        assert_eq!(
            generated_config.source(),
            DashboardConfigSource::CommandLine
        );
        assert_eq!(
            generated_config.database_url(),
            Some("postgres://admin@db/food".to_string())
        );
        assert_eq!(generated_config.verbosity(), Some(log::LevelFilter::Trace));
    }

    #[test]
    fn test_quiet_and_unset_values() {
        let matches = create_arg_matches(vec!["Dashboard-Config-Test", "-q"]);
        let generated_config = ClapPartialDashboardConfigBuilder::new(&matches)
            .build()
            .expect("Unable to build command line config");

        assert_eq!(generated_config.database_url(), None);
        assert_eq!(generated_config.verbosity(), Some(log::LevelFilter::Error));

        let matches = create_arg_matches(vec!["Dashboard-Config-Test"]);
        let generated_config = ClapPartialDashboardConfigBuilder::new(&matches)
            .build()
            .expect("Unable to build command line config");
        assert_eq!(generated_config.verbosity(), None);
    }

    #[test]
    fn test_empty_connect_is_rejected() {
        let matches = create_arg_matches(vec!["Dashboard-Config-Test", "--connect", ""]);

        assert!(matches!(
            ClapPartialDashboardConfigBuilder::new(&matches).build(),
            Err(DashboardConfigError::InvalidArgument(_))
        ));
    }
}
