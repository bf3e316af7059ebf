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

use std::error::Error;
use std::fmt;
use std::io;

use food_rescue_sdk::donations::DonationStoreError;
use food_rescue_sdk::error::InternalError;
use food_rescue_sdk::reports::ReportStoreError;
use food_rescue_sdk::validation::ValidationError;

use crate::config::DashboardConfigError;

#[derive(Debug)]
pub enum CliError {
    /// Input from the operator was rejected before reaching the database
    UserError(String),
    /// An action could not complete
    ActionError(String),
    /// The database refused or failed a statement
    DatabaseError(String),
    ConfigError(DashboardConfigError),
    LoggingInitializationError(Box<flexi_logger::FlexiLoggerError>),
    IoError(io::Error),
    JsonError(serde_json::Error),
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CliError::UserError(_) => None,
            CliError::ActionError(_) => None,
            CliError::DatabaseError(_) => None,
            CliError::ConfigError(err) => Some(err),
            CliError::LoggingInitializationError(err) => Some(&**err),
            CliError::IoError(err) => Some(err),
            CliError::JsonError(err) => Some(err),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CliError::UserError(err) => write!(f, "Error: {}", err),
            CliError::ActionError(err) => write!(f, "Action failed: {}", err),
            CliError::DatabaseError(err) => write!(f, "Database error: {}", err),
            CliError::ConfigError(err) => write!(f, "ConfigError: {}", err),
            CliError::LoggingInitializationError(err) => {
                write!(f, "LoggingInitializationError: {}", err)
            }
            CliError::IoError(err) => write!(f, "IoError: {}", err),
            CliError::JsonError(err) => write!(f, "JsonError: {}", err),
        }
    }
}

impl From<DashboardConfigError> for CliError {
    fn from(err: DashboardConfigError) -> Self {
        CliError::ConfigError(err)
    }
}

impl From<flexi_logger::FlexiLoggerError> for CliError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        CliError::LoggingInitializationError(Box::new(err))
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::IoError(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::JsonError(err)
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::UserError(format!("{}.", err))
    }
}

impl From<DonationStoreError> for CliError {
    fn from(err: DonationStoreError) -> Self {
        CliError::DatabaseError(err.to_string())
    }
}

impl From<ReportStoreError> for CliError {
    fn from(err: ReportStoreError) -> Self {
        CliError::DatabaseError(err.to_string())
    }
}

impl From<InternalError> for CliError {
    fn from(err: InternalError) -> Self {
        CliError::DatabaseError(err.to_string())
    }
}
