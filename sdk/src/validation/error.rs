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

use std::error;
use std::fmt;

/// Operator input that cannot be turned into a typed value.
///
/// The field is the label the operator saw next to the input (for example `Provider ID`) and
/// the reason is the rule it broke, phrased to follow the label: display reads
/// `"Provider ID must be a whole number"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    field: String,
    reason: String,
}

impl ValidationError {
    /// Constructs a new `ValidationError`.
    ///
    /// # Examples
    ///
    /// ```
    /// use food_rescue_sdk::validation::ValidationError;
    ///
    /// let err = ValidationError::new("Quantity".to_string(), "must be a whole number".to_string());
    /// assert_eq!(format!("{}", err), "Quantity must be a whole number");
    /// ```
    pub fn new(field: String, reason: String) -> Self {
        Self { field, reason }
    }

    /// Returns the label of the offending field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the rule the field violated.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl error::Error for ValidationError {}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}
