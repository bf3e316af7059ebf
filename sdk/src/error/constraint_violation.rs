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

/// The kind of store constraint a statement ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolationType {
    Unique,
    ForeignKey,
}

impl fmt::Display for ConstraintViolationType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConstraintViolationType::Unique => f.write_str("Unique"),
            ConstraintViolationType::ForeignKey => f.write_str("Foreign Key"),
        }
    }
}

/// A statement was rejected by one of the store's own constraints, for example inserting a
/// provider whose ID is already taken.
///
/// Display is the store's raw message; the classification is available through
/// [`violation_type`](ConstraintViolationError::violation_type).
#[derive(Debug)]
pub struct ConstraintViolationError {
    violation_type: ConstraintViolationType,
    source: Option<Box<dyn error::Error>>,
}

impl ConstraintViolationError {
    /// Constructs a new `ConstraintViolationError` with no underlying source.
    pub fn with_violation_type(violation_type: ConstraintViolationType) -> Self {
        Self {
            violation_type,
            source: None,
        }
    }

    /// Constructs a new `ConstraintViolationError` wrapping the store error that reported it.
    ///
    /// # Examples
    ///
    /// ```
    /// use food_rescue_sdk::error::{ConstraintViolationError, ConstraintViolationType};
    ///
    /// let io_err = std::io::Error::new(std::io::ErrorKind::Other, "duplicate key");
    /// let err = ConstraintViolationError::from_source_with_violation_type(
    ///     ConstraintViolationType::Unique,
    ///     Box::new(io_err),
    /// );
    /// assert_eq!(format!("{}", err), "duplicate key");
    /// assert_eq!(err.violation_type(), &ConstraintViolationType::Unique);
    /// ```
    pub fn from_source_with_violation_type(
        violation_type: ConstraintViolationType,
        source: Box<dyn error::Error>,
    ) -> Self {
        Self {
            violation_type,
            source: Some(source),
        }
    }

    pub fn violation_type(&self) -> &ConstraintViolationType {
        &self.violation_type
    }
}

impl error::Error for ConstraintViolationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.source.as_deref()
    }
}

impl fmt::Display for ConstraintViolationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}", source),
            None => write!(f, "{} constraint violated", self.violation_type),
        }
    }
}
