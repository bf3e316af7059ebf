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

//! Core of the food rescue dashboard.
//!
//! The crate turns operator-entered text into typed records
//! ([`validation`], [`donations`]), persists them through a [`donations::store::DonationStore`],
//! and answers the fixed catalogue of reporting questions ([`reports`]).

#[macro_use]
extern crate serde_derive;
#[macro_use]
#[cfg(feature = "diesel")]
extern crate diesel;
#[macro_use]
#[cfg(feature = "diesel")]
extern crate diesel_migrations;
#[macro_use]
extern crate log;

pub mod donations;
pub mod error;
#[cfg(feature = "diesel")]
pub mod migrations;
pub mod reports;
#[cfg(feature = "diesel")]
pub mod store;
#[cfg(all(test, feature = "sqlite"))]
pub(crate) mod testing;
pub mod validation;
