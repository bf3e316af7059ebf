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

#[cfg(feature = "diesel")]
pub mod diesel;
mod error;

pub use error::ReportStoreError;

use super::{Report, ReportOutput, ReportParams};

pub trait ReportStore: Send + Sync {
    /// Runs one report of the catalogue
    ///
    /// # Arguments
    ///
    ///  * `report` - The report to run
    ///  * `params` - Values the report is filtered by; most reports ignore them
    fn run_report(
        &self,
        report: Report,
        params: &ReportParams,
    ) -> Result<ReportOutput, ReportStoreError>;
}

impl<RS> ReportStore for Box<RS>
where
    RS: ReportStore + ?Sized,
{
    fn run_report(
        &self,
        report: Report,
        params: &ReportParams,
    ) -> Result<ReportOutput, ReportStoreError> {
        (**self).run_report(report, params)
    }
}
