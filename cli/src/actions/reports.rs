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

use food_rescue_sdk::reports::{Report, ReportParams, ReportStore};
use food_rescue_sdk::validation::{non_empty, parse_integer};

use crate::error::CliError;
use crate::render::print_report;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_arg(value: &str) -> Result<Self, CliError> {
        match value {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CliError::UserError(format!(
                "Unsupported output format: {}",
                value
            ))),
        }
    }
}

pub fn do_list_reports() {
    for report in Report::all() {
        println!("{}", report);
    }
}

pub fn do_run_report(
    store: &dyn ReportStore,
    number: &str,
    city: Option<&str>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let report = parse_integer("Report number", number)
        .ok()
        .and_then(|number| Report::from_number(number as usize))
        .ok_or_else(|| {
            CliError::UserError(format!(
                "Report number must be between 1 and {}",
                Report::all().len()
            ))
        })?;

    let params = match city {
        Some(city) => ReportParams {
            city: non_empty("City", city)?,
        },
        None => ReportParams::default(),
    };

    debug!("Running report {} with {:?}", report.number(), params);
    let output = store.run_report(report, &params)?;

    match format {
        OutputFormat::Text => print_report(&output),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
    }

    Ok(())
}
