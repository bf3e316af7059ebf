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

//! The fixed catalogue of reporting questions asked of the donation tables.
//!
//! Every report is a read-only query with a fixed join graph, grouping and descending order.
//! Six of them also describe a chart, derived from the rows the query returned.

mod output;
pub mod store;

use std::fmt;

pub use output::{Cell, Chart, ChartKind, ChartPoint, ReportOutput, ResultTable};
#[cfg(feature = "diesel")]
pub use store::diesel::DieselReportStore;
pub use store::{ReportStore, ReportStoreError};

/// City used by the provider contacts report when none is given.
pub const DEFAULT_REPORT_CITY: &str = "New Carol";

const TOP_N: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Report {
    CityCounts,
    QuantityByProviderType,
    ProviderContactsInCity,
    ReceiversByCompletedClaims,
    QuantityPerProvider,
    CityWithMostListings,
    ListingsByFoodType,
    ClaimsPerFoodItem,
    TopProviderByCompletedClaims,
    ClaimStatusShare,
    AverageQuantityPerReceiver,
    TopClaimedMealType,
    QuantityDonatedPerProvider,
    CancelledClaimsPerFoodItem,
    DistinctFoodsPerProvider,
}

const ALL_REPORTS: [Report; 15] = [
    Report::CityCounts,
    Report::QuantityByProviderType,
    Report::ProviderContactsInCity,
    Report::ReceiversByCompletedClaims,
    Report::QuantityPerProvider,
    Report::CityWithMostListings,
    Report::ListingsByFoodType,
    Report::ClaimsPerFoodItem,
    Report::TopProviderByCompletedClaims,
    Report::ClaimStatusShare,
    Report::AverageQuantityPerReceiver,
    Report::TopClaimedMealType,
    Report::QuantityDonatedPerProvider,
    Report::CancelledClaimsPerFoodItem,
    Report::DistinctFoodsPerProvider,
];

impl Report {
    /// All reports, in catalogue order.
    pub fn all() -> &'static [Report] {
        &ALL_REPORTS
    }

    /// Resolves a 1-based catalogue number.
    pub fn from_number(number: usize) -> Option<Report> {
        number
            .checked_sub(1)
            .and_then(|index| ALL_REPORTS.get(index))
            .copied()
    }

    /// 1-based position in the catalogue.
    pub fn number(self) -> usize {
        match self {
            Report::CityCounts => 1,
            Report::QuantityByProviderType => 2,
            Report::ProviderContactsInCity => 3,
            Report::ReceiversByCompletedClaims => 4,
            Report::QuantityPerProvider => 5,
            Report::CityWithMostListings => 6,
            Report::ListingsByFoodType => 7,
            Report::ClaimsPerFoodItem => 8,
            Report::TopProviderByCompletedClaims => 9,
            Report::ClaimStatusShare => 10,
            Report::AverageQuantityPerReceiver => 11,
            Report::TopClaimedMealType => 12,
            Report::QuantityDonatedPerProvider => 13,
            Report::CancelledClaimsPerFoodItem => 14,
            Report::DistinctFoodsPerProvider => 15,
        }
    }

    pub fn question(self) -> &'static str {
        match self {
            Report::CityCounts => "How many food providers and receivers are there in each city?",
            Report::QuantityByProviderType => {
                "Which type of food provider (restaurant, grocery store, etc.) contributes the \
                 most food?"
            }
            Report::ProviderContactsInCity => {
                "What is the contact information of food providers in a specific city?"
            }
            Report::ReceiversByCompletedClaims => "Which receivers have claimed the most food?",
            Report::QuantityPerProvider => {
                "What is the total quantity of food available from all providers?"
            }
            Report::CityWithMostListings => "Which city has the highest number of food listings?",
            Report::ListingsByFoodType => "What are the most commonly available food types?",
            Report::ClaimsPerFoodItem => "How many food claims have been made for each food item?",
            Report::TopProviderByCompletedClaims => {
                "Which provider has had the highest number of successful food claims?"
            }
            Report::ClaimStatusShare => {
                "What percentage of food claims are completed vs. pending vs. canceled?"
            }
            Report::AverageQuantityPerReceiver => {
                "What is the average quantity of food claimed per receiver?"
            }
            Report::TopClaimedMealType => {
                "Which meal type (breakfast, lunch, dinner, snacks) is claimed the most?"
            }
            Report::QuantityDonatedPerProvider => {
                "What is the total quantity of food donated by each provider?"
            }
            Report::CancelledClaimsPerFoodItem => {
                "Which food items have the highest unclaimed rate?"
            }
            Report::DistinctFoodsPerProvider => {
                "How many unique food items does each provider contribute?"
            }
        }
    }

    pub fn chart_kind(self) -> Option<ChartKind> {
        match self {
            Report::QuantityByProviderType
            | Report::ReceiversByCompletedClaims
            | Report::QuantityPerProvider => Some(ChartKind::Bar),
            Report::ListingsByFoodType => Some(ChartKind::Pie),
            Report::ClaimStatusShare => Some(ChartKind::Donut),
            Report::CancelledClaimsPerFoodItem => Some(ChartKind::HorizontalBar),
            _ => None,
        }
    }

    /// Builds this report's chart series from its result tables.
    ///
    /// Rows whose value cell is not numeric are skipped. Returns `None` for reports without a
    /// chart or when the expected table is missing.
    pub fn chart(self, tables: &[ResultTable]) -> Option<Chart> {
        let kind = self.chart_kind()?;
        let table = tables.first()?;

        let chart = match self {
            Report::QuantityByProviderType => Chart {
                kind,
                title: "Total Quantity by Provider Type".into(),
                x_label: Some("Provider Type".into()),
                y_label: Some("Total Quantity".into()),
                points: series(table, "Provider Type", "Total Quantity")?,
            },
            Report::ReceiversByCompletedClaims => Chart {
                kind,
                title: "Top 5 Receivers by Number of Claims".into(),
                x_label: Some("Receiver Name".into()),
                y_label: Some("Number of Claims".into()),
                points: top(series(table, "Name", "No of Claims")?),
            },
            Report::QuantityPerProvider => Chart {
                kind,
                title: "Top 5 Providers by Total Quantity".into(),
                x_label: Some("Provider Name".into()),
                y_label: Some("Total Quantity".into()),
                points: top(series(table, "Name", "Total Quantity")?),
            },
            Report::ListingsByFoodType => Chart {
                kind,
                title: "Food Type Distribution".into(),
                x_label: None,
                y_label: None,
                points: series(table, "Food Type", "Total Listing")?,
            },
            Report::ClaimStatusShare => Chart {
                kind,
                title: "Claim Status Distribution".into(),
                x_label: None,
                y_label: None,
                points: series(table, "Status", "Percentage")?,
            },
            Report::CancelledClaimsPerFoodItem => Chart {
                kind,
                title: "Cancelled Claims by Food Item".into(),
                x_label: Some("Cancelled Claims".into()),
                y_label: Some("Food Name".into()),
                points: series(table, "Food Name", "Cancelled Claims")?,
            },
            _ => return None,
        };

        Some(chart)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.question())
    }
}

/// Operator-supplied values some reports are filtered by.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportParams {
    pub city: String,
}

impl Default for ReportParams {
    fn default() -> Self {
        ReportParams {
            city: DEFAULT_REPORT_CITY.to_string(),
        }
    }
}

fn series(table: &ResultTable, label_column: &str, value_column: &str) -> Option<Vec<ChartPoint>> {
    let label_index = table.column_index(label_column)?;
    let value_index = table.column_index(value_column)?;

    Some(
        table
            .rows
            .iter()
            .filter_map(|row| {
                let label = row.get(label_index)?.to_string();
                let value = row.get(value_index)?.as_f64()?;
                Some(ChartPoint { label, value })
            })
            .collect(),
    )
}

/// Keeps the largest points, largest first; ties keep their row order.
fn top(mut points: Vec<ChartPoint>) -> Vec<ChartPoint> {
    points.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    points.truncate(TOP_N);
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalogue_numbering() {
        assert_eq!(Report::all().len(), 15);
        for (index, report) in Report::all().iter().enumerate() {
            assert_eq!(report.number(), index + 1);
            assert_eq!(Report::from_number(index + 1), Some(*report));
        }
        assert_eq!(Report::from_number(0), None);
        assert_eq!(Report::from_number(16), None);

        let charted = Report::all()
            .iter()
            .filter(|report| report.chart_kind().is_some())
            .count();
        assert_eq!(charted, 6);
    }

    #[test]
    fn test_food_type_pie() {
        let table = ResultTable::new(
            None,
            &["Food Type", "Total Listing"],
            vec![
                vec![Cell::Text("Fruits".into()), Cell::Integer(3)],
                vec![Cell::Text("Vegetables".into()), Cell::Integer(2)],
            ],
        );

        let output = ReportOutput::new(Report::ListingsByFoodType, vec![table]);
        let chart = output.chart.expect("food types are charted");

        assert_eq!(chart.kind, ChartKind::Pie);
        assert_eq!(chart.title, "Food Type Distribution");
        assert_eq!(
            chart.points,
            vec![
                ChartPoint {
                    label: "Fruits".into(),
                    value: 3.0
                },
                ChartPoint {
                    label: "Vegetables".into(),
                    value: 2.0
                },
            ]
        );
        assert_eq!(chart.total(), 5.0);
    }

    #[test]
    fn test_top_five_receivers_by_name() {
        let rows = (1..=7)
            .map(|i| {
                vec![
                    Cell::Integer(i),
                    Cell::Text(format!("Receiver {}", i)),
                    Cell::Integer(i * 2),
                ]
            })
            .collect();
        let table = ResultTable::new(None, &["Receiver ID", "Name", "No of Claims"], rows);

        let chart = Report::ReceiversByCompletedClaims
            .chart(&[table])
            .expect("receivers are charted");

        let labels: Vec<&str> = chart.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Receiver 7",
                "Receiver 6",
                "Receiver 5",
                "Receiver 4",
                "Receiver 3"
            ]
        );
    }

    #[test]
    fn test_reports_without_chart() {
        let table = ResultTable::new(None, &["Name", "Contact"], vec![]);
        assert_eq!(Report::ProviderContactsInCity.chart(&[table]), None);
        assert_eq!(Report::ClaimStatusShare.chart(&[]), None);
    }

    #[test]
    fn test_output_serializes_cells_untagged() {
        let table = ResultTable::new(
            Some("Completed vs Pending vs Cancelled"),
            &["Status", "Percentage"],
            vec![vec![Cell::Text("Completed".into()), Cell::Float(62.5)]],
        );

        let json = serde_json::to_value(&ReportOutput::new(Report::ClaimStatusShare, vec![table]))
            .expect("Unable to serialize report output");

        assert_eq!(json["report"], "ClaimStatusShare");
        assert_eq!(json["tables"][0]["rows"], serde_json::json!([["Completed", 62.5]]));
        assert_eq!(json["chart"]["kind"], "Donut");
        assert_eq!(json["chart"]["x_label"], serde_json::Value::Null);
    }

    #[test]
    fn test_default_params() {
        assert_eq!(ReportParams::default().city, "New Carol");
    }
}
