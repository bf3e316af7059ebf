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

use diesel::sql_types::{BigInt, Double, Text};

use super::ReportStoreOperations;
use crate::error::InternalError;
use crate::reports::store::ReportStoreError;
use crate::reports::{Cell, Report, ResultTable};

// Every statement aliases its columns to the names of one of the row structs below, and casts
// aggregates so PostgreSQL and SQLite return the same types. Secondary sort keys only make ties
// repeatable.

const PROVIDERS_PER_CITY: &str = "
    SELECT city AS label, COUNT(*) AS total
    FROM providers
    GROUP BY city
    ORDER BY total DESC, label";

const RECEIVERS_PER_CITY: &str = "
    SELECT city AS label, COUNT(*) AS total
    FROM receivers
    GROUP BY city
    ORDER BY total DESC, label";

const QUANTITY_BY_PROVIDER_TYPE: &str = "
    SELECT provider_type AS label, CAST(SUM(quantity) AS BIGINT) AS total
    FROM food_listings
    GROUP BY provider_type
    ORDER BY total DESC, label";

const RECEIVERS_BY_COMPLETED_CLAIMS: &str = "
    SELECT r.receiver_id AS id, r.name AS name, COUNT(c.claim_id) AS total
    FROM receivers r
    JOIN claims c ON r.receiver_id = c.receiver_id
    WHERE c.status = 'Completed'
    GROUP BY r.name, r.receiver_id
    ORDER BY total DESC, id";

const QUANTITY_PER_PROVIDER: &str = "
    SELECT p.provider_id AS id, p.name AS name, CAST(SUM(f.quantity) AS BIGINT) AS total
    FROM providers p
    JOIN food_listings f ON p.provider_id = f.provider_id
    GROUP BY p.provider_id, p.name
    ORDER BY total DESC, id";

const TOTAL_QUANTITY_AVAILABLE: &str = "
    SELECT CAST(COALESCE(SUM(quantity), 0) AS BIGINT) AS total
    FROM food_listings";

const CITY_WITH_MOST_LISTINGS: &str = "
    SELECT location AS label, COUNT(*) AS total
    FROM food_listings
    GROUP BY location
    ORDER BY total DESC, label
    LIMIT 1";

const LISTINGS_BY_FOOD_TYPE: &str = "
    SELECT food_type AS label, COUNT(*) AS total
    FROM food_listings
    GROUP BY food_type
    ORDER BY total DESC, label";

const CLAIMS_PER_FOOD_ITEM: &str = "
    SELECT f.food_id AS id, f.food_name AS name, COUNT(c.claim_id) AS total
    FROM claims c
    JOIN food_listings f ON f.food_id = c.food_id
    GROUP BY f.food_id, f.food_name
    ORDER BY total DESC, id";

const TOP_PROVIDER_BY_COMPLETED_CLAIMS: &str = "
    SELECT p.provider_id AS id, p.name AS name, COUNT(c.claim_id) AS total
    FROM claims c
    JOIN food_listings f ON c.food_id = f.food_id
    JOIN providers p ON f.provider_id = p.provider_id
    WHERE c.status = 'Completed'
    GROUP BY p.provider_id, p.name
    ORDER BY total DESC, id
    LIMIT 1";

const CLAIM_STATUS_SHARE: &str = "
    SELECT status AS label,
           CAST(COUNT(*) AS DOUBLE PRECISION) * 100.0 / (SELECT COUNT(*) FROM claims) AS share
    FROM claims
    GROUP BY status
    ORDER BY share DESC, label";

const AVERAGE_QUANTITY_PER_RECEIVER: &str = "
    SELECT r.receiver_id AS id, r.name AS name,
           CAST(AVG(f.quantity) AS DOUBLE PRECISION) AS average
    FROM receivers r
    JOIN claims c ON r.receiver_id = c.receiver_id
    JOIN food_listings f ON f.food_id = c.food_id
    GROUP BY r.receiver_id, r.name
    ORDER BY average DESC, id";

const TOP_CLAIMED_MEAL_TYPE: &str = "
    SELECT f.meal_type AS label, COUNT(c.claim_id) AS total
    FROM claims c
    JOIN food_listings f ON c.food_id = f.food_id
    GROUP BY f.meal_type
    ORDER BY total DESC, label
    LIMIT 1";

const QUANTITY_DONATED_PER_PROVIDER: &str = "
    SELECT p.provider_id AS id, p.name AS name, CAST(SUM(f.quantity) AS BIGINT) AS total
    FROM food_listings f
    JOIN providers p ON p.provider_id = f.provider_id
    GROUP BY p.provider_id, p.name
    ORDER BY total DESC, id";

const CANCELLED_CLAIMS_PER_FOOD_ITEM: &str = "
    SELECT f.food_name AS label, COUNT(c.claim_id) AS total
    FROM food_listings f
    JOIN claims c ON f.food_id = c.food_id
    WHERE c.status = 'Cancelled'
    GROUP BY f.food_name
    ORDER BY total DESC, label";

const DISTINCT_FOODS_PER_PROVIDER: &str = "
    SELECT p.provider_id AS id, p.name AS name, COUNT(DISTINCT f.food_name) AS total
    FROM providers p
    JOIN food_listings f ON p.provider_id = f.provider_id
    GROUP BY p.provider_id, p.name
    ORDER BY total DESC, id";

#[derive(QueryableByName)]
struct LabelCount {
    #[sql_type = "Text"]
    label: String,

    #[sql_type = "BigInt"]
    total: i64,
}

#[derive(QueryableByName)]
struct LabelShare {
    #[sql_type = "Text"]
    label: String,

    #[sql_type = "Double"]
    share: f64,
}

#[derive(QueryableByName)]
struct NamedCount {
    #[sql_type = "BigInt"]
    id: i64,

    #[sql_type = "Text"]
    name: String,

    #[sql_type = "BigInt"]
    total: i64,
}

#[derive(QueryableByName)]
struct NamedAverage {
    #[sql_type = "BigInt"]
    id: i64,

    #[sql_type = "Text"]
    name: String,

    #[sql_type = "Double"]
    average: f64,
}

#[derive(QueryableByName)]
struct GrandTotal {
    #[sql_type = "BigInt"]
    total: i64,
}

/// Runs every report whose statements take no parameters.
pub(in crate::reports::store::diesel) trait ReportStoreFixedReportOperation {
    fn fixed_report(&self, report: Report) -> Result<Vec<ResultTable>, ReportStoreError>;
}

impl<'a, C> ReportStoreFixedReportOperation for ReportStoreOperations<'a, C>
where
    C: diesel::Connection,
    i64: diesel::deserialize::FromSql<BigInt, C::Backend>,
    f64: diesel::deserialize::FromSql<Double, C::Backend>,
    String: diesel::deserialize::FromSql<Text, C::Backend>,
{
    fn fixed_report(&self, report: Report) -> Result<Vec<ResultTable>, ReportStoreError> {
        let tables = match report {
            Report::CityCounts => vec![
                label_counts(
                    Some("Food Providers"),
                    ["City", "Provider Count"],
                    self.load(PROVIDERS_PER_CITY)?,
                ),
                label_counts(
                    Some("Food Receivers"),
                    ["City", "Receiver Count"],
                    self.load(RECEIVERS_PER_CITY)?,
                ),
            ],
            Report::QuantityByProviderType => vec![label_counts(
                None,
                ["Provider Type", "Total Quantity"],
                self.load(QUANTITY_BY_PROVIDER_TYPE)?,
            )],
            Report::ReceiversByCompletedClaims => vec![named_counts(
                ["Receiver ID", "Name", "No of Claims"],
                self.load(RECEIVERS_BY_COMPLETED_CLAIMS)?,
            )],
            Report::QuantityPerProvider => {
                let grand_total = self
                    .load::<GrandTotal>(TOTAL_QUANTITY_AVAILABLE)?
                    .into_iter()
                    .map(|row| vec![Cell::Integer(row.total)])
                    .collect();

                vec![
                    named_counts(
                        ["Provider ID", "Name", "Total Quantity"],
                        self.load(QUANTITY_PER_PROVIDER)?,
                    ),
                    ResultTable::new(None, &["Total Quantity Available"], grand_total),
                ]
            }
            Report::CityWithMostListings => vec![label_counts(
                None,
                ["Location", "Total Listing"],
                self.load(CITY_WITH_MOST_LISTINGS)?,
            )],
            Report::ListingsByFoodType => vec![label_counts(
                None,
                ["Food Type", "Total Listing"],
                self.load(LISTINGS_BY_FOOD_TYPE)?,
            )],
            Report::ClaimsPerFoodItem => vec![named_counts(
                ["Food ID", "Food Name", "Claim Count"],
                self.load(CLAIMS_PER_FOOD_ITEM)?,
            )],
            Report::TopProviderByCompletedClaims => vec![named_counts(
                ["Provider ID", "Provider Name", "Successful Claims"],
                self.load(TOP_PROVIDER_BY_COMPLETED_CLAIMS)?,
            )],
            Report::ClaimStatusShare => {
                let rows = self
                    .load::<LabelShare>(CLAIM_STATUS_SHARE)?
                    .into_iter()
                    .map(|row| vec![Cell::Text(row.label), Cell::Float(row.share)])
                    .collect();

                vec![ResultTable::new(
                    Some("Completed vs Pending vs Cancelled"),
                    &["Status", "Percentage"],
                    rows,
                )]
            }
            Report::AverageQuantityPerReceiver => {
                let rows = self
                    .load::<NamedAverage>(AVERAGE_QUANTITY_PER_RECEIVER)?
                    .into_iter()
                    .map(|row| {
                        vec![
                            Cell::Integer(row.id),
                            Cell::Text(row.name),
                            Cell::Float(row.average),
                        ]
                    })
                    .collect();

                vec![ResultTable::new(
                    None,
                    &["Receiver ID", "Receiver Name", "Average Quantity"],
                    rows,
                )]
            }
            Report::TopClaimedMealType => vec![label_counts(
                None,
                ["Meal Type", "Claim Count"],
                self.load(TOP_CLAIMED_MEAL_TYPE)?,
            )],
            Report::QuantityDonatedPerProvider => vec![named_counts(
                ["Provider ID", "Provider Name", "Total Quantity"],
                self.load(QUANTITY_DONATED_PER_PROVIDER)?,
            )],
            Report::CancelledClaimsPerFoodItem => vec![label_counts(
                None,
                ["Food Name", "Cancelled Claims"],
                self.load(CANCELLED_CLAIMS_PER_FOOD_ITEM)?,
            )],
            Report::DistinctFoodsPerProvider => vec![named_counts(
                ["Provider ID", "Provider Name", "Unique Food Items"],
                self.load(DISTINCT_FOODS_PER_PROVIDER)?,
            )],
            Report::ProviderContactsInCity => {
                return Err(ReportStoreError::InternalError(InternalError::with_message(
                    format!("Report {} is filtered by city", report.number()),
                )))
            }
        };

        Ok(tables)
    }
}

fn label_counts(title: Option<&str>, columns: [&str; 2], rows: Vec<LabelCount>) -> ResultTable {
    ResultTable::new(
        title,
        &columns,
        rows.into_iter()
            .map(|row| vec![Cell::Text(row.label), Cell::Integer(row.total)])
            .collect(),
    )
}

fn named_counts(columns: [&str; 3], rows: Vec<NamedCount>) -> ResultTable {
    ResultTable::new(
        None,
        &columns,
        rows.into_iter()
            .map(|row| {
                vec![
                    Cell::Integer(row.id),
                    Cell::Text(row.name),
                    Cell::Integer(row.total),
                ]
            })
            .collect(),
    )
}
