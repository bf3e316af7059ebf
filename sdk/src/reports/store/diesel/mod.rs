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

mod operations;

use diesel::r2d2::{ConnectionManager, Pool};

use super::{ReportStore, ReportStoreError};
use crate::reports::{Report, ReportOutput, ReportParams};

use operations::fixed_report::ReportStoreFixedReportOperation as _;
use operations::provider_contacts::ReportStoreProviderContactsOperation as _;
use operations::ReportStoreOperations;

/// Runs the report catalogue against the donation tables
#[derive(Clone)]
pub struct DieselReportStore<C: diesel::Connection + 'static> {
    connection_pool: Pool<ConnectionManager<C>>,
}

impl<C: diesel::Connection> DieselReportStore<C> {
    /// Creates a new DieselReportStore
    ///
    /// # Arguments
    ///
    ///  * `connection_pool`: connection pool to the database
    pub fn new(connection_pool: Pool<ConnectionManager<C>>) -> Self {
        DieselReportStore { connection_pool }
    }
}

#[cfg(feature = "postgres")]
impl ReportStore for DieselReportStore<diesel::pg::PgConnection> {
    fn run_report(
        &self,
        report: Report,
        params: &ReportParams,
    ) -> Result<ReportOutput, ReportStoreError> {
        let connection = self.connection_pool.get()?;
        let operations = ReportStoreOperations::new(&*connection);

        let tables = match report {
            Report::ProviderContactsInCity => operations.provider_contacts(&params.city)?,
            _ => operations.fixed_report(report)?,
        };

        Ok(ReportOutput::new(report, tables))
    }
}

#[cfg(feature = "sqlite")]
impl ReportStore for DieselReportStore<diesel::sqlite::SqliteConnection> {
    fn run_report(
        &self,
        report: Report,
        params: &ReportParams,
    ) -> Result<ReportOutput, ReportStoreError> {
        let connection = self.connection_pool.get()?;
        let operations = ReportStoreOperations::new(&*connection);

        let tables = match report {
            Report::ProviderContactsInCity => operations.provider_contacts(&params.city)?,
            _ => operations.fixed_report(report)?,
        };

        Ok(ReportOutput::new(report, tables))
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use super::*;

    use chrono::{NaiveDate, NaiveDateTime};
    use pretty_assertions::assert_eq;

    use crate::donations::store::diesel::DieselDonationStore;
    use crate::donations::{
        Claim, ClaimStatus, DonationStore, FoodListing, Provider, Receiver, Record,
    };
    use crate::reports::{Cell, ChartKind, ResultTable};
    use crate::testing::create_connection_pool_and_migrate;

    fn provider(provider_id: i64, name: &str, city: &str) -> Record {
        Record::Provider(Provider {
            provider_id,
            name: name.to_string(),
            provider_type: "Restaurant".to_string(),
            address: "1 Main St".to_string(),
            city: city.to_string(),
            contact: format!("555-{:04}", provider_id),
        })
    }

    fn receiver(receiver_id: i64, name: &str) -> Record {
        Record::Receiver(Receiver {
            receiver_id,
            name: name.to_string(),
            receiver_type: "Shelter".to_string(),
            city: "Springfield".to_string(),
            contact: "555-9999".to_string(),
        })
    }

    fn listing(food_id: i64, food_type: &str, quantity: i64, provider_id: i64) -> Record {
        Record::FoodListing(FoodListing {
            food_id,
            food_name: format!("Food {}", food_id),
            quantity,
            expiry_date: NaiveDate::from_ymd(2024, 3, 15),
            provider_id,
            provider_type: "Restaurant".to_string(),
            location: "Springfield".to_string(),
            food_type: food_type.to_string(),
            meal_type: "Lunch".to_string(),
        })
    }

    fn food(
        food_id: i64,
        food_name: &str,
        quantity: i64,
        provider_id: i64,
        location: &str,
        meal_type: &str,
    ) -> Record {
        Record::FoodListing(FoodListing {
            food_id,
            food_name: food_name.to_string(),
            quantity,
            expiry_date: NaiveDate::from_ymd(2024, 3, 15),
            provider_id,
            provider_type: "Restaurant".to_string(),
            location: location.to_string(),
            food_type: "Vegetarian".to_string(),
            meal_type: meal_type.to_string(),
        })
    }

    fn claim(claim_id: i64, food_id: i64, receiver_id: i64, status: ClaimStatus) -> Record {
        Record::Claim(Claim {
            claim_id,
            food_id,
            receiver_id,
            status,
            timestamp: NaiveDateTime::parse_from_str("2024-02-28 10:00:00", "%Y-%m-%d %H:%M:%S")
                .expect("valid timestamp"),
        })
    }

    /// Returns a report store and a donation store sharing one in-memory database.
    fn stores() -> (
        DieselReportStore<diesel::sqlite::SqliteConnection>,
        DieselDonationStore<diesel::sqlite::SqliteConnection>,
    ) {
        let pool = create_connection_pool_and_migrate();
        (
            DieselReportStore::new(pool.clone()),
            DieselDonationStore::new(pool),
        )
    }

    fn add_all(store: &dyn DonationStore, records: Vec<Record>) {
        for record in records {
            store.add_record(record).expect("Failed to add record");
        }
    }

    fn run(store: &dyn ReportStore, report: Report) -> ReportOutput {
        store
            .run_report(report, &ReportParams::default())
            .expect("Failed to run report")
    }

    #[test]
    fn test_listings_by_food_type() {
        let (reports, donations) = stores();
        add_all(
            &donations,
            vec![
                listing(1, "Fruits", 10, 1),
                listing(2, "Vegetables", 10, 1),
                listing(3, "Fruits", 10, 1),
                listing(4, "Vegetables", 10, 1),
                listing(5, "Fruits", 10, 1),
            ],
        );

        let output = run(&reports, Report::ListingsByFoodType);

        assert_eq!(
            output.tables,
            vec![ResultTable::new(
                None,
                &["Food Type", "Total Listing"],
                vec![
                    vec![Cell::Text("Fruits".into()), Cell::Integer(3)],
                    vec![Cell::Text("Vegetables".into()), Cell::Integer(2)],
                ],
            )]
        );

        let chart = output.chart.expect("food types are charted");
        assert_eq!(chart.kind, ChartKind::Pie);
        assert_eq!(chart.total(), 5.0);
    }

    #[test]
    fn test_claim_status_share_sums_to_one_hundred() {
        let (reports, donations) = stores();
        add_all(
            &donations,
            vec![
                claim(1, 1, 1, ClaimStatus::Completed),
                claim(2, 1, 1, ClaimStatus::Completed),
                claim(3, 1, 1, ClaimStatus::Pending),
                claim(4, 1, 1, ClaimStatus::Cancelled),
                claim(5, 1, 1, ClaimStatus::Cancelled),
                claim(6, 1, 1, ClaimStatus::Completed),
            ],
        );

        let output = run(&reports, Report::ClaimStatusShare);
        let table = &output.tables[0];

        assert_eq!(table.rows[0][0], Cell::Text("Completed".into()));
        assert_eq!(table.rows[0][1], Cell::Float(50.0));

        let chart = output.chart.expect("status share is charted");
        assert_eq!(chart.kind, ChartKind::Donut);
        assert!((chart.total() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_grand_total_of_empty_listings_is_zero() {
        let (reports, _) = stores();

        let output = run(&reports, Report::QuantityPerProvider);

        assert_eq!(output.tables.len(), 2);
        assert!(output.tables[0].rows.is_empty());
        assert_eq!(output.tables[1].rows, vec![vec![Cell::Integer(0)]]);
    }

    #[test]
    fn test_quantity_per_provider() {
        let (reports, donations) = stores();
        add_all(
            &donations,
            vec![
                provider(1, "Acme", "Springfield"),
                provider(2, "Bakery", "Springfield"),
                listing(1, "Fruits", 10, 1),
                listing(2, "Fruits", 5, 2),
                listing(3, "Fruits", 20, 2),
                // no matching provider: counted only in the grand total
                listing(4, "Fruits", 1, 99),
            ],
        );

        let output = run(&reports, Report::QuantityPerProvider);

        assert_eq!(
            output.tables[0].rows,
            vec![
                vec![
                    Cell::Integer(2),
                    Cell::Text("Bakery".into()),
                    Cell::Integer(25)
                ],
                vec![
                    Cell::Integer(1),
                    Cell::Text("Acme".into()),
                    Cell::Integer(10)
                ],
            ]
        );
        assert_eq!(output.tables[1].rows, vec![vec![Cell::Integer(36)]]);

        let chart = output.chart.expect("providers are charted");
        assert_eq!(chart.points[0].label, "Bakery");
    }

    #[test]
    fn test_provider_contacts_use_the_given_city() {
        let (reports, donations) = stores();
        add_all(
            &donations,
            vec![
                provider(1, "Acme", "New Carol"),
                provider(2, "Bakery", "Springfield"),
                provider(3, "Cafe", "New Carol"),
            ],
        );

        let output = run(&reports, Report::ProviderContactsInCity);
        assert_eq!(
            output.tables[0].title.as_deref(),
            Some("Providers from New Carol")
        );
        assert_eq!(output.tables[0].rows.len(), 2);

        let output = reports
            .run_report(
                Report::ProviderContactsInCity,
                &ReportParams {
                    city: "Springfield".into(),
                },
            )
            .expect("Failed to run report");
        assert_eq!(
            output.tables[0].rows,
            vec![vec![
                Cell::Text("Bakery".into()),
                Cell::Text("555-0002".into())
            ]]
        );
        assert!(output.chart.is_none());
    }

    #[test]
    fn test_completed_claims_per_receiver() {
        let (reports, donations) = stores();
        add_all(
            &donations,
            vec![
                receiver(1, "Shelter"),
                receiver(2, "Pantry"),
                claim(1, 1, 1, ClaimStatus::Completed),
                claim(2, 1, 2, ClaimStatus::Completed),
                claim(3, 1, 2, ClaimStatus::Completed),
                claim(4, 1, 1, ClaimStatus::Pending),
            ],
        );

        let output = run(&reports, Report::ReceiversByCompletedClaims);

        assert_eq!(
            output.tables[0].rows,
            vec![
                vec![
                    Cell::Integer(2),
                    Cell::Text("Pantry".into()),
                    Cell::Integer(2)
                ],
                vec![
                    Cell::Integer(1),
                    Cell::Text("Shelter".into()),
                    Cell::Integer(1)
                ],
            ]
        );
    }

    /// Two providers, one listing the same food name twice, and claims in every status.
    ///
    /// Acme has the most completed claims while Bakery has the most claims overall.
    fn seeded_reports() -> DieselReportStore<diesel::sqlite::SqliteConnection> {
        let (reports, donations) = stores();
        add_all(
            &donations,
            vec![
                provider(1, "Acme", "New Carol"),
                provider(2, "Bakery", "Springfield"),
                receiver(1, "Shelter"),
                receiver(2, "Pantry"),
                food(1, "Bread", 5, 1, "New Carol", "Breakfast"),
                food(2, "Bread", 7, 1, "New Carol", "Dinner"),
                food(3, "Soup", 3, 1, "Springfield", "Dinner"),
                food(4, "Apples", 20, 2, "New Carol", "Lunch"),
                claim(1, 1, 1, ClaimStatus::Completed),
                claim(2, 3, 1, ClaimStatus::Completed),
                claim(3, 4, 2, ClaimStatus::Completed),
                claim(4, 4, 2, ClaimStatus::Cancelled),
                claim(5, 4, 1, ClaimStatus::Pending),
                claim(6, 4, 1, ClaimStatus::Cancelled),
                claim(7, 2, 2, ClaimStatus::Cancelled),
            ],
        );
        reports
    }

    #[test]
    fn test_city_with_most_listings_is_a_single_row() {
        let reports = seeded_reports();

        let output = run(&reports, Report::CityWithMostListings);

        assert_eq!(
            output.tables[0].rows,
            vec![vec![Cell::Text("New Carol".into()), Cell::Integer(3)]]
        );
    }

    #[test]
    fn test_claims_per_food_item() {
        let reports = seeded_reports();

        let output = run(&reports, Report::ClaimsPerFoodItem);

        assert_eq!(
            output.tables[0].rows,
            vec![
                vec![
                    Cell::Integer(4),
                    Cell::Text("Apples".into()),
                    Cell::Integer(4)
                ],
                vec![
                    Cell::Integer(1),
                    Cell::Text("Bread".into()),
                    Cell::Integer(1)
                ],
                vec![
                    Cell::Integer(2),
                    Cell::Text("Bread".into()),
                    Cell::Integer(1)
                ],
                vec![
                    Cell::Integer(3),
                    Cell::Text("Soup".into()),
                    Cell::Integer(1)
                ],
            ]
        );
    }

    #[test]
    fn test_top_provider_counts_only_completed_claims() {
        let reports = seeded_reports();

        let output = run(&reports, Report::TopProviderByCompletedClaims);

        // Bakery has four claims in total but only one completed
        assert_eq!(
            output.tables[0].rows,
            vec![vec![
                Cell::Integer(1),
                Cell::Text("Acme".into()),
                Cell::Integer(2)
            ]]
        );
    }

    #[test]
    fn test_top_claimed_meal_type_is_a_single_row() {
        let reports = seeded_reports();

        let output = run(&reports, Report::TopClaimedMealType);

        assert_eq!(
            output.tables[0].rows,
            vec![vec![Cell::Text("Lunch".into()), Cell::Integer(4)]]
        );
    }

    #[test]
    fn test_quantity_donated_per_provider() {
        let reports = seeded_reports();

        let output = run(&reports, Report::QuantityDonatedPerProvider);

        assert_eq!(
            output.tables[0].rows,
            vec![
                vec![
                    Cell::Integer(2),
                    Cell::Text("Bakery".into()),
                    Cell::Integer(20)
                ],
                vec![
                    Cell::Integer(1),
                    Cell::Text("Acme".into()),
                    Cell::Integer(15)
                ],
            ]
        );
    }

    #[test]
    fn test_cancelled_claims_per_food_item() {
        let reports = seeded_reports();

        let output = run(&reports, Report::CancelledClaimsPerFoodItem);

        assert_eq!(
            output.tables[0].rows,
            vec![
                vec![Cell::Text("Apples".into()), Cell::Integer(2)],
                vec![Cell::Text("Bread".into()), Cell::Integer(1)],
            ]
        );
    }

    #[test]
    fn test_distinct_foods_per_provider_ignores_repeated_names() {
        let reports = seeded_reports();

        let output = run(&reports, Report::DistinctFoodsPerProvider);

        assert_eq!(
            output.tables[0].rows,
            vec![
                vec![
                    Cell::Integer(1),
                    Cell::Text("Acme".into()),
                    Cell::Integer(2)
                ],
                vec![
                    Cell::Integer(2),
                    Cell::Text("Bakery".into()),
                    Cell::Integer(1)
                ],
            ]
        );
    }

    #[test]
    fn test_every_report_runs() {
        let (reports, donations) = stores();
        add_all(
            &donations,
            vec![
                provider(1, "Acme", "New Carol"),
                receiver(1, "Shelter"),
                listing(1, "Fruits", 10, 1),
                listing(2, "Vegetables", 4, 1),
                claim(1, 1, 1, ClaimStatus::Completed),
                claim(2, 2, 1, ClaimStatus::Cancelled),
            ],
        );

        for report in Report::all() {
            let output = run(&reports, *report);
            assert_eq!(output.report, *report);
            assert!(!output.tables.is_empty(), "{}", report);
            assert_eq!(
                output.chart.is_some(),
                report.chart_kind().is_some(),
                "{}",
                report
            );
        }

        let output = run(&reports, Report::AverageQuantityPerReceiver);
        assert_eq!(output.tables[0].rows[0][2], Cell::Float(7.0));
    }
}
