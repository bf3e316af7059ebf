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

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

mod actions;
mod config;
mod error;
mod render;

use std::str::FromStr;

use clap::{App, AppSettings, Arg, ArgGroup, ArgMatches, SubCommand};
use flexi_logger::{DeferredNow, LogSpecBuilder, Logger};
use food_rescue_sdk::donations::{
    ClaimForm, Entity, FieldUpdateForm, FoodListingForm, ProviderForm, ReceiverForm, RecordForm,
};
use food_rescue_sdk::store::{create_store_factory, ConnectionUri, StoreFactory};
use log::Record;

use crate::config::{
    ClapPartialDashboardConfigBuilder, DashboardConfig, DashboardConfigBuilder,
    DefaultPartialDashboardConfigBuilder, EnvPartialDashboardConfigBuilder,
    PartialDashboardConfigBuilder,
};
use crate::error::CliError;

use actions::filters::Filter;
use actions::reports::OutputFormat;
use actions::{about, database, filters, records, reports};

const APP_NAME: &str = "food-rescue";
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Argument name, long flag and help for one column an insert takes.
type FieldArg = (&'static str, &'static str, &'static str);

const PROVIDER_ARGS: &[FieldArg] = &[
    ("id", "id", "Provider ID"),
    ("name", "name", "Name of the provider"),
    ("type", "type", "Kind of provider, e.g. Restaurant or Supermarket"),
    ("address", "address", "Street address"),
    ("city", "city", "City the provider is in"),
    ("contact", "contact", "Phone number or email"),
];

const RECEIVER_ARGS: &[FieldArg] = &[
    ("id", "id", "Receiver ID"),
    ("name", "name", "Name of the receiver"),
    ("type", "type", "Kind of receiver, e.g. NGO or Shelter"),
    ("city", "city", "City the receiver is in"),
    ("contact", "contact", "Phone number or email"),
];

const LISTING_ARGS: &[FieldArg] = &[
    ("id", "id", "Food ID"),
    ("name", "name", "Name of the food"),
    ("quantity", "quantity", "Quantity available, a whole number"),
    ("expiry_date", "expiry-date", "Expiry date, YYYY-MM-DD"),
    ("provider_id", "provider-id", "ID of the provider listing the food"),
    ("provider_type", "provider-type", "Kind of provider listing the food"),
    ("location", "location", "City where the food can be collected"),
    ("food_type", "food-type", "Food type, e.g. Vegetarian"),
    ("meal_type", "meal-type", "Meal type, e.g. Breakfast"),
];

const CLAIM_ARGS: &[FieldArg] = &[
    ("id", "id", "Claim ID"),
    ("food_id", "food-id", "ID of the claimed food listing"),
    ("receiver_id", "receiver-id", "ID of the claiming receiver"),
    ("status", "status", "One of Pending, Completed or Cancelled"),
    ("timestamp", "timestamp", "Time of the claim, YYYY-MM-DD HH:MM:SS"),
];

fn log_format(
    w: &mut dyn std::io::Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(w, "{}", record.args(),)
}

/// Builds the `list`, `show`, `insert`, `update` and `delete` subcommands of one table.
fn entity_subcommand(
    name: &'static str,
    about: &'static str,
    entity: Entity,
    insert_args: &'static [FieldArg],
) -> App<'static, 'static> {
    let id_arg = || {
        Arg::with_name("id")
            .long("id")
            .takes_value(true)
            .required(true)
            .help(entity.id_label())
    };

    let insert = insert_args.iter().fold(
        SubCommand::with_name("insert").about("Insert a record; every field must be given"),
        |insert, &(arg, long, help)| {
            insert.arg(
                Arg::with_name(arg)
                    .long(long)
                    .takes_value(true)
                    .help(help),
            )
        },
    );

    SubCommand::with_name(name)
        .about(about)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(SubCommand::with_name("list").about("List every record"))
        .subcommand(
            SubCommand::with_name("show")
                .about("Show one record")
                .arg(id_arg()),
        )
        .subcommand(insert)
        .subcommand(
            SubCommand::with_name("update")
                .about("Change one field of a record")
                .arg(id_arg())
                .arg(
                    Arg::with_name("field")
                        .long("field")
                        .takes_value(true)
                        .required(true)
                        .possible_values(entity.updatable_fields())
                        .help("Field to change"),
                )
                .arg(
                    Arg::with_name("value")
                        .long("value")
                        .takes_value(true)
                        .required(true)
                        .help("New value of the field"),
                )
        )
        .subcommand(
            SubCommand::with_name("delete")
                .about("Delete a record")
                .arg(id_arg()),
        )
}

/// Value of an argument; an insert field left out is treated as empty input.
fn field(m: &ArgMatches, name: &str) -> String {
    m.value_of(name).unwrap_or_default().to_string()
}

fn required<'a>(m: &'a ArgMatches, name: &str) -> Result<&'a str, CliError> {
    m.value_of(name)
        .ok_or_else(|| CliError::UserError(format!("{} must be provided", name)))
}

fn record_form(entity: Entity, m: &ArgMatches) -> RecordForm {
    match entity {
        Entity::Provider => RecordForm::Provider(ProviderForm {
            provider_id: field(m, "id"),
            name: field(m, "name"),
            provider_type: field(m, "type"),
            address: field(m, "address"),
            city: field(m, "city"),
            contact: field(m, "contact"),
        }),
        Entity::Receiver => RecordForm::Receiver(ReceiverForm {
            receiver_id: field(m, "id"),
            name: field(m, "name"),
            receiver_type: field(m, "type"),
            city: field(m, "city"),
            contact: field(m, "contact"),
        }),
        Entity::FoodListing => RecordForm::FoodListing(FoodListingForm {
            food_id: field(m, "id"),
            food_name: field(m, "name"),
            quantity: field(m, "quantity"),
            expiry_date: field(m, "expiry_date"),
            provider_id: field(m, "provider_id"),
            provider_type: field(m, "provider_type"),
            location: field(m, "location"),
            food_type: field(m, "food_type"),
            meal_type: field(m, "meal_type"),
        }),
        Entity::Claim => RecordForm::Claim(ClaimForm {
            claim_id: field(m, "id"),
            food_id: field(m, "food_id"),
            receiver_id: field(m, "receiver_id"),
            status: field(m, "status"),
            timestamp: field(m, "timestamp"),
        }),
    }
}

fn open_store_factory(config: &DashboardConfig) -> Result<Box<dyn StoreFactory>, CliError> {
    let connection_uri = ConnectionUri::from_str(config.database_url())?;
    Ok(create_store_factory(&connection_uri)?)
}

fn run_record_command(
    entity: Entity,
    matches: &ArgMatches,
    config: &DashboardConfig,
) -> Result<(), CliError> {
    let factory = open_store_factory(config)?;
    let store = factory.get_donation_store();

    match matches.subcommand() {
        ("list", Some(_)) => records::do_list_records(&*store, entity),
        ("show", Some(m)) => records::do_show_record(&*store, entity, required(m, "id")?),
        ("insert", Some(m)) => records::do_insert_record(store, &record_form(entity, m)),
        ("update", Some(m)) => records::do_update_record(
            store,
            &FieldUpdateForm {
                entity,
                id: field(m, "id"),
                field: field(m, "field"),
                value: field(m, "value"),
            },
        ),
        ("delete", Some(m)) => records::do_delete_record(store, entity, required(m, "id")?),
        _ => Err(CliError::UserError("Subcommand not recognized".into())),
    }
}

fn filter_of<'a>(m: &'a ArgMatches) -> Result<Filter<'a>, CliError> {
    match (m.value_of("city"), m.value_of("id")) {
        (Some(city), None) => Ok(Filter::City(city)),
        (None, Some(id)) => Ok(Filter::Id(id)),
        _ => Err(CliError::UserError(
            "Exactly one of --city or --id must be provided".into(),
        )),
    }
}

fn filter_subcommand(
    name: &'static str,
    about: &'static str,
    id_help: &'static str,
) -> App<'static, 'static> {
    SubCommand::with_name(name)
        .about(about)
        .arg(
            Arg::with_name("city")
                .long("city")
                .takes_value(true)
                .help("Search by city"),
        )
        .arg(
            Arg::with_name("id")
                .long("id")
                .takes_value(true)
                .help(id_help),
        )
        .group(
            ArgGroup::with_name("search")
                .args(&["city", "id"])
                .required(true),
        )
}

fn run() -> Result<(), CliError> {
    let app = clap_app!(myapp =>
        (name: APP_NAME)
        (version: VERSION)
        (author: "Contributors to Food Rescue")
        (about: "Admin dashboard for the local food wastage management database")
        (@setting SubcommandRequiredElseHelp)
        (@arg verbose: -v +multiple +global "Log verbosely")
        (@arg quiet: -q --quiet +global conflicts_with[verbose] "Do not display output")
        (@arg connect: -C --connect +takes_value +global
            "Database URL: a postgres:// URL, a SQLite file or :memory:")
        (@subcommand about =>
            (about: "Describe the system and its commands"))
        (@subcommand database =>
            (about: "Manage the food rescue database")
            (@setting SubcommandRequiredElseHelp)
            (@subcommand migrate =>
                (about: "Run database migrations")))
    )
    .subcommand(entity_subcommand(
        "provider",
        "View and manage food providers",
        Entity::Provider,
        PROVIDER_ARGS,
    ))
    .subcommand(entity_subcommand(
        "receiver",
        "View and manage food receivers",
        Entity::Receiver,
        RECEIVER_ARGS,
    ))
    .subcommand(entity_subcommand(
        "listing",
        "View and manage food listings",
        Entity::FoodListing,
        LISTING_ARGS,
    ))
    .subcommand(entity_subcommand(
        "claim",
        "View and manage claims",
        Entity::Claim,
        CLAIM_ARGS,
    ))
    .subcommand(
        SubCommand::with_name("filter")
            .about("Find providers or receivers by city or ID")
            .setting(AppSettings::SubcommandRequiredElseHelp)
            .subcommand(filter_subcommand(
                "providers",
                "Find providers and their contact details",
                "Search by Provider ID",
            ))
            .subcommand(filter_subcommand(
                "receivers",
                "Find receivers and their contact details",
                "Search by Receiver ID",
            )),
    )
    .subcommand(
        SubCommand::with_name("report")
            .about("Run the standing reports")
            .setting(AppSettings::SubcommandRequiredElseHelp)
            .subcommand(SubCommand::with_name("list").about("List every report with its number"))
            .subcommand(
                SubCommand::with_name("run")
                    .about("Run one report")
                    .arg(
                        Arg::with_name("number")
                            .required(true)
                            .help("Number of the report, as shown by `report list`"),
                    )
                    .arg(
                        Arg::with_name("city")
                            .long("city")
                            .takes_value(true)
                            .help("City of the provider contacts report"),
                    )
                    .arg(
                        Arg::with_name("format")
                            .long("format")
                            .takes_value(true)
                            .possible_values(&["text", "json"])
                            .default_value("text")
                            .help("Output format"),
                    ),
            ),
    );

    let matches = app.get_matches();

    let config = DashboardConfigBuilder::new()
        .with_partial_config(ClapPartialDashboardConfigBuilder::new(&matches).build()?)
        .with_partial_config(EnvPartialDashboardConfigBuilder::new().build()?)
        .with_partial_config(DefaultPartialDashboardConfigBuilder::new().build()?)
        .build()?;

    let mut log_spec_builder = LogSpecBuilder::new();
    log_spec_builder.default(config.verbosity());

    Logger::with(log_spec_builder.build())
        .format(log_format)
        .start()?;

    config.log_as_debug();

    match matches.subcommand() {
        ("about", Some(_)) => about::do_about(),
        ("database", Some(m)) => match m.subcommand() {
            ("migrate", Some(_)) => database::run_migrations(config.database_url())?,
            _ => return Err(CliError::UserError("Subcommand not recognized".into())),
        },
        ("provider", Some(m)) => run_record_command(Entity::Provider, m, &config)?,
        ("receiver", Some(m)) => run_record_command(Entity::Receiver, m, &config)?,
        ("listing", Some(m)) => run_record_command(Entity::FoodListing, m, &config)?,
        ("claim", Some(m)) => run_record_command(Entity::Claim, m, &config)?,
        ("filter", Some(m)) => {
            let factory = open_store_factory(&config)?;
            let store = factory.get_donation_store();
            match m.subcommand() {
                ("providers", Some(m)) => filters::do_filter_providers(&*store, filter_of(m)?)?,
                ("receivers", Some(m)) => filters::do_filter_receivers(&*store, filter_of(m)?)?,
                _ => return Err(CliError::UserError("Subcommand not recognized".into())),
            }
        }
        ("report", Some(m)) => match m.subcommand() {
            ("list", Some(_)) => reports::do_list_reports(),
            ("run", Some(m)) => {
                let format = OutputFormat::from_arg(m.value_of("format").unwrap_or("text"))?;
                let factory = open_store_factory(&config)?;
                let store = factory.get_report_store();
                reports::do_run_report(
                    &*store,
                    required(m, "number")?,
                    m.value_of("city"),
                    format,
                )?
            }
            _ => return Err(CliError::UserError("Subcommand not recognized".into())),
        },
        _ => return Err(CliError::UserError("Subcommand not recognized".into())),
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
