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

use food_rescue_sdk::donations::{parse_record_id, DonationStore, Entity};

use crate::error::CliError;
use crate::render::format_rows;

/// How providers or receivers are looked up.
pub enum Filter<'a> {
    City(&'a str),
    Id(&'a str),
}

impl Filter<'_> {
    fn text(&self) -> &str {
        match self {
            Filter::City(text) | Filter::Id(text) => text,
        }
    }
}

pub fn do_filter_providers(store: &dyn DonationStore, filter: Filter) -> Result<(), CliError> {
    match filter {
        Filter::City(city) => {
            let rows: Vec<Vec<String>> = store
                .list_providers(Some(city))?
                .into_iter()
                .map(|p| vec![p.provider_id.to_string(), p.name, p.address, p.contact])
                .collect();
            print_results(&filter, &["Provider ID", "Name", "Address", "Contact"], &rows);
        }
        Filter::Id(id) => {
            let rows: Vec<Vec<String>> = store
                .fetch_provider(parse_record_id(Entity::Provider, id)?)?
                .into_iter()
                .map(|p| vec![p.name, p.address, p.contact])
                .collect();
            print_results(&filter, &["Name", "Address", "Contact"], &rows);
        }
    }

    Ok(())
}

pub fn do_filter_receivers(store: &dyn DonationStore, filter: Filter) -> Result<(), CliError> {
    match filter {
        Filter::City(city) => {
            let rows: Vec<Vec<String>> = store
                .list_receivers(Some(city))?
                .into_iter()
                .map(|r| vec![r.receiver_id.to_string(), r.name, r.contact])
                .collect();
            print_results(&filter, &["Receiver ID", "Name", "Contact"], &rows);
        }
        Filter::Id(id) => {
            let rows: Vec<Vec<String>> = store
                .fetch_receiver(parse_record_id(Entity::Receiver, id)?)?
                .into_iter()
                .map(|r| vec![r.name, r.contact])
                .collect();
            print_results(&filter, &["Name", "Contact"], &rows);
        }
    }

    Ok(())
}

fn print_results(filter: &Filter, header: &[&str], rows: &[Vec<String>]) {
    debug!("{} row(s) matched '{}'", rows.len(), filter.text());

    let header: Vec<String> = header.iter().map(|column| column.to_string()).collect();
    println!("Search results for '{}'", filter.text());
    println!("{}", format_rows(&header, rows));
}
