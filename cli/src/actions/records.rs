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

use food_rescue_sdk::donations::{
    parse_record_id, Claim, DonationStore, Entity, FieldUpdateForm, FoodListing, MutationError,
    MutationExecutor, MutationOutcome, Provider, Receiver, RecordForm,
};
use food_rescue_sdk::validation::{DATE_FORMAT, TIMESTAMP_FORMAT};

use crate::error::CliError;
use crate::render::{print_table, TableDisplay};

impl TableDisplay for Provider {
    fn header() -> &'static [&'static str] {
        &["Provider ID", "Name", "Type", "Address", "City", "Contact"]
    }

    fn details(&self) -> Vec<String> {
        vec![
            self.provider_id.to_string(),
            self.name.clone(),
            self.provider_type.clone(),
            self.address.clone(),
            self.city.clone(),
            self.contact.clone(),
        ]
    }
}

impl TableDisplay for Receiver {
    fn header() -> &'static [&'static str] {
        &["Receiver ID", "Name", "Type", "City", "Contact"]
    }

    fn details(&self) -> Vec<String> {
        vec![
            self.receiver_id.to_string(),
            self.name.clone(),
            self.receiver_type.clone(),
            self.city.clone(),
            self.contact.clone(),
        ]
    }
}

impl TableDisplay for FoodListing {
    fn header() -> &'static [&'static str] {
        &[
            "Food ID",
            "Name",
            "Quantity",
            "Expiry Date",
            "Provider ID",
            "Provider Type",
            "Location",
            "Food Type",
            "Meal Type",
        ]
    }

    fn details(&self) -> Vec<String> {
        vec![
            self.food_id.to_string(),
            self.food_name.clone(),
            self.quantity.to_string(),
            self.expiry_date.format(DATE_FORMAT).to_string(),
            self.provider_id.to_string(),
            self.provider_type.clone(),
            self.location.clone(),
            self.food_type.clone(),
            self.meal_type.clone(),
        ]
    }
}

impl TableDisplay for Claim {
    fn header() -> &'static [&'static str] {
        &["Claim ID", "Food ID", "Receiver ID", "Status", "Timestamp"]
    }

    fn details(&self) -> Vec<String> {
        vec![
            self.claim_id.to_string(),
            self.food_id.to_string(),
            self.receiver_id.to_string(),
            self.status.to_string(),
            self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        ]
    }
}

pub fn do_list_records(store: &dyn DonationStore, entity: Entity) -> Result<(), CliError> {
    match entity {
        Entity::Provider => print_table(&store.list_providers(None)?),
        Entity::Receiver => print_table(&store.list_receivers(None)?),
        Entity::FoodListing => print_table(&store.list_food_listings()?),
        Entity::Claim => print_table(&store.list_claims()?),
    }

    Ok(())
}

pub fn do_show_record(store: &dyn DonationStore, entity: Entity, id: &str) -> Result<(), CliError> {
    let id = parse_record_id(entity, id)?;

    let found = match entity {
        Entity::Provider => store.fetch_provider(id)?.map(|row| print_table(&[row])),
        Entity::Receiver => store.fetch_receiver(id)?.map(|row| print_table(&[row])),
        Entity::FoodListing => store.fetch_food_listing(id)?.map(|row| print_table(&[row])),
        Entity::Claim => store.fetch_claim(id)?.map(|row| print_table(&[row])),
    };

    found.ok_or_else(|| {
        CliError::UserError(format!("No record found for {} = {}.", entity.id_column(), id))
    })
}

pub fn do_insert_record<S: DonationStore>(store: S, form: &RecordForm) -> Result<(), CliError> {
    let outcome = MutationExecutor::new(store)
        .insert(form)
        .map_err(|err| mutation_error("Insert", err))?;

    report_outcome(&outcome);
    Ok(())
}

pub fn do_update_record<S: DonationStore>(
    store: S,
    form: &FieldUpdateForm,
) -> Result<(), CliError> {
    let outcome = MutationExecutor::new(store)
        .update_field(form)
        .map_err(|err| mutation_error("Update", err))?;

    report_outcome(&outcome);
    Ok(())
}

pub fn do_delete_record<S: DonationStore>(
    store: S,
    entity: Entity,
    id: &str,
) -> Result<(), CliError> {
    let outcome = MutationExecutor::new(store)
        .delete_by_id(entity, id)
        .map_err(|err| mutation_error("Delete", err))?;

    report_outcome(&outcome);
    Ok(())
}

fn report_outcome(outcome: &MutationOutcome) {
    match outcome {
        MutationOutcome::NotFound { .. } => warn!("{}", outcome),
        _ => info!("{}", outcome),
    }
}

fn mutation_error(action: &str, err: MutationError) -> CliError {
    match err {
        MutationError::Validation(_) => CliError::UserError(err.to_string()),
        MutationError::Store(err) => CliError::DatabaseError(format!("{} failed: {}", action, err)),
    }
}
