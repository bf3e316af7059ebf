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

use std::error::Error;
use std::fmt;

use crate::validation::ValidationError;

use super::fields::Entity;
use super::forms::{parse_record_id, FieldUpdateForm, RecordForm};
use super::store::{DonationStore, DonationStoreError};

/// What a mutation did, when it did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    Inserted { entity: Entity, id: i64 },
    Updated { entity: Entity, id: i64 },
    /// The update matched no row. This is a warning for the operator, not a failure.
    NotFound { entity: Entity, id: i64 },
    /// Reported for any delete the store accepted, including one that matched no row.
    Deleted { entity: Entity, id: i64, rows: usize },
}

impl fmt::Display for MutationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MutationOutcome::Inserted { .. } => f.write_str("Successfully inserted the record."),
            MutationOutcome::Updated { .. } => f.write_str("Successfully updated the record."),
            MutationOutcome::NotFound { entity, id } => {
                write!(f, "No record found for {} = {}.", entity.id_column(), id)
            }
            MutationOutcome::Deleted { .. } => f.write_str("Successfully deleted the record."),
        }
    }
}

#[derive(Debug)]
pub enum MutationError {
    /// The input was rejected before reaching the store
    Validation(ValidationError),
    /// The store refused or failed the statement
    Store(DonationStoreError),
}

impl Error for MutationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MutationError::Validation(err) => Some(err),
            MutationError::Store(err) => Some(err),
        }
    }
}

impl fmt::Display for MutationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MutationError::Validation(err) => write!(f, "{}.", err),
            MutationError::Store(err) => err.fmt(f),
        }
    }
}

impl From<ValidationError> for MutationError {
    fn from(err: ValidationError) -> Self {
        MutationError::Validation(err)
    }
}

impl From<DonationStoreError> for MutationError {
    fn from(err: DonationStoreError) -> Self {
        MutationError::Store(err)
    }
}

/// Validates operator input and applies it through a `DonationStore`, one statement per call.
pub struct MutationExecutor<S: DonationStore> {
    store: S,
}

impl<S: DonationStore> MutationExecutor<S> {
    pub fn new(store: S) -> Self {
        MutationExecutor { store }
    }

    pub fn insert(&self, form: &RecordForm) -> Result<MutationOutcome, MutationError> {
        let record = form.validate()?;
        let (entity, id) = (record.entity(), record.id());

        self.store.add_record(record)?;
        debug!("Inserted {} row {}", entity, id);

        Ok(MutationOutcome::Inserted { entity, id })
    }

    pub fn update_field(&self, form: &FieldUpdateForm) -> Result<MutationOutcome, MutationError> {
        let (id, update) = form.validate()?;
        let entity = update.entity();

        match self.store.update_record(id, update) {
            Ok(()) => {
                debug!("Updated {} row {} ({})", entity, id, form.field);
                Ok(MutationOutcome::Updated { entity, id })
            }
            Err(DonationStoreError::NotFoundError(msg)) => {
                debug!("{}", msg);
                Ok(MutationOutcome::NotFound { entity, id })
            }
            Err(err) => Err(MutationError::Store(err)),
        }
    }

    /// Deletes by primary key. A missing row is not an error; the affected row count is carried
    /// in the outcome.
    pub fn delete_by_id(
        &self,
        entity: Entity,
        id_text: &str,
    ) -> Result<MutationOutcome, MutationError> {
        let id = parse_record_id(entity, id_text)?;

        let rows = self.store.delete_record(entity, id)?;
        debug!("Deleted {} row(s) from {} for {} = {}", rows, entity, entity.id_column(), id);

        Ok(MutationOutcome::Deleted { entity, id, rows })
    }

    /// The store this executor writes through.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use super::*;

    use crate::donations::forms::ProviderForm;
    use crate::donations::store::diesel::DieselDonationStore;
    use crate::error::ConstraintViolationType;
    use crate::testing::create_connection_pool_and_migrate;

    fn executor() -> MutationExecutor<Box<dyn DonationStore>> {
        let store: Box<dyn DonationStore> =
            Box::new(DieselDonationStore::new(create_connection_pool_and_migrate()));
        MutationExecutor::new(store)
    }

    fn acme() -> RecordForm {
        RecordForm::Provider(ProviderForm {
            provider_id: "101".into(),
            name: "Acme".into(),
            provider_type: "Restaurant".into(),
            address: "1 Main St".into(),
            city: "Springfield".into(),
            contact: "555-0100".into(),
        })
    }

    #[test]
    fn test_insert_update_fetch() {
        let executor = executor();

        assert_eq!(
            executor.insert(&acme()).expect("insert"),
            MutationOutcome::Inserted {
                entity: Entity::Provider,
                id: 101
            }
        );

        let outcome = executor
            .update_field(&FieldUpdateForm {
                entity: Entity::Provider,
                id: "101".into(),
                field: "City".into(),
                value: "Shelbyville".into(),
            })
            .expect("update");
        assert_eq!(outcome.to_string(), "Successfully updated the record.");

        let provider = executor
            .store()
            .fetch_provider(101)
            .expect("fetch")
            .expect("provider exists");
        assert_eq!(provider.city, "Shelbyville");
        assert_eq!(provider.name, "Acme");
        assert_eq!(provider.contact, "555-0100");
    }

    #[test]
    fn test_validation_failure_never_reaches_store() {
        let executor = executor();

        let mut form = match acme() {
            RecordForm::Provider(form) => form,
            _ => unreachable!(),
        };
        form.provider_id = "abc".into();

        match executor.insert(&RecordForm::Provider(form)) {
            Err(MutationError::Validation(err)) => {
                assert_eq!(err.field(), "Provider ID");
            }
            res => panic!("Expected a validation error, got {:?}", res),
        }
        assert!(executor.store().list_providers(None).expect("list").is_empty());
    }

    #[test]
    fn test_duplicate_insert_is_a_store_error() {
        let executor = executor();
        executor.insert(&acme()).expect("first insert");

        match executor.insert(&acme()) {
            Err(MutationError::Store(DonationStoreError::ConstraintViolationError(err))) => {
                assert_eq!(err.violation_type(), &ConstraintViolationType::Unique);
            }
            res => panic!("Expected a store error, got {:?}", res),
        }
    }

    #[test]
    fn test_update_of_missing_row_is_not_found() {
        let executor = executor();

        let outcome = executor
            .update_field(&FieldUpdateForm {
                entity: Entity::Provider,
                id: "999".into(),
                field: "Name".into(),
                value: "Nobody".into(),
            })
            .expect("a missing row is not an error");

        assert_eq!(
            outcome,
            MutationOutcome::NotFound {
                entity: Entity::Provider,
                id: 999
            }
        );
        assert_eq!(outcome.to_string(), "No record found for Provider_ID = 999.");
    }

    #[test]
    fn test_delete_of_missing_row_still_succeeds() {
        let executor = executor();

        let outcome = executor
            .delete_by_id(Entity::Claim, "424242")
            .expect("delete of a missing row succeeds");
        assert_eq!(
            outcome,
            MutationOutcome::Deleted {
                entity: Entity::Claim,
                id: 424242,
                rows: 0
            }
        );
        assert_eq!(outcome.to_string(), "Successfully deleted the record.");

        assert!(matches!(
            executor.delete_by_id(Entity::Claim, "4.2"),
            Err(MutationError::Validation(_))
        ));
    }
}
