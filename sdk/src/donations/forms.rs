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

//! Raw operator input and the validators that turn it into typed records.
//!
//! Each `validate` checks fields in a fixed order and stops at the first failure, so an
//! operator always sees one message at a time.

use crate::validation::{non_empty, parse_date, parse_integer, parse_timestamp, ValidationError};

use super::fields::{
    ClaimField, ClaimStatus, ClaimUpdate, Entity, FieldUpdate, FoodListingField,
    FoodListingUpdate, ProviderField, ProviderUpdate, ReceiverField, ReceiverUpdate,
};
use super::store::{Claim, FoodListing, Provider, Receiver, Record};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderForm {
    pub provider_id: String,
    pub name: String,
    pub provider_type: String,
    pub address: String,
    pub city: String,
    pub contact: String,
}

impl ProviderForm {
    pub fn validate(&self) -> Result<Provider, ValidationError> {
        Ok(Provider {
            provider_id: parse_integer("Provider ID", &self.provider_id)?,
            name: non_empty("Name", &self.name)?,
            provider_type: non_empty("Type", &self.provider_type)?,
            address: non_empty("Address", &self.address)?,
            city: non_empty("City", &self.city)?,
            contact: non_empty("Contact", &self.contact)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReceiverForm {
    pub receiver_id: String,
    pub name: String,
    pub receiver_type: String,
    pub city: String,
    pub contact: String,
}

impl ReceiverForm {
    pub fn validate(&self) -> Result<Receiver, ValidationError> {
        Ok(Receiver {
            receiver_id: parse_integer("Receiver ID", &self.receiver_id)?,
            name: non_empty("Name", &self.name)?,
            receiver_type: non_empty("Type", &self.receiver_type)?,
            city: non_empty("City", &self.city)?,
            contact: non_empty("Contact", &self.contact)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodListingForm {
    pub food_id: String,
    pub food_name: String,
    pub quantity: String,
    pub expiry_date: String,
    pub provider_id: String,
    pub provider_type: String,
    pub location: String,
    pub food_type: String,
    pub meal_type: String,
}

impl FoodListingForm {
    /// Numbers first, then presence of every text input (the expiry date included), and only
    /// then the date itself.
    pub fn validate(&self) -> Result<FoodListing, ValidationError> {
        let food_id = parse_integer("Food ID", &self.food_id)?;
        let quantity = parse_integer("Quantity", &self.quantity)?;
        let provider_id = parse_integer("Provider ID", &self.provider_id)?;

        let food_name = non_empty("Food Name", &self.food_name)?;
        let provider_type = non_empty("Provider Type", &self.provider_type)?;
        let location = non_empty("Location", &self.location)?;
        let food_type = non_empty("Food Type", &self.food_type)?;
        let meal_type = non_empty("Meal Type", &self.meal_type)?;
        let expiry_text = non_empty("Expiry Date", &self.expiry_date)?;

        let expiry_date = parse_date("Expiry Date", &expiry_text)?;

        Ok(FoodListing {
            food_id,
            food_name,
            quantity,
            expiry_date,
            provider_id,
            provider_type,
            location,
            food_type,
            meal_type,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimForm {
    pub claim_id: String,
    pub food_id: String,
    pub receiver_id: String,
    pub status: String,
    pub timestamp: String,
}

impl ClaimForm {
    pub fn validate(&self) -> Result<Claim, ValidationError> {
        let claim_id = parse_integer("Claim ID", &self.claim_id)?;
        let food_id = parse_integer("Food ID", &self.food_id)?;
        let receiver_id = parse_integer("Receiver ID", &self.receiver_id)?;
        // the status comes from a fixed list, so it is matched as given
        let status = ClaimStatus::parse("Status", &self.status)?;
        let timestamp_text = non_empty("Timestamp", &self.timestamp)?;
        let timestamp = parse_timestamp("Timestamp", &timestamp_text)?;

        Ok(Claim {
            claim_id,
            food_id,
            receiver_id,
            status,
            timestamp,
        })
    }
}

/// Insert input for any of the four tables.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordForm {
    Provider(ProviderForm),
    Receiver(ReceiverForm),
    FoodListing(FoodListingForm),
    Claim(ClaimForm),
}

impl RecordForm {
    pub fn entity(&self) -> Entity {
        match self {
            RecordForm::Provider(_) => Entity::Provider,
            RecordForm::Receiver(_) => Entity::Receiver,
            RecordForm::FoodListing(_) => Entity::FoodListing,
            RecordForm::Claim(_) => Entity::Claim,
        }
    }

    pub fn validate(&self) -> Result<Record, ValidationError> {
        match self {
            RecordForm::Provider(form) => form.validate().map(Record::Provider),
            RecordForm::Receiver(form) => form.validate().map(Record::Receiver),
            RecordForm::FoodListing(form) => form.validate().map(Record::FoodListing),
            RecordForm::Claim(form) => form.validate().map(Record::Claim),
        }
    }
}

/// Input for changing one column of one row.
///
/// `field` must be one of [`Entity::updatable_fields`]; it selects the column through a closed
/// mapping and never reaches the statement as text.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldUpdateForm {
    pub entity: Entity,
    pub id: String,
    pub field: String,
    pub value: String,
}

impl FieldUpdateForm {
    /// Returns the row's primary key and the typed update.
    pub fn validate(&self) -> Result<(i64, FieldUpdate), ValidationError> {
        let id = parse_integer(self.entity.id_label(), &self.id)?;

        let update = match self.entity {
            Entity::Provider => {
                let field = self.field.parse::<ProviderField>()?;
                FieldUpdate::Provider(provider_update(field, &self.value)?)
            }
            Entity::Receiver => {
                let field = self.field.parse::<ReceiverField>()?;
                FieldUpdate::Receiver(receiver_update(field, &self.value)?)
            }
            Entity::FoodListing => {
                let field = self.field.parse::<FoodListingField>()?;
                FieldUpdate::FoodListing(food_listing_update(field, &self.value)?)
            }
            Entity::Claim => {
                let field = self.field.parse::<ClaimField>()?;
                FieldUpdate::Claim(claim_update(field, &self.value)?)
            }
        };

        Ok((id, update))
    }
}

/// Validates the identifier given for a delete.
pub fn parse_record_id(entity: Entity, text: &str) -> Result<i64, ValidationError> {
    parse_integer(entity.id_label(), text)
}

fn provider_update(field: ProviderField, value: &str) -> Result<ProviderUpdate, ValidationError> {
    let value = non_empty(field.label(), value)?;
    Ok(match field {
        ProviderField::Name => ProviderUpdate::Name(value),
        ProviderField::Type => ProviderUpdate::Type(value),
        ProviderField::Address => ProviderUpdate::Address(value),
        ProviderField::City => ProviderUpdate::City(value),
        ProviderField::Contact => ProviderUpdate::Contact(value),
    })
}

fn receiver_update(field: ReceiverField, value: &str) -> Result<ReceiverUpdate, ValidationError> {
    let value = non_empty(field.label(), value)?;
    Ok(match field {
        ReceiverField::Name => ReceiverUpdate::Name(value),
        ReceiverField::Type => ReceiverUpdate::Type(value),
        ReceiverField::City => ReceiverUpdate::City(value),
        ReceiverField::Contact => ReceiverUpdate::Contact(value),
    })
}

fn food_listing_update(
    field: FoodListingField,
    value: &str,
) -> Result<FoodListingUpdate, ValidationError> {
    let label = field.label();
    let value = non_empty(label, value)?;
    Ok(match field {
        FoodListingField::Quantity => FoodListingUpdate::Quantity(parse_integer(label, &value)?),
        FoodListingField::ProviderId => {
            FoodListingUpdate::ProviderId(parse_integer(label, &value)?)
        }
        FoodListingField::ExpiryDate => FoodListingUpdate::ExpiryDate(parse_date(label, &value)?),
        FoodListingField::FoodName => FoodListingUpdate::FoodName(value),
        FoodListingField::ProviderType => FoodListingUpdate::ProviderType(value),
        FoodListingField::Location => FoodListingUpdate::Location(value),
        FoodListingField::FoodType => FoodListingUpdate::FoodType(value),
        FoodListingField::MealType => FoodListingUpdate::MealType(value),
    })
}

fn claim_update(field: ClaimField, value: &str) -> Result<ClaimUpdate, ValidationError> {
    let label = field.label();
    let value = non_empty(label, value)?;
    Ok(match field {
        ClaimField::FoodId => ClaimUpdate::FoodId(parse_integer(label, &value)?),
        ClaimField::ReceiverId => ClaimUpdate::ReceiverId(parse_integer(label, &value)?),
        ClaimField::Status => ClaimUpdate::Status(ClaimStatus::parse(label, &value)?),
        ClaimField::Timestamp => ClaimUpdate::Timestamp(parse_timestamp(label, &value)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    fn provider_form() -> ProviderForm {
        ProviderForm {
            provider_id: "101".into(),
            name: "Acme".into(),
            provider_type: "Restaurant".into(),
            address: "1 Main St".into(),
            city: "Springfield".into(),
            contact: "555-0100".into(),
        }
    }

    fn listing_form() -> FoodListingForm {
        FoodListingForm {
            food_id: "1".into(),
            food_name: "Bread".into(),
            quantity: "40".into(),
            expiry_date: "2024-03-15".into(),
            provider_id: "101".into(),
            provider_type: "Restaurant".into(),
            location: "Springfield".into(),
            food_type: "Vegetarian".into(),
            meal_type: "Breakfast".into(),
        }
    }

    fn claim_form() -> ClaimForm {
        ClaimForm {
            claim_id: "10".into(),
            food_id: "1".into(),
            receiver_id: "7".into(),
            status: "Pending".into(),
            timestamp: "2024-02-28 10:00:00".into(),
        }
    }

    fn message<T: std::fmt::Debug>(res: Result<T, ValidationError>) -> String {
        res.expect_err("validation should fail").to_string()
    }

    #[test]
    fn test_provider_form_trims_text() {
        let mut form = provider_form();
        form.city = "  Springfield ".into();
        let provider = form.validate().expect("provider should validate");
        assert_eq!(provider.provider_id, 101);
        assert_eq!(provider.city, "Springfield");
    }

    #[test]
    fn test_provider_form_checks_id_before_text() {
        let mut form = provider_form();
        form.provider_id = "-5".into();
        form.name = "".into();
        assert_eq!(message(form.validate()), "Provider ID must be a whole number");

        let mut form = provider_form();
        form.contact = "   ".into();
        assert_eq!(message(form.validate()), "Contact cannot be empty");
    }

    #[test]
    fn test_receiver_form() {
        let form = ReceiverForm {
            receiver_id: "3.0".into(),
            name: "Shelter".into(),
            receiver_type: "NGO".into(),
            city: "Springfield".into(),
            contact: "555".into(),
        };
        assert_eq!(message(form.validate()), "Receiver ID must be a whole number");
    }

    #[test]
    fn test_listing_form_order() {
        let listing = listing_form().validate().expect("listing should validate");
        assert_eq!(listing.expiry_date, NaiveDate::from_ymd(2024, 3, 15));
        assert_eq!(listing.quantity, 40);

        // numbers are checked before any text presence
        let mut form = listing_form();
        form.quantity = "lots".into();
        form.food_name = "".into();
        assert_eq!(message(form.validate()), "Quantity must be a whole number");

        // presence of the date is checked with the other text, before its format
        let mut form = listing_form();
        form.expiry_date = "".into();
        assert_eq!(message(form.validate()), "Expiry Date cannot be empty");

        let mut form = listing_form();
        form.expiry_date = "15/03/2024".into();
        form.meal_type = "".into();
        assert_eq!(message(form.validate()), "Meal Type cannot be empty");

        let mut form = listing_form();
        form.expiry_date = "15/03/2024".into();
        assert_eq!(
            message(form.validate()),
            "Expiry Date must be in YYYY-MM-DD format"
        );
    }

    #[test]
    fn test_claim_form_order() {
        let claim = claim_form().validate().expect("claim should validate");
        assert_eq!(claim.status, ClaimStatus::Pending);

        let mut form = claim_form();
        form.receiver_id = "x".into();
        form.status = "Done".into();
        assert_eq!(message(form.validate()), "Receiver ID must be a whole number");

        let mut form = claim_form();
        form.status = "pending".into();
        assert_eq!(
            message(form.validate()),
            "Status must be one of: Pending, Completed, Cancelled"
        );

        let mut form = claim_form();
        form.timestamp = " ".into();
        assert_eq!(message(form.validate()), "Timestamp cannot be empty");

        let mut form = claim_form();
        form.timestamp = "2024-02-30 10:00:00".into();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_field_update_form() {
        let form = FieldUpdateForm {
            entity: Entity::Provider,
            id: "101".into(),
            field: "City".into(),
            value: " Shelbyville ".into(),
        };
        assert_eq!(
            form.validate(),
            Ok((
                101,
                FieldUpdate::Provider(ProviderUpdate::City("Shelbyville".into()))
            ))
        );

        let form = FieldUpdateForm {
            entity: Entity::FoodListing,
            id: "1".into(),
            field: "Quantity".into(),
            value: "ten".into(),
        };
        assert_eq!(message(form.validate()), "Quantity must be a whole number");

        let form = FieldUpdateForm {
            entity: Entity::FoodListing,
            id: "1".into(),
            field: "Expiry_Date".into(),
            value: "".into(),
        };
        assert_eq!(message(form.validate()), "Expiry Date cannot be empty");

        // claim status values are trimmed before matching
        let form = FieldUpdateForm {
            entity: Entity::Claim,
            id: "10".into(),
            field: "Status".into(),
            value: " Cancelled ".into(),
        };
        assert_eq!(
            form.validate(),
            Ok((10, FieldUpdate::Claim(ClaimUpdate::Status(ClaimStatus::Cancelled))))
        );
    }

    #[test]
    fn test_field_update_form_rejects_unknown_fields() {
        let form = FieldUpdateForm {
            entity: Entity::Receiver,
            id: "7".into(),
            field: "Address".into(),
            value: "1 Main St".into(),
        };
        assert_eq!(
            message(form.validate()),
            "Update Field must be one of: Name, Type, City, Contact"
        );

        let form = FieldUpdateForm {
            entity: Entity::Receiver,
            id: "seven".into(),
            field: "Address".into(),
            value: "1 Main St".into(),
        };
        assert_eq!(message(form.validate()), "Receiver ID must be a whole number");
    }

    #[test]
    fn test_parse_record_id() {
        assert_eq!(parse_record_id(Entity::Claim, " 12 "), Ok(12));
        assert_eq!(
            message(parse_record_id(Entity::FoodListing, "")),
            "Food ID must be a whole number"
        );
    }
}
