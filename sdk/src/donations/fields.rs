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

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};

use crate::validation::{enum_of, ValidationError};

/// The four tables an operator can manage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Entity {
    Provider,
    Receiver,
    FoodListing,
    Claim,
}

impl Entity {
    /// Label of the identifier input, e.g. `Food ID`.
    pub fn id_label(self) -> &'static str {
        match self {
            Entity::Provider => "Provider ID",
            Entity::Receiver => "Receiver ID",
            Entity::FoodListing => "Food ID",
            Entity::Claim => "Claim ID",
        }
    }

    /// Name of the primary key column as operators know it, e.g. `Provider_ID`.
    pub fn id_column(self) -> &'static str {
        match self {
            Entity::Provider => "Provider_ID",
            Entity::Receiver => "Receiver_ID",
            Entity::FoodListing => "Food_ID",
            Entity::Claim => "Claim_ID",
        }
    }

    /// Selector values accepted when choosing a field to update.
    pub fn updatable_fields(self) -> &'static [&'static str] {
        match self {
            Entity::Provider => &ProviderField::NAMES,
            Entity::Receiver => &ReceiverField::NAMES,
            Entity::FoodListing => &FoodListingField::NAMES,
            Entity::Claim => &ClaimField::NAMES,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Entity::Provider => f.write_str("Providers"),
            Entity::Receiver => f.write_str("Receivers"),
            Entity::FoodListing => f.write_str("Food Listings"),
            Entity::Claim => f.write_str("Claims"),
        }
    }
}

/// Lifecycle state of a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ClaimStatus {
    Pending,
    Completed,
    Cancelled,
}

impl ClaimStatus {
    pub const NAMES: [&'static str; 3] = ["Pending", "Completed", "Cancelled"];

    pub fn as_str(self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Completed => "Completed",
            ClaimStatus::Cancelled => "Cancelled",
        }
    }

    pub(crate) fn parse(field: &str, text: &str) -> Result<Self, ValidationError> {
        match enum_of(&Self::NAMES).validate(field, text)? {
            "Pending" => Ok(ClaimStatus::Pending),
            "Completed" => Ok(ClaimStatus::Completed),
            _ => Ok(ClaimStatus::Cancelled),
        }
    }
}

impl FromStr for ClaimStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimStatus::parse("Status", s)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Each field enum is the closed mapping from what the operator picks to the single column an
// update may touch.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderField {
    Name,
    Type,
    Address,
    City,
    Contact,
}

impl ProviderField {
    pub const NAMES: [&'static str; 5] = ["Name", "Type", "Address", "City", "Contact"];

    pub fn label(self) -> &'static str {
        match self {
            ProviderField::Name => "Name",
            ProviderField::Type => "Type",
            ProviderField::Address => "Address",
            ProviderField::City => "City",
            ProviderField::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiverField {
    Name,
    Type,
    City,
    Contact,
}

impl ReceiverField {
    pub const NAMES: [&'static str; 4] = ["Name", "Type", "City", "Contact"];

    pub fn label(self) -> &'static str {
        match self {
            ReceiverField::Name => "Name",
            ReceiverField::Type => "Type",
            ReceiverField::City => "City",
            ReceiverField::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodListingField {
    FoodName,
    Quantity,
    ExpiryDate,
    ProviderId,
    ProviderType,
    Location,
    FoodType,
    MealType,
}

impl FoodListingField {
    pub const NAMES: [&'static str; 8] = [
        "Food_Name",
        "Quantity",
        "Expiry_Date",
        "Provider_ID",
        "Provider_Type",
        "Location",
        "Food_Type",
        "Meal_Type",
    ];

    /// Label used in messages about this field.
    pub fn label(self) -> &'static str {
        match self {
            FoodListingField::FoodName => "Food Name",
            FoodListingField::Quantity => "Quantity",
            FoodListingField::ExpiryDate => "Expiry Date",
            FoodListingField::ProviderId => "Provider ID",
            FoodListingField::ProviderType => "Provider Type",
            FoodListingField::Location => "Location",
            FoodListingField::FoodType => "Food Type",
            FoodListingField::MealType => "Meal Type",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimField {
    FoodId,
    ReceiverId,
    Status,
    Timestamp,
}

impl ClaimField {
    pub const NAMES: [&'static str; 4] = ["Food_ID", "Receiver_ID", "Status", "Timestamp"];

    pub fn label(self) -> &'static str {
        match self {
            ClaimField::FoodId => "Food ID",
            ClaimField::ReceiverId => "Receiver ID",
            ClaimField::Status => "Status",
            ClaimField::Timestamp => "Timestamp",
        }
    }
}

fn select<T: Copy>(
    names: &'static [&'static str],
    variants: &[T],
    text: &str,
) -> Result<T, ValidationError> {
    let name = enum_of(names).validate("Update Field", text)?;
    names
        .iter()
        .position(|candidate| *candidate == name)
        .and_then(|index| variants.get(index).copied())
        .ok_or_else(|| {
            ValidationError::new("Update Field".to_string(), "is not updatable".to_string())
        })
}

impl FromStr for ProviderField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ProviderField::*;
        select(&Self::NAMES, &[Name, Type, Address, City, Contact], s)
    }
}

impl FromStr for ReceiverField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ReceiverField::*;
        select(&Self::NAMES, &[Name, Type, City, Contact], s)
    }
}

impl FromStr for FoodListingField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use FoodListingField::*;
        select(
            &Self::NAMES,
            &[
                FoodName,
                Quantity,
                ExpiryDate,
                ProviderId,
                ProviderType,
                Location,
                FoodType,
                MealType,
            ],
            s,
        )
    }
}

impl FromStr for ClaimField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ClaimField::*;
        select(&Self::NAMES, &[FoodId, ReceiverId, Status, Timestamp], s)
    }
}

/// A typed new value for one provider column.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderUpdate {
    Name(String),
    Type(String),
    Address(String),
    City(String),
    Contact(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReceiverUpdate {
    Name(String),
    Type(String),
    City(String),
    Contact(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FoodListingUpdate {
    FoodName(String),
    Quantity(i64),
    ExpiryDate(NaiveDate),
    ProviderId(i64),
    ProviderType(String),
    Location(String),
    FoodType(String),
    MealType(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClaimUpdate {
    FoodId(i64),
    ReceiverId(i64),
    Status(ClaimStatus),
    Timestamp(NaiveDateTime),
}

/// A validated single-column update, ready for the store.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Provider(ProviderUpdate),
    Receiver(ReceiverUpdate),
    FoodListing(FoodListingUpdate),
    Claim(ClaimUpdate),
}

impl FieldUpdate {
    pub fn entity(&self) -> Entity {
        match self {
            FieldUpdate::Provider(_) => Entity::Provider,
            FieldUpdate::Receiver(_) => Entity::Receiver,
            FieldUpdate::FoodListing(_) => Entity::FoodListing,
            FieldUpdate::Claim(_) => Entity::Claim,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_selectors_are_closed() {
        assert_eq!("City".parse::<ProviderField>(), Ok(ProviderField::City));
        assert_eq!(
            "Expiry_Date".parse::<FoodListingField>(),
            Ok(FoodListingField::ExpiryDate)
        );
        assert_eq!("Status".parse::<ClaimField>(), Ok(ClaimField::Status));

        // free text never becomes a column
        assert!("Address".parse::<ReceiverField>().is_err());
        assert!("city".parse::<ProviderField>().is_err());
        assert!("City = 'x'; --".parse::<ProviderField>().is_err());
    }

    #[test]
    fn test_claim_status_parse() {
        assert_eq!("Cancelled".parse::<ClaimStatus>(), Ok(ClaimStatus::Cancelled));
        assert!("cancelled".parse::<ClaimStatus>().is_err());
        for name in &ClaimStatus::NAMES {
            let status: ClaimStatus = name.parse().expect("listed status should parse");
            assert_eq!(status.as_str(), *name);
        }
    }
}
