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

use diesel::prelude::*;

use super::DonationStoreOperations;
use crate::donations::fields::{
    ClaimUpdate, FieldUpdate, FoodListingUpdate, ProviderUpdate, ReceiverUpdate,
};
use crate::donations::store::diesel::schema::{claims, food_listings, providers, receivers};
use crate::donations::store::DonationStoreError;

pub(in crate::donations::store::diesel) trait DonationStoreUpdateRecordOperation {
    fn update_record(&self, id: i64, update: FieldUpdate) -> Result<(), DonationStoreError>;
}

#[cfg(feature = "postgres")]
impl<'a> DonationStoreUpdateRecordOperation
    for DonationStoreOperations<'a, diesel::pg::PgConnection>
{
    fn update_record(&self, id: i64, update: FieldUpdate) -> Result<(), DonationStoreError> {
        let entity = update.entity();

        let rows = match update {
            FieldUpdate::Provider(value) => {
                let target = diesel::update(providers::table.filter(providers::provider_id.eq(id)));
                match value {
                    ProviderUpdate::Name(v) => target.set(providers::name.eq(v)).execute(self.conn),
                    ProviderUpdate::Type(v) => {
                        target.set(providers::provider_type.eq(v)).execute(self.conn)
                    }
                    ProviderUpdate::Address(v) => {
                        target.set(providers::address.eq(v)).execute(self.conn)
                    }
                    ProviderUpdate::City(v) => target.set(providers::city.eq(v)).execute(self.conn),
                    ProviderUpdate::Contact(v) => {
                        target.set(providers::contact.eq(v)).execute(self.conn)
                    }
                }
            }
            FieldUpdate::Receiver(value) => {
                let target = diesel::update(receivers::table.filter(receivers::receiver_id.eq(id)));
                match value {
                    ReceiverUpdate::Name(v) => target.set(receivers::name.eq(v)).execute(self.conn),
                    ReceiverUpdate::Type(v) => {
                        target.set(receivers::receiver_type.eq(v)).execute(self.conn)
                    }
                    ReceiverUpdate::City(v) => target.set(receivers::city.eq(v)).execute(self.conn),
                    ReceiverUpdate::Contact(v) => {
                        target.set(receivers::contact.eq(v)).execute(self.conn)
                    }
                }
            }
            FieldUpdate::FoodListing(value) => {
                let target = diesel::update(food_listings::table.filter(food_listings::food_id.eq(id)));
                match value {
                    FoodListingUpdate::FoodName(v) => {
                        target.set(food_listings::food_name.eq(v)).execute(self.conn)
                    }
                    FoodListingUpdate::Quantity(v) => {
                        target.set(food_listings::quantity.eq(v)).execute(self.conn)
                    }
                    FoodListingUpdate::ExpiryDate(v) => {
                        target.set(food_listings::expiry_date.eq(v)).execute(self.conn)
                    }
                    FoodListingUpdate::ProviderId(v) => {
                        target.set(food_listings::provider_id.eq(v)).execute(self.conn)
                    }
                    FoodListingUpdate::ProviderType(v) => {
                        target.set(food_listings::provider_type.eq(v)).execute(self.conn)
                    }
                    FoodListingUpdate::Location(v) => {
                        target.set(food_listings::location.eq(v)).execute(self.conn)
                    }
                    FoodListingUpdate::FoodType(v) => {
                        target.set(food_listings::food_type.eq(v)).execute(self.conn)
                    }
                    FoodListingUpdate::MealType(v) => {
                        target.set(food_listings::meal_type.eq(v)).execute(self.conn)
                    }
                }
            }
            FieldUpdate::Claim(value) => {
                let target = diesel::update(claims::table.filter(claims::claim_id.eq(id)));
                match value {
                    ClaimUpdate::FoodId(v) => target.set(claims::food_id.eq(v)).execute(self.conn),
                    ClaimUpdate::ReceiverId(v) => {
                        target.set(claims::receiver_id.eq(v)).execute(self.conn)
                    }
                    ClaimUpdate::Status(v) => target
                        .set(claims::status.eq(v.as_str()))
                        .execute(self.conn),
                    ClaimUpdate::Timestamp(v) => {
                        target.set(claims::timestamp.eq(v)).execute(self.conn)
                    }
                }
            }
        }?;

        if rows == 0 {
            return Err(DonationStoreError::NotFoundError(format!(
                "No record found for {} = {}",
                entity.id_column(),
                id
            )));
        }

        Ok(())
    }
}

#[cfg(feature = "sqlite")]
impl<'a> DonationStoreUpdateRecordOperation
    for DonationStoreOperations<'a, diesel::sqlite::SqliteConnection>
{
    fn update_record(&self, id: i64, update: FieldUpdate) -> Result<(), DonationStoreError> {
        let entity = update.entity();

        let rows = match update {
            FieldUpdate::Provider(value) => {
                let target = diesel::update(providers::table.filter(providers::provider_id.eq(id)));
                match value {
                    ProviderUpdate::Name(v) => target.set(providers::name.eq(v)).execute(self.conn),
                    ProviderUpdate::Type(v) => {
                        target.set(providers::provider_type.eq(v)).execute(self.conn)
                    }
                    ProviderUpdate::Address(v) => {
                        target.set(providers::address.eq(v)).execute(self.conn)
                    }
                    ProviderUpdate::City(v) => target.set(providers::city.eq(v)).execute(self.conn),
                    ProviderUpdate::Contact(v) => {
                        target.set(providers::contact.eq(v)).execute(self.conn)
                    }
                }
            }
            FieldUpdate::Receiver(value) => {
                let target = diesel::update(receivers::table.filter(receivers::receiver_id.eq(id)));
                match value {
                    ReceiverUpdate::Name(v) => target.set(receivers::name.eq(v)).execute(self.conn),
                    ReceiverUpdate::Type(v) => {
                        target.set(receivers::receiver_type.eq(v)).execute(self.conn)
                    }
                    ReceiverUpdate::City(v) => target.set(receivers::city.eq(v)).execute(self.conn),
                    ReceiverUpdate::Contact(v) => {
                        target.set(receivers::contact.eq(v)).execute(self.conn)
                    }
                }
            }
            FieldUpdate::FoodListing(value) => {
                let target = diesel::update(food_listings::table.filter(food_listings::food_id.eq(id)));
                match value {
                    FoodListingUpdate::FoodName(v) => {
                        target.set(food_listings::food_name.eq(v)).execute(self.conn)
                    }
                    FoodListingUpdate::Quantity(v) => {
                        target.set(food_listings::quantity.eq(v)).execute(self.conn)
                    }
                    FoodListingUpdate::ExpiryDate(v) => {
                        target.set(food_listings::expiry_date.eq(v)).execute(self.conn)
                    }
                    FoodListingUpdate::ProviderId(v) => {
                        target.set(food_listings::provider_id.eq(v)).execute(self.conn)
                    }
                    FoodListingUpdate::ProviderType(v) => {
                        target.set(food_listings::provider_type.eq(v)).execute(self.conn)
                    }
                    FoodListingUpdate::Location(v) => {
                        target.set(food_listings::location.eq(v)).execute(self.conn)
                    }
                    FoodListingUpdate::FoodType(v) => {
                        target.set(food_listings::food_type.eq(v)).execute(self.conn)
                    }
                    FoodListingUpdate::MealType(v) => {
                        target.set(food_listings::meal_type.eq(v)).execute(self.conn)
                    }
                }
            }
            FieldUpdate::Claim(value) => {
                let target = diesel::update(claims::table.filter(claims::claim_id.eq(id)));
                match value {
                    ClaimUpdate::FoodId(v) => target.set(claims::food_id.eq(v)).execute(self.conn),
                    ClaimUpdate::ReceiverId(v) => {
                        target.set(claims::receiver_id.eq(v)).execute(self.conn)
                    }
                    ClaimUpdate::Status(v) => target
                        .set(claims::status.eq(v.as_str()))
                        .execute(self.conn),
                    ClaimUpdate::Timestamp(v) => {
                        target.set(claims::timestamp.eq(v)).execute(self.conn)
                    }
                }
            }
        }?;

        if rows == 0 {
            return Err(DonationStoreError::NotFoundError(format!(
                "No record found for {} = {}",
                entity.id_column(),
                id
            )));
        }

        Ok(())
    }
}
