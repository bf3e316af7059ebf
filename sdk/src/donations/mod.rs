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

//! Providers, receivers, food listings and claims: validation of operator input and the
//! mutations applied to the donation tables.

pub mod executor;
mod fields;
pub mod forms;
pub mod store;

pub use executor::{MutationError, MutationExecutor, MutationOutcome};
pub use fields::{
    ClaimField, ClaimStatus, ClaimUpdate, Entity, FieldUpdate, FoodListingField,
    FoodListingUpdate, ProviderField, ProviderUpdate, ReceiverField, ReceiverUpdate,
};
pub use forms::{
    parse_record_id, ClaimForm, FieldUpdateForm, FoodListingForm, ProviderForm, ReceiverForm,
    RecordForm,
};
#[cfg(feature = "diesel")]
pub use store::diesel::DieselDonationStore;
pub use store::{
    Claim, DonationStore, DonationStoreError, FoodListing, Provider, Receiver, Record,
};
