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

table! {
    providers (provider_id) {
        provider_id -> Int8,
        name -> Text,
        provider_type -> Text,
        address -> Text,
        city -> Text,
        contact -> Text,
    }
}

table! {
    receivers (receiver_id) {
        receiver_id -> Int8,
        name -> Text,
        receiver_type -> Text,
        city -> Text,
        contact -> Text,
    }
}

table! {
    food_listings (food_id) {
        food_id -> Int8,
        food_name -> Text,
        quantity -> Int8,
        expiry_date -> Date,
        provider_id -> Int8,
        provider_type -> Text,
        location -> Text,
        food_type -> Text,
        meal_type -> Text,
    }
}

table! {
    claims (claim_id) {
        claim_id -> Int8,
        food_id -> Int8,
        receiver_id -> Int8,
        status -> Text,
        timestamp -> Timestamp,
    }
}

allow_tables_to_appear_in_same_query!(providers, receivers, food_listings, claims);
