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

const OVERVIEW: &str = "\
Local Food Wastage Management System

Restaurants and individuals list surplus food; NGOs and individuals in need
claim it. Every listing, provider, receiver and claim is kept in one SQL
database.

How it works:
  1. Providers post surplus food with quantity, location and expiry date.
  2. Receivers find listings that match their needs and claim them.
  3. Operators browse, correct and remove records, and run reports.

Commands:
  provider | receiver | listing | claim   browse tables and insert, update
                                          or delete records
  filter providers | receivers           find providers or receivers by
                                          city or ID, with contact details
  report list | run                       the fifteen standing questions,
                                          with chart series
  database migrate                        create the tables";

pub fn do_about() {
    println!("{}", OVERVIEW);
}
