// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::{FormatterRegistry, NumberingPlan};
use crate::country_data::Continent;

pub(super) fn register(registry: &mut FormatterRegistry) {
    let trunk_zero = NumberingPlan::new()
        .national_prefix("0")
        .prefix_mobile()
        .prefix_landline();
    // Mobile numbers are dialed without the trunk prefix, area codes with it.
    let trunk_zero_landline_only = NumberingPlan::new()
        .national_prefix("0")
        .prefix_landline();

    registry.register_plan(Continent::Asia, "Iran", trunk_zero.landline(&[2, 8], " "));
    registry.register_plan(Continent::Asia, "India", trunk_zero_landline_only.landline(&[2, 8], "-"));
    registry.register_plan(Continent::Asia, "China", trunk_zero_landline_only.landline(&[2, 8], "-"));
    registry.register_plan(Continent::Asia, "Japan", trunk_zero.landline(&[1, 4, 4], "-"));
    registry.register_plan(Continent::Asia, "South Korea", trunk_zero.landline(&[1, 4, 4], "-"));
    registry.register_plan(Continent::Asia, "Turkey", trunk_zero.landline(&[3, 3, 4], " "));
    registry.register_plan(Continent::Asia, "United Arab Emirates", trunk_zero.landline(&[1, 3, 4], " "));
    registry.register_plan(Continent::Asia, "Saudi Arabia", trunk_zero.landline(&[2, 3, 4], " "));
    registry.register_plan(Continent::Asia, "Pakistan", trunk_zero.landline(&[2, 7], "-"));
    registry.register_plan(Continent::Asia, "Indonesia", trunk_zero);
    registry.register_plan(Continent::Asia, "Singapore", NumberingPlan::new().landline(&[4, 4], " "));
    // Kazakhstan shares calling code 7 and its formatter with Russia, see `europe`.
}
