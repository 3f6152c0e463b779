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

use std::sync::Arc;

use super::{FormatterRegistry, NumberingPlan};
use crate::country_data::Continent;

pub(super) fn register(registry: &mut FormatterRegistry) {
    let trunk_zero = NumberingPlan::new()
        .national_prefix("0")
        .prefix_mobile()
        .prefix_landline();
    // Italy and Spain have no trunk prefix: a leading zero belongs to the number.
    let no_trunk = NumberingPlan::new();

    registry.register_plan(Continent::Europe, "United Kingdom", trunk_zero.landline(&[2, 4, 4], " "));
    registry.register_plan(Continent::Europe, "Germany", trunk_zero.landline(&[2], " "));
    registry.register_plan(Continent::Europe, "France", trunk_zero.landline(&[1, 2, 2, 2, 2], " "));
    registry.register_plan(Continent::Europe, "Italy", no_trunk.landline(&[2], " "));
    registry.register_plan(Continent::Europe, "Spain", no_trunk.landline(&[3, 3, 3], " "));
    registry.register_plan(Continent::Europe, "Netherlands", trunk_zero.landline(&[2, 7], "-"));
    registry.register_plan(Continent::Europe, "Poland", no_trunk.landline(&[2, 3, 2, 2], " "));
    registry.register_plan(Continent::Europe, "Sweden", trunk_zero.landline(&[1], "-"));
    registry.register_plan(Continent::Europe, "Switzerland", trunk_zero.landline(&[2, 3, 2, 2], " "));
    registry.register_plan(Continent::Europe, "Ukraine", trunk_zero.landline(&[2, 3, 2, 2], "-"));

    let russian_plan = NumberingPlan::new()
        .national_prefix("8")
        .national_number_length(10)
        .prefix_mobile()
        .prefix_landline()
        .landline(&[3, 3, 2, 2], "-");
    registry.register_shared(
        Arc::new(russian_plan),
        &[(Continent::Europe, "Russia"), (Continent::Asia, "Kazakhstan")],
    );
}
