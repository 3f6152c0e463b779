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

use super::{FormatterRegistry, NumberingPlan, ServiceStyle};
use crate::country_data::Continent;

pub(super) fn register(registry: &mut FormatterRegistry) {
    let trunk_zero = NumberingPlan::new()
        .national_prefix("0")
        .prefix_mobile()
        .prefix_landline();

    registry.register_plan(Continent::Oceania, "Australia", trunk_zero.landline(&[1, 4, 4], " "));
    registry.register_plan(
        Continent::Oceania,
        "New Zealand",
        trunk_zero.service(ServiceStyle::Spaced).landline(&[1, 3, 4], " "),
    );
    registry.register_plan(Continent::Oceania, "Fiji", NumberingPlan::new().landline(&[3, 4], " "));
    registry.register_plan(Continent::Oceania, "Papua New Guinea", NumberingPlan::new());
}
