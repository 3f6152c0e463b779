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

use super::{FormatterRegistry, NumberingPlan, ServiceStyle};
use crate::country_data::Continent;

pub(super) fn register(registry: &mut FormatterRegistry) {
    register_north(registry);
    register_central(registry);
    register_south(registry);
}

fn register_north(registry: &mut FormatterRegistry) {
    // NANP members cannot be told apart by the plan; the country table lists
    // Canadian area codes explicitly and Canada is tried first.
    let nanp = NumberingPlan::new()
        .national_prefix("1")
        .national_number_length(10)
        .landline(&[3, 3, 4], "-");
    registry.register_shared(
        Arc::new(nanp),
        &[
            (Continent::NorthAmerica, "Canada"),
            (Continent::NorthAmerica, "United States"),
        ],
    );

    registry.register_plan(
        Continent::NorthAmerica,
        "Mexico",
        NumberingPlan::new().landline(&[2, 4, 4], " "),
    );
}

fn register_central(registry: &mut FormatterRegistry) {
    registry.register_plan(Continent::CentralAmerica, "Guatemala", NumberingPlan::new().landline(&[4, 4], "-"));
    registry.register_plan(Continent::CentralAmerica, "Costa Rica", NumberingPlan::new().landline(&[4, 4], " "));
    registry.register_plan(Continent::CentralAmerica, "Panama", NumberingPlan::new().landline(&[3, 4], "-"));
    registry.register_plan(Continent::CentralAmerica, "Honduras", NumberingPlan::new().landline(&[4, 4], "-"));
}

fn register_south(registry: &mut FormatterRegistry) {
    let trunk_zero_landline_only = NumberingPlan::new()
        .national_prefix("0")
        .prefix_landline();

    registry.register_plan(
        Continent::SouthAmerica,
        "Brazil",
        NumberingPlan::new().national_prefix("0").landline(&[2, 4, 4], " "),
    );
    registry.register_plan(
        Continent::SouthAmerica,
        "Argentina",
        trunk_zero_landline_only
            .service(ServiceStyle::MobileToken("9"))
            .landline(&[2, 4, 4], "-"),
    );
    registry.register_plan(Continent::SouthAmerica, "Colombia", NumberingPlan::new().landline(&[3, 7], " "));
    registry.register_plan(Continent::SouthAmerica, "Chile", NumberingPlan::new().landline(&[1, 4, 4], " "));
    registry.register_plan(Continent::SouthAmerica, "Peru", trunk_zero_landline_only.landline(&[1, 7], " "));
    registry.register_plan(
        Continent::SouthAmerica,
        "Venezuela",
        NumberingPlan::new()
            .national_prefix("0")
            .prefix_mobile()
            .prefix_landline()
            .landline(&[3, 7], "-"),
    );
}
