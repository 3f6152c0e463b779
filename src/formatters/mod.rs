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

//! Per-country formatters and the table routing a country record to them.
//!
//! Every country of the bundled data is registered by one of the continent
//! modules. Countries that share a numbering plan (NANP members, Russia and
//! Kazakhstan) share one formatter instance.

mod africa;
mod americas;
mod asia;
mod europe;
pub mod numbering_plan;
mod oceania;

use std::{collections::HashMap, sync::Arc};

use log::debug;

use crate::{
    country_data::{Continent, CountryRecord},
    interfaces::CountryFormatter,
    phonevalidator::errors::ValidationError,
};

pub use numbering_plan::{NumberingPlan, ServiceStyle};

/// Routing table from `(continent, country)` to the formatter of that country.
pub struct FormatterRegistry {
    by_continent: HashMap<Continent, HashMap<String, Arc<dyn CountryFormatter>>>,
}

impl FormatterRegistry {
    /// Registry without any formatter. Useful to assemble a custom table.
    pub fn empty() -> Self {
        Self { by_continent: HashMap::new() }
    }

    /// Registry covering every country of the bundled country table.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        africa::register(&mut registry);
        asia::register(&mut registry);
        europe::register(&mut registry);
        oceania::register(&mut registry);
        americas::register(&mut registry);
        debug!("Registered formatters for {} countries", registry.len());
        registry
    }

    pub fn register(
        &mut self,
        continent: Continent,
        country: impl Into<String>,
        formatter: Arc<dyn CountryFormatter>,
    ) {
        self.by_continent
            .entry(continent)
            .or_default()
            .insert(country.into(), formatter);
    }

    pub fn register_plan(
        &mut self,
        continent: Continent,
        country: impl Into<String>,
        plan: NumberingPlan,
    ) {
        self.register(continent, country, Arc::new(plan));
    }

    /// Registers one formatter under several country keys.
    pub fn register_shared(
        &mut self,
        formatter: Arc<dyn CountryFormatter>,
        members: &[(Continent, &str)],
    ) {
        for &(continent, country) in members {
            self.register(continent, country, formatter.clone());
        }
    }

    pub fn supports(&self, continent: Continent, country: &str) -> bool {
        self.lookup(continent, country).is_some()
    }

    pub fn len(&self) -> usize {
        self.by_continent.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the formatter responsible for `record`.
    pub fn dispatch(&self, record: &CountryRecord) -> Result<&dyn CountryFormatter, ValidationError> {
        self.lookup(record.continent, &record.country)
            .ok_or_else(|| ValidationError::UnsupportedCountry {
                country: record.country.clone(),
                continent: record.continent,
            })
    }

    fn lookup(&self, continent: Continent, country: &str) -> Option<&dyn CountryFormatter> {
        self.by_continent
            .get(&continent)?
            .get(country)
            .map(|formatter| formatter.as_ref())
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use strum::IntoEnumIterator;

    use super::{FormatterRegistry, NumberingPlan};
    use crate::{
        country_data::{Continent, CountryDataStore, FormatType},
        interfaces::CountryFormatter,
        phonevalidator::errors::ValidationError,
    };

    #[test]
    fn standard_registry_covers_bundled_table() {
        let registry = FormatterRegistry::standard();
        let store = CountryDataStore::embedded().unwrap();
        for record in store.records() {
            assert!(
                registry.supports(record.continent, &record.country),
                "no formatter for {} ({})", record.country, record.continent
            );
        }
    }

    #[test]
    fn every_continent_has_formatters() {
        let registry = FormatterRegistry::standard();
        for continent in Continent::iter() {
            assert!(
                registry.by_continent.get(&continent).is_some_and(|map| !map.is_empty()),
                "{continent} has no formatter"
            );
        }
    }

    #[test]
    fn shared_formatters_route_to_same_instance() {
        let registry = FormatterRegistry::standard();
        let russia = registry.lookup(Continent::Europe, "Russia").unwrap();
        let kazakhstan = registry.lookup(Continent::Asia, "Kazakhstan").unwrap();
        assert!(std::ptr::addr_eq(russia, kazakhstan));

        let canada = registry.lookup(Continent::NorthAmerica, "Canada").unwrap();
        let us = registry.lookup(Continent::NorthAmerica, "United States").unwrap();
        assert!(std::ptr::addr_eq(canada, us));
    }

    #[test]
    fn unknown_country_is_reported() {
        let registry = FormatterRegistry::standard();
        let store = CountryDataStore::from_json_str(r#"[{
            "country": "Atlantis", "continent": "Europe",
            "callingCode": "999", "isoCode": "AT", "formats": []
        }]"#).unwrap();

        let error = registry.dispatch(&store.records()[0]).err().unwrap();
        assert!(matches!(
            error,
            ValidationError::UnsupportedCountry { ref country, continent: Continent::Europe }
                if country == "Atlantis"
        ));
    }

    #[test]
    fn country_key_includes_continent() {
        let mut registry = FormatterRegistry::empty();
        registry.register_plan(Continent::Asia, "Georgia", NumberingPlan::new());
        assert!(registry.supports(Continent::Asia, "Georgia"));
        assert!(!registry.supports(Continent::NorthAmerica, "Georgia"));
    }

    #[test]
    fn custom_formatter_can_be_registered() {
        struct Verbatim;
        impl CountryFormatter for Verbatim {
            fn candidate(&self, _: FormatType, _: &str, phone: &str) -> String {
                phone.to_owned()
            }
        }

        let mut registry = FormatterRegistry::empty();
        registry.register(Continent::Oceania, "Nauru", Arc::new(Verbatim));
        assert_eq!(registry.len(), 1);
        assert!(registry.supports(Continent::Oceania, "Nauru"));
    }
}
