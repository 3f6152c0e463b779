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

use std::{collections::HashSet, fmt, sync::Arc};

use log::{debug, trace, warn};

use super::{
    config::ValidatorConfig,
    errors::{LoadError, ValidationError},
    normalizer::{normalize, CodeLengthBounds, InputValue},
    resolver::resolve,
    result_builder::{build, ValidationResult},
};
use crate::{
    country_data::{CountryDataStore, CountryRecord},
    formatters::FormatterRegistry,
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Validates phone numbers against a loaded country table.
///
/// The table and the formatter registry are immutable and shared, so a
/// validator can be cloned cheaply and used from many threads at once.
#[derive(Clone)]
pub struct PhoneValidator {
    store: Arc<CountryDataStore>,
    registry: Arc<FormatterRegistry>,
    bounds: CodeLengthBounds,
}

impl fmt::Debug for PhoneValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneValidator")
            .field("countries", &self.store.len())
            .field("formatters", &self.registry.len())
            .field("bounds", &self.bounds)
            .finish()
    }
}

impl PhoneValidator {
    /// Validator over the bundled country table with default settings.
    pub fn embedded() -> std::result::Result<Self, LoadError> {
        Self::from_parts(
            CountryDataStore::embedded()?,
            FormatterRegistry::standard(),
            &ValidatorConfig::default(),
        )
    }

    /// Loads the country table described by `config`.
    pub async fn load(config: ValidatorConfig) -> std::result::Result<Self, LoadError> {
        config.check()?;
        let store = CountryDataStore::load(&config.source, config.load_timeout).await?;
        Self::from_parts(store, FormatterRegistry::standard(), &config)
    }

    /// Combines an already loaded table with a formatter registry. Every
    /// country of the table must have a formatter unless
    /// `config.strict_dispatch` is off.
    pub fn from_parts(
        store: CountryDataStore,
        registry: FormatterRegistry,
        config: &ValidatorConfig,
    ) -> std::result::Result<Self, LoadError> {
        config.check()?;
        for record in store.records() {
            if registry.supports(record.continent, &record.country) {
                continue;
            }
            if config.strict_dispatch {
                return Err(LoadError::UnsupportedCountry {
                    country: record.country.clone(),
                    continent: record.continent,
                });
            }
            warn!(
                "No formatter registered for '{}' ({}), its numbers will be rejected",
                record.country, record.continent
            );
        }
        Ok(Self {
            store: Arc::new(store),
            registry: Arc::new(registry),
            bounds: CodeLengthBounds {
                min: config.min_code_length,
                max: config.max_code_length,
            },
        })
    }

    /// Resolves `code` to its country and tests `phone` against that
    /// country's formats.
    ///
    /// Fails when the input is unusable, the code is unknown, or the country
    /// has no formatter. A number matching no format is a successful result
    /// with every flag `false`.
    ///
    /// When several countries share `code`, they are tried in table order and
    /// the first one with a matching format is reported; if none matches, the
    /// first country is reported. Countries without a formatter are skipped
    /// and only fail the call when no other country uses `code`.
    pub fn validate<'c, 'p>(
        &self,
        code: impl Into<InputValue<'c>>,
        phone: impl Into<InputValue<'p>>,
    ) -> Result<ValidationResult> {
        let input = normalize(code.into(), phone.into(), self.bounds)?;
        let resolution = resolve(&self.store, &input.code);
        if !resolution.has_code {
            warn!("Unknown calling code {}", input.code);
            return Err(ValidationError::CountryNotFound { code: input.code });
        }

        let mut fallback = None;
        let mut chosen = None;
        let mut unsupported = None;
        for &record in &resolution.records {
            let formatter = match self.registry.dispatch(record) {
                Ok(formatter) => formatter,
                Err(error) => {
                    warn!("Skipping {} for +{}: {}", record.country, input.code, error);
                    unsupported.get_or_insert(error);
                    continue;
                }
            };
            let flags = formatter.format(&input.code, &input.phone, &record.formats);
            trace!("{} ({}): {:?}", record.country, record.iso_code, flags);
            if flags.any() {
                chosen = Some((record, flags));
                break;
            }
            fallback.get_or_insert((record, flags));
        }
        // Only unregistered countries use this code.
        let Some((record, flags)) = chosen.or(fallback) else {
            return Err(unsupported
                .unwrap_or(ValidationError::CountryNotFound { code: input.code }));
        };

        debug!(
            "+{} {} resolved to {} (valid: {})",
            input.code, input.phone, record.country, flags.any()
        );
        Ok(build(
            &input,
            record,
            flags,
            resolution.has_code,
            !input.phone.is_empty(),
            resolution.is_duplicate_code(),
        ))
    }

    pub fn countries(&self) -> impl Iterator<Item = &CountryRecord> {
        self.store.records().iter()
    }

    pub fn countries_for_code<'a>(&'a self, code: &str) -> impl Iterator<Item = &'a CountryRecord> + use<'a> {
        self.store.records_for_code(code)
    }

    pub fn calling_codes(&self) -> HashSet<&str> {
        self.store.calling_codes().collect()
    }
}
