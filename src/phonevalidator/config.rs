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

use std::{path::PathBuf, time::Duration};

use super::{
    errors::LoadError,
    helper_constants::{
        COUNTRY_DATA_ENV, DEFAULT_LOAD_TIMEOUT_MS, LOAD_TIMEOUT_ENV, MAX_CODE_LENGTH,
        MIN_CODE_LENGTH,
    },
};
use crate::country_data::DataSource;

/// Settings of a `PhoneValidator`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    pub source: DataSource,
    /// Upper bound for reading the country table.
    pub load_timeout: Duration,
    pub min_code_length: usize,
    pub max_code_length: usize,
    /// Refuse to load a table that contains a country without a registered
    /// formatter. When disabled, such a country fails at validation time.
    pub strict_dispatch: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            source: DataSource::Embedded,
            load_timeout: Duration::from_millis(DEFAULT_LOAD_TIMEOUT_MS),
            min_code_length: MIN_CODE_LENGTH,
            max_code_length: MAX_CODE_LENGTH,
            strict_dispatch: true,
        }
    }
}

impl ValidatorConfig {
    /// Default configuration with `RPHONE_COUNTRY_DATA` and
    /// `RPHONE_LOAD_TIMEOUT_MS` applied when set.
    pub fn from_env() -> Result<Self, LoadError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LoadError> {
        let mut config = Self::default();

        if let Some(path) = lookup(COUNTRY_DATA_ENV) {
            let path = path.trim();
            if path.is_empty() {
                return Err(LoadError::Config { key: COUNTRY_DATA_ENV, value: path.to_owned() });
            }
            config.source = DataSource::File(PathBuf::from(path));
        }
        if let Some(timeout) = lookup(LOAD_TIMEOUT_ENV) {
            let millis = timeout
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|&millis| millis > 0)
                .ok_or(LoadError::Config { key: LOAD_TIMEOUT_ENV, value: timeout.clone() })?;
            config.load_timeout = Duration::from_millis(millis);
        }
        Ok(config)
    }

    pub(crate) fn check(&self) -> Result<(), LoadError> {
        if self.min_code_length == 0 || self.min_code_length > self.max_code_length {
            return Err(LoadError::Config {
                key: "min_code_length",
                value: format!("{}..={}", self.min_code_length, self.max_code_length),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, path::PathBuf, time::Duration};

    use super::ValidatorConfig;
    use crate::{country_data::DataSource, phonevalidator::errors::LoadError};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = ValidatorConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ValidatorConfig::default());
        assert_eq!(config.source, DataSource::Embedded);
        assert!(config.strict_dispatch);
    }

    #[test]
    fn env_overrides_source_and_timeout() {
        let config = ValidatorConfig::from_lookup(lookup(&[
            ("RPHONE_COUNTRY_DATA", "/etc/countries.json"),
            ("RPHONE_LOAD_TIMEOUT_MS", "250"),
        ]))
        .unwrap();
        assert_eq!(config.source, DataSource::File(PathBuf::from("/etc/countries.json")));
        assert_eq!(config.load_timeout, Duration::from_millis(250));
    }

    #[test]
    fn malformed_timeout_is_rejected() {
        for value in ["soon", "0", "-5"] {
            let error = ValidatorConfig::from_lookup(lookup(&[("RPHONE_LOAD_TIMEOUT_MS", value)]))
                .unwrap_err();
            assert!(matches!(error, LoadError::Config { key: "RPHONE_LOAD_TIMEOUT_MS", .. }));
        }
    }

    #[test]
    fn inverted_code_bounds_are_rejected() {
        let config = ValidatorConfig { min_code_length: 5, max_code_length: 2, ..Default::default() };
        assert!(config.check().is_err());
        assert!(ValidatorConfig::default().check().is_ok());
    }
}
