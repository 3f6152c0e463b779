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

use std::{
    collections::{HashMap, HashSet},
    time::Duration,
};

use log::{debug, warn};

use super::{
    CompiledFormat, Continent, CountryRecord, DataSource, EMBEDDED_COUNTRY_DATA,
    RawCountryRecord,
};
use crate::{
    phonevalidator::{errors::LoadError, helper_constants::MAX_CALLING_CODE_DIGITS},
    regexp_cache::RegexCache,
};

/// Read-only country table, indexed by calling code.
///
/// Records keep their table order; it decides which country wins when several
/// share one calling code.
#[derive(Debug)]
pub struct CountryDataStore {
    records: Vec<CountryRecord>,
    /// Calling code to indexes into `records`, in table order.
    by_calling_code: HashMap<String, Vec<usize>>,
}

impl CountryDataStore {
    /// Loads the table bundled with the library.
    pub fn embedded() -> Result<Self, LoadError> {
        Self::from_json_str(EMBEDDED_COUNTRY_DATA)
    }

    /// Loads the table from `source`. Reading a file is bounded by `limit`.
    pub async fn load(source: &DataSource, limit: Duration) -> Result<Self, LoadError> {
        match source {
            DataSource::Embedded => Self::embedded(),
            DataSource::File(path) => {
                debug!("Reading country data from {}", path.display());
                let json = tokio::time::timeout(limit, tokio::fs::read_to_string(path))
                    .await
                    .map_err(|_| LoadError::Timeout(limit))?
                    .map_err(|source| LoadError::Io { path: path.clone(), source })?;
                Self::from_json_str(&json)
            }
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let raw_records: Vec<RawCountryRecord> = serde_json::from_str(json)?;
        Self::from_records(raw_records)
    }

    /// Checks every record and compiles its patterns. Fails on the first bad
    /// record so malformed data never reaches validation.
    pub fn from_records(raw_records: Vec<RawCountryRecord>) -> Result<Self, LoadError> {
        let cache = RegexCache::with_capacity(raw_records.len() * 3);
        let mut seen = HashSet::<(Continent, String)>::with_capacity(raw_records.len());
        let mut records = Vec::with_capacity(raw_records.len());
        let mut by_calling_code = HashMap::<String, Vec<usize>>::new();

        for raw in raw_records {
            check_record(&raw)?;
            if !seen.insert((raw.continent, raw.country.clone())) {
                return Err(LoadError::DuplicateCountry {
                    country: raw.country,
                    continent: raw.continent,
                });
            }
            if raw.formats.is_empty() {
                warn!("'{}' declares no formats, its numbers can never be valid", raw.country);
            }

            let mut formats = Vec::with_capacity(raw.formats.len());
            for descriptor in raw.formats {
                if descriptor.pattern.trim().is_empty() {
                    return Err(LoadError::EmptyPattern {
                        country: raw.country,
                        format_type: descriptor.format_type,
                    });
                }
                let regex = match cache.get_regex(&descriptor.pattern) {
                    Ok(regex) => regex,
                    Err(source) => return Err(LoadError::InvalidPattern {
                        country: raw.country,
                        format_type: descriptor.format_type,
                        pattern: descriptor.pattern,
                        source,
                    }),
                };
                formats.push(CompiledFormat {
                    format_type: descriptor.format_type,
                    pattern: descriptor.pattern,
                    regex,
                });
            }

            by_calling_code
                .entry(raw.calling_code.clone())
                .or_default()
                .push(records.len());
            records.push(CountryRecord {
                country: raw.country,
                continent: raw.continent,
                calling_code: raw.calling_code,
                iso_code: raw.iso_code,
                formats,
            });
        }

        debug!(
            "Loaded {} countries, {} calling codes, {} distinct patterns",
            records.len(), by_calling_code.len(), cache.len()
        );
        Ok(Self { records, by_calling_code })
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// All records using `calling_code`, in table order.
    pub fn records_for_code<'a>(&'a self, calling_code: &str) -> impl Iterator<Item = &'a CountryRecord> + use<'a> {
        self.by_calling_code
            .get(calling_code)
            .into_iter()
            .flatten()
            .map(|&index| &self.records[index])
    }

    pub fn calling_codes(&self) -> impl Iterator<Item = &str> {
        self.by_calling_code.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn check_record(raw: &RawCountryRecord) -> Result<(), LoadError> {
    let invalid = |reason: String| LoadError::InvalidRecord {
        country: raw.country.clone(),
        reason,
    };

    if raw.country.trim().is_empty() {
        return Err(invalid("country name is empty".to_owned()));
    }
    let code = &raw.calling_code;
    if code.is_empty()
        || code.len() > MAX_CALLING_CODE_DIGITS
        || !code.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid(format!(
            "calling code '{code}' must be 1 to {MAX_CALLING_CODE_DIGITS} digits"
        )));
    }
    let iso = &raw.iso_code;
    if iso.len() != 2 || !iso.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(invalid(format!("ISO code '{iso}' must be two uppercase letters")));
    }
    Ok(())
}
