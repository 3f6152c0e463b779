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

use log::debug;

use crate::country_data::{CountryDataStore, CountryRecord};

/// Countries found for one calling code.
#[derive(Debug)]
pub struct Resolution<'a> {
    /// Matching records in table order. Empty when the code is unknown.
    pub records: Vec<&'a CountryRecord>,
    pub has_code: bool,
}

impl Resolution<'_> {
    /// True when the calling code is shared by several countries. No country
    /// is picked here; formatters decide by number structure.
    pub fn is_duplicate_code(&self) -> bool {
        self.records.len() > 1
    }
}

pub fn resolve<'a>(store: &'a CountryDataStore, code: &str) -> Resolution<'a> {
    let records: Vec<_> = store.records_for_code(code).collect();
    if records.len() > 1 {
        debug!(
            "Calling code {} is shared by {}",
            code,
            records.iter().map(|r| r.country.as_str()).collect::<Vec<_>>().join(", ")
        );
    }
    Resolution { has_code: !records.is_empty(), records }
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::country_data::CountryDataStore;

    #[test]
    fn resolves_single_country() {
        let store = CountryDataStore::embedded().unwrap();
        let resolution = resolve(&store, "98");
        assert!(resolution.has_code);
        assert!(!resolution.is_duplicate_code());
        assert_eq!(resolution.records[0].country, "Iran");
    }

    #[test]
    fn unknown_code_is_not_an_error() {
        let store = CountryDataStore::embedded().unwrap();
        let resolution = resolve(&store, "999");
        assert!(!resolution.has_code);
        assert!(resolution.records.is_empty());
        assert!(!resolution.is_duplicate_code());
    }

    #[test]
    fn shared_code_is_flagged() {
        let store = CountryDataStore::embedded().unwrap();
        let resolution = resolve(&store, "1");
        assert!(resolution.has_code);
        assert!(resolution.is_duplicate_code());
        assert_eq!(resolution.records.len(), 2);
    }
}
