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

use serde::{Deserialize, Serialize};

use super::helper_types::{FormatFlags, NormalizedInput};
use crate::country_data::{Continent, CountryRecord};

/// Outcome of validating one `(code, phone)` pair against its country.
///
/// Every field is always present; a format the country does not declare is
/// reported as `false`. Serializes with camelCase keys (`isValidMobileFormat`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub continent: Continent,
    pub country: String,
    pub code: String,
    pub iso_code: String,
    pub phone: String,
    pub is_valid_mobile_format: bool,
    pub is_valid_service_format: bool,
    pub is_valid_landline_format: bool,
    pub is_valid_toll_free_format: bool,
    pub has_code: bool,
    pub has_phone: bool,
    pub is_duplicate_code: bool,
}

impl ValidationResult {
    /// True if the number matched at least one format of its country.
    pub fn is_valid(&self) -> bool {
        self.is_valid_mobile_format
            || self.is_valid_service_format
            || self.is_valid_landline_format
            || self.is_valid_toll_free_format
    }
}

pub fn build(
    input: &NormalizedInput,
    record: &CountryRecord,
    flags: FormatFlags,
    has_code: bool,
    has_phone: bool,
    is_duplicate_code: bool,
) -> ValidationResult {
    ValidationResult {
        continent: record.continent,
        country: record.country.clone(),
        code: input.code.clone(),
        iso_code: record.iso_code.clone(),
        phone: input.phone.clone(),
        is_valid_mobile_format: flags.mobile,
        is_valid_service_format: flags.service,
        is_valid_landline_format: flags.landline,
        is_valid_toll_free_format: flags.toll_free,
        has_code,
        has_phone,
        is_duplicate_code,
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::{
        country_data::CountryDataStore,
        phonevalidator::helper_types::{FormatFlags, NormalizedInput},
    };

    #[test]
    fn serializes_every_key() {
        let store = CountryDataStore::embedded().unwrap();
        let record = store.records_for_code("62").next().unwrap();
        let input = NormalizedInput { code: "62".to_owned(), phone: "81234567890".to_owned() };
        let flags = FormatFlags { mobile: true, ..Default::default() };

        let value = serde_json::to_value(build(&input, record, flags, true, true, false)).unwrap();
        assert_eq!(value, serde_json::json!({
            "continent": "Asia",
            "country": "Indonesia",
            "code": "62",
            "isoCode": "ID",
            "phone": "81234567890",
            "isValidMobileFormat": true,
            "isValidServiceFormat": false,
            "isValidLandlineFormat": false,
            "isValidTollFreeFormat": false,
            "hasCode": true,
            "hasPhone": true,
            "isDuplicateCode": false
        }));
    }
}
