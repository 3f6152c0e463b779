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

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

/// Continents used to route a country to its formatter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    Serialize, Deserialize, Display, AsRefStr, EnumIter,
)]
pub enum Continent {
    #[strum(serialize = "Africa")]
    Africa,
    #[strum(serialize = "Asia")]
    Asia,
    #[strum(serialize = "Europe")]
    Europe,
    #[strum(serialize = "Oceania")]
    Oceania,
    #[serde(rename = "North America")]
    #[strum(serialize = "North America")]
    NorthAmerica,
    #[serde(rename = "Central America")]
    #[strum(serialize = "Central America")]
    CentralAmerica,
    #[serde(rename = "South America")]
    #[strum(serialize = "South America")]
    SouthAmerica,
}

/// Kind of number a format descriptor describes.
///
/// The tag decides which candidate string is built for the pattern:
/// - **Mobile**: national form, optionally with the trunk prefix (`09115291407`).
/// - **Service**: international form, `+<calling code><national number>`.
/// - **Landline**: national form split into the country's digit groups (`020 7946 0958`).
/// - **TollFree**: built like a landline.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    Serialize, Deserialize, Display, AsRefStr, EnumIter,
)]
pub enum FormatType {
    #[serde(rename = "mobile", alias = "local")]
    #[strum(serialize = "mobile")]
    Mobile,
    #[serde(rename = "service", alias = "international")]
    #[strum(serialize = "service")]
    Service,
    #[serde(rename = "landline", alias = "fixed-line")]
    #[strum(serialize = "landline")]
    Landline,
    #[serde(rename = "toll-free", alias = "tollfree")]
    #[strum(serialize = "toll-free")]
    TollFree,
}

/// One `{type, pattern}` entry as it is stored in the country table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatDescriptor {
    #[serde(rename = "type")]
    pub format_type: FormatType,
    pub pattern: String,
}

/// Raw row of the country table before its patterns are compiled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCountryRecord {
    pub country: String,
    pub continent: Continent,
    #[serde(alias = "code")]
    pub calling_code: String,
    pub iso_code: String,
    #[serde(default)]
    pub formats: Vec<FormatDescriptor>,
}

/// Format descriptor with its pattern compiled. Identical pattern sources share
/// one `Regex`, anchored so that it only accepts a whole candidate.
#[derive(Debug, Clone)]
pub struct CompiledFormat {
    pub format_type: FormatType,
    pub pattern: String,
    pub regex: Arc<Regex>,
}

impl CompiledFormat {
    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

/// Immutable country entry of a loaded `CountryDataStore`.
#[derive(Debug, Clone)]
pub struct CountryRecord {
    pub country: String,
    pub continent: Continent,
    pub calling_code: String,
    pub iso_code: String,
    pub formats: Vec<CompiledFormat>,
}

impl CountryRecord {
    /// Returns the compiled formats of the given type, in declaration order.
    pub fn formats_of(&self, format_type: FormatType) -> impl Iterator<Item = &CompiledFormat> {
        self.formats
            .iter()
            .filter(move |format| format.format_type == format_type)
    }

    pub fn declares(&self, format_type: FormatType) -> bool {
        self.formats_of(format_type).next().is_some()
    }
}
