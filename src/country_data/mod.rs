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

//! Static table of countries, their calling codes and number formats.

mod record;
mod store;

use std::path::PathBuf;

pub use record::{
    CompiledFormat, Continent, CountryRecord, FormatDescriptor, FormatType, RawCountryRecord,
};
pub use store::CountryDataStore;

/// Country table compiled into the library.
pub const EMBEDDED_COUNTRY_DATA: &str = include_str!("countries.json");

/// Where the country table is read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DataSource {
    /// The table bundled with the library.
    #[default]
    Embedded,
    /// A JSON file with the same schema as the bundled table.
    File(PathBuf),
}
