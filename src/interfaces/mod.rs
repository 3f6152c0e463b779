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

use log::trace;

use crate::{
    country_data::{CompiledFormat, FormatType},
    phonevalidator::FormatFlags,
};

/// Country specific strategy that knows how numbers of one country (or group
/// of countries sharing a numbering plan) are written.
///
/// Implementors only describe how the candidate string for each format type is
/// built; the matching itself is shared by every country.
pub trait CountryFormatter: Send + Sync {
    /// Builds the string that the pattern of `format_type` is tested against.
    ///
    /// `code` is the normalized calling code and `phone` the normalized
    /// subscriber number, exactly as they were given by the caller.
    fn candidate(&self, format_type: FormatType, code: &str, phone: &str) -> String;

    /// Tests `phone` against every declared format and reports which types
    /// matched. Types without a declared pattern are never valid.
    fn format(&self, code: &str, phone: &str, formats: &[CompiledFormat]) -> FormatFlags {
        let mut flags = FormatFlags::default();
        for format in formats {
            if flags.get(format.format_type) {
                continue;
            }
            let candidate = self.candidate(format.format_type, code, phone);
            let matched = format.matches(&candidate);
            trace!(
                "{} candidate '{}' against '{}': {}",
                format.format_type, candidate, format.pattern, matched
            );
            if matched {
                flags.set(format.format_type);
            }
        }
        flags
    }
}
