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

use crate::country_data::FormatType;

/// Per-type outcome of testing one subscriber number against a country's
/// formats. A type the country does not declare stays `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FormatFlags {
    pub mobile: bool,
    pub service: bool,
    pub landline: bool,
    pub toll_free: bool,
}

impl FormatFlags {
    pub fn get(&self, format_type: FormatType) -> bool {
        match format_type {
            FormatType::Mobile => self.mobile,
            FormatType::Service => self.service,
            FormatType::Landline => self.landline,
            FormatType::TollFree => self.toll_free,
        }
    }

    pub fn set(&mut self, format_type: FormatType) {
        match format_type {
            FormatType::Mobile => self.mobile = true,
            FormatType::Service => self.service = true,
            FormatType::Landline => self.landline = true,
            FormatType::TollFree => self.toll_free = true,
        }
    }

    /// True if at least one format matched.
    pub fn any(&self) -> bool {
        self.mobile || self.service || self.landline || self.toll_free
    }
}

/// Input after coercion and cleanup. Both fields are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedInput {
    pub code: String,
    pub phone: String,
}
