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

use crate::{
    country_data::FormatType,
    interfaces::CountryFormatter,
    phonevalidator::helper_constants::PLUS_SIGN,
    string_util::{group_digits, strip_national_prefix},
};

/// How the international (service) candidate is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStyle {
    /// `+<code><number>`, e.g. `+989115291407`.
    Compact,
    /// `+<code> <number>`, e.g. `+64 211234567`.
    Spaced,
    /// `+<code><token><number>`. Some countries dial a mobile token between
    /// the calling code and the national number, e.g. `9` in Argentina.
    MobileToken(&'static str),
}

/// Numbering conventions of one country, or of several countries sharing a
/// plan. Built with the chained setters below:
///
/// ```ignore
/// NumberingPlan::new()
///     .national_prefix("0")
///     .prefix_mobile()
///     .prefix_landline()
///     .landline(&[2, 4, 4], " ")
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingPlan {
    national_prefix: &'static str,
    national_number_length: Option<usize>,
    prefix_mobile: bool,
    prefix_landline: bool,
    service: ServiceStyle,
    landline_groups: &'static [usize],
    separator: &'static str,
}

impl NumberingPlan {
    pub fn new() -> Self {
        Self {
            national_prefix: "",
            national_number_length: None,
            prefix_mobile: false,
            prefix_landline: false,
            service: ServiceStyle::Compact,
            landline_groups: &[],
            separator: "",
        }
    }

    /// Trunk prefix dialed before national numbers. It is stripped from the
    /// input when present.
    pub fn national_prefix(self, prefix: &'static str) -> Self {
        Self { national_prefix: prefix, ..self }
    }

    /// Only strip the national prefix when the input is exactly one prefix
    /// longer than `length`. Needed where national numbers may themselves
    /// start with the prefix digit (Russian `800` numbers, trunk `8`).
    pub fn national_number_length(self, length: usize) -> Self {
        Self { national_number_length: Some(length), ..self }
    }

    /// The mobile candidate starts with the national prefix.
    pub fn prefix_mobile(self) -> Self {
        Self { prefix_mobile: true, ..self }
    }

    /// Landline and toll-free candidates start with the national prefix.
    pub fn prefix_landline(self) -> Self {
        Self { prefix_landline: true, ..self }
    }

    pub fn service(self, service: ServiceStyle) -> Self {
        Self { service, ..self }
    }

    pub fn landline(self, groups: &'static [usize], separator: &'static str) -> Self {
        Self { landline_groups: groups, separator, ..self }
    }

    /// National significant number: the input without its trunk prefix.
    pub fn national_number<'a>(&self, phone: &'a str) -> &'a str {
        if let Some(length) = self.national_number_length {
            if phone.chars().count() != length + self.national_prefix.chars().count() {
                return phone;
            }
        }
        strip_national_prefix(phone, self.national_prefix)
    }

    fn with_prefix(&self, enabled: bool, number: &str) -> String {
        if enabled {
            fast_cat::concat_str!(self.national_prefix, number)
        } else {
            number.to_owned()
        }
    }
}

impl Default for NumberingPlan {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryFormatter for NumberingPlan {
    fn candidate(&self, format_type: FormatType, code: &str, phone: &str) -> String {
        let national_number = self.national_number(phone);
        match format_type {
            FormatType::Mobile => self.with_prefix(self.prefix_mobile, national_number),
            FormatType::Service => match self.service {
                ServiceStyle::Compact => {
                    fast_cat::concat_str!(PLUS_SIGN, code, national_number)
                }
                ServiceStyle::Spaced => {
                    fast_cat::concat_str!(PLUS_SIGN, code, " ", national_number)
                }
                ServiceStyle::MobileToken(token) => {
                    fast_cat::concat_str!(PLUS_SIGN, code, token, national_number)
                }
            },
            FormatType::Landline | FormatType::TollFree => {
                let grouped = group_digits(national_number, self.landline_groups, self.separator);
                self.with_prefix(self.prefix_landline, &grouped)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NumberingPlan, ServiceStyle};
    use crate::{country_data::FormatType, interfaces::CountryFormatter};

    fn iran() -> NumberingPlan {
        NumberingPlan::new()
            .national_prefix("0")
            .prefix_mobile()
            .prefix_landline()
            .landline(&[2, 8], " ")
    }

    #[test]
    fn builds_candidates_per_type() {
        let plan = iran();
        assert_eq!(plan.candidate(FormatType::Mobile, "98", "9115291407"), "09115291407");
        assert_eq!(plan.candidate(FormatType::Service, "98", "9115291407"), "+989115291407");
        assert_eq!(plan.candidate(FormatType::Landline, "98", "2112345678"), "021 12345678");
    }

    #[test]
    fn trunk_prefix_in_input_is_not_doubled() {
        let plan = iran();
        assert_eq!(plan.candidate(FormatType::Mobile, "98", "09115291407"), "09115291407");
        assert_eq!(plan.candidate(FormatType::Service, "98", "09115291407"), "+989115291407");
    }

    #[test]
    fn length_guard_keeps_numbers_starting_with_prefix_digit() {
        let plan = NumberingPlan::new()
            .national_prefix("8")
            .national_number_length(10)
            .prefix_mobile()
            .prefix_landline()
            .landline(&[3, 3, 2, 2], "-");
        assert_eq!(plan.national_number("88001234567"), "8001234567");
        assert_eq!(plan.national_number("8001234567"), "8001234567");
        assert_eq!(plan.candidate(FormatType::TollFree, "7", "8001234567"), "8800-123-45-67");
    }

    #[test]
    fn service_styles() {
        let spaced = NumberingPlan::new().service(ServiceStyle::Spaced);
        assert_eq!(spaced.candidate(FormatType::Service, "64", "211234567"), "+64 211234567");

        let token = NumberingPlan::new().service(ServiceStyle::MobileToken("9"));
        assert_eq!(token.candidate(FormatType::Service, "54", "1123456789"), "+5491123456789");
    }

    #[test]
    fn toll_free_is_grouped_like_landline() {
        let plan = NumberingPlan::new().national_prefix("1").landline(&[3, 3, 4], "-");
        assert_eq!(plan.candidate(FormatType::TollFree, "1", "8005550199"), "800-555-0199");
        assert_eq!(plan.candidate(FormatType::TollFree, "1", "18005550199"), "800-555-0199");
    }
}
