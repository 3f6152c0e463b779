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


/// Bounds on the length of the normalized calling code. Real calling codes
/// have 1 to 4 digits; the upper bound only rejects pathological input.
pub const MIN_CODE_LENGTH: usize = 1;
pub const MAX_CODE_LENGTH: usize = 10;

/// Longest calling code accepted in the country table.
pub const MAX_CALLING_CODE_DIGITS: usize = 4;

pub const DEFAULT_LOAD_TIMEOUT_MS: u64 = 5_000;

/// Path of a JSON country table replacing the bundled one.
pub const COUNTRY_DATA_ENV: &str = "RPHONE_COUNTRY_DATA";
/// Timeout in milliseconds for reading the country table.
pub const LOAD_TIMEOUT_ENV: &str = "RPHONE_LOAD_TIMEOUT_MS";

pub const PLUS_SIGN: &str = "+";
