// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
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

/// Strips `prefix` from the start of `number` if present and something is left
/// after it. Returns the number unchanged otherwise.
pub fn strip_national_prefix<'a>(number: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return number;
    }
    match number.strip_prefix(prefix) {
        Some(rest) if !rest.is_empty() => rest,
        _ => number,
    }
}

/// Splits `digits` into consecutive groups of the given sizes joined by
/// `separator`. Characters left over after the last group become one more
/// group; a number shorter than the grouping yields fewer groups.
///
/// `group_digits("2079460958", &[2, 4, 4], " ")` is `"20 7946 0958"`.
pub fn group_digits(digits: &str, groups: &[usize], separator: &str) -> String {
    let mut result = String::with_capacity(digits.len() + groups.len() * separator.len());
    let mut rest = digits;

    for &size in groups {
        if rest.is_empty() {
            break;
        }
        let split_at = rest
            .char_indices()
            .nth(size)
            .map_or(rest.len(), |(index, _)| index);
        let (group, tail) = rest.split_at(split_at);
        if !result.is_empty() {
            result.push_str(separator);
        }
        result.push_str(group);
        rest = tail;
    }
    if !rest.is_empty() {
        if !result.is_empty() {
            result.push_str(separator);
        }
        result.push_str(rest);
    }
    result
}
