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

use std::borrow::Cow;

use super::{
    errors::{InputField, NormalizeError},
    helper_constants::PLUS_SIGN,
    helper_types::NormalizedInput,
};
use crate::macros::impl_input_value_from_int;

/// Raw `code` or `phone` value as handed over by a caller.
///
/// Strings and numbers are accepted; anything else (possible when the value
/// comes from JSON) is kept as `Unsupported` so normalization can report a
/// `TypeMismatch` naming the field.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue<'a> {
    Text(Cow<'a, str>),
    /// Decimal form of a numeric input.
    Number(String),
    /// Name of the type that was found instead of a string or number.
    Unsupported(&'static str),
}

impl<'a> From<&'a str> for InputValue<'a> {
    fn from(value: &'a str) -> Self {
        InputValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for InputValue<'a> {
    fn from(value: &'a String) -> Self {
        InputValue::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for InputValue<'_> {
    fn from(value: String) -> Self {
        InputValue::Text(Cow::Owned(value))
    }
}

impl_input_value_from_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<'a> From<&'a serde_json::Value> for InputValue<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::String(text) => InputValue::Text(Cow::Borrowed(text.as_str())),
            Value::Number(number) => {
                if let Some(unsigned) = number.as_u64() {
                    unsigned.into()
                } else if let Some(signed) = number.as_i64() {
                    signed.into()
                } else {
                    // `f64` display drops a zero fraction: 98.0 becomes "98".
                    InputValue::Number(
                        number.as_f64().map_or_else(|| number.to_string(), |float| float.to_string())
                    )
                }
            }
            Value::Null => InputValue::Unsupported("null"),
            Value::Bool(_) => InputValue::Unsupported("boolean"),
            Value::Array(_) => InputValue::Unsupported("array"),
            Value::Object(_) => InputValue::Unsupported("object"),
        }
    }
}

impl From<serde_json::Value> for InputValue<'_> {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(text) => InputValue::Text(Cow::Owned(text)),
            other => match InputValue::from(&other) {
                InputValue::Text(text) => InputValue::Text(Cow::Owned(text.into_owned())),
                InputValue::Number(number) => InputValue::Number(number),
                InputValue::Unsupported(found) => InputValue::Unsupported(found),
            },
        }
    }
}

/// Allowed length of the normalized calling code, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeLengthBounds {
    pub min: usize,
    pub max: usize,
}

/// Coerces both values to strings and cleans them up: Unicode decimal digits
/// become ASCII, whitespace is removed and a leading `+` on the calling code is
/// dropped. The code is checked before the phone.
pub fn normalize(
    code: InputValue<'_>,
    phone: InputValue<'_>,
    bounds: CodeLengthBounds,
) -> Result<NormalizedInput, NormalizeError> {
    let code = clean(code, InputField::Code)?;
    let code = code.strip_prefix(PLUS_SIGN).map(str::to_owned).unwrap_or(code);
    if code.is_empty() {
        return Err(NormalizeError::EmptyValue { field: InputField::Code });
    }
    let length = code.chars().count();
    if length < bounds.min || length > bounds.max {
        return Err(NormalizeError::LengthOutOfRange {
            field: InputField::Code,
            value: code,
            length,
            min: bounds.min,
            max: bounds.max,
        });
    }

    let phone = clean(phone, InputField::Phone)?;
    if phone.is_empty() {
        return Err(NormalizeError::EmptyValue { field: InputField::Phone });
    }

    Ok(NormalizedInput { code, phone })
}

fn clean(value: InputValue<'_>, field: InputField) -> Result<String, NormalizeError> {
    let text = match value {
        InputValue::Text(text) => text,
        InputValue::Number(number) => Cow::Owned(number),
        InputValue::Unsupported(found) => {
            return Err(NormalizeError::TypeMismatch { field, found });
        }
    };
    Ok(dec_from_char::normalize_decimals(&text)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect())
}
