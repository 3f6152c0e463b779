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

use std::{path::PathBuf, time::Duration};

use strum::Display;
use thiserror::Error;

use crate::{
    country_data::{Continent, FormatType},
    regexp_cache::InvalidRegexError,
};

/// Names the input a normalization error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum InputField {
    #[strum(serialize = "code")]
    Code,
    #[strum(serialize = "phone")]
    Phone,
}

/// Errors raised while turning raw `code`/`phone` input into a `NormalizedInput`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("`{field}` is empty")]
    EmptyValue { field: InputField },

    #[error("`{field}` must be a string or a number, found {found}")]
    TypeMismatch { field: InputField, found: &'static str },

    #[error("`{field}` has length {length} ('{value}'), expected {min}..={max}")]
    LengthOutOfRange {
        field: InputField,
        value: String,
        length: usize,
        min: usize,
        max: usize,
    },
}

/// Errors raised while loading or checking the country table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read country data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Loading country data timed out after {0:?}")]
    Timeout(Duration),

    #[error("Country data does not follow the expected schema: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("Invalid record for '{country}': {reason}")]
    InvalidRecord { country: String, reason: String },

    #[error("Empty {format_type} pattern for '{country}'")]
    EmptyPattern { country: String, format_type: FormatType },

    #[error("Invalid {format_type} pattern for '{country}' ('{pattern}'): {source}")]
    InvalidPattern {
        country: String,
        format_type: FormatType,
        pattern: String,
        #[source]
        source: InvalidRegexError,
    },

    #[error("No formatter registered for '{country}' ({continent})")]
    UnsupportedCountry { country: String, continent: Continent },

    #[error("'{country}' ({continent}) is declared more than once")]
    DuplicateCountry { country: String, continent: Continent },

    #[error("Invalid configuration value for {key}: '{value}'")]
    Config { key: &'static str, value: String },
}

/// Errors returned by phone number validation.
///
/// A number that matches none of the country's formats is not an error: it is a
/// `ValidationResult` with every flag set to `false`.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0}")]
    Normalize(#[from] NormalizeError),

    #[error("No country uses calling code '{code}'")]
    CountryNotFound { code: String },

    #[error("No formatter registered for '{country}' ({continent})")]
    UnsupportedCountry { country: String, continent: Continent },

    #[error("{0}")]
    Load(#[from] LoadError),
}

impl ValidationError {
    /// Input field the error refers to, if it was caused by bad input.
    pub fn field(&self) -> Option<InputField> {
        match self {
            ValidationError::Normalize(
                NormalizeError::EmptyValue { field }
                | NormalizeError::TypeMismatch { field, .. }
                | NormalizeError::LengthOutOfRange { field, .. },
            ) => Some(*field),
            ValidationError::CountryNotFound { .. } => Some(InputField::Code),
            _ => None,
        }
    }
}
