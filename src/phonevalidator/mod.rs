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

pub mod config;
pub mod errors;
pub(crate) mod helper_constants;
mod helper_types;
pub mod normalizer;
mod phonevalidator;
mod resolver;
mod result_builder;

use tokio::sync::OnceCell;

pub use config::ValidatorConfig;
pub use errors::{InputField, LoadError, NormalizeError, ValidationError};
pub use helper_types::{FormatFlags, NormalizedInput};
pub use normalizer::InputValue;
pub use phonevalidator::PhoneValidator;
pub use result_builder::ValidationResult;

static PHONE_VALIDATOR: OnceCell<PhoneValidator> = OnceCell::const_new();

/// Process-wide validator, loaded on first use from `ValidatorConfig::from_env()`.
///
/// Concurrent first callers wait for the same load. A failed load is returned
/// to the caller and attempted again on the next call.
pub async fn phone_validator() -> Result<&'static PhoneValidator, LoadError> {
    PHONE_VALIDATOR
        .get_or_try_init(|| async {
            let config = ValidatorConfig::from_env()?;
            PhoneValidator::load(config).await
        })
        .await
}

/// Validates `phone` for the country using calling code `code` with the
/// process-wide validator.
///
/// ```ignore
/// let result = validate_phone_number("98", "9115291407").await?;
/// assert_eq!(result.country, "Iran");
/// assert!(result.is_valid_mobile_format);
/// ```
pub async fn validate_phone_number<'c, 'p>(
    code: impl Into<InputValue<'c>>,
    phone: impl Into<InputValue<'p>>,
) -> Result<ValidationResult, ValidationError> {
    let (code, phone) = (code.into(), phone.into());
    phone_validator().await?.validate(code, phone)
}
