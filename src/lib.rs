mod interfaces;
mod phonevalidator;
mod regexp_cache;
pub(crate) mod string_util;
pub mod country_data;
pub mod formatters;

/// Boilerplate that is repeated for many types lives in macros,
/// the name of which will describe what is happening more
/// clearly than a few lines of code.
mod macros;


pub use interfaces::CountryFormatter;
pub use phonevalidator::{
    errors, normalizer, phone_validator, validate_phone_number, FormatFlags, InputField,
    InputValue, LoadError, NormalizeError, NormalizedInput, PhoneValidator, ValidationError,
    ValidationResult, ValidatorConfig,
};
pub use regexp_cache::InvalidRegexError;
