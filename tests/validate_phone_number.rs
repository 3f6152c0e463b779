use std::{io::Write, time::Duration};

use rphonevalidator::{
    country_data::{Continent, DataSource},
    validate_phone_number, InputField, LoadError, NormalizeError, PhoneValidator,
    ValidationError, ValidatorConfig,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[tokio::test]
async fn iran_mobile_number_is_valid() {
    init_logger();
    let result = validate_phone_number("98", "9115291407").await.unwrap();
    assert_eq!(result.country, "Iran");
    assert_eq!(result.iso_code, "IR");
    assert!(result.is_valid_mobile_format);
}

#[tokio::test]
async fn unknown_calling_code_is_rejected() {
    init_logger();
    let error = validate_phone_number("999", "1234567890").await.unwrap_err();
    assert!(matches!(error, ValidationError::CountryNotFound { .. }));
}

#[tokio::test]
async fn empty_code_is_rejected() {
    init_logger();
    let error = validate_phone_number("", "1234567890").await.unwrap_err();
    assert!(matches!(
        error,
        ValidationError::Normalize(NormalizeError::EmptyValue { field: InputField::Code })
    ));
}

#[tokio::test]
async fn nanp_code_is_flagged_as_shared() {
    init_logger();
    let result = validate_phone_number("1", "2025550123").await.unwrap();
    assert_eq!(result.continent, Continent::NorthAmerica);
    assert_eq!(result.country, "United States");
    assert!(result.is_duplicate_code);
}

#[tokio::test]
async fn numeric_input_is_accepted() {
    init_logger();
    let result = validate_phone_number(98u16, 9115291407u64).await.unwrap();
    assert_eq!(result.code, "98");
    assert!(result.is_valid_mobile_format);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_calls_agree() {
    init_logger();
    let mut handles = Vec::new();
    for _ in 0..32 {
        handles.push(tokio::spawn(async {
            validate_phone_number("1", "4165550123").await.unwrap()
        }));
    }

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }
    assert_eq!(results[0].country, "Canada");
    assert!(results.iter().all(|result| *result == results[0]));
}

#[tokio::test]
async fn loads_country_table_from_file() {
    init_logger();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"[
        { "country": "Iran", "continent": "Asia", "code": "98", "isoCode": "IR",
          "formats": [{ "type": "local", "pattern": "^09\\d{9}$" }] }
    ]"#).unwrap();

    let config = ValidatorConfig {
        source: DataSource::File(file.path().to_path_buf()),
        ..Default::default()
    };
    let validator = PhoneValidator::load(config).await.unwrap();

    let result = validator.validate("98", "9115291407").unwrap();
    assert!(result.is_valid_mobile_format);
    assert!(!result.is_valid_service_format);
    assert!(matches!(
        validator.validate("44", "7911123456").unwrap_err(),
        ValidationError::CountryNotFound { .. }
    ));
}

#[tokio::test]
async fn malformed_pattern_in_file_fails_load() {
    init_logger();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"[
        { "country": "Iran", "continent": "Asia", "callingCode": "98", "isoCode": "IR",
          "formats": [{ "type": "mobile", "pattern": "^09\\d{9$" }] }
    ]"#).unwrap();

    let config = ValidatorConfig {
        source: DataSource::File(file.path().to_path_buf()),
        ..Default::default()
    };
    let error = PhoneValidator::load(config).await.unwrap_err();
    assert!(matches!(error, LoadError::InvalidPattern { ref country, .. } if country == "Iran"));
}

#[tokio::test]
async fn missing_file_fails_load() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let config = ValidatorConfig {
        source: DataSource::File(dir.path().join("missing.json")),
        ..Default::default()
    };
    let error = PhoneValidator::load(config).await.unwrap_err();
    assert!(matches!(error, LoadError::Io { .. }));
}

#[tokio::test]
async fn load_is_bounded_by_timeout() {
    init_logger();
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = ValidatorConfig {
        source: DataSource::File(file.path().to_path_buf()),
        load_timeout: Duration::ZERO,
        ..Default::default()
    };
    let error = PhoneValidator::load(config).await.unwrap_err();
    assert!(matches!(error, LoadError::Timeout(limit) if limit == Duration::ZERO));
}

#[test]
fn embedded_validator_works_without_runtime() {
    init_logger();
    let validator = PhoneValidator::embedded().unwrap();
    let result = validator.validate("44", "7911123456").unwrap();
    assert_eq!(result.country, "United Kingdom");
    assert!(result.is_valid_mobile_format);
}
