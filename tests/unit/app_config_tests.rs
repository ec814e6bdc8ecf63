/*!
 * Tests for application configuration functionality
 */

use numverify::app_config::{Config, LogLevel};
use numverify::verifier::{LocalizationMode, SeparatorSpec};

use crate::common::{create_temp_dir, create_test_file};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert!(config.source.thousands.comma);
    assert!(config.source.decimal.period);
    assert_eq!(config.source, config.target);
    assert_eq!(config.localization, LocalizationMode::Allowed);
    assert!(!config.alternate_script_digits);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that a saved configuration loads back unchanged
#[test]
fn test_config_saveThenLoad_shouldPreserveSettings() {
    let dir = create_temp_dir().unwrap();
    let path = dir.path().join("conf.json");

    let mut config = Config::default();
    config.target.thousands = SeparatorSpec::with_custom(false, false, " ");
    config.target.decimal = SeparatorSpec::new(true, false);
    config.localization = LocalizationMode::Required;
    config.alternate_script_digits = true;
    config.batch.max_concurrent = 2;

    config.save(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();

    assert_eq!(loaded, config);
    assert!(loaded.to_policy().is_ok());
}

/// Test loading a hand-written configuration
#[test]
fn test_config_fromFile_withHandWrittenJson_shouldApplyDefaults() {
    let dir = create_temp_dir().unwrap();
    let path = create_test_file(
        dir.path(),
        "conf.json",
        r#"{
            "source": { "thousands": { "period": true }, "decimal": { "comma": true } },
            "localization": "disabled",
            "log_level": "debug"
        }"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();

    assert!(config.source.thousands.period);
    assert!(config.target.thousands.comma);
    assert_eq!(config.localization, LocalizationMode::Disabled);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(config.batch.max_concurrent >= 1);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.batch.max_concurrent = 0;
    assert!(config.validate().is_err());
    config.batch.max_concurrent = 1;

    config.source.decimal = SeparatorSpec::new(true, false);
    assert!(config.validate().is_err());
    config.source.decimal = SeparatorSpec::new(false, true);

    config.target.thousands = SeparatorSpec::with_custom(false, false, "1");
    assert!(config.validate().is_err());
}

/// Test loading from a missing or broken file
#[test]
fn test_config_fromFile_withBadInput_shouldFail() {
    let dir = create_temp_dir().unwrap();
    assert!(Config::from_file(&dir.path().join("missing.json")).is_err());

    let path = create_test_file(dir.path(), "broken.json", "{ not json").unwrap();
    assert!(Config::from_file(&path).is_err());
}
