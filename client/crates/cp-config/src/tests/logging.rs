use crate::{LogLevel, LoggingConfig};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use log::LevelFilter;

#[test]
fn given_mixed_case_level_when_parsed_then_matches_filter() {
    assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel(LevelFilter::Debug));
    assert_eq!(LogLevel::from_str(" warn ").unwrap(), LogLevel(LevelFilter::Warn));
}

#[test]
fn given_unknown_level_when_parsed_then_error() {
    assert_that!(LogLevel::from_str("verbose"), err(anything()));
}

#[test]
fn given_level_when_displayed_then_lowercase() {
    assert_eq!(LogLevel(LevelFilter::Trace).to_string(), "trace");
}

#[test]
fn given_toml_level_when_deserialized_then_parsed() {
    let config: LoggingConfig = toml::from_str("level = \"error\"").unwrap();
    assert_eq!(*config.level, LevelFilter::Error);
}

#[test]
fn given_escaping_dir_when_validate_then_error() {
    let config = LoggingConfig {
        dir: "../outside".into(),
        ..LoggingConfig::default()
    };
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_nested_file_name_when_validate_then_error() {
    let config = LoggingConfig {
        file: Some("logs/campus.log".into()),
        ..LoggingConfig::default()
    };
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_defaults_when_validate_then_ok() {
    assert_that!(LoggingConfig::default().validate(), ok(anything()));
}
