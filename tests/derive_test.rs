#![allow(non_snake_case)]

use envbind::{EnvRecord, FieldSpec};
use std::collections::HashMap;

#[derive(Debug, EnvRecord)]
pub struct TestVars {
    #[field(env = "APP_ENV")]
    pub ENVIRONMENT: String,
    pub DB_NAME: String,
    pub SOME_KEY: String,
}

#[derive(Debug, EnvRecord)]
#[field(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct RenamedVars {
    /// Deployment stage
    #[field(env = "APP_ENV")]
    pub environment: String,

    /// Database name
    /// used by the app
    pub db_name: String,

    #[field(env = "", doc = "  Fallback key  ")]
    pub some_key: String,
}

#[derive(Debug, EnvRecord)]
pub struct PlainVars {
    pub r#type: String,
    pub port: std::string::String,
}

#[derive(Debug, EnvRecord)]
pub struct EmptyVars {}

fn env_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_annotation_overrides_field_name() {
    assert_eq!(
        TestVars::FIELDS,
        &[
            FieldSpec::keyed("ENVIRONMENT", "APP_ENV"),
            FieldSpec::named("DB_NAME"),
            FieldSpec::named("SOME_KEY"),
        ]
    );
}

#[test]
fn test_rename_all_and_descriptions() {
    let fields = RenamedVars::FIELDS;

    assert_eq!(fields[0].key, "APP_ENV");
    assert_eq!(fields[0].description, "Deployment stage");
    assert_eq!(fields[1].key, "DB_NAME");
    assert_eq!(fields[1].field, "db_name");
    assert_eq!(fields[1].description, "Database name used by the app");
    // empty env falls back to the renamed identifier
    assert_eq!(fields[2].key, "SOME_KEY");
    assert_eq!(fields[2].description, "Fallback key");
}

#[test]
fn test_raw_identifier_is_unraw() {
    assert_eq!(PlainVars::FIELDS[0].key, "type");
    assert_eq!(PlainVars::FIELDS[1].key, "port");
}

#[test]
fn test_from_source_populates_fields() {
    let env = env_map(&[
        ("APP_ENV", "production"),
        ("DB_NAME", "main_db"),
        ("SOME_KEY", "value123"),
    ]);

    let vars = TestVars::from_source(&env).unwrap();
    assert_eq!(vars.ENVIRONMENT, "production");
    assert_eq!(vars.DB_NAME, "main_db");
    assert_eq!(vars.SOME_KEY, "value123");
}

#[test]
fn test_field_name_is_ignored_when_annotated() {
    let env = env_map(&[
        ("ENVIRONMENT", "wrong"),
        ("APP_ENV", "production"),
        ("DB_NAME", "main_db"),
        ("SOME_KEY", "value123"),
    ]);

    let vars = TestVars::from_source(&env).unwrap();
    assert_eq!(vars.ENVIRONMENT, "production");
}

#[test]
fn test_from_source_reports_each_missing_field() {
    let env = env_map(&[("DB_NAME", "main_db")]);

    let errors = RenamedVars::from_source(&env).unwrap_err();
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();

    assert_eq!(
        messages,
        vec![
            "has no `APP_ENV` environment variable defined to populate into `environment` instance field",
            "has no `SOME_KEY` environment variable defined to populate into `some_key` instance field",
        ]
    );
}

#[test]
fn test_from_values_assigns_in_declaration_order() {
    let vars = RenamedVars::from_values(vec!["a".into(), "b".into(), "c".into()]);

    assert_eq!(vars.environment, "a");
    assert_eq!(vars.db_name, "b");
    assert_eq!(vars.some_key, "c");
}

#[test]
fn test_empty_record_always_loads() {
    assert!(EmptyVars::FIELDS.is_empty());
    assert!(EmptyVars::from_source(&HashMap::<String, String>::new()).is_ok());
}
