// ABOUTME: Tests for environment configuration, logging settings, and catalog loading
// ABOUTME: Runs serially because every test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::io::Write;
use std::time::Duration;

use mealplan_core::errors::{AppError, ErrorCode};
use mealplan_intelligence::PlanLocale;
use mealplan_server::catalog::{CatalogError, InMemoryCatalog, RecipeCatalog};
use mealplan_server::config::ServerConfig;
use mealplan_server::constants::env_vars;
use mealplan_server::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use tempfile::NamedTempFile;

const ALL_VARS: &[&str] = &[
    env_vars::HTTP_PORT,
    env_vars::HOST,
    env_vars::GEMINI_API_KEY,
    env_vars::GEMINI_MODEL,
    env_vars::GEMINI_BASE_URL,
    env_vars::PLANNER_TIMEOUT_SECS,
    env_vars::PLANNER_TEMPERATURE,
    env_vars::MEAL_PLAN_LOCALE,
    env_vars::RECIPE_CATALOG_PATH,
    env_vars::CORS_ALLOWED_ORIGINS,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_when_environment_is_empty() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 8081);
    assert_eq!(config.bind_address(), "0.0.0.0:8081");
    assert!(!config.planner.is_enabled());
    assert_eq!(config.planner.model, "gemini-2.5-flash");
    assert_eq!(config.planner.timeout, Duration::from_secs(30));
    assert_eq!(config.locale, PlanLocale::English);
    assert!(config.catalog_path.is_none());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var(env_vars::HTTP_PORT, "9090");
    env::set_var(env_vars::HOST, "127.0.0.1");
    env::set_var(env_vars::GEMINI_API_KEY, "secret-key");
    env::set_var(env_vars::GEMINI_MODEL, "gemini-2.0-flash");
    env::set_var(env_vars::PLANNER_TIMEOUT_SECS, "12");
    env::set_var(env_vars::MEAL_PLAN_LOCALE, "vi");
    env::set_var(env_vars::RECIPE_CATALOG_PATH, "/srv/recipes.json");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.bind_address(), "127.0.0.1:9090");
    assert!(config.planner.is_enabled());
    assert_eq!(config.planner.model, "gemini-2.0-flash");
    assert_eq!(config.planner.timeout, Duration::from_secs(12));
    assert_eq!(config.locale, PlanLocale::Vietnamese);
    assert_eq!(
        config.catalog_path.as_deref().and_then(|p| p.to_str()),
        Some("/srv/recipes.json")
    );

    let summary = config.summary();
    assert!(summary.contains("planner=gemini"));
    assert!(!summary.contains("secret-key"));
}

#[test]
#[serial]
fn test_blank_api_key_disables_planner() {
    clear_env();
    env::set_var(env_vars::GEMINI_API_KEY, "   ");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert!(!config.planner.is_enabled());
}

#[test]
#[serial]
fn test_invalid_values_fail_startup() {
    clear_env();
    env::set_var(env_vars::HTTP_PORT, "not-a-port");
    let error = ServerConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
    assert!(error.message.contains(env_vars::HTTP_PORT));

    clear_env();
    env::set_var(env_vars::MEAL_PLAN_LOCALE, "klingon");
    let error = ServerConfig::from_env().unwrap_err();
    assert!(error.message.contains("klingon"));
    clear_env();
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");

    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.include_spans);
}

#[tokio::test]
async fn test_catalog_loads_from_json_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id": "r1", "title": "Phở", "kitchenTools": ["Stove"], "mealCourse": ["Breakfast"],
            "nutrition": {{"calories": 480}}, "ingredients": [{{"name": "beef"}}]}}]"#
    )
    .unwrap();

    let catalog = InMemoryCatalog::from_json_file(file.path()).await.unwrap();
    let recipes = catalog.all_recipes().await.unwrap();

    assert_eq!(catalog.len(), 1);
    assert_eq!(recipes[0].title, "Phở");
    assert_eq!(recipes[0].required_tools, vec!["Stove"]);
    assert_eq!(recipes[0].calories(), 480);
    assert!(recipes[0].allergens.is_empty());
}

#[tokio::test]
async fn test_sample_catalog_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_recipes.json");

    let catalog = InMemoryCatalog::from_json_file(path).await.unwrap();

    assert!(!catalog.is_empty());
}

#[tokio::test]
async fn test_catalog_errors_map_to_app_errors() {
    let missing = InMemoryCatalog::from_json_file("/definitely/not/here.json")
        .await
        .unwrap_err();
    assert!(matches!(missing, CatalogError::Read { .. }));
    assert_eq!(AppError::from(missing).code, ErrorCode::ResourceUnavailable);

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{\"not\": \"an array\"}}").unwrap();
    let invalid = InMemoryCatalog::from_json_file(file.path()).await.unwrap_err();
    assert!(matches!(invalid, CatalogError::Parse { .. }));
    assert!(invalid.to_string().contains("Invalid recipe catalog"));
    assert_eq!(AppError::from(invalid).code, ErrorCode::SerializationError);
}
