// ABOUTME: Environment configuration for the meal-plan server
// ABOUTME: Parses listener, planner, locale, catalog, and CORS settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration.
//!
//! There are no config files: every setting is an environment variable with a
//! default from [`crate::constants`]. Invalid values fail startup instead of
//! being silently replaced.

use std::env;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use mealplan_core::errors::{AppError, AppResult};
use mealplan_intelligence::PlanLocale;
use tracing::info;

use crate::constants::{env_vars, network, planner};

/// Settings of the external plan composer
#[derive(Clone)]
pub struct PlannerConfig {
    /// Gemini API key; `None` disables the AI path entirely
    pub api_key: Option<String>,
    /// Model id
    pub model: String,
    /// API base URL, overridable for proxies and tests
    pub base_url: String,
    /// Caller-side timeout of one planner call
    pub timeout: Duration,
    /// Generation temperature
    pub temperature: f32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: planner::DEFAULT_MODEL.to_owned(),
            base_url: planner::DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(planner::DEFAULT_TIMEOUT_SECS),
            temperature: planner::DEFAULT_TEMPERATURE,
        }
    }
}

impl PlannerConfig {
    /// Whether an API key is configured
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

impl Debug for PlannerConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PlannerConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("temperature", &self.temperature)
            .finish()
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Listener port
    pub http_port: u16,
    /// External planner settings
    pub planner: PlannerConfig,
    /// Display vocabulary for plans
    pub locale: PlanLocale,
    /// JSON catalog file; an empty catalog is served when unset
    pub catalog_path: Option<PathBuf>,
    /// Comma-separated CORS origins, `*` for any
    pub cors_allowed_origins: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: network::DEFAULT_HOST.to_owned(),
            http_port: network::DEFAULT_HTTP_PORT,
            planner: PlannerConfig::default(),
            locale: PlanLocale::default(),
            catalog_path: None,
            cors_allowed_origins: network::DEFAULT_CORS_ORIGINS.to_owned(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or locale variable cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let locale: PlanLocale = parse_env(env_vars::MEAL_PLAN_LOCALE, PlanLocale::default())?;

        Ok(Self {
            host: env_var_or(env_vars::HOST, network::DEFAULT_HOST),
            http_port: parse_env(env_vars::HTTP_PORT, network::DEFAULT_HTTP_PORT)?,
            planner: PlannerConfig {
                api_key: env::var(env_vars::GEMINI_API_KEY)
                    .ok()
                    .filter(|key| !key.trim().is_empty()),
                model: env_var_or(env_vars::GEMINI_MODEL, planner::DEFAULT_MODEL),
                base_url: env_var_or(env_vars::GEMINI_BASE_URL, planner::DEFAULT_BASE_URL),
                timeout: Duration::from_secs(parse_env(
                    env_vars::PLANNER_TIMEOUT_SECS,
                    planner::DEFAULT_TIMEOUT_SECS,
                )?),
                temperature: parse_env(env_vars::PLANNER_TEMPERATURE, planner::DEFAULT_TEMPERATURE)?,
            },
            locale,
            catalog_path: env::var(env_vars::RECIPE_CATALOG_PATH)
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            cors_allowed_origins: env_var_or(
                env_vars::CORS_ALLOWED_ORIGINS,
                network::DEFAULT_CORS_ORIGINS,
            ),
        })
    }

    /// Socket address string for the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// One-line summary for startup logs, without secrets
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Meal-plan server: bind={} planner={} model={} timeout={}s locale={:?} catalog={}",
            self.bind_address(),
            if self.planner.is_enabled() { "gemini" } else { "disabled" },
            self.planner.model,
            self.planner.timeout.as_secs(),
            self.locale,
            self.catalog_path
                .as_ref()
                .map_or_else(|| "none".to_owned(), |p| p.display().to_string()),
        )
    }
}

/// Get an environment variable or a default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, using `default` when it is unset
fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {key} value: {e}"))),
        Err(_) => Ok(default),
    }
}

/// Parse comma-separated CORS origins
#[must_use]
pub fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
