// ABOUTME: Server-level constants and environment defaults for the meal-plan API
// ABOUTME: Ports, planner defaults, CORS origins, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Defaults applied by [`ServerConfig::from_env`](crate::config::ServerConfig::from_env)
//! when a variable is unset. Pipeline tuning constants live in
//! `mealplan_core::constants`.

pub use mealplan_core::constants::service_names;

/// Listener defaults
pub mod network {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
    /// Default bind address
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    /// Origins of the development web clients
    pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";
    /// Largest accepted request body
    pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;
}

/// External planner defaults
pub mod planner {
    /// Default Gemini model
    pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
    /// Base URL of the Gemini API
    pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
    /// Caller-side timeout for one planner call
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Generation temperature
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;
    /// Connect timeout of the HTTP client
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// HTTP routes
pub mod routes {
    /// Meal-plan generation endpoint
    pub const MEAL_PLAN: &str = "/api/ai/meal-plan";
    /// Header carrying the authenticated user id, set by the upstream gateway
    pub const USER_ID_HEADER: &str = "x-user-id";
}

/// Environment variable names
pub mod env_vars {
    /// Listener port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Gemini API key; the planner is disabled when unset
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Gemini model id
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
    /// Gemini base URL
    pub const GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
    /// Planner timeout in seconds
    pub const PLANNER_TIMEOUT_SECS: &str = "PLANNER_TIMEOUT_SECS";
    /// Planner temperature
    pub const PLANNER_TEMPERATURE: &str = "PLANNER_TEMPERATURE";
    /// Display vocabulary (`en` or `vi`)
    pub const MEAL_PLAN_LOCALE: &str = "MEAL_PLAN_LOCALE";
    /// JSON recipe catalog file
    pub const RECIPE_CATALOG_PATH: &str = "RECIPE_CATALOG_PATH";
    /// Comma-separated CORS origins, `*` for any
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}
