// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and readiness endpoints reporting catalog and planner status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! `/health` answers as long as the process is up. `/ready` also reports
//! whether recipes are loaded and whether the AI planner is enabled; a
//! server without a planner is still ready because it serves fallback plans.

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use crate::constants::service_names;

/// Static facts reported by the readiness endpoint
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadinessInfo {
    /// Recipes in the catalog
    pub catalog_size: usize,
    /// Whether a planner API key is configured
    pub planner_enabled: bool,
}

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(info: ReadinessInfo) -> Router {
        Router::new()
            .route("/health", get(Self::health_handler))
            .route("/ready", get(Self::ready_handler))
            .with_state(info)
    }

    async fn health_handler() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": service_names::MEAL_PLAN_SERVER,
            "timestamp": Utc::now().to_rfc3339()
        }))
    }

    async fn ready_handler(State(info): State<ReadinessInfo>) -> Json<Value> {
        Json(json!({
            "status": "ready",
            "catalog_size": info.catalog_size,
            "planner": if info.planner_enabled { "gemini" } else { "fallback_only" },
            "timestamp": Utc::now().to_rfc3339()
        }))
    }
}
