// ABOUTME: Route module organization for the meal-plan server HTTP endpoints
// ABOUTME: Assembles domain routers and applies request id, tracing, body limit, and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the meal-plan server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Health check and readiness routes
pub mod health;
/// Meal-plan generation routes
pub mod meal_plan;

pub use health::{HealthRoutes, ReadinessInfo};
pub use meal_plan::MealPlanRoutes;

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use http::header::HeaderName;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::constants::network::MAX_REQUEST_BODY_BYTES;
use crate::middleware::{create_request_span, setup_cors, MakeRequestIdentifier, REQUEST_ID_HEADER};
use crate::services::MealPlanService;

/// Build the complete application router
pub fn build_router(
    config: &ServerConfig,
    service: Arc<MealPlanService>,
    readiness: ReadinessInfo,
) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestIdentifier))
        .layer(TraceLayer::new_for_http().make_span_with(create_request_span))
        .layer(PropagateRequestIdLayer::new(request_id));

    Router::new()
        .merge(HealthRoutes::routes(readiness))
        .merge(MealPlanRoutes::routes(service))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(middleware)
        .layer(setup_cors(config))
}
