// ABOUTME: Meal-plan route handler for AI-assisted weekly plan generation
// ABOUTME: Translates POST /api/ai/meal-plan bodies into MealPlanService calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use mealplan_core::errors::{AppError, ErrorCode};
use mealplan_core::models::{PlanRequest, UserContext};

use crate::constants::routes::{MEAL_PLAN, USER_ID_HEADER};
use crate::services::MealPlanService;

/// Meal-plan routes handler
pub struct MealPlanRoutes;

impl MealPlanRoutes {
    /// Create the meal-plan routes
    pub fn routes(service: Arc<MealPlanService>) -> Router {
        Router::new()
            .route(MEAL_PLAN, post(Self::handle_generate))
            .with_state(service)
    }

    /// Caller identity forwarded by the upstream gateway, if any
    fn user_context(headers: &HeaderMap) -> UserContext {
        headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map_or_else(UserContext::anonymous, UserContext::for_user)
    }

    /// Handle POST /api/ai/meal-plan - Generate a weekly plan
    async fn handle_generate(
        State(service): State<Arc<MealPlanService>>,
        headers: HeaderMap,
        body: Result<Json<PlanRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(|rejection| {
            AppError::new(ErrorCode::InvalidFormat, rejection.body_text())
        })?;
        let user = Self::user_context(&headers);

        let plan = service.generate(&user, &request).await?;

        Ok((StatusCode::OK, Json(plan)).into_response())
    }
}
