// ABOUTME: Meal-plan orchestration service running the full recommendation pipeline
// ABOUTME: Filters, relaxes, samples, asks the planner under a timeout, and falls back on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Plan Service
//!
//! One self-contained call chain per request:
//!
//! 1. read the catalog snapshot
//! 2. safety filter (never relaxed)
//! 3. relaxation cascade over tools and cuisine
//! 4. buffet pool sampling
//! 5. manifest + planner instructions
//! 6. planner call bounded by the configured timeout
//! 7. rehydration, or the rotating fallback on any planner failure
//!
//! Planner failures never reach the caller. Only catalog failures do.

use std::sync::Arc;
use std::time::{Duration, Instant};

use mealplan_core::errors::{AppResult, PlannerError};
use mealplan_core::models::{GeneratedPlan, MealSlot, PlanRequest, RecipeRecord, UserContext};
use mealplan_intelligence::{
    fallback, manifest, rehydrate, relaxation, safety, sampler, PlanLocale,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::catalog::RecipeCatalog;
use crate::config::ServerConfig;
use crate::constants::planner::DEFAULT_TIMEOUT_SECS;
use crate::llm::PlanComposer;
use crate::logging::{AppLogger, PlanGenerationRecord, PlanPath};

/// Pipeline entry point shared by all request handlers
#[derive(Clone)]
pub struct MealPlanService {
    catalog: Arc<dyn RecipeCatalog>,
    planner: Arc<dyn PlanComposer>,
    locale: PlanLocale,
    planner_timeout: Duration,
    seed: Option<u64>,
}

/// Planner outcome before it is logged
struct PlannerOutcome {
    plan: GeneratedPlan,
    path: PlanPath,
    failure: Option<&'static str>,
}

impl MealPlanService {
    /// Service with English labels and the default planner timeout
    #[must_use]
    pub fn new(catalog: Arc<dyn RecipeCatalog>, planner: Arc<dyn PlanComposer>) -> Self {
        Self {
            catalog,
            planner,
            locale: PlanLocale::default(),
            planner_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            seed: None,
        }
    }

    /// Service configured from the server settings
    #[must_use]
    pub fn from_config(
        config: &ServerConfig,
        catalog: Arc<dyn RecipeCatalog>,
        planner: Arc<dyn PlanComposer>,
    ) -> Self {
        Self::new(catalog, planner)
            .with_locale(config.locale)
            .with_planner_timeout(config.planner.timeout)
    }

    /// Set the display vocabulary
    #[must_use]
    pub const fn with_locale(mut self, locale: PlanLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the caller-side planner timeout
    #[must_use]
    pub const fn with_planner_timeout(mut self, planner_timeout: Duration) -> Self {
        self.planner_timeout = planner_timeout;
        self
    }

    /// Seed pool sampling so every request draws the same pool
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Display vocabulary in use
    #[must_use]
    pub const fn locale(&self) -> PlanLocale {
        self.locale
    }

    fn sampling_rng(&self) -> ChaCha8Rng {
        self.seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64)
    }

    /// Generate a weekly plan for `user`.
    ///
    /// Always returns a plan when the catalog can be read: the planner's
    /// answer when it is usable, the rotating fallback otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error only if the recipe catalog cannot be read
    #[instrument(
        skip(self, request),
        fields(user.id = %user.log_id(), plan.id = %Uuid::new_v4(), planner = self.planner.name())
    )]
    pub async fn generate(
        &self,
        user: &UserContext,
        request: &PlanRequest,
    ) -> AppResult<GeneratedPlan> {
        let started = Instant::now();
        let recipes = self.catalog.all_recipes().await?;
        let slots = request.schedule();

        let safe = safety::filter(
            recipes.iter(),
            &request.allergies,
            &request.disliked_ingredients,
        );
        debug!(catalog = recipes.len(), safe = safe.len(), "Safety filter applied");

        let relaxed = relaxation::relax(&safe, &request.kitchen_tools, &request.preferred_cuisine);
        let pool = sampler::sample(&relaxed.candidates, &slots, &mut self.sampling_rng());
        debug!(
            level = %relaxed.level,
            candidates = relaxed.candidates.len(),
            pool = pool.len(),
            "Buffet pool sampled"
        );

        let outcome = if pool.is_empty() {
            info!("No eligible recipes after filtering, returning empty plan");
            PlannerOutcome {
                plan: fallback::empty_plan(self.locale),
                path: PlanPath::EmptyPool,
                failure: None,
            }
        } else {
            self.plan_with_fallback(&pool, request, &slots).await
        };

        AppLogger::log_plan_generation(&PlanGenerationRecord {
            user_id: user.log_id(),
            catalog_size: recipes.len(),
            safe_count: safe.len(),
            relaxation_level: relaxed.level.as_str(),
            pool_size: pool.len(),
            path: outcome.path,
            planner_failure: outcome.failure,
            meal_count: outcome.plan.meal_count(),
            duration_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        });

        Ok(outcome.plan)
    }

    /// Ask the planner; any failure yields the rotating fallback
    async fn plan_with_fallback(
        &self,
        pool: &[&RecipeRecord],
        request: &PlanRequest,
        slots: &[MealSlot],
    ) -> PlannerOutcome {
        let (manifest, payload) = manifest::build(pool, request, slots, self.locale);

        let attempt = match timeout(self.planner_timeout, self.planner.invoke(&payload)).await {
            Ok(Ok(raw)) => rehydrate::rehydrate(&raw, &manifest, self.locale),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(PlannerError::Timeout {
                seconds: self.planner_timeout.as_secs(),
            }),
        };

        match attempt {
            Ok(plan) => PlannerOutcome {
                plan,
                path: PlanPath::Planner,
                failure: None,
            },
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "Planner unavailable, using fallback plan");
                PlannerOutcome {
                    plan: fallback::generate(pool, slots, self.locale),
                    path: PlanPath::Fallback,
                    failure: Some(e.kind()),
                }
            }
        }
    }
}
