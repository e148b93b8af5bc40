// ABOUTME: Pipeline constants shared by the planner stages and the server
// ABOUTME: Pool quotas, relaxation threshold, plan length, and placeholder assets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Candidate-pool limits used by the buffet sampler
pub mod pool {
    /// Maximum number of recipes sent to the planner
    pub const MAX_POOL_SIZE: usize = 30;
    /// Below this size the pool is topped up from the full candidate set
    pub const TOP_UP_THRESHOLD: usize = 20;
    /// Breakfast quota when the schedule contains a breakfast slot
    pub const BREAKFAST_QUOTA: usize = 10;
    /// Lunch/dinner quota when the schedule contains a breakfast slot
    pub const MAIN_QUOTA_WITH_BREAKFAST: usize = 20;
    /// Lunch/dinner quota when there is no breakfast slot
    pub const MAIN_QUOTA_WITHOUT_BREAKFAST: usize = 30;
}

/// Relaxation cascade tuning
pub mod relaxation {
    /// Minimum candidates a filter level must keep before the next level is tried
    pub const MIN_VIABLE_CANDIDATES: usize = 5;
}

/// Plan shape
pub mod plan {
    /// Number of days in every generated plan
    pub const DAYS_PER_PLAN: usize = 7;
}

/// Static assets substituted for missing data
pub mod placeholders {
    /// Image used when a recipe has no main image
    pub const RECIPE_IMAGE_URL: &str =
        "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=600";
}

/// Service identity used in logs and health responses
pub mod service_names {
    /// Default service name
    pub const MEAL_PLAN_SERVER: &str = "mealplan-server";
}
