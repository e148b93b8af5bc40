// ABOUTME: Soft preference filtering with a staged relaxation cascade
// ABOUTME: Strict (tools + cuisine) → cuisine relaxed → tools relaxed until enough candidates remain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Relaxation Cascade
//!
//! Each level admits a superset of the previous one, and every level filters
//! the *safe set* afresh, so a retry never depends on a narrower earlier
//! result. When even the last level stays below the threshold the small safe
//! set is returned as-is.

use std::fmt;

use mealplan_core::constants::relaxation::MIN_VIABLE_CANDIDATES;
use mealplan_core::models::RecipeRecord;
use tracing::debug;

use crate::cuisine::cuisine_matches;
use crate::tools::OwnedTools;

/// Which filter combination produced the candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RelaxationLevel {
    /// Tools and cuisine both enforced
    Strict,
    /// Only tools enforced
    CuisineRelaxed,
    /// Neither soft filter enforced
    ToolsRelaxed,
}

impl RelaxationLevel {
    /// Label for structured logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::CuisineRelaxed => "cuisine_relaxed",
            Self::ToolsRelaxed => "tools_relaxed",
        }
    }
}

impl fmt::Display for RelaxationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate set chosen by the cascade
#[derive(Debug, Clone)]
pub struct Relaxed<'a> {
    /// Surviving candidates
    pub candidates: Vec<&'a RecipeRecord>,
    /// Level that produced them
    pub level: RelaxationLevel,
}

/// Soft preferences applied by the cascade
#[derive(Debug, Clone)]
pub struct SoftPreferences {
    owned_tools: OwnedTools,
    preferred_cuisine: String,
}

impl SoftPreferences {
    /// Normalize the user's tools and keep the cuisine preference
    #[must_use]
    pub fn new(owned_tools: &[String], preferred_cuisine: &str) -> Self {
        Self {
            owned_tools: OwnedTools::new(owned_tools),
            preferred_cuisine: preferred_cuisine.to_owned(),
        }
    }

    /// Recipe requires nothing the user lacks
    #[must_use]
    pub fn tools_satisfied(&self, recipe: &RecipeRecord) -> bool {
        self.owned_tools.covers_all(&recipe.required_tools)
    }

    /// Recipe cuisine fits the preference
    #[must_use]
    pub fn cuisine_satisfied(&self, recipe: &RecipeRecord) -> bool {
        cuisine_matches(&self.preferred_cuisine, &recipe.cuisine)
    }

    /// Candidates admitted at a given level
    #[must_use]
    pub fn admit<'a>(&self, safe: &[&'a RecipeRecord], level: RelaxationLevel) -> Vec<&'a RecipeRecord> {
        match level {
            RelaxationLevel::Strict => safe
                .iter()
                .copied()
                .filter(|r| self.tools_satisfied(r) && self.cuisine_satisfied(r))
                .collect(),
            RelaxationLevel::CuisineRelaxed => safe
                .iter()
                .copied()
                .filter(|r| self.tools_satisfied(r))
                .collect(),
            RelaxationLevel::ToolsRelaxed => safe.to_vec(),
        }
    }
}

/// Run the cascade over a safe set
#[must_use]
pub fn relax<'a>(
    safe: &[&'a RecipeRecord],
    owned_tools: &[String],
    preferred_cuisine: &str,
) -> Relaxed<'a> {
    let preferences = SoftPreferences::new(owned_tools, preferred_cuisine);

    for level in [RelaxationLevel::Strict, RelaxationLevel::CuisineRelaxed] {
        let candidates = preferences.admit(safe, level);
        if candidates.len() >= MIN_VIABLE_CANDIDATES {
            debug!(level = %level, candidates = candidates.len(), "Relaxation level satisfied");
            return Relaxed { candidates, level };
        }
        debug!(
            level = %level,
            candidates = candidates.len(),
            threshold = MIN_VIABLE_CANDIDATES,
            "Too few candidates, relaxing"
        );
    }

    Relaxed {
        candidates: safe.to_vec(),
        level: RelaxationLevel::ToolsRelaxed,
    }
}
