// ABOUTME: Buffet pool sampler drawing a bounded, category-balanced recipe subset
// ABOUTME: Shuffles private copies with an injected RNG and tops up small pools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Buffet Pool
//!
//! The planner only ever sees a pool of at most
//! [`MAX_POOL_SIZE`](mealplan_core::constants::pool::MAX_POOL_SIZE) recipes.
//! Breakfast and lunch/dinner recipes are drawn from separate shuffled groups
//! so that neither crowds out the other.

use std::collections::HashSet;

use mealplan_core::constants::pool::{
    BREAKFAST_QUOTA, MAIN_QUOTA_WITHOUT_BREAKFAST, MAIN_QUOTA_WITH_BREAKFAST, MAX_POOL_SIZE,
    TOP_UP_THRESHOLD,
};
use mealplan_core::models::{MealSlot, RecipeRecord};
use rand::seq::SliceRandom;
use rand::Rng;

/// Pool accumulator enforcing identity uniqueness and the size bound
struct PoolBuilder<'a> {
    pool: Vec<&'a RecipeRecord>,
    seen: HashSet<&'a str>,
}

impl<'a> PoolBuilder<'a> {
    fn new() -> Self {
        Self {
            pool: Vec::with_capacity(MAX_POOL_SIZE),
            seen: HashSet::new(),
        }
    }

    /// Add up to `quota` unseen recipes from `source`, never exceeding `limit` total
    fn take_from(&mut self, source: &[&'a RecipeRecord], quota: usize, limit: usize) {
        let mut taken = 0;
        for &recipe in source {
            if taken >= quota || self.pool.len() >= limit {
                break;
            }
            if self.seen.insert(recipe.id.as_str()) {
                self.pool.push(recipe);
                taken += 1;
            }
        }
    }
}

/// Draw the planner pool from the relaxed candidates.
///
/// `rng` is injected so callers can seed it; the candidate slice itself is
/// never reordered.
#[must_use]
pub fn sample<'a, R>(candidates: &[&'a RecipeRecord], slots: &[MealSlot], rng: &mut R) -> Vec<&'a RecipeRecord>
where
    R: Rng + ?Sized,
{
    let mut breakfast: Vec<&RecipeRecord> = candidates
        .iter()
        .copied()
        .filter(|r| r.is_tagged_for(MealSlot::Breakfast))
        .collect();
    let mut main: Vec<&RecipeRecord> = candidates
        .iter()
        .copied()
        .filter(|r| r.is_tagged_for(MealSlot::Lunch) || r.is_tagged_for(MealSlot::Dinner))
        .collect();

    breakfast.shuffle(rng);
    main.shuffle(rng);

    let mut builder = PoolBuilder::new();
    if slots.contains(&MealSlot::Breakfast) {
        builder.take_from(&breakfast, BREAKFAST_QUOTA, MAX_POOL_SIZE);
        builder.take_from(&main, MAIN_QUOTA_WITH_BREAKFAST, MAX_POOL_SIZE);
    } else {
        builder.take_from(&main, MAIN_QUOTA_WITHOUT_BREAKFAST, MAX_POOL_SIZE);
    }

    if builder.pool.len() < TOP_UP_THRESHOLD {
        builder.take_from(candidates, MAX_POOL_SIZE, MAX_POOL_SIZE);
    }

    builder.pool
}
