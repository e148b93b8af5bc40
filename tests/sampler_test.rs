// ABOUTME: Integration tests for the buffet pool sampler
// ABOUTME: Covers the pool bound, identity uniqueness, category quotas, top-up, and seeding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::collections::HashSet;

use helpers::{recipe, recipes_for, refs, sample_recipes};
use mealplan_core::constants::pool::{BREAKFAST_QUOTA, MAX_POOL_SIZE};
use mealplan_core::models::{MealSlot, RecipeRecord};
use mealplan_intelligence::sampler::sample;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn ids<'a>(pool: &[&'a RecipeRecord]) -> Vec<&'a str> {
    pool.iter().map(|r| r.id.as_str()).collect()
}

fn large_catalog() -> Vec<RecipeRecord> {
    let mut catalog = recipes_for("bf", "Breakfast", 25);
    catalog.extend(recipes_for("ln", "Lunch", 25));
    catalog.extend(recipes_for("dn", "Dinner", 25));
    catalog.extend(recipes_for("sn", "Snack", 10));
    catalog
}

#[test]
fn test_pool_never_exceeds_bound() {
    let catalog = large_catalog();
    let candidates = refs(&catalog);

    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let pool = sample(&candidates, &MealSlot::DEFAULT_SCHEDULE, &mut rng);
        assert_eq!(pool.len(), MAX_POOL_SIZE);
    }
}

#[test]
fn test_pool_has_unique_identities() {
    // Same recipe tagged for breakfast and dinner must not appear twice
    let mut catalog: Vec<RecipeRecord> = (0..15)
        .map(|i| recipe(&format!("both-{i}"), &["Breakfast", "Dinner"]))
        .collect();
    catalog.extend(recipes_for("dn", "Dinner", 5));
    let candidates = refs(&catalog);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let pool = sample(&candidates, &MealSlot::DEFAULT_SCHEDULE, &mut rng);

    let unique: HashSet<&str> = ids(&pool).into_iter().collect();
    assert_eq!(unique.len(), pool.len());
    assert_eq!(pool.len(), catalog.len());
}

#[test]
fn test_breakfast_quota_with_breakfast_slot() {
    let catalog = large_catalog();
    let candidates = refs(&catalog);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let pool = sample(&candidates, &MealSlot::DEFAULT_SCHEDULE, &mut rng);

    let breakfast = pool.iter().filter(|r| r.id.starts_with("bf-")).count();
    let main = pool
        .iter()
        .filter(|r| r.id.starts_with("ln-") || r.id.starts_with("dn-"))
        .count();
    assert_eq!(breakfast, BREAKFAST_QUOTA);
    assert_eq!(main, MAX_POOL_SIZE - BREAKFAST_QUOTA);
}

#[test]
fn test_no_breakfast_slot_draws_only_mains() {
    let catalog = large_catalog();
    let candidates = refs(&catalog);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let pool = sample(&candidates, &[MealSlot::Lunch, MealSlot::Dinner], &mut rng);

    assert_eq!(pool.len(), MAX_POOL_SIZE);
    assert!(pool
        .iter()
        .all(|r| r.id.starts_with("ln-") || r.id.starts_with("dn-")));
}

#[test]
fn test_small_pool_is_topped_up_from_candidates() {
    // Snack-only recipes belong to neither group and arrive through the top-up
    let mut catalog = recipes_for("bf", "Breakfast", 4);
    catalog.extend(recipes_for("dn", "Dinner", 4));
    catalog.extend(recipes_for("sn", "Snack", 6));
    let candidates = refs(&catalog);
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let pool = sample(&candidates, &MealSlot::DEFAULT_SCHEDULE, &mut rng);

    assert_eq!(pool.len(), catalog.len());
    assert_eq!(pool.iter().filter(|r| r.id.starts_with("sn-")).count(), 6);
    // Top-up follows candidate order after the quota draws
    assert_eq!(ids(&pool[8..]), ids(&candidates[8..]));
}

#[test]
fn test_same_seed_same_pool() {
    let catalog = sample_recipes();
    let candidates = refs(&catalog);

    let first = sample(
        &candidates,
        &MealSlot::DEFAULT_SCHEDULE,
        &mut ChaCha8Rng::seed_from_u64(99),
    );
    let second = sample(
        &candidates,
        &MealSlot::DEFAULT_SCHEDULE,
        &mut ChaCha8Rng::seed_from_u64(99),
    );

    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn test_candidates_are_not_reordered() {
    let catalog = large_catalog();
    let candidates = refs(&catalog);
    let before = ids(&candidates);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let _ = sample(&candidates, &MealSlot::DEFAULT_SCHEDULE, &mut rng);

    assert_eq!(ids(&candidates), before);
}

#[test]
fn test_empty_candidates_give_empty_pool() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert!(sample(&[], &MealSlot::DEFAULT_SCHEDULE, &mut rng).is_empty());
}
