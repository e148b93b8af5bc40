// ABOUTME: Cuisine preference matching with umbrella cuisine groups
// ABOUTME: Treats "any" as wildcard and lets "Asian" cover the East/Southeast Asian cuisines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Preference values meaning "no cuisine preference"
const ANY_CUISINE: &[&str] = &["", "any", "all", "tất cả", "bất kỳ"];

/// Umbrella preference → member cuisines (all lowercase)
const CUISINE_GROUPS: &[(&str, &[&str])] = &[
    (
        "asian",
        &[
            "asian",
            "châu á",
            "vietnamese",
            "việt nam",
            "thai",
            "thái lan",
            "chinese",
            "trung quốc",
            "japanese",
            "nhật bản",
            "korean",
            "hàn quốc",
            "malaysian",
            "indonesian",
            "filipino",
        ],
    ),
    (
        "european",
        &[
            "european",
            "châu âu",
            "italian",
            "ý",
            "french",
            "pháp",
            "spanish",
            "greek",
        ],
    ),
];

/// Whether a preference means "any cuisine"
#[must_use]
pub fn is_any(preference: &str) -> bool {
    let normalized = preference.trim().to_lowercase();
    ANY_CUISINE.contains(&normalized.as_str())
}

/// Whether a recipe cuisine satisfies a preference
#[must_use]
pub fn cuisine_matches(preference: &str, recipe_cuisine: &str) -> bool {
    if is_any(preference) {
        return true;
    }
    let preference = preference.trim().to_lowercase();
    let cuisine = recipe_cuisine.trim().to_lowercase();
    if preference == cuisine {
        return true;
    }
    CUISINE_GROUPS
        .iter()
        .any(|(umbrella, members)| *umbrella == preference && members.contains(&cuisine.as_str()))
}
