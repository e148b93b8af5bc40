// ABOUTME: Display vocabulary for plans: slot labels, week days, and canned messages
// ABOUTME: English by default, Vietnamese for deployments serving Vietnamese clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::str::FromStr;

use mealplan_core::models::MealSlot;
use serde::{Deserialize, Serialize};

/// Language the planner is asked to answer in and the fallback writes in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanLocale {
    /// English labels ("Breakfast", "Monday")
    #[default]
    English,
    /// Vietnamese labels ("Bữa Sáng", "Thứ Hai")
    Vietnamese,
}

const ENGLISH_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const VIETNAMESE_DAYS: [&str; 7] = [
    "Thứ Hai",
    "Thứ Ba",
    "Thứ Tư",
    "Thứ Năm",
    "Thứ Sáu",
    "Thứ Bảy",
    "Chủ Nhật",
];

impl PlanLocale {
    /// Label of a meal slot
    #[must_use]
    pub const fn slot_label(self, slot: MealSlot) -> &'static str {
        match (self, slot) {
            (Self::English, _) => slot.as_str(),
            (Self::Vietnamese, MealSlot::Breakfast) => "Bữa Sáng",
            (Self::Vietnamese, MealSlot::Lunch) => "Bữa Trưa",
            (Self::Vietnamese, MealSlot::Dinner) => "Bữa Tối",
            (Self::Vietnamese, MealSlot::Snack) => "Bữa Phụ",
        }
    }

    /// Week-day labels, Monday first
    #[must_use]
    pub const fn week_days(self) -> &'static [&'static str; 7] {
        match self {
            Self::English => &ENGLISH_DAYS,
            Self::Vietnamese => &VIETNAMESE_DAYS,
        }
    }

    /// Name of the language, used in planner instructions
    #[must_use]
    pub const fn language_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Vietnamese => "Vietnamese",
        }
    }

    /// Rationale attached to every fallback slot
    #[must_use]
    pub const fn fallback_reason(self) -> &'static str {
        match self {
            Self::English => "Suggested alternative",
            Self::Vietnamese => "Gợi ý thay thế",
        }
    }

    /// Analysis text of a fallback plan
    #[must_use]
    pub const fn fallback_analysis(self) -> &'static str {
        match self {
            Self::English => {
                "The AI planner is busy right now. Here is a rotating menu built from the meals you selected."
            }
            Self::Vietnamese => {
                "Hệ thống AI đang bận. Đây là thực đơn ngẫu nhiên dựa trên lịch ăn bạn chọn."
            }
        }
    }

    /// Analysis text when no recipe survived filtering
    #[must_use]
    pub const fn empty_pool_analysis(self) -> &'static str {
        match self {
            Self::English => {
                "No recipes in the catalog are safe for your allergies and dislikes, so no meals could be planned."
            }
            Self::Vietnamese => {
                "Không có món ăn nào phù hợp với dị ứng và sở thích của bạn, nên chưa thể lập thực đơn."
            }
        }
    }

    /// Name shown when the planner referenced an unknown recipe id
    #[must_use]
    pub const fn unresolved_name(self) -> &'static str {
        match self {
            Self::English => "Suggested dish",
            Self::Vietnamese => "Gợi ý món ăn",
        }
    }

    /// Rationale shown when the planner referenced an unknown recipe id
    #[must_use]
    pub const fn unresolved_reason(self) -> &'static str {
        match self {
            Self::English => "Recipe data could not be found.",
            Self::Vietnamese => "Không tìm thấy dữ liệu.",
        }
    }
}

impl FromStr for PlanLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "vi" | "vn" | "vietnamese" => Ok(Self::Vietnamese),
            other => Err(format!("unsupported plan locale: {other}")),
        }
    }
}
