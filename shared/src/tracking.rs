//! Food log totals, personal library meals, streaks and milestones

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Logging-streak lengths (days) that count as a milestone
pub const STREAK_MILESTONES_DAYS: [u32; 5] = [7, 30, 90, 182, 365];

/// Total logged meals that count as a milestone
pub const TOTAL_LOGGED_MEALS_MILESTONES: [u32; 4] = [30, 100, 250, 500];

/// Calendar days after profile creation that complete the first week
pub const FIRST_WEEK_DAYS: i64 = 7;

/// Weight-loss milestones are awarded every this many pounds
pub const WEIGHT_MILESTONE_INCREMENT: f64 = 5.0;

// ============================================================================
// Food Log
// ============================================================================

/// A logged food entry; `timestamp` is milliseconds since the Unix epoch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,
    #[validate(length(min = 1, message = "Food name cannot be empty"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "Calories cannot be negative"))]
    pub calories: f64,
    #[validate(range(min = 0.0, message = "Protein cannot be negative"))]
    pub protein: Option<f64>,
    #[validate(range(min = 0.0, message = "Carbs cannot be negative"))]
    pub carbs: Option<f64>,
    #[validate(range(min = 0.0, message = "Fat cannot be negative"))]
    pub fat: Option<f64>,
    pub serving_size: Option<String>,
    pub timestamp: i64,
}

/// Summed nutrition for a set of food entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub entries: usize,
}

impl DailyTotals {
    /// Sum entries; a missing macro counts as zero
    pub fn from_items(items: &[FoodItem]) -> Self {
        items.iter().fold(Self::default(), |acc, item| Self {
            calories: acc.calories + item.calories,
            protein: acc.protein + item.protein.unwrap_or(0.0),
            carbs: acc.carbs + item.carbs.unwrap_or(0.0),
            fat: acc.fat + item.fat.unwrap_or(0.0),
            entries: acc.entries + 1,
        })
    }
}

/// Calories left against a target; absent when no target is set
pub fn remaining_calories(target_calories: Option<f64>, consumed: f64) -> Option<f64> {
    target_calories.map(|target| target - consumed)
}

/// How far intake has progressed toward the daily target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalorieProgress {
    /// No target or nothing logged yet
    NotStarted,
    /// At most 60% of target
    Started,
    /// Above 60%, at most 90%
    Approaching,
    /// Above 90%, at most 110%
    OnTarget,
    /// Above 110%
    Over,
}

impl CalorieProgress {
    pub fn from_intake(target_calories: Option<f64>, consumed: f64) -> Self {
        let target = match target_calories {
            Some(t) if t > 0.0 => t,
            _ => return CalorieProgress::NotStarted,
        };
        if consumed == 0.0 {
            return CalorieProgress::NotStarted;
        }

        let ratio = consumed / target;
        if ratio > 1.1 {
            CalorieProgress::Over
        } else if ratio > 0.9 {
            CalorieProgress::OnTarget
        } else if ratio > 0.6 {
            CalorieProgress::Approaching
        } else {
            CalorieProgress::Started
        }
    }
}

// ============================================================================
// Personal Library
// ============================================================================

/// A reusable food from the user's library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyFoodItem {
    pub id: String,
    pub name: String,
    pub calories: f64,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub serving_size: Option<String>,
}

/// A reference to a library food with a serving count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealIngredient {
    pub food_id: String,
    pub servings: f64,
}

/// A saved meal built from library foods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyMeal {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub ingredients: Vec<MealIngredient>,
}

/// Nutrition totals for a saved meal
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealTotals {
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
}

/// Sum a meal's ingredients against the library; unknown foods are skipped
pub fn meal_totals(meal: &MyMeal, library: &[MyFoodItem]) -> MealTotals {
    meal.ingredients
        .iter()
        .filter_map(|ing| {
            library
                .iter()
                .find(|food| food.id == ing.food_id)
                .map(|food| (food, ing.servings))
        })
        .fold(MealTotals::default(), |acc, (food, servings)| MealTotals {
            total_calories: acc.total_calories + food.calories * servings,
            total_protein: acc.total_protein + food.protein.unwrap_or(0.0) * servings,
            total_carbs: acc.total_carbs + food.carbs.unwrap_or(0.0) * servings,
            total_fat: acc.total_fat + food.fat.unwrap_or(0.0) * servings,
        })
}

// ============================================================================
// Streaks and Milestones
// ============================================================================

/// Consecutive-day food logging streak
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakData {
    pub food_log_streak: u32,
    pub last_food_log_date: Option<NaiveDate>,
}

impl StreakData {
    /// Record that food was logged on `today`
    ///
    /// Returns true when the updated streak hits one of [`STREAK_MILESTONES_DAYS`].
    /// Logging again on the same day changes nothing.
    pub fn record_log(&mut self, today: NaiveDate) -> bool {
        if self.last_food_log_date == Some(today) {
            return false;
        }

        let yesterday = today.checked_sub_days(Days::new(1));
        self.food_log_streak = match self.last_food_log_date {
            Some(last) if Some(last) == yesterday => self.food_log_streak + 1,
            _ => 1,
        };
        self.last_food_log_date = Some(today);

        STREAK_MILESTONES_DAYS.contains(&self.food_log_streak)
    }
}

/// Logged-meal milestones reached by `total_meals` that have not been awarded yet
///
/// Every threshold at or below the total counts, so a count that jumps past a
/// threshold still earns it.
pub fn new_logged_meals_milestones(total_meals: u32, already_awarded: &[u32]) -> Vec<u32> {
    TOTAL_LOGGED_MEALS_MILESTONES
        .iter()
        .copied()
        .filter(|&threshold| total_meals >= threshold && !already_awarded.contains(&threshold))
        .collect()
}

/// Whether at least a week of calendar days has passed since the profile was created
pub fn is_first_week_completed(profile_creation_date: Option<DateTime<Utc>>, today: NaiveDate) -> bool {
    profile_creation_date.is_some_and(|created| {
        today.signed_duration_since(created.date_naive()).num_days() >= FIRST_WEEK_DAYS
    })
}

/// Milestone earned by a new weigh-in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum WeightMilestone {
    /// Current weight crossed the target in the intended direction
    TargetReached,
    /// Total pounds lost, a multiple of [`WEIGHT_MILESTONE_INCREMENT`]
    LostPounds(f64),
}

/// Check a weigh-in against the goal, all weights in pounds
///
/// `last_loss_milestone` is the largest loss milestone already awarded (0 if none).
pub fn check_weight_milestone(
    start_weight: f64,
    current_weight: f64,
    target_weight: f64,
    last_loss_milestone: f64,
) -> Option<WeightMilestone> {
    let losing = start_weight > target_weight;
    let gaining = start_weight < target_weight;

    if (losing && current_weight <= target_weight) || (gaining && current_weight >= target_weight) {
        return Some(WeightMilestone::TargetReached);
    }

    let lost = start_weight - current_weight;
    if losing && lost > 0.0 {
        let milestone = (lost / WEIGHT_MILESTONE_INCREMENT).floor() * WEIGHT_MILESTONE_INCREMENT;
        if milestone > last_loss_milestone && milestone > 0.0 {
            return Some(WeightMilestone::LostPounds(milestone));
        }
    }
    None
}
