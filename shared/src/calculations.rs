//! Nutrition and body metrics calculations
//!
//! Derives BMI, BMR, TDEE, a daily calorie target and a default macro split
//! from a [`UserProfile`].
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: every calculation is a side-effect-free function of its inputs
//! 2. **Absence Propagates**: missing or non-positive input yields `None`, never an error
//! 3. **Named Policy**: multipliers, thresholds and ratios live in constants, not in formulas

use crate::profile::{ActivityLevel, CalculatedMetrics, MacroTargets, Sex, UserProfile};
use crate::units::{inches_to_cm, inches_to_m, pounds_to_kg, total_inches, Height};
use serde::{Deserialize, Serialize};

// ============================================================================
// Policy Constants
// ============================================================================

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

/// Calorie adjustment policy applied to TDEE for a weight-change goal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaloriePolicy {
    /// A target this many kg below current (or further) is a loss goal
    pub loss_threshold_kg: f64,
    /// A target this many kg above current (or further) is a gain goal
    pub gain_threshold_kg: f64,
    /// Adjustment for a loss goal (~1 lb/week)
    pub deficit_kcal: f64,
    /// Adjustment for a gain goal (~0.5 lb/week)
    pub surplus_kcal: f64,
}

impl CaloriePolicy {
    pub const DEFAULT: CaloriePolicy = CaloriePolicy {
        loss_threshold_kg: -0.2,
        gain_threshold_kg: 0.1,
        deficit_kcal: -500.0,
        surplus_kcal: 300.0,
    };

    /// Calorie adjustment for a target-minus-current weight difference in kg
    pub fn adjustment(&self, diff_kg: f64) -> f64 {
        if diff_kg < self.loss_threshold_kg {
            self.deficit_kcal
        } else if diff_kg > self.gain_threshold_kg {
            self.surplus_kcal
        } else {
            0.0
        }
    }
}

impl Default for CaloriePolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Energy share of each macro and the fiber heuristic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein_pct: f64,
    pub carbs_pct: f64,
    pub fat_pct: f64,
    /// Grams of fiber per 1000 kcal
    pub fiber_g_per_1000_kcal: f64,
}

impl MacroSplit {
    pub const DEFAULT: MacroSplit = MacroSplit {
        protein_pct: 0.30,
        carbs_pct: 0.40,
        fat_pct: 0.30,
        fiber_g_per_1000_kcal: 14.0,
    };
}

impl Default for MacroSplit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Energy density of protein, kcal per gram
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Energy density of carbohydrate, kcal per gram
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// Energy density of fat, kcal per gram
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ============================================================================
// BMI
// ============================================================================

/// Calculate BMI from height and weight in pounds
///
/// Formula: BMI = weight(kg) / height(m)², rounded to one decimal place
pub fn calculate_bmi(height: Option<&Height>, weight_lbs: Option<f64>) -> Option<f64> {
    let height_in = positive(total_inches(height))?;
    let weight_lbs = positive(weight_lbs)?;

    let height_m = inches_to_m(height_in);
    let weight_kg = pounds_to_kg(weight_lbs);
    Some(round_to_tenth(weight_kg / (height_m * height_m)))
}

/// BMI category as shown next to the metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 24.9 {
        BmiCategory::Normal
    } else if bmi < 29.9 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

// ============================================================================
// BMR and TDEE
// ============================================================================

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr(
    age: Option<i32>,
    sex: Option<Sex>,
    height: Option<&Height>,
    weight_lbs: Option<f64>,
) -> Option<f64> {
    let age = age.filter(|&a| a > 0)?;
    let sex = sex?;
    let height_in = positive(total_inches(height))?;
    let weight_lbs = positive(weight_lbs)?;

    let height_cm = inches_to_cm(height_in);
    let weight_kg = pounds_to_kg(weight_lbs);
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    let bmr = match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    };
    Some(bmr.round())
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn calculate_tdee(bmr: Option<f64>, activity_level: Option<ActivityLevel>) -> Option<f64> {
    let bmr = nonzero(bmr)?;
    let level = activity_level?;
    Some((bmr * level.multiplier()).round())
}

// ============================================================================
// Calorie Target
// ============================================================================

/// Calculate the daily calorie target for a weight goal using [`CaloriePolicy::DEFAULT`]
pub fn calculate_target_calories(
    tdee: Option<f64>,
    current_weight_lbs: Option<f64>,
    target_weight_lbs: Option<f64>,
) -> Option<f64> {
    calculate_target_calories_with(
        &CaloriePolicy::DEFAULT,
        tdee,
        current_weight_lbs,
        target_weight_lbs,
    )
}

/// Calculate the daily calorie target for a weight goal under a given policy
///
/// Only a missing weight makes the result absent; a weight of zero is still compared.
pub fn calculate_target_calories_with(
    policy: &CaloriePolicy,
    tdee: Option<f64>,
    current_weight_lbs: Option<f64>,
    target_weight_lbs: Option<f64>,
) -> Option<f64> {
    let tdee = nonzero(tdee)?;
    let current_kg = pounds_to_kg(current_weight_lbs?);
    let target_kg = pounds_to_kg(target_weight_lbs?);

    let adjustment = policy.adjustment(target_kg - current_kg);
    Some((tdee + adjustment).round())
}

// ============================================================================
// Macro Split
// ============================================================================

/// Calculate default macro targets for a calorie goal using [`MacroSplit::DEFAULT`]
pub fn calculate_default_macro_targets(target_calories: Option<f64>) -> MacroTargets {
    calculate_macro_targets_with(&MacroSplit::DEFAULT, target_calories)
}

/// Calculate macro targets for a calorie goal under a given split
///
/// A missing or non-positive goal yields [`MacroTargets::FALLBACK`]. Fiber is derived
/// from total calories and does not take a share of the energy budget.
pub fn calculate_macro_targets_with(split: &MacroSplit, target_calories: Option<f64>) -> MacroTargets {
    let Some(calories) = positive(target_calories) else {
        return MacroTargets::FALLBACK;
    };

    MacroTargets {
        protein: whole_grams(calories * split.protein_pct / KCAL_PER_G_PROTEIN),
        carbs: whole_grams(calories * split.carbs_pct / KCAL_PER_G_CARBS),
        fat: whole_grams(calories * split.fat_pct / KCAL_PER_G_FAT),
        fiber: whole_grams(calories / 1000.0 * split.fiber_g_per_1000_kcal),
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Calculate every metric for a profile
pub fn calculate_all_metrics(profile: &UserProfile) -> CalculatedMetrics {
    let height = profile.height.as_ref();
    let bmi = calculate_bmi(height, profile.weight);
    let bmr = calculate_bmr(profile.age, profile.sex, height, profile.weight);
    let tdee = calculate_tdee(bmr, profile.activity_level);
    let target_calories = calculate_target_calories(tdee, profile.weight, profile.target_weight);

    CalculatedMetrics {
        bmi,
        bmr,
        tdee,
        target_calories,
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Energy inputs are absent only when missing, zero or non-finite
fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn whole_grams(grams: f64) -> u32 {
    grams.round().max(0.0) as u32
}
