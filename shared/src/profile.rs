//! User profile and derived metric records
//!
//! The profile is owned by the client and stored as JSON, so every field is
//! optional and serialized in camelCase. The calculators only read it.

use crate::units::Height;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Enumerations
// ============================================================================

/// Biological sex, used for the BMR equation only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            _ => Err(format!("Unknown sex: {}", s)),
        }
    }
}

/// Activity level for the TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise/sports 1-3 days/week
    Light,
    /// Moderate exercise/sports 3-5 days/week
    Moderate,
    /// Hard exercise/sports 6-7 days a week
    Active,
    /// Very hard exercise/sports and a physical job
    VeryActive,
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise/sports 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise/sports 3-5 days/week",
            ActivityLevel::Active => "Hard exercise/sports 6-7 days a week",
            ActivityLevel::VeryActive => "Very hard exercise/sports & physical job",
        }
    }

    /// Wire name of the level
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase();
        ActivityLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| format!("Unknown activity level: {}", s))
    }
}

// ============================================================================
// User Profile
// ============================================================================

/// Profile data entered by the user; weights are in pounds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Age in whole years
    pub age: Option<i32>,
    pub sex: Option<Sex>,
    pub height: Option<Height>,
    /// Current weight in pounds
    pub weight: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
    /// Target weight in pounds
    pub target_weight: Option<f64>,
    pub target_date: Option<NaiveDate>,
    /// When the profile first became non-default
    pub profile_creation_date: Option<DateTime<Utc>>,
    /// Weight when the target was first set, in pounds
    pub start_weight: Option<f64>,
}

impl UserProfile {
    /// Whether every field the calculators and goal tracking need has been provided
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Fields that still block a complete profile
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.age.is_none() {
            missing.push("age");
        }
        if self.sex.is_none() {
            missing.push("sex");
        }
        if !self.height.as_ref().is_some_and(Height::has_any_value) {
            missing.push("height");
        }
        if self.weight.is_none() {
            missing.push("weight");
        }
        if self.activity_level.is_none() {
            missing.push("activityLevel");
        }
        if self.target_weight.is_none() {
            missing.push("targetWeight");
        }
        missing
    }
}

// ============================================================================
// Derived Records
// ============================================================================

/// Metrics derived from a profile; any field may be absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedMetrics {
    /// Body-mass index, one decimal place
    pub bmi: Option<f64>,
    /// Basal metabolic rate, kcal/day
    pub bmr: Option<f64>,
    /// Total daily energy expenditure, kcal/day
    pub tdee: Option<f64>,
    /// Daily calorie goal, kcal/day
    pub target_calories: Option<f64>,
}

/// Daily macro targets in whole grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub fiber: u32,
}

impl MacroTargets {
    /// Targets used when no calorie goal is available
    pub const FALLBACK: MacroTargets = MacroTargets {
        protein: 50,
        carbs: 130,
        fat: 35,
        fiber: 25,
    };
}
