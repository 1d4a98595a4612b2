//! API request and response types

use crate::calculations::BmiCategory;
use crate::errors::ValidationError;
use crate::profile::{ActivityLevel, CalculatedMetrics, MacroTargets};
use crate::tracking::{CalorieProgress, DailyTotals, FoodItem};
use serde::{Deserialize, Serialize};

/// Metrics derived from a posted profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    pub metrics: CalculatedMetrics,
    pub bmi_category: Option<BmiCategory>,
    pub macro_targets: MacroTargets,
    pub profile_complete: bool,
    pub missing_fields: Vec<String>,
}

/// An activity level as offered on the profile form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLevelInfo {
    pub value: ActivityLevel,
    pub description: String,
    pub multiplier: f64,
}

impl From<ActivityLevel> for ActivityLevelInfo {
    fn from(level: ActivityLevel) -> Self {
        Self {
            value: level,
            description: level.description().to_string(),
            multiplier: level.multiplier(),
        }
    }
}

/// Request for macro targets at a calorie goal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTargetsRequest {
    #[serde(default)]
    pub target_calories: Option<f64>,
}

/// Result of validating a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileValidationResponse {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Food entries for one day plus the calorie goal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionSummaryRequest {
    #[serde(default)]
    pub items: Vec<FoodItem>,
    #[serde(default)]
    pub target_calories: Option<f64>,
}

/// Daily totals measured against the calorie goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionSummaryResponse {
    pub totals: DailyTotals,
    pub target_calories: Option<f64>,
    pub remaining_calories: Option<f64>,
    pub progress: CalorieProgress,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_request_accepts_empty_body() {
        let req: MacroTargetsRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.target_calories, None);
    }

    #[test]
    fn test_activity_level_info() {
        let info = ActivityLevelInfo::from(ActivityLevel::VeryActive);
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["value"], "very_active");
        assert_eq!(json["multiplier"], 1.9);
        assert_eq!(json["description"], "Very hard exercise/sports & physical job");
    }

    #[test]
    fn test_metrics_response_is_camel_case() {
        let response = MetricsResponse {
            metrics: CalculatedMetrics::default(),
            bmi_category: None,
            macro_targets: MacroTargets::FALLBACK,
            profile_complete: false,
            missing_fields: vec!["age".to_string()],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["bmiCategory"].is_null());
        assert_eq!(json["profileComplete"], false);
        assert_eq!(json["missingFields"][0], "age");
        assert_eq!(json["macroTargets"]["protein"], 50);
    }
}
