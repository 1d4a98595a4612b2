//! Metric calculation service
//!
//! Runs the shared calculators over a posted profile and assembles the
//! response the dashboard renders.

use dietwise_shared::types::{ActivityLevelInfo, MetricsResponse};
use dietwise_shared::{
    calculate_all_metrics, calculate_default_macro_targets, classify_bmi, ActivityLevel,
    MacroTargets, UserProfile,
};
use tracing::debug;

pub struct CalculationService;

impl CalculationService {
    /// Derive BMI, BMR, TDEE, target calories and macro targets for a profile
    pub fn metrics_for(profile: &UserProfile) -> MetricsResponse {
        let calculated = calculate_all_metrics(profile);
        let missing_fields: Vec<String> = profile
            .missing_fields()
            .into_iter()
            .map(String::from)
            .collect();

        debug!(
            bmi = ?calculated.bmi,
            target_calories = ?calculated.target_calories,
            missing = missing_fields.len(),
            "Calculated profile metrics"
        );
        metrics::counter!("dietwise_calculations_total", "kind" => "profile").increment(1);

        MetricsResponse {
            bmi_category: calculated.bmi.map(classify_bmi),
            macro_targets: calculate_default_macro_targets(calculated.target_calories),
            profile_complete: missing_fields.is_empty(),
            missing_fields,
            metrics: calculated,
        }
    }

    /// Default macro split for a calorie goal
    pub fn macros_for(target_calories: Option<f64>) -> MacroTargets {
        metrics::counter!("dietwise_calculations_total", "kind" => "macros").increment(1);
        calculate_default_macro_targets(target_calories)
    }

    /// Every activity level with its description and TDEE multiplier
    pub fn activity_levels() -> Vec<ActivityLevelInfo> {
        ActivityLevel::ALL.iter().copied().map(ActivityLevelInfo::from).collect()
    }
}
