//! DietWise WASM Module
//!
//! WebAssembly bindings so the browser client runs the metric calculations
//! in-process. Scalar calculators take and return plain numbers; profile-shaped
//! calls exchange JSON strings in the same camelCase shape the client stores.

use dietwise_shared::{calculations, validation, ActivityLevel, Height, Sex, UserProfile};
use wasm_bindgen::prelude::*;

fn height(ft: Option<f64>, inches: Option<f64>) -> Height {
    Height { ft, inches }
}

fn parse_profile(profile_json: &str) -> Result<UserProfile, JsValue> {
    serde_json::from_str(profile_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid profile JSON: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Calculate BMI from feet, inches and pounds
#[wasm_bindgen]
pub fn calculate_bmi(ft: Option<f64>, inches: Option<f64>, weight_lbs: Option<f64>) -> Option<f64> {
    calculations::calculate_bmi(Some(&height(ft, inches)), weight_lbs)
}

/// Calculate BMR (Mifflin-St Jeor); `sex` is "male" or "female"
#[wasm_bindgen]
pub fn calculate_bmr(
    age: Option<i32>,
    sex: Option<String>,
    ft: Option<f64>,
    inches: Option<f64>,
    weight_lbs: Option<f64>,
) -> Option<f64> {
    let sex = sex.and_then(|s| s.parse::<Sex>().ok());
    calculations::calculate_bmr(age, sex, Some(&height(ft, inches)), weight_lbs)
}

/// Calculate TDEE; `activity_level` uses the stored names ("sedentary" ... "very_active")
#[wasm_bindgen]
pub fn calculate_tdee(bmr: Option<f64>, activity_level: Option<String>) -> Option<f64> {
    let level = activity_level.and_then(|s| s.parse::<ActivityLevel>().ok());
    calculations::calculate_tdee(bmr, level)
}

/// Calculate the daily calorie target for a weight goal
#[wasm_bindgen]
pub fn calculate_target_calories(
    tdee: Option<f64>,
    current_weight_lbs: Option<f64>,
    target_weight_lbs: Option<f64>,
) -> Option<f64> {
    calculations::calculate_target_calories(tdee, current_weight_lbs, target_weight_lbs)
}

/// Default macro targets as JSON `{protein, carbs, fat, fiber}`
#[wasm_bindgen]
pub fn calculate_default_macro_targets(target_calories: Option<f64>) -> Result<String, JsValue> {
    to_json(&calculations::calculate_default_macro_targets(target_calories))
}

/// All metrics for a profile JSON, returned as JSON `{bmi, bmr, tdee, targetCalories}`
#[wasm_bindgen]
pub fn calculate_all_metrics(profile_json: &str) -> Result<String, JsValue> {
    let profile = parse_profile(profile_json)?;
    to_json(&calculations::calculate_all_metrics(&profile))
}

/// BMI category label ("Underweight", "Normal weight", ...)
#[wasm_bindgen]
pub fn bmi_category(bmi: f64) -> String {
    calculations::classify_bmi(bmi).label().to_string()
}

/// Validation errors for a profile JSON, returned as a JSON array of `{field, message}`
#[wasm_bindgen]
pub fn validate_profile(profile_json: &str) -> Result<String, JsValue> {
    let profile = parse_profile(profile_json)?;
    to_json(&validation::validate_profile(&profile))
}
