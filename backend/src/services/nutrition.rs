//! Nutrition summary service
//!
//! Sums a day's food entries and measures them against the calorie goal.

use crate::error::ApiError;
use dietwise_shared::tracking::{remaining_calories, CalorieProgress, DailyTotals, FoodItem};
use dietwise_shared::types::{NutritionSummaryRequest, NutritionSummaryResponse};
use dietwise_shared::ValidationError;
use tracing::debug;
use validator::Validate;

pub struct NutritionService;

impl NutritionService {
    /// Validate the entries, then total them against the goal
    ///
    /// The first invalid entry rejects the whole request; its field is reported
    /// as `items[<index>].<field>`.
    pub fn summarize(req: &NutritionSummaryRequest) -> Result<NutritionSummaryResponse, ApiError> {
        Self::validate_items(&req.items)?;

        let totals = DailyTotals::from_items(&req.items);
        let response = NutritionSummaryResponse {
            remaining_calories: remaining_calories(req.target_calories, totals.calories),
            progress: CalorieProgress::from_intake(req.target_calories, totals.calories),
            target_calories: req.target_calories,
            totals,
        };

        debug!(
            entries = totals.entries,
            calories = totals.calories,
            progress = ?response.progress,
            "Summarized food log"
        );
        metrics::counter!("dietwise_calculations_total", "kind" => "nutrition").increment(1);

        Ok(response)
    }

    fn validate_items(items: &[FoodItem]) -> Result<(), ApiError> {
        for (index, item) in items.iter().enumerate() {
            if let Err(errors) = item.validate() {
                let err = ValidationError::from(errors);
                return Err(ApiError::Validation(ValidationError::new(
                    format!("items[{}].{}", index, err.field),
                    err.message,
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn item(name: &str, calories: f64) -> FoodItem {
        FoodItem {
            id: format!("food-{}", name),
            name: name.to_string(),
            calories,
            protein: Some(10.0),
            carbs: Some(20.0),
            fat: Some(5.0),
            serving_size: None,
            timestamp: 1_700_000_000_000,
        }
    }

    #[rstest]
    #[case(vec![], CalorieProgress::NotStarted)]
    #[case(vec![item("oats", 500.0)], CalorieProgress::Started)]
    #[case(vec![item("oats", 700.0), item("rice", 700.0)], CalorieProgress::Approaching)]
    #[case(vec![item("oats", 1000.0), item("rice", 1000.0)], CalorieProgress::OnTarget)]
    #[case(vec![item("oats", 2500.0)], CalorieProgress::Over)]
    fn test_progress_against_goal(#[case] items: Vec<FoodItem>, #[case] expected: CalorieProgress) {
        let req = NutritionSummaryRequest {
            items,
            target_calories: Some(2000.0),
        };
        let response = NutritionService::summarize(&req).unwrap();
        assert_eq!(response.progress, expected);
    }

    #[test]
    fn test_totals_and_remaining() {
        let req = NutritionSummaryRequest {
            items: vec![item("eggs", 300.0), item("toast", 200.0)],
            target_calories: Some(2000.0),
        };
        let response = NutritionService::summarize(&req).unwrap();
        assert_eq!(response.totals.calories, 500.0);
        assert_eq!(response.totals.protein, 20.0);
        assert_eq!(response.totals.entries, 2);
        assert_eq!(response.remaining_calories, Some(1500.0));
    }

    #[test]
    fn test_invalid_item_reports_index() {
        let req = NutritionSummaryRequest {
            items: vec![item("eggs", 300.0), item("bad", -5.0)],
            target_calories: None,
        };
        match NutritionService::summarize(&req) {
            Err(ApiError::Validation(err)) => assert_eq!(err.field, "items[1].calories"),
            other => panic!("expected validation error, got {:?}", other.map(|r| r.progress)),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// Property: remaining calories is the goal minus everything logged
        #[test]
        fn prop_remaining_is_goal_minus_intake(
            calories in prop::collection::vec(0.0f64..1500.0, 0..8),
            target in 1200.0f64..4000.0,
        ) {
            let items: Vec<FoodItem> = calories.iter().map(|c| item("snack", *c)).collect();
            let req = NutritionSummaryRequest { items, target_calories: Some(target) };
            let response = NutritionService::summarize(&req).unwrap();

            let consumed: f64 = calories.iter().sum();
            prop_assert_eq!(response.totals.entries, calories.len());
            prop_assert!((response.remaining_calories.unwrap() - (target - consumed)).abs() < 1e-6);
        }
    }
}
