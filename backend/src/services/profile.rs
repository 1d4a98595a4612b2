//! Profile validation service

use dietwise_shared::types::ProfileValidationResponse;
use dietwise_shared::validation::validate_profile;
use dietwise_shared::UserProfile;
use tracing::debug;

pub struct ProfileService;

impl ProfileService {
    /// Check every present profile field against its allowed range
    pub fn validate(profile: &UserProfile) -> ProfileValidationResponse {
        let errors = validate_profile(profile);
        if !errors.is_empty() {
            debug!(count = errors.len(), "Profile failed validation");
        }
        metrics::counter!("dietwise_profile_validations_total", "valid" => errors.is_empty().to_string())
            .increment(1);

        ProfileValidationResponse {
            valid: errors.is_empty(),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_profile() {
        let profile = UserProfile {
            age: Some(42),
            weight: Some(180.0),
            email: Some("sam@example.com".to_string()),
            ..Default::default()
        };
        let response = ProfileService::validate(&profile);
        assert!(response.valid);
        assert!(response.errors.is_empty());
    }

    #[test]
    fn test_out_of_range_age() {
        let profile = UserProfile {
            age: Some(0),
            ..Default::default()
        };
        let response = ProfileService::validate(&profile);
        assert!(!response.valid);
        assert_eq!(response.errors[0].field, "age");
    }
}
