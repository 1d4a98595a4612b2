//! Input validation functions
//!
//! Validation for the profile form. An empty value is never an error: an unset
//! field is simply absent and the calculators handle that on their own.

use crate::errors::ValidationError;
use crate::profile::UserProfile;
use regex_lite::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Age range in years
pub const AGE_RANGE: (f64, f64) = (1.0, 120.0);
/// Current and target weight range in pounds
pub const WEIGHT_RANGE_LBS: (f64, f64) = (10.0, 1000.0);
/// Range of the feet sub-field
pub const HEIGHT_FT_RANGE: (f64, f64) = (1.0, 8.0);
/// Range of the inches sub-field
pub const HEIGHT_IN_RANGE: (f64, f64) = (0.0, 11.0);
/// Maximum length of a display name
pub const MAX_NAME_LENGTH: usize = 100;

/// Profile fields that carry validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Age,
    Weight,
    HeightFt,
    HeightIn,
    TargetWeight,
    Email,
    Name,
}

impl ProfileField {
    /// Field key as used by the profile form
    pub fn key(&self) -> &'static str {
        match self {
            ProfileField::Age => "age",
            ProfileField::Weight => "weight",
            ProfileField::HeightFt => "height_ft",
            ProfileField::HeightIn => "height_in",
            ProfileField::TargetWeight => "targetWeight",
            ProfileField::Email => "email",
            ProfileField::Name => "name",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Map a field to a user-friendly display label
pub fn field_display_label(field: ProfileField) -> &'static str {
    match field {
        ProfileField::Age => "Age",
        ProfileField::Weight => "Current Weight",
        ProfileField::HeightFt => "Height (ft)",
        ProfileField::HeightIn => "Height (in)",
        ProfileField::TargetWeight => "Target Weight",
        ProfileField::Email => "Email",
        ProfileField::Name => "Name",
    }
}

/// Validate a raw form value for a field
///
/// Numeric fields reject text that does not parse as a number.
pub fn validate_field(field: ProfileField, raw: &str) -> Result<(), ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(());
    }

    match field {
        ProfileField::Email => validate_email(value),
        ProfileField::Name => validate_name(value),
        numeric => match value.parse::<f64>() {
            Ok(parsed) => validate_number(numeric, Some(parsed)),
            Err(_) => Err(ValidationError::new(
                numeric.key(),
                format!("{} must be a number", field_display_label(numeric)),
            )),
        },
    }
}

/// Validate every present field of a profile
pub fn validate_profile(profile: &UserProfile) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut check = |result: Result<(), ValidationError>| {
        if let Err(e) = result {
            errors.push(e);
        }
    };

    if let Some(age) = profile.age {
        check(validate_number(ProfileField::Age, Some(age as f64)));
    }
    if let Some(weight) = profile.weight {
        check(validate_number(ProfileField::Weight, Some(weight)));
    }
    if let Some(height) = profile.height.as_ref() {
        if let Some(ft) = height.ft {
            check(validate_number(ProfileField::HeightFt, Some(ft)));
        }
        if let Some(inches) = height.inches {
            check(validate_number(ProfileField::HeightIn, Some(inches)));
        }
    }
    if let Some(target) = profile.target_weight {
        check(validate_number(ProfileField::TargetWeight, Some(target)));
    }
    if let Some(email) = profile.email.as_deref().filter(|e| !e.is_empty()) {
        check(validate_email(email));
    }
    if let Some(name) = profile.name.as_deref().filter(|n| !n.is_empty()) {
        check(validate_name(name));
    }

    errors
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    let is_match = EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(email));

    if is_match {
        Ok(())
    } else {
        Err(ValidationError::new(
            ProfileField::Email.key(),
            "Please enter a valid email address",
        ))
    }
}

/// Validate display name length
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::new(
            ProfileField::Name.key(),
            format!("Name must be less than {} characters", MAX_NAME_LENGTH),
        ));
    }
    Ok(())
}

fn validate_number(field: ProfileField, value: Option<f64>) -> Result<(), ValidationError> {
    let (min, max, message) = match field {
        ProfileField::Age => (AGE_RANGE.0, AGE_RANGE.1, "Age must be between 1 and 120 years"),
        ProfileField::Weight => (
            WEIGHT_RANGE_LBS.0,
            WEIGHT_RANGE_LBS.1,
            "Weight must be between 10 and 1000 lbs",
        ),
        ProfileField::HeightFt => (
            HEIGHT_FT_RANGE.0,
            HEIGHT_FT_RANGE.1,
            "Height must be between 1 and 8 feet",
        ),
        ProfileField::HeightIn => (
            HEIGHT_IN_RANGE.0,
            HEIGHT_IN_RANGE.1,
            "Inches must be between 0 and 11",
        ),
        ProfileField::TargetWeight => (
            WEIGHT_RANGE_LBS.0,
            WEIGHT_RANGE_LBS.1,
            "Target weight must be between 10 and 1000 lbs",
        ),
        ProfileField::Email | ProfileField::Name => return Ok(()),
    };

    match value {
        Some(v) if v.is_finite() && (min..=max).contains(&v) => Ok(()),
        _ => Err(ValidationError::new(field.key(), message)),
    }
}
