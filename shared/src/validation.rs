//! Input validation functions
//!
//! Checks applied at the boundary before data reaches the calculators or is
//! appended to a user's log.

use chrono::NaiveDate;

use crate::errors::{HealthError, HealthResult};
use crate::health_metrics::BiologicalSex;

/// Validate that a measurement is a finite, strictly positive number
pub fn validate_positive(field: &'static str, value: f64) -> HealthResult<()> {
    if value.is_nan() || value.is_infinite() {
        return Err(HealthError::invalid(field, "must be a valid number"));
    }
    if value <= 0.0 {
        return Err(HealthError::invalid(field, "must be greater than zero"));
    }
    Ok(())
}

/// Validate an age in whole years and narrow it for the calculators
pub fn validate_age(age_years: f64) -> HealthResult<u32> {
    validate_positive("age", age_years)?;
    if age_years.fract() != 0.0 {
        return Err(HealthError::invalid("age", "must be a whole number of years"));
    }
    if age_years > u32::MAX as f64 {
        return Err(HealthError::invalid("age", "is out of range"));
    }
    Ok(age_years as u32)
}

/// Validate a meal before it is logged
pub fn validate_meal(food_name: &str, calories: f64) -> HealthResult<()> {
    if food_name.trim().is_empty() {
        return Err(HealthError::invalid("food_name", "cannot be empty"));
    }
    validate_positive("calories", calories)
}

/// Parse a canonical, zero-padded `YYYY-MM-DD` calendar day
pub fn parse_iso_date(text: &str) -> HealthResult<NaiveDate> {
    let invalid = || HealthError::invalid("date", format!("expected YYYY-MM-DD, got '{text}'"));
    let trimmed = text.trim();
    if trimmed.len() != 10 {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| invalid())
}

/// Parse a biological sex value, case-insensitively
pub fn parse_sex(text: &str) -> HealthResult<BiologicalSex> {
    text.parse()
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight" => "Weight",
        "height" => "Height",
        "age" => "Age",
        "sex" => "Gender",
        "date" => "Date",
        "food_name" => "Food Name",
        "calories" => "Calories",
        "amount" => "Water Amount",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

impl From<&HealthError> for ValidationError {
    fn from(err: &HealthError) -> Self {
        match err {
            HealthError::InvalidInput { field, message } => ValidationError::new(field, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("weight", 70.0).is_ok());
        assert!(validate_positive("weight", 0.001).is_ok());
        assert!(validate_positive("weight", 0.0).is_err());
        assert!(validate_positive("weight", -1.0).is_err());
        assert!(validate_positive("weight", f64::NAN).is_err());
        assert!(validate_positive("weight", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_meal() {
        assert!(validate_meal("Oatmeal", 150.0).is_ok());
        assert_eq!(validate_meal("   ", 150.0).unwrap_err().field(), "food_name");
        assert_eq!(validate_meal("Oatmeal", 0.0).unwrap_err().field(), "calories");
    }

    #[test]
    fn test_parse_iso_date() {
        let date = parse_iso_date("2024-02-29").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        assert!(parse_iso_date("2023-02-29").is_err());
        assert!(parse_iso_date("29/02/2024").is_err());
        assert!(parse_iso_date("").is_err());
    }

    #[test]
    fn test_parse_iso_date_requires_zero_padding() {
        assert!(parse_iso_date("2024-3-5").is_err());
        assert!(parse_iso_date("2024-03-5").is_err());
        assert!(parse_iso_date("2024-3-05").is_err());
        assert!(parse_iso_date(" 2024-03-05 ").is_ok());
    }

    #[test]
    fn test_validate_age() {
        assert_eq!(validate_age(25.0).unwrap(), 25);
        assert_eq!(validate_age(-5.0).unwrap_err().field(), "age");
        assert_eq!(validate_age(0.0).unwrap_err().field(), "age");
        assert_eq!(validate_age(25.5).unwrap_err().field(), "age");
        assert!(validate_age(f64::NAN).is_err());
        assert!(validate_age(1e12).is_err());
    }

    #[test]
    fn test_parse_sex() {
        assert_eq!(parse_sex("FEMALE").unwrap(), BiologicalSex::Female);
        assert!(parse_sex("").is_err());
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(field_display_label("food_name"), "Food Name");
        assert_eq!(field_display_label("sex"), "Gender");
        assert_eq!(field_display_label("unknown_field"), "unknown_field");
    }

    #[test]
    fn test_validation_error_from_health_error() {
        let err = validate_positive("height", -3.0).unwrap_err();
        let validation = ValidationError::from(&err);
        assert_eq!(validation.field, "height");
        assert_eq!(validation.user_message(), "Height: must be greater than zero");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_positive_values_accepted(value in 1e-6f64..1e6) {
            prop_assert!(validate_positive("weight", value).is_ok());
        }

        #[test]
        fn prop_non_positive_values_rejected(value in -1e6f64..=0.0) {
            prop_assert!(validate_positive("weight", value).is_err());
        }
    }
}
