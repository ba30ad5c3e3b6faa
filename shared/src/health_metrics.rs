//! Health metrics calculations module
//!
//! BMI classification and Mifflin-St Jeor BMR with calorie targets per
//! activity tier.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Validated Inputs**: Non-positive or non-finite measurements are rejected
//! 3. **Fixed Constants**: Band edges and activity multipliers are not configurable

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{HealthError, HealthResult};
use crate::validation::validate_positive;

// ============================================================================
// Rounding
// ============================================================================

/// Round to the nearest integer, halves toward positive infinity
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to one decimal place
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ============================================================================
// User Profile Types
// ============================================================================

/// Biological sex for BMR calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl FromStr for BiologicalSex {
    type Err = HealthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(BiologicalSex::Male),
            "female" => Ok(BiologicalSex::Female),
            other => Err(HealthError::invalid(
                "sex",
                format!("expected 'male' or 'female', got '{other}'"),
            )),
        }
    }
}

/// Activity tier used to scale BMR into a daily calorie target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityTier {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or physical job
    VeryActive,
}

impl ActivityTier {
    pub const ALL: [ActivityTier; 5] = [
        ActivityTier::Sedentary,
        ActivityTier::Light,
        ActivityTier::Moderate,
        ActivityTier::Active,
        ActivityTier::VeryActive,
    ];

    /// Get the activity multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityTier::Sedentary => 1.2,
            ActivityTier::Light => 1.375,
            ActivityTier::Moderate => 1.55,
            ActivityTier::Active => 1.725,
            ActivityTier::VeryActive => 1.9,
        }
    }
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Half-open BMI band `[low, high)` for this category
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::Normal => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obese => (30.0, f64::INFINITY),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// BMI calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI rounded to one decimal
    pub bmi: f64,
    pub category: BmiCategory,
}

/// Classify an (already rounded) BMI value
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)², rounded to one decimal. The
/// category is taken from the rounded value, so 24.96 reports as Overweight.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> HealthResult<BmiResult> {
    validate_positive("weight", weight_kg)?;
    validate_positive("height", height_cm)?;

    let height_m = height_cm / 100.0;
    let bmi = round_one_decimal(weight_kg / (height_m * height_m));

    Ok(BmiResult {
        bmi,
        category: classify_bmi(bmi),
    })
}

// ============================================================================
// BMR Calculations
// ============================================================================

/// Daily calorie targets, one per activity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTargets {
    pub sedentary: i64,
    pub light: i64,
    pub moderate: i64,
    pub active: i64,
    pub very_active: i64,
}

impl ActivityTargets {
    /// Scale a rounded BMR by every tier's multiplier
    pub fn from_bmr(bmr: i64) -> Self {
        let target = |tier: ActivityTier| round_half_up(bmr as f64 * tier.multiplier()) as i64;
        Self {
            sedentary: target(ActivityTier::Sedentary),
            light: target(ActivityTier::Light),
            moderate: target(ActivityTier::Moderate),
            active: target(ActivityTier::Active),
            very_active: target(ActivityTier::VeryActive),
        }
    }

    pub fn get(&self, tier: ActivityTier) -> i64 {
        match tier {
            ActivityTier::Sedentary => self.sedentary,
            ActivityTier::Light => self.light,
            ActivityTier::Moderate => self.moderate,
            ActivityTier::Active => self.active,
            ActivityTier::VeryActive => self.very_active,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActivityTier, i64)> + '_ {
        ActivityTier::ALL.into_iter().map(|tier| (tier, self.get(tier)))
    }
}

/// BMR calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmrResult {
    /// Basal Metabolic Rate, kcal/day
    pub bmr: i64,
    pub targets_by_activity: ActivityTargets,
}

/// Unrounded Mifflin-St Jeor BMR
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: u32, sex: BiologicalSex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    }
}

/// Calculate BMR and per-tier calorie targets
///
/// The BMR is rounded first; each target is then rounded independently from
/// the rounded BMR.
pub fn compute_bmr(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: BiologicalSex,
) -> HealthResult<BmrResult> {
    validate_positive("weight", weight_kg)?;
    validate_positive("height", height_cm)?;
    if age_years == 0 {
        return Err(HealthError::invalid("age", "must be greater than zero"));
    }

    let bmr = round_half_up(bmr_mifflin(weight_kg, height_cm, age_years, sex)) as i64;

    Ok(BmrResult {
        bmr,
        targets_by_activity: ActivityTargets::from_bmr(bmr),
    })
}
