//! HealthTrack WASM Module
//!
//! Browser bindings for the dashboard. The page reads the user record from
//! local storage, passes it here as JSON together with today's date, and
//! renders whatever comes back. All exports exchange JSON strings; the
//! `*_json` functions hold the logic so they can be tested natively.

use healthtrack_shared::validation::{parse_iso_date, parse_sex, validate_age, ValidationError};
use healthtrack_shared::{
    build_summary, compute_bmi, compute_bmr, compute_streak, daily_totals, last_7_days,
    water_for_day, weekly_calories, weekly_water, DashboardGoals, HealthError, MealEntry,
    UserProfile, WaterEntry, WaterUnit,
};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Errors surfaced to JavaScript
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error(transparent)]
    Health(#[from] HealthError),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AdapterError {
    /// Message shown next to the form, e.g. "Height: must be greater than zero"
    pub fn user_message(&self) -> String {
        match self {
            AdapterError::Health(e) => ValidationError::from(e).user_message(),
            AdapterError::Json(_) => self.to_string(),
        }
    }
}

type AdapterResult<T> = Result<T, AdapterError>;

fn to_json<T: Serialize>(value: &T) -> AdapterResult<String> {
    Ok(serde_json::to_string(value)?)
}

fn to_js<T>(result: AdapterResult<T>) -> Result<T, JsError> {
    result.map_err(|e| JsError::new(&e.user_message()))
}

// ============================================================================
// Metrics
// ============================================================================

pub fn bmi_json(weight_kg: f64, height_cm: f64) -> AdapterResult<String> {
    to_json(&compute_bmi(weight_kg, height_cm)?)
}

/// JS numbers arrive as `f64`; the age must be a positive whole number
pub fn bmr_json(weight_kg: f64, height_cm: f64, age_years: f64, sex: &str) -> AdapterResult<String> {
    let age_years = validate_age(age_years)?;
    let sex = parse_sex(sex)?;
    to_json(&compute_bmr(weight_kg, height_cm, age_years, sex)?)
}

/// `{"bmi": 22.9, "category": "Normal"}`
#[wasm_bindgen(js_name = computeBmi)]
pub fn compute_bmi_js(weight_kg: f64, height_cm: f64) -> Result<String, JsError> {
    to_js(bmi_json(weight_kg, height_cm))
}

/// `{"bmr": 1674, "targetsByActivity": {"sedentary": 2009, ...}}`
#[wasm_bindgen(js_name = computeBmr)]
pub fn compute_bmr_js(
    weight_kg: f64,
    height_cm: f64,
    age_years: f64,
    sex: &str,
) -> Result<String, JsError> {
    to_js(bmr_json(weight_kg, height_cm, age_years, sex))
}

// ============================================================================
// Aggregation
// ============================================================================

pub fn daily_totals_json(meals_json: &str, day: &str) -> AdapterResult<String> {
    let meals: Vec<MealEntry> = serde_json::from_str(meals_json)?;
    to_json(&daily_totals(&meals, parse_iso_date(day)?))
}

pub fn water_for_day_value(water_json: &str, day: &str) -> AdapterResult<f64> {
    let logs: Vec<WaterEntry> = serde_json::from_str(water_json)?;
    Ok(water_for_day(&logs, parse_iso_date(day)?))
}

pub fn streak_value(meals_json: &str, today: &str) -> AdapterResult<u32> {
    let meals: Vec<MealEntry> = serde_json::from_str(meals_json)?;
    Ok(compute_streak(&meals, parse_iso_date(today)?))
}

pub fn last_7_days_json(today: &str) -> AdapterResult<String> {
    to_json(&last_7_days(parse_iso_date(today)?))
}

pub fn weekly_series_json(profile_json: &str, today: &str) -> AdapterResult<String> {
    #[derive(Serialize)]
    struct WeeklySeries {
        calories: Vec<healthtrack_shared::DayValue>,
        water: Vec<healthtrack_shared::DayValue>,
    }

    let profile: UserProfile = serde_json::from_str(profile_json)?;
    let today = parse_iso_date(today)?;
    to_json(&WeeklySeries {
        calories: weekly_calories(&profile.meals, today),
        water: weekly_water(&profile.water_logs, today),
    })
}

/// Empty `goals_json` means the default goals
pub fn dashboard_json(profile_json: &str, today: &str, goals_json: &str) -> AdapterResult<String> {
    let profile: UserProfile = serde_json::from_str(profile_json)?;
    let goals: DashboardGoals = if goals_json.trim().is_empty() {
        DashboardGoals::default()
    } else {
        serde_json::from_str(goals_json)?
    };
    to_json(&build_summary(&profile, parse_iso_date(today)?, &goals))
}

pub fn water_to_liters(amount: f64, unit: &str) -> AdapterResult<f64> {
    healthtrack_shared::validation::validate_positive("amount", amount)?;
    Ok(unit.parse::<WaterUnit>()?.to_liters(amount))
}

#[wasm_bindgen(js_name = dailyTotals)]
pub fn daily_totals_js(meals_json: &str, day: &str) -> Result<String, JsError> {
    to_js(daily_totals_json(meals_json, day))
}

#[wasm_bindgen(js_name = waterForDay)]
pub fn water_for_day_js(water_json: &str, day: &str) -> Result<f64, JsError> {
    to_js(water_for_day_value(water_json, day))
}

#[wasm_bindgen(js_name = computeStreak)]
pub fn compute_streak_js(meals_json: &str, today: &str) -> Result<u32, JsError> {
    to_js(streak_value(meals_json, today))
}

/// JSON array of seven `YYYY-MM-DD` strings, oldest first
#[wasm_bindgen(js_name = last7Days)]
pub fn last_7_days_js(today: &str) -> Result<String, JsError> {
    to_js(last_7_days_json(today))
}

#[wasm_bindgen(js_name = weeklySeries)]
pub fn weekly_series_js(profile_json: &str, today: &str) -> Result<String, JsError> {
    to_js(weekly_series_json(profile_json, today))
}

#[wasm_bindgen(js_name = dashboardSummary)]
pub fn dashboard_summary_js(
    profile_json: &str,
    today: &str,
    goals_json: &str,
) -> Result<String, JsError> {
    to_js(dashboard_json(profile_json, today, goals_json))
}

/// Convert a logged amount (e.g. glasses) to liters
#[wasm_bindgen(js_name = waterToLiters)]
pub fn water_to_liters_js(amount: f64, unit: &str) -> Result<f64, JsError> {
    to_js(water_to_liters(amount, unit))
}
