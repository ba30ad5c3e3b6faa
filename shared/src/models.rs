//! Data models for logged meals, water intake and weight progress

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Meal slot a food was logged under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

/// A single logged food item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    pub date: NaiveDate,
    pub food_name: String,
    pub meal_type: MealType,
    pub calories: f64,
    /// Grams; absent in older logs
    #[serde(default, deserialize_with = "zero_if_malformed")]
    pub protein: f64,
    #[serde(default, deserialize_with = "zero_if_malformed")]
    pub carbs: f64,
    #[serde(default, deserialize_with = "zero_if_malformed")]
    pub fats: f64,
}

/// Read an optional macro amount, treating null, non-numeric and
/// non-finite values as 0.
///
/// `JSON.stringify` writes `NaN` as `null`.
fn zero_if_malformed<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let number = match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number.filter(|n| n.is_finite()).unwrap_or(0.0))
}

impl MealEntry {
    pub fn new(
        date: NaiveDate,
        food_name: impl Into<String>,
        meal_type: MealType,
        calories: f64,
    ) -> Self {
        Self {
            date,
            food_name: food_name.into(),
            meal_type,
            calories,
            protein: 0.0,
            carbs: 0.0,
            fats: 0.0,
        }
    }

    pub fn with_macros(mut self, protein: f64, carbs: f64, fats: f64) -> Self {
        self.protein = protein;
        self.carbs = carbs;
        self.fats = fats;
        self
    }
}

/// Water intake for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterEntry {
    pub date: NaiveDate,
    pub liters: f64,
}

/// Body-weight measurement (kg)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub date: NaiveDate,
    pub weight: f64,
}

/// Everything the dashboard knows about one user.
///
/// `weight` and `height` stay empty until the user fills in their profile;
/// the log collections default to empty when missing from stored data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default)]
    pub meals: Vec<MealEntry>,
    #[serde(default)]
    pub water_logs: Vec<WaterEntry>,
    #[serde(default)]
    pub progress_logs: Vec<ProgressEntry>,
}

impl UserProfile {
    pub fn log_meal(&mut self, entry: MealEntry) {
        self.meals.push(entry);
    }

    /// Add intake to the first entry for `date`, or start a new one.
    ///
    /// Lookups only ever see the first entry per day, so merging here keeps
    /// later intake visible.
    pub fn record_water(&mut self, date: NaiveDate, liters: f64) {
        match self.water_logs.iter_mut().find(|w| w.date == date) {
            Some(entry) => entry.liters += liters,
            None => self.water_logs.push(WaterEntry { date, liters }),
        }
    }

    /// Append a weigh-in and make it the current profile weight
    pub fn record_weight(&mut self, date: NaiveDate, weight: f64) {
        self.progress_logs.push(ProgressEntry { date, weight });
        self.weight = Some(weight);
    }
}
