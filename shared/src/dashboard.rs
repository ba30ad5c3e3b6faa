//! Dashboard summary assembly
//!
//! Combines the aggregation functions into the single record the dashboard
//! widgets render: today's totals, progress toward daily goals, the streak,
//! and the chart series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregation::{
    compute_streak, daily_macros, meals_on, water_for_day, weekly_calories, weekly_water,
    weight_series, DayValue, MacroTotals, WeightPoint,
};
use crate::models::{MealEntry, UserProfile};

/// Daily goals the progress bars are measured against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardGoals {
    /// kcal
    pub calories: f64,
    /// grams
    pub protein_g: f64,
    pub water_liters: f64,
}

impl Default for DashboardGoals {
    fn default() -> Self {
        Self {
            calories: 2000.0,
            protein_g: 150.0,
            water_liters: 3.0,
        }
    }
}

/// Progress toward a goal as a percentage, capped at 100.
///
/// Returns 0 for a non-positive goal.
pub fn progress_percent(current: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    (current / goal * 100.0).min(100.0)
}

/// "1 Day", "0 Days", "12 Days"
pub fn streak_label(streak: u32) -> String {
    if streak == 1 {
        format!("{streak} Day")
    } else {
        format!("{streak} Days")
    }
}

/// Percentages shown on the three progress bars
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub calories: f64,
    pub protein: f64,
    pub water: f64,
}

/// Everything the dashboard page needs for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub date: NaiveDate,
    pub calories: f64,
    pub protein: f64,
    pub water_liters: f64,
    pub progress: GoalProgress,
    pub streak: u32,
    pub streak_label: String,
    pub macros: MacroTotals,
    pub todays_meals: Vec<MealEntry>,
    pub weekly_calories: Vec<DayValue>,
    pub weekly_water: Vec<DayValue>,
    pub weight_series: Vec<WeightPoint>,
}

/// Build the dashboard summary for `today`
pub fn build_summary(
    profile: &UserProfile,
    today: NaiveDate,
    goals: &DashboardGoals,
) -> DashboardSummary {
    let macros = daily_macros(&profile.meals, today);
    let water_liters = water_for_day(&profile.water_logs, today);
    let streak = compute_streak(&profile.meals, today);

    debug!(
        %today,
        meals = profile.meals.len(),
        calories = macros.calories,
        water_liters,
        streak,
        "Built dashboard summary"
    );

    DashboardSummary {
        date: today,
        calories: macros.calories,
        protein: macros.protein,
        water_liters,
        progress: GoalProgress {
            calories: progress_percent(macros.calories, goals.calories),
            protein: progress_percent(macros.protein, goals.protein_g),
            water: progress_percent(water_liters, goals.water_liters),
        },
        streak,
        streak_label: streak_label(streak),
        macros,
        todays_meals: meals_on(&profile.meals, today).cloned().collect(),
        weekly_calories: weekly_calories(&profile.meals, today),
        weekly_water: weekly_water(&profile.water_logs, today),
        weight_series: weight_series(profile),
    }
}
