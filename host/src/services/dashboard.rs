//! Dashboard service
//!
//! Provides the host-side operations behind the dashboard page:
//! - Building the daily summary for a user
//! - Logging meals, water and weigh-ins
//!
//! `today` is always supplied by the caller; this service never reads the clock.

use chrono::NaiveDate;
use healthtrack_shared::validation::{validate_meal, validate_positive};
use healthtrack_shared::{
    build_summary, water_for_day, DashboardGoals, DashboardSummary, MealEntry, MealType,
    WaterUnit,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ServiceError;
use crate::store::ProfileStore;

/// Input for logging a meal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogMealInput {
    pub food_name: String,
    pub meal_type: MealType,
    pub calories: f64,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub fats: Option<f64>,
}

pub struct DashboardService<S> {
    store: S,
    goals: DashboardGoals,
}

impl<S: ProfileStore> DashboardService<S> {
    pub fn new(store: S, goals: DashboardGoals) -> Self {
        Self { store, goals }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Summary of `today` for the dashboard widgets
    pub fn summary(&self, user_id: u64, today: NaiveDate) -> Result<DashboardSummary, ServiceError> {
        let profile = self.store.load(user_id)?;
        Ok(build_summary(&profile, today, &self.goals))
    }

    /// Validate and append a meal dated `today`
    pub fn log_meal(
        &mut self,
        user_id: u64,
        input: LogMealInput,
        today: NaiveDate,
    ) -> Result<MealEntry, ServiceError> {
        validate_meal(&input.food_name, input.calories)?;

        let entry = MealEntry::new(today, input.food_name.trim(), input.meal_type, input.calories)
            .with_macros(
                input.protein.unwrap_or(0.0),
                input.carbs.unwrap_or(0.0),
                input.fats.unwrap_or(0.0),
            );

        let mut profile = self.store.load(user_id)?;
        profile.log_meal(entry.clone());
        self.store.save(user_id, &profile)?;

        info!(
            user_id,
            food = %entry.food_name,
            meal_type = entry.meal_type.label(),
            calories = entry.calories,
            "Logged meal"
        );
        Ok(entry)
    }

    /// Add water intake for `today`; returns the day's new total in liters
    pub fn log_water(
        &mut self,
        user_id: u64,
        amount: f64,
        unit: WaterUnit,
        today: NaiveDate,
    ) -> Result<f64, ServiceError> {
        validate_positive("amount", amount)?;
        let liters = unit.to_liters(amount);

        let mut profile = self.store.load(user_id)?;
        profile.record_water(today, liters);
        self.store.save(user_id, &profile)?;

        let total = water_for_day(&profile.water_logs, today);
        info!(user_id, amount, %unit, liters, total, "Logged water");
        Ok(total)
    }

    /// Record a weigh-in (kg) for `today`
    pub fn log_weight(
        &mut self,
        user_id: u64,
        weight_kg: f64,
        today: NaiveDate,
    ) -> Result<(), ServiceError> {
        validate_positive("weight", weight_kg)?;

        let mut profile = self.store.load(user_id)?;
        profile.record_weight(today, weight_kg);
        self.store.save(user_id, &profile)?;

        info!(user_id, weight_kg, "Logged weight");
        Ok(())
    }
}
