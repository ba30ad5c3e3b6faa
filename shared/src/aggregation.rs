//! Daily aggregation over a user's logs
//!
//! Reduces meal, water and weight logs into per-day totals, 7-day chart
//! series and the trailing logging streak. Every function here is total:
//! empty logs give zero-valued summaries and nothing returns an error.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{MealEntry, UserProfile, WaterEntry};

/// Weight plotted when a user has no weigh-ins and no profile weight
pub const FALLBACK_WEIGHT_KG: f64 = 70.0;

/// Calorie and protein totals for one day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    pub calories: f64,
    pub protein: f64,
}

/// Calories plus all three macros for one day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// One point of a per-day chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayValue {
    pub date: NaiveDate,
    pub value: f64,
}

/// One point of the weight chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightPoint {
    pub label: String,
    pub weight: f64,
}

/// Meals logged on `day`, in log order
pub fn meals_on(meals: &[MealEntry], day: NaiveDate) -> impl Iterator<Item = &MealEntry> {
    meals.iter().filter(move |m| m.date == day)
}

/// Sum calories and protein over the meals logged on `day`
pub fn daily_totals(meals: &[MealEntry], day: NaiveDate) -> DailyTotals {
    meals_on(meals, day).fold(DailyTotals::default(), |acc, meal| DailyTotals {
        calories: acc.calories + meal.calories,
        protein: acc.protein + meal.protein,
    })
}

/// Sum calories and every macro over the meals logged on `day`
pub fn daily_macros(meals: &[MealEntry], day: NaiveDate) -> MacroTotals {
    meals_on(meals, day).fold(MacroTotals::default(), |acc, meal| MacroTotals {
        calories: acc.calories + meal.calories,
        protein: acc.protein + meal.protein,
        carbs: acc.carbs + meal.carbs,
        fats: acc.fats + meal.fats,
    })
}

/// Liters logged for `day`.
///
/// Only the first entry for a date counts; later duplicates are ignored.
pub fn water_for_day(water_logs: &[WaterEntry], day: NaiveDate) -> f64 {
    water_logs
        .iter()
        .find(|w| w.date == day)
        .map(|w| w.liters)
        .unwrap_or(0.0)
}

/// Consecutive days ending at `today` (inclusive) with at least one meal.
///
/// Zero when nothing was logged today, whatever happened before.
pub fn compute_streak(meals: &[MealEntry], today: NaiveDate) -> u32 {
    let logged: HashSet<NaiveDate> = meals.iter().map(|m| m.date).collect();

    let mut streak = 0;
    let mut cursor = Some(today);
    while let Some(day) = cursor.filter(|d| logged.contains(d)) {
        streak += 1;
        cursor = day.pred_opt();
    }
    streak
}

/// The seven days ending at `today`, oldest first
pub fn last_7_days(today: NaiveDate) -> [NaiveDate; 7] {
    let mut days = [today; 7];
    for (offset, slot) in (0..7i64).rev().zip(days.iter_mut()) {
        *slot = today - Duration::days(offset);
    }
    days
}

/// Calories per day over the last week, aligned with [`last_7_days`]
pub fn weekly_calories(meals: &[MealEntry], today: NaiveDate) -> Vec<DayValue> {
    last_7_days(today)
        .into_iter()
        .map(|date| DayValue {
            date,
            value: daily_totals(meals, date).calories,
        })
        .collect()
}

/// Liters per day over the last week, aligned with [`last_7_days`]
pub fn weekly_water(water_logs: &[WaterEntry], today: NaiveDate) -> Vec<DayValue> {
    last_7_days(today)
        .into_iter()
        .map(|date| DayValue {
            date,
            value: water_for_day(water_logs, date),
        })
        .collect()
}

/// Weight chart points in log order, labelled like "Mar 5".
///
/// With no weigh-ins yet, plots a flat `Start`/`Now` pair at the profile
/// weight so the chart is never empty.
pub fn weight_series(profile: &UserProfile) -> Vec<WeightPoint> {
    if profile.progress_logs.is_empty() {
        let weight = profile.weight.unwrap_or(FALLBACK_WEIGHT_KG);
        return ["Start", "Now"]
            .into_iter()
            .map(|label| WeightPoint {
                label: label.to_string(),
                weight,
            })
            .collect();
    }

    profile
        .progress_logs
        .iter()
        .map(|entry| WeightPoint {
            label: entry.date.format("%b %-d").to_string(),
            weight: entry.weight,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealType, ProgressEntry};
    use proptest::prelude::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn days_ago(n: i64) -> NaiveDate {
        today() - Duration::days(n)
    }

    fn meal(date: NaiveDate, calories: f64, protein: f64) -> MealEntry {
        MealEntry::new(date, "Test food", MealType::Lunch, calories).with_macros(protein, 10.0, 5.0)
    }

    // =========================================================================
    // Daily Totals Tests
    // =========================================================================

    #[test]
    fn test_daily_totals_empty() {
        assert_eq!(daily_totals(&[], today()), DailyTotals::default());
    }

    #[test]
    fn test_daily_totals_ignores_other_days() {
        let meals = vec![
            meal(today(), 500.0, 30.0),
            meal(days_ago(1), 900.0, 60.0),
            meal(today(), 250.0, 12.5),
        ];
        let totals = daily_totals(&meals, today());
        assert_eq!(totals.calories, 750.0);
        assert_eq!(totals.protein, 42.5);
    }

    #[test]
    fn test_daily_totals_missing_protein_counts_as_zero() {
        let meals = vec![MealEntry::new(today(), "Soda", MealType::Snack, 140.0)];
        let totals = daily_totals(&meals, today());
        assert_eq!(totals.calories, 140.0);
        assert_eq!(totals.protein, 0.0);
    }

    #[test]
    fn test_daily_macros() {
        let meals = vec![meal(today(), 400.0, 20.0), meal(today(), 600.0, 35.0)];
        let macros = daily_macros(&meals, today());
        assert_eq!(macros.calories, 1000.0);
        assert_eq!(macros.protein, 55.0);
        assert_eq!(macros.carbs, 20.0);
        assert_eq!(macros.fats, 10.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: totals over a day equal the sum over any split of its meals
        #[test]
        fn prop_daily_totals_additive(
            entries in prop::collection::vec((0u32..2000, 0u32..200), 0..20),
            split in 0usize..20
        ) {
            let meals: Vec<MealEntry> = entries
                .iter()
                .map(|&(c, p)| meal(today(), c as f64, p as f64))
                .collect();
            let split = split.min(meals.len());
            let (left, right) = meals.split_at(split);

            let whole = daily_totals(&meals, today());
            let a = daily_totals(left, today());
            let b = daily_totals(right, today());
            prop_assert_eq!(whole.calories, a.calories + b.calories);
            prop_assert_eq!(whole.protein, a.protein + b.protein);
        }

        /// Property: meals on other days never change a day's totals
        #[test]
        fn prop_daily_totals_ignore_other_dates(
            calories in prop::collection::vec(0u32..2000, 0..10),
            noise in prop::collection::vec((1i64..30, 0u32..2000), 0..10)
        ) {
            let mut meals: Vec<MealEntry> = calories
                .iter()
                .map(|&c| meal(today(), c as f64, 0.0))
                .collect();
            let baseline = daily_totals(&meals, today());
            meals.extend(noise.iter().map(|&(ago, c)| meal(days_ago(ago), c as f64, 5.0)));
            prop_assert_eq!(daily_totals(&meals, today()), baseline);
        }
    }

    // =========================================================================
    // Water Tests
    // =========================================================================

    #[test]
    fn test_water_for_day() {
        let logs = vec![
            WaterEntry { date: days_ago(1), liters: 2.0 },
            WaterEntry { date: today(), liters: 1.25 },
        ];
        assert_eq!(water_for_day(&logs, today()), 1.25);
        assert_eq!(water_for_day(&logs, days_ago(3)), 0.0);
        assert_eq!(water_for_day(&[], today()), 0.0);
    }

    #[test]
    fn test_water_for_day_first_match_wins() {
        let logs = vec![
            WaterEntry { date: today(), liters: 1.0 },
            WaterEntry { date: today(), liters: 3.0 },
        ];
        assert_eq!(water_for_day(&logs, today()), 1.0);
    }

    // =========================================================================
    // Streak Tests
    // =========================================================================

    #[test]
    fn test_streak_empty() {
        assert_eq!(compute_streak(&[], today()), 0);
    }

    #[test]
    fn test_streak_three_days_then_gap() {
        let meals = vec![
            meal(days_ago(2), 300.0, 0.0),
            meal(today(), 300.0, 0.0),
            meal(days_ago(1), 300.0, 0.0),
            meal(today(), 200.0, 0.0),
            meal(days_ago(4), 300.0, 0.0),
        ];
        assert_eq!(compute_streak(&meals, today()), 3);
    }

    #[test]
    fn test_streak_zero_without_meal_today() {
        let meals: Vec<MealEntry> = (1..=5).map(|n| meal(days_ago(n), 300.0, 0.0)).collect();
        assert_eq!(compute_streak(&meals, today()), 0);
    }

    #[test]
    fn test_streak_crosses_month_boundary() {
        let first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let meals = vec![
            meal(first, 100.0, 0.0),
            meal(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(), 100.0, 0.0),
            meal(NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(), 100.0, 0.0),
        ];
        assert_eq!(compute_streak(&meals, first), 3);
    }

    #[test]
    fn test_streak_ignores_future_entries() {
        let meals = vec![meal(today() + Duration::days(1), 100.0, 0.0), meal(today(), 100.0, 0.0)];
        assert_eq!(compute_streak(&meals, today()), 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: an unbroken run of n days ending today gives a streak of n
        #[test]
        fn prop_streak_counts_unbroken_run(run in 1i64..60, older in prop::collection::vec(0i64..60, 0..10)) {
            let mut meals: Vec<MealEntry> = (0..run).map(|n| meal(days_ago(n), 100.0, 0.0)).collect();
            // anything before the gap at day `run` must not count
            meals.extend(older.iter().map(|&n| meal(days_ago(run + 1 + n), 100.0, 0.0)));
            prop_assert_eq!(compute_streak(&meals, today()), run as u32);
        }
    }

    // =========================================================================
    // Series Tests
    // =========================================================================

    #[test]
    fn test_last_7_days() {
        let days = last_7_days(today());
        assert_eq!(days[0], days_ago(6));
        assert_eq!(days[6], today());
        assert!(days.windows(2).all(|w| w[1] - w[0] == Duration::days(1)));
    }

    #[test]
    fn test_weekly_series_align_with_axis() {
        let meals = vec![meal(days_ago(6), 1800.0, 0.0), meal(today(), 2100.0, 0.0)];
        let water = vec![WaterEntry { date: days_ago(3), liters: 2.5 }];

        let calories = weekly_calories(&meals, today());
        let liters = weekly_water(&water, today());
        let axis = last_7_days(today());

        assert_eq!(calories.len(), 7);
        assert_eq!(calories[0].value, 1800.0);
        assert_eq!(calories[6].value, 2100.0);
        assert_eq!(liters[3].value, 2.5);
        assert_eq!(liters[4].value, 0.0);
        for (i, day) in axis.iter().enumerate() {
            assert_eq!(calories[i].date, *day);
            assert_eq!(liters[i].date, *day);
        }
    }

    #[test]
    fn test_weight_series_from_logs() {
        let profile = UserProfile {
            weight: Some(80.0),
            progress_logs: vec![
                ProgressEntry { date: days_ago(9), weight: 81.0 },
                ProgressEntry { date: days_ago(2), weight: 80.0 },
            ],
            ..Default::default()
        };
        let series = weight_series(&profile);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "Mar 1");
        assert_eq!(series[1].weight, 80.0);
    }

    #[test]
    fn test_weight_series_fallback() {
        let series = weight_series(&UserProfile::default());
        assert_eq!(series[0].label, "Start");
        assert_eq!(series[1].label, "Now");
        assert!(series.iter().all(|p| p.weight == FALLBACK_WEIGHT_KG));

        let profile = UserProfile {
            weight: Some(64.0),
            ..Default::default()
        };
        assert!(weight_series(&profile).iter().all(|p| p.weight == 64.0));
    }
}
