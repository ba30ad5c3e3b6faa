//! Water volume units
//!
//! Water logs are stored in liters; the logging form also accepts glasses
//! and milliliters, converted on the way in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::HealthError;

/// Volume of one glass of water, in liters
pub const LITERS_PER_GLASS: f64 = 0.25;

/// Unit of a water intake amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WaterUnit {
    #[default]
    Liters,
    Milliliters,
    Glasses,
}

impl WaterUnit {
    /// Convert from this unit to liters
    pub fn to_liters(&self, value: f64) -> f64 {
        match self {
            WaterUnit::Liters => value,
            WaterUnit::Milliliters => value / 1000.0,
            WaterUnit::Glasses => value * LITERS_PER_GLASS,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            WaterUnit::Liters => "L",
            WaterUnit::Milliliters => "ml",
            WaterUnit::Glasses => "glasses",
        }
    }
}

impl fmt::Display for WaterUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for WaterUnit {
    type Err = HealthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "l" | "liter" | "liters" => Ok(WaterUnit::Liters),
            "ml" | "milliliter" | "milliliters" => Ok(WaterUnit::Milliliters),
            "glass" | "glasses" => Ok(WaterUnit::Glasses),
            other => Err(HealthError::invalid(
                "amount",
                format!("unknown water unit '{other}'"),
            )),
        }
    }
}
