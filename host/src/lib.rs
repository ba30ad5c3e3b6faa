//! HealthTrack Host Library
//!
//! Native side of the dashboard: configuration, the profile persistence
//! port, and the service that loads a profile, feeds it through the shared
//! core and saves whatever the core hands back.

pub mod config;
pub mod error;
pub mod services;
pub mod store;
