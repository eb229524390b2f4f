//! Configuration loading and management for the employment credit engine.
//!
//! This module loads dated rate schedules from YAML files so the per-head
//! amounts can change from one tax year to the next without a rebuild.
//!
//! # Example
//!
//! ```no_run
//! use employment_credit::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded scheme: {}", config.schedule().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CreditConfig, RateConfig, ScheduleMetadata};
