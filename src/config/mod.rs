//! Configuration module for school-directory
//!
//! Settings shared by the screens: cooldown length, board page size, tick
//! interval, dataset location and the policy applied when a vote
//! submission fails.

pub mod settings;

pub use settings::{AppConfig, ConfigError, SubmissionFailurePolicy};
