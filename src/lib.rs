//! School directory engine
//!
//! Searches a static list of schools, orders it favorite-first, and runs
//! the time-gated "vote for your favorite" ranking board.
//!
//! - [`domain`]: pure ranking and cooldown logic
//! - [`app`]: screen sessions driving the domain
//! - [`platform`]: dataset, vote and comment collaborators
//! - [`ui`]: render models for the host
//! - [`config`]: settings

pub mod app;
pub mod config;
pub mod domain;
pub mod platform;
pub mod ui;
