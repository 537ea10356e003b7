//! Application orchestration layer
//!
//! This module coordinates between the domain, platform collaborators and
//! render models. Each screen session owns its transient state.

pub mod controller;
pub mod state;
pub mod ticker;

pub use controller::{AppError, DetailScreen, RankingBoard, SearchScreen};
