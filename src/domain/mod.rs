//! Domain logic and core data structures
//!
//! This module contains the pure ranking and voting logic. Nothing in here
//! performs I/O or owns a clock; the hosting screen feeds events in and
//! renders what comes out.

pub mod cooldown;
pub mod entity;
pub mod favorites;
pub mod paging;
pub mod ranker;
pub mod review;
pub mod search;
