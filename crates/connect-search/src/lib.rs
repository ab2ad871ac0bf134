//! connect-search
//!
//! In-memory matching: help offers by type and location, professionals by
//! profession and distance.

pub mod error;
pub mod matcher;
pub mod nearest;
