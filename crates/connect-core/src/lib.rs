//! connect-core
//!
//! Pure domain types, intake validation, geodesy, and storage key conventions.
//! No I/O — this is the shared vocabulary of the Community Connect system.

pub mod error;
pub mod geo;
pub mod models;
pub mod storage_keys;
