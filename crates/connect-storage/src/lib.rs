//! connect-storage
//!
//! Append-only JSON collections on the local filesystem, and the offer,
//! professional, and errand stores built on them.

pub mod collection;
pub mod errands;
pub mod error;
pub mod objects;
pub mod offers;
pub mod professionals;
pub mod state;
