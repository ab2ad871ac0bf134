//! Storage key conventions.
//!
//! Pure string functions — no filesystem dependency. These define the canonical
//! names of the JSON collections inside the data directory.

/// The help offer collection. Matches the key the intake form always wrote to.
pub const HELP_OFFERS: &str = "helpOffers";

pub const PROFESSIONALS: &str = "professionals";

pub const ERRANDS: &str = "errands";

/// File name backing a collection key.
pub fn collection_file(key: &str) -> String {
    format!("{key}.json")
}

/// Scratch file a collection is written to before being renamed into place.
pub fn collection_tmp_file(key: &str) -> String {
    format!("{key}.json.tmp")
}
