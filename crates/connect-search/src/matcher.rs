use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use connect_core::models::offer::HelpOffer;

/// What a person in need is looking for. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OfferQuery {
    /// Exact help type, compared case-insensitively.
    #[serde(default)]
    pub help_type: String,
    /// Free text that must appear somewhere in the offer's location.
    #[serde(default)]
    pub location: String,
}

impl OfferQuery {
    pub fn new(help_type: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            help_type: help_type.into(),
            location: location.into(),
        }
    }

    pub fn matches(&self, offer: &HelpOffer) -> bool {
        let type_ok = self.help_type.is_empty()
            || offer.help_type.to_lowercase() == self.help_type.to_lowercase();
        let location_ok = self.location.is_empty()
            || offer
                .location
                .to_lowercase()
                .contains(&self.location.to_lowercase());
        type_ok && location_ok
    }
}

/// Offers that satisfy both predicates, in their original order.
pub fn match_offers(offers: &[HelpOffer], query: &OfferQuery) -> Vec<HelpOffer> {
    let matched: Vec<HelpOffer> = offers
        .iter()
        .filter(|offer| query.matches(offer))
        .cloned()
        .collect();

    debug!(
        help_type = %query.help_type,
        location = %query.location,
        total = offers.len(),
        matched = matched.len(),
        "matched help offers"
    );
    matched
}
