use serde::{Deserialize, Serialize};
use ts_rs::TS;

use connect_core::geo::{check_coordinate, haversine_km, round_km};
use connect_core::models::professional::{Professional, ProfessionalMatch};

use crate::error::SearchError;

/// Where the searcher is and which profession they need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfessionalQuery {
    pub profession: String,
    pub lat: f64,
    pub lng: f64,
}

/// Professionals with exactly the requested profession, nearest first.
///
/// Distances are rounded to two decimals before sorting; ties keep
/// registration order.
pub fn nearest(
    professionals: &[Professional],
    query: &ProfessionalQuery,
) -> Result<Vec<ProfessionalMatch>, SearchError> {
    check_coordinate(query.lat, query.lng)?;

    let mut matches: Vec<ProfessionalMatch> = professionals
        .iter()
        .filter(|p| p.profession == query.profession)
        .map(|p| ProfessionalMatch {
            id: p.id,
            name: p.name.clone(),
            profession: p.profession.clone(),
            distance_km: round_km(haversine_km(query.lat, query.lng, p.lat, p.lng)),
        })
        .collect();

    matches.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    Ok(matches)
}
