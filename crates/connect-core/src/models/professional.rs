use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::geo::check_coordinate;
use crate::models::require;

/// A professional who has gone "available" at a known position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Professional {
    pub id: u64,
    pub name: String,
    pub profession: String,
    pub lat: f64,
    pub lng: f64,
}

/// Registration payload; the registry assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProfessional {
    pub name: String,
    pub profession: String,
    pub lat: f64,
    pub lng: f64,
}

impl NewProfessional {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("name", &self.name)?;
        require("profession", &self.profession)?;
        check_coordinate(self.lat, self.lng)
    }

    pub fn with_id(self, id: u64) -> Professional {
        Professional {
            id,
            name: self.name,
            profession: self.profession,
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// A search hit, nearest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfessionalMatch {
    pub id: u64,
    pub name: String,
    pub profession: String,
    pub distance_km: f64,
}
