use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::require;

/// Something that needs doing, posted with an optional budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Errand {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Budget in Australian dollars.
    pub budget_aud: Option<f64>,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewErrand {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub budget_aud: Option<f64>,
}

impl NewErrand {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("title", &self.title)?;
        match self.budget_aud {
            Some(budget) if !(budget.is_finite() && budget >= 0.0) => {
                Err(CoreError::InvalidBudget(budget.to_string()))
            }
            _ => Ok(()),
        }
    }

    /// Stamp a fresh id and creation time.
    pub fn into_errand(self) -> Errand {
        Errand {
            id: Uuid::new_v4(),
            title: self.title,
            description: self.description,
            budget_aud: self.budget_aud,
            created_at: jiff::Timestamp::now(),
        }
    }
}
