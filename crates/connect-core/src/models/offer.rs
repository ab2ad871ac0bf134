use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::require;

/// Resources or assistance a helper can provide.
///
/// This is the stored record shape. `help_type` and `contact_method` are kept
/// as plain strings so whatever was stored reads back unchanged; the closed
/// vocabularies live in [`HelpType`] and [`ContactMethod`] and are enforced by
/// [`HelpOffer::validate`] at intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HelpOffer {
    pub name: String,
    pub location: String,
    pub help_type: String,
    pub capacity: String,
    pub timeframe: String,
    pub contact_method: String,
    pub contact_details: String,
    #[serde(default)]
    pub message: String,
}

impl HelpOffer {
    /// Intake checks: every field but `message` is required, and the two
    /// enum-like fields must name a known value.
    pub fn validate(&self) -> Result<(), CoreError> {
        require("name", &self.name)?;
        require("location", &self.location)?;
        require("helpType", &self.help_type)?;
        require("capacity", &self.capacity)?;
        require("timeframe", &self.timeframe)?;
        require("contactMethod", &self.contact_method)?;
        require("contactDetails", &self.contact_details)?;

        self.help_type.parse::<HelpType>()?;
        self.contact_method.parse::<ContactMethod>()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum HelpType {
    Food,
    Water,
    Transportation,
    Funds,
    Medical,
    Shelter,
    Clothing,
    Volunteer,
    Other,
}

impl HelpType {
    pub const ALL: [HelpType; 9] = [
        HelpType::Food,
        HelpType::Water,
        HelpType::Transportation,
        HelpType::Funds,
        HelpType::Medical,
        HelpType::Shelter,
        HelpType::Clothing,
        HelpType::Volunteer,
        HelpType::Other,
    ];

    /// The value stored in `HelpOffer::help_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            HelpType::Food => "food",
            HelpType::Water => "water",
            HelpType::Transportation => "transportation",
            HelpType::Funds => "funds",
            HelpType::Medical => "medical",
            HelpType::Shelter => "shelter",
            HelpType::Clothing => "clothing",
            HelpType::Volunteer => "volunteer",
            HelpType::Other => "other",
        }
    }

    /// Human-readable label shown next to the value.
    pub fn label(self) -> &'static str {
        match self {
            HelpType::Food => "Food Supplies",
            HelpType::Water => "Water",
            HelpType::Transportation => "Transportation",
            HelpType::Funds => "Financial Support",
            HelpType::Medical => "Medical Aid",
            HelpType::Shelter => "Shelter",
            HelpType::Clothing => "Clothing",
            HelpType::Volunteer => "Volunteer Time",
            HelpType::Other => "Other",
        }
    }
}

impl fmt::Display for HelpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HelpType {
    type Err = CoreError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        HelpType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::InvalidHelpType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ContactMethod {
    Phone,
    Whatsapp,
    Email,
}

impl ContactMethod {
    pub const ALL: [ContactMethod; 3] = [
        ContactMethod::Phone,
        ContactMethod::Whatsapp,
        ContactMethod::Email,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactMethod::Phone => "phone",
            ContactMethod::Whatsapp => "whatsapp",
            ContactMethod::Email => "email",
        }
    }
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ContactMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::InvalidContactMethod(s.to_string()))
    }
}

/// A help type paired with its label, for listing the categories.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HelpTypeOption {
    pub value: String,
    pub label: String,
}

impl From<HelpType> for HelpTypeOption {
    fn from(t: HelpType) -> Self {
        Self {
            value: t.as_str().to_string(),
            label: t.label().to_string(),
        }
    }
}
