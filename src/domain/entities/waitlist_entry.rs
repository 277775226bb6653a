use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Gender options offered on the waitlist form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
    PreferNotToSay,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NonBinary => "Non-binary",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }
}

/// What the person hopes to find on the platform.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LookingFor {
    SeriousRelationship,
    CasualDating,
    Friendship,
    Marriage,
    Networking,
    Exploring,
}

impl LookingFor {
    pub fn label(&self) -> &'static str {
        match self {
            LookingFor::SeriousRelationship => "Serious Relationship",
            LookingFor::CasualDating => "Casual Dating",
            LookingFor::Friendship => "Friendship",
            LookingFor::Marriage => "Marriage",
            LookingFor::Networking => "Professional Networking",
            LookingFor::Exploring => "Still Exploring",
        }
    }
}

/// A single pre-launch signup as stored in the waitlist collection.
#[derive(Debug, Clone, PartialEq)]
pub struct WaitlistEntry {
    pub email: String,
    pub full_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: String,
    pub city: String,
    pub state: String,
    pub gender: String,
    pub looking_for: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
