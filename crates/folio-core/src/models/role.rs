use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// User role within the portfolio system.
///
/// Stored as a snake_case string on the user document. A document with a
/// missing or unrecognized role deserializes to `Student` - the default is
/// "least privilege", not "denied".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Student,
    ClubLead,
    Faculty,
    Admin,
}

impl Role {
    /// Convert to document string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::ClubLead => "club_lead",
            Self::Faculty => "faculty",
            Self::Admin => "admin",
        }
    }

    pub fn is_student(&self) -> bool {
        *self == Self::Student
    }

    pub fn is_club_lead(&self) -> bool {
        *self == Self::ClubLead
    }

    pub fn is_faculty(&self) -> bool {
        *self == Self::Faculty
    }

    pub fn is_admin(&self) -> bool {
        *self == Self::Admin
    }

    /// Whether this role may approve or reject submitted activities.
    pub fn can_verify(&self) -> bool {
        matches!(self, Self::ClubLead | Self::Faculty | Self::Admin)
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "student" => Ok(Self::Student),
            "club_lead" => Ok(Self::ClubLead),
            "faculty" => Ok(Self::Faculty),
            "admin" => Ok(Self::Admin),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Unknown role strings in stored documents fall back to Student
        // rather than poisoning the whole document read.
        let s = String::deserialize(deserializer)?;
        Ok(Role::from_str(&s).unwrap_or_default())
    }
}
