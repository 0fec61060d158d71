use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Relationship category of a personal contact, used for display grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactCategory {
    Primary,
    Secondary,
    Family,
    Work,
}

impl ContactCategory {
    pub const ALL: [ContactCategory; 4] = [
        ContactCategory::Primary,
        ContactCategory::Secondary,
        ContactCategory::Family,
        ContactCategory::Work,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactCategory::Primary => "primary",
            ContactCategory::Secondary => "secondary",
            ContactCategory::Family => "family",
            ContactCategory::Work => "work",
        }
    }
}

impl fmt::Display for ContactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactCategory {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            "family" => Ok(Self::Family),
            "work" => Ok(Self::Work),
            other => Err(Error::UnknownCategory {
                kind: "contact",
                tag: other.to_string(),
            }),
        }
    }
}

/// Kind of public emergency service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Emergency,
    Poison,
    Hospital,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 3] = [
        ServiceCategory::Emergency,
        ServiceCategory::Poison,
        ServiceCategory::Hospital,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Emergency => "emergency",
            ServiceCategory::Poison => "poison",
            ServiceCategory::Hospital => "hospital",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceCategory {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "emergency" => Ok(Self::Emergency),
            "poison" => Ok(Self::Poison),
            "hospital" => Ok(Self::Hospital),
            other => Err(Error::UnknownCategory {
                kind: "service",
                tag: other.to_string(),
            }),
        }
    }
}
