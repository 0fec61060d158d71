use super::{ContactCategory, ServiceCategory};
use serde::{Deserialize, Serialize};

/// A person reachable by phone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub relationship: String,
    /// Raw phone string, any punctuation allowed
    pub phone: String,
    /// Free text, may contain embedded line breaks
    #[serde(default)]
    pub details: String,
    #[serde(alias = "type")]
    pub category: ContactCategory,
}

/// A fixed public service number (dispatch, poison control, hospital)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyService {
    pub name: String,
    pub number: String,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "type")]
    pub category: ServiceCategory,
}

/// Something on the card that can be called
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallTarget<'a> {
    Contact(&'a Contact),
    Service(&'a EmergencyService),
}

impl<'a> CallTarget<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            CallTarget::Contact(c) => &c.name,
            CallTarget::Service(s) => &s.name,
        }
    }

    pub fn phone(&self) -> &'a str {
        match self {
            CallTarget::Contact(c) => &c.phone,
            CallTarget::Service(s) => &s.number,
        }
    }
}
