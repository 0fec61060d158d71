use serde::{Deserialize, Serialize};

/// Constant `type` tag written on every call-log record
pub const EMERGENCY_CALL_KIND: &str = "emergency_call";

/// A call the user has requested but not yet confirmed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCall {
    pub phone: String,
    pub display_name: String,
}

impl PendingCall {
    pub fn new(phone: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            display_name: display_name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CallKind {
    #[default]
    #[serde(rename = "emergency_call")]
    EmergencyCall,
}

impl CallKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallKind::EmergencyCall => EMERGENCY_CALL_KIND,
        }
    }
}

/// Immutable record of a confirmed call.
///
/// Field names match the persisted layout: `phoneNumber`, `contactName`,
/// `timestamp` (ISO-8601) and `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallLogEntry {
    pub phone_number: String,
    pub contact_name: String,
    pub timestamp: String,
    #[serde(rename = "type", default)]
    pub kind: CallKind,
}

impl CallLogEntry {
    pub fn new(
        phone_number: impl Into<String>,
        contact_name: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            phone_number: phone_number.into(),
            contact_name: contact_name.into(),
            timestamp: timestamp.into(),
            kind: CallKind::EmergencyCall,
        }
    }
}
