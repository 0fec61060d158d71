use lifeline_core::StyleBundle;
use lifeline_types::{ContactCategory, ServiceCategory};
use serde::Serialize;

/// Everything a surface needs to draw the card
#[derive(Debug, Clone, Serialize)]
pub struct CardViewModel {
    pub profile: ProfileViewModel,
    pub medical: MedicalViewModel,
    pub contacts: Vec<ContactCardViewModel>,
    pub services: Vec<ServiceCardViewModel>,
    pub notes: NotesViewModel,
    pub last_updated: String,
    /// Open confirmation, if a call was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modal: Option<CallModalViewModel>,
}

impl CardViewModel {
    /// Contacts then services, the order callable entries are listed in
    pub fn target_count(&self) -> usize {
        self.contacts.len() + self.services.len()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileViewModel {
    pub name: String,
    pub birth_date: String,
    pub age: i32,
    pub blood_type: String,
    pub address: Vec<String>,
    pub insurance: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub emails: Vec<EmailViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmailViewModel {
    pub label: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MedicalViewModel {
    pub allergies: Vec<AllergyViewModel>,
    pub medications: Vec<String>,
    pub conditions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AllergyViewModel {
    pub text: String,
    pub severe: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProviderViewModel {
    pub name: String,
    pub phone: String,
    pub phone_display: String,
    pub tel_uri: String,
    pub organization: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactCardViewModel {
    pub name: String,
    pub relationship: String,
    pub phone: String,
    pub phone_display: String,
    pub tel_uri: String,
    /// Details split on embedded line breaks
    pub details: Vec<String>,
    pub category: ContactCategory,
    pub badge: String,
    pub style: StyleBundle,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceCardViewModel {
    pub name: String,
    pub number: String,
    pub number_display: String,
    pub tel_uri: String,
    pub description: String,
    pub category: ServiceCategory,
    pub call_label: String,
    pub style: StyleBundle,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotesViewModel {
    pub special_instructions: Vec<String>,
    pub access_information: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallModalViewModel {
    pub display_name: String,
    pub phone: String,
    pub phone_display: String,
}
