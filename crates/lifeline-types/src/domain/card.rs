use super::{CallTarget, Contact, EmergencyService, Medical, Profile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Notes {
    #[serde(default)]
    pub special_instructions: Vec<String>,
    #[serde(default)]
    pub access_information: Vec<String>,
}

/// The whole static payload rendered by the card.
///
/// Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub profile: Profile,
    pub medical: Medical,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub services: Vec<EmergencyService>,
    #[serde(default)]
    pub notes: Notes,
}

impl Card {
    /// Every callable entry, contacts first, in card order
    pub fn call_targets(&self) -> Vec<CallTarget<'_>> {
        self.contacts
            .iter()
            .map(CallTarget::Contact)
            .chain(self.services.iter().map(CallTarget::Service))
            .collect()
    }

    /// Case-insensitive lookup by display name; contacts win over services
    pub fn find_target(&self, name: &str) -> Option<CallTarget<'_>> {
        let needle = name.trim().to_lowercase();
        self.call_targets()
            .into_iter()
            .find(|target| target.name().to_lowercase() == needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ContactCategory, ServiceCategory};
    use chrono::NaiveDate;

    fn card() -> Card {
        Card {
            profile: Profile {
                name: "Test Person".to_string(),
                birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
                blood_type: "A-".to_string(),
                address: vec![],
                insurance: vec![],
                photo_url: None,
                emails: vec![],
            },
            medical: Medical {
                allergies: vec![],
                medications: vec![],
                conditions: vec![],
                provider: None,
            },
            contacts: vec![Contact {
                name: "Emergency".to_string(),
                relationship: "Nickname".to_string(),
                phone: "5551234567".to_string(),
                details: String::new(),
                category: ContactCategory::Family,
            }],
            services: vec![
                EmergencyService {
                    name: "Emergency".to_string(),
                    number: "911".to_string(),
                    description: String::new(),
                    category: ServiceCategory::Emergency,
                },
                EmergencyService {
                    name: "Poison Control".to_string(),
                    number: "18002221222".to_string(),
                    description: String::new(),
                    category: ServiceCategory::Poison,
                },
            ],
            notes: Notes::default(),
        }
    }

    #[test]
    fn test_call_targets_order() {
        let card = card();
        let names: Vec<_> = card.call_targets().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Emergency", "Emergency", "Poison Control"]);
    }

    #[test]
    fn test_find_target_case_insensitive() {
        let card = card();
        let target = card.find_target("  poison control ").unwrap();
        assert_eq!(target.phone(), "18002221222");
    }

    #[test]
    fn test_find_target_prefers_contacts() {
        let card = card();
        let target = card.find_target("emergency").unwrap();
        assert!(matches!(target, CallTarget::Contact(_)));
        assert_eq!(target.phone(), "5551234567");
    }

    #[test]
    fn test_find_target_missing() {
        assert!(card().find_target("Nobody").is_none());
    }
}
