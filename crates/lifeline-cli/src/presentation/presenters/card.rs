use crate::presentation::view_models::{
    AllergyViewModel, CallModalViewModel, CardViewModel, CommandResultViewModel,
    ContactCardViewModel, EmailViewModel, Guidance, MedicalViewModel, NotesViewModel,
    ProfileViewModel, ProviderViewModel, ServiceCardViewModel,
};
use lifeline_core::{
    contact_badge_label, contact_card_style, format_birth_date, format_phone_number,
    service_call_label, service_card_style, tel_uri,
};
use lifeline_runtime::{CardSession, CardSource, Clock, Dialer, PrintSink};
use lifeline_store::KeyValueStore;
use lifeline_types::{AllergySeverity, Card, Contact, EmergencyService, PendingCall};

/// Snapshot a session into display state
pub fn present_card<S, D, P, C>(session: &CardSession<S, D, P, C>) -> CardViewModel
where
    S: KeyValueStore,
    D: Dialer,
    P: PrintSink,
    C: Clock,
{
    build_card_view(
        session.card(),
        session.age(),
        session.last_updated(),
        session.pending_call(),
    )
}

pub fn build_card_view(
    card: &Card,
    age: i32,
    last_updated: &str,
    pending: Option<&PendingCall>,
) -> CardViewModel {
    let profile = &card.profile;
    let medical = &card.medical;

    CardViewModel {
        profile: ProfileViewModel {
            name: profile.name.clone(),
            birth_date: format_birth_date(profile.birth_date),
            age,
            blood_type: profile.blood_type.clone(),
            address: profile.address.clone(),
            insurance: profile.insurance.clone(),
            photo_url: profile.photo_url.clone(),
            emails: profile
                .emails
                .iter()
                .map(|e| EmailViewModel {
                    label: e.label.clone(),
                    address: e.address.clone(),
                })
                .collect(),
        },
        medical: MedicalViewModel {
            allergies: medical
                .allergies
                .iter()
                .map(|a| AllergyViewModel {
                    text: a.text.clone(),
                    severe: a.severity == AllergySeverity::Severe,
                })
                .collect(),
            medications: medical.medications.clone(),
            conditions: medical.conditions.clone(),
            provider: medical.provider.as_ref().map(|p| ProviderViewModel {
                name: p.name.clone(),
                phone: p.phone.clone(),
                phone_display: format_phone_number(&p.phone),
                tel_uri: tel_uri(&p.phone),
                organization: p.organization.clone(),
                address: p.address.clone(),
            }),
        },
        contacts: card.contacts.iter().map(present_contact).collect(),
        services: card.services.iter().map(present_service).collect(),
        notes: NotesViewModel {
            special_instructions: card.notes.special_instructions.clone(),
            access_information: card.notes.access_information.clone(),
        },
        last_updated: last_updated.to_string(),
        modal: pending.map(present_modal),
    }
}

fn present_contact(contact: &Contact) -> ContactCardViewModel {
    ContactCardViewModel {
        name: contact.name.clone(),
        relationship: contact.relationship.clone(),
        phone: contact.phone.clone(),
        phone_display: format_phone_number(&contact.phone),
        tel_uri: tel_uri(&contact.phone),
        details: contact.details.lines().map(str::to_string).collect(),
        category: contact.category,
        badge: contact_badge_label(contact.category).to_string(),
        style: contact_card_style(contact.category),
    }
}

fn present_service(service: &EmergencyService) -> ServiceCardViewModel {
    ServiceCardViewModel {
        name: service.name.clone(),
        number: service.number.clone(),
        number_display: format_phone_number(&service.number),
        tel_uri: tel_uri(&service.number),
        description: service.description.clone(),
        category: service.category,
        call_label: service_call_label(service.category).to_string(),
        style: service_card_style(service.category),
    }
}

pub fn present_modal(pending: &PendingCall) -> CallModalViewModel {
    CallModalViewModel {
        display_name: pending.display_name.clone(),
        phone: pending.phone.clone(),
        phone_display: format_phone_number(&pending.phone),
    }
}

pub fn present_show(
    card: CardViewModel,
    source: &CardSource,
) -> CommandResultViewModel<CardViewModel> {
    let result = CommandResultViewModel::new(card);

    match source {
        CardSource::BuiltIn => result.with_suggestion(
            Guidance::new("This is the built-in sample card; write your own")
                .with_command("lifeline init"),
        ),
        CardSource::Explicit(_) | CardSource::DataDir(_) => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifeline_core::Tone;
    use lifeline_runtime::CardConfig;
    use lifeline_types::ContactCategory;

    fn sample() -> Card {
        CardConfig::built_in().unwrap()
    }

    #[test]
    fn test_contacts_carry_formatted_numbers_and_styles() {
        let vm = build_card_view(&sample(), 39, "June 1, 2024, 12:00 PM", None);

        let primary = &vm.contacts[0];
        assert_eq!(primary.name, "David Johnson");
        assert_eq!(primary.phone_display, "+1 (555) 345-6789");
        assert_eq!(primary.tel_uri, "tel:+15553456789");
        assert_eq!(primary.category, ContactCategory::Primary);
        assert_eq!(primary.badge, "Primary Contact");
        assert_eq!(primary.style.tone, Tone::Emerald);
    }

    #[test]
    fn test_multiline_details_are_split() {
        let vm = build_card_view(&sample(), 39, "", None);
        let work = vm
            .contacts
            .iter()
            .find(|c| c.category == ContactCategory::Work)
            .unwrap();
        assert_eq!(work.details, vec!["TechCorp Solutions", "Mon-Fri 8AM-6PM"]);
    }

    #[test]
    fn test_services_keep_911_and_label_calls() {
        let vm = build_card_view(&sample(), 39, "", None);

        assert_eq!(vm.services[0].number_display, "911");
        assert_eq!(vm.services[0].call_label, "🚨 Call 911");
        assert!(vm.services[0].style.emphasized);
        assert_eq!(vm.services[1].number_display, "+1 (800) 222-1222");
        assert_eq!(vm.target_count(), 7);
    }

    #[test]
    fn test_modal_follows_pending_call() {
        let card = sample();
        assert!(build_card_view(&card, 39, "", None).modal.is_none());

        let pending = PendingCall::new("911", "Emergency");
        let vm = build_card_view(&card, 39, "", Some(&pending));
        assert_eq!(
            vm.modal,
            Some(CallModalViewModel {
                display_name: "Emergency".to_string(),
                phone: "911".to_string(),
                phone_display: "911".to_string(),
            })
        );
    }

    #[test]
    fn test_profile_and_medical() {
        let vm = build_card_view(&sample(), 39, "", None);

        assert_eq!(vm.profile.birth_date, "March 15, 1985");
        assert_eq!(vm.profile.age, 39);
        assert_eq!(vm.medical.allergies.iter().filter(|a| a.severe).count(), 2);
        let provider = vm.medical.provider.unwrap();
        assert_eq!(provider.phone_display, "+1 (555) 234-5678");
    }

    #[test]
    fn test_show_suggests_init_only_for_built_in_card() {
        let vm = build_card_view(&sample(), 39, "", None);
        let result = present_show(vm.clone(), &CardSource::BuiltIn);
        assert_eq!(result.suggestions.len(), 1);

        let result = present_show(vm, &CardSource::DataDir("card.toml".into()));
        assert!(result.suggestions.is_empty());
    }
}
