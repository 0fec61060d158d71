use std::fmt;

use crate::presentation::formatters::text::{dim, heading, paint, strong};
use crate::presentation::view_models::{
    CardViewModel, ColorMode, ContactCardViewModel, CreateView, ServiceCardViewModel,
};
use lifeline_core::Tone;

const LABEL_WIDTH: usize = 15;

impl CreateView for CardViewModel {
    fn create_view<'a>(&'a self, color: ColorMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(CardTextView { data: self, color })
    }
}

pub struct CardTextView<'a> {
    data: &'a CardViewModel,
    color: ColorMode,
}

impl<'a> CardTextView<'a> {
    pub fn new(data: &'a CardViewModel, color: ColorMode) -> Self {
        Self { data, color }
    }

    fn field(&self, f: &mut fmt::Formatter, label: &str, lines: &[String]) -> fmt::Result {
        let mut lines = lines.iter();
        let Some(first) = lines.next() else {
            return Ok(());
        };
        writeln!(f, "{}{}", dim(&format!("{:<LABEL_WIDTH$}", label), self.color), first)?;
        for line in lines {
            writeln!(f, "{:LABEL_WIDTH$}{}", "", line)?;
        }
        Ok(())
    }

    fn bullets(&self, f: &mut fmt::Formatter, title: &str, items: &[String]) -> fmt::Result {
        if items.is_empty() {
            return Ok(());
        }
        writeln!(f, "{}", strong(title, self.color))?;
        for item in items {
            writeln!(f, "  • {}", item)?;
        }
        Ok(())
    }

    fn contact(&self, f: &mut fmt::Formatter, contact: &ContactCardViewModel) -> fmt::Result {
        let tone = contact.style.tone;
        writeln!(
            f,
            "{} {} ({})",
            paint(&format!("[{}]", contact.badge), tone, self.color),
            strong(&contact.name, self.color),
            contact.relationship
        )?;
        writeln!(f, "  {}", paint(&contact.phone_display, tone, self.color))?;
        for line in &contact.details {
            writeln!(f, "  {}", dim(line, self.color))?;
        }
        Ok(())
    }

    fn service(&self, f: &mut fmt::Formatter, service: &ServiceCardViewModel) -> fmt::Result {
        let number = if service.style.emphasized {
            strong(&service.number_display, self.color)
        } else {
            service.number_display.clone()
        };
        writeln!(
            f,
            "{}  {}",
            paint(&service.name, service.style.tone, self.color),
            number
        )?;
        if !service.description.is_empty() {
            writeln!(f, "  {}", dim(&service.description, self.color))?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for CardTextView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let vm = self.data;
        let profile = &vm.profile;

        writeln!(
            f,
            "{}",
            paint("⚠️  EMERGENCY CONTACT INFORMATION", Tone::Red, self.color)
        )?;
        writeln!(f)?;
        writeln!(f, "{}", heading(&profile.name, self.color))?;
        self.field(
            f,
            "Date of Birth",
            &[format!("{} (Age: {})", profile.birth_date, profile.age)],
        )?;
        self.field(
            f,
            "Blood Type",
            &[paint(&profile.blood_type, Tone::Red, self.color)],
        )?;
        self.field(f, "Address", &profile.address)?;
        self.field(f, "Insurance", &profile.insurance)?;
        for email in &profile.emails {
            self.field(f, &email.label, std::slice::from_ref(&email.address))?;
        }

        let medical = &vm.medical;
        writeln!(f)?;
        writeln!(f, "{}", heading("Medical Information", self.color))?;
        if !medical.allergies.is_empty() {
            writeln!(f, "{}", strong("Critical Allergies", self.color))?;
            for allergy in &medical.allergies {
                let (marker, tone) = if allergy.severe {
                    ("!!", Tone::Red)
                } else {
                    ("! ", Tone::Yellow)
                };
                writeln!(
                    f,
                    "  {} {}",
                    paint(marker, tone, self.color),
                    allergy.text
                )?;
            }
        }
        self.bullets(f, "Current Medications", &medical.medications)?;
        self.bullets(f, "Medical Conditions", &medical.conditions)?;
        if let Some(provider) = &medical.provider {
            writeln!(f, "{}", strong("Healthcare Provider", self.color))?;
            writeln!(f, "  {}  {}", provider.name, provider.phone_display)?;
            for line in [&provider.organization, &provider.address] {
                if !line.is_empty() {
                    writeln!(f, "  {}", dim(line, self.color))?;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", heading("Emergency Contacts", self.color))?;
        for contact in &vm.contacts {
            self.contact(f, contact)?;
        }

        writeln!(f)?;
        writeln!(f, "{}", heading("Emergency Services", self.color))?;
        for service in &vm.services {
            self.service(f, service)?;
        }

        writeln!(f)?;
        writeln!(f, "{}", heading("Important Notes & Instructions", self.color))?;
        self.bullets(
            f,
            "Special Medical Instructions",
            &vm.notes.special_instructions,
        )?;
        self.bullets(f, "Access Information", &vm.notes.access_information)?;

        writeln!(f)?;
        writeln!(f, "{} {}", strong("Last Updated:", self.color), vm.last_updated)?;

        if let Some(modal) = &vm.modal {
            writeln!(f)?;
            writeln!(
                f,
                "Pending call: {} at {}",
                modal.display_name, modal.phone_display
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::build_card_view;
    use lifeline_runtime::CardConfig;

    fn render() -> String {
        let card = CardConfig::built_in().unwrap();
        let vm = build_card_view(&card, 39, "June 1, 2024, 12:00 PM", None);
        CardTextView::new(&vm, ColorMode::Never).to_string()
    }

    #[test]
    fn test_profile_block() {
        let text = render();
        assert!(text.contains("Date of Birth  March 15, 1985 (Age: 39)"));
        assert!(text.contains("Address        1247 Oak Street\n               San Francisco, CA 94102\n"));
        assert!(text.contains("Work Email     s.johnson@techcorp.com"));
    }

    #[test]
    fn test_contacts_and_services() {
        let text = render();
        assert!(text.contains("[Primary Contact] David Johnson (Husband)\n  +1 (555) 345-6789\n"));
        assert!(text.contains("  TechCorp Solutions\n  Mon-Fri 8AM-6PM\n"));
        assert!(text.contains("Emergency  911\n  Fire, Police, Ambulance\n"));
        assert!(text.contains("Poison Control  +1 (800) 222-1222"));
    }

    #[test]
    fn test_allergy_markers_and_footer() {
        let text = render();
        assert!(text.contains("  !! Penicillin - Severe reaction"));
        assert!(text.contains("  !  Shellfish - Moderate reaction"));
        assert!(text.ends_with("Last Updated: June 1, 2024, 12:00 PM\n"));
        assert!(!text.contains('\u{1b}'));
    }
}
