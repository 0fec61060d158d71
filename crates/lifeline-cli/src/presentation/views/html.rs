//! Static HTML page.
//!
//! Card classes come straight from the style bundles, so the page matches the
//! category colours the other surfaces use. The only script is the call
//! confirmation, which reads `data-*` attributes and never touches storage.

use std::fmt;

use crate::presentation::formatters::html::{escape, lines_with_breaks};
use crate::presentation::view_models::{
    CardViewModel, ContactCardViewModel, ProfileViewModel, ServiceCardViewModel,
};

const SECTION_CLASS: &str = "bg-white rounded-3xl p-8 shadow-xl border border-slate-200";
const SECTION_TITLE_CLASS: &str = "flex items-center gap-3 text-2xl font-bold mb-6 text-gray-800";
const CALL_BUTTON_CLASS: &str = "block w-full py-2 px-4 rounded-lg font-bold text-white";

const CONFIRM_SCRIPT: &str = r#"<script>
document.querySelectorAll('[data-call-phone]').forEach(function (el) {
  el.addEventListener('click', function (event) {
    var name = el.getAttribute('data-call-name');
    var shown = el.getAttribute('data-call-display');
    if (!window.confirm('Calling ' + name + '\n' + shown)) {
      event.preventDefault();
    }
  });
});
</script>"#;

pub struct HtmlPageView<'a> {
    data: &'a CardViewModel,
}

impl<'a> HtmlPageView<'a> {
    pub fn new(data: &'a CardViewModel) -> Self {
        Self { data }
    }

    fn header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            r#"<header class="bg-gradient-to-r from-red-600 to-red-700 text-white py-6 shadow-lg">"#
        )?;
        writeln!(f, r#"  <div class="max-w-6xl mx-auto px-4 flex items-center gap-4">"#)?;
        writeln!(f, r#"    <div class="text-4xl">⚠️</div>"#)?;
        writeln!(
            f,
            r#"    <div><h1 class="text-2xl md:text-3xl font-bold">EMERGENCY CONTACT INFORMATION</h1>"#
        )?;
        writeln!(
            f,
            r#"    <p class="text-red-200 font-medium">Keep this information accessible at all times</p></div>"#
        )?;
        writeln!(f, "  </div>")?;
        writeln!(f, "</header>")
    }

    fn profile(&self, f: &mut fmt::Formatter, profile: &ProfileViewModel) -> fmt::Result {
        writeln!(f, r#"<section class="{}">"#, SECTION_CLASS)?;
        writeln!(f, r#"  <div class="grid md:grid-cols-[auto_1fr] gap-8 items-start">"#)?;
        if let Some(url) = &profile.photo_url {
            writeln!(
                f,
                r#"    <img src="{}" alt="{} - Emergency Contact Photo" class="w-48 h-48 rounded-3xl object-cover shadow-lg border-4 border-blue-100">"#,
                escape(url),
                escape(&profile.name)
            )?;
        }
        writeln!(f, "    <div>")?;
        writeln!(
            f,
            r#"      <h2 class="text-4xl font-bold text-gray-800 mb-6">{}</h2>"#,
            escape(&profile.name)
        )?;
        writeln!(f, r#"      <div class="grid md:grid-cols-2 gap-6">"#)?;
        let dob = format!("{} (Age: {})", profile.birth_date, profile.age);
        profile_fact(f, "📅", "Date of Birth", &escape(&dob), "border-blue-500")?;
        profile_fact(
            f,
            "🩸",
            "Blood Type",
            &format!(r#"<span class="text-red-600">{}</span>"#, escape(&profile.blood_type)),
            "border-red-500",
        )?;
        profile_fact(
            f,
            "📍",
            "Address",
            &lines_with_breaks(&profile.address),
            "border-blue-500",
        )?;
        profile_fact(
            f,
            "💳",
            "Insurance",
            &lines_with_breaks(&profile.insurance),
            "border-blue-500",
        )?;
        writeln!(f, "      </div>")?;
        writeln!(f, "    </div>")?;
        writeln!(f, "  </div>")?;
        writeln!(f, "</section>")
    }

    fn contacts(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, r#"<section class="{}">"#, SECTION_CLASS)?;
        writeln!(f, r#"  <h3 class="{}">📞 Contact Information</h3>"#, SECTION_TITLE_CLASS)?;
        writeln!(f, r#"  <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6 mb-6">"#)?;
        for contact in &self.data.contacts {
            contact_card(f, contact)?;
        }
        writeln!(f, "  </div>")?;

        let emails = &self.data.profile.emails;
        if !emails.is_empty() {
            writeln!(f, r#"  <div class="p-4 bg-slate-50 rounded-xl text-center space-y-2">"#)?;
            for email in emails {
                writeln!(
                    f,
                    r#"    <p><strong>{}:</strong> <a href="mailto:{}" class="text-blue-600 font-semibold">{}</a></p>"#,
                    escape(&email.label),
                    escape(&email.address),
                    escape(&email.address)
                )?;
            }
            writeln!(f, "  </div>")?;
        }
        writeln!(f, "</section>")
    }

    fn medical(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let medical = &self.data.medical;
        writeln!(f, r#"<section class="{}">"#, SECTION_CLASS)?;
        writeln!(f, r#"  <h3 class="{}">❤️ Medical Information</h3>"#, SECTION_TITLE_CLASS)?;
        writeln!(f, r#"  <div class="grid md:grid-cols-2 gap-6">"#)?;

        panel_open(f, "from-red-50 to-red-100 border-2 border-red-500", "Critical Allergies")?;
        for allergy in &medical.allergies {
            let class = if allergy.severe {
                "text-red-700 font-bold"
            } else {
                "text-orange-600 font-semibold"
            };
            writeln!(f, r#"        <li class="{}">{}</li>"#, class, escape(&allergy.text))?;
        }
        panel_close(f)?;

        list_panel(
            f,
            "from-orange-50 to-orange-100 border-2 border-orange-500",
            "💊 Current Medications",
            &medical.medications,
        )?;
        list_panel(
            f,
            "from-yellow-50 to-yellow-100 border-2 border-yellow-500",
            "🏥 Medical Conditions",
            &medical.conditions,
        )?;

        if let Some(provider) = &medical.provider {
            writeln!(
                f,
                r#"    <div class="p-6 bg-gradient-to-br from-sky-50 to-sky-100 rounded-2xl border-2 border-sky-500 text-center">"#
            )?;
            writeln!(f, r#"      <h4 class="font-bold text-lg mb-4">Healthcare Provider</h4>"#)?;
            writeln!(f, r#"      <p class="font-bold text-lg mb-2">{}</p>"#, escape(&provider.name))?;
            writeln!(
                f,
                r#"      <a href="{}" class="block text-xl font-bold text-sky-600 mb-2">{}</a>"#,
                escape(&provider.tel_uri),
                escape(&provider.phone_display)
            )?;
            for line in [&provider.organization, &provider.address] {
                if !line.is_empty() {
                    writeln!(f, r#"      <p class="text-sm text-slate-600">{}</p>"#, escape(line))?;
                }
            }
            writeln!(f, "    </div>")?;
        }

        writeln!(f, "  </div>")?;
        writeln!(f, "</section>")
    }

    fn services(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, r#"<section class="{}">"#, SECTION_CLASS)?;
        writeln!(f, r#"  <h3 class="{}">🚨 Emergency Services</h3>"#, SECTION_TITLE_CLASS)?;
        writeln!(f, r#"  <div class="grid md:grid-cols-3 gap-6">"#)?;
        for service in &self.data.services {
            service_card(f, service)?;
        }
        writeln!(f, "  </div>")?;
        writeln!(f, "</section>")
    }

    fn notes(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let notes = &self.data.notes;
        writeln!(f, r#"<section class="{}">"#, SECTION_CLASS)?;
        writeln!(
            f,
            r#"  <h3 class="{}">📋 Important Notes &amp; Instructions</h3>"#,
            SECTION_TITLE_CLASS
        )?;
        writeln!(f, r#"  <div class="space-y-6">"#)?;
        list_panel(
            f,
            "from-red-50 to-red-100 border-l-4 border-red-600",
            "🔴 Special Medical Instructions",
            &notes.special_instructions,
        )?;
        list_panel(
            f,
            "from-sky-50 to-sky-100 border-l-4 border-sky-600",
            "🏠 Access Information",
            &notes.access_information,
        )?;
        writeln!(
            f,
            r#"    <div class="p-6 bg-gradient-to-br from-gray-50 to-gray-100 rounded-2xl border-l-4 border-gray-600 text-center">"#
        )?;
        writeln!(
            f,
            r#"      <p><strong>Last Updated:</strong> {}</p>"#,
            escape(&self.data.last_updated)
        )?;
        writeln!(f, "    </div>")?;
        writeln!(f, "  </div>")?;
        writeln!(f, "</section>")
    }
}

impl<'a> fmt::Display for HtmlPageView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, r#"<html lang="en">"#)?;
        writeln!(f, "<head>")?;
        writeln!(f, r#"<meta charset="utf-8">"#)?;
        writeln!(
            f,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#
        )?;
        writeln!(
            f,
            "<title>Emergency Contact: {}</title>",
            escape(&self.data.profile.name)
        )?;
        writeln!(f, r#"<script src="https://cdn.tailwindcss.com"></script>"#)?;
        writeln!(f, "</head>")?;
        writeln!(
            f,
            r#"<body class="min-h-screen bg-gradient-to-br from-blue-50 to-purple-100">"#
        )?;
        self.header(f)?;
        writeln!(f, r#"<main class="max-w-6xl mx-auto px-4 py-8 space-y-8">"#)?;
        self.profile(f, &self.data.profile)?;
        self.contacts(f)?;
        self.medical(f)?;
        self.services(f)?;
        self.notes(f)?;
        writeln!(f, "</main>")?;
        writeln!(f, "{}", CONFIRM_SCRIPT)?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

fn profile_fact(
    f: &mut fmt::Formatter,
    icon: &str,
    label: &str,
    value_html: &str,
    border: &str,
) -> fmt::Result {
    writeln!(
        f,
        r#"        <div class="flex items-start gap-4 p-4 bg-slate-50 rounded-xl border-l-4 {}">"#,
        border
    )?;
    writeln!(f, r#"          <div class="text-xl">{}</div>"#, icon)?;
    writeln!(
        f,
        r#"          <div><span class="block text-sm text-slate-600 font-medium">{}</span><span class="font-semibold">{}</span></div>"#,
        label, value_html
    )?;
    writeln!(f, "        </div>")
}

fn contact_card(f: &mut fmt::Formatter, contact: &ContactCardViewModel) -> fmt::Result {
    writeln!(
        f,
        r#"    <div class="{}" data-category="{}">"#,
        contact.style.class_list(),
        contact.category
    )?;
    writeln!(
        f,
        r#"      <div class="absolute -top-3 left-1/2 transform -translate-x-1/2 bg-gray-800 text-white px-3 py-1 rounded-full text-xs font-semibold">{}</div>"#,
        escape(&contact.badge)
    )?;
    writeln!(
        f,
        r#"      <h4 class="font-bold text-lg mt-4 mb-1">{}</h4>"#,
        escape(&contact.name)
    )?;
    writeln!(
        f,
        r#"      <p class="text-slate-600 italic mb-3">{}</p>"#,
        escape(&contact.relationship)
    )?;
    writeln!(
        f,
        r#"      <a href="{}" class="block text-xl font-bold mb-3">{}</a>"#,
        escape(&contact.tel_uri),
        escape(&contact.phone_display)
    )?;
    if !contact.details.is_empty() {
        writeln!(
            f,
            r#"      <p class="text-sm text-slate-600 mb-4">{}</p>"#,
            lines_with_breaks(&contact.details)
        )?;
    }
    call_button(
        f,
        &contact.tel_uri,
        &contact.name,
        &contact.phone_display,
        "bg-red-600",
        "🚨 Emergency Call",
    )?;
    writeln!(f, "    </div>")
}

fn service_card(f: &mut fmt::Formatter, service: &ServiceCardViewModel) -> fmt::Result {
    let (number_class, button_class) = if service.style.emphasized {
        ("text-4xl text-red-600", "bg-red-600 animate-pulse")
    } else {
        ("text-2xl", "bg-gray-800")
    };

    writeln!(
        f,
        r#"    <div class="{}" data-category="{}">"#,
        service.style.class_list(),
        service.category
    )?;
    writeln!(
        f,
        r#"      <h4 class="font-bold text-lg mb-3">{}</h4>"#,
        escape(&service.name)
    )?;
    writeln!(
        f,
        r#"      <a href="{}" class="block font-black mb-2 {}">{}</a>"#,
        escape(&service.tel_uri),
        number_class,
        escape(&service.number_display)
    )?;
    writeln!(
        f,
        r#"      <p class="text-sm text-slate-600 mb-4">{}</p>"#,
        escape(&service.description)
    )?;
    call_button(
        f,
        &service.tel_uri,
        &service.name,
        &service.number_display,
        button_class,
        &service.call_label,
    )?;
    writeln!(f, "    </div>")
}

fn call_button(
    f: &mut fmt::Formatter,
    tel_uri: &str,
    name: &str,
    shown: &str,
    colour_class: &str,
    label: &str,
) -> fmt::Result {
    writeln!(
        f,
        r#"      <a href="{}" class="{} {}" data-call-phone="{}" data-call-name="{}" data-call-display="{}">{}</a>"#,
        escape(tel_uri),
        CALL_BUTTON_CLASS,
        colour_class,
        escape(tel_uri),
        escape(name),
        escape(shown),
        escape(label)
    )
}

fn panel_open(f: &mut fmt::Formatter, class: &str, title: &str) -> fmt::Result {
    writeln!(
        f,
        r#"    <div class="p-6 bg-gradient-to-br {} rounded-2xl">"#,
        class
    )?;
    writeln!(f, r#"      <h4 class="font-bold text-lg mb-4">{}</h4>"#, title)?;
    writeln!(f, r#"      <ul class="space-y-2 text-sm">"#)
}

fn panel_close(f: &mut fmt::Formatter) -> fmt::Result {
    writeln!(f, "      </ul>")?;
    writeln!(f, "    </div>")
}

fn list_panel(f: &mut fmt::Formatter, class: &str, title: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    panel_open(f, class, title)?;
    for item in items {
        writeln!(f, r#"        <li class="font-medium">{}</li>"#, escape(item))?;
    }
    panel_close(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::build_card_view;
    use lifeline_runtime::CardConfig;

    fn render() -> String {
        let card = CardConfig::built_in().unwrap();
        let vm = build_card_view(&card, 39, "June 1, 2024, 12:00 PM", None);
        HtmlPageView::new(&vm).to_string()
    }

    #[test]
    fn test_page_is_a_complete_document() {
        let html = render();
        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(html.contains("<title>Emergency Contact: Sarah Johnson</title>"));
    }

    #[test]
    fn test_cards_use_category_classes() {
        let html = render();
        assert!(html.contains(
            "bg-gradient-to-br from-emerald-50 to-emerald-100 border-3 border-emerald-500\" data-category=\"primary\""
        ));
        assert!(html.contains(
            "from-red-100 to-red-200 border-3 border-red-600\" data-category=\"emergency\""
        ));
        assert!(html.contains(">Work Contact</div>"));
    }

    #[test]
    fn test_call_links_carry_confirmation_data() {
        let html = render();
        assert!(html.contains(
            r#"data-call-phone="tel:911" data-call-name="Emergency" data-call-display="911">🚨 Call 911</a>"#
        ));
        assert!(html.contains(r#"<a href="tel:+15553456789" class="block text-xl font-bold mb-3">+1 (555) 345-6789</a>"#));
    }

    #[test]
    fn test_text_is_escaped_and_multiline_details_break() {
        let html = render();
        assert!(html.contains("TechCorp Solutions<br />Mon-Fri 8AM-6PM"));
        assert!(html.contains("Important Notes &amp; Instructions"));
        assert!(html.contains("<p><strong>Last Updated:</strong> June 1, 2024, 12:00 PM</p>"));
    }
}
