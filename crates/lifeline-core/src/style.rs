//! Category → presentation style selection.
//!
//! Every renderer (text, HTML, TUI) asks this module how a card should look,
//! so category styling lives in exactly one place.

use lifeline_types::{ContactCategory, ServiceCategory};
use serde::Serialize;

pub const CONTACT_CARD_BASE: &str = "p-6 rounded-2xl text-center transition-all duration-300 hover:transform hover:-translate-y-1 hover:shadow-xl relative";
pub const SERVICE_CARD_BASE: &str = "p-6 rounded-2xl text-center transition-all duration-300 hover:transform hover:-translate-y-1 hover:shadow-xl";

/// Semantic colour of a card; renderers map it to their own palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Neutral,
    Emerald,
    Blue,
    Purple,
    Gray,
    Red,
    Yellow,
    Sky,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderWeight {
    None,
    Regular,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleBundle {
    pub tone: Tone,
    pub border: BorderWeight,
    /// Draw attention (pulsing button, larger number)
    pub emphasized: bool,
    pub base_class: &'static str,
    pub accent_class: &'static str,
}

impl StyleBundle {
    /// Style used when a category cannot be resolved
    pub const fn neutral(base_class: &'static str) -> Self {
        Self {
            tone: Tone::Neutral,
            border: BorderWeight::None,
            emphasized: false,
            base_class,
            accent_class: "",
        }
    }

    /// Full HTML class attribute value
    pub fn class_list(&self) -> String {
        if self.accent_class.is_empty() {
            self.base_class.to_string()
        } else {
            format!("{} {}", self.base_class, self.accent_class)
        }
    }
}

pub fn contact_card_style(category: ContactCategory) -> StyleBundle {
    let (tone, border, accent_class) = match category {
        ContactCategory::Primary => (
            Tone::Emerald,
            BorderWeight::Heavy,
            "bg-gradient-to-br from-emerald-50 to-emerald-100 border-3 border-emerald-500",
        ),
        ContactCategory::Secondary => (
            Tone::Blue,
            BorderWeight::Regular,
            "bg-gradient-to-br from-blue-50 to-blue-100 border-2 border-blue-500",
        ),
        ContactCategory::Family => (
            Tone::Purple,
            BorderWeight::Regular,
            "bg-gradient-to-br from-purple-50 to-purple-100 border-2 border-purple-500",
        ),
        ContactCategory::Work => (
            Tone::Gray,
            BorderWeight::Regular,
            "bg-gradient-to-br from-gray-50 to-gray-100 border-2 border-gray-500",
        ),
    };

    StyleBundle {
        tone,
        border,
        emphasized: category == ContactCategory::Primary,
        base_class: CONTACT_CARD_BASE,
        accent_class,
    }
}

pub fn service_card_style(category: ServiceCategory) -> StyleBundle {
    let (tone, border, accent_class) = match category {
        ServiceCategory::Emergency => (
            Tone::Red,
            BorderWeight::Heavy,
            "bg-gradient-to-br from-red-100 to-red-200 border-3 border-red-600",
        ),
        ServiceCategory::Poison => (
            Tone::Yellow,
            BorderWeight::Regular,
            "bg-gradient-to-br from-yellow-100 to-yellow-200 border-2 border-yellow-500",
        ),
        ServiceCategory::Hospital => (
            Tone::Sky,
            BorderWeight::Regular,
            "bg-gradient-to-br from-sky-100 to-sky-200 border-2 border-sky-500",
        ),
    };

    StyleBundle {
        tone,
        border,
        emphasized: category == ServiceCategory::Emergency,
        base_class: SERVICE_CARD_BASE,
        accent_class,
    }
}

/// Tag-based lookup; unknown tags get the neutral contact style
pub fn contact_card_style_for_tag(tag: &str) -> StyleBundle {
    tag.parse::<ContactCategory>()
        .map(contact_card_style)
        .unwrap_or(StyleBundle::neutral(CONTACT_CARD_BASE))
}

/// Tag-based lookup; unknown tags get the neutral service style
pub fn service_card_style_for_tag(tag: &str) -> StyleBundle {
    tag.parse::<ServiceCategory>()
        .map(service_card_style)
        .unwrap_or(StyleBundle::neutral(SERVICE_CARD_BASE))
}

pub fn contact_badge_label(category: ContactCategory) -> &'static str {
    match category {
        ContactCategory::Primary => "Primary Contact",
        ContactCategory::Secondary => "Secondary Contact",
        ContactCategory::Family => "Family Contact",
        ContactCategory::Work => "Work Contact",
    }
}

pub fn service_call_label(category: ServiceCategory) -> &'static str {
    match category {
        ServiceCategory::Emergency => "🚨 Call 911",
        ServiceCategory::Poison => "☎️ Call Now",
        ServiceCategory::Hospital => "🏥 Call Hospital",
    }
}
