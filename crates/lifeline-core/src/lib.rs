pub mod format;
pub mod path;
pub mod style;

pub use format::{
    compute_age, format_birth_date, format_iso8601, format_last_updated, format_phone_number,
    tel_uri,
};
pub use path::{expand_tilde, resolve_workspace_path, Error, Result};
pub use style::{
    contact_badge_label, contact_card_style, contact_card_style_for_tag, service_call_label,
    service_card_style, service_card_style_for_tag, BorderWeight, StyleBundle, Tone,
};
