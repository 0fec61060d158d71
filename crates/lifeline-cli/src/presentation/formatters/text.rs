use crate::presentation::view_models::ColorMode;
use lifeline_core::Tone;
use owo_colors::{AnsiColors, OwoColorize};

/// Terminal colour for a card tone; `Neutral` stays uncoloured
pub fn ansi_color(tone: Tone) -> Option<AnsiColors> {
    match tone {
        Tone::Neutral => None,
        Tone::Emerald => Some(AnsiColors::Green),
        Tone::Blue => Some(AnsiColors::Blue),
        Tone::Purple => Some(AnsiColors::Magenta),
        Tone::Gray => Some(AnsiColors::BrightBlack),
        Tone::Red => Some(AnsiColors::Red),
        Tone::Yellow => Some(AnsiColors::Yellow),
        Tone::Sky => Some(AnsiColors::Cyan),
    }
}

pub fn paint(text: &str, tone: Tone, color: ColorMode) -> String {
    match (color.enabled(), ansi_color(tone)) {
        (true, Some(c)) => text.color(c).to_string(),
        _ => text.to_string(),
    }
}

pub fn strong(text: &str, color: ColorMode) -> String {
    if color.enabled() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn dim(text: &str, color: ColorMode) -> String {
    if color.enabled() {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

/// Heading with an underline of matching width
pub fn heading(title: &str, color: ColorMode) -> String {
    let rule = "─".repeat(title.chars().count());
    format!("{}\n{}", strong(title, color), dim(&rule, color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_mode_never_emits_escapes() {
        assert_eq!(paint("911", Tone::Red, ColorMode::Never), "911");
        assert_eq!(strong("Name", ColorMode::Never), "Name");
    }

    #[test]
    fn test_neutral_tone_is_uncoloured() {
        assert_eq!(paint("x", Tone::Neutral, ColorMode::Always), "x");
        assert!(paint("x", Tone::Red, ColorMode::Always).contains('\u{1b}'));
    }

    #[test]
    fn test_heading_rule_matches_width() {
        assert_eq!(heading("Notes", ColorMode::Never), "Notes\n─────");
    }
}
