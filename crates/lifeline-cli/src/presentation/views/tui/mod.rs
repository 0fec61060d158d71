//! Ratatui widgets for the interactive card.
//!
//! Each widget borrows a view model and only maps it onto ratatui
//! primitives. Tone and status colours are translated here.

pub mod call_list;
pub mod modal;
pub mod notes;
pub mod profile;
pub mod status_bar;

pub use call_list::CallListView;
pub use modal::CallModalView;
pub use notes::NotesView;
pub use profile::ProfileView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use lifeline_core::Tone;
use ratatui::style::Color;

pub(crate) fn tone_to_color(tone: Tone) -> Color {
    match tone {
        Tone::Neutral => Color::Reset,
        Tone::Emerald => Color::Green,
        Tone::Blue => Color::Blue,
        Tone::Purple => Color::Magenta,
        Tone::Gray => Color::Gray,
        Tone::Red => Color::Red,
        Tone::Yellow => Color::Yellow,
        Tone::Sky => Color::Cyan,
    }
}

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::buffer::Buffer;

    /// Rows of a buffer as plain strings
    pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    pub fn buffer_text(buf: &Buffer) -> String {
        buffer_lines(buf).join("\n")
    }
}
