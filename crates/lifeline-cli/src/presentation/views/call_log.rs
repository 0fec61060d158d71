use std::fmt;

use crate::presentation::formatters::text::dim;
use crate::presentation::view_models::{CallLogViewModel, ColorMode, CreateView};
use lifeline_core::format_phone_number;

impl CreateView for CallLogViewModel {
    fn create_view<'a>(&'a self, color: ColorMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(CallLogView { data: self, color })
    }
}

struct CallLogView<'a> {
    data: &'a CallLogViewModel,
    color: ColorMode,
}

impl<'a> fmt::Display for CallLogView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.entries.is_empty() {
            return writeln!(f, "No calls recorded.");
        }

        let name_width = self
            .data
            .entries
            .iter()
            .map(|e| e.contact_name.chars().count())
            .max()
            .unwrap_or(0);

        for entry in &self.data.entries {
            writeln!(
                f,
                "{}  {:<name_width$}  {}",
                dim(&entry.timestamp, self.color),
                entry.contact_name,
                format_phone_number(&entry.phone_number)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifeline_types::CallLogEntry;

    #[test]
    fn test_columns_align_on_longest_name() {
        let vm = CallLogViewModel {
            entries: vec![
                CallLogEntry::new("+15553456789", "David Johnson", "2024-06-01T12:00:00.000Z"),
                CallLogEntry::new("911", "Emergency", "2024-06-01T12:05:00.000Z"),
            ],
            total: 2,
        };

        let text = vm.create_view(ColorMode::Never).to_string();
        insta::assert_snapshot!(text, @r"
        2024-06-01T12:00:00.000Z  David Johnson  +1 (555) 345-6789
        2024-06-01T12:05:00.000Z  Emergency      911
        ");
    }

    #[test]
    fn test_empty_log() {
        let vm = CallLogViewModel {
            entries: Vec::new(),
            total: 0,
        };
        assert_eq!(vm.create_view(ColorMode::Never).to_string(), "No calls recorded.\n");
    }
}
