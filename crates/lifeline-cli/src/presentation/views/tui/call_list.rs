use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::CardViewModel;

use super::tone_to_color;

/// Every callable entry, contacts then services, with a cursor
pub struct CallListView<'a> {
    model: &'a CardViewModel,
    selected: usize,
}

impl<'a> CallListView<'a> {
    pub fn new(model: &'a CardViewModel, selected: usize) -> Self {
        Self { model, selected }
    }

    fn entry_line(&self, index: usize, tag: &str, name: &str, phone: &str, color: Color) -> Line<'a> {
        let selected = index == self.selected;
        let cursor = if selected { "▶ " } else { "  " };
        let name_style = if selected {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        Line::from(vec![
            Span::raw(cursor),
            Span::styled(format!("{:<18}", tag), Style::default().fg(color)),
            Span::styled(name.to_string(), name_style),
            Span::raw("  "),
            Span::styled(phone.to_string(), Style::default().fg(color)),
        ])
    }
}

impl<'a> Widget for CallListView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::with_capacity(self.model.target_count());

        for (i, contact) in self.model.contacts.iter().enumerate() {
            lines.push(self.entry_line(
                i,
                &contact.badge,
                &format!("{} ({})", contact.name, contact.relationship),
                &contact.phone_display,
                tone_to_color(contact.style.tone),
            ));
        }

        let offset = self.model.contacts.len();
        for (i, service) in self.model.services.iter().enumerate() {
            lines.push(self.entry_line(
                offset + i,
                &service.description,
                &service.name,
                &service.number_display,
                tone_to_color(service.style.tone),
            ));
        }

        // Keep the cursor inside the visible rows
        let visible = area.height.saturating_sub(2) as usize;
        let scroll = if visible == 0 {
            0
        } else {
            self.selected.saturating_sub(visible - 1)
        };

        Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .block(
                Block::default()
                    .title(" Contacts & Services ")
                    .borders(Borders::ALL),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::build_card_view;
    use crate::presentation::views::tui::test_support::buffer_lines;
    use lifeline_runtime::CardConfig;

    fn render(selected: usize, height: u16) -> Vec<String> {
        let card = CardConfig::built_in().unwrap();
        let vm = build_card_view(&card, 39, "", None);

        let area = Rect::new(0, 0, 90, height);
        let mut buf = Buffer::empty(area);
        CallListView::new(&vm, selected).render(area, &mut buf);
        buffer_lines(&buf)
    }

    #[test]
    fn test_cursor_marks_selected_entry() {
        let lines = render(1, 12);
        let emma = lines.iter().find(|l| l.contains("Emma Johnson")).unwrap();
        assert!(emma.contains("▶ Secondary Contact"));
        let david = lines.iter().find(|l| l.contains("David Johnson")).unwrap();
        assert!(!david.contains('▶'));
    }

    #[test]
    fn test_services_follow_contacts() {
        let lines = render(0, 12);
        let jennifer = lines.iter().position(|l| l.contains("Jennifer Walsh")).unwrap();
        let emergency = lines.iter().position(|l| l.contains("Emergency")).unwrap();
        assert!(jennifer < emergency);
    }

    #[test]
    fn test_scrolls_to_keep_cursor_visible() {
        // Three visible rows, cursor on the last service
        let lines = render(6, 5);
        assert!(lines.iter().any(|l| l.contains("▶") && l.contains("Preferred Hospital")));
        assert!(!lines.iter().any(|l| l.contains("David Johnson")));
    }
}
