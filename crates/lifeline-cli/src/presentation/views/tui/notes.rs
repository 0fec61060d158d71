use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::CardViewModel;

/// Notes, access information and the last-updated stamp
pub struct NotesView<'a> {
    model: &'a CardViewModel,
}

impl<'a> NotesView<'a> {
    pub fn new(model: &'a CardViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for NotesView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let notes = &self.model.notes;
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = Vec::new();

        for (title, items) in [
            ("Special Medical Instructions", &notes.special_instructions),
            ("Access Information", &notes.access_information),
        ] {
            if items.is_empty() {
                continue;
            }
            lines.push(Line::from(Span::styled(title, bold)));
            lines.extend(items.iter().map(|item| Line::raw(format!("  • {}", item))));
            lines.push(Line::raw(""));
        }

        lines.push(Line::from(vec![
            Span::styled("Last Updated: ", bold),
            Span::raw(self.model.last_updated.as_str()),
        ]));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().title(" Notes ").borders(Borders::ALL))
            .render(area, buf);
    }
}
