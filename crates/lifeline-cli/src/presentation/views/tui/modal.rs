use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::presentation::view_models::CallModalViewModel;

const MODAL_WIDTH: u16 = 48;
const MODAL_HEIGHT: u16 = 7;

/// Confirmation dialog drawn over the card
pub struct CallModalView<'a> {
    model: &'a CallModalViewModel,
}

impl<'a> CallModalView<'a> {
    pub fn new(model: &'a CallModalViewModel) -> Self {
        Self { model }
    }
}

/// Rect of at most `width`×`height`, centred in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

impl<'a> Widget for CallModalView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        Clear.render(popup, buf);

        let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(Span::styled(
                format!("Calling {}", self.model.display_name),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.model.phone_display.as_str(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
            Line::from(vec![
                Span::styled("[y/Enter]", key),
                Span::raw(" Proceed with Call   "),
                Span::styled("[n/Esc]", key),
                Span::raw(" Cancel"),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(" Emergency Call ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            )
            .render(popup, buf);
    }
}
