use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::CardViewModel;

/// Profile and medical summary
pub struct ProfileView<'a> {
    model: &'a CardViewModel,
}

impl<'a> ProfileView<'a> {
    pub fn new(model: &'a CardViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ProfileView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let profile = &self.model.profile;
        let medical = &self.model.medical;
        let label = Style::default().fg(Color::DarkGray);
        let bold = Style::default().add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(Span::styled(profile.name.as_str(), bold)),
            Line::from(vec![
                Span::styled("Born      ", label),
                Span::raw(format!("{} (Age: {})", profile.birth_date, profile.age)),
            ]),
            Line::from(vec![
                Span::styled("Blood     ", label),
                Span::styled(
                    profile.blood_type.as_str(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        if !profile.address.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Address   ", label),
                Span::raw(profile.address.join(", ")),
            ]));
        }
        if !profile.insurance.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Insurance ", label),
                Span::raw(profile.insurance.join(", ")),
            ]));
        }

        if !medical.allergies.is_empty() {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled("Allergies", bold)));
            for allergy in &medical.allergies {
                let style = if allergy.severe {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Yellow)
                };
                lines.push(Line::from(Span::styled(format!("  {}", allergy.text), style)));
            }
        }

        for (title, items) in [
            ("Medications", &medical.medications),
            ("Conditions", &medical.conditions),
        ] {
            if items.is_empty() {
                continue;
            }
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(title, bold)));
            lines.extend(items.iter().map(|item| Line::raw(format!("  {}", item))));
        }

        if let Some(provider) = &medical.provider {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled("Healthcare Provider", bold)));
            lines.push(Line::raw(format!(
                "  {}  {}",
                provider.name, provider.phone_display
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().title(" Profile ").borders(Borders::ALL))
            .render(area, buf);
    }
}
