use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::view_models::{ColorMode, CommandResultViewModel, CreateView};
use crate::types::OutputFormat;

pub struct ConsoleRenderer {
    json_mode: bool,
    color: ColorMode,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        let color = if std::io::stdout().is_terminal() {
            ColorMode::Always
        } else {
            ColorMode::Never
        };
        Self::with_color(format, color)
    }

    pub fn with_color(format: OutputFormat, color: ColorMode) -> Self {
        Self {
            json_mode: format == OutputFormat::Json,
            color,
        }
    }

    /// Write a result to any sink; `render` targets stdout
    pub fn render_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            let label = if self.color.enabled() {
                badge.label.bold().to_string()
            } else {
                badge.label.clone()
            };
            writeln!(out, "{} {}", badge.icon(), label)?;
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.color))?;

        if !result.suggestions.is_empty() {
            let title = if self.color.enabled() {
                "💡 Tips:".yellow().bold().to_string()
            } else {
                "💡 Tips:".to_string()
            };
            writeln!(out, "\n{}", title)?;
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.color.enabled() {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, &result)?;
        out.flush()?;
        Ok(())
    }
}
