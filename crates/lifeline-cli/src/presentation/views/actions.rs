use std::fmt;

use crate::presentation::formatters::text::strong;
use crate::presentation::view_models::{
    CallOutcome, CallOutcomeViewModel, ColorMode, CreateView, DocumentWrittenViewModel,
    InitViewModel, TouchViewModel,
};

impl CreateView for TouchViewModel {
    fn create_view<'a>(&'a self, color: ColorMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(TouchView { data: self, color })
    }
}

struct TouchView<'a> {
    data: &'a TouchViewModel,
    color: ColorMode,
}

impl<'a> fmt::Display for TouchView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            strong("Last Updated:", self.color),
            self.data.last_updated
        )
    }
}

impl CreateView for CallOutcomeViewModel {
    fn create_view<'a>(&'a self, _color: ColorMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(CallOutcomeView { data: self })
    }
}

struct CallOutcomeView<'a> {
    data: &'a CallOutcomeViewModel,
}

impl<'a> fmt::Display for CallOutcomeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data.outcome {
            CallOutcome::Placed { timestamp } => writeln!(
                f,
                "{} at {} (logged {})",
                self.data.display_name, self.data.phone_display, timestamp
            ),
            CallOutcome::Cancelled => writeln!(
                f,
                "Not calling {} at {}",
                self.data.display_name, self.data.phone_display
            ),
        }
    }
}

impl CreateView for InitViewModel {
    fn create_view<'a>(&'a self, _color: ColorMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(InitView { data: self })
    }
}

struct InitView<'a> {
    data: &'a InitViewModel,
}

impl<'a> fmt::Display for InitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.written {
            writeln!(f, "Card data: {}", self.data.card_path)
        } else {
            writeln!(f, "Card data: {} (left unchanged)", self.data.card_path)
        }
    }
}

impl CreateView for DocumentWrittenViewModel {
    fn create_view<'a>(&'a self, _color: ColorMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(DocumentWrittenView { data: self })
    }
}

struct DocumentWrittenView<'a> {
    data: &'a DocumentWrittenViewModel,
}

impl<'a> fmt::Display for DocumentWrittenView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data.path {
            Some(path) => writeln!(f, "Page: {}", path),
            None => Ok(()),
        }
    }
}
