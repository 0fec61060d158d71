pub mod actions;
pub mod call_log;
pub mod card;
pub mod common;
pub mod result;
pub mod screen;

pub use actions::*;
pub use call_log::*;
pub use card::*;
pub use common::*;
pub use result::*;
pub use screen::*;

use std::fmt;

/// Whether text views may emit ANSI colour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    Always,
    #[default]
    Never,
}

impl ColorMode {
    pub fn enabled(self) -> bool {
        self == ColorMode::Always
    }
}

/// View models that know how to render themselves as console text
pub trait CreateView {
    fn create_view<'a>(&'a self, color: ColorMode) -> Box<dyn fmt::Display + 'a>;
}
