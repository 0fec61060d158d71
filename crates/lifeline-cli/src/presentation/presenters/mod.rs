pub mod actions;
pub mod call_log;
pub mod card;
pub mod screen;

pub use actions::*;
pub use call_log::*;
pub use card::*;
pub use screen::*;
