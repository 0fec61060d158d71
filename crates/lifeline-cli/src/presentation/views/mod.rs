pub mod actions;
pub mod call_log;
pub mod card;
pub mod html;
pub mod tui;

pub use card::CardTextView;
pub use html::HtmlPageView;
