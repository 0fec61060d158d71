//! Presentation layer.
//!
//! ```text
//! CardSession ──presenters──▶ view models ──views──▶ text / HTML / widgets
//!                                   │
//!                                   └──renderers──▶ stdout / terminal
//! ```
//!
//! - `view_models`: serializable display state, no formatting left to do
//! - `presenters`: pure functions from domain state to view models
//! - `views`: `Display` impls, the HTML page and ratatui widgets
//! - `renderers`: console (plain/JSON) and the TUI event loop
//! - `formatters`: small text helpers shared by the views

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
