// lifeline: an emergency contact card for the terminal
//
// The card itself is static data loaded once at startup. The only state the
// program keeps is a last-updated stamp and an append-only log of confirmed
// calls, both in a small SQLite key-value store under the data directory.
//
// Every surface (plain text, JSON, HTML page, TUI) renders the same
// CardViewModel, built by a pure presenter from a CardSession snapshot.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
