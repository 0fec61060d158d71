pub mod call;
pub mod clock;
pub mod config;
pub mod error;
pub mod platform;
pub mod session;

pub use call::{transition, CallConfirmation, CallEffect, CallIntent, CallState};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CardConfig, CardSource, CARD_FILE_NAME, DEFAULT_CARD_TOML};
pub use error::{Error, Result};
pub use platform::{DialMode, Dialer, EchoDialer, PrintDocument, PrintSink, SystemDialer, SystemPrinter};
pub use session::CardSession;
