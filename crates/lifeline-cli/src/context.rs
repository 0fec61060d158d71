use crate::types::OutputFormat;
use anyhow::{Context, Result};
use lifeline_core::{expand_tilde, resolve_workspace_path};
use lifeline_runtime::{
    CardConfig, CardSession, CardSource, DialMode, Dialer, EchoDialer, SystemClock, SystemDialer,
    SystemPrinter,
};
use lifeline_store::SqliteStore;
use std::path::{Path, PathBuf};

/// Session type every command works against
pub type CliSession = CardSession<SqliteStore, Box<dyn Dialer>, SystemPrinter, SystemClock>;

/// Directory under the data dir where `print` writes its page
pub const PRINT_DIR_NAME: &str = "print";

pub struct ExecutionContext {
    data_dir: PathBuf,
    card_path: Option<PathBuf>,
    pub dial: DialMode,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(
        data_dir: Option<String>,
        card_path: Option<String>,
        dial: DialMode,
        format: OutputFormat,
    ) -> Result<Self> {
        let data_dir = resolve_workspace_path(data_dir.as_deref())?;
        let card_path = card_path.map(|p| expand_tilde(&p));

        Ok(Self {
            data_dir,
            card_path,
            dial,
            format,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn card_path(&self) -> Option<&Path> {
        self.card_path.as_deref()
    }

    pub fn print_dir(&self) -> PathBuf {
        self.data_dir.join(PRINT_DIR_NAME)
    }

    pub fn load_card(&self) -> Result<CardConfig> {
        Ok(CardConfig::load(self.card_path(), &self.data_dir)?)
    }

    /// Dialer for console commands.
    ///
    /// Echo mode writes to stdout for plain output and to stderr otherwise,
    /// so json and csv output stay machine-readable.
    pub fn dialer(&self) -> Box<dyn Dialer> {
        match (self.dial, self.format) {
            (DialMode::Launch, _) => Box::new(SystemDialer),
            (DialMode::Echo, OutputFormat::Plain) => Box::new(EchoDialer::stdout()),
            (DialMode::Echo, _) => Box::new(EchoDialer::stderr()),
        }
    }

    /// Dialer for full-screen surfaces, where stdout belongs to the terminal
    pub fn quiet_dialer(&self) -> Box<dyn Dialer> {
        match self.dial {
            DialMode::Launch => Box::new(SystemDialer),
            DialMode::Echo => Box::new(EchoDialer::new(std::io::sink())),
        }
    }

    /// Open a session over the resolved card; also reports where the card came from
    pub fn open_session(&self) -> Result<(CliSession, CardSource)> {
        self.open_session_with(self.dialer())
    }

    pub fn open_session_with(&self, dialer: Box<dyn Dialer>) -> Result<(CliSession, CardSource)> {
        let config = self.load_card()?;
        tracing::debug!(source = %config.source.describe(), "card loaded");

        let store = SqliteStore::open_in_dir(&self.data_dir).with_context(|| {
            format!("Failed to open store in {}", self.data_dir.display())
        })?;
        let printer = match self.dial {
            DialMode::Launch => SystemPrinter::new(self.print_dir()),
            DialMode::Echo => SystemPrinter::write_only(self.print_dir()),
        };

        let session = CardSession::open(config.card, store, dialer, printer, SystemClock)?;
        Ok((session, config.source))
    }
}
