//! Host platform actions: placing a call and printing.
//!
//! Both are fire-and-forget. The card never learns whether the call went
//! through or the page was printed.

use crate::Result;
use lifeline_core::tel_uri;
use std::cell::RefCell;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, warn};

pub trait Dialer {
    fn dial(&self, phone: &str);
}

impl<T: Dialer + ?Sized> Dialer for Box<T> {
    fn dial(&self, phone: &str) {
        (**self).dial(phone)
    }
}

/// Hands a `tel:` URI to the OS URL handler
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDialer;

impl Dialer for SystemDialer {
    fn dial(&self, phone: &str) {
        let uri = tel_uri(phone);
        debug!(%uri, "dialing");
        if let Err(err) = open::that_detached(&uri) {
            warn!(%uri, error = %err, "no handler accepted the call");
        }
    }
}

/// Writes the `tel:` URI instead of dialing
pub struct EchoDialer<W: Write> {
    out: RefCell<W>,
}

impl EchoDialer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl EchoDialer<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write> EchoDialer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> Dialer for EchoDialer<W> {
    fn dial(&self, phone: &str) {
        let mut out = self.out.borrow_mut();
        if let Err(err) = writeln!(out, "{}", tel_uri(phone)) {
            warn!(error = %err, "could not echo dial target");
        }
    }
}

/// How `lifeline` should perform the dial action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialMode {
    /// Open the `tel:` URI with the OS handler
    #[default]
    Launch,
    /// Echo the `tel:` URI instead of dialing
    Echo,
}

/// A rendered page ready for the print flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintDocument {
    pub file_name: String,
    pub contents: String,
}

pub trait PrintSink {
    /// Returns where the document ended up, if it was written anywhere
    fn print(&self, document: &PrintDocument) -> Result<Option<PathBuf>>;
}

/// Writes the document under `output_dir` and opens it with the OS handler,
/// which offers the native print dialog
#[derive(Debug, Clone)]
pub struct SystemPrinter {
    output_dir: PathBuf,
    launch: bool,
}

impl SystemPrinter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            launch: true,
        }
    }

    /// Write only, never launch a viewer
    pub fn write_only(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            launch: false,
        }
    }
}

impl PrintSink for SystemPrinter {
    fn print(&self, document: &PrintDocument) -> Result<Option<PathBuf>> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(&document.file_name);
        std::fs::write(&path, &document.contents)?;
        debug!(path = %path.display(), "print document written");

        if self.launch {
            if let Err(err) = open::that_detached(&path) {
                warn!(path = %path.display(), error = %err, "could not open print document");
            }
        }

        Ok(Some(path))
    }
}
