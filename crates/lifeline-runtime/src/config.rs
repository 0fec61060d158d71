use crate::{Error, Result};
use lifeline_types::Card;
use std::path::{Path, PathBuf};

pub use lifeline_core::resolve_workspace_path;

/// Card data file looked up inside the data directory
pub const CARD_FILE_NAME: &str = "card.toml";

/// The card shipped with the binary, used until the user provides their own
pub const DEFAULT_CARD_TOML: &str = include_str!("../assets/default_card.toml");

/// Where the loaded card came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardSource {
    /// `--card <path>`
    Explicit(PathBuf),
    /// `<data dir>/card.toml`
    DataDir(PathBuf),
    BuiltIn,
}

impl CardSource {
    pub fn describe(&self) -> String {
        match self {
            CardSource::Explicit(path) | CardSource::DataDir(path) => path.display().to_string(),
            CardSource::BuiltIn => "built-in card".to_string(),
        }
    }
}

/// Static card payload injected into a session at startup
#[derive(Debug, Clone)]
pub struct CardConfig {
    pub card: Card,
    pub source: CardSource,
}

impl CardConfig {
    /// Resolve the card by priority:
    /// 1. Explicit path (must exist)
    /// 2. `card.toml` in the data directory
    /// 3. The built-in card
    pub fn load(explicit_path: Option<&Path>, data_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit_path {
            let card = Self::load_from(path)?;
            return Ok(Self {
                card,
                source: CardSource::Explicit(path.to_path_buf()),
            });
        }

        let data_dir_card = Self::default_path(data_dir);
        if data_dir_card.exists() {
            let card = Self::load_from(&data_dir_card)?;
            return Ok(Self {
                card,
                source: CardSource::DataDir(data_dir_card),
            });
        }

        Ok(Self {
            card: Self::built_in()?,
            source: CardSource::BuiltIn,
        })
    }

    pub fn load_from(path: &Path) -> Result<Card> {
        let content = std::fs::read_to_string(path).map_err(|err| {
            Error::Config(format!("Failed to read card {}: {}", path.display(), err))
        })?;
        parse_card(&content)
            .map_err(|err| Error::Config(format!("Invalid card {}: {}", path.display(), err)))
    }

    pub fn built_in() -> Result<Card> {
        parse_card(DEFAULT_CARD_TOML)
    }

    pub fn default_path(data_dir: &Path) -> PathBuf {
        data_dir.join(CARD_FILE_NAME)
    }

    /// Write the built-in card to `path` so it can be edited.
    ///
    /// Returns `false` when a file already exists and `force` is not set.
    pub fn write_template(path: &Path, force: bool) -> Result<bool> {
        if path.exists() && !force {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, DEFAULT_CARD_TOML)?;
        Ok(true)
    }
}

/// Parse and validate card TOML
pub fn parse_card(content: &str) -> Result<Card> {
    let card: Card = toml::from_str(content)?;
    validate(&card)?;
    Ok(card)
}

fn validate(card: &Card) -> Result<()> {
    if card.profile.name.trim().is_empty() {
        return Err(Error::Config("profile.name must not be empty".to_string()));
    }

    for contact in &card.contacts {
        if contact.name.trim().is_empty() {
            return Err(Error::Config("contact name must not be empty".to_string()));
        }
        if contact.phone.trim().is_empty() {
            return Err(Error::Config(format!(
                "contact '{}' has no phone number",
                contact.name
            )));
        }
    }

    for service in &card.services {
        if service.number.trim().is_empty() {
            return Err(Error::Config(format!(
                "service '{}' has no number",
                service.name
            )));
        }
    }

    Ok(())
}
