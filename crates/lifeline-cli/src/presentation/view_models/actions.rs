use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TouchViewModel {
    pub last_updated: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CallOutcomeViewModel {
    pub display_name: String,
    pub phone: String,
    pub phone_display: String,
    pub outcome: CallOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CallOutcome {
    Placed { timestamp: String },
    Cancelled,
}

#[derive(Debug, Clone, Serialize)]
pub struct InitViewModel {
    pub card_path: String,
    pub written: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentWrittenViewModel {
    pub path: Option<String>,
    pub opened: bool,
}
