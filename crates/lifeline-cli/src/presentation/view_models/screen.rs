use serde::Serialize;

use super::card::CardViewModel;
use super::common::StatusLevel;

/// One frame of the interactive card
#[derive(Debug, Clone, Serialize)]
pub struct TuiScreenViewModel {
    pub card: CardViewModel,
    pub status_bar: StatusBarViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub message: String,
    pub level: StatusLevel,
    pub calls_logged: usize,
}
