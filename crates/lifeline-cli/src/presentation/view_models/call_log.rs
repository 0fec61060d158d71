use lifeline_types::CallLogEntry;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CallLogViewModel {
    /// Entries in append order, already limited
    pub entries: Vec<CallLogEntry>,
    /// Entries in the store before limiting
    pub total: usize,
}
