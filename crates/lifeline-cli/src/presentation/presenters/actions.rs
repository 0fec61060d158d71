use crate::presentation::view_models::{
    CallOutcome, CallOutcomeViewModel, CommandResultViewModel, DocumentWrittenViewModel,
    Guidance, InitViewModel, StatusBadge, TouchViewModel,
};
use lifeline_core::format_phone_number;
use lifeline_types::{CallLogEntry, PendingCall};
use std::path::Path;

pub fn present_touch(last_updated: &str) -> CommandResultViewModel<TouchViewModel> {
    CommandResultViewModel::new(TouchViewModel {
        last_updated: last_updated.to_string(),
    })
    .with_badge(StatusBadge::success("Timestamp updated"))
}

pub fn present_call_placed(
    pending: &PendingCall,
    entry: &CallLogEntry,
) -> CommandResultViewModel<CallOutcomeViewModel> {
    CommandResultViewModel::new(call_outcome(
        pending,
        CallOutcome::Placed {
            timestamp: entry.timestamp.clone(),
        },
    ))
    .with_badge(StatusBadge::success(format!(
        "Calling {}",
        pending.display_name
    )))
}

pub fn present_call_cancelled(pending: &PendingCall) -> CommandResultViewModel<CallOutcomeViewModel> {
    CommandResultViewModel::new(call_outcome(pending, CallOutcome::Cancelled))
        .with_badge(StatusBadge::info("Call cancelled"))
}

fn call_outcome(pending: &PendingCall, outcome: CallOutcome) -> CallOutcomeViewModel {
    CallOutcomeViewModel {
        display_name: pending.display_name.clone(),
        phone: pending.phone.clone(),
        phone_display: format_phone_number(&pending.phone),
        outcome,
    }
}

pub fn present_init(card_path: &Path, written: bool) -> CommandResultViewModel<InitViewModel> {
    let path = card_path.display().to_string();
    let result = CommandResultViewModel::new(InitViewModel {
        card_path: path.clone(),
        written,
    });

    if written {
        result
            .with_badge(StatusBadge::success("Card data written"))
            .with_suggestion(Guidance::new(format!("Edit {} with your details", path)))
    } else {
        result
            .with_badge(StatusBadge::warning("Card data already exists"))
            .with_suggestion(
                Guidance::new("Overwrite it with the sample card").with_command("lifeline init --force"),
            )
    }
}

pub fn present_html_written(path: &Path) -> CommandResultViewModel<DocumentWrittenViewModel> {
    CommandResultViewModel::new(DocumentWrittenViewModel {
        path: Some(path.display().to_string()),
        opened: false,
    })
    .with_badge(StatusBadge::success("HTML page written"))
}

pub fn present_print(
    path: Option<&Path>,
    opened: bool,
) -> CommandResultViewModel<DocumentWrittenViewModel> {
    let label = if opened {
        "Opened for printing"
    } else {
        "Print page written"
    };

    CommandResultViewModel::new(DocumentWrittenViewModel {
        path: path.map(|p| p.display().to_string()),
        opened,
    })
    .with_badge(StatusBadge::success(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::StatusLevel;

    #[test]
    fn test_call_placed_carries_log_timestamp() {
        let pending = PendingCall::new("+15553456789", "David Johnson");
        let entry = CallLogEntry::new("+15553456789", "David Johnson", "2024-06-01T12:00:00.000Z");

        let result = present_call_placed(&pending, &entry);
        assert_eq!(result.content.phone_display, "+1 (555) 345-6789");
        assert_eq!(
            result.content.outcome,
            CallOutcome::Placed {
                timestamp: "2024-06-01T12:00:00.000Z".to_string()
            }
        );
        assert_eq!(result.badge.unwrap().label, "Calling David Johnson");
    }

    #[test]
    fn test_init_existing_file_warns() {
        let result = present_init(Path::new("/tmp/card.toml"), false);
        assert_eq!(result.badge.unwrap().level, StatusLevel::Warning);
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("lifeline init --force")
        );
    }
}
