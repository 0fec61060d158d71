use crate::presentation::view_models::{
    CallLogViewModel, CommandResultViewModel, Guidance, StatusBadge,
};
use lifeline_types::CallLogEntry;

/// Keep the most recent `limit` entries, still in append order
pub fn present_call_log(
    mut entries: Vec<CallLogEntry>,
    limit: Option<usize>,
) -> CommandResultViewModel<CallLogViewModel> {
    let total = entries.len();
    if let Some(limit) = limit {
        let skip = total.saturating_sub(limit);
        entries.drain(..skip);
    }

    let shown = entries.len();
    let result = CommandResultViewModel::new(CallLogViewModel { entries, total });

    if total == 0 {
        return result.with_suggestion(
            Guidance::new("Calls appear here once confirmed")
                .with_command("lifeline call <NAME>"),
        );
    }

    let label = if shown == total {
        format!("{} confirmed call(s)", total)
    } else {
        format!("Last {} of {} confirmed calls", shown, total)
    };
    result.with_badge(StatusBadge::info(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, ts: &str) -> CallLogEntry {
        CallLogEntry::new("911", name, ts)
    }

    #[test]
    fn test_limit_keeps_most_recent_in_order() {
        let entries = vec![
            entry("a", "2024-01-01T00:00:00.000Z"),
            entry("b", "2024-01-02T00:00:00.000Z"),
            entry("c", "2024-01-03T00:00:00.000Z"),
        ];

        let result = present_call_log(entries, Some(2));
        let names: Vec<_> = result
            .content
            .entries
            .iter()
            .map(|e| e.contact_name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "c"]);
        assert_eq!(result.content.total, 3);
        assert_eq!(
            result.badge.unwrap().label,
            "Last 2 of 3 confirmed calls"
        );
    }

    #[test]
    fn test_limit_larger_than_log() {
        let result = present_call_log(vec![entry("a", "t")], Some(10));
        assert_eq!(result.content.entries.len(), 1);
        assert_eq!(result.badge.unwrap().label, "1 confirmed call(s)");
    }

    #[test]
    fn test_empty_log_suggests_calling() {
        let result = present_call_log(Vec::new(), None);
        assert!(result.badge.is_none());
        assert_eq!(result.suggestions.len(), 1);
    }
}
