use crate::kv::KeyValueStore;
use crate::Result;
use chrono::{DateTime, TimeZone};
use lifeline_core::format_last_updated;
use lifeline_types::CallLogEntry;
use serde_json::Value;
use std::fmt::Display;
use tracing::{debug, warn};

/// Key of the formatted "last updated" string
pub const LAST_UPDATED_KEY: &str = "lastUpdatedTimestamp";

/// Key of the JSON array of call records
pub const CALL_LOG_KEY: &str = "callActivityLog";

/// The card's persisted state: one overwritten timestamp and one
/// append-only call log.
///
/// Reads never fail: unreadable or corrupt values are treated as absent.
pub struct TimestampStore<S> {
    kv: S,
}

impl<S: KeyValueStore> TimestampStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    pub fn inner(&self) -> &S {
        &self.kv
    }

    pub fn get_last_updated(&self) -> Option<String> {
        match self.kv.get(LAST_UPDATED_KEY) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(err) => {
                warn!(error = %err, "could not read last-updated timestamp");
                None
            }
        }
    }

    /// Format `now`, persist it and return the stored string
    pub fn set_last_updated<Tz>(&self, now: &DateTime<Tz>) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let formatted = format_last_updated(now);
        self.kv.set(LAST_UPDATED_KEY, &formatted)?;
        debug!(timestamp = %formatted, "last-updated timestamp refreshed");
        Ok(formatted)
    }

    /// First-load policy: keep an existing timestamp, otherwise stamp `now`
    pub fn ensure_last_updated<Tz>(&self, now: &DateTime<Tz>) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match self.get_last_updated() {
            Some(existing) => Ok(existing),
            None => self.set_last_updated(now),
        }
    }

    /// Confirmed calls in the order they were appended
    pub fn call_log(&self) -> Vec<CallLogEntry> {
        self.raw_call_log()
            .into_iter()
            .filter_map(|record| serde_json::from_value(record).ok())
            .collect()
    }

    /// Read-modify-write append. Records this version cannot parse are kept
    /// as they are.
    pub fn append_call_log(&self, entry: &CallLogEntry) -> Result<()> {
        let mut records = self.raw_call_log();
        records.push(serde_json::to_value(entry)?);

        let encoded = serde_json::to_string(&records)?;
        self.kv.set(CALL_LOG_KEY, &encoded)?;
        debug!(
            contact = %entry.contact_name,
            entries = records.len(),
            "call logged"
        );
        Ok(())
    }

    fn raw_call_log(&self) -> Vec<Value> {
        let raw = match self.kv.get(CALL_LOG_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(error = %err, "could not read call log; treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(records)) => records,
            Ok(_) | Err(_) => {
                warn!("call log is corrupt; treating as empty");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, MemoryStore, SqliteStore};
    use chrono::{FixedOffset, Utc};

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::Io(std::io::Error::other("disk gone")))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Io(std::io::Error::other("disk gone")))
        }
    }

    fn entry(name: &str, ts: &str) -> CallLogEntry {
        CallLogEntry::new("911", name, ts)
    }

    #[test]
    fn test_set_then_get_last_updated_roundtrip() {
        let store = TimestampStore::new(MemoryStore::new());
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();

        let written = store.set_last_updated(&now).unwrap();
        assert_eq!(written, "March 15, 2024, 02:30 PM");
        assert_eq!(store.get_last_updated(), Some(written));
    }

    #[test]
    fn test_last_updated_is_overwritten() {
        let store = TimestampStore::new(MemoryStore::new());
        let tz = FixedOffset::east_opt(0).unwrap();
        store
            .set_last_updated(&tz.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap())
            .unwrap();
        let second = store
            .set_last_updated(&tz.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap())
            .unwrap();

        assert_eq!(store.get_last_updated(), Some(second));
    }

    #[test]
    fn test_ensure_last_updated_only_stamps_once() {
        let store = TimestampStore::new(MemoryStore::new());
        let first = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

        let stamped = store.ensure_last_updated(&first).unwrap();
        let kept = store.ensure_last_updated(&later).unwrap();

        assert_eq!(stamped, kept);
    }

    #[test]
    fn test_empty_timestamp_counts_as_absent() {
        let kv = MemoryStore::new();
        kv.set(LAST_UPDATED_KEY, "").unwrap();
        let store = TimestampStore::new(kv);

        assert_eq!(store.get_last_updated(), None);
    }

    #[test]
    fn test_call_log_preserves_append_order() {
        let store = TimestampStore::new(MemoryStore::new());
        store.append_call_log(&entry("first", "2024-03-15T14:30:00.000Z")).unwrap();
        store.append_call_log(&entry("second", "2024-03-15T14:31:00.000Z")).unwrap();
        store.append_call_log(&entry("third", "2024-03-15T14:32:00.000Z")).unwrap();

        let names: Vec<_> = store
            .call_log()
            .into_iter()
            .map(|e| e.contact_name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_corrupt_log_is_treated_as_empty() {
        let kv = MemoryStore::new();
        kv.set(CALL_LOG_KEY, "{not json").unwrap();
        let store = TimestampStore::new(kv);

        assert!(store.call_log().is_empty());

        store.append_call_log(&entry("after", "2024-03-15T14:30:00.000Z")).unwrap();
        assert_eq!(store.call_log().len(), 1);
    }

    #[test]
    fn test_non_array_log_is_treated_as_empty() {
        let kv = MemoryStore::new();
        kv.set(CALL_LOG_KEY, r#"{"phoneNumber":"911"}"#).unwrap();
        let store = TimestampStore::new(kv);

        assert!(store.call_log().is_empty());
    }

    #[test]
    fn test_unknown_records_are_kept_on_append() {
        let kv = MemoryStore::new();
        kv.set(CALL_LOG_KEY, r#"[{"note":"from a future version"}]"#)
            .unwrap();
        let store = TimestampStore::new(kv);

        store.append_call_log(&entry("known", "2024-03-15T14:30:00.000Z")).unwrap();

        let raw = store.inner().get(CALL_LOG_KEY).unwrap().unwrap();
        let records: Vec<Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["note"], "from a future version");
        assert_eq!(store.call_log().len(), 1);
    }

    #[test]
    fn test_persisted_record_layout() {
        let store = TimestampStore::new(MemoryStore::new());
        store
            .append_call_log(&CallLogEntry::new(
                "+15553456789",
                "David Johnson",
                "2024-03-15T14:30:00.000Z",
            ))
            .unwrap();

        let raw = store.inner().get(CALL_LOG_KEY).unwrap().unwrap();
        assert_eq!(
            raw,
            r#"[{"phoneNumber":"+15553456789","contactName":"David Johnson","timestamp":"2024-03-15T14:30:00.000Z","type":"emergency_call"}]"#
        );
    }

    #[test]
    fn test_read_failures_degrade_to_absent() {
        let store = TimestampStore::new(BrokenStore);

        assert_eq!(store.get_last_updated(), None);
        assert!(store.call_log().is_empty());
    }

    #[test]
    fn test_write_failures_are_reported() {
        let store = TimestampStore::new(BrokenStore);
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();

        assert!(store.set_last_updated(&now).is_err());
        assert!(store.append_call_log(&entry("x", "t")).is_err());
    }

    #[test]
    fn test_works_over_sqlite() {
        let store = TimestampStore::new(SqliteStore::open_in_memory().unwrap());
        store.append_call_log(&entry("Emergency", "2024-03-15T14:30:00.000Z")).unwrap();

        assert_eq!(store.call_log()[0].contact_name, "Emergency");
    }
}
