use crate::call::{CallConfirmation, CallState};
use crate::clock::Clock;
use crate::platform::{Dialer, PrintDocument, PrintSink};
use crate::Result;
use lifeline_core::compute_age;
use lifeline_store::{KeyValueStore, TimestampStore};
use lifeline_types::{CallLogEntry, CallTarget, Card, PendingCall};
use std::path::PathBuf;
use tracing::{debug, info};

/// One page session over a static card.
///
/// Owns every moving part the display surface talks to and exposes the
/// user intents: request/confirm/cancel a call, refresh the timestamp,
/// print.
pub struct CardSession<S, D, P, C> {
    card: Card,
    store: TimestampStore<S>,
    dialer: D,
    printer: P,
    clock: C,
    calls: CallConfirmation,
    last_updated: String,
}

impl<S, D, P, C> CardSession<S, D, P, C>
where
    S: KeyValueStore,
    D: Dialer,
    P: PrintSink,
    C: Clock,
{
    /// Start a session, stamping the last-updated time if none is stored yet
    pub fn open(card: Card, store: S, dialer: D, printer: P, clock: C) -> Result<Self> {
        let store = TimestampStore::new(store);
        let last_updated = store.ensure_last_updated(&clock.now_local())?;
        debug!(profile = %card.profile.name, %last_updated, "card session opened");

        Ok(Self {
            card,
            store,
            dialer,
            printer,
            clock,
            calls: CallConfirmation::new(),
            last_updated,
        })
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn age(&self) -> i32 {
        compute_age(self.card.profile.birth_date, self.clock.today())
    }

    pub fn last_updated(&self) -> &str {
        &self.last_updated
    }

    pub fn call_state(&self) -> &CallState {
        self.calls.state()
    }

    pub fn pending_call(&self) -> Option<&PendingCall> {
        self.calls.state().pending()
    }

    pub fn call_log(&self) -> Vec<CallLogEntry> {
        self.store.call_log()
    }

    pub fn store(&self) -> &TimestampStore<S> {
        &self.store
    }

    pub fn dialer(&self) -> &D {
        &self.dialer
    }

    pub fn find_target(&self, name: &str) -> Option<CallTarget<'_>> {
        self.card.find_target(name)
    }

    pub fn request_call(&mut self, phone: impl Into<String>, display_name: impl Into<String>) {
        self.calls.request_call(phone, display_name);
    }

    /// Request a call to a named contact or service.
    ///
    /// Returns `false` if the card has no such entry.
    pub fn request_call_by_name(&mut self, name: &str) -> bool {
        let Some((phone, display_name)) = self
            .card
            .find_target(name)
            .map(|target| (target.phone().to_string(), target.name().to_string()))
        else {
            return false;
        };

        self.calls.request_call(phone, display_name);
        true
    }

    pub fn confirm_call(&mut self) -> Result<Option<CallLogEntry>> {
        let entry = self
            .calls
            .confirm(self.clock.now(), &self.dialer, &self.store)?;
        if let Some(entry) = &entry {
            info!(contact = %entry.contact_name, phone = %entry.phone_number, "call confirmed");
        }
        Ok(entry)
    }

    pub fn cancel_call(&mut self) {
        self.calls.cancel();
    }

    pub fn refresh_timestamp(&mut self) -> Result<&str> {
        self.last_updated = self.store.set_last_updated(&self.clock.now_local())?;
        Ok(&self.last_updated)
    }

    pub fn print(&self, document: &PrintDocument) -> Result<Option<PathBuf>> {
        self.printer.print(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::CardConfig;
    use crate::platform::EchoDialer;
    use chrono::{TimeZone, Utc};
    use lifeline_store::{MemoryStore, LAST_UPDATED_KEY};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPrinter {
        printed: RefCell<Vec<PrintDocument>>,
    }

    impl PrintSink for RecordingPrinter {
        fn print(&self, document: &PrintDocument) -> Result<Option<PathBuf>> {
            self.printed.borrow_mut().push(document.clone());
            Ok(None)
        }
    }

    type TestSession<'a> =
        CardSession<&'a MemoryStore, EchoDialer<Vec<u8>>, RecordingPrinter, FixedClock>;

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
    }

    fn open(store: &MemoryStore) -> TestSession<'_> {
        CardSession::open(
            CardConfig::built_in().unwrap(),
            store,
            EchoDialer::new(Vec::new()),
            RecordingPrinter::default(),
            clock(),
        )
        .unwrap()
    }

    #[test]
    fn test_open_stamps_missing_timestamp() {
        let store = MemoryStore::new();
        let session = open(&store);

        assert!(!session.last_updated().is_empty());
        assert_eq!(
            store.get(LAST_UPDATED_KEY).unwrap().as_deref(),
            Some(session.last_updated())
        );
    }

    #[test]
    fn test_open_keeps_existing_timestamp() {
        let store = MemoryStore::new();
        store.set(LAST_UPDATED_KEY, "January 1, 2020, 09:00 AM").unwrap();

        let session = open(&store);

        assert_eq!(session.last_updated(), "January 1, 2020, 09:00 AM");
    }

    #[test]
    fn test_age_from_clock() {
        let store = MemoryStore::new();
        let session = open(&store);

        assert_eq!(session.age(), 39);
    }

    #[test]
    fn test_request_and_confirm_by_name() {
        let store = MemoryStore::new();
        let mut session = open(&store);

        assert!(session.request_call_by_name("poison control"));
        assert_eq!(
            session.pending_call(),
            Some(&PendingCall::new("18002221222", "Poison Control"))
        );

        let entry = session.confirm_call().unwrap().unwrap();

        assert_eq!(entry.timestamp, "2024-06-01T12:00:00.000Z");
        assert!(session.call_state().is_idle());
        assert_eq!(session.call_log(), vec![entry]);
    }

    #[test]
    fn test_unknown_name_leaves_state_alone() {
        let store = MemoryStore::new();
        let mut session = open(&store);

        assert!(!session.request_call_by_name("Nobody"));
        assert!(session.call_state().is_idle());
    }

    #[test]
    fn test_cancel_then_confirm_is_noop() {
        let store = MemoryStore::new();
        let mut session = open(&store);

        session.request_call("911", "Emergency");
        session.cancel_call();

        assert_eq!(session.confirm_call().unwrap(), None);
        assert!(session.call_log().is_empty());
    }

    #[test]
    fn test_refresh_timestamp_persists() {
        let store = MemoryStore::new();
        store.set(LAST_UPDATED_KEY, "January 1, 2020, 09:00 AM").unwrap();
        let mut session = open(&store);

        let refreshed = session.refresh_timestamp().unwrap().to_string();

        assert_ne!(refreshed, "January 1, 2020, 09:00 AM");
        assert_eq!(session.store().get_last_updated(), Some(refreshed));
    }

    #[test]
    fn test_print_goes_to_sink() {
        let store = MemoryStore::new();
        let session = open(&store);
        let document = PrintDocument {
            file_name: "card.html".to_string(),
            contents: "<p>card</p>".to_string(),
        };

        session.print(&document).unwrap();

        assert_eq!(session.printer.printed.borrow().as_slice(), &[document]);
    }
}
