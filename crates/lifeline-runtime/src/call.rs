//! Call confirmation.
//!
//! The card never dials straight away: a request opens a confirmation, and
//! only an explicit confirm places the call and records it.
//!
//! ```text
//! CallState × CallIntent → (CallState, Vec<CallEffect>)
//! ```
//!
//! `transition` is pure; `CallConfirmation` owns the current state and runs
//! the effects against a `Dialer` and the call log.

use crate::platform::Dialer;
use crate::Result;
use chrono::{DateTime, Utc};
use lifeline_core::format_iso8601;
use lifeline_store::{KeyValueStore, TimestampStore};
use lifeline_types::{CallLogEntry, PendingCall};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CallState {
    #[default]
    Idle,
    Confirming(PendingCall),
}

impl CallState {
    pub fn pending(&self) -> Option<&PendingCall> {
        match self {
            CallState::Idle => None,
            CallState::Confirming(pending) => Some(pending),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, CallState::Idle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallIntent {
    Request(PendingCall),
    Confirm { at: DateTime<Utc> },
    Cancel,
}

/// Side effects requested by a transition, in execution order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallEffect {
    Dial { phone: String },
    Record(CallLogEntry),
}

pub fn transition(state: &CallState, intent: CallIntent) -> (CallState, Vec<CallEffect>) {
    match (state, intent) {
        // Last request wins; there is no queue
        (_, CallIntent::Request(pending)) => (CallState::Confirming(pending), Vec::new()),

        (CallState::Confirming(pending), CallIntent::Confirm { at }) => {
            let entry = CallLogEntry::new(
                pending.phone.clone(),
                pending.display_name.clone(),
                format_iso8601(&at),
            );
            let effects = vec![
                CallEffect::Dial {
                    phone: pending.phone.clone(),
                },
                CallEffect::Record(entry),
            ];
            (CallState::Idle, effects)
        }

        (CallState::Idle, CallIntent::Confirm { .. }) => (CallState::Idle, Vec::new()),

        (_, CallIntent::Cancel) => (CallState::Idle, Vec::new()),
    }
}

#[derive(Debug, Default)]
pub struct CallConfirmation {
    state: CallState,
}

impl CallConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CallState {
        &self.state
    }

    pub fn request_call(&mut self, phone: impl Into<String>, display_name: impl Into<String>) {
        let pending = PendingCall::new(phone, display_name);
        debug!(name = %pending.display_name, "call requested");
        self.apply(CallIntent::Request(pending));
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.state.pending() {
            debug!(name = %pending.display_name, "call cancelled");
        }
        self.apply(CallIntent::Cancel);
    }

    /// Dial and log the pending call. Returns `Ok(None)` when nothing was
    /// pending.
    ///
    /// The machine is `Idle` afterwards even when the log write fails; the
    /// call has already been placed by then.
    pub fn confirm<D, S>(
        &mut self,
        at: DateTime<Utc>,
        dialer: &D,
        store: &TimestampStore<S>,
    ) -> Result<Option<CallLogEntry>>
    where
        D: Dialer + ?Sized,
        S: KeyValueStore,
    {
        let mut recorded = None;

        for effect in self.apply(CallIntent::Confirm { at }) {
            match effect {
                CallEffect::Dial { phone } => dialer.dial(&phone),
                CallEffect::Record(entry) => {
                    if let Err(err) = store.append_call_log(&entry) {
                        warn!(contact = %entry.contact_name, error = %err, "call placed but not logged");
                        return Err(err.into());
                    }
                    recorded = Some(entry);
                }
            }
        }

        Ok(recorded)
    }

    fn apply(&mut self, intent: CallIntent) -> Vec<CallEffect> {
        let (next, effects) = transition(&self.state, intent);
        self.state = next;
        effects
    }
}
