use crate::context::ExecutionContext;
use crate::handlers::print::print_document;
use crate::presentation::presenters::{present_card, present_screen};
use crate::presentation::renderers::{TuiCommand, TuiController, TuiRenderer};
use crate::presentation::view_models::{StatusLevel, TuiScreenViewModel};
use anyhow::{bail, Result};
use is_terminal::IsTerminal;
use lifeline_core::format_phone_number;
use lifeline_runtime::{CardSession, Clock, Dialer, PrintSink};
use lifeline_store::KeyValueStore;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("The interactive card needs a terminal; use `lifeline show` instead");
    }

    let (session, _) = ctx.open_session_with(ctx.quiet_dialer())?;
    let mut controller = CardController::new(session);

    TuiRenderer::new().run(&mut controller)
}

/// Turns TUI commands into session intents
pub struct CardController<S, D, P, C> {
    session: CardSession<S, D, P, C>,
    message: String,
    level: StatusLevel,
}

impl<S, D, P, C> CardController<S, D, P, C>
where
    S: KeyValueStore,
    D: Dialer,
    P: PrintSink,
    C: Clock,
{
    pub fn new(session: CardSession<S, D, P, C>) -> Self {
        Self {
            session,
            message: "Select a contact and press Enter to call".to_string(),
            level: StatusLevel::Info,
        }
    }

    pub fn session(&self) -> &CardSession<S, D, P, C> {
        &self.session
    }

    fn set_status(&mut self, level: StatusLevel, message: impl Into<String>) {
        self.level = level;
        self.message = message.into();
    }

    fn request_call(&mut self, index: usize) {
        let target = self
            .session
            .card()
            .call_targets()
            .get(index)
            .map(|t| (t.phone().to_string(), t.name().to_string()));

        match target {
            Some((phone, name)) => {
                self.session.request_call(phone, name.clone());
                self.set_status(StatusLevel::Warning, format!("Confirm call to {}", name));
            }
            None => self.set_status(StatusLevel::Error, "No entry at that position"),
        }
    }

    fn confirm(&mut self) {
        let Some(pending) = self.session.pending_call().cloned() else {
            return;
        };

        match self.session.confirm_call() {
            Ok(Some(_)) => self.set_status(
                StatusLevel::Success,
                format!(
                    "Calling {} at {}",
                    pending.display_name,
                    format_phone_number(&pending.phone)
                ),
            ),
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %err, "call placed but not logged");
                self.set_status(
                    StatusLevel::Error,
                    format!("Call placed but not logged: {}", err),
                );
            }
        }
    }

    fn print(&mut self) {
        let document = print_document(&present_card(&self.session));
        match self.session.print(&document) {
            Ok(Some(path)) => self.set_status(
                StatusLevel::Success,
                format!("Print page: {}", path.display()),
            ),
            Ok(None) => self.set_status(StatusLevel::Success, "Sent to printer"),
            Err(err) => self.set_status(StatusLevel::Error, format!("Print failed: {}", err)),
        }
    }

    fn refresh_timestamp(&mut self) {
        match self.session.refresh_timestamp() {
            Ok(stamp) => {
                let message = format!("Last updated {}", stamp);
                self.set_status(StatusLevel::Success, message);
            }
            Err(err) => self.set_status(
                StatusLevel::Error,
                format!("Could not save timestamp: {}", err),
            ),
        }
    }
}

impl<S, D, P, C> TuiController for CardController<S, D, P, C>
where
    S: KeyValueStore,
    D: Dialer,
    P: PrintSink,
    C: Clock,
{
    fn screen(&self) -> TuiScreenViewModel {
        present_screen(
            present_card(&self.session),
            self.message.clone(),
            self.level,
            self.session.call_log().len(),
        )
    }

    fn dispatch(&mut self, command: TuiCommand) -> TuiScreenViewModel {
        match command {
            TuiCommand::RequestCall(index) => self.request_call(index),
            TuiCommand::Confirm => self.confirm(),
            TuiCommand::Cancel => {
                self.session.cancel_call();
                self.set_status(StatusLevel::Info, "Call cancelled");
            }
            TuiCommand::RefreshTimestamp => self.refresh_timestamp(),
            TuiCommand::Print => self.print(),
        }
        self.screen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use lifeline_runtime::{CardConfig, EchoDialer, FixedClock, SystemPrinter};
    use lifeline_store::MemoryStore;
    use tempfile::TempDir;

    type TestController = CardController<MemoryStore, EchoDialer<Vec<u8>>, SystemPrinter, FixedClock>;

    fn controller(print_dir: &std::path::Path) -> TestController {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());
        let session = CardSession::open(
            CardConfig::built_in().unwrap(),
            MemoryStore::new(),
            EchoDialer::new(Vec::new()),
            SystemPrinter::write_only(print_dir),
            clock,
        )
        .unwrap();
        CardController::new(session)
    }

    #[test]
    fn test_request_then_confirm_logs_call() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller(dir.path());

        let screen = controller.dispatch(TuiCommand::RequestCall(4));
        let modal = screen.card.modal.unwrap();
        assert_eq!(modal.display_name, "Emergency");
        assert_eq!(screen.status_bar.level, StatusLevel::Warning);

        let screen = controller.dispatch(TuiCommand::Confirm);
        assert!(screen.card.modal.is_none());
        assert_eq!(screen.status_bar.calls_logged, 1);
        assert_eq!(screen.status_bar.message, "Calling Emergency at 911");
    }

    #[test]
    fn test_cancel_discards_pending_call() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller(dir.path());

        controller.dispatch(TuiCommand::RequestCall(0));
        let screen = controller.dispatch(TuiCommand::Cancel);
        assert!(screen.card.modal.is_none());
        assert_eq!(screen.status_bar.calls_logged, 0);

        // Confirm with nothing pending is a no-op
        let screen = controller.dispatch(TuiCommand::Confirm);
        assert_eq!(screen.status_bar.calls_logged, 0);
        assert_eq!(screen.status_bar.message, "Call cancelled");
    }

    #[test]
    fn test_out_of_range_request_reports_error() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller(dir.path());

        let screen = controller.dispatch(TuiCommand::RequestCall(99));
        assert!(screen.card.modal.is_none());
        assert_eq!(screen.status_bar.level, StatusLevel::Error);
    }

    #[test]
    fn test_print_writes_page() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller(dir.path());

        let screen = controller.dispatch(TuiCommand::Print);
        assert_eq!(screen.status_bar.level, StatusLevel::Success);
        assert!(dir.path().join("card.html").exists());
    }

    #[test]
    fn test_refresh_updates_footer() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller(dir.path());

        let screen = controller.dispatch(TuiCommand::RefreshTimestamp);
        assert_eq!(screen.status_bar.level, StatusLevel::Success);
        assert_eq!(
            screen.status_bar.message,
            format!("Last updated {}", controller.session().last_updated())
        );
    }
}
