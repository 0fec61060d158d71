//! TUI renderer for the interactive card.
//!
//! The renderer owns UI state only (cursor, quit flag). Card state lives in
//! the controller, which turns commands into session intents and hands back
//! a fresh `TuiScreenViewModel` after each one.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Frame, Terminal,
};

use crate::presentation::view_models::TuiScreenViewModel;
use crate::presentation::views::tui::{
    CallListView, CallModalView, NotesView, ProfileView, StatusBarView,
};

/// What a key press asks the controller to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiCommand {
    /// Open the confirmation for the n-th callable entry
    RequestCall(usize),
    Confirm,
    Cancel,
    RefreshTimestamp,
    Print,
}

pub trait TuiController {
    fn screen(&self) -> TuiScreenViewModel;

    /// Apply a command; failures are reported through the status bar
    fn dispatch(&mut self, command: TuiCommand) -> TuiScreenViewModel;
}

/// Leaves raw mode and the alternate screen when dropped, panics included
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.out, LeaveAlternateScreen, Show);
    }
}

pub struct TuiRenderer {
    selected: usize,
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self {
            selected: 0,
            should_quit: false,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn run<C: TuiController>(mut self, controller: &mut C) -> Result<()> {
        enable_raw_mode()?;
        let _guard = TerminalGuard { out: io::stdout() };
        execute!(io::stdout(), EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

        self.event_loop(&mut terminal, controller)
    }

    fn event_loop<C: TuiController>(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        controller: &mut C,
    ) -> Result<()> {
        let mut screen = controller.screen();

        loop {
            terminal.draw(|f| self.render(f, &screen))?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if let Some(command) = self.handle_key_event(key, &screen) {
                        screen = controller.dispatch(command);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Map a key to a command, updating cursor and quit state on the way
    pub fn handle_key_event(
        &mut self,
        key: KeyEvent,
        screen: &TuiScreenViewModel,
    ) -> Option<TuiCommand> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return None;
        }

        // The modal captures input until it is answered
        if screen.card.modal.is_some() {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    Some(TuiCommand::Confirm)
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    Some(TuiCommand::Cancel)
                }
                _ => None,
            };
        }

        let count = screen.card.target_count();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < count {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Home => {
                self.selected = 0;
                None
            }
            KeyCode::End => {
                self.selected = count.saturating_sub(1);
                None
            }
            KeyCode::Enter if count > 0 => Some(TuiCommand::RequestCall(self.selected)),
            KeyCode::Char('u') => Some(TuiCommand::RefreshTimestamp),
            KeyCode::Char('p') => Some(TuiCommand::Print),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, screen: &TuiScreenViewModel) {
        let size = f.area();

        // [Profile | Call list] over [Notes] over [Status bar]
        let rows = Layout::vertical([
            Constraint::Min(12),
            Constraint::Length(12),
            Constraint::Length(3),
        ])
        .split(size);

        let top = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[0]);

        f.render_widget(ProfileView::new(&screen.card), top[0]);
        f.render_widget(CallListView::new(&screen.card, self.selected), top[1]);
        f.render_widget(NotesView::new(&screen.card), rows[1]);
        f.render_widget(StatusBarView::new(&screen.status_bar), rows[2]);

        if let Some(modal) = &screen.card.modal {
            f.render_widget(CallModalView::new(modal), size);
        }
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}
