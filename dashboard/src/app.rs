use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gateway::{Gateway, Regressor};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::{
    state::form::FormState,
    ui::{self, Action},
};

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the dashboard until the user quits.
///
/// One input, submit, render cycle at a time; a submit runs to completion
/// before the next key is read.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails.
pub fn run<M: Regressor>(gateway: &Gateway<M>) -> Result<()> {
    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut form = FormState::new();

    loop {
        terminal.draw(|f| ui::form::draw(f, &form))?;

        if event::poll(Duration::from_millis(120))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match ui::form::handle_key(&mut form, k.code) {
                    Action::Quit => break,
                    Action::Submit => form.submit(gateway),
                    Action::None => {}
                }
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
