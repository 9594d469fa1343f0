//! Terminal setup, teardown and async event polling.

use std::io::{self, Stdout};

use crossterm::{
    cursor,
    event::{Event, EventStream, KeyEventKind},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::error::AppError;

/// Terminal wrapper owning raw mode and the alternate screen.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    events: EventStream,
    entered: bool,
}

impl Tui {
    pub fn new() -> Result<Self, AppError> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            events: EventStream::new(),
            entered: false,
        })
    }

    /// Enter the alternate screen and enable raw mode.
    pub fn enter(&mut self) -> Result<(), AppError> {
        let Self {
            terminal: screen,
            entered,
            ..
        } = self;

        enter_sequence(entered, terminal::enable_raw_mode, || {
            crossterm::execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
            screen.clear()?;
            Ok(())
        })
    }

    /// Leave the alternate screen and restore the cooked terminal. Also
    /// called on drop.
    pub fn exit(&mut self) -> Result<(), AppError> {
        if !self.entered {
            return Ok(());
        }

        terminal::disable_raw_mode()?;
        crossterm::execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
        self.entered = false;
        Ok(())
    }

    /// Wait for the next terminal event. Key releases are filtered out
    /// (Windows reports both edges). Returns `None` once stdin is closed.
    pub async fn next_event(&mut self) -> Option<Result<Event, AppError>> {
        loop {
            match self.events.next().await? {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Press => continue,
                Ok(event) => return Some(Ok(event)),
                Err(e) => return Some(Err(e.into())),
            }
        }
    }

    pub fn draw<F>(&mut self, f: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Raw mode counts as entered as soon as it is on, so a failure while
/// switching screens is still undone by [`Tui::exit`].
fn enter_sequence(
    entered: &mut bool,
    raw_mode: impl FnOnce() -> io::Result<()>,
    screen: impl FnOnce() -> Result<(), AppError>,
) -> Result<(), AppError> {
    raw_mode()?;
    *entered = true;
    screen()
}
