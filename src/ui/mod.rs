//! Terminal front end: one search form, one status line, three result panels.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::Event;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::error::{AppError, FetchError};
use crate::profile::{PlayerProfile, ProfileSource};
use crate::search::SearchQuery;

pub mod app;
pub mod presenters;
pub mod render;
pub mod terminal;

pub use app::{Action, App};
pub use terminal::Tui;

const TICK_RATE: Duration = Duration::from_millis(120);

type FetchOutcome = Result<PlayerProfile, FetchError>;

/// Run the view until the user quits. The terminal is restored on every exit
/// path, including errors.
pub async fn run(app: &mut App, source: Arc<dyn ProfileSource>) -> Result<(), AppError> {
    let mut tui = Tui::new()?;
    tui.enter()?;

    let result = event_loop(&mut tui, app, source).await;

    tui.exit()?;
    result
}

async fn event_loop(
    tui: &mut Tui,
    app: &mut App,
    source: Arc<dyn ProfileSource>,
) -> Result<(), AppError> {
    // At most one outcome is ever pending: the form is frozen while loading.
    let (tx, mut rx) = mpsc::channel::<FetchOutcome>(1);
    let mut ticker = tokio::time::interval(TICK_RATE);

    info!("🖥️ [UI] view started");

    while !app.should_quit {
        tui.draw(|frame| render::draw(frame, app))?;

        tokio::select! {
            event = tui.next_event() => match event {
                Some(Ok(Event::Key(key))) => {
                    if let Some(query) = app.handle_key_event(key).and_then(|a| app.update(a)) {
                        dispatch(source.clone(), query, tx.clone());
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => break,
            },
            Some(outcome) = rx.recv() => app.resolve(outcome),
            _ = ticker.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    info!("🖥️ [UI] view closed");
    Ok(())
}

/// Fetch one query on its own task and report the outcome back to the view.
fn dispatch(source: Arc<dyn ProfileSource>, query: SearchQuery, tx: mpsc::Sender<FetchOutcome>) {
    tokio::spawn(async move {
        let outcome = source.fetch_profile(&query).await;

        if tx.send(outcome).await.is_err() {
            warn!(riot_id = %query.riot_id(), "🖥️ ⚠️ [UI] view closed before the profile arrived");
        }
    });
}
