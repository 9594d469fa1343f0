//! View-scoped application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::FetchError;
use crate::profile::{PlayerProfile, Region};
use crate::search::{SearchController, SearchQuery, Submission, ViewState};

/// Discrete operations the view performs in response to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Regular tick driving the loading spinner
    Tick,
    Input(char),
    Backspace,
    Submit,
    NextRegion,
    PrevRegion,
    Quit,
}

pub struct App {
    pub input: String,
    pub region: Region,
    pub ddragon_version: String,
    pub should_quit: bool,
    /// Spinner frame, advanced on every tick while loading
    pub spinner: usize,
    controller: SearchController,
}

impl App {
    pub fn new(region: Region, ddragon_version: impl Into<String>) -> Self {
        Self {
            input: String::new(),
            region,
            ddragon_version: ddragon_version.into(),
            should_quit: false,
            spinner: 0,
            controller: SearchController::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        self.controller.state()
    }

    pub fn is_loading(&self) -> bool {
        self.state().is_loading()
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => Some(Action::Quit),
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Tab => Some(Action::NextRegion),
            KeyCode::BackTab => Some(Action::PrevRegion),
            KeyCode::Char(c) if !ctrl => Some(Action::Input(c)),
            _ => None,
        }
    }

    /// Apply an action. Returns the query to fetch when a search starts.
    pub fn update(&mut self, action: Action) -> Option<SearchQuery> {
        match action {
            Action::Quit => {
                self.should_quit = true;
                None
            }
            Action::Tick => {
                if self.is_loading() {
                    self.spinner = self.spinner.wrapping_add(1);
                }
                None
            }
            // The form is frozen while a request is in flight.
            _ if self.is_loading() => None,
            Action::Input(c) => {
                self.input.push(c);
                None
            }
            Action::Backspace => {
                self.input.pop();
                None
            }
            Action::NextRegion => {
                self.region = self.region.next();
                None
            }
            Action::PrevRegion => {
                self.region = self.region.previous();
                None
            }
            Action::Submit => match self.controller.submit(&self.input, self.region) {
                Submission::Dispatch(query) => {
                    self.spinner = 0;
                    Some(query)
                }
                Submission::Ignored | Submission::Rejected => None,
            },
        }
    }

    pub fn resolve(&mut self, outcome: Result<PlayerProfile, FetchError>) {
        self.controller.resolve(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SearchError, ValidationError};
    use crate::profile::types::dummy_profile;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.update(Action::Input(c));
        }
    }

    #[test]
    fn keys_map_to_actions() {
        let app = App::new(Region::Las, "16.1.1");

        assert_eq!(app.handle_key_event(key(KeyCode::Char('a'))), Some(Action::Input('a')));
        assert_eq!(app.handle_key_event(key(KeyCode::Char('#'))), Some(Action::Input('#')));
        assert_eq!(app.handle_key_event(key(KeyCode::Enter)), Some(Action::Submit));
        assert_eq!(app.handle_key_event(key(KeyCode::Tab)), Some(Action::NextRegion));
        assert_eq!(app.handle_key_event(key(KeyCode::BackTab)), Some(Action::PrevRegion));
        assert_eq!(app.handle_key_event(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(app.handle_key_event(key(KeyCode::F(5))), None);
    }

    #[test]
    fn submit_dispatches_query_for_selected_region() {
        let mut app = App::new(Region::Las, "16.1.1");
        app.update(Action::NextRegion);
        type_text(&mut app, "Chalop#3012");

        let query = app.update(Action::Submit).expect("query dispatched");

        assert_eq!(query.region, Region::Me);
        assert_eq!(query.riot_id(), "Chalop#3012");
        assert!(app.is_loading());
    }

    #[test]
    fn form_is_frozen_while_loading() {
        let mut app = App::new(Region::Las, "16.1.1");
        type_text(&mut app, "Chalop#3012");
        app.update(Action::Submit);

        type_text(&mut app, "xyz");
        app.update(Action::Backspace);
        app.update(Action::NextRegion);

        assert_eq!(app.input, "Chalop#3012");
        assert_eq!(app.region, Region::Las);
        assert_eq!(app.update(Action::Submit), None);
    }

    #[test]
    fn invalid_input_is_reported_without_dispatch() {
        let mut app = App::new(Region::Las, "16.1.1");
        type_text(&mut app, "Chalop");

        assert_eq!(app.update(Action::Submit), None);
        assert_eq!(
            app.state(),
            &ViewState::Failure(SearchError::Validation(ValidationError::BadFormat))
        );
    }

    #[test]
    fn resolve_shows_profile_and_unfreezes_form() {
        let mut app = App::new(Region::Las, "16.1.1");
        type_text(&mut app, "Chalop#3012");
        app.update(Action::Submit);

        app.resolve(Ok(dummy_profile()));
        app.update(Action::Backspace);

        assert!(matches!(app.state(), ViewState::Success(_)));
        assert_eq!(app.input, "Chalop#301");
    }

    #[test]
    fn spinner_only_moves_while_loading() {
        let mut app = App::new(Region::Las, "16.1.1");
        app.update(Action::Tick);
        assert_eq!(app.spinner, 0);

        type_text(&mut app, "Chalop#3012");
        app.update(Action::Submit);
        app.update(Action::Tick);
        app.update(Action::Tick);
        assert_eq!(app.spinner, 2);
    }

    #[test]
    fn quit_is_always_accepted() {
        let mut app = App::new(Region::Las, "16.1.1");
        type_text(&mut app, "Chalop#3012");
        app.update(Action::Submit);

        app.update(Action::Quit);

        assert!(app.should_quit);
    }
}
