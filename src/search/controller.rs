//! Search lifecycle: `Idle -> Loading -> Success | Failure`, re-entered on
//! every new submission.

use tracing::{debug, info, warn};

use crate::error::{FetchError, SearchError};
use crate::profile::{PlayerProfile, Region};

use super::query::{SearchQuery, validate};

/// What the UI currently shows. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Success(PlayerProfile),
    Failure(SearchError),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Result of handing raw input to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// A request is already in flight; nothing changed.
    Ignored,
    /// Input was rejected; the controller moved to `Failure`.
    Rejected,
    /// The controller moved to `Loading`; the query must be fetched exactly once.
    Dispatch(SearchQuery),
}

/// Owner and only writer of the [`ViewState`] for one view.
#[derive(Debug, Default)]
pub struct SearchController {
    state: ViewState,
}

impl SearchController {
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn submit(&mut self, raw: &str, region: Region) -> Submission {
        if self.state.is_loading() {
            debug!("🔎 [SEARCH] submission ignored while loading");
            return Submission::Ignored;
        }

        match validate(raw, region) {
            Ok(query) => {
                info!(riot_id = %query.riot_id(), region = %region, "🔎 [SEARCH] searching");
                self.state = ViewState::Loading;
                Submission::Dispatch(query)
            }
            Err(e) => {
                debug!(error = %e, "🔎 [SEARCH] input rejected");
                self.state = ViewState::Failure(e.into());
                Submission::Rejected
            }
        }
    }

    /// Apply the outcome of the in-flight request. Outcomes arriving outside
    /// `Loading` are dropped.
    pub fn resolve(&mut self, outcome: Result<PlayerProfile, FetchError>) {
        if !self.state.is_loading() {
            warn!("🔎 ⚠️ [SEARCH] outcome received while not loading, dropped");
            return;
        }

        self.state = match outcome {
            Ok(profile) => {
                info!(puuid = ?profile.puuid, "🔎 [SEARCH] profile loaded");
                ViewState::Success(profile)
            }
            Err(e) => {
                let err = SearchError::from(e);
                info!(kind = ?err.kind(), error = %err, "🔎 [SEARCH] search failed");
                ViewState::Failure(err)
            }
        };
    }
}
