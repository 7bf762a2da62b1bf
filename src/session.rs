use thiserror::Error;

use crate::github::{GithubError, Repository, SearchOutcome, User};

/// Terminal description of a failed search, one variant per user-facing
/// message.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SearchError {
    #[error("User \"{0}\" not found on GitHub")]
    UserNotFound(String),
    #[error(transparent)]
    Api(#[from] GithubError),
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Loaded(User),
    Failed(SearchError),
}

/// One committed search, from submission to its terminal state. Holds the
/// username the in-flight fetch was issued for so a completion that arrives
/// after a newer search has started can be recognized and dropped.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SearchSession {
    username: String,
    state: SearchState,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last committed account name, empty when no search is active.
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SearchState::Loading)
    }

    pub fn error(&self) -> Option<&SearchError> {
        match &self.state {
            SearchState::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SearchState::Loaded(user) => Some(user),
            _ => None,
        }
    }

    pub fn repositories(&self) -> &[Repository] {
        match &self.state {
            SearchState::Loaded(user) => &user.repositories.nodes,
            _ => &[],
        }
    }

    /// Start a search for `username`, dropping any previous results or
    /// error.
    pub fn begin(&mut self, username: &str) {
        self.username = username.to_string();
        self.state = SearchState::Loading;
    }

    /// Apply a fetch completion. A completion whose originating username no
    /// longer matches the committed one belongs to a superseded search and
    /// is discarded, as is anything arriving when no fetch is in flight.
    pub fn finish(&mut self, username: &str, result: Result<SearchOutcome, GithubError>) {
        if username != self.username || !self.is_loading() {
            log::warn!("discarding stale search completion for {username}");
            return;
        }
        self.state = match result {
            Ok(SearchOutcome::Found(user)) => SearchState::Loaded(user),
            Ok(SearchOutcome::NotFound) => {
                SearchState::Failed(SearchError::UserNotFound(self.username.clone()))
            }
            Err(error) => SearchState::Failed(SearchError::Api(error)),
        };
    }

    /// Back to a blank slate: no committed name, no results, no error.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
