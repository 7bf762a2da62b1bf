use leptos::prelude::*;

/// Sentinel meaning "no language filter".
pub const ALL_LANGUAGES: &str = "all";

/// Shared UI state that outlives individual searches: the account name shown
/// in the header chrome plus the active filters. Built once at the
/// application root and handed down through context; mutation only goes
/// through the named setters below, and every read is signal-tracked so
/// subscribers re-render on change. Nothing async lives here.
#[derive(Clone, Copy)]
pub struct RepoStore {
    username: RwSignal<String>,
    name_filter: RwSignal<String>,
    language_filter: RwSignal<String>,
    available_languages: RwSignal<Vec<String>>,
}

impl RepoStore {
    pub fn new() -> Self {
        Self {
            username: RwSignal::new(String::new()),
            name_filter: RwSignal::new(String::new()),
            language_filter: RwSignal::new(ALL_LANGUAGES.to_string()),
            available_languages: RwSignal::new(Vec::new()),
        }
    }

    pub fn username(&self) -> String {
        self.username.get()
    }

    pub fn name_filter(&self) -> String {
        self.name_filter.get()
    }

    pub fn language_filter(&self) -> String {
        self.language_filter.get()
    }

    pub fn available_languages(&self) -> Vec<String> {
        self.available_languages.get()
    }

    pub fn set_username(&self, username: &str) {
        self.username.set(username.to_string());
    }

    pub fn set_name_filter(&self, filter: &str) {
        self.name_filter.set(filter.to_string());
    }

    pub fn set_language_filter(&self, language: &str) {
        self.language_filter.set(language.to_string());
    }

    pub fn set_available_languages(&self, languages: Vec<String>) {
        self.available_languages.set(languages);
    }

    /// Restore both filters to their defaults. The committed account name is
    /// untouched.
    pub fn reset_filters(&self) {
        self.name_filter.set(String::new());
        self.language_filter.set(ALL_LANGUAGES.to_string());
    }

    pub fn has_active_filters(&self) -> bool {
        !self.name_filter.get().is_empty() || self.language_filter.get() != ALL_LANGUAGES
    }
}

impl Default for RepoStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the store at the application root and expose it through context.
pub fn provide_repo_store() -> RepoStore {
    let store = RepoStore::new();
    provide_context(store);
    store
}

pub fn use_repo_store() -> RepoStore {
    expect_context::<RepoStore>()
}
