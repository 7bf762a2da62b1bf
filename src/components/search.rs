use leptos::prelude::*;

use crate::components::repo_list::RepoList;
use crate::components::search_bar::SearchBar;
use crate::github;
use crate::session::{SearchSession, SearchState};
use crate::store::use_repo_store;

/// Owns the search lifecycle: one fetch in flight at a time, its completion
/// applied through the session's stale-completion guard, and one of the
/// idle / loading / error / empty / results views rendered from the
/// session's state.
#[component]
pub fn RepoSearch() -> impl IntoView {
    let store = use_repo_store();
    let session = RwSignal::new(SearchSession::new());
    let input = RwSignal::new(String::new());

    let run_search = move |username: String| {
        log::debug!("searching repositories for {username}");
        session.update(|s| s.begin(&username));
        leptos::task::spawn_local(async move {
            let result = github::fetch_user_repositories(&username).await;
            session.update(|s| s.finish(&username, result));
        });
    };

    let on_search = Callback::new(run_search);

    let retry = move || {
        let username = session.with_untracked(|s| s.username().to_string());
        if !username.is_empty() {
            run_search(username);
        }
    };

    let reset = move || {
        session.update(|s| s.reset());
        input.set(String::new());
        store.set_username("");
        store.reset_filters();
    };

    let is_loading = Signal::derive(move || session.with(|s| s.is_loading()));
    let repositories = Signal::derive(move || session.with(|s| s.repositories().to_vec()));

    view! {
        <div class="repo-search">
            <section class="hero">
                <h2>"Explore GitHub Repositories"</h2>
                <p>
                    "Enter a GitHub username to discover their public repositories. "
                    "Filter by name, language, and explore their coding projects."
                </p>
            </section>

            <SearchBar on_search=on_search is_loading=is_loading input=input />

            {move || {
                let current = session.get();
                match current.state() {
                    SearchState::Idle => view! {
                        <div class="idle-state">
                            <p class="primary">"Ready to explore?"</p>
                            <p class="secondary">"Enter a GitHub username above to get started"</p>
                        </div>
                    }
                    .into_any(),

                    SearchState::Loading => view! {
                        <div class="loading-state">
                            <div class="spinner"></div>
                            <p>"Searching for repositories..."</p>
                        </div>
                    }
                    .into_any(),

                    SearchState::Failed(error) => {
                        let message = error.to_string();
                        view! {
                            <div class="error-state">
                                <p class="error-title">"Failed to fetch repositories"</p>
                                <p class="error-message">{message}</p>
                                <div class="error-actions">
                                    <button class="retry-button" on:click=move |_| retry()>
                                        "Retry"
                                    </button>
                                    <button class="reset-button" on:click=move |_| reset()>
                                        "Start New Search"
                                    </button>
                                </div>
                            </div>
                        }
                        .into_any()
                    }

                    SearchState::Loaded(user) if user.repositories.nodes.is_empty() => view! {
                        <div class="empty-state">
                            <p class="primary">"No repositories found"</p>
                            <p class="secondary">
                                "This user might not have any public repositories."
                            </p>
                            <button class="reset-button" on:click=move |_| reset()>
                                "Try Different Username"
                            </button>
                        </div>
                    }
                    .into_any(),

                    SearchState::Loaded(user) => {
                        let heading = format!("{}'s Repositories", user.display_name());
                        let count = user.repositories.nodes.len();
                        let summary = format!(
                            "Found {} public repositor{}",
                            count,
                            if count == 1 { "y" } else { "ies" }
                        );
                        view! {
                            <div class="results">
                                <div class="results-header">
                                    <h3>{heading}</h3>
                                    <button class="reset-button" on:click=move |_| reset()>
                                        "New Search"
                                    </button>
                                </div>
                                <p class="results-summary">{summary}</p>
                                <RepoList repositories=repositories />
                            </div>
                        }
                        .into_any()
                    }
                }
            }}
        </div>
    }
}
