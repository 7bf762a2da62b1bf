use leptos::prelude::*;

use crate::components::filters::Filters;
use crate::components::repo_card::RepoCard;
use crate::github::Repository;
use crate::store::use_repo_store;
use crate::utils::{extract_languages, filter_repositories};

/// Renders the filter bar and the filtered card grid. The language set and
/// the filtered view are memoized on (result list, filter state); filtering
/// only ever hides cards, the underlying list stays intact in the session.
#[component]
pub fn RepoList(#[prop(into)] repositories: Signal<Vec<Repository>>) -> impl IntoView {
    let store = use_repo_store();

    let languages = Memo::new(move |_| extract_languages(&repositories.get()));
    Effect::new(move |_| store.set_available_languages(languages.get()));

    let filtered = Memo::new(move |_| {
        filter_repositories(
            &repositories.get(),
            &store.name_filter(),
            &store.language_filter(),
        )
    });

    view! {
        <Show when=move || !repositories.get().is_empty()>
            <div class="repo-list">
                <Filters available_languages=languages />

                {move || {
                    let filtered = filtered.get();
                    let total = repositories.get().len();
                    if filtered.is_empty() {
                        view! {
                            <div class="no-matches">
                                <p class="primary">"No repositories match the current filters"</p>
                                <p class="secondary">"Try adjusting your filters or search terms"</p>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="results-count">
                                <span>
                                    {format!("Showing {} of {} repositories", filtered.len(), total)}
                                </span>
                                {move || store.has_active_filters().then(|| view! {
                                    <span class="filtered-note">"Filtered results"</span>
                                })}
                            </div>
                            <div class="repo-grid">
                                {filtered
                                    .into_iter()
                                    .map(|repository| view! { <RepoCard repository=repository /> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </Show>
    }
}
