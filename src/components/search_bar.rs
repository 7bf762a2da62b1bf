use leptos::prelude::*;

use crate::store::use_repo_store;
use crate::utils::normalize_username;

/// Username input. The raw text lives in `input`, owned by the parent so a
/// full reset can clear it; only a trimmed, non-empty value is committed to
/// the store and handed to the search callback.
#[component]
pub fn SearchBar(
    on_search: Callback<String>,
    #[prop(into)] is_loading: Signal<bool>,
    input: RwSignal<String>,
) -> impl IntoView {
    let store = use_repo_store();

    let submit = move || {
        if is_loading.get_untracked() {
            return;
        }
        let Some(username) = normalize_username(&input.get_untracked()) else {
            return;
        };
        store.set_username(&username);
        on_search.run(username);
    };

    view! {
        <div class="search-bar">
            <input
                type="text"
                class="search-input"
                placeholder="Enter GitHub username..."
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        submit();
                    }
                }
                disabled=move || is_loading.get()
            />
            <button
                class="search-button"
                on:click=move |_| submit()
                disabled=move || is_loading.get() || input.get().trim().is_empty()
            >
                {move || if is_loading.get() { "Searching..." } else { "Search" }}
            </button>
        </div>
    }
}
