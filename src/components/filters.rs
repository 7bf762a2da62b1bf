use leptos::prelude::*;

use crate::store::{use_repo_store, ALL_LANGUAGES};

/// Filter bar bound to the shared store: free-text name/description filter,
/// language selector fed by the parent, removable chips for any active
/// filter, and a clear action that leaves the result set alone.
#[component]
pub fn Filters(#[prop(into)] available_languages: Signal<Vec<String>>) -> impl IntoView {
    let store = use_repo_store();

    view! {
        <div class="filters">
            <div class="filter-controls">
                <input
                    type="text"
                    class="name-filter"
                    placeholder="Filter by name or description..."
                    prop:value=move || store.name_filter()
                    on:input=move |ev| store.set_name_filter(&event_target_value(&ev))
                />
                <select
                    class="language-filter"
                    on:change=move |ev| store.set_language_filter(&event_target_value(&ev))
                >
                    <option
                        value=ALL_LANGUAGES
                        selected=move || store.language_filter() == ALL_LANGUAGES
                    >
                        "All languages"
                    </option>
                    {move || {
                        available_languages
                            .get()
                            .into_iter()
                            .map(|language| {
                                let value = language.clone();
                                let current = language.clone();
                                view! {
                                    <option
                                        value=value
                                        selected=move || store.language_filter() == current
                                    >
                                        {language}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <Show when=move || store.has_active_filters()>
                    <button class="clear-filters" on:click=move |_| store.reset_filters()>
                        "Clear"
                    </button>
                </Show>
            </div>

            {move || {
                if !store.has_active_filters() {
                    return None;
                }
                let name = store.name_filter();
                let language = store.language_filter();
                Some(view! {
                    <div class="active-filters">
                        <span class="active-filters-label">"Active filters:"</span>
                        {(!name.is_empty())
                            .then(|| view! {
                                <button
                                    class="filter-chip"
                                    on:click=move |_| store.set_name_filter("")
                                >
                                    {format!("Name: {name}")}
                                    <span class="chip-remove">"×"</span>
                                </button>
                            })}
                        {(language != ALL_LANGUAGES)
                            .then(|| view! {
                                <button
                                    class="filter-chip"
                                    on:click=move |_| store.set_language_filter(ALL_LANGUAGES)
                                >
                                    {format!("Language: {language}")}
                                    <span class="chip-remove">"×"</span>
                                </button>
                            })}
                    </div>
                })
            }}
        </div>
    }
}
