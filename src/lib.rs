pub mod components;
pub mod github;
pub mod session;
pub mod store;
pub mod utils;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};

use components::search::RepoSearch;
use store::provide_repo_store;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let store = provide_repo_store();

    view! {
        <Title text="GitHub Repo Explorer" />
        <div class="app">
            <header class="app-header">
                <h1>"GitHub Repo Explorer"</h1>
                {move || {
                    let username = store.username();
                    (!username.is_empty()).then(|| view! {
                        <span class="viewing">
                            "Viewing: " <strong>{format!("@{username}")}</strong>
                        </span>
                    })
                }}
            </header>

            <main class="app-main">
                <RepoSearch />
            </main>

            <footer class="app-footer">
                <p>"Powered by the GitHub GraphQL API | Built with Rust + Leptos"</p>
            </footer>
        </div>
    }
}
