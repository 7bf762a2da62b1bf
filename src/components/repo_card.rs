use leptos::prelude::*;

use crate::github::Repository;
use crate::utils::{format_date, format_number};

#[component]
pub fn RepoCard(repository: Repository) -> impl IntoView {
    let Repository {
        name,
        description,
        url,
        stargazer_count,
        fork_count,
        is_private,
        updated_at,
        primary_language,
        ..
    } = repository;

    view! {
        <div class="repo-card">
            <div class="repo-card-header">
                <a class="repo-name" href=url target="_blank" rel="noopener noreferrer">
                    {name}
                </a>
                {is_private.then(|| view! { <span class="badge private-badge">"Private"</span> })}
                {primary_language.map(|language| view! {
                    <span class="badge language-badge">
                        <span class="language-dot" style:background-color=language.color></span>
                        {language.name}
                    </span>
                })}
            </div>

            {description.map(|description| view! {
                <p class="repo-description">{description}</p>
            })}

            <div class="repo-card-footer">
                <span class="stat stars">"★ " {format_number(stargazer_count)}</span>
                <span class="stat forks">"⑂ " {format_number(fork_count)}</span>
                <span class="updated">"Updated " {format_date(&updated_at)}</span>
            </div>
        </div>
    }
}
