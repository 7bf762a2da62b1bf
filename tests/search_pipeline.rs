//! End-to-end exercises of the search pipeline below the view layer:
//! session transitions feeding the store-driven filter pipeline.

use repo_explorer::github::{
    GithubError, Language, PageInfo, Repository, RepositoryConnection, SearchOutcome, User,
};
use repo_explorer::session::SearchSession;
use repo_explorer::store::{RepoStore, ALL_LANGUAGES};
use repo_explorer::utils::{extract_languages, filter_repositories};

fn repo(name: &str, language: Option<&str>) -> Repository {
    Repository {
        id: format!("R_{name}"),
        name: name.to_string(),
        description: Some(format!("The {name} project")),
        url: format!("https://github.com/octocat/{name}"),
        stargazer_count: 42,
        fork_count: 7,
        is_private: false,
        updated_at: "2024-01-01T00:00:00Z".to_string(),
        primary_language: language.map(|name| Language {
            name: name.to_string(),
            color: "#3178c6".to_string(),
        }),
    }
}

fn user(login: &str, repos: Vec<Repository>) -> User {
    User {
        id: format!("U_{login}"),
        login: login.to_string(),
        name: None,
        avatar_url: String::new(),
        repositories: RepositoryConnection {
            total_count: repos.len() as u32,
            page_info: PageInfo {
                has_next_page: false,
                end_cursor: None,
            },
            nodes: repos,
        },
    }
}

#[test]
fn language_filter_hides_without_removing() {
    let store = RepoStore::new();
    let mut session = SearchSession::new();

    // "octocat" resolves to three repositories, two TypeScript and one
    // Python.
    store.set_username("octocat");
    session.begin("octocat");
    session.finish(
        "octocat",
        Ok(SearchOutcome::Found(user(
            "octocat",
            vec![
                repo("web-app", Some("TypeScript")),
                repo("data-tool", Some("Python")),
                repo("cli", Some("TypeScript")),
            ],
        ))),
    );

    let repos = session.repositories();
    let languages = extract_languages(repos);
    store.set_available_languages(languages.clone());
    assert_eq!(languages, vec!["Python", "TypeScript"]);

    store.set_language_filter("Python");
    let filtered = filter_repositories(repos, &store.name_filter(), &store.language_filter());
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "data-tool");

    // The underlying result set is untouched; clearing restores all three.
    assert_eq!(session.repositories().len(), 3);
    store.reset_filters();
    let restored = filter_repositories(repos, &store.name_filter(), &store.language_filter());
    assert_eq!(restored.len(), 3);
    assert_eq!(store.username(), "octocat");
}

#[test]
fn nonexistent_account_reports_not_found_and_keeps_results_empty() {
    let mut session = SearchSession::new();

    session.begin("this-user-does-not-exist");
    session.finish("this-user-does-not-exist", Ok(SearchOutcome::NotFound));

    let error = session.error().expect("expected a not-found error");
    assert!(error.to_string().contains("this-user-does-not-exist"));
    assert!(session.repositories().is_empty());
    assert!(!session.is_loading());
}

#[test]
fn stale_language_filter_after_new_search_degrades_to_no_matches() {
    let store = RepoStore::new();
    let mut session = SearchSession::new();

    session.begin("octocat");
    session.finish(
        "octocat",
        Ok(SearchOutcome::Found(user(
            "octocat",
            vec![repo("web-app", Some("TypeScript"))],
        ))),
    );
    store.set_language_filter("TypeScript");

    // A new search replaces the results with a Rust-only set; the old
    // filter value now matches nothing, but nothing breaks.
    session.begin("ferris");
    session.finish(
        "ferris",
        Ok(SearchOutcome::Found(user(
            "ferris",
            vec![repo("crab-tool", Some("Rust"))],
        ))),
    );
    store.set_available_languages(extract_languages(session.repositories()));

    let filtered = filter_repositories(
        session.repositories(),
        &store.name_filter(),
        &store.language_filter(),
    );
    assert!(filtered.is_empty());
    assert!(!store.available_languages().contains(&"TypeScript".to_string()));
}

#[test]
fn api_failure_after_results_clears_them_and_retry_reloads() {
    let mut session = SearchSession::new();

    session.begin("octocat");
    session.finish(
        "octocat",
        Ok(SearchOutcome::Found(user("octocat", vec![repo("web-app", None)]))),
    );
    assert_eq!(session.repositories().len(), 1);

    // Retry path: same name, new fetch, this time rate limited.
    let retry_name = session.username().to_string();
    session.begin(&retry_name);
    assert!(session.repositories().is_empty());
    session.finish(&retry_name, Err(GithubError::RateLimited));

    let error = session.error().expect("expected an error");
    assert!(error.to_string().contains("rate limit"));
    assert!(session.repositories().is_empty());

    // And a successful retry recovers.
    session.begin(&retry_name);
    session.finish(
        &retry_name,
        Ok(SearchOutcome::Found(user("octocat", vec![repo("web-app", None)]))),
    );
    assert!(session.error().is_none());
    assert_eq!(session.repositories().len(), 1);
}

#[test]
fn reset_returns_store_and_session_to_initial_state() {
    let store = RepoStore::new();
    let mut session = SearchSession::new();

    store.set_username("octocat");
    store.set_name_filter("web");
    store.set_language_filter("TypeScript");
    session.begin("octocat");

    session.reset();
    store.set_username("");
    store.reset_filters();

    assert_eq!(session.username(), "");
    assert!(session.repositories().is_empty());
    assert_eq!(store.username(), "");
    assert_eq!(store.name_filter(), "");
    assert_eq!(store.language_filter(), ALL_LANGUAGES);
}
