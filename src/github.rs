use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// First (and only) page size requested from the repositories connection.
pub const PAGE_SIZE: u32 = 100;

const USER_REPOSITORIES_QUERY: &str = "\
query GetUserRepositories($username: String!, $first: Int!) {
  user(login: $username) {
    id
    login
    name
    avatarUrl
    repositories(
      first: $first
      orderBy: { field: UPDATED_AT, direction: DESC }
      isFork: false
    ) {
      totalCount
      pageInfo {
        hasNextPage
        endCursor
      }
      nodes {
        id
        name
        description
        url
        stargazerCount
        forkCount
        isPrivate
        updatedAt
        primaryLanguage {
          name
          color
        }
      }
    }
  }
}";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub stargazer_count: u32,
    pub fork_count: u32,
    #[serde(default)]
    pub is_private: bool,
    pub updated_at: String,
    pub primary_language: Option<Language>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryConnection {
    pub total_count: u32,
    pub page_info: PageInfo,
    pub nodes: Vec<Repository>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub repositories: RepositoryConnection,
}

impl User {
    /// Name shown in the results header, falling back to the login.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    user: Option<User>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
    #[serde(rename = "type", default)]
    error_type: Option<String>,
}

/// The two ways a completed query can resolve. Transport and API failures
/// are the `Err` side of the fetch, so the three cases stay mutually
/// exclusive.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    Found(User),
    NotFound,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum GithubError {
    #[error("GitHub API rate limit exceeded. Please try again later or check your token.")]
    RateLimited,
    #[error("Invalid GitHub token. Please check your GITHUB_TOKEN configuration.")]
    InvalidCredential,
    #[error("GitHub API error: {0}")]
    Api(String),
    #[error("Network error: {0}")]
    Network(String),
}

/// Map a raw failure detail onto the error taxonomy by its known markers.
pub fn classify_api_error(detail: &str) -> GithubError {
    let lower = detail.to_lowercase();
    if lower.contains("rate limit") {
        GithubError::RateLimited
    } else if lower.contains("bad credentials") {
        GithubError::InvalidCredential
    } else if detail.is_empty() {
        GithubError::Api("Unknown error".to_string())
    } else {
        GithubError::Api(detail.to_string())
    }
}

pub fn request_body(username: &str) -> serde_json::Value {
    serde_json::json!({
        "query": USER_REPOSITORIES_QUERY,
        "variables": { "username": username, "first": PAGE_SIZE },
    })
}

#[cfg(target_arch = "wasm32")]
fn window_token() -> Option<String> {
    let window = web_sys::window()?;
    let value =
        js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str("GITHUB_TOKEN")).ok()?;
    value.as_string().filter(|token| !token.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn window_token() -> Option<String> {
    None
}

/// Token injected either at runtime (`window.GITHUB_TOKEN`) or at build
/// time. A missing token is not fatal: the request goes out unauthenticated
/// and the server's rejection is classified like any other failure.
fn configured_token() -> Option<String> {
    window_token().or_else(|| option_env!("GITHUB_TOKEN").map(str::to_string))
}

pub async fn fetch_user_repositories(username: &str) -> Result<SearchOutcome, GithubError> {
    let body = request_body(username).to_string();

    let mut request = reqwasm::http::Request::post(GITHUB_GRAPHQL_URL)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json");
    if let Some(token) = configured_token() {
        request = request.header("Authorization", &format!("Bearer {token}"));
    } else {
        log::warn!("no GITHUB_TOKEN configured, sending unauthenticated request");
    }

    let response = request
        .body(body)
        .send()
        .await
        .map_err(|e| GithubError::Network(format!("{e:?}")))?;

    match response.status() {
        401 => return Err(GithubError::InvalidCredential),
        403 => return Err(GithubError::RateLimited),
        _ => {}
    }
    if !response.ok() {
        return Err(classify_api_error(&format!("HTTP {}", response.status())));
    }

    let parsed: GraphQlResponse = response
        .json()
        .await
        .map_err(|e| GithubError::Api(format!("Failed to parse response: {e:?}")))?;

    interpret_response(parsed)
}

/// Resolve the "null user vs. error" ambiguity into a single outcome: a
/// present user always wins, a NOT_FOUND error (or a null user with no
/// errors at all) means the account does not exist, and anything else is
/// classified as a failure.
fn interpret_response(response: GraphQlResponse) -> Result<SearchOutcome, GithubError> {
    if let Some(user) = response.data.and_then(|data| data.user) {
        return Ok(SearchOutcome::Found(user));
    }

    if let Some(error) = response.errors.into_iter().flatten().next() {
        if error.error_type.as_deref() == Some("NOT_FOUND")
            || error.message.to_lowercase().contains("could not resolve")
        {
            return Ok(SearchOutcome::NotFound);
        }
        log::warn!("GitHub query failed: {}", error.message);
        return Err(classify_api_error(&error.message));
    }

    Ok(SearchOutcome::NotFound)
}
