use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::github::Repository;
use crate::store::ALL_LANGUAGES;

/// Distinct primary-language names present in `repositories`, ascending.
/// Entries without a primary language are skipped.
pub fn extract_languages(repositories: &[Repository]) -> Vec<String> {
    let languages: BTreeSet<String> = repositories
        .iter()
        .filter_map(|repo| repo.primary_language.as_ref())
        .map(|language| language.name.clone())
        .collect();
    languages.into_iter().collect()
}

/// Apply the compound name/language filter, preserving input order. The
/// name filter matches name or description case-insensitively; the language
/// filter is an exact, case-sensitive match on the primary-language name. A
/// language value left over from a previous result set simply matches
/// nothing.
pub fn filter_repositories(
    repositories: &[Repository],
    name_filter: &str,
    language_filter: &str,
) -> Vec<Repository> {
    let needle = name_filter.to_lowercase();
    repositories
        .iter()
        .filter(|repo| {
            let matches_name = needle.is_empty()
                || repo.name.to_lowercase().contains(&needle)
                || repo
                    .description
                    .as_ref()
                    .is_some_and(|description| description.to_lowercase().contains(&needle));

            let matches_language = language_filter.is_empty()
                || language_filter == ALL_LANGUAGES
                || repo
                    .primary_language
                    .as_ref()
                    .is_some_and(|language| language.name == language_filter);

            matches_name && matches_language
        })
        .cloned()
        .collect()
}

/// Trim a raw search-box value down to a committable account name. Empty
/// and whitespace-only input yields nothing.
pub fn normalize_username(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Compact star/fork counts: 999, 1.0K, 10.0K, 1.0M.
pub fn format_number(n: u32) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", f64::from(n) / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", f64::from(n) / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Relative "Updated ..." label for an ISO-8601 timestamp. Anything a year
/// old or more falls back to a plain calendar date; an unparseable input is
/// rendered as-is.
pub fn format_date(timestamp: &str) -> String {
    let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) else {
        return timestamp.to_string();
    };
    let updated = parsed.with_timezone(&Utc);
    // A timestamp slightly in the future (clock skew) clamps to today.
    let days = (Utc::now() - updated).num_days().max(0);

    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        7..=29 => format!("{} weeks ago", days / 7),
        30..=364 => format!("{} months ago", days / 30),
        _ => updated.format("%d/%m/%Y").to_string(),
    }
}
