//! Process-environment helpers for search-path resolution.

use crate::constants::PATH_LIST_SEPARATOR;

/// Split a `PATH`-style list into its non-empty entries.
#[must_use]
pub fn split_search_paths(value: &str) -> Vec<String> {
    value
        .split(PATH_LIST_SEPARATOR)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

/// The directories searched for executables, taken from the process `PATH`.
/// Empty when `PATH` is unset or not valid UTF-8.
#[must_use]
pub fn executable_search_paths() -> Vec<String> {
    std::env::var("PATH")
        .map(|value| split_search_paths(&value))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_drops_empty_entries() {
        assert_eq!(
            split_search_paths("/usr/bin:/bin::/opt/tools:"),
            vec!["/usr/bin", "/bin", "/opt/tools"]
        );
        assert!(split_search_paths("").is_empty());
    }
}
