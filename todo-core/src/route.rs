//! Navigation targets within the app.

use std::fmt;

/// Where the app is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    List,
    /// Detail page for a single item.
    Detail { id: u64 },
}

impl Route {
    /// Path form, e.g. `/todos/3`.
    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Detail { id } => format!("/todos/{id}"),
        }
    }

    /// Parse a path produced by [`Route::path`].
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        if path.is_empty() {
            return Some(Route::List);
        }

        let id = path.strip_prefix("/todos/")?;
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        id.parse().ok().map(|id| Route::Detail { id })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_path_carries_id() {
        assert_eq!(Route::Detail { id: 12 }.path(), "/todos/12");
        assert_eq!(Route::List.path(), "/");
    }

    #[test]
    fn parse_accepts_known_paths() {
        assert_eq!(Route::parse("/"), Some(Route::List));
        assert_eq!(Route::parse(""), Some(Route::List));
        assert_eq!(Route::parse("/todos/7"), Some(Route::Detail { id: 7 }));
        assert_eq!(Route::parse("/todos/7/"), Some(Route::Detail { id: 7 }));
    }

    #[test]
    fn parse_rejects_unknown_paths() {
        assert_eq!(Route::parse("/todos/"), None);
        assert_eq!(Route::parse("/todos/-1"), None);
        assert_eq!(Route::parse("/todos/abc"), None);
        assert_eq!(Route::parse("/settings"), None);
    }
}
