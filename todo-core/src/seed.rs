//! Bundled default list, shown when nothing has been stored yet.

use std::path::Path;

use crate::model::{TodoItem, decode_items};
use crate::{Error, Result};

const DEFAULT_SEED: &[(u64, &str, bool)] = &[
    (1, "Walk the dog", false),
    (2, "Water the plants", false),
    (3, "Reply to emails", true),
    (4, "Pay the electricity bill", false),
    (5, "Book a dentist appointment", false),
    (6, "Call mom", true),
    (7, "Pick up dry cleaning", false),
    (8, "Plan weekend trip", false),
];

/// The bundled seed list, in declaration order.
pub fn default_seed() -> Vec<TodoItem> {
    DEFAULT_SEED
        .iter()
        .map(|&(id, title, completed)| TodoItem {
            id,
            title: title.to_string(),
            completed,
        })
        .collect()
}

/// Read a replacement seed list from a JSON file in the persisted layout.
pub fn load_seed_file(path: &Path) -> Result<Vec<TodoItem>> {
    let json = std::fs::read_to_string(path).map_err(|source| Error::Read {
        key: path.display().to_string(),
        source,
    })?;
    decode_items(&json)
}

/// The seed named by `path`, falling back to [`default_seed`] if it is
/// missing or unreadable.
pub fn resolve_seed(path: Option<&Path>) -> Vec<TodoItem> {
    let Some(path) = path else {
        return default_seed();
    };

    match load_seed_file(path) {
        Ok(items) => {
            tracing::debug!(path = %path.display(), count = items.len(), "loaded seed file");
            items
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "falling back to bundled seed");
            default_seed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_seed_has_unique_ids() {
        let seed = default_seed();
        let ids: HashSet<u64> = seed.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), seed.len());
    }

    #[test]
    fn default_seed_titles_fit_limit() {
        for item in default_seed() {
            assert!(item.title.chars().count() <= crate::model::MAX_TITLE_LEN, "{}", item.title);
        }
    }

    #[test]
    fn seed_file_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(&path, r#"[{"id":1,"title":"Walk the dog","completed":false}]"#).unwrap();

        let seed = resolve_seed(Some(&path));
        assert_eq!(seed, vec![TodoItem::new(1, "Walk the dog")]);
    }

    #[test]
    fn missing_seed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let seed = resolve_seed(Some(&dir.path().join("nope.json")));
        assert_eq!(seed, default_seed());
    }

    #[test]
    fn malformed_seed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(&path, "[{]").unwrap();
        assert!(matches!(load_seed_file(&path), Err(Error::Codec(_))));
    }
}
