//! The to-do record and the list helpers the screen is built on.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Default cap on title length, in characters.
pub const MAX_TITLE_LEN: usize = 30;

/// A single task on the list.
///
/// Serialized as `{"id": 1, "title": "...", "completed": false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    /// Create an open (not completed) item.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }
}

/// Id for the next item: one past the largest id, or 1 for an empty list.
///
/// `None` once the largest id is `u64::MAX`.
pub fn next_id(items: &[TodoItem]) -> Option<u64> {
    match items.iter().map(|item| item.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// Trim `raw` and cap it at `max_len` characters.
///
/// Returns `None` when nothing is left after trimming.
pub fn normalize_title(raw: &str, max_len: usize) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let title: String = trimmed.chars().take(max_len).collect();
    // Truncation can expose trailing whitespace from the middle of the input.
    Some(title.trim_end().to_string())
}

/// Order items newest first (descending id).
pub fn sort_newest_first(items: &mut [TodoItem]) {
    items.sort_by(|a, b| b.id.cmp(&a.id));
}

/// Serialize the list to the persisted JSON array.
pub fn encode_items(items: &[TodoItem]) -> Result<String> {
    Ok(serde_json::to_string(items)?)
}

/// Parse the persisted JSON array.
pub fn decode_items(json: &str) -> Result<Vec<TodoItem>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id(&[]), Some(1));
    }

    #[test]
    fn next_id_is_one_past_max() {
        let items = vec![TodoItem::new(3, "c"), TodoItem::new(7, "g"), TodoItem::new(5, "e")];
        assert_eq!(next_id(&items), Some(8));
    }

    #[test]
    fn next_id_is_none_when_ids_run_out() {
        let items = vec![TodoItem::new(u64::MAX, "x"), TodoItem::new(1, "a")];
        assert_eq!(next_id(&items), None);
    }

    #[test]
    fn normalize_rejects_blank() {
        assert_eq!(normalize_title("", MAX_TITLE_LEN), None);
        assert_eq!(normalize_title("   \t\n", MAX_TITLE_LEN), None);
    }

    #[test]
    fn normalize_trims() {
        assert_eq!(
            normalize_title("  Buy milk  ", MAX_TITLE_LEN).as_deref(),
            Some("Buy milk")
        );
    }

    #[test]
    fn normalize_truncates_by_chars() {
        let long = "é".repeat(40);
        let title = normalize_title(&long, MAX_TITLE_LEN).unwrap();
        assert_eq!(title.chars().count(), MAX_TITLE_LEN);
    }

    #[test]
    fn normalize_truncation_drops_dangling_space() {
        assert_eq!(normalize_title("abc def", 4).as_deref(), Some("abc"));
    }

    #[test]
    fn sort_orders_descending() {
        let mut items = vec![TodoItem::new(1, "a"), TodoItem::new(3, "c"), TodoItem::new(2, "b")];
        sort_newest_first(&mut items);
        let ids: Vec<u64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn encoded_layout_matches_persisted_format() {
        let json = encode_items(&[TodoItem::new(1, "Walk the dog")]).unwrap();
        assert_eq!(json, r#"[{"id":1,"title":"Walk the dog","completed":false}]"#);
    }

    #[test]
    fn list_survives_encode_and_decode() {
        let mut done = TodoItem::new(2, "Buy milk");
        done.completed = true;
        let items = vec![done, TodoItem::new(1, "Walk the dog")];

        let decoded = decode_items(&encode_items(&items).unwrap()).unwrap();
        assert_eq!(decoded, items);
    }

    #[test]
    fn decode_defaults_missing_completed() {
        let items = decode_items(r#"[{"id":4,"title":"x"}]"#).unwrap();
        assert!(!items[0].completed);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(decode_items("{not json"), Err(crate::Error::Codec(_))));
    }
}
