use dinnerwheel_shared::Item;
use serde_json::Value;

/// Normalize raw stored content for a dinner list into the current item
/// shape, whatever shape it was written in.
///
/// Two historical shapes exist: a bare array of name strings (legacy) and
/// an array of structured records (current). The first element decides
/// which one we are looking at; legacy entries get a fresh id and
/// timestamp. Missing, empty, or malformed content degrades to an empty
/// list so the caller can start fresh; a parse failure here is never an
/// error.
pub fn migrate_items(raw: Option<&str>) -> Vec<Item> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, "ignoring malformed stored list");
            return Vec::new();
        }
    };

    let Value::Array(entries) = value else {
        tracing::warn!("ignoring stored list that is not an array");
        return Vec::new();
    };

    match entries.first() {
        None => Vec::new(),
        Some(Value::String(_)) => entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::String(name) => Some(Item::new(name)),
                _ => None,
            })
            .collect(),
        Some(_) => entries
            .into_iter()
            .filter_map(|entry| {
                serde_json::from_value::<Item>(entry)
                    .map_err(|err| tracing::warn!(%err, "dropping unreadable item"))
                    .ok()
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_content_yields_empty_list() {
        assert!(migrate_items(None).is_empty());
    }

    #[test]
    fn test_malformed_content_yields_empty_list() {
        assert!(migrate_items(Some("not json")).is_empty());
        assert!(migrate_items(Some("{\"a\":1}")).is_empty());
    }

    #[test]
    fn test_legacy_names_become_fresh_items() {
        let items = migrate_items(Some(r#"["Pizza","Tacos"]"#));

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Pizza");
        assert_eq!(items[1].name, "Tacos");
        assert!(!items[0].pinned);
        assert_ne!(items[0].id, items[1].id);
    }

    #[test]
    fn test_structured_records_pass_through() {
        let raw = r#"[{"id":"x1","name":"Ramen","createdAt":"2024-01-15T18:30:00Z"}]"#;
        let items = migrate_items(Some(raw));

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "x1");
        assert!(!items[0].pinned, "missing pinned defaults to false");
    }
}
