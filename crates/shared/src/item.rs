use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A candidate dinner, used for both the pool and the generated history.
///
/// Serialized with camelCase names for compatibility with previously stored
/// data. Older stored records used `date` for the timestamp and `isPinned`
/// for the flag; both are accepted as aliases on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default = "Utc::now", alias = "date")]
    pub created_at: DateTime<Utc>,
    #[serde(default, alias = "isPinned")]
    pub pinned: bool,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: Utc::now(),
            pinned: false,
        }
    }
}
