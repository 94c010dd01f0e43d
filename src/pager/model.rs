//! Wire types returned by the to-do backend.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 1-based page index. Zero only appears in the placeholder page.
pub type PageNumber = u64;

/// Opaque item identifier; the backend may send numbers or strings.
///
/// Numbers keep their JSON form, so floats and ids above `i64::MAX` decode too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(serde_json::Number),
    Text(String),
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        ItemId::Number(id.into())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(id) => write!(f, "{}", id),
            ItemId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub completed: bool,
}

/// One fetched batch of items plus pagination metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(alias = "data")]
    pub items: Vec<Item>,
    pub total: u64,
    pub page_number: PageNumber,
    pub page_size: u64,
}

impl Page {
    /// Placeholder used until the first fetch resolves.
    pub fn empty() -> Self {
        Self::default()
    }
}
