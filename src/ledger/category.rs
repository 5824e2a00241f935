use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Groups ledger transactions under a named label.
///
/// The title is the natural key: lookups match it exactly (case-sensitive) and
/// no two categories ever share one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub title: String,
}

impl Category {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
        }
    }
}
