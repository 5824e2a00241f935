//! Create-or-reuse lookup for category titles.

use std::collections::{HashMap, HashSet};

use crate::ledger::{Category, Ledger};

use super::ServiceResult;

/// Maps category titles to persisted rows, creating the missing ones.
pub struct CategoryResolver;

impl CategoryResolver {
    /// Resolves every title in `titles` (duplicates allowed) to exactly one
    /// category, creating rows for titles the ledger has never seen.
    ///
    /// Existing rows are reused verbatim, so resolving the same title twice,
    /// within one batch or across calls, never produces two categories. The
    /// returned map is valid for the duration of the calling operation.
    pub fn resolve(
        ledger: &mut Ledger,
        titles: &[String],
    ) -> ServiceResult<HashMap<String, Category>> {
        let mut seen = HashSet::new();
        let distinct: Vec<&String> = titles
            .iter()
            .filter(|title| seen.insert(title.as_str()))
            .collect();

        let mut resolved = HashMap::with_capacity(distinct.len());
        for category in &ledger.categories {
            if seen.contains(category.title.as_str()) {
                resolved.insert(category.title.clone(), category.clone());
            }
        }

        let new_categories: Vec<Category> = distinct
            .iter()
            .filter(|title| !resolved.contains_key(title.as_str()))
            .map(|title| Category::new(title.as_str()))
            .collect();

        if !new_categories.is_empty() {
            tracing::debug!(created = new_categories.len(), "Created missing categories.");
        }
        for category in new_categories {
            resolved.insert(category.title.clone(), category.clone());
            ledger.add_category(category);
        }

        Ok(resolved)
    }
}
