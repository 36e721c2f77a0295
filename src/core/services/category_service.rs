use crate::domain::category::Category;
use crate::domain::snapshot::Snapshot;

use super::{ServiceError, ServiceResult};

/// Category mutations and the cascade-delete computation.
pub struct CategoryService;

impl CategoryService {
    /// Adds a category after rejecting duplicate names, returning its id.
    pub fn add(snapshot: &mut Snapshot, category: Category) -> ServiceResult<String> {
        Self::validate_name(snapshot, None, &category.name)?;
        let id = category.id.clone();
        snapshot.categories.push(category);
        Ok(id)
    }

    /// Replaces the name, kind, and color of the category identified by `id`.
    pub fn edit(snapshot: &mut Snapshot, id: &str, changes: Category) -> ServiceResult<()> {
        Self::validate_name(snapshot, Some(id), &changes.name)?;
        let category = snapshot
            .category_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Category not found".into()))?;
        category.name = changes.name;
        category.kind = changes.kind;
        category.color = changes.color;
        Ok(())
    }

    /// Collections as they stand after removing a category and everything
    /// that hangs off it: the category itself, every transaction referencing
    /// it, and its budget limit.
    ///
    /// Pure computation; the inputs are untouched and persisting the result
    /// is the caller's responsibility.
    pub fn cascade_delete(snapshot: &Snapshot, category_id: &str) -> Snapshot {
        let categories = snapshot
            .categories
            .iter()
            .filter(|category| category.id != category_id)
            .cloned()
            .collect();
        let transactions = snapshot
            .transactions
            .iter()
            .filter(|txn| txn.category_id.as_deref() != Some(category_id))
            .cloned()
            .collect();
        let mut budget_limits = snapshot.budget_limits.clone();
        budget_limits.remove(category_id);
        Snapshot::new(categories, transactions, budget_limits)
    }

    fn validate_name(
        snapshot: &Snapshot,
        exclude: Option<&str>,
        candidate: &str,
    ) -> ServiceResult<()> {
        let normalized = candidate.trim().to_ascii_lowercase();
        let duplicate = snapshot.categories.iter().any(|category| {
            let name = category.name.trim().to_ascii_lowercase();
            name == normalized && exclude.map_or(true, |id| category.id != id)
        });
        if duplicate {
            Err(ServiceError::Invalid(format!(
                "Category `{}` already exists",
                candidate
            )))
        } else {
            Ok(())
        }
    }
}
