//! Domain types representing transaction categories.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// Classifies transactions for budgeting and reporting.
///
/// `color` is an opaque display token (typically a hex code) consumed only by
/// chart renderers; aggregation attaches no meaning to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub kind: EntryKind,
    pub color: String,
}

impl Category {
    pub fn new(name: impl Into<String>, kind: EntryKind, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            kind,
            color: color.into(),
        }
    }

    /// Rebuilds a category with a caller-supplied identifier, e.g. one issued
    /// by a backing document store.
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: EntryKind,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            color: color.into(),
        }
    }
}

impl Identifiable for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }
}
