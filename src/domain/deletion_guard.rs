//! Deletion guard: an entity with child records cannot be deleted.

use crate::domain::kind::EntityKind;

/// A child row referencing the entity being deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildRecord {
    pub kind: EntityKind,
    pub id: i64,
    pub label: String,
}

impl ChildRecord {
    pub fn new(kind: EntityKind, id: i64, label: impl Into<String>) -> Self {
        Self {
            kind,
            id,
            label: label.into(),
        }
    }

    pub fn detail_path(&self) -> String {
        self.kind.detail_path(self.id)
    }
}

/// Result of checking whether an entity may be deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionCheck {
    Deletable,
    /// Every child that references the entity, for display.
    Blocked(Vec<ChildRecord>),
}

impl DeletionCheck {
    pub fn from_children(children: Vec<ChildRecord>) -> Self {
        if children.is_empty() {
            DeletionCheck::Deletable
        } else {
            DeletionCheck::Blocked(children)
        }
    }

    pub fn is_deletable(&self) -> bool {
        matches!(self, DeletionCheck::Deletable)
    }

    pub fn blocking_children(&self) -> &[ChildRecord] {
        match self {
            DeletionCheck::Deletable => &[],
            DeletionCheck::Blocked(children) => children,
        }
    }
}

/// Result of a guarded delete executed in a single transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Blocked(Vec<ChildRecord>),
}
