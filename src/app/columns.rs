// src/app/columns.rs
// Column layout for the ideas table: the fixed render-definition table, the user-mutable order sequence, and the reorder operation.

use serde::{Deserialize, Serialize};

// --- Column Identifiers ---

/// The fixed set of table columns. The order sequence is a permutation (or
/// subset) of these; unknown identifiers are unrepresentable by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnId {
    IdeaImage,
    IdeaName,
    CutterName,
    CutterImage,
    Tags,
}

impl ColumnId {
    /// Returns a vector of all columns in their default order.
    pub fn all() -> Vec<Self> {
        vec![
            Self::IdeaImage,
            Self::IdeaName,
            Self::CutterName,
            Self::CutterImage,
            Self::Tags,
        ]
    }

    /// Returns the display name for the column header.
    pub fn display_name(&self) -> &'static str {
        definition(*self).label
    }
}

// --- Column Definitions ---

/// How a cell in this column renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Text,
    Image,
    TagList,
}

/// Render definition for one column. The definitions table is fixed; only
/// the order sequence is user-mutable, and reordering never touches it.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub id: ColumnId,
    pub label: &'static str,
    pub min_width: f32,
    pub initial_width: f32,
    pub cell: CellKind,
}

static DEFINITIONS: [ColumnDef; 5] = [
    ColumnDef {
        id: ColumnId::IdeaImage,
        label: "Idea image",
        min_width: 40.0,
        initial_width: 110.0,
        cell: CellKind::Image,
    },
    ColumnDef {
        id: ColumnId::IdeaName,
        label: "Name",
        min_width: 120.0,
        initial_width: 220.0,
        cell: CellKind::Text,
    },
    ColumnDef {
        id: ColumnId::CutterName,
        label: "Cutter",
        min_width: 80.0,
        initial_width: 180.0,
        cell: CellKind::Text,
    },
    ColumnDef {
        id: ColumnId::CutterImage,
        label: "Cutter image",
        min_width: 40.0,
        initial_width: 110.0,
        cell: CellKind::Image,
    },
    ColumnDef {
        id: ColumnId::Tags,
        label: "Tags",
        min_width: 80.0,
        initial_width: 180.0,
        cell: CellKind::TagList,
    },
];

pub fn definition(id: ColumnId) -> &'static ColumnDef {
    DEFINITIONS
        .iter()
        .find(|def| def.id == id)
        .unwrap_or_else(|| unreachable!("definition table covers every ColumnId"))
}

/// The order new installations start with.
pub fn default_order() -> Vec<ColumnId> {
    ColumnId::all()
}

// --- Order Operations ---

/// Resolves an order sequence against the definitions table, producing the
/// columns to render in sequence.
pub fn resolve_columns(order: &[ColumnId]) -> Vec<&'static ColumnDef> {
    order.iter().map(|id| definition(*id)).collect()
}

/// Removes the element at `from` and reinserts it at `to`, returning the
/// new sequence.
pub fn reorder<T: Clone>(order: &[T], from: usize, to: usize) -> Vec<T> {
    let mut next: Vec<T> = order.to_vec();
    let moved = next.remove(from);
    next.insert(to, moved);
    next
}

/// Repairs a persisted order: drops duplicates (first occurrence wins) and
/// appends any columns missing from it in default order. Handles settings
/// saved by older versions with fewer columns.
pub fn normalize_order(order: &[ColumnId]) -> Vec<ColumnId> {
    let mut next: Vec<ColumnId> = Vec::with_capacity(DEFINITIONS.len());
    for id in order {
        if !next.contains(id) {
            next.push(*id);
        }
    }
    for id in ColumnId::all() {
        if !next.contains(&id) {
            next.push(id);
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reorder_moves_forward() {
        assert_eq!(reorder(&["a", "b", "c"], 0, 2), vec!["b", "c", "a"]);
    }

    #[test]
    fn reorder_moves_backward() {
        assert_eq!(reorder(&["a", "b", "c"], 2, 0), vec!["c", "a", "b"]);
    }

    #[test]
    fn reorder_to_same_index_is_identity() {
        assert_eq!(reorder(&["a", "b", "c"], 1, 1), vec!["a", "b", "c"]);
    }

    #[test]
    fn resolve_columns_follows_the_order_sequence() {
        let order = vec![ColumnId::Tags, ColumnId::IdeaName];
        let defs = resolve_columns(&order);
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].id, ColumnId::Tags);
        assert_eq!(defs[1].id, ColumnId::IdeaName);
    }

    #[test]
    fn every_column_has_a_definition() {
        for id in ColumnId::all() {
            assert_eq!(definition(id).id, id);
            assert!(!id.display_name().is_empty());
        }
    }

    #[test]
    fn normalize_order_appends_missing_columns() {
        let partial = vec![ColumnId::Tags, ColumnId::IdeaName];
        let normalized = normalize_order(&partial);
        assert_eq!(normalized.len(), ColumnId::all().len());
        assert_eq!(normalized[0], ColumnId::Tags);
        assert_eq!(normalized[1], ColumnId::IdeaName);
    }

    #[test]
    fn normalize_order_drops_duplicates() {
        let doubled = vec![ColumnId::Tags, ColumnId::Tags, ColumnId::IdeaName];
        let normalized = normalize_order(&doubled);
        assert_eq!(
            normalized.iter().filter(|id| **id == ColumnId::Tags).count(),
            1
        );
        assert_eq!(normalized.len(), ColumnId::all().len());
    }
}
