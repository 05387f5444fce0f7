//! The structure lab: backing value collection and mutation rules
//!
//! A [`Lab`] session owns the single source of truth for one structure — an
//! ordered `Vec<i64>` — and the currently selected node.  Every mutation
//! (insert/remove/update/clear) re-derives the full node graph through
//! [`crate::layout::derive_layout`]; no incremental tree state survives
//! across mutations.  Rejected operations leave the collection untouched and
//! report a [`LabError`] for the caller to surface.

use crate::layout::{derive_layout, Layout, NodeId};
use std::fmt;

/// The selectable structure variants.  Drives both the layout algorithm and
/// the add/remove semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureKind {
    Stack,
    Queue,
    SinglyLinkedList,
    DoublyLinkedList,
    CircularLinkedList,
    BinarySearchTree,
    AvlTree,
    BTree,
}

impl StructureKind {
    /// All kinds, in menu order.
    pub const ALL: [StructureKind; 8] = [
        StructureKind::Stack,
        StructureKind::Queue,
        StructureKind::SinglyLinkedList,
        StructureKind::DoublyLinkedList,
        StructureKind::CircularLinkedList,
        StructureKind::BinarySearchTree,
        StructureKind::AvlTree,
        StructureKind::BTree,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            StructureKind::Stack => "Stack",
            StructureKind::Queue => "Queue",
            StructureKind::SinglyLinkedList => "Singly Linked List",
            StructureKind::DoublyLinkedList => "Doubly Linked List",
            StructureKind::CircularLinkedList => "Circular Linked List",
            StructureKind::BinarySearchTree => "Binary Search Tree",
            StructureKind::AvlTree => "AVL Tree",
            StructureKind::BTree => "B-Tree",
        }
    }

    /// Parse a command-line structure name (case-insensitive).
    pub fn from_name(name: &str) -> Option<StructureKind> {
        match name.to_ascii_lowercase().as_str() {
            "stack" => Some(StructureKind::Stack),
            "queue" => Some(StructureKind::Queue),
            "slist" | "singly" => Some(StructureKind::SinglyLinkedList),
            "dlist" | "doubly" => Some(StructureKind::DoublyLinkedList),
            "clist" | "circular" => Some(StructureKind::CircularLinkedList),
            "bst" => Some(StructureKind::BinarySearchTree),
            "avl" => Some(StructureKind::AvlTree),
            "btree" => Some(StructureKind::BTree),
            _ => None,
        }
    }

    /// Preset seed data loaded when this kind becomes active.
    pub fn preset(self) -> &'static [i64] {
        match self {
            StructureKind::Stack => &[40, 30, 20, 10],
            StructureKind::Queue => &[5, 15, 25, 35],
            StructureKind::SinglyLinkedList => &[10, 20, 30, 40],
            StructureKind::DoublyLinkedList => &[12, 24, 36, 48],
            StructureKind::CircularLinkedList => &[7, 14, 21, 28],
            StructureKind::BinarySearchTree => &[50, 30, 70, 20, 40, 60, 80],
            StructureKind::AvlTree => &[30, 20, 40, 10, 25, 35, 50],
            StructureKind::BTree => &[10, 20, 30, 40, 50, 60, 70],
        }
    }

    /// One-line description shown in the lab header.
    pub fn description(self) -> &'static str {
        match self {
            StructureKind::Stack => {
                "A linear data structure following LIFO (Last-In-First-Out)."
            }
            StructureKind::Queue => {
                "A linear data structure following FIFO (First-In-First-Out)."
            }
            StructureKind::SinglyLinkedList => {
                "A sequence of nodes where each node points to the next."
            }
            StructureKind::DoublyLinkedList => {
                "A sequence of nodes where each node points both forward and backward."
            }
            StructureKind::CircularLinkedList => {
                "A variation where the last node points back to the first node."
            }
            StructureKind::BinarySearchTree => {
                "A hierarchical structure where left child < parent < right child."
            }
            StructureKind::AvlTree => {
                "A self-balancing search tree where height difference is at most 1."
            }
            StructureKind::BTree => {
                "A balanced search tree optimized for systems handling large data blocks."
            }
        }
    }

    /// Add/remove verb labels for the control pane.
    pub fn verbs(self) -> (&'static str, &'static str) {
        match self {
            StructureKind::Stack => ("PUSH", "POP"),
            StructureKind::Queue => ("ENQUEUE", "DEQUEUE"),
            _ => ("INSERT", "DELETE"),
        }
    }

    /// Linked-list variants permit duplicate values.
    pub fn is_list(self) -> bool {
        matches!(
            self,
            StructureKind::SinglyLinkedList
                | StructureKind::DoublyLinkedList
                | StructureKind::CircularLinkedList
        )
    }

    /// Kinds that remove from the front rather than the tail.
    fn removes_front(self) -> bool {
        matches!(self, StructureKind::Stack | StructureKind::Queue)
    }
}

/// Rejected-operation conditions.  Never fatal: the collection is left
/// unchanged and the caller decides the user-visible messaging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabError {
    /// Non-integer text where an integer is required, or an operation that
    /// needs a selection without one.
    InvalidInput,
    /// The value already exists and the active kind does not permit
    /// duplicates.
    DuplicateValue(i64),
    /// Remove on an empty backing collection.
    EmptyCollection,
}

impl fmt::Display for LabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabError::InvalidInput => write!(f, "Invalid data input"),
            LabError::DuplicateValue(v) => write!(f, "Duplicate value {} rejected", v),
            LabError::EmptyCollection => write!(f, "Empty buffer"),
        }
    }
}

impl std::error::Error for LabError {}

/// One structure lab session: backing collection, active kind, selection and
/// the layout derived from them.
#[derive(Debug)]
pub struct Lab {
    kind: StructureKind,
    values: Vec<i64>,
    selected: Option<NodeId>,
    layout: Layout,
}

impl Lab {
    /// Start a session seeded with the kind's preset data.
    pub fn new(kind: StructureKind) -> Self {
        let values = kind.preset().to_vec();
        let layout = derive_layout(&values, kind);
        Lab {
            kind,
            values,
            selected: None,
            layout,
        }
    }

    pub fn kind(&self) -> StructureKind {
        self.kind
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Select a node of the current layout, or clear the selection.
    pub fn select(&mut self, id: Option<NodeId>) {
        self.selected = id.filter(|&id| self.layout.node(id).is_some());
    }

    /// Node ids are only valid within one derivation pass, so every
    /// re-derivation drops the selection.
    fn refresh(&mut self) {
        self.layout = derive_layout(&self.values, self.kind);
        self.selected = None;
    }

    /// Insert a value: stacks prepend (new top at index 0), everything else
    /// appends.  Duplicates are rejected unless the kind is a list variant.
    pub fn insert(&mut self, value: i64) -> Result<(), LabError> {
        if self.values.contains(&value) && !self.kind.is_list() {
            return Err(LabError::DuplicateValue(value));
        }
        if self.kind == StructureKind::Stack {
            self.values.insert(0, value);
        } else {
            self.values.push(value);
        }
        self.refresh();
        Ok(())
    }

    /// Remove and return values: the selected node's values if one is
    /// selected, else the front element for stack/queue or the tail element
    /// for everything else.
    pub fn remove(&mut self) -> Result<Vec<i64>, LabError> {
        if self.values.is_empty() {
            return Err(LabError::EmptyCollection);
        }

        if let Some(id) = self.selected {
            if let Some(node) = self.layout.node(id) {
                let doomed = node.values.clone();
                self.values.retain(|v| !doomed.contains(v));
                self.refresh();
                return Ok(doomed);
            }
        }

        let removed = if self.kind.removes_front() {
            self.values.remove(0)
        } else {
            self.values.remove(self.values.len() - 1)
        };
        self.refresh();
        Ok(vec![removed])
    }

    /// Replace the first value equal to the selected node's represented
    /// value.  Requires a selection.
    pub fn update(&mut self, new_value: i64) -> Result<i64, LabError> {
        let id = self.selected.ok_or(LabError::InvalidInput)?;
        let node = self.layout.node(id).ok_or(LabError::InvalidInput)?;
        let old_value = node.values[0];
        if let Some(slot) = self.values.iter_mut().find(|v| **v == old_value) {
            *slot = new_value;
        }
        self.refresh();
        Ok(old_value)
    }

    /// Empty the collection unconditionally.
    pub fn clear(&mut self) {
        self.values.clear();
        self.refresh();
    }

    /// Reload the kind's preset (used when the active kind switches).
    pub fn reset(&mut self) {
        self.values = self.kind.preset().to_vec();
        self.refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_prepends_and_pops_front() {
        let mut lab = Lab::new(StructureKind::Stack);
        lab.insert(99).unwrap();
        assert_eq!(lab.values()[0], 99);
        let removed = lab.remove().unwrap();
        assert_eq!(removed, vec![99]);
        assert_eq!(lab.values(), StructureKind::Stack.preset());
    }

    #[test]
    fn duplicate_rejected_outside_lists() {
        let mut lab = Lab::new(StructureKind::BinarySearchTree);
        let before = lab.values().to_vec();
        assert_eq!(lab.insert(50), Err(LabError::DuplicateValue(50)));
        assert_eq!(lab.values(), before.as_slice());

        let mut list = Lab::new(StructureKind::SinglyLinkedList);
        list.insert(10).unwrap();
        assert_eq!(list.values().iter().filter(|&&v| v == 10).count(), 2);
    }

    #[test]
    fn remove_on_empty_is_rejected() {
        let mut lab = Lab::new(StructureKind::Queue);
        lab.clear();
        assert_eq!(lab.remove(), Err(LabError::EmptyCollection));
    }

    #[test]
    fn selected_node_removal_purges_its_values() {
        let mut lab = Lab::new(StructureKind::BTree);
        // Root block of the preset is [40, 50, 60].
        let root_id = lab
            .layout()
            .nodes()
            .iter()
            .find(|n| n.is_head)
            .map(|n| n.id)
            .unwrap();
        lab.select(Some(root_id));
        let removed = lab.remove().unwrap();
        assert_eq!(removed, vec![40, 50, 60]);
        assert_eq!(lab.values(), &[10, 20, 30, 70]);
        assert_eq!(lab.selected(), None);
    }

    #[test]
    fn update_requires_selection() {
        let mut lab = Lab::new(StructureKind::Queue);
        assert_eq!(lab.update(42), Err(LabError::InvalidInput));

        let id = lab.layout().nodes()[0].id;
        lab.select(Some(id));
        let old = lab.update(42).unwrap();
        assert_eq!(old, 5);
        assert_eq!(lab.values()[0], 42);
    }
}
