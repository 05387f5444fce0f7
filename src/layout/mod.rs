//! Structure layout derivation
//!
//! [`derive_layout`] maps a flat ordered value list plus a
//! [`StructureKind`] to positioned nodes and the edges between them.  The
//! computation is pure and total: it is recomputed from scratch on every
//! mutation, never keeps partial state across calls, and identical inputs
//! produce identical node and edge collections (required for stable
//! re-render).
//!
//! Nodes reference each other only by [`NodeId`], assigned sequentially
//! within one derivation pass; every id stored in a linkage field or edge is
//! guaranteed to exist in the same pass, so the node list plus the id index
//! fully describes the graph.

mod btree;
mod linear;
mod tree;

use crate::lab::StructureKind;
use rustc_hash::FxHashMap;

/// Identifier of one node within a single derivation pass.  Not stable
/// across passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// One visual unit of a structure: a value box (or a multi-value block for
/// B-trees) at a world-coordinate position.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureNode {
    pub id: NodeId,
    /// Values held by this node; a singleton except for B-tree blocks.
    pub values: Vec<i64>,
    pub x: f64,
    pub y: f64,
    /// Left child (binary trees).
    pub left: Option<NodeId>,
    /// Right child (binary trees).
    pub right: Option<NodeId>,
    /// Ordered children (B-tree root).
    pub children: Vec<NodeId>,
    /// Marks the root/front/top element for highlighting.
    pub is_head: bool,
}

/// How an edge is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStyle {
    /// Straight connector without an arrowhead (stack, queue, tree links).
    Plain,
    /// Directional arrow (singly/circular linked lists).
    Arrow,
    /// Curved back-edge from tail to head (circular list wrap-around).
    Curved,
    /// One of a parallel directional pair, offset so the two do not overlap
    /// (doubly linked lists).
    Parallel,
}

/// A connection between two nodes of the same derivation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub style: EdgeStyle,
}

/// The derived node graph for one backing collection + kind.
#[derive(Debug, Clone)]
pub struct Layout {
    nodes: Vec<StructureNode>,
    edges: Vec<Edge>,
    index: FxHashMap<NodeId, usize>,
}

impl Layout {
    fn new(nodes: Vec<StructureNode>, edges: Vec<Edge>) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id, i))
            .collect();
        Layout {
            nodes,
            edges,
            index,
        }
    }

    pub fn nodes(&self) -> &[StructureNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up a node by id within this pass.
    pub fn node(&self, id: NodeId) -> Option<&StructureNode> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Maximum extent of the node positions, for canvas scaling.
    pub fn bounds(&self) -> (f64, f64) {
        let max_x = self.nodes.iter().map(|n| n.x).fold(0.0, f64::max);
        let max_y = self.nodes.iter().map(|n| n.y).fold(0.0, f64::max);
        (max_x, max_y)
    }
}

/// Arena the per-kind builders append into.  Ids are handed out
/// sequentially, so every linkage reference created during the pass resolves
/// within the pass.
pub(crate) struct LayoutBuilder {
    nodes: Vec<StructureNode>,
}

impl LayoutBuilder {
    pub fn new() -> Self {
        LayoutBuilder { nodes: Vec::new() }
    }

    /// Append a node and return its id.
    pub fn push(&mut self, values: Vec<i64>, x: f64, y: f64) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(StructureNode {
            id,
            values,
            x,
            y,
            left: None,
            right: None,
            children: Vec::new(),
            is_head: false,
        });
        id
    }

    pub fn node(&self, id: NodeId) -> &StructureNode {
        &self.nodes[id.0 as usize]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut StructureNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Flag the first pushed node as head, if any.
    pub fn mark_first_head(&mut self) {
        if let Some(first) = self.nodes.first_mut() {
            first.is_head = true;
        }
    }

    /// Derive parent→child edges from the binary-tree linkage fields.
    pub fn tree_edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for node in &self.nodes {
            for child in [node.left, node.right].into_iter().flatten() {
                edges.push(Edge {
                    from: node.id,
                    to: child,
                    style: EdgeStyle::Plain,
                });
            }
        }
        edges
    }

    pub fn finish(self, edges: Vec<Edge>) -> Layout {
        Layout::new(self.nodes, edges)
    }
}

/// Derive the full node graph for `values` under `kind`.
pub fn derive_layout(values: &[i64], kind: StructureKind) -> Layout {
    match kind {
        StructureKind::BinarySearchTree => tree::derive_bst(values),
        StructureKind::AvlTree => tree::derive_avl(values),
        StructureKind::BTree => btree::derive(values),
        _ => linear::derive(values, kind),
    }
}
