//! Binary-tree layouts: BST by insertion order, AVL by median split.
//!
//! The BST build inserts values in collection order, so the first value
//! becomes the root; the horizontal child offset shrinks by a fixed factor
//! per level so subtrees never visually overlap.
//!
//! The AVL build does not replay rotations.  It sorts the values and
//! recursively picks the median of each sub-range, which produces a
//! height-balanced shape (height ≤ ⌈log2(n+1)⌉) by construction — a display
//! approximation of self-balancing, not a rotation engine.

use super::{Layout, LayoutBuilder, NodeId};

const ROOT_X: f64 = 750.0;
const ROOT_Y: f64 = 120.0;
const LEVEL_STEP_Y: f64 = 120.0;
const ROOT_OFFSET_X: f64 = 350.0;
/// Horizontal spread divisor applied at each depth level.
const OFFSET_SHRINK: f64 = 1.7;
const AVL_SPAN_LEFT: f64 = 100.0;
const AVL_SPAN_RIGHT: f64 = 1400.0;

pub(super) fn derive_bst(values: &[i64]) -> Layout {
    let mut builder = LayoutBuilder::new();
    let mut root: Option<NodeId> = None;
    for &value in values {
        root = Some(insert(
            &mut builder,
            root,
            value,
            ROOT_X,
            ROOT_Y,
            ROOT_OFFSET_X,
        ));
    }
    builder.mark_first_head();
    let edges = builder.tree_edges();
    builder.finish(edges)
}

fn insert(
    builder: &mut LayoutBuilder,
    node: Option<NodeId>,
    value: i64,
    x: f64,
    y: f64,
    offset: f64,
) -> NodeId {
    let Some(id) = node else {
        return builder.push(vec![value], x, y);
    };
    let (node_value, left, right) = {
        let n = builder.node(id);
        (n.values[0], n.left, n.right)
    };
    if value < node_value {
        let child = insert(
            builder,
            left,
            value,
            x - offset,
            y + LEVEL_STEP_Y,
            offset / OFFSET_SHRINK,
        );
        builder.node_mut(id).left = Some(child);
    } else {
        let child = insert(
            builder,
            right,
            value,
            x + offset,
            y + LEVEL_STEP_Y,
            offset / OFFSET_SHRINK,
        );
        builder.node_mut(id).right = Some(child);
    }
    id
}

pub(super) fn derive_avl(values: &[i64]) -> Layout {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mut builder = LayoutBuilder::new();
    build_balanced(&mut builder, &sorted, 0, AVL_SPAN_LEFT, AVL_SPAN_RIGHT);
    builder.mark_first_head();
    let edges = builder.tree_edges();
    builder.finish(edges)
}

/// Pick the median of the sub-range as the node at this level and recurse
/// into the halves.  The median node of the whole range is pushed first, so
/// it becomes the head.
fn build_balanced(
    builder: &mut LayoutBuilder,
    values: &[i64],
    level: usize,
    x_start: f64,
    x_end: f64,
) -> Option<NodeId> {
    if values.is_empty() {
        return None;
    }
    let mid = values.len() / 2;
    let x = (x_start + x_end) / 2.0;
    let y = ROOT_Y + level as f64 * LEVEL_STEP_Y;
    let id = builder.push(vec![values[mid]], x, y);
    let left = build_balanced(builder, &values[..mid], level + 1, x_start, x);
    let right = build_balanced(builder, &values[mid + 1..], level + 1, x, x_end);
    let node = builder.node_mut(id);
    node.left = left;
    node.right = right;
    Some(id)
}
