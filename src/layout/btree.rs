//! Simplified two-level B-tree layout.
//!
//! Values are sorted and partitioned into fixed-size blocks of 3.  The
//! middle block (by block index) becomes the root; every other block hangs
//! directly beneath it.  This is a visualization of block grouping, not a
//! general B-tree with split/merge/rebalance operations.

use super::{Edge, EdgeStyle, Layout, LayoutBuilder};

/// Values per block.
const BLOCK_SIZE: usize = 3;

const ROOT_X: f64 = 750.0;
const ROOT_Y: f64 = 150.0;
const CHILD_START_X: f64 = 250.0;
const CHILD_STEP_X: f64 = 300.0;
const CHILD_Y: f64 = 350.0;

pub(super) fn derive(values: &[i64]) -> Layout {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let groups: Vec<&[i64]> = sorted.chunks(BLOCK_SIZE).collect();

    let mut builder = LayoutBuilder::new();
    let mut edges = Vec::new();
    if !groups.is_empty() {
        let mid = groups.len() / 2;
        let root = builder.push(groups[mid].to_vec(), ROOT_X, ROOT_Y);
        builder.mark_first_head();
        for (i, group) in groups.iter().enumerate() {
            if i == mid {
                continue;
            }
            let child = builder.push(
                group.to_vec(),
                CHILD_START_X + i as f64 * CHILD_STEP_X,
                CHILD_Y,
            );
            builder.node_mut(root).children.push(child);
            edges.push(Edge {
                from: root,
                to: child,
                style: EdgeStyle::Plain,
            });
        }
    }

    builder.finish(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_values_group_into_three_blocks() {
        let layout = derive(&[10, 20, 30, 40, 50, 60, 70]);
        assert_eq!(layout.len(), 3);

        let root = layout
            .nodes()
            .iter()
            .find(|n| n.is_head)
            .expect("root block");
        // Middle block of [10 20 30] [40 50 60] [70] is block index 1.
        assert_eq!(root.values, vec![40, 50, 60]);
        assert_eq!(root.children.len(), 2);

        let mut child_values: Vec<Vec<i64>> = root
            .children
            .iter()
            .map(|&id| layout.node(id).expect("child exists").values.clone())
            .collect();
        child_values.sort();
        assert_eq!(child_values, vec![vec![10, 20, 30], vec![70]]);
    }

    #[test]
    fn empty_input_yields_empty_layout() {
        let layout = derive(&[]);
        assert!(layout.is_empty());
        assert!(layout.edges().is_empty());
    }
}
