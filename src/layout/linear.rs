//! Row and column layouts for the linear structure kinds.
//!
//! Stacks grow downward in a single column with the top at index 0;
//! everything else is a left-to-right row with the head at index 0.  Edge
//! topology is what distinguishes the list variants: plain connectors for
//! stack/queue, arrows for singly linked, a parallel forward/backward pair
//! for doubly linked, and a curved wrap-around edge for circular lists.

use super::{Edge, EdgeStyle, Layout, LayoutBuilder};
use crate::lab::StructureKind;

const STACK_X: f64 = 750.0;
const STACK_TOP_Y: f64 = 120.0;
const STACK_STEP_Y: f64 = 90.0;
const ROW_START_X: f64 = 150.0;
const ROW_STEP_X: f64 = 180.0;
const ROW_Y: f64 = 300.0;

pub(super) fn derive(values: &[i64], kind: StructureKind) -> Layout {
    let mut builder = LayoutBuilder::new();
    let mut ids = Vec::with_capacity(values.len());
    for (i, &value) in values.iter().enumerate() {
        let (x, y) = if kind == StructureKind::Stack {
            (STACK_X, STACK_TOP_Y + i as f64 * STACK_STEP_Y)
        } else {
            (ROW_START_X + i as f64 * ROW_STEP_X, ROW_Y)
        };
        ids.push(builder.push(vec![value], x, y));
    }
    builder.mark_first_head();

    let mut edges = Vec::new();
    for pair in ids.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        match kind {
            StructureKind::DoublyLinkedList => {
                // Forward and backward edge, rendered as an offset pair.
                edges.push(Edge {
                    from,
                    to,
                    style: EdgeStyle::Parallel,
                });
                edges.push(Edge {
                    from: to,
                    to: from,
                    style: EdgeStyle::Parallel,
                });
            }
            StructureKind::SinglyLinkedList | StructureKind::CircularLinkedList => {
                edges.push(Edge {
                    from,
                    to,
                    style: EdgeStyle::Arrow,
                });
            }
            _ => {
                edges.push(Edge {
                    from,
                    to,
                    style: EdgeStyle::Plain,
                });
            }
        }
    }
    // Wrap-around edge only once there are two nodes to connect.
    if kind == StructureKind::CircularLinkedList && ids.len() > 1 {
        edges.push(Edge {
            from: ids[ids.len() - 1],
            to: ids[0],
            style: EdgeStyle::Curved,
        });
    }

    builder.finish(edges)
}
