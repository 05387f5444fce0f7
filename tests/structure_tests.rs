use sortlab::lab::{Lab, LabError, StructureKind};
use sortlab::layout::{derive_layout, EdgeStyle, Layout, NodeId, StructureNode};

/// Every id referenced by an edge or a linkage field must resolve within
/// the same derivation pass.
fn assert_no_dangling_references(layout: &Layout) {
    let resolve = |id: NodeId| {
        assert!(
            layout.node(id).is_some(),
            "dangling reference to {:?}",
            id
        );
    };
    for edge in layout.edges() {
        resolve(edge.from);
        resolve(edge.to);
    }
    for node in layout.nodes() {
        for child in [node.left, node.right].into_iter().flatten() {
            resolve(child);
        }
        for &child in &node.children {
            resolve(child);
        }
    }
}

fn tree_height(layout: &Layout, node: &StructureNode) -> usize {
    let child_height = |id: Option<NodeId>| {
        id.and_then(|id| layout.node(id))
            .map(|c| tree_height(layout, c))
            .unwrap_or(0)
    };
    1 + child_height(node.left).max(child_height(node.right))
}

fn collect_subtree(layout: &Layout, id: Option<NodeId>, out: &mut Vec<i64>) {
    let Some(node) = id.and_then(|id| layout.node(id)) else {
        return;
    };
    out.extend(&node.values);
    collect_subtree(layout, node.left, out);
    collect_subtree(layout, node.right, out);
}

#[test]
fn no_layout_leaves_dangling_references() {
    for kind in StructureKind::ALL {
        for values in [&[][..], &[42][..], kind.preset()] {
            assert_no_dangling_references(&derive_layout(values, kind));
        }
    }
}

#[test]
fn layout_derivation_is_idempotent() {
    let values = [50, 30, 70, 20, 40, 60, 80];
    for kind in StructureKind::ALL {
        let a = derive_layout(&values, kind);
        let b = derive_layout(&values, kind);
        assert_eq!(a.nodes(), b.nodes(), "{}", kind.name());
        assert_eq!(a.edges(), b.edges(), "{}", kind.name());
    }
}

#[test]
fn bst_splits_around_the_first_value() {
    let layout = derive_layout(&[50, 30, 70, 20, 40, 60, 80], StructureKind::BinarySearchTree);
    assert_eq!(layout.len(), 7);

    let root = layout.nodes().iter().find(|n| n.is_head).expect("root");
    assert_eq!(root.values, vec![50]);

    let mut left = Vec::new();
    collect_subtree(&layout, root.left, &mut left);
    left.sort_unstable();
    assert_eq!(left, vec![20, 30, 40]);

    let mut right = Vec::new();
    collect_subtree(&layout, root.right, &mut right);
    right.sort_unstable();
    assert_eq!(right, vec![60, 70, 80]);

    // Children sit one level down with halved spread, left of and right of
    // the root respectively.
    let left_child = layout.node(root.left.unwrap()).unwrap();
    let right_child = layout.node(root.right.unwrap()).unwrap();
    assert!(left_child.x < root.x && right_child.x > root.x);
    assert!(left_child.y > root.y);
}

#[test]
fn avl_layout_is_height_balanced() {
    for n in 0..32i64 {
        let values: Vec<i64> = (0..n).rev().collect();
        let layout = derive_layout(&values, StructureKind::AvlTree);
        assert_eq!(layout.len(), n as usize);
        if let Some(root) = layout.nodes().iter().find(|node| node.is_head) {
            let height = tree_height(&layout, root);
            let bound = ((n + 1) as f64).log2().ceil() as usize;
            assert!(
                height <= bound,
                "n={}: height {} exceeds bound {}",
                n,
                height,
                bound
            );
        }
    }
}

#[test]
fn btree_grouping_puts_the_middle_block_on_top() {
    let layout = derive_layout(&[10, 20, 30, 40, 50, 60, 70], StructureKind::BTree);
    let root = layout.nodes().iter().find(|n| n.is_head).expect("root");
    assert_eq!(root.values, vec![40, 50, 60]);

    let children: Vec<&StructureNode> = root
        .children
        .iter()
        .map(|&id| layout.node(id).expect("child"))
        .collect();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].values, vec![10, 20, 30]);
    assert_eq!(children[1].values, vec![70]);
    assert!(children.iter().all(|c| c.y > root.y));
}

#[test]
fn linear_kinds_lay_out_in_order() {
    let stack = derive_layout(&[40, 30, 20, 10], StructureKind::Stack);
    // A stack is a single column growing downward, top flagged as head.
    assert!(stack.nodes()[0].is_head);
    assert!(stack
        .nodes()
        .windows(2)
        .all(|w| w[0].x == w[1].x && w[0].y < w[1].y));

    let queue = derive_layout(&[5, 15, 25, 35], StructureKind::Queue);
    assert!(queue.nodes()[0].is_head);
    assert!(queue
        .nodes()
        .windows(2)
        .all(|w| w[0].y == w[1].y && w[0].x < w[1].x));
    // Plain connectors, no arrowheads.
    assert!(queue.edges().iter().all(|e| e.style == EdgeStyle::Plain));
}

#[test]
fn list_edge_topology() {
    let singly = derive_layout(&[10, 20, 30], StructureKind::SinglyLinkedList);
    assert_eq!(singly.edges().len(), 2);
    assert!(singly.edges().iter().all(|e| e.style == EdgeStyle::Arrow));

    // Doubly linked: forward and backward edge per adjacent pair.
    let doubly = derive_layout(&[10, 20, 30], StructureKind::DoublyLinkedList);
    assert_eq!(doubly.edges().len(), 4);
    assert!(doubly.edges().iter().all(|e| e.style == EdgeStyle::Parallel));

    // Circular list closes the loop once there are two nodes.
    let circular = derive_layout(&[10, 20], StructureKind::CircularLinkedList);
    let back_edges: Vec<_> = circular
        .edges()
        .iter()
        .filter(|e| e.style == EdgeStyle::Curved)
        .collect();
    assert_eq!(back_edges.len(), 1);
    assert_eq!(back_edges[0].from, circular.nodes()[1].id);
    assert_eq!(back_edges[0].to, circular.nodes()[0].id);

    let lone = derive_layout(&[10], StructureKind::CircularLinkedList);
    assert!(lone.edges().is_empty());
}

#[test]
fn duplicate_insert_rules_follow_the_kind() {
    let mut bst = Lab::new(StructureKind::BinarySearchTree);
    assert!(bst.values().contains(&50));
    assert_eq!(bst.insert(50), Err(LabError::DuplicateValue(50)));
    assert_eq!(bst.values(), StructureKind::BinarySearchTree.preset());

    let mut list = Lab::new(StructureKind::SinglyLinkedList);
    assert!(list.values().contains(&10));
    assert!(list.insert(10).is_ok());
    assert_eq!(list.values().iter().filter(|&&v| v == 10).count(), 2);
}

#[test]
fn remove_semantics_per_kind() {
    // Stack and queue take from the front.
    let mut stack = Lab::new(StructureKind::Stack);
    assert_eq!(stack.remove().unwrap(), vec![40]);

    let mut queue = Lab::new(StructureKind::Queue);
    assert_eq!(queue.remove().unwrap(), vec![5]);

    // Everything else trims the tail.
    let mut list = Lab::new(StructureKind::SinglyLinkedList);
    assert_eq!(list.remove().unwrap(), vec![40]);

    let mut bst = Lab::new(StructureKind::BinarySearchTree);
    assert_eq!(bst.remove().unwrap(), vec![80]);

    let mut empty = Lab::new(StructureKind::Stack);
    empty.clear();
    assert_eq!(empty.remove(), Err(LabError::EmptyCollection));
}

#[test]
fn mutations_rederive_the_layout() {
    let mut lab = Lab::new(StructureKind::BinarySearchTree);
    let before = lab.layout().len();
    lab.insert(55).unwrap();
    assert_eq!(lab.layout().len(), before + 1);
    assert_no_dangling_references(lab.layout());

    lab.clear();
    assert!(lab.layout().is_empty());

    lab.reset();
    assert_eq!(lab.values(), StructureKind::BinarySearchTree.preset());
    assert_eq!(lab.layout().len(), before);
}
