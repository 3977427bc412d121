use grafter_program::Hole;

use super::{Capture, Extracted, TreeNode};

fn node(node_type: &str) -> TreeNode {
    TreeNode::new(node_type, Vec::new())
}

#[test]
fn push_promotes_a_single_node_to_a_list() {
    let mut captures = Extracted::new();
    captures.bind_node(Hole(3), node("B"));
    captures.push_node(Hole(3), node("C"));
    captures.push_node(Hole(3), node("C"));

    assert_eq!(captures.node(Hole(3)), None);
    assert_eq!(
        captures.nodes(Hole(3)),
        Some([node("B"), node("C"), node("C")].as_slice())
    );
    assert_eq!(captures.count(), 1);
}

#[test]
fn binding_after_a_list_appends() {
    let mut captures = Extracted::new();
    captures.push_node(Hole(3), node("C"));
    captures.push_node(Hole(3), node("C"));
    captures.bind_node(Hole(3), node("B"));
    captures.bind_nodes(Hole(3), vec![node("D")]);

    assert_eq!(
        captures.get(Hole(3)),
        Some(&Capture::Nodes(vec![node("C"), node("C"), node("B"), node("D")]))
    );
}

#[test]
fn extend_keeps_binding_order() {
    let mut captures = Extracted::new();
    captures.bind_node(Hole(1), node("A"));
    captures.bind_node(Hole(2), node("B"));
    captures.extend_nodes(Hole(1), [node("C")]);

    let holes: Vec<Hole> = captures.holes().collect();
    assert_eq!(holes, vec![Hole(1), Hole(2)]);
}

#[test]
fn single_node_counts_as_a_list() {
    let mut captures = Extracted::new();
    captures.bind_node(Hole(1), node("A"));

    assert_eq!(captures.nodes(Hole(1)), Some([node("A")].as_slice()));
    assert_eq!(captures.nodes(Hole(2)), None);
}

#[test]
fn data_comes_from_data_or_single_nodes() {
    let mut captures = Extracted::new();
    captures.bind_data(Hole(1), "x");
    captures.bind_node(Hole(2), TreeNode::leaf("Identifier", "y"));
    captures.bind_nodes(Hole(3), vec![TreeNode::leaf("Number", "1")]);
    captures.bind_nodes(
        Hole(4),
        vec![TreeNode::leaf("Number", "1"), TreeNode::leaf("Number", "2")],
    );

    assert_eq!(captures.data(Hole(1)), Some("x"));
    assert_eq!(captures.data(Hole(2)), Some("y"));
    assert_eq!(captures.data(Hole(3)), Some("1"));
    assert_eq!(captures.data(Hole(4)), None);
    assert_eq!(captures.nodes(Hole(1)), None);
    assert!(matches!(captures.get(Hole(1)), Some(Capture::Data(_))));
}

#[test]
fn new_set_is_empty() {
    let captures: Extracted<TreeNode> = Extracted::new();

    assert!(captures.is_empty());
    assert_eq!(captures.count(), 0);
}
