//! Document tree traversal with filter-based pruning

use crate::filter::NodeFilter;
use figex_types::{Node, NodeType};

/// Collect the exportable component nodes under `root`.
///
/// The traversal is iterative (explicit stack, no recursion depth limit)
/// and visits children in document order. Two gates prune whole subtrees:
///
/// - the canvas filter, tested only on CANVAS nodes; a failing canvas is
///   not descended into, so nothing below it can be yielded
/// - the component filter, tested on every visited node
///
/// Nodes of type COMPONENT that were never pruned are returned in
/// traversal order.
pub fn collect_components<'a>(
    root: &'a Node,
    canvas: Option<&NodeFilter>,
    component: Option<&NodeFilter>,
) -> Vec<&'a Node> {
    let mut components = Vec::new();
    let mut frontier = vec![root];

    while let Some(node) = frontier.pop() {
        if node.node_type == NodeType::Canvas && !NodeFilter::accepts_opt(canvas, node) {
            continue;
        }
        if !NodeFilter::accepts_opt(component, node) {
            continue;
        }

        // Reversed push so siblings come off the stack in document order.
        frontier.extend(node.children.iter().rev());

        if node.node_type == NodeType::Component {
            components.push(node);
        }
    }

    components
}
