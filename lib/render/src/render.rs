//! Read-only text views of an expression tree.
//!
//! Both views walk the tree in pre-order and share the same per-node label,
//! `type(value) [attribute]`, where `[attribute]` only shows up once the node
//! has been decorated.

use itertools::Itertools;
use parser::{Node, NodeKind};

pub fn label(node: &Node) -> String {
    let mut label = match &node.kind {
        NodeKind::Number(value) => format!("{}({:?})", node.type_name(), value),
        NodeKind::Binary { operator, .. } => format!("{}({})", node.type_name(), operator),
    };
    if let Some(attribute) = node.attribute {
        label.push_str(&format!(" [{:?}]", attribute));
    }
    label
}

/// One node per line, indented by two spaces per level.
pub fn listing(root: &Node) -> String {
    let mut out = Vec::new();
    let mut stack = vec![(root, 0)];
    while let Some((node, depth)) = stack.pop() {
        out.push(format!("{}{}", "  ".repeat(depth), label(node)));
        stack.extend(node.children().rev().map(|child| (child, depth + 1)));
    }
    out.join("\n")
}

/// Box-drawing diagram with `├──`, `└──` and `│` connectors.
pub fn diagram(root: &Node) -> String {
    let mut out = vec![label(root)];
    let mut stack = children_with_last(root, String::new());
    while let Some((node, prefix, is_last)) = stack.pop() {
        let connector = if is_last { "└── " } else { "├── " };
        out.push(format!("{prefix}{connector}{}", label(node)));

        let prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        stack.extend(children_with_last(node, prefix));
    }
    out.join("\n")
}

/// Children paired with their prefix and last-child flag, last child first so
/// they pop off a stack in order.
fn children_with_last(node: &Node, prefix: String) -> Vec<(&Node, String, bool)> {
    let count = node.children().len();
    node.children()
        .enumerate()
        .rev()
        .map(|(i, child)| (child, prefix.clone(), i + 1 == count))
        .collect_vec()
}

/// Labels of all nodes in pre-order, i.e. the node sequence both views print.
pub fn preorder_labels(root: &Node) -> Vec<String> {
    root.preorder().into_iter().map(label).collect_vec()
}
