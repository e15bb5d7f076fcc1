use tracing::instrument;

use crate::tree::Node;

/*
Stack based left view, same result as the recursive walk.

The right child is pushed before the left one, so the left subtree is popped and
fully explored first, which keeps the recursive visiting order.

Depth-first order reaches level d only after levels 0..d have been reached, so a
node is the first at its level exactly when its level equals the number of values
collected so far; no level set is needed.
 */

/// Left view computed with an explicit stack instead of recursion.
///
/// Suitable for trees deeper than the call stack allows.
#[instrument(level = "debug", skip_all)]
pub fn left_view_iterative<T: Clone>(root: &Node<T>) -> Vec<T> {
    let mut visible_values = Vec::new();
    let mut stack = vec![(root, 0usize)]; // (node, level)

    while let Some((node, level)) = stack.pop() {
        if level == visible_values.len() {
            visible_values.push(node.value.clone());
        }
        if let Some(right) = node.right.as_deref() {
            stack.push((right, level + 1));
        }
        if let Some(left) = node.left.as_deref() {
            stack.push((left, level + 1));
        }
    }

    visible_values
}
