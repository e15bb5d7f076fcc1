use std::fmt::Display;

use termtree::Tree;
use tracing::instrument;

use crate::tree::Node;

/// Conversion of a tree into a printable [`termtree::Tree`].
pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: Display> TreeNodeConvert for Node<T> {
    #[instrument(level = "trace", skip_all)]
    fn to_tree_string(&self) -> Tree<String> {
        // Absent children are simply not rendered
        let leaves: Vec<_> = self.children().map(|c| c.to_tree_string()).collect();

        Tree::new(self.value.to_string()).with_leaves(leaves)
    }
}
