//! Left view of a binary tree: for every depth level, the value of the first node
//! reached by a depth-first walk that visits left children before right children.
//!
//! ```
//! use leftview::{left_view, Node};
//!
//! let root = Node::with_children("A", Some(Node::new("B")), Some(Node::new("C")));
//! assert_eq!(left_view(&root)?, vec!["A", "B"]);
//! # Ok::<(), leftview::TreeError>(())
//! ```

pub mod args;
pub mod errors;
pub mod left_view;
pub mod tree;
pub mod tree_stack;
pub mod tree_traits;
pub mod util;

pub use args::{Absent, Level};
pub use errors::{TreeError, TreeResult};
pub use left_view::{get_left_view, left_view, LeftViewCollector};
pub use tree::Node;
pub use tree_stack::left_view_iterative;
