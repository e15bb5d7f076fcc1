/// Binary tree node owning its children.
///
/// Fields are public: callers build trees bottom-up and may regraft children afterwards.
/// The structure must stay acyclic, which `Box` ownership already guarantees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub value: T,
    pub left: Option<Box<Node<T>>>,
    pub right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_children(value: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Replaces the left child and returns it, so a branch can be grown in one chain.
    pub fn set_left(&mut self, node: Node<T>) -> &mut Node<T> {
        self.left.insert(Box::new(node))
    }

    /// Replaces the right child and returns it.
    pub fn set_right(&mut self, node: Node<T>) -> &mut Node<T> {
        self.right.insert(Box::new(node))
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of levels below and including this node.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .map(|child| child.depth())
            .max()
            .unwrap_or(0)
    }

    /// Present children, left before right.
    pub fn children(&self) -> impl Iterator<Item = &Node<T>> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }
}
