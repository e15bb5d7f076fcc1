use thiserror::Error;

/// Invalid argument passed to [`get_left_view`](crate::left_view::get_left_view).
///
/// One variant per argument, so every check can be triggered and matched on its own.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[error("'current_node' should be instance of Node class")]
    InvalidNode,

    #[error("'visible_nodes' should be of type list")]
    InvalidVisibleNodes,

    #[error("'visited_levels' should be of type set")]
    InvalidVisitedLevels,

    #[error("'current_level' should be of type int")]
    InvalidCurrentLevel,

    /// A node with children sits at the deepest representable level.
    #[error("'current_level' is too deep to descend into child nodes")]
    LevelOverflow,
}

pub type TreeResult<T> = Result<T, TreeError>;
