use std::collections::HashSet;

use tracing::{debug, instrument, trace};

use crate::args::{CurrentLevel, Level, Levels, NodeArg, VisibleNodes, VisitedLevels};
use crate::errors::{TreeError, TreeResult};
use crate::tree::Node;

/// Depth-first, left-before-right walk recording the first value seen at each level.
///
/// Both containers are borrowed, so one accumulator and one level set are shared by
/// the whole walk and stay with the caller afterwards.
#[derive(Debug)]
pub struct LeftViewCollector<'a, T> {
    visible_values: &'a mut Vec<T>,
    visited_levels: &'a mut HashSet<Level>,
}

impl<'a, T: Clone> LeftViewCollector<'a, T> {
    pub fn new(visible_values: &'a mut Vec<T>, visited_levels: &'a mut HashSet<Level>) -> Self {
        Self {
            visible_values,
            visited_levels,
        }
    }

    /// Visits `node` at depth `level`, then its left subtree, then its right subtree.
    ///
    /// A level that already has a value is never overwritten, so the left subtree wins
    /// every level it reaches before the right subtree does.
    ///
    /// # Errors
    ///
    /// [`TreeError::LevelOverflow`] when `node` has children but `level` is already
    /// [`Level::MAX`]; nothing is recorded for `node` in that case.
    pub fn visit(&mut self, node: &Node<T>, level: Level) -> TreeResult<()> {
        let child_level = match level.checked_add(1) {
            Some(child_level) => child_level,
            None if node.is_leaf() => level,
            None => return Err(reject(TreeError::LevelOverflow)),
        };

        if self.visited_levels.insert(level) {
            trace!(level = %level, "level gets its visible value");
            self.visible_values.push(node.value.clone());
        }
        if let Some(left) = node.left.as_deref() {
            self.visit(left, child_level)?;
        }
        if let Some(right) = node.right.as_deref() {
            self.visit(right, child_level)?;
        }
        Ok(())
    }
}

/// Left view of the tree rooted at `root`, one value per depth level starting at the root.
///
/// Starting at level 0 a tree can never be deep enough to fail; the `Result` only
/// mirrors [`LeftViewCollector::visit`].
pub fn left_view<T: Clone>(root: &Node<T>) -> TreeResult<Vec<T>> {
    let mut visible_values = Vec::new();
    let mut visited_levels = HashSet::new();
    LeftViewCollector::new(&mut visible_values, &mut visited_levels).visit(root, 0)?;
    Ok(visible_values)
}

/// Appends the left view of `current_node` to `visible_nodes` and returns it.
///
/// * `visited_levels`: levels that already have a value; pass [`Absent`](crate::args::Absent)
///   to start from a fresh empty set.
/// * `current_level`: depth of `current_node`, normally `0`. Any integer is accepted,
///   negative ones included.
///
/// Arguments are checked in the order `visible_nodes`, `visited_levels`, `current_level`,
/// `current_node`. Nothing is mutated unless all four are valid. Calling it twice with the
/// same accumulator appends the view twice.
///
/// Once the arguments are checked the walk is done by [`LeftViewCollector`]; below the
/// root every argument has its concrete, valid type, so nothing is re-checked there.
/// Recursion depth equals tree height.
///
/// # Errors
///
/// The [`TreeError`] variant naming the first argument of the wrong kind, or
/// [`TreeError::LevelOverflow`] when a level past [`Level::MAX`] would be needed.
#[instrument(level = "trace", skip_all)]
pub fn get_left_view<'v, T, N, A, S, L>(
    current_node: &N,
    visible_nodes: &'v mut A,
    visited_levels: &mut S,
    current_level: L,
) -> TreeResult<&'v mut Vec<T>>
where
    T: Clone,
    N: NodeArg<T> + ?Sized,
    A: VisibleNodes<T> + ?Sized,
    S: VisitedLevels + ?Sized,
    L: CurrentLevel,
{
    let visible = visible_nodes.as_list().ok_or_else(|| reject(TreeError::InvalidVisibleNodes))?;

    let mut fresh = HashSet::new();
    let levels = match visited_levels.as_levels() {
        Levels::Present(levels) => levels,
        Levels::Absent => &mut fresh,
        Levels::Invalid => return Err(reject(TreeError::InvalidVisitedLevels)),
    };

    let level = current_level
        .as_level()
        .ok_or_else(|| reject(TreeError::InvalidCurrentLevel))?;

    let node = current_node
        .as_node()
        .ok_or_else(|| reject(TreeError::InvalidNode))?;

    LeftViewCollector::new(&mut *visible, levels).visit(node, level)?;

    Ok(visible)
}

fn reject(err: TreeError) -> TreeError {
    debug!("rejecting argument: {}", err);
    err
}
