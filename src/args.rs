//! Argument kinds accepted by [`get_left_view`](crate::left_view::get_left_view).
//!
//! Every parameter is generic over one of these traits. A trait impl decides whether
//! the supplied value is of the expected kind; values of the wrong kind compile fine
//! and are rejected at call time with the matching [`TreeError`](crate::errors::TreeError).

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::marker::PhantomData;

use crate::tree::Node;

/// Depth of a node. Signed and wide enough that every accepted integer type fits.
pub type Level = i128;

/// Something that may be a tree node.
pub trait NodeArg<T> {
    fn as_node(&self) -> Option<&Node<T>>;
}

/// Ordered, append-capable accumulator of visible values.
pub trait VisibleNodes<T> {
    fn as_list(&mut self) -> Option<&mut Vec<T>>;
}

/// Optional set of depth levels that already have a visible value.
pub trait VisitedLevels {
    fn as_levels(&mut self) -> Levels<'_>;
}

/// Depth of the node currently being processed.
pub trait CurrentLevel {
    fn as_level(&self) -> Option<Level>;
}

/// Classification of a `visited_levels` argument.
#[derive(Debug)]
pub enum Levels<'a> {
    /// Not provided; the call starts from a fresh empty set.
    Absent,
    Present(&'a mut HashSet<Level>),
    Invalid,
}

/// Marker for an omitted `visited_levels` argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absent;

// Nodes

impl<T> NodeArg<T> for Node<T> {
    fn as_node(&self) -> Option<&Node<T>> {
        Some(self)
    }
}

impl<T> NodeArg<T> for Box<Node<T>> {
    fn as_node(&self) -> Option<&Node<T>> {
        Some(&**self)
    }
}

impl<T> NodeArg<T> for Option<Node<T>> {
    fn as_node(&self) -> Option<&Node<T>> {
        self.as_ref()
    }
}

impl<T> NodeArg<T> for Option<&Node<T>> {
    fn as_node(&self) -> Option<&Node<T>> {
        *self
    }
}

impl<T> NodeArg<T> for Option<Box<Node<T>>> {
    fn as_node(&self) -> Option<&Node<T>> {
        self.as_deref()
    }
}

impl<T> NodeArg<T> for () {
    fn as_node(&self) -> Option<&Node<T>> {
        None
    }
}

/// A type without an instance, e.g. `PhantomData::<Node<T>>`.
impl<T, U: ?Sized> NodeArg<T> for PhantomData<U> {
    fn as_node(&self) -> Option<&Node<T>> {
        None
    }
}

impl<T, U> NodeArg<T> for Vec<U> {
    fn as_node(&self) -> Option<&Node<T>> {
        None
    }
}

impl<T, K, V> NodeArg<T> for HashMap<K, V> {
    fn as_node(&self) -> Option<&Node<T>> {
        None
    }
}

impl<T, K, V> NodeArg<T> for BTreeMap<K, V> {
    fn as_node(&self) -> Option<&Node<T>> {
        None
    }
}

// Accumulators

impl<T> VisibleNodes<T> for Vec<T> {
    fn as_list(&mut self) -> Option<&mut Vec<T>> {
        Some(self)
    }
}

macro_rules! reject_visible_nodes {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T> VisibleNodes<T> for $ty {
                fn as_list(&mut self) -> Option<&mut Vec<T>> {
                    None
                }
            }
        )*
    };
}

reject_visible_nodes!(String, &str);

impl<T, K, V> VisibleNodes<T> for HashMap<K, V> {
    fn as_list(&mut self) -> Option<&mut Vec<T>> {
        None
    }
}

impl<T, K, V> VisibleNodes<T> for BTreeMap<K, V> {
    fn as_list(&mut self) -> Option<&mut Vec<T>> {
        None
    }
}

impl<T, U> VisibleNodes<T> for HashSet<U> {
    fn as_list(&mut self) -> Option<&mut Vec<T>> {
        None
    }
}

impl<T, U> VisibleNodes<T> for BTreeSet<U> {
    fn as_list(&mut self) -> Option<&mut Vec<T>> {
        None
    }
}

// Visited levels

impl VisitedLevels for HashSet<Level> {
    fn as_levels(&mut self) -> Levels<'_> {
        Levels::Present(self)
    }
}

impl VisitedLevels for Option<HashSet<Level>> {
    fn as_levels(&mut self) -> Levels<'_> {
        match self {
            Some(levels) => Levels::Present(levels),
            None => Levels::Absent,
        }
    }
}

impl VisitedLevels for Absent {
    fn as_levels(&mut self) -> Levels<'_> {
        Levels::Absent
    }
}

macro_rules! reject_visited_levels {
    ($($ty:ty),* $(,)?) => {
        $(
            impl VisitedLevels for $ty {
                fn as_levels(&mut self) -> Levels<'_> {
                    Levels::Invalid
                }
            }
        )*
    };
}

reject_visited_levels!(bool, String, &str);

impl<U> VisitedLevels for Vec<U> {
    fn as_levels(&mut self) -> Levels<'_> {
        Levels::Invalid
    }
}

impl<K, V> VisitedLevels for HashMap<K, V> {
    fn as_levels(&mut self) -> Levels<'_> {
        Levels::Invalid
    }
}

impl<K, V> VisitedLevels for BTreeMap<K, V> {
    fn as_levels(&mut self) -> Levels<'_> {
        Levels::Invalid
    }
}

// Levels

macro_rules! accept_integer_level {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CurrentLevel for $ty {
                fn as_level(&self) -> Option<Level> {
                    Level::try_from(*self).ok()
                }
            }
        )*
    };
}

// u128 is left out: its upper half has no `Level` value
accept_integer_level!(u8, u16, u32, u64, usize, i8, i16, i32, i64, i128, isize);

macro_rules! reject_current_level {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CurrentLevel for $ty {
                fn as_level(&self) -> Option<Level> {
                    None
                }
            }
        )*
    };
}

reject_current_level!(bool, String, &str);

impl<U> CurrentLevel for Vec<U> {
    fn as_level(&self) -> Option<Level> {
        None
    }
}

impl<K, V> CurrentLevel for HashMap<K, V> {
    fn as_level(&self) -> Option<Level> {
        None
    }
}

impl<K, V> CurrentLevel for BTreeMap<K, V> {
    fn as_level(&self) -> Option<Level> {
        None
    }
}
