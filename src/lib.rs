//! Bubble sort over pluggable collections.
//!
//! One routine, [`BubbleSort`], orders any store that can count, compare
//! and swap its elements by position. The crate ships three such stores:
//! plain vectors and slices, a character string with an almost
//! case-insensitive ordering ([`Characters`]) and a singly linked list whose
//! swaps relink nodes instead of copying values ([`LinkedList`]).
//!
//! # Basic usage
//! ```
//! use sortable::{list, sort, Characters};
//!
//! let mut numbers = vec![2, 1, 3, -4];
//! sort(&mut numbers)?;
//! assert_eq!(numbers, [-4, 1, 2, 3]);
//!
//! let mut word = Characters::new("1aBa2");
//! sort(&mut word)?;
//! assert_eq!(word.as_string(), "12aaB");
//!
//! let mut values = list![1234, 456, 123, 789];
//! sort(&mut values)?;
//! assert_eq!(values.into_iter().collect::<Vec<i32>>(), &[123, 456, 789, 1234]);
//! # Ok::<(), sortable::Error>(())
//! ```
mod array;
mod list;
mod sort;
mod text;

pub use crate::{
    list::{IntoIter, LinkedList},
    sort::{sort, BubbleSort, Sorter},
    text::Characters,
};

use thiserror::Error;

/// The capability set a collection must expose to be sorted in place:
/// count its elements, compare two of them by position and swap two of them
/// by position.
///
/// `right` arguments default to the element immediately after `left` through
/// the `*_adjacent` methods, which is the only shape [`BubbleSort`] needs.
pub trait Sortable {
    /// Current number of logical elements, reflecting the live state of the
    /// collection.
    fn len(&self) -> usize;

    /// Whether the collection currently holds no element.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the elements at `left` and `right` are out of order, i.e.
    /// `left` ranks strictly greater than `right` under the collection's
    /// ordering rule and the pair must be swapped. Never mutates.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] when an index falls outside the collection,
    /// [`Error::TooShort`] when a linked list holds fewer than two nodes.
    fn compare(&self, left: usize, right: usize) -> Result<bool, Error>;

    /// Exchanges the elements at `left` and `right`. Afterwards
    /// `compare(left, right)` reports `false` for the pair; the element
    /// count is unchanged and no other element moves.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] when an index falls outside the collection,
    /// [`Error::NotAdjacent`] when a linked list is asked to swap a
    /// non-neighbour pair.
    fn swap(&mut self, left: usize, right: usize) -> Result<(), Error>;

    /// Compares the element at `left` with its immediate successor. A `left`
    /// with no representable successor is out of range.
    fn compare_adjacent(&self, left: usize) -> Result<bool, Error> {
        let right = left.checked_add(1).ok_or_else(|| Error::OutOfRange {
            index: left,
            len: self.len(),
        })?;
        self.compare(left, right)
    }

    /// Swaps the element at `left` with its immediate successor. A `left`
    /// with no representable successor is out of range.
    fn swap_adjacent(&mut self, left: usize) -> Result<(), Error> {
        let right = left.checked_add(1).ok_or_else(|| Error::OutOfRange {
            index: left,
            len: self.len(),
        })?;
        self.swap(left, right)
    }

    /// Dumps the current contents for human eyes. Purely observational; the
    /// exact format is unspecified.
    fn print(&self);
}

/// Precondition violations reported by [`Sortable`] operations. An index
/// that breaks the contract is reported eagerly, never clamped into range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// An index landed outside `[0, len)`.
    #[error("index {index} is out of range for a collection of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Compared elements of a linked list holding fewer than two nodes.
    #[error("cannot compare elements of a list holding {len} node(s)")]
    TooShort { len: usize },

    /// Asked a linked list to swap a pair of nodes that is not adjacent.
    #[error("list nodes swap only with their immediate successor, got {left} and {right}")]
    NotAdjacent { left: usize, right: usize },
}

/// Bounds check shared by the position-addressed stores.
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Error> {
    if index < len {
        Ok(())
    } else {
        Err(Error::OutOfRange { index, len })
    }
}
