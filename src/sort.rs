use crate::{Error, Sortable};

/// A trait for routines that order [`Sortable`] collections in place.
pub trait Sorter {
    /// Sorts the collection into non-descending order under its own
    /// comparison rule.
    fn sort<S: Sortable + ?Sized>(collection: &mut S) -> Result<(), Error>;
}

/// Sorts a collection of elements that can be compared and swapped.
///
/// This is [`BubbleSort`] behind a shorter name.
pub fn sort<S: Sortable + ?Sized>(collection: &mut S) -> Result<(), Error> {
    BubbleSort::sort(collection)
}

/// The classic adjacent-exchange sort: walks the collection pass after pass
/// and swaps every out-of-order neighbour pair, stopping once a whole pass
/// finds nothing to swap.
pub struct BubbleSort;

impl Sorter for BubbleSort {
    fn sort<S: Sortable + ?Sized>(collection: &mut S) -> Result<(), Error> {
        // Sorting only compares and swaps, so the element count cannot
        // change mid-run and one read of it holds for every pass.
        let len = collection.len();
        if len < 2 {
            return Ok(());
        }

        for pass in 0..len {
            let mut swapped = false;
            for left in 0..len - pass - 1 {
                if collection.compare_adjacent(left)? {
                    collection.swap_adjacent(left)?;
                    swapped = true;
                }
            }
            // Each pass bubbles one more element to its final place; a pass
            // without swaps means the rest already is in order.
            if !swapped {
                break;
            }
        }
        Ok(())
    }
}
