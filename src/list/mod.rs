mod node;

use {
    self::node::{Iter, IterMut, Node},
    crate::{check_index, Error, Sortable},
    std::ptr,
};

#[macro_export]
macro_rules! list {
    [$($elem:expr),* $(,)?] => {{
        #[allow(unused_mut)]
        let mut l = $crate::LinkedList::default();
        $(
            l.add($elem);
        )*
        l
    }}
}

/// Singly linked list with a head pointer only. The length is not cached;
/// every count walks the chain.
pub struct LinkedList<T> {
    head: *const Node<T>,
}
impl<T> LinkedList<T> {
    pub fn len(&self) -> usize {
        self.iter().count()
    }
    pub fn is_empty(&self) -> bool {
        self.head.is_null()
    }
    /// Appends `val` at the end of the chain.
    pub fn add(&mut self, val: T) {
        let new = Box::leak(Node::<T>::new(val));
        match self.tail() {
            Some(tail) => unsafe {
                // SAFETY: `tail` is not null, so it must be valid
                // (invariant (1)).
                (*tail).link_after(new);
            },
            None => self.head = new,
        }
    }
    /// Shared reference to the element at `index`, by walking the chain.
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.iter()
            .nth(index)
            .ok_or_else(|| Error::OutOfRange {
                index,
                len: self.len(),
            })
    }
    /// Unlinks the first element and hands its value out.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head.is_null() {
            None
        } else {
            let (new_head, old_val) = unsafe {
                // SAFETY: `head` is not null, so it must be valid
                // (invariant (1)), and nothing reaches it anymore once the
                // list is repointed below.
                Node::<T>::into_value(self.head as *mut _)
            };
            self.head = new_head;
            Some(old_val)
        }
    }
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        Iter::new(self.head)
    }
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        IterMut::new(self.head as *mut _)
    }
    fn tail(&mut self) -> Option<*mut Node<T>> {
        if self.head.is_null() {
            return None;
        }
        let mut node = self.head;
        loop {
            // SAFETY: `node` is not null, so it must be valid (invariant (1)).
            let next = unsafe { (*node).next() };
            if next.is_null() {
                return Some(node as *mut _);
            }
            node = next;
        }
    }
    fn node_at(&self, index: usize) -> *const Node<T> {
        let mut node = self.head;
        for _ in 0..index {
            if node.is_null() {
                break;
            }
            // SAFETY: `node` is not null, so it must be valid (invariant (1)).
            node = unsafe { (*node).next() };
        }
        node
    }
}
impl<T: PartialOrd + std::fmt::Debug> Sortable for LinkedList<T> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn compare(&self, left: usize, right: usize) -> Result<bool, Error> {
        let len = LinkedList::len(self);
        if len < 2 {
            return Err(Error::TooShort { len });
        }
        // A `right` past the last element means the pass ran beyond the
        // final pair; the pair counts as already in order.
        if right >= len {
            return Ok(false);
        }
        Ok(self.at(left)? > self.at(right)?)
    }

    fn swap(&mut self, left: usize, right: usize) -> Result<(), Error> {
        if right.checked_sub(1) != Some(left) {
            return Err(Error::NotAdjacent { left, right });
        }
        let len = LinkedList::len(self);
        check_index(left, len)?;
        check_index(right, len)?;

        if left == 0 {
            // SAFETY: `left` and `right` are in range, so `head` is a valid
            // pointer with a non-null successor (invariant (1)).
            self.head = unsafe { Node::<T>::swap_with_next(self.head as *mut _) };
        } else {
            let prev = self.node_at(left - 1) as *mut Node<T>;
            // SAFETY: `left - 1`, `left` and `right` are all in range, so
            // `prev` is a valid pointer followed by two non-null links
            // (invariant (1)). Repointing `prev` at what the pair swap
            // returns keeps both nodes reachable.
            unsafe {
                let first = (*prev).next() as *mut Node<T>;
                Node::<T>::set_next(prev, Node::<T>::swap_with_next(first));
            }
        }
        Ok(())
    }

    fn print(&self) {
        println!("{:?}", self);
    }
}
impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self { head: ptr::null() }
    }
}
impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut clone: Self = Default::default();
        for x in self.iter() {
            clone.add(x.clone());
        }
        clone
    }
}
impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut new: Self = Default::default();
        for x in iter {
            new.add(x);
        }
        new
    }
}
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}
impl<T: std::fmt::Debug> std::fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct IntoIter<T>(LinkedList<T>);
impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }
}
impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::<T>(self)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::sort::sort};

    #[test]
    fn empty() {
        let l = LinkedList::default();
        assert!(l.is_empty());
        assert_eq!(l.iter().copied().collect::<Vec<i32>>(), &[]);
    }

    #[test]
    fn add() {
        let l = list![42, 43, 44, 45, 46];
        assert_eq!(l.into_iter().collect::<Vec<i32>>(), &[42, 43, 44, 45, 46])
    }

    #[test]
    fn pop_front_drains_in_order() {
        let mut l = list![42, 43, 44];
        assert_eq!(Some(42), l.pop_front());
        assert_eq!(Some(43), l.pop_front());
        assert_eq!(Some(44), l.pop_front());
        assert_eq!(None, l.pop_front());
    }

    #[test]
    fn mutating() {
        let mut l = list![42, 43, 44, 45, 46];
        for x in l.iter_mut() {
            *x += 1;
        }
        assert_eq!(
            l.iter().copied().collect::<Vec<i32>>(),
            &[43, 44, 45, 46, 47]
        );
    }

    #[test]
    fn at_addresses_elements_by_position() {
        let l = list![10, 20, 30];
        assert_eq!(l.at(0), Ok(&10));
        assert_eq!(l.at(2), Ok(&30));
        assert_eq!(l.at(3), Err(Error::OutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn collects_from_an_iterator() {
        let l: LinkedList<i32> = (1..=5).collect();
        assert_eq!(l.iter().copied().collect::<Vec<i32>>(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn clones_are_independent() {
        let mut original = list![3, 1, 2];
        let clone = original.clone();
        sort(&mut original).unwrap();

        assert_eq!(original.into_iter().collect::<Vec<i32>>(), &[1, 2, 3]);
        assert_eq!(clone.into_iter().collect::<Vec<i32>>(), &[3, 1, 2]);
    }

    #[test]
    fn debug_formats_like_a_sequence() {
        let l = list![1, 2, 3];
        assert_eq!(format!("{:?}", l), "[1, 2, 3]");
    }

    #[test]
    fn compare_needs_at_least_two_nodes() {
        let empty: LinkedList<i32> = list![];
        assert_eq!(empty.compare(0, 1), Err(Error::TooShort { len: 0 }));

        let single = list![5];
        assert_eq!(single.compare(0, 1), Err(Error::TooShort { len: 1 }));
    }

    #[test]
    fn compare_past_the_end_reports_nothing_to_swap() {
        let l = list![2, 1];
        assert_eq!(l.compare(0, 1), Ok(true));
        assert_eq!(l.compare(1, 2), Ok(false));
        assert_eq!(l.compare(5, 6), Ok(false));
    }

    #[test]
    fn compare_still_rejects_a_bad_left_index() {
        let l = list![2, 1];
        assert_eq!(l.compare(5, 1), Err(Error::OutOfRange { index: 5, len: 2 }));
    }

    #[test]
    fn swap_relinks_any_adjacent_pair() {
        for (left, expected) in [
            (0, [43, 42, 44, 45, 46]),
            (1, [42, 44, 43, 45, 46]),
            (3, [42, 43, 44, 46, 45]),
        ] {
            let mut l = list![42, 43, 44, 45, 46];
            l.swap(left, left + 1).unwrap();
            assert_eq!(l.into_iter().collect::<Vec<i32>>(), expected);
        }
    }

    #[test]
    fn swap_requires_adjacent_positions() {
        let mut l = list![1, 2, 3];
        assert_eq!(l.swap(0, 2), Err(Error::NotAdjacent { left: 0, right: 2 }));
        assert_eq!(l.swap(1, 1), Err(Error::NotAdjacent { left: 1, right: 1 }));
        assert_eq!(l.iter().copied().collect::<Vec<i32>>(), &[1, 2, 3]);
    }

    #[test]
    fn swap_at_the_numeric_limit_is_not_adjacent() {
        let mut l = list![1, 2];
        assert_eq!(
            l.swap(usize::MAX, 0),
            Err(Error::NotAdjacent { left: usize::MAX, right: 0 })
        );
        assert_eq!(l.iter().copied().collect::<Vec<i32>>(), &[1, 2]);
    }

    #[test]
    fn swap_rejects_out_of_range_pairs() {
        let mut empty: LinkedList<i32> = list![];
        assert_eq!(empty.swap(0, 1), Err(Error::OutOfRange { index: 0, len: 0 }));

        let mut single = list![7];
        assert_eq!(single.swap(0, 1), Err(Error::OutOfRange { index: 1, len: 1 }));

        let mut l = list![1, 2, 3];
        assert_eq!(l.swap(5, 6), Err(Error::OutOfRange { index: 5, len: 3 }));
    }

    #[test]
    fn sorting_relinks_the_chain() {
        let mut l = list![1234, 456, 123, 789];
        sort(&mut l).unwrap();
        assert_eq!(l.into_iter().collect::<Vec<i32>>(), &[123, 456, 789, 1234]);
    }

    #[test]
    fn empty_and_single_node_lists_sort_without_error() {
        let mut empty: LinkedList<i32> = list![];
        sort(&mut empty).unwrap();
        assert!(empty.is_empty());

        let mut single = list![42];
        sort(&mut single).unwrap();
        assert_eq!(single.at(0), Ok(&42));
    }

    #[test]
    fn sorting_moves_nodes_not_values() {
        let mut l = list![1234, 456, 123, 789];
        let before: Vec<*const i32> = l.iter().map(|x| x as *const i32).collect();

        sort(&mut l).unwrap();

        let after: Vec<*const i32> = l.iter().map(|x| x as *const i32).collect();
        assert_eq!(after, [before[2], before[1], before[3], before[0]]);
    }
}
