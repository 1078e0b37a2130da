use std::{marker::PhantomData, ptr};

/// List element for a singly linked list.
pub struct Node<T> {
    next: *const Node<T>,
    value: T,
}

// The present implementation aims to preserve the following invariant (1):
// * The `next` pointer is either null (last element of the chain) or a valid
//   pointer to an element reachable through no other link.
impl<T> Node<T> {
    /// Creates a new element with value `val` and no successor.
    ///
    /// # Layout
    /// ```text
    /// ┌────┐
    /// │val ├──► null
    /// └────┘
    /// ```
    pub fn new(val: T) -> Box<Self> {
        Box::new(Self {
            next: ptr::null(),
            value: val,
        })
    }

    /// Gets a pointer to the next element (null for the last one).
    pub fn next(&self) -> *const Self {
        self.next
    }

    /// Gets a shared reference to the value of the node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Gets an exclusive reference to the value of the node.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Inserts `new` right after this element.
    ///
    /// # Sketch
    /// ```text
    /// ┌────┬──►┌────┬──►┌────┐
    /// │self│   │new │   │next│
    /// └────┘   └────┘   └────┘
    /// ```
    pub fn link_after(&mut self, new: &mut Self) {
        new.next = self.next;
        self.next = new;
    }

    /// Points `node` at `next`, discarding the old link.
    ///
    /// # Safety
    /// * `node` must be a valid pointer
    /// * `next` must be null or a valid pointer
    /// * the element `node` pointed at before must stay reachable through
    ///   another link, otherwise it is leaked.
    pub unsafe fn set_next(node: *mut Self, next: *const Self) {
        (*node).next = next;
    }

    /// Exchanges `left` with its successor by relinking the pair, then
    /// returns the new first element of the pair (the former successor).
    /// The caller must rewire whatever link reached `left` to the returned
    /// element, otherwise invariant (1) is broken.
    ///
    /// # Sketch
    /// ```text
    /// Before: ──►┌────┬──►┌─────┬──►┌────┐
    ///            │left│   │right│   │succ│
    ///            └────┘   └─────┘   └────┘
    /// After:  ──►┌─────┬──►┌────┬──►┌────┐
    ///            │right│   │left│   │succ│
    ///            └─────┘   └────┘   └────┘
    /// ```
    ///
    /// # Safety
    /// `left` must be a valid pointer with a non-null `next` (which is then
    /// valid as well according to invariant (1)). No new node is created and
    /// no value moves; only the three links change.
    pub unsafe fn swap_with_next(left: *mut Self) -> *const Self {
        // `right` is valid according to invariant (1) since `left` has a
        // non-null `next`.
        let right = (*left).next as *mut Self;
        (*left).next = (*right).next;
        (*right).next = left;
        right
    }

    /// Disconnects an element from its chain then returns its value and a
    /// pointer to the next element. The `Node` is dropped in the process.
    ///
    /// # Safety
    /// `to_del` must be a valid pointer obtained from [`Node::new`], and no
    /// link may reach it once this function returns.
    pub unsafe fn into_value(to_del: *mut Self) -> (*const Self, T) {
        // `to_del` has to be reboxed in order to be freed.
        let to_del = Box::from_raw(to_del);
        (to_del.next, to_del.value)
    }
}

/// Linked list iterator.
pub struct Iter<'life, T> {
    next: *const Node<T>,
    _marker: PhantomData<&'life T>,
}
impl<'life, T> Iterator for Iter<'life, T> {
    type Item = &'life T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_null() {
            return None;
        }
        // SAFETY: the lifetime `'life` of `self` is the same as the lifetime
        // of the list, so a non-null link is valid according to invariant (1).
        // The shared reference we return is bound to the list.
        let current = unsafe { &*self.next };
        self.next = current.next();
        Some(current.value())
    }
}
impl<'life, T> Iter<'life, T> {
    pub fn new(first: *const Node<T>) -> Self {
        Self {
            next: first,
            _marker: PhantomData,
        }
    }
}

/// Linked list iterator with mutability.
pub struct IterMut<'life, T> {
    next: *mut Node<T>,
    _marker: PhantomData<&'life mut T>,
}
impl<'life, T> Iterator for IterMut<'life, T> {
    type Item = &'life mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_null() {
            return None;
        }
        // SAFETY: same as `Iter::next`, with the exclusive reference backed
        // by the exclusive borrow of the list.
        let current = unsafe { &mut *self.next };
        self.next = current.next() as *mut _;
        Some(current.value_mut())
    }
}
impl<'life, T> IterMut<'life, T> {
    pub fn new(first: *mut Node<T>) -> Self {
        Self {
            next: first,
            _marker: PhantomData,
        }
    }
}
