use {
    crate::{check_index, Error, Sortable},
    std::fmt,
};

/// Plain sequences sort under the natural order of their elements; a swap is
/// a direct in-place exchange of the two positions.
impl<T: PartialOrd + fmt::Debug> Sortable for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn compare(&self, left: usize, right: usize) -> Result<bool, Error> {
        check_index(left, self.len())?;
        check_index(right, self.len())?;
        Ok(self[left] > self[right])
    }

    fn swap(&mut self, left: usize, right: usize) -> Result<(), Error> {
        check_index(left, self.len())?;
        check_index(right, self.len())?;
        <[T]>::swap(self, left, right);
        Ok(())
    }

    fn print(&self) {
        println!("{:?}", self);
    }
}

impl<T: PartialOrd + fmt::Debug> Sortable for Vec<T> {
    fn len(&self) -> usize {
        Sortable::len(self.as_slice())
    }

    fn compare(&self, left: usize, right: usize) -> Result<bool, Error> {
        Sortable::compare(self.as_slice(), left, right)
    }

    fn swap(&mut self, left: usize, right: usize) -> Result<(), Error> {
        Sortable::swap(self.as_mut_slice(), left, right)
    }

    fn print(&self) {
        Sortable::print(self.as_slice())
    }
}
