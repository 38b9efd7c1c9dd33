use std::iter::FusedIterator;
use std::slice;

use super::model::Employee;

// ---------------------------------------------------------------------------
// Adult filter: lazy view over an already parsed roster
// ---------------------------------------------------------------------------

/// Lazily yields, in roster order, the employees that are adults.
///
/// The predicate runs as the iterator advances. Cloning yields an
/// independent iterator from the same position, so a fresh [`adults`] call
/// (or a clone taken before advancing) can be walked any number of times.
#[derive(Debug, Clone)]
pub struct Adults<'a> {
    inner: slice::Iter<'a, Employee>,
}

/// Start a lazy pass over `employees` keeping only adults.
pub fn adults(employees: &[Employee]) -> Adults<'_> {
    Adults {
        inner: employees.iter(),
    }
}

impl<'a> Iterator for Adults<'a> {
    type Item = &'a Employee;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find(|e| e.is_adult())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl DoubleEndedIterator for Adults<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().rfind(|e| e.is_adult())
    }
}

impl FusedIterator for Adults<'_> {}
