//! Owning iterators over materialized element snapshots.

use std::iter::FusedIterator;
use std::vec;

/// Iterator over elements selected from a [`QuadTree`].
///
/// Created by [`QuadTree::iter`], [`QuadTree::iter_colliding`] and
/// [`QuadTree::iter_inscribed`]. The matching elements are cloned out of
/// the tree when the iterator is created, so mutating the tree afterwards
/// has no effect on an existing iterator. Iteration is forward-only.
///
/// [`QuadTree`]: crate::QuadTree
/// [`QuadTree::iter`]: crate::QuadTree::iter
/// [`QuadTree::iter_colliding`]: crate::QuadTree::iter_colliding
/// [`QuadTree::iter_inscribed`]: crate::QuadTree::iter_inscribed
#[derive(Debug, Clone)]
pub struct Elements<T> {
    inner: vec::IntoIter<T>,
}

impl<T> Elements<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        Self { inner: items.into_iter() }
    }
}

impl<T> Iterator for Elements<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Elements<T> {}

impl<T> FusedIterator for Elements<T> {}
