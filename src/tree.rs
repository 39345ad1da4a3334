//! Recursive quadtree storing bounded elements.
//!
//! Every node covers a rectangular [`Region`] and is itself a quadtree:
//! it owns a local collection of elements plus, lazily, exactly four
//! children partitioning its region at the midpoint. An element lives in
//! the local collection of the deepest node whose midlines it straddles,
//! so no element is ever split across siblings. Children are
//! all-or-nothing; the subtree array is either absent or fully present,
//! and removal prunes it back to absent once all four children are empty.

use crate::error::{QuadTreeError, QuadTreeResult};
use crate::iter::Elements;
use crate::region::{Bounded, Region};

/// Recursive quadtree spatial index over a rectangular region.
///
/// The tree stores values of any type implementing [`Bounded`]; `Clone`
/// and `PartialEq` are required only by the operations that need them.
/// Duplicate (equal) elements may be stored and are removed one at a
/// time. Cloning a tree deep-copies every node; the copy evolves
/// independently of the original.
///
/// The structure is single-threaded: there is no interior mutability and
/// no synchronization. Share it the usual Rust way if needed (`Mutex`,
/// or build per-thread trees).
#[derive(Clone, Debug)]
pub struct QuadTree<T> {
    pub(crate) region: Region,
    pub(crate) items: Vec<T>,
    pub(crate) children: Option<Box<[QuadTree<T>; 4]>>,
}

impl<T> QuadTree<T> {
    /// Creates an empty tree covering `region`.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadtree::{QuadTree, Region};
    ///
    /// let tree: QuadTree<Region> = QuadTree::new(Region::new(0.0, 0.0, 100.0, 100.0));
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.depth(), 1);
    /// ```
    pub fn new(region: Region) -> Self {
        Self { region, items: Vec::new(), children: None }
    }

    /// The rectangular domain covered by this node.
    ///
    /// Elements are only insertable if their bounding box lies fully
    /// inside it.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Number of elements stored in this node and all its descendants.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadtree::{QuadTree, Region};
    ///
    /// let mut tree = QuadTree::default();
    /// let block = Region::new(0.1, 0.1, 0.2, 0.2);
    /// tree.insert(block).unwrap();
    /// tree.insert(block).unwrap(); // duplicates are allowed
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        let nested: usize =
            self.children.as_ref().map_or(0, |children| children.iter().map(Self::len).sum());
        self.items.len() + nested
    }

    /// Returns `true` if no element is stored in the subtree.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
            && self.children.as_ref().is_none_or(|children| children.iter().all(Self::is_empty))
    }

    /// Height of the subtree: 1 for a childless node, otherwise one more
    /// than the deepest child.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadtree::{QuadTree, Region};
    ///
    /// let mut tree = QuadTree::default();
    /// assert_eq!(tree.depth(), 1);
    /// tree.insert(Region::new(0.0, 0.0, 0.2, 0.2)).unwrap();
    /// assert!(tree.depth() >= 2, "descending into a quadrant grows the tree");
    /// ```
    pub fn depth(&self) -> usize {
        match &self.children {
            Some(children) => 1 + children.iter().map(Self::depth).max().unwrap_or(0),
            None => 1,
        }
    }

    /// Drops every element and all children. The node keeps its region
    /// and is ready for reuse.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadtree::{QuadTree, Region};
    ///
    /// let mut tree = QuadTree::default();
    /// tree.insert(Region::new(0.1, 0.1, 0.2, 0.2)).unwrap();
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.depth(), 1);
    /// ```
    pub fn clear(&mut self) {
        self.items.clear();
        self.children = None;
    }

    /// Collects every stored element into a `Vec`.
    ///
    /// Local elements come first, then each child's elements in quadrant
    /// order. The order is an artifact of the structure, not a contract.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadtree::{QuadTree, Region};
    ///
    /// let mut tree = QuadTree::default();
    /// tree.insert(Region::new(0.4, 0.4, 0.6, 0.6)).unwrap(); // straddles, stays at the root
    /// tree.insert(Region::new(0.0, 0.0, 0.2, 0.2)).unwrap(); // descends bottom-left
    ///
    /// let all = tree.elements();
    /// assert_eq!(all.len(), 2);
    /// assert_eq!(all[0], Region::new(0.4, 0.4, 0.6, 0.6));
    /// ```
    pub fn elements(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len());
        self.collect_all(&mut out);
        out
    }

    /// Iterates over a snapshot of every stored element.
    ///
    /// The snapshot is taken when the iterator is created; later tree
    /// mutations do not affect it. `&QuadTree` also implements
    /// [`IntoIterator`] with the same meaning, so `for element in &tree`
    /// works directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadtree::{QuadTree, Region};
    ///
    /// let mut tree = QuadTree::default();
    /// tree.insert(Region::new(0.4, 0.4, 0.6, 0.6)).unwrap();
    ///
    /// let snapshot = tree.iter();
    /// tree.clear();
    /// assert_eq!(snapshot.len(), 1, "iterators keep their snapshot");
    /// ```
    pub fn iter(&self) -> Elements<T>
    where
        T: Clone,
    {
        Elements::new(self.elements())
    }

    fn collect_all(&self, out: &mut Vec<T>)
    where
        T: Clone,
    {
        out.extend(self.items.iter().cloned());
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.collect_all(out);
            }
        }
    }

    /// Removes the first element equal to `value` anywhere in the
    /// subtree, pruning empty children on the way back up. The search
    /// must visit every present child: placement is not derivable from
    /// `value` here, only equality is.
    fn remove_first_match(&mut self, value: &T)
    where
        T: PartialEq,
    {
        if let Some(children) = &mut self.children {
            for child in children.iter_mut() {
                child.remove_first_match(value);
            }
        }
        if let Some(index) = self.items.iter().position(|item| item == value) {
            let _removed = self.items.remove(index);
        }
        if self.children.as_ref().is_some_and(|children| children.iter().all(Self::is_empty)) {
            self.children = None;
        }
    }
}

impl<T: Bounded> QuadTree<T> {
    /// Inserts an element.
    ///
    /// If the element's box straddles a midline of this node's region it
    /// is stored locally; otherwise the node subdivides (creating all
    /// four children at once if absent) and the element descends into the
    /// single quadrant containing it. On failure nothing is mutated.
    ///
    /// # Errors
    ///
    /// [`QuadTreeError::OutOfBounds`] if the element's bounding box is
    /// not fully contained in this node's region.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadtree::{QuadTree, QuadTreeError, Region};
    ///
    /// let mut tree = QuadTree::new(Region::new(0.0, 0.0, 1.0, 1.0));
    /// tree.insert(Region::new(0.4, 0.4, 0.6, 0.6)).unwrap();
    /// assert_eq!(tree.len(), 1);
    ///
    /// let err = tree.insert(Region::new(0.0, 0.0, 1.5, 1.0)).unwrap_err();
    /// assert!(matches!(err, QuadTreeError::OutOfBounds { .. }));
    /// assert_eq!(tree.len(), 1, "failed inserts leave the tree unchanged");
    /// ```
    pub fn insert(&mut self, value: T) -> QuadTreeResult<()> {
        let bounds = value.bounds();
        if !self.region.contains(bounds) {
            return Err(QuadTreeError::OutOfBounds { element: bounds, region: self.region });
        }
        match self.region.quadrant_index(bounds) {
            None => self.items.push(value),
            Some(index) => {
                let region = self.region;
                let children = self
                    .children
                    .get_or_insert_with(|| Box::new(region.quadrants().map(Self::new)));
                // The recursive call re-applies the containment guard;
                // quadrant_index already guarantees it holds.
                children[index].insert(value)?;
            }
        }
        Ok(())
    }

    /// Removes one element equal to `value`.
    ///
    /// The search recurses into every present child and erases the first
    /// equal element found in a local collection; at most one stored copy
    /// is removed per call. Wherever all four children of a node end up
    /// empty they are dropped, so a fully drained tree reports
    /// `depth() == 1` again. Removing a value that was never stored is
    /// not an error as long as its box overlaps this node's region.
    ///
    /// # Errors
    ///
    /// [`QuadTreeError::Disjoint`] if the element's bounding box does not
    /// overlap this node's region at all. The test is deliberately looser
    /// than insertion's containment test: a partially overlapping box is
    /// accepted for search even though it could never have been inserted
    /// here.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadtree::{QuadTree, Region};
    ///
    /// let mut tree = QuadTree::default();
    /// let block = Region::new(0.1, 0.1, 0.3, 0.3);
    /// tree.insert(block).unwrap();
    ///
    /// tree.remove(&block).unwrap();
    /// assert!(tree.is_empty());
    ///
    /// // A box entirely outside the domain cannot be searched for.
    /// assert!(tree.remove(&Region::new(5.0, 5.0, 6.0, 6.0)).is_err());
    /// ```
    pub fn remove(&mut self, value: &T) -> QuadTreeResult<()>
    where
        T: PartialEq,
    {
        let bounds = value.bounds();
        if !self.region.overlaps(bounds) {
            return Err(QuadTreeError::Disjoint { element: bounds, region: self.region });
        }
        self.remove_first_match(value);
        Ok(())
    }

    /// Collects every element whose box overlaps `query`.
    ///
    /// Intervals are closed, so elements merely touching the query
    /// rectangle are reported. Subtrees whose region is disjoint from
    /// `query` are skipped without descending. A query outside the domain
    /// returns an empty `Vec`, not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadtree::{QuadTree, Region};
    ///
    /// let mut tree = QuadTree::new(Region::new(0.0, 0.0, 100.0, 100.0));
    /// tree.insert(Region::new(10.0, 10.0, 20.0, 20.0)).unwrap();
    /// tree.insert(Region::new(70.0, 70.0, 90.0, 90.0)).unwrap();
    ///
    /// let hits = tree.find_colliding(Region::new(0.0, 0.0, 15.0, 15.0));
    /// assert_eq!(hits, vec![Region::new(10.0, 10.0, 20.0, 20.0)]);
    /// ```
    pub fn find_colliding(&self, query: Region) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::new();
        self.collect_colliding(query, &mut out);
        out
    }

    /// Collects every element whose box lies fully inside `query`.
    ///
    /// The result is always a subset of [`find_colliding`] for the same
    /// query. Subtrees disjoint from `query` are skipped; subtrees fully
    /// inside it contribute their local elements without individual
    /// tests.
    ///
    /// [`find_colliding`]: QuadTree::find_colliding
    ///
    /// # Examples
    ///
    /// ```
    /// use quadtree::{QuadTree, Region};
    ///
    /// let mut tree = QuadTree::new(Region::new(0.0, 0.0, 100.0, 100.0));
    /// tree.insert(Region::new(10.0, 10.0, 20.0, 20.0)).unwrap();
    /// tree.insert(Region::new(10.0, 10.0, 60.0, 60.0)).unwrap();
    ///
    /// let inside = tree.find_inscribed(Region::new(0.0, 0.0, 30.0, 30.0));
    /// assert_eq!(inside, vec![Region::new(10.0, 10.0, 20.0, 20.0)]);
    /// ```
    pub fn find_inscribed(&self, query: Region) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::new();
        self.collect_inscribed(query, &mut out);
        out
    }

    /// Iterates over a snapshot of the elements overlapping `query`.
    ///
    /// Equivalent to [`find_colliding`](QuadTree::find_colliding)
    /// followed by iteration; the snapshot is unaffected by later tree
    /// mutations.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadtree::{QuadTree, Region};
    ///
    /// let mut tree = QuadTree::default();
    /// tree.insert(Region::new(0.1, 0.1, 0.3, 0.3)).unwrap();
    ///
    /// for element in tree.iter_colliding(Region::new(0.0, 0.0, 0.5, 0.5)) {
    ///     println!("hit: {element}");
    /// }
    /// ```
    pub fn iter_colliding(&self, query: Region) -> Elements<T>
    where
        T: Clone,
    {
        Elements::new(self.find_colliding(query))
    }

    /// Iterates over a snapshot of the elements lying fully inside
    /// `query`.
    ///
    /// Equivalent to [`find_inscribed`](QuadTree::find_inscribed)
    /// followed by iteration.
    pub fn iter_inscribed(&self, query: Region) -> Elements<T>
    where
        T: Clone,
    {
        Elements::new(self.find_inscribed(query))
    }

    fn collect_colliding(&self, query: Region, out: &mut Vec<T>)
    where
        T: Clone,
    {
        if !self.region.overlaps(query) {
            return;
        }
        out.extend(self.items.iter().filter(|item| item.bounds().overlaps(query)).cloned());
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.collect_colliding(query, out);
            }
        }
    }

    fn collect_inscribed(&self, query: Region, out: &mut Vec<T>)
    where
        T: Clone,
    {
        if !self.region.overlaps(query) {
            return;
        }
        if query.contains(self.region) {
            // The whole node region is inside the query, so every local
            // element qualifies without its own containment test.
            out.extend(self.items.iter().cloned());
        } else {
            out.extend(self.items.iter().filter(|item| query.contains(item.bounds())).cloned());
        }
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.collect_inscribed(query, out);
            }
        }
    }
}

impl<T> Default for QuadTree<T> {
    /// An empty tree over [`Region::UNIT`].
    fn default() -> Self {
        Self::new(Region::UNIT)
    }
}

impl<T: Clone> IntoIterator for &QuadTree<T> {
    type Item = T;
    type IntoIter = Elements<T>;

    /// Same as [`QuadTree::iter`]: an owning snapshot of every element.
    fn into_iter(self) -> Elements<T> {
        self.iter()
    }
}
