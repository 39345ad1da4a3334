//! Axis-aligned rectangles and the element capability trait.
//!
//! A [`Region`] plays two roles: it is the rectangular domain covered by a
//! tree node, and it is the bounding box reported by stored elements. All
//! predicates treat regions as closed intervals on both axes, so regions
//! that merely share an edge or a corner still overlap, and a box lying
//! exactly on a boundary is still contained.

use std::fmt;

/// Axis-aligned rectangle with `f32` coordinates.
///
/// Fields are public and the type is plain data: `Copy`, comparable and
/// cheap to pass by value. A region is valid when `min_x <= max_x` and
/// `min_y <= max_y`; zero width or height is allowed. [`Region::new`]
/// checks validity in debug builds, and the behavior of inverted regions
/// is unspecified. Coordinates are expected to be finite.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// Left edge.
    pub min_x: f32,
    /// Bottom edge.
    pub min_y: f32,
    /// Right edge.
    pub max_x: f32,
    /// Top edge.
    pub max_y: f32,
}

impl Region {
    /// The `[0, 0]..[1, 1]` square, the default domain of a tree root.
    pub const UNIT: Self = Self { min_x: 0.0, min_y: 0.0, max_x: 1.0, max_y: 1.0 };

    /// Creates a region from its corner coordinates.
    ///
    /// In debug builds, panics if the region is inverted on either axis.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadtree::Region;
    ///
    /// let region = Region::new(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(region.width(), 100.0);
    /// assert_eq!(region.height(), 50.0);
    /// ```
    #[inline]
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        debug_assert!(min_x <= max_x, "inverted region: min_x > max_x");
        debug_assert!(min_y <= max_y, "inverted region: min_y > max_y");
        Self { min_x, min_y, max_x, max_y }
    }

    /// Horizontal extent.
    #[inline]
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Vertical extent.
    #[inline]
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// X coordinate of the midpoint.
    #[inline]
    pub fn center_x(self) -> f32 {
        (self.min_x + self.max_x) / 2.0
    }

    /// Y coordinate of the midpoint.
    #[inline]
    pub fn center_y(self) -> f32 {
        (self.min_y + self.max_y) / 2.0
    }

    /// Returns `true` if `other` lies fully inside `self`.
    ///
    /// Edges count: a box sharing a boundary with `self` is contained.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadtree::Region;
    ///
    /// let region = Region::new(0.0, 0.0, 10.0, 10.0);
    /// assert!(region.contains(Region::new(2.0, 2.0, 8.0, 8.0)));
    /// assert!(region.contains(Region::new(0.0, 0.0, 10.0, 10.0)));
    /// assert!(!region.contains(Region::new(2.0, 2.0, 11.0, 8.0)));
    /// ```
    #[inline]
    pub fn contains(self, other: Self) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// Returns `true` if `self` and `other` intersect.
    ///
    /// Intervals are closed, so regions touching at an edge or a single
    /// corner overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadtree::Region;
    ///
    /// let region = Region::new(0.0, 0.0, 10.0, 10.0);
    /// assert!(region.overlaps(Region::new(5.0, 5.0, 15.0, 15.0)));
    /// assert!(region.overlaps(Region::new(10.0, 10.0, 20.0, 20.0))); // corner touch
    /// assert!(!region.overlaps(Region::new(11.0, 0.0, 20.0, 10.0)));
    /// ```
    #[inline]
    pub fn overlaps(self, other: Self) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    /// Splits the region at its midpoint into four quadrants.
    ///
    /// Order: bottom-left, bottom-right, top-left, top-right. The
    /// quadrants cover the region exactly and share the midlines.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadtree::Region;
    ///
    /// let [bl, br, tl, tr] = Region::new(0.0, 0.0, 10.0, 10.0).quadrants();
    /// assert_eq!(bl, Region::new(0.0, 0.0, 5.0, 5.0));
    /// assert_eq!(br, Region::new(5.0, 0.0, 10.0, 5.0));
    /// assert_eq!(tl, Region::new(0.0, 5.0, 5.0, 10.0));
    /// assert_eq!(tr, Region::new(5.0, 5.0, 10.0, 10.0));
    /// ```
    pub fn quadrants(self) -> [Self; 4] {
        let mid_x = self.center_x();
        let mid_y = self.center_y();
        [
            Self::new(self.min_x, self.min_y, mid_x, mid_y),
            Self::new(mid_x, self.min_y, self.max_x, mid_y),
            Self::new(self.min_x, mid_y, mid_x, self.max_y),
            Self::new(mid_x, mid_y, self.max_x, self.max_y),
        ]
    }

    /// Picks the quadrant that fully contains `bounds`, assuming `bounds`
    /// is already contained in `self`.
    ///
    /// Returns `None` when `bounds` straddles a midline (crosses `mid_x`
    /// or `mid_y` strictly), or when this region is at floating-point
    /// resolution and its midpoint no longer separates both axes; in
    /// either case the element belongs in the local collection. A
    /// `Some(i)` result guarantees `self.quadrants()[i]` contains
    /// `bounds`.
    pub(crate) fn quadrant_index(self, bounds: Self) -> Option<usize> {
        let mid_x = self.center_x();
        let mid_y = self.center_y();
        // A region this small cannot be split into strictly smaller
        // quadrants; descent stops here.
        if mid_x <= self.min_x || mid_x >= self.max_x || mid_y <= self.min_y || mid_y >= self.max_y
        {
            return None;
        }
        if (bounds.min_x < mid_x && bounds.max_x > mid_x)
            || (bounds.min_y < mid_y && bounds.max_y > mid_y)
        {
            return None;
        }
        let east = bounds.max_x > mid_x;
        let north = bounds.max_y > mid_y;
        Some(usize::from(east) + 2 * usize::from(north))
    }
}

impl Default for Region {
    /// Returns [`Region::UNIT`].
    fn default() -> Self {
        Self::UNIT
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]..[{}, {}]", self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

/// Capability trait for values stored in a tree: every element reports an
/// axis-aligned bounding box.
///
/// The reported box must stay stable while the value is stored, and values
/// that compare equal must report equal boxes; a mismatch makes removal
/// ambiguous. Such a mismatch is a logic error: it cannot cause undefined
/// behavior, but elements may become unfindable.
///
/// `Region` implements `Bounded` for itself, so plain rectangles can be
/// stored without a wrapper type.
///
/// # Examples
///
/// ```
/// use quadtree::{Bounded, Region};
///
/// #[derive(Clone, PartialEq)]
/// struct Ship {
///     id: u32,
///     hull: Region,
/// }
///
/// impl Bounded for Ship {
///     fn bounds(&self) -> Region {
///         self.hull
///     }
/// }
/// ```
pub trait Bounded {
    /// The axis-aligned bounding box of this value.
    fn bounds(&self) -> Region;
}

impl Bounded for Region {
    #[inline]
    fn bounds(&self) -> Self {
        *self
    }
}
