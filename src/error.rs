//! Tree error types.

use thiserror::Error;

use crate::region::Region;

/// Errors returned by tree mutations.
///
/// These are the only two failure kinds in the crate. Both are reported
/// before anything is mutated; every other operation is total.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum QuadTreeError {
    /// An insert was rejected because the element's bounding box is not
    /// fully contained in the region of the node it was offered to.
    #[error("element bounds {element} extend outside the node region {region}")]
    OutOfBounds {
        /// Bounding box of the rejected element.
        element: Region,
        /// Region of the node the insert was attempted on.
        region: Region,
    },
    /// A removal was rejected because the element's bounding box does not
    /// overlap the region of the node it was offered to at all.
    #[error("element bounds {element} do not overlap the node region {region}")]
    Disjoint {
        /// Bounding box of the element the caller asked to remove.
        element: Region,
        /// Region of the node the removal was attempted on.
        region: Region,
    },
}

/// Convenience alias for results of fallible tree operations.
pub type QuadTreeResult<T> = Result<T, QuadTreeError>;
