//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use quadtree::prelude::*;
//! ```

pub use crate::Bounded;
pub use crate::Elements;
pub use crate::QuadTree;
pub use crate::QuadTreeError;
pub use crate::QuadTreeResult;
pub use crate::Region;
