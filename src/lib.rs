//! # Quadtree - Recursive Quadtree Spatial Index
//!
//! A generic, in-memory quadtree for axis-aligned bounded objects over a
//! rectangular 2D domain, answering overlap and containment queries.
//!
//! ## Features
//!
//! - **Generic elements**: store any type that reports a bounding box via
//!   the [`Bounded`] trait; [`Region`] implements it for plain rectangles
//! - **Recursive structure**: every node is itself a quadtree; children
//!   are created lazily on the first insert that descends, and pruned
//!   when removal empties them
//! - **Elements are never split**: a box straddling a node's midlines
//!   stays in that node's local collection, so each element is stored
//!   exactly once per insert
//! - **Pruned queries**: overlap ([`QuadTree::find_colliding`]) and
//!   containment ([`QuadTree::find_inscribed`]) searches skip subtrees
//!   that cannot match
//! - **Snapshot iteration**: iterators own a materialized copy of their
//!   results and are immune to later tree mutations
//! - **Optional serde**: the `serde` feature derives
//!   `Serialize`/`Deserialize` for [`Region`]
//!
//! ## Quick Start
//!
//! ```rust
//! use quadtree::{QuadTree, Region};
//!
//! // A tree over a 100x100 domain.
//! let mut tree = QuadTree::new(Region::new(0.0, 0.0, 100.0, 100.0));
//!
//! // Region implements Bounded, so plain rectangles can be stored; any
//! // type implementing Bounded works the same way.
//! tree.insert(Region::new(10.0, 10.0, 20.0, 20.0)).unwrap();
//! tree.insert(Region::new(60.0, 60.0, 80.0, 80.0)).unwrap();
//! tree.insert(Region::new(40.0, 40.0, 60.0, 60.0)).unwrap(); // straddles the midlines
//! assert_eq!(tree.len(), 3);
//!
//! // Everything overlapping a rectangle.
//! let touched = tree.find_colliding(Region::new(0.0, 0.0, 30.0, 30.0));
//! assert_eq!(touched.len(), 1);
//!
//! // Everything lying fully inside a rectangle.
//! let inside = tree.find_inscribed(Region::new(0.0, 0.0, 65.0, 65.0));
//! assert_eq!(inside.len(), 2);
//!
//! // Iterate a snapshot of the whole tree.
//! for element in &tree {
//!     println!("{element}");
//! }
//! ```
//!
//! ## How It Works
//!
//! Every node covers a rectangular [`Region`]. Inserting an element whose
//! box crosses one of the node's midlines stores it in the node's local
//! collection; otherwise the node subdivides at its midpoint into four
//! children (all at once, lazily) and the element descends into the one
//! quadrant that fully contains it. The result is that each element lives
//! at the shallowest node that cannot pass it further down, and queries
//! can discard whole subtrees by comparing their regions against the
//! query rectangle.
//!
//! Removal searches the whole subtree for an equal element, erases at
//! most one copy, and drops every group of four children left empty, so a
//! drained tree collapses back to a single node.
//!
//! All coordinates are `f32` and all interval comparisons are closed:
//! boxes that merely touch count as overlapping.

pub mod error;
pub mod iter;
pub mod prelude;
pub mod region;
pub mod tree;

pub use error::{QuadTreeError, QuadTreeResult};
pub use iter::Elements;
pub use region::{Bounded, Region};
pub use tree::QuadTree;
