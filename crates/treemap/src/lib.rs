//! Red-black tree ordered map with caller-defined key ordering.
//!
//! # Overview
//!
//! - [`TreeMap`] — ordered key-value map; insertion and lookup descend by a
//!   caller-supplied comparator, and a post-insertion fix-up keeps the tree
//!   balanced through recoloring and rotations.
//! - [`RbNode`] — arena-backed tree node; every link is an `Option<u32>`
//!   index, so the parent back-reference is non-owning and there are no
//!   reference cycles to manage.
//! - [`util`] — index-based tree walks (`first`, `next`, `last`, `prev`),
//!   generic over any [`types::Node`].
//! - [`red_black`] — the rotation and fix-up machinery itself.
//! - [`print`] — indented tree rendering for debugging.
//!
//! The map is single-threaded and insert-only: keys are never removed, and
//! inserting a key that is already present is a no-op that reports `false`.
//!
//! # Example
//!
//! ```
//! use treemap::TreeMap;
//!
//! let mut map = TreeMap::new(|a: &i32, b: &i32| b - a);
//! assert!(map.insert(2, "two"));
//! assert!(map.insert(1, "one"));
//! assert!(!map.insert(2, "again"));
//! assert_eq!(map.get(&2), Some(&"two"));
//!
//! let keys: Vec<i32> = map.iter().map(|(k, _)| *k).collect();
//! assert_eq!(keys, vec![1, 2]);
//! ```

mod map;
mod node;
pub mod print;
pub mod red_black;
pub mod types;
pub mod util;

pub use map::{Entries, InvariantError, TreeMap};
pub use node::RbNode;
