//! Cubby: growable containers with stable-address guarantees and
//! layout introspection.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the cubby sub-crates. For most users, adding `cubby` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cubby::prelude::*;
//!
//! // A flat array: contiguous storage, reallocates on growth.
//! let mut names = FlatArray::new();
//! names.push("ada");
//! names.push("grace");
//! assert_eq!(names.get(1)?, &"grace");
//!
//! // A block vector: elements never move once stored.
//! let mut squares = BlockVector::new();
//! for n in 0..10u32 {
//!     squares.push(n * n)?;
//! }
//! assert_eq!(*squares.get(9)?, 81);
//! assert_eq!(squares.block_count(), 4);
//!
//! // Both expose the same read-only debug-layout contract.
//! assert_eq!(cubby::inspect::summary(&squares.raw_record()), "block[10] (4 blocks)");
//! # Ok::<(), cubby::types::StoreError>(())
//! ```
//!
//! # Choosing a container
//!
//! | Container | Storage | On growth | Element addresses |
//! |-----------|---------|-----------|-------------------|
//! | [`store::FlatArray`] | one contiguous allocation | doubles and moves | invalidated by growth |
//! | [`store::BlockVector`] | power-of-two blocks | allocates a new block | stable for the container's lifetime |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Kind tags, error taxonomy, index arithmetic, and raw records
/// (`cubby-core`).
pub use cubby_core as types;

/// The containers themselves (`cubby-store`).
pub use cubby_store as store;

/// Read-only layout introspection (`cubby-inspect`).
pub use cubby_inspect as inspect;

/// Common imports for typical cubby usage.
///
/// ```rust
/// use cubby::prelude::*;
/// ```
pub mod prelude {
    pub use cubby_core::{ContainerKind, InspectError, Introspect, StoreError};
    pub use cubby_store::{BlockVector, FlatArray};
}
