//! Growable container storage for the cubby library.
//!
//! Two independent containers share the debug-layout contract from
//! `cubby-core` but differ in growth strategy:
//!
//! ```text
//! FlatArray<T>                    BlockVector<T>
//! └── storage: Vec<T>             ├── blocks[0] — capacity 1
//!     (single allocation,         ├── blocks[1] — capacity 2
//!      doubled and moved          ├── blocks[2] — capacity 4
//!      on growth)                 └── blocks[k] — capacity 2^k
//!                                     (allocated on demand,
//!                                      never moved afterwards)
//! ```
//!
//! [`FlatArray`] is the classic amortized-doubling array: growth
//! reallocates, so element addresses change. [`BlockVector`] trades
//! contiguity for address stability: once an element is stored, its
//! address is fixed for the container's lifetime, because growth only
//! ever allocates a fresh block and existing blocks are never touched.
//!
//! Neither container synchronizes internally. All mutation goes through
//! `&mut self`; concurrent use requires external locking.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod block;
pub mod flat;

// Public re-exports for the primary API surface.
pub use block::BlockVector;
pub use flat::FlatArray;

pub use cubby_core::{Introspect, StoreError};
