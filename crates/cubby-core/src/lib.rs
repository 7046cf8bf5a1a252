//! Core types and the debug-layout contract for the cubby containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the container kind discriminants with their reserved debug tags, the
//! shared error taxonomy, the block/offset index arithmetic, and the raw
//! record types consumed by the read-only introspection layer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod kind;
pub mod layout;
pub mod raw;

// Public re-exports for the primary API surface.
pub use error::{InspectError, StoreError};
pub use kind::ContainerKind;
pub use layout::{BlockPos, MAX_BLOCKS};
pub use raw::{Introspect, RawBlock, RawFlat, RawRecord};
