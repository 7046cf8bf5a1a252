//! Read-only layout introspection for the cubby containers.
//!
//! This crate is the inspection client's side of the debug-layout
//! contract: given only a raw record (tag, recorded count, storage
//! handles — what a debugger extension reads from target memory), it
//! recognizes the container kind, enumerates the logical elements in
//! order, and renders one-line summaries.
//!
//! It deliberately depends on `cubby-core` alone. The containers'
//! runtime API is out of reach here, which keeps the walker honest: it
//! can only use what the contract exposes, and it can never mutate.
//!
//! Malformed records (corrupted lengths, truncated block tables, alien
//! tags) surface as named [`InspectError`](cubby_core::InspectError)
//! variants from the element walkers. Only the [`summary`] path degrades
//! to placeholder text, because a headline must always render.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod registry;
pub mod walk;

// Public re-exports for the primary API surface.
pub use registry::Registry;
pub use walk::{block_elements, elements, flat_elements, summary};
