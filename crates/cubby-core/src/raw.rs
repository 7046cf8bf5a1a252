//! Raw debug-layout records for read-only introspection.
//!
//! A raw record is what a layout-level inspection tool sees: the
//! reserved tag, the recorded element count, and the storage handles —
//! nothing else. Counts are carried as `i64` so a corrupted (negative)
//! value is representable and can be diagnosed instead of silently
//! clamped.
//!
//! Records borrow from the container and must never be used to mutate
//! it; the walker in `cubby-inspect` consumes them by shared reference
//! only.

use smallvec::SmallVec;

use crate::kind::ContainerKind;

/// Debug layout of a flat array: count plus the raw storage handle.
#[derive(Clone, Debug)]
pub struct RawFlat<'a, T> {
    /// Kind tag; [`ContainerKind::Flat`]'s tag in well-formed records.
    pub tag: u64,
    /// Recorded element count. Negative only in corrupted records.
    pub len: i64,
    /// Handle to the initialized storage prefix.
    pub storage: &'a [T],
}

/// Debug layout of a block vector: count plus the ordered block handles.
#[derive(Clone, Debug)]
pub struct RawBlock<'a, T> {
    /// Kind tag; [`ContainerKind::Block`]'s tag in well-formed records.
    pub tag: u64,
    /// Recorded element count. Negative only in corrupted records.
    pub len: i64,
    /// Ordered block handles; `blocks.len()` is the recorded block count.
    pub blocks: SmallVec<[&'a [T]; 4]>,
}

/// A raw record of either container kind.
#[derive(Clone, Debug)]
pub enum RawRecord<'a, T> {
    /// Flat array layout.
    Flat(RawFlat<'a, T>),
    /// Block vector layout.
    Block(RawBlock<'a, T>),
}

impl<T> RawRecord<'_, T> {
    /// The tag carried by the record.
    pub fn tag(&self) -> u64 {
        match self {
            Self::Flat(raw) => raw.tag,
            Self::Block(raw) => raw.tag,
        }
    }

    /// The recorded element count, as stored (possibly negative).
    pub fn recorded_len(&self) -> i64 {
        match self {
            Self::Flat(raw) => raw.len,
            Self::Block(raw) => raw.len,
        }
    }

    /// Resolve the record's tag to a kind, if it is a reserved value.
    pub fn kind(&self) -> Option<ContainerKind> {
        ContainerKind::from_tag(self.tag())
    }
}

/// Debug-introspection contract implemented by both containers.
///
/// The inspection path is read-only: implementations expose a borrowed
/// snapshot of their layout and must not mutate any state to do so.
pub trait Introspect {
    /// Element type stored by the container.
    type Element;

    /// The kind discriminant for this container type.
    fn kind(&self) -> ContainerKind;

    /// Snapshot the container's debug layout as a raw record.
    fn raw_record(&self) -> RawRecord<'_, Self::Element>;
}
