//! Element walkers and summary rendering for raw records.
//!
//! The walkers enumerate logical elements `0..len` from a record's
//! storage handles, resolving block coordinates through
//! [`cubby_core::layout`] — the identical arithmetic the container uses,
//! so the two sides of the contract cannot disagree. Every way a record
//! can be malformed maps to a specific [`InspectError`]; an index whose
//! computed block lies past the recorded block count is an invalid-state
//! error, never placeholder output.

use cubby_core::error::InspectError;
use cubby_core::kind::ContainerKind;
use cubby_core::layout;
use cubby_core::raw::{RawBlock, RawFlat, RawRecord};

/// Enumerate a flat record's elements in index order.
pub fn flat_elements<'a, T>(raw: &RawFlat<'a, T>) -> Result<Vec<&'a T>, InspectError> {
    check_tag(raw.tag, ContainerKind::Flat)?;
    let len = check_len(raw.len)?;

    let mut out = Vec::with_capacity(len);
    for index in 0..len {
        let slot = raw
            .storage
            .get(index)
            .ok_or(InspectError::StorageTruncated {
                index,
                available: raw.storage.len(),
            })?;
        out.push(slot);
    }
    Ok(out)
}

/// Enumerate a block record's elements in index order.
pub fn block_elements<'a, T>(raw: &RawBlock<'a, T>) -> Result<Vec<&'a T>, InspectError> {
    check_tag(raw.tag, ContainerKind::Block)?;
    let len = check_len(raw.len)?;

    let mut out = Vec::with_capacity(len);
    for index in 0..len {
        let pos = layout::block_position(index);
        let block = raw
            .blocks
            .get(pos.block)
            .ok_or(InspectError::BlockOutOfRange {
                index,
                block_index: pos.block,
                block_count: raw.blocks.len(),
            })?;
        let slot = block.get(pos.offset).ok_or(InspectError::StorageTruncated {
            index,
            available: block.len(),
        })?;
        out.push(slot);
    }
    Ok(out)
}

/// Enumerate a record's elements, dispatching on its shape.
pub fn elements<'a, T>(record: &RawRecord<'a, T>) -> Result<Vec<&'a T>, InspectError> {
    match record {
        RawRecord::Flat(raw) => flat_elements(raw),
        RawRecord::Block(raw) => block_elements(raw),
    }
}

/// Render a one-line headline for a record.
///
/// `flat[<len>]` or `block[<len>] (<n> blocks)`. Unlike the walkers,
/// this never fails: a negative count renders as `<invalid>` and a tag
/// that does not match the record's shape is called out inline. A
/// headline has to print even for a corrupted target.
pub fn summary<T>(record: &RawRecord<'_, T>) -> String {
    let len = match record.recorded_len() {
        len if len >= 0 => len.to_string(),
        _ => "<invalid>".to_string(),
    };
    let (expected, body) = match record {
        RawRecord::Flat(_) => (ContainerKind::Flat, format!("flat[{len}]")),
        RawRecord::Block(raw) => (
            ContainerKind::Block,
            format!("block[{len}] ({} blocks)", raw.blocks.len()),
        ),
    };
    if record.tag() == expected.tag() {
        body
    } else {
        format!("{body} <bad tag {:#018x}>", record.tag())
    }
}

fn check_tag(tag: u64, expected: ContainerKind) -> Result<(), InspectError> {
    match ContainerKind::from_tag(tag) {
        Some(found) if found == expected => Ok(()),
        Some(found) => Err(InspectError::KindMismatch { expected, found }),
        None => Err(InspectError::UnknownTag { found: tag }),
    }
}

fn check_len(len: i64) -> Result<usize, InspectError> {
    if len < 0 {
        return Err(InspectError::NegativeLength { len });
    }
    Ok(len as usize)
}
