//! Block/offset index arithmetic for the block vector layout.
//!
//! Block *k* holds exactly `2^k` elements and spans logical indices
//! `[2^k − 1, 2^(k+1) − 2]`, so the total capacity of the first
//! `block_count` blocks is `2^block_count − 1`. The mapping from a
//! logical index to its block coordinates uses integer bit-length on
//! `index + 1`, never a floating-point logarithm, which rounds
//! unreliably at exact powers of two.
//!
//! This module is the single source of truth for the mapping: both the
//! container and the introspection walker resolve coordinates through
//! it, so the externally computed mapping cannot drift from the
//! internal one.

/// Maximum number of blocks a block vector may allocate.
///
/// Caps total capacity at `2^32 − 1` elements. Push reports a
/// capacity error beyond this rather than growing the block table.
pub const MAX_BLOCKS: usize = 32;

/// Coordinates of a logical index within the block sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockPos {
    /// Which block holds the element.
    pub block: usize,
    /// Position of the element within that block.
    pub offset: usize,
}

/// Map a logical index to its block coordinates.
///
/// `block = bit_length(index + 1) − 1`, `offset = index − (2^block − 1)`.
/// Index 0 maps to block 0, offset 0.
pub fn block_position(index: usize) -> BlockPos {
    let block = (index + 1).ilog2() as usize;
    BlockPos {
        block,
        offset: index - (block_capacity(block) - 1),
    }
}

/// Capacity of block `block`, in elements.
pub fn block_capacity(block: usize) -> usize {
    debug_assert!(block < MAX_BLOCKS);
    1 << block
}

/// Total capacity of the first `block_count` blocks, in elements.
pub fn cumulative_capacity(block_count: usize) -> usize {
    debug_assert!(block_count <= MAX_BLOCKS);
    ((1u64 << block_count) - 1) as usize
}
