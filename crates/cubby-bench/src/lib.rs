//! Benchmark workloads for the cubby containers.
//!
//! Deterministic value and index sequences shared by the criterion
//! benches, so flat and block runs measure identical workloads without
//! an RNG dependency.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Deterministic pseudo-random values via a fixed LCG.
///
/// The constants are the classic Knuth MMIX multiplier/increment; the
/// point is reproducibility, not statistical quality.
pub fn scatter(n: usize, seed: u64) -> Vec<u64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            state
        })
        .collect()
}

/// Index sequence that strides across `len` elements, wrapping, until
/// every slot has been visited once.
///
/// `stride` should be coprime with `len` so the walk covers all
/// indices; the benches use a large prime.
pub fn strided_indices(len: usize, stride: usize) -> Vec<usize> {
    (0..len).map(|n| (n * stride) % len.max(1)).collect()
}
