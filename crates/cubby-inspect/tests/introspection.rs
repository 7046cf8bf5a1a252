//! Integration test: the inspection contract against live containers.
//!
//! The walker sees only raw records, never the containers' runtime
//! API, and must reproduce exactly what runtime iteration yields.
//! Agreement here is the contract clause that an externally computed
//! index mapping matches the internal one.

use cubby_core::{ContainerKind, Introspect, RawRecord};
use cubby_inspect::{elements, summary, Registry};
use cubby_store::{BlockVector, FlatArray};

#[test]
fn walker_agrees_with_flat_runtime_iteration() {
    for n in [0usize, 1, 2, 7, 8, 1000] {
        let mut array = FlatArray::new();
        for value in 0..n {
            array.push(value);
        }

        let record = array.raw_record();
        let walked: Vec<usize> = elements(&record).unwrap().into_iter().copied().collect();
        let iterated: Vec<usize> = array.iter().copied().collect();
        assert_eq!(walked, iterated, "n = {n}");
    }
}

#[test]
fn walker_agrees_with_block_runtime_iteration() {
    for n in [0usize, 1, 2, 7, 8, 1000] {
        let mut vector = BlockVector::new();
        for value in 0..n {
            vector.push(value).unwrap();
        }

        let record = vector.raw_record();
        let walked: Vec<usize> = elements(&record).unwrap().into_iter().copied().collect();
        let iterated: Vec<usize> = vector.iter().copied().collect();
        assert_eq!(walked, iterated, "n = {n}");
    }
}

#[test]
fn records_carry_the_reserved_tags() {
    let array: FlatArray<u8> = FlatArray::new();
    let vector: BlockVector<u8> = BlockVector::new();

    let registry = Registry::default();
    assert_eq!(
        registry.recognize(array.raw_record().tag()),
        Some(ContainerKind::Flat)
    );
    assert_eq!(
        registry.recognize(vector.raw_record().tag()),
        Some(ContainerKind::Block)
    );
}

#[test]
fn block_record_exposes_count_and_ordered_blocks() {
    let mut vector = BlockVector::new();
    for value in 0..10u32 {
        vector.push(value).unwrap();
    }

    match vector.raw_record() {
        RawRecord::Block(raw) => {
            assert_eq!(raw.len, 10);
            assert_eq!(raw.blocks.len(), vector.block_count());
            // Block k must hold 2^k slots at cumulative offset 2^k - 1.
            let mut expected = 0u32;
            for block in &raw.blocks {
                for &value in *block {
                    assert_eq!(value, expected);
                    expected += 1;
                }
            }
            assert_eq!(expected, 10);
        }
        RawRecord::Flat(_) => panic!("block vector produced a flat record"),
    };
}

#[test]
fn inspection_leaves_the_container_untouched() {
    let mut vector = BlockVector::new();
    for value in 0..20 {
        vector.push(value).unwrap();
    }
    let before: Vec<i32> = vector.iter().copied().collect();

    // Walk and summarize several times through shared references only.
    for _ in 0..3 {
        let record = vector.raw_record();
        let _ = elements(&record).unwrap();
        let _ = summary(&record);
    }

    assert_eq!(vector.len(), 20);
    assert_eq!(vector.iter().copied().collect::<Vec<_>>(), before);
}

#[test]
fn summaries_match_the_printer_shapes() {
    let mut array = FlatArray::new();
    array.push(1);
    array.push(2);
    assert_eq!(summary(&array.raw_record()), "flat[2]");

    let mut vector = BlockVector::new();
    for value in 0..12 {
        vector.push(value).unwrap();
    }
    assert_eq!(summary(&vector.raw_record()), "block[12] (4 blocks)");
}
