//! End-to-end properties of the populate/emit pipeline.

use std::collections::BTreeSet;
use std::io::{self, BufRead, Cursor, Write};

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use vsort::{
    create_sink, emit, open_lines, populate, BitVector, BitmapSort, PipelineState, SortConfig,
    SortError,
};

fn to_input(values: &[usize]) -> String {
    values.iter().map(|v| format!("{v}\n")).collect()
}

fn sort_text(input: &str, capacity: usize) -> Result<String, SortError> {
    let populated = populate(Cursor::new(input).lines(), capacity).map_err(|e| e.error)?;
    let mut out = Vec::new();
    emit(&populated.vector, &mut out)?;
    Ok(String::from_utf8(out).expect("decimal output is ASCII"))
}

#[test]
fn shuffled_distinct_values_come_back_sorted() {
    let capacity = 100_000;
    let mut values: Vec<usize> = (0..capacity).step_by(7).collect();
    let expected = to_input(&values);

    let mut rng = StdRng::seed_from_u64(0x5eed);
    values.shuffle(&mut rng);

    assert_eq!(sort_text(&to_input(&values), capacity).unwrap(), expected);
}

#[test]
fn file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.txt");
    let output_path = dir.path().join("output.txt");

    let mut values: Vec<usize> = (0..5_000).map(|i| i * 13 % 9_973).collect();
    let mut rng = StdRng::seed_from_u64(42);
    values.shuffle(&mut rng);
    std::fs::write(&input_path, to_input(&values)).unwrap();

    let mut sort = BitmapSort::new(SortConfig::with_capacity(10_000));
    let report = sort
        .run(
            open_lines(&input_path).unwrap(),
            create_sink(&output_path).unwrap(),
        )
        .unwrap();
    assert_eq!(report.entries, values.len());
    assert_eq!(report.emitted, values.len());
    assert_eq!(sort.state(), PipelineState::Done);

    let written: Vec<usize> = open_lines(&output_path)
        .unwrap()
        .map(|line| line.unwrap().parse().unwrap())
        .collect();
    values.sort_unstable();
    assert_eq!(written, values);
}

#[cfg(feature = "mmap")]
#[test]
fn mmap_source_matches_buffered_source() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"9\r\n1\r\n4\r\n").unwrap();
    file.flush().unwrap();

    let input = vsort::MmapInput::open(file.path()).unwrap();
    let mapped = populate(input.lines(), 16).unwrap();
    let buffered = populate(open_lines(file.path()).unwrap(), 16).unwrap();

    assert_eq!(mapped, buffered);
    assert_eq!(mapped.vector.iter_ones().collect::<Vec<_>>(), vec![1, 4, 9]);
}

#[test]
fn missing_input_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = open_lines(dir.path().join("absent.txt")).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn failed_run_writes_nothing() {
    let mut sort = BitmapSort::new(SortConfig::with_capacity(10));
    let mut out = Vec::new();

    let err = sort
        .run(Cursor::new("1\n2\n2\n3\n").lines(), &mut out)
        .unwrap_err();
    assert_eq!(err.processed, 2);
    assert!(matches!(err.error, SortError::Duplicate { value: 2 }));
    assert!(out.is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn enumeration_is_sorted_and_deduplicated(
        num_bits in 0usize..512,
        indices in prop::collection::vec(0usize..512, 0..128),
    ) {
        let mut bv = BitVector::new(num_bits);
        let mut expected = BTreeSet::new();
        for idx in indices {
            if idx < bv.max_bits() {
                let _ = bv.insert(idx);
                expected.insert(idx);
            }
        }

        let ones: Vec<usize> = bv.iter_ones().collect();
        prop_assert_eq!(ones, expected.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn enumeration_ignores_insertion_order(
        set in prop::collection::btree_set(0usize..1_000, 0..200),
        seed in any::<u64>(),
    ) {
        let mut values: Vec<usize> = set.iter().copied().collect();
        values.shuffle(&mut StdRng::seed_from_u64(seed));

        let output = sort_text(&to_input(&values), 1_000).unwrap();
        let expected = to_input(&set.into_iter().collect::<Vec<_>>());
        prop_assert_eq!(output, expected);
    }

    #[test]
    fn set_bits_stay_set(
        first in 0usize..256,
        others in prop::collection::vec(0usize..256, 0..64),
    ) {
        let mut bv = BitVector::new(256);
        prop_assert!(bv.set_bit(first).is_ok());
        for other in others {
            if other != first {
                let _ = bv.insert(other);
            }
        }
        prop_assert_eq!(bv.test_bit(first), Ok(true));
    }

    #[test]
    fn out_of_range_values_abort(
        prefix in prop::collection::btree_set(0usize..100, 0..20),
        bad in 100usize..10_000,
    ) {
        let mut values: Vec<usize> = prefix.iter().copied().collect();
        values.push(bad);
        values.push(0);

        let err = populate(Cursor::new(to_input(&values)).lines(), 100).unwrap_err();
        prop_assert_eq!(err.processed, prefix.len());
        let is_range = matches!(err.error, SortError::Range { value, capacity: 100 } if value == bad);
        prop_assert!(is_range);
    }
}
