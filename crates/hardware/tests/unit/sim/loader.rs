//! Binary Loader Tests.

use std::io::Write;

use mipsim_core::SimError;
use mipsim_core::sim::loader::{load_binary, seed_data_memory};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

#[test]
fn loads_bytes_verbatim() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0x00, 0x22, 0x08, 0x20]).unwrap();

    let bytes = load_binary(file.path()).unwrap();
    assert_eq!(bytes, vec![0x00, 0x22, 0x08, 0x20]);
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.bin");

    let err = load_binary(&path).unwrap_err();
    match &err {
        SimError::Io { path: p, .. } => assert_eq!(p, &path),
        other => panic!("expected Io error, got {other:?}"),
    }
    assert!(err.to_string().contains("absent.bin"));
}

#[test]
fn unseeded_memory_is_zeroed() {
    assert_eq!(seed_data_memory(16, None).unwrap(), vec![0; 16]);
}

#[test]
fn seed_fills_from_address_zero() {
    let mem = seed_data_memory(8, Some(&[1, 2, 3])).unwrap();
    assert_eq!(mem, vec![1, 2, 3, 0, 0, 0, 0, 0]);
}

#[test]
fn seed_may_fill_memory_exactly() {
    let mem = seed_data_memory(4, Some(&[9; 4])).unwrap();
    assert_eq!(mem, vec![9; 4]);
}

#[test]
fn oversized_seed_is_rejected() {
    let err = seed_data_memory(4, Some(&[0; 5])).unwrap_err();
    assert!(matches!(
        err,
        SimError::SeedTooLarge {
            seed: 5,
            capacity: 4
        }
    ));
}
