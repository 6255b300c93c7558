#![allow(dead_code)]
use std::path::Path;

/// Expected file name and element width for every fixture, in write order.
pub const FIXTURES: [(&str, usize); 6] = [
    ("data-int32.dat", 4),
    ("data-int64.dat", 8),
    ("data-uint32.dat", 4),
    ("data-uint64.dat", 8),
    ("data-float32.dat", 4),
    ("data-float64.dat", 8),
];

fn chunks<const N: usize>(bytes: &[u8]) -> Vec<[u8; N]> {
    assert_eq!(bytes.len() % N, 0, "length {} not a multiple of {N}", bytes.len());
    bytes
        .chunks_exact(N)
        .map(|c| c.try_into().unwrap())
        .collect()
}

/// Decodes a native-order fixture into f64 so every type compares alike.
pub fn decode_native(
    name: &str,
    bytes: &[u8],
) -> Vec<f64> {
    match name {
        "data-int32.dat" => chunks::<4>(bytes).into_iter().map(|b| i32::from_ne_bytes(b) as f64).collect(),
        "data-int64.dat" => chunks::<8>(bytes).into_iter().map(|b| i64::from_ne_bytes(b) as f64).collect(),
        "data-uint32.dat" => chunks::<4>(bytes).into_iter().map(|b| u32::from_ne_bytes(b) as f64).collect(),
        "data-uint64.dat" => chunks::<8>(bytes).into_iter().map(|b| u64::from_ne_bytes(b) as f64).collect(),
        "data-float32.dat" => chunks::<4>(bytes).into_iter().map(|b| f32::from_ne_bytes(b) as f64).collect(),
        "data-float64.dat" => chunks::<8>(bytes).into_iter().map(f64::from_ne_bytes).collect(),
        other => panic!("unknown fixture {other}"),
    }
}

/// Reads every fixture under `dir` as (name, bytes).
pub fn read_all(dir: &Path) -> Vec<(String, Vec<u8>)> {
    FIXTURES
        .iter()
        .map(|(name, _)| (name.to_string(), std::fs::read(dir.join(name)).unwrap()))
        .collect()
}
