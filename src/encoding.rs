use crate::constants::{FILE_EXTENSION, FILE_PREFIX};
use clap::ValueEnum;
use std::fmt;
use std::mem::size_of;

/// Byte order used when laying out each element of a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ByteOrder {
    /// Whatever the host uses.
    #[default]
    Native,
    Little,
    Big,
}

impl fmt::Display for ByteOrder {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let name = match self {
            ByteOrder::Native => "native",
            ByteOrder::Little => "little",
            ByteOrder::Big => "big",
        };
        f.write_str(name)
    }
}

/// The numeric types a fixture can be written in.
///
/// Widths are fixed by the type name, so `int64` is always 8 bytes
/// regardless of what the host calls a `long`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Int32,
    Int64,
    Uint32,
    Uint64,
    Float32,
    Float64,
}

// Appends every value converted to `$ty` in the requested byte order.
macro_rules! extend_encoded {
    ($ty:ty, $values:expr, $order:expr, $out:expr) => {
        for &v in $values {
            let v = <$ty>::from(v);
            let bytes = match $order {
                ByteOrder::Native => v.to_ne_bytes(),
                ByteOrder::Little => v.to_le_bytes(),
                ByteOrder::Big => v.to_be_bytes(),
            };
            $out.extend_from_slice(&bytes);
        }
    };
}

impl Encoding {
    /// All encodings in the order fixtures are written.
    pub const ALL: [Encoding; 6] = [
        Encoding::Int32,
        Encoding::Int64,
        Encoding::Uint32,
        Encoding::Uint64,
        Encoding::Float32,
        Encoding::Float64,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Encoding::Int32 => "int32",
            Encoding::Int64 => "int64",
            Encoding::Uint32 => "uint32",
            Encoding::Uint64 => "uint64",
            Encoding::Float32 => "float32",
            Encoding::Float64 => "float64",
        }
    }

    /// Size of a single element in bytes.
    pub fn n_bytes(self) -> usize {
        match self {
            Encoding::Int32 => size_of::<i32>(),
            Encoding::Int64 => size_of::<i64>(),
            Encoding::Uint32 => size_of::<u32>(),
            Encoding::Uint64 => size_of::<u64>(),
            Encoding::Float32 => size_of::<f32>(),
            Encoding::Float64 => size_of::<f64>(),
        }
    }

    /// File name of the fixture holding this encoding, e.g. `data-int32.dat`.
    pub fn file_name(self) -> String {
        format!("{FILE_PREFIX}{}.{FILE_EXTENSION}", self.name())
    }

    /// Encodes `values` back to back with no separators or header.
    pub fn encode(
        self,
        values: &[u8],
        order: ByteOrder,
    ) -> Vec<u8> {
        let mut out = Vec::with_capacity(values.len() * self.n_bytes());
        match self {
            Encoding::Int32 => extend_encoded!(i32, values, order, out),
            Encoding::Int64 => extend_encoded!(i64, values, order, out),
            Encoding::Uint32 => extend_encoded!(u32, values, order, out),
            Encoding::Uint64 => extend_encoded!(u64, values, order, out),
            Encoding::Float32 => extend_encoded!(f32, values, order, out),
            Encoding::Float64 => extend_encoded!(f64, values, order, out),
        }
        out
    }
}

impl fmt::Display for Encoding {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}
