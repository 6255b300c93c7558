use crate::encoding::ByteOrder;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sample-data-gen", version)]
#[command(
    about = "Write int32/int64/uint32/uint64/float32/float64 fixtures holding the values 1..5 \
                   into ./sample-data."
)]
pub struct Cli {
    /// Byte order of every element; "native" follows the host.
    #[arg(long = "byte-order", value_enum, default_value_t = ByteOrder::Native)]
    pub byte_order: ByteOrder,

    /// Log each written file.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
