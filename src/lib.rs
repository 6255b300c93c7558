pub mod cli;
pub mod config;
pub mod constants;
pub mod encoding;
pub mod generator;
pub mod logging;

pub use encoding::{ByteOrder, Encoding};
pub use generator::generate;
