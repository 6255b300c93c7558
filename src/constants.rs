// Fixed locations and contents of the generated fixtures
pub const OUTPUT_DIR: &str = "sample-data";
pub const VALUE_SEQUENCE: [u8; 5] = [1, 2, 3, 4, 5];
pub const FILE_PREFIX: &str = "data-";
pub const FILE_EXTENSION: &str = "dat";
