mod encode;
mod options;
mod types;

pub use encode::{compress_file, compress_sync, output_name, save_compressed};
pub use options::*;
pub use types::*;
