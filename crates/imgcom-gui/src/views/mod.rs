pub mod compress;
pub mod convert;

pub use compress::{CompressState, show_compress};
pub use convert::{ConvertState, show_convert};
