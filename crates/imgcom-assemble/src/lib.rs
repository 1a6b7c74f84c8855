pub mod assemble;
mod constants;
mod layout;
mod options;
mod stats;
mod store;
mod types;

pub use assemble::{assemble, assemble_sync, load_image_file, load_image_files, save_pdf};
pub use constants::*;
pub use layout::{PlacementRect, fit_page};
pub use options::*;
pub use stats::calculate_statistics;
pub use store::{ImageId, ImageStore, MoveDirection, SourceImage};
pub use types::*;
