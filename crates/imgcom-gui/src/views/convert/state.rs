use imgcom_assemble::{AssemblyOptions, ImageStore};

use crate::ui_components::ImagePreview;

pub struct ConvertState {
    pub store: ImageStore<ImagePreview>,
    pub options: AssemblyOptions,
    /// True while an assembly run is in flight; list mutation is disabled
    /// until the run completes or fails
    pub busy: bool,
}

impl Default for ConvertState {
    fn default() -> Self {
        Self {
            store: ImageStore::new(),
            options: AssemblyOptions::default(),
            busy: false,
        }
    }
}
