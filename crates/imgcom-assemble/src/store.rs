//! Ordered collection of source images awaiting assembly
//!
//! The store owns the loaded file bytes and whatever preview handle the
//! display layer attaches to each entry. List order is page order.

use crate::types::ImageFile;

/// Identifier assigned to a stored image at ingestion time.
/// Stable for the entry's lifetime and never reused within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(u64);

/// Direction for moving an image within the ordered list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Toward the front of the list (earlier page)
    Earlier,
    /// Toward the back of the list (later page)
    Later,
}

/// One stored image plus its optional preview handle.
///
/// The preview handle is owned by the entry and dropped with it, so
/// removing the entry releases the preview exactly once.
#[derive(Debug)]
pub struct SourceImage<P> {
    id: ImageId,
    file: ImageFile,
    preview: Option<P>,
}

impl<P> SourceImage<P> {
    pub fn id(&self) -> ImageId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.file.name
    }

    pub fn size_bytes(&self) -> u64 {
        self.file.bytes.len() as u64
    }

    pub fn file(&self) -> &ImageFile {
        &self.file
    }

    pub fn preview(&self) -> Option<&P> {
        self.preview.as_ref()
    }
}

/// The user-curated, ordered list of source images
#[derive(Debug)]
pub struct ImageStore<P> {
    images: Vec<SourceImage<P>>,
    next_id: u64,
}

impl<P> ImageStore<P> {
    pub fn new() -> Self {
        Self {
            images: Vec::new(),
            next_id: 1,
        }
    }

    /// Append one image, returning its identifier
    pub fn add(&mut self, file: ImageFile, preview: Option<P>) -> ImageId {
        let id = ImageId(self.next_id);
        self.next_id += 1;
        self.images.push(SourceImage { id, file, preview });
        id
    }

    /// Append several images without previews, preserving their order
    pub fn add_files(&mut self, files: impl IntoIterator<Item = ImageFile>) -> Vec<ImageId> {
        files.into_iter().map(|file| self.add(file, None)).collect()
    }

    /// Remove the image with the given identifier, dropping its preview
    /// handle. Unknown identifiers are ignored, so repeated removal is safe.
    pub fn remove(&mut self, id: ImageId) {
        if let Some(idx) = self.position(id) {
            self.images.remove(idx);
        }
    }

    /// Swap the image with its neighbor in the given direction. No-op when
    /// the image is absent or already at that end of the list.
    pub fn move_image(&mut self, id: ImageId, direction: MoveDirection) {
        let Some(idx) = self.position(id) else {
            return;
        };
        match direction {
            MoveDirection::Earlier if idx > 0 => self.images.swap(idx, idx - 1),
            MoveDirection::Later if idx + 1 < self.images.len() => self.images.swap(idx, idx + 1),
            _ => {}
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Combined size of all stored files in bytes
    pub fn total_size(&self) -> u64 {
        self.images.iter().map(|img| img.size_bytes()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceImage<P>> {
        self.images.iter()
    }

    /// Snapshot of the stored files in their current order. Assembly works
    /// on this clone, so later store edits cannot affect an in-flight run.
    pub fn files(&self) -> Vec<ImageFile> {
        self.images.iter().map(|img| img.file.clone()).collect()
    }

    /// Drop every entry (and preview handle) in the store
    pub fn clear(&mut self) {
        self.images.clear();
    }

    fn position(&self, id: ImageId) -> Option<usize> {
        self.images.iter().position(|img| img.id == id)
    }
}

impl<P> Default for ImageStore<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn file(name: &str) -> ImageFile {
        ImageFile {
            name: name.to_string(),
            bytes: vec![0u8; 4],
        }
    }

    fn names<P>(store: &ImageStore<P>) -> Vec<&str> {
        store.iter().map(|img| img.name()).collect()
    }

    /// Preview stand-in that counts how many times it is dropped
    struct CountingPreview(Arc<AtomicUsize>);

    impl Drop for CountingPreview {
        fn drop(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_add_preserves_input_order() {
        let mut store: ImageStore<()> = ImageStore::new();
        store.add_files([file("a.png"), file("b.jpg"), file("c.png")]);

        assert_eq!(store.len(), 3);
        assert_eq!(names(&store), ["a.png", "b.jpg", "c.png"]);
    }

    #[test]
    fn test_identifiers_are_never_reused() {
        let mut store: ImageStore<()> = ImageStore::new();
        let a = store.add(file("a.png"), None);
        let b = store.add(file("b.png"), None);

        store.remove(a);
        let c = store.add(file("c.png"), None);

        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store: ImageStore<()> = ImageStore::new();
        let a = store.add(file("a.png"), None);
        store.add(file("b.png"), None);

        store.remove(a);
        assert_eq!(names(&store), ["b.png"]);

        // Removing the same id again must change nothing
        store.remove(a);
        assert_eq!(names(&store), ["b.png"]);
    }

    #[test]
    fn test_remove_releases_preview_exactly_once() {
        let drops = Arc::new(AtomicUsize::new(0));
        let mut store = ImageStore::new();
        let id = store.add(file("a.png"), Some(CountingPreview(drops.clone())));
        store.add(file("b.png"), Some(CountingPreview(drops.clone())));

        store.remove(id);
        assert_eq!(drops.load(Ordering::SeqCst), 1);

        store.remove(id);
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clear_releases_all_previews() {
        let drops = Arc::new(AtomicUsize::new(0));
        let mut store = ImageStore::new();
        for name in ["a.png", "b.png", "c.png"] {
            store.add(file(name), Some(CountingPreview(drops.clone())));
        }

        store.clear();

        assert!(store.is_empty());
        assert_eq!(drops.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_move_swaps_with_adjacent_neighbor() {
        let mut store: ImageStore<()> = ImageStore::new();
        store.add(file("a.png"), None);
        let b = store.add(file("b.png"), None);
        store.add(file("c.png"), None);

        store.move_image(b, MoveDirection::Earlier);
        assert_eq!(names(&store), ["b.png", "a.png", "c.png"]);

        store.move_image(b, MoveDirection::Later);
        assert_eq!(names(&store), ["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn test_move_at_boundary_is_noop() {
        let mut store: ImageStore<()> = ImageStore::new();
        let a = store.add(file("a.png"), None);
        let c = store.add(file("c.png"), None);

        store.move_image(a, MoveDirection::Earlier);
        assert_eq!(names(&store), ["a.png", "c.png"]);

        store.move_image(c, MoveDirection::Later);
        assert_eq!(names(&store), ["a.png", "c.png"]);
    }

    #[test]
    fn test_move_never_wraps_around() {
        let mut store: ImageStore<()> = ImageStore::new();
        let a = store.add(file("a.png"), None);
        store.add(file("b.png"), None);
        store.add(file("c.png"), None);

        // Moving the head later swaps with its immediate neighbor only,
        // it never rotates the element to the far end
        store.move_image(a, MoveDirection::Later);
        assert_eq!(names(&store), ["b.png", "a.png", "c.png"]);
    }

    #[test]
    fn test_move_unknown_id_is_noop() {
        let mut store: ImageStore<()> = ImageStore::new();
        let a = store.add(file("a.png"), None);
        store.add(file("b.png"), None);
        store.remove(a);

        store.move_image(a, MoveDirection::Later);
        assert_eq!(names(&store), ["b.png"]);
    }

    #[test]
    fn test_total_size_sums_all_files() {
        let mut store: ImageStore<()> = ImageStore::new();
        store.add(
            ImageFile {
                name: "a".to_string(),
                bytes: vec![0; 10],
            },
            None,
        );
        store.add(
            ImageFile {
                name: "b".to_string(),
                bytes: vec![0; 32],
            },
            None,
        );

        assert_eq!(store.total_size(), 42);
    }

    #[test]
    fn test_snapshot_is_detached_from_store() {
        let mut store: ImageStore<()> = ImageStore::new();
        let a = store.add(file("a.png"), None);
        store.add(file("b.png"), None);

        let snapshot = store.files();
        store.remove(a);

        let snapshot_names: Vec<&str> = snapshot.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(snapshot_names, ["a.png", "b.png"]);
        assert_eq!(names(&store), ["b.png"]);
    }
}
