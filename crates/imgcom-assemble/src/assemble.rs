//! Image-to-PDF assembly
//!
//! Turns an ordered list of loaded image files into a single PDF document
//! with one page per image. Each image is re-encoded as JPEG and embedded
//! as a DCTDecode XObject, scaled to fit its page and centered.

use crate::constants::{EMBED_JPEG_QUALITY, mm_to_pt};
use crate::layout::fit_page;
use crate::options::AssemblyOptions;
use crate::types::*;
use image::GenericImageView;
use image::codecs::jpeg::JpegEncoder;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::path::Path;

/// Read a single image file, keeping its file name for captions and errors
pub async fn load_image_file(path: impl AsRef<Path>) -> Result<ImageFile> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let bytes = tokio::fs::read(path).await?;
    Ok(ImageFile { name, bytes })
}

/// Read several image files, preserving argument order
pub async fn load_image_files(paths: &[impl AsRef<Path>]) -> Result<Vec<ImageFile>> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        files.push(load_image_file(path).await?);
    }
    Ok(files)
}

/// Assemble the given images into a single document, one page per image
pub async fn assemble(files: &[ImageFile], options: &AssemblyOptions) -> Result<Document> {
    options.validate()?;

    let files = files.to_vec();
    let options = options.clone();

    tokio::task::spawn_blocking(move || assemble_sync(&files, &options)).await?
}

/// Synchronous assembly. Pages follow input order exactly; the first decode
/// failure abandons the whole run.
pub fn assemble_sync(files: &[ImageFile], options: &AssemblyOptions) -> Result<Document> {
    if files.is_empty() {
        return Err(AssembleError::NoImages);
    }

    let (page_width_mm, page_height_mm) = options.page_dimensions_mm();
    let page_width_pt = mm_to_pt(page_width_mm);
    let page_height_pt = mm_to_pt(page_height_mm);

    let mut output = Document::with_version("1.7");

    // Create page tree root ID (will be filled in later)
    let pages_id = output.new_object_id();

    let mut page_refs = Vec::with_capacity(files.len());
    for file in files {
        let page_id = create_image_page(&mut output, file, page_width_pt, page_height_pt, pages_id)?;
        page_refs.push(Object::Reference(page_id));
    }

    // Create pages tree
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    output.trailer.set("Root", catalog_id);

    Ok(output)
}

/// Build one output page: decode the image, place it on the page and wire up
/// the content stream and resources.
fn create_image_page(
    output: &mut Document,
    file: &ImageFile,
    page_width_pt: f32,
    page_height_pt: f32,
    parent_pages_id: ObjectId,
) -> Result<ObjectId> {
    let img = image::load_from_memory(&file.bytes).map_err(|source| AssembleError::Decode {
        name: file.name.clone(),
        source,
    })?;
    let (pixel_width, pixel_height) = img.dimensions();

    let placement = fit_page(pixel_width, pixel_height, page_width_pt, page_height_pt);

    let xobject_id = create_image_xobject(output, &img)?;

    // Image XObjects live in a unit square; the CTM scales that square to
    // the placement size and translates it to the placement corner
    let content = format!(
        "q {} 0 0 {} {} {} cm /Im0 Do Q\n",
        placement.width, placement.height, placement.x, placement.y
    );
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut xobjects = Dictionary::new();
    xobjects.set("Im0", Object::Reference(xobject_id));

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(page_width_pt),
            Object::Real(page_height_pt),
        ]),
    );
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

/// Re-encode the decoded image as JPEG and wrap it in a DCTDecode image
/// XObject.
fn create_image_xobject(output: &mut Document, img: &image::DynamicImage) -> Result<ObjectId> {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut jpeg_bytes = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut jpeg_bytes, EMBED_JPEG_QUALITY);
    encoder.encode(rgb.as_raw(), width, height, image::ExtendedColorType::Rgb8)?;

    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(width as i64));
    dict.set("Height", Object::Integer(height as i64));
    dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));
    dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));

    // The stream content is already JPEG compressed
    let mut stream = Stream::new(dict, jpeg_bytes);
    stream.allows_compression = false;

    Ok(output.add_object(stream))
}

/// Save an assembled document to a file
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, AssembleError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}
