use imgcom_assemble::{AssemblyOptions, ImageFile};
use imgcom_async_runtime::ImgUpdate;
use std::path::PathBuf;
use tokio::sync::mpsc;

pub async fn handle_load_images(paths: Vec<PathBuf>, update_tx: &mpsc::UnboundedSender<ImgUpdate>) {
    let total = paths.len();
    let mut images = Vec::with_capacity(total);

    for (idx, path) in paths.iter().enumerate() {
        let _ = update_tx.send(ImgUpdate::Progress {
            operation: "Loading images".to_string(),
            current: idx,
            total,
        });

        // Unreadable or undecodable selections are skipped, not fatal;
        // the user never confirmed these files individually
        match super::load_source(path).await {
            Ok(image) => images.push(image),
            Err(e) => log::warn!("Skipping {}: {}", path.display(), e),
        }
    }

    let _ = update_tx.send(ImgUpdate::ConvertImagesLoaded { images });
}

pub async fn handle_generate(
    files: Vec<ImageFile>,
    options: AssemblyOptions,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<ImgUpdate>,
) {
    if files.is_empty() {
        let _ = update_tx.send(ImgUpdate::Error {
            message: "No images to assemble".to_string(),
        });
        return;
    }

    let page_count = files.len();

    let _ = update_tx.send(ImgUpdate::Progress {
        operation: "Assembling pages".to_string(),
        current: 1,
        total: 3,
    });

    let document = match imgcom_assemble::assemble(&files, &options).await {
        Ok(doc) => doc,
        Err(e) => {
            let _ = update_tx.send(ImgUpdate::Error {
                message: format!("Failed to assemble PDF: {e}"),
            });
            return;
        }
    };

    let _ = update_tx.send(ImgUpdate::Progress {
        operation: "Saving PDF".to_string(),
        current: 2,
        total: 3,
    });

    if let Err(e) = imgcom_assemble::save_pdf(document, &output_path).await {
        let _ = update_tx.send(ImgUpdate::Error {
            message: format!("Failed to save PDF: {e}"),
        });
        return;
    }

    let _ = update_tx.send(ImgUpdate::ConvertComplete {
        path: output_path,
        page_count,
    });
}

pub async fn handle_save_config(
    options: AssemblyOptions,
    path: PathBuf,
    update_tx: &mpsc::UnboundedSender<ImgUpdate>,
) {
    match options.save(&path).await {
        Ok(()) => {
            let _ = update_tx.send(ImgUpdate::ConvertConfigSaved { path });
        }
        Err(e) => {
            let _ = update_tx.send(ImgUpdate::Error {
                message: format!("Failed to save configuration: {e}"),
            });
        }
    }
}

pub async fn handle_load_config(path: PathBuf, update_tx: &mpsc::UnboundedSender<ImgUpdate>) {
    match AssemblyOptions::load(&path).await {
        Ok(options) => {
            let _ = update_tx.send(ImgUpdate::ConvertConfigLoaded { options });
        }
        Err(e) => {
            let _ = update_tx.send(ImgUpdate::Error {
                message: format!("Failed to load configuration: {e}"),
            });
        }
    }
}
