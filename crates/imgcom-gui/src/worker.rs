use imgcom_async_runtime::{ImgCommand, ImgUpdate};
use tokio::sync::mpsc;

use crate::handlers;

/// Async worker task that processes image commands and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<ImgCommand>,
    update_tx: mpsc::UnboundedSender<ImgUpdate>,
) {
    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &mut command_rx, &update_tx).await;
    }
}

async fn process_command(
    cmd: ImgCommand,
    command_rx: &mut mpsc::UnboundedReceiver<ImgCommand>,
    update_tx: &mpsc::UnboundedSender<ImgUpdate>,
) {
    match cmd {
        ImgCommand::ConvertLoadImages { paths } => {
            handlers::convert::handle_load_images(paths, update_tx).await;
        }
        ImgCommand::ConvertGenerate {
            files,
            options,
            output_path,
        } => {
            handlers::convert::handle_generate(files, options, output_path, update_tx).await;
        }
        ImgCommand::ConvertSaveConfig { options, path } => {
            handlers::convert::handle_save_config(options, path, update_tx).await;
        }
        ImgCommand::ConvertLoadConfig { path } => {
            handlers::convert::handle_load_config(path, update_tx).await;
        }
        ImgCommand::CompressLoadSource { path } => {
            handlers::compress::handle_load_source(path, update_tx).await;
        }
        ImgCommand::CompressRun {
            mut name,
            mut bytes,
            mut options,
        } => {
            // Drain any queued recompression commands, keeping only the most
            // recent (quality slider drags can queue many)
            while let Ok(next_cmd) = command_rx.try_recv() {
                if let ImgCommand::CompressRun {
                    name: new_name,
                    bytes: new_bytes,
                    options: new_options,
                } = next_cmd
                {
                    log::debug!("Discarding queued recompression, using newer request");
                    name = new_name;
                    bytes = new_bytes;
                    options = new_options;
                } else {
                    // Non-recompression command found, need to process it next
                    // Since we can't put it back, process it now before the run
                    Box::pin(process_command(next_cmd, command_rx, update_tx)).await;
                }
            }

            handlers::compress::handle_run(name, bytes, options, update_tx).await;
        }
        ImgCommand::CompressSave { data, path } => {
            handlers::compress::handle_save(data, path, update_tx).await;
        }
    }
}
