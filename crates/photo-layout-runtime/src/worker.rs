use photo_layout::{LayoutError, LayoutOptions, SizeKind, load_images, render, save_pdf};
use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::{PhotoCommand, PhotoUpdate, Session};

type UpdateSender = mpsc::UnboundedSender<PhotoUpdate>;

/// Async worker task that owns the session, processes commands one at a
/// time and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<PhotoCommand>,
    update_tx: UpdateSender,
) {
    let mut session = Session::new();

    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &mut session, &mut command_rx, &update_tx).await;
    }

    log::debug!("Command channel closed, worker exiting");
}

async fn process_command(
    cmd: PhotoCommand,
    session: &mut Session,
    command_rx: &mut mpsc::UnboundedReceiver<PhotoCommand>,
    update_tx: &UpdateSender,
) {
    match cmd {
        PhotoCommand::LoadImages { paths } => {
            handle_load_images(paths, session, update_tx).await;
        }
        PhotoCommand::RemoveImage { id } => {
            let result = session.library.remove(&id).map(|_| ());
            send_library_result(result, session, update_tx);
        }
        PhotoCommand::SelectImage { id } => {
            let result = session.library.select(&id);
            send_library_result(result, session, update_tx);
        }
        PhotoCommand::MoveImage { from, to } => {
            let result = session.library.move_image(from, to);
            send_library_result(result, session, update_tx);
        }
        PhotoCommand::SetImageTransform { id, position, zoom } => {
            let result = session
                .library
                .set_position(&id, position)
                .and_then(|_| session.library.set_zoom(&id, zoom));
            send_library_result(result, session, update_tx);
        }
        PhotoCommand::SetCropArea { id, crop_area } => {
            let result = session.library.set_crop_area(&id, crop_area);
            send_library_result(result, session, update_tx);
        }
        PhotoCommand::SelectSize { kind, id } => {
            let result = session.registry_mut(kind).select(id).map(|_| ());
            send_sizes_result(kind, result, session, update_tx);
        }
        PhotoCommand::AddCustomSize {
            kind,
            width_mm,
            height_mm,
        } => {
            let result = session
                .registry_mut(kind)
                .add_custom(width_mm, height_mm)
                .map(|_| ());
            send_sizes_result(kind, result, session, update_tx);
        }
        PhotoCommand::DeleteCustomSize { kind, id } => {
            let result = session.registry_mut(kind).delete(id).map(|_| ());
            send_sizes_result(kind, result, session, update_tx);
        }
        PhotoCommand::SetMode { mode } => {
            session.mode = mode;
            send_layout(session, update_tx);
        }
        PhotoCommand::SetOverrides { overrides } => match overrides.validate() {
            Ok(()) => {
                session.overrides = overrides;
                send_layout(session, update_tx);
            }
            Err(e) => send_error(update_tx, format!("Invalid overrides: {}", e)),
        },
        PhotoCommand::SetBackground { background } => {
            session.background = background;
        }
        PhotoCommand::LoadConfig { path } => {
            handle_load_config(path, session, update_tx).await;
        }
        PhotoCommand::SaveConfig { path } => match session.options().save(&path).await {
            Ok(()) => {
                let _ = update_tx.send(PhotoUpdate::ConfigSaved { path });
            }
            Err(e) => send_error(update_tx, format!("Failed to save configuration: {}", e)),
        },
        PhotoCommand::GeneratePreview => {
            // Drain any queued preview commands, keeping only one
            while let Ok(next_cmd) = command_rx.try_recv() {
                if let PhotoCommand::GeneratePreview = next_cmd {
                    log::debug!("Discarding queued preview generation, using newer request");
                } else {
                    // Non-preview command found, apply it before the preview
                    Box::pin(process_command(next_cmd, session, command_rx, update_tx)).await;
                }
            }

            handle_generate_preview(session, update_tx);
        }
        PhotoCommand::CalculateStats => match session.statistics() {
            Ok(stats) => {
                let _ = update_tx.send(PhotoUpdate::StatsCalculated { stats });
            }
            Err(e) => send_error(update_tx, format!("Failed to calculate statistics: {}", e)),
        },
        PhotoCommand::Export { output_path } => {
            let output_path =
                output_path.unwrap_or_else(|| PathBuf::from(session.mode.output_file_name()));
            handle_export(output_path, session, update_tx).await;
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

async fn handle_load_images(
    paths: Vec<PathBuf>,
    session: &mut Session,
    update_tx: &UpdateSender,
) {
    let _ = update_tx.send(PhotoUpdate::Progress {
        operation: "Loading images".to_string(),
        current: 0,
        total: paths.len(),
    });

    let results = load_images(paths.as_slice()).await;

    let mut added = Vec::new();
    let mut rejected = Vec::new();
    let mut images = Vec::new();
    for (path, result) in paths.into_iter().zip(results) {
        match result {
            Ok(image) => {
                added.push(image.id.clone());
                images.push(image);
            }
            Err(e) => rejected.push((path, e.to_string())),
        }
    }
    session.library.add(images);

    log::info!("Added {} image(s), rejected {}", added.len(), rejected.len());

    let _ = update_tx.send(PhotoUpdate::ImagesLoaded { added, rejected });
    send_library(session, update_tx);
}

async fn handle_load_config(path: PathBuf, session: &mut Session, update_tx: &UpdateSender) {
    let options = match LayoutOptions::load(&path).await {
        Ok(options) => options,
        Err(e) => {
            send_error(update_tx, format!("Failed to load configuration: {}", e));
            return;
        }
    };

    if let Err(e) = session.apply_options(&options) {
        send_error(update_tx, format!("Invalid configuration: {}", e));
        return;
    }

    let _ = update_tx.send(PhotoUpdate::ConfigLoaded { options });
    send_sizes(SizeKind::Photo, session, update_tx);
    send_sizes(SizeKind::Paper, session, update_tx);
    send_layout(session, update_tx);
}

fn handle_generate_preview(session: &Session, update_tx: &UpdateSender) {
    // Statistics are best effort; an empty layout simply has none
    if let Ok(stats) = session.statistics() {
        let _ = update_tx.send(PhotoUpdate::StatsCalculated { stats });
    }

    let pages = session.preview();
    let _ = update_tx.send(PhotoUpdate::PreviewGenerated { pages });
}

async fn handle_export(output_path: PathBuf, session: &Session, update_tx: &UpdateSender) {
    let geometry = session.geometry();

    let _ = update_tx.send(PhotoUpdate::Progress {
        operation: "Composing pages".to_string(),
        current: 0,
        total: 2,
    });

    let doc = match render(
        session.library.images(),
        &geometry,
        session.photo(),
        session.paper(),
        session.background,
    )
    .await
    {
        Ok(Some(doc)) => doc,
        Ok(None) => {
            let reason = if session.library.is_empty() {
                LayoutError::EmptyImageSet
            } else {
                LayoutError::ZeroCapacityLayout
            };
            let _ = update_tx.send(PhotoUpdate::NothingToExport {
                reason: reason.to_string(),
            });
            return;
        }
        Err(e) => {
            send_error(update_tx, format!("Failed to compose document: {}", e));
            return;
        }
    };

    let page_count = doc.get_pages().len();

    let _ = update_tx.send(PhotoUpdate::Progress {
        operation: "Saving PDF".to_string(),
        current: 1,
        total: 2,
    });

    if let Err(e) = save_pdf(doc, &output_path).await {
        send_error(update_tx, format!("Failed to save PDF: {}", e));
        return;
    }

    let _ = update_tx.send(PhotoUpdate::ExportComplete {
        path: output_path,
        page_count,
    });
}

// =============================================================================
// Update Helpers
// =============================================================================

fn send_error(update_tx: &UpdateSender, message: String) {
    log::warn!("{}", message);
    let _ = update_tx.send(PhotoUpdate::Error { message });
}

fn send_library(session: &Session, update_tx: &UpdateSender) {
    let _ = update_tx.send(PhotoUpdate::LibraryChanged {
        images: session
            .library
            .images()
            .iter()
            .map(|img| img.id.clone())
            .collect(),
        selected: session.library.selected_id().cloned(),
    });
}

fn send_library_result(
    result: photo_layout::Result<()>,
    session: &Session,
    update_tx: &UpdateSender,
) {
    match result {
        Ok(()) => send_library(session, update_tx),
        Err(e) => send_error(update_tx, e.to_string()),
    }
}

fn send_sizes(kind: SizeKind, session: &Session, update_tx: &UpdateSender) {
    let registry = session.registry(kind);
    let _ = update_tx.send(PhotoUpdate::SizesChanged {
        kind,
        sizes: registry.sizes().to_vec(),
        selected: registry.selected().id,
    });
}

fn send_sizes_result(
    kind: SizeKind,
    result: photo_layout::Result<()>,
    session: &Session,
    update_tx: &UpdateSender,
) {
    match result {
        Ok(()) => {
            send_sizes(kind, session, update_tx);
            send_layout(session, update_tx);
        }
        Err(e) => send_error(update_tx, e.to_string()),
    }
}

fn send_layout(session: &Session, update_tx: &UpdateSender) {
    let _ = update_tx.send(PhotoUpdate::LayoutChanged {
        geometry: session.geometry(),
    });
}
