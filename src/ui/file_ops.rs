//! File operations for exporting the generated code.
//!
//! The save dialog runs on a tokio task so the UI thread never blocks; its
//! outcome comes back through the file operation channel and is picked up on
//! the next frame.

use super::state::{EditorApp, FileOperationResult};
use eframe::egui;

/// Default file name offered by the save dialog.
const DEFAULT_EXPORT_NAME: &str = "main.cpp";

impl EditorApp {
    /// Handles pending file operations.
    ///
    /// This method processes completed async exports and starts a new one
    /// when the editor has asked for it.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context for requesting repaints
    pub fn handle_pending_operations(&mut self, ctx: &egui::Context) {
        // First, process any completed file operations from the channel
        if let Some(receiver) = &self.file.file_operation_receiver {
            while let Ok(result) = receiver.try_recv() {
                match result {
                    FileOperationResult::ExportCompleted(path) => {
                        log::info!("Exported generated code to {path}");
                        self.file.status = Some(format!("Saved {path}"));
                        self.file.last_export_path = Some(path);
                    }
                    FileOperationResult::ExportCancelled => {
                        log::debug!("Export cancelled");
                    }
                    FileOperationResult::OperationFailed(error) => {
                        log::warn!("File operation failed: {error}");
                        self.file.status = Some(error);
                    }
                }
            }
        }

        // Start the export the editor asked for
        if let Some(code) = self.file.pending_export.take() {
            self.export_code(ctx, code);
        }
    }

    /// Asks the user for a destination and writes `code` to it.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context for requesting repaints
    /// * `code` - The generated code to write
    pub fn export_code(&mut self, ctx: &egui::Context, code: String) {
        let ctx = ctx.clone();
        let sender = self.file.file_operation_sender.clone();
        let file_name = self
            .file
            .last_export_path
            .as_deref()
            .and_then(|p| std::path::Path::new(p).file_name())
            .and_then(|name| name.to_str())
            .unwrap_or(DEFAULT_EXPORT_NAME)
            .to_string();

        tokio::spawn(async move {
            let result = match rfd::AsyncFileDialog::new()
                .add_filter("C++ source", &["cpp", "cc", "cxx"])
                .set_file_name(file_name)
                .save_file()
                .await
            {
                Some(handle) => {
                    let path = handle.path();
                    match std::fs::write(path, code) {
                        Ok(_) => FileOperationResult::ExportCompleted(path.display().to_string()),
                        Err(e) => {
                            FileOperationResult::OperationFailed(format!("Failed to save file: {}", e))
                        }
                    }
                }
                None => FileOperationResult::ExportCancelled,
            };
            if let Some(tx) = sender {
                let _ = tx.send(result);
            }
            ctx.request_repaint();
        });
    }
}
