//! Save dialog and result messages

use std::path::PathBuf;

use eframe::egui;

use crate::core::error::CertificateError;
use crate::core::file_system::DOCX_EXTENSION;
use crate::core::workflow::{GenerateOutcome, SavePrompt};

/// Native "save as" dialog
#[derive(Debug, Clone, Default)]
pub struct SaveDialog {
    pub start_dir: Option<PathBuf>,
}

impl SavePrompt for SaveDialog {
    fn choose_path(&self, suggested_name: &str) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Save Experience Certificate")
            .set_file_name(suggested_name)
            .add_filter("Word Documents", &[DOCX_EXTENSION])
            .add_filter("All Files", &["*"]);
        if let Some(dir) = &self.start_dir {
            dialog = dialog.set_directory(dir);
        }
        dialog.save_file()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

/// A message shown after a generate request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub title: &'static str,
    pub body: String,
    /// Extra lines, e.g. the missing field labels
    pub details: Vec<String>,
}

impl Message {
    /// Message for a finished request; a cancelled save shows nothing
    pub fn for_result(result: &Result<GenerateOutcome, CertificateError>) -> Option<Self> {
        match result {
            Ok(GenerateOutcome::Cancelled) => None,
            Ok(GenerateOutcome::Saved(path)) => Some(Self {
                kind: MessageKind::Info,
                title: "Success",
                body: format!(
                    "Certificate generated successfully!\nFile saved to: {}",
                    path.display()
                ),
                details: Vec::new(),
            }),
            Err(CertificateError::Validation(e)) => Some(Self {
                kind: MessageKind::Error,
                title: "Error",
                body: e.to_string(),
                details: e
                    .missing_labels()
                    .into_iter()
                    .map(|label| label.trim_end_matches(':').to_string())
                    .collect(),
            }),
            Err(e) => Some(Self {
                kind: MessageKind::Error,
                title: "Error",
                body: e.to_string(),
                details: Vec::new(),
            }),
        }
    }
}

/// Modal message window; the form is blocked until it is dismissed
pub struct MessageWindow;

impl MessageWindow {
    /// Show the pending message, clearing it once dismissed
    pub fn show(ctx: &egui::Context, message: &mut Option<Message>) {
        let Some(current) = message.as_ref() else {
            return;
        };

        let mut dismissed = false;
        let response = egui::Modal::new(egui::Id::new("result_message")).show(ctx, |ui| {
            ui.set_max_width(420.0);
            ui.heading(current.title);
            ui.add_space(6.0);

            let body = egui::RichText::new(&current.body);
            match current.kind {
                MessageKind::Info => ui.label(body),
                MessageKind::Error => ui.label(body.color(ui.visuals().error_fg_color)),
            };
            for detail in &current.details {
                ui.label(format!("\u{2022} {detail}"));
            }
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

        if dismissed || response.should_close() || ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            *message = None;
        }
    }
}
