//! Live certificate preview

use eframe::egui;

use crate::core::assembler::assemble;
use crate::core::document::{Alignment, Document};
use crate::core::workflow::FormInput;

use super::form::FormState;

/// Certificate preview panel
pub struct PreviewPanel;

impl PreviewPanel {
    /// Show the preview panel
    pub fn show(ui: &mut egui::Ui, form: &FormState) {
        ui.heading("Preview");
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("preview_scroll")
            .show(ui, |ui| match assemble(&form.fields(), &form.work_items) {
                Ok(document) => Self::show_document(ui, &document),
                Err(e) => Self::show_incomplete(ui, &e.missing_labels()),
            });
    }

    fn show_document(ui: &mut egui::Ui, document: &Document) {
        for paragraph in document.paragraphs() {
            let layout = egui::Layout::top_down(match paragraph.alignment() {
                Alignment::Left => egui::Align::LEFT,
                Alignment::Center => egui::Align::Center,
                Alignment::Right => egui::Align::RIGHT,
            });
            ui.with_layout(layout, |ui| {
                if paragraph.is_blank() {
                    ui.label(" ");
                } else {
                    ui.add(egui::Label::new(paragraph.text()).wrap());
                }
            });
        }
    }

    /// Show empty state
    fn show_incomplete(ui: &mut egui::Ui, missing: &[&str]) {
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            ui.label("Fill in the mandatory fields to see the certificate.");
            ui.add_space(10.0);
            for label in missing {
                ui.weak(label.trim_end_matches(':'));
            }
        });
    }
}
