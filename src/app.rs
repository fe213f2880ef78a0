//! Main application state and UI coordination

use eframe::egui;

use crate::core::config::AppConfig;
use crate::core::error::CertificateError;
use crate::core::sink::DocxSink;
use crate::core::workflow::generate_certificate;
use crate::ui::dialog::{Message, MessageWindow, SaveDialog};
use crate::ui::form::{FormPanel, FormState};
use crate::ui::preview::PreviewPanel;

/// Main application state
pub struct CertificateApp {
    /// Application configuration
    pub config: AppConfig,
    /// Current form contents
    pub form: FormState,
    /// Whether the preview panel is visible
    pub preview_visible: bool,
    /// Result of the last generate request, until dismissed
    pub message: Option<Message>,
}

impl CertificateApp {
    /// Create a new application instance
    pub fn new(config: AppConfig) -> Self {
        Self {
            form: FormState::new(&config.form),
            preview_visible: config.ui.show_preview,
            message: None,
            config,
        }
    }

    /// Generate and save a certificate from the current form
    pub fn generate(&mut self) {
        self.message = None;
        let prompt = SaveDialog {
            start_dir: self.config.output.default_dir.clone(),
        };
        let result = generate_certificate(&self.form, &prompt, &DocxSink);

        self.form.highlighted = match &result {
            Err(CertificateError::Validation(e)) => e.missing.clone(),
            _ => Vec::new(),
        };
        self.message = Message::for_result(&result);
    }

    /// Restore the configured defaults
    pub fn reset_form(&mut self) {
        self.form = FormState::new(&self.config.form);
        self.message = None;
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Generate Certificate...").clicked() {
                        ui.close();
                        self.generate();
                    }
                    if ui.button("Reset Form").clicked() {
                        self.reset_form();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Toggle Preview").clicked() {
                        self.preview_visible = !self.preview_visible;
                        ui.close();
                    }
                });
            });
        });
    }
}

impl eframe::App for CertificateApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle keyboard shortcuts
        let mut generate = ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::G));
        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::P)) {
            self.preview_visible = !self.preview_visible;
        }

        // Render menu bar
        self.render_menu_bar(ctx);

        // Render preview on the right
        if self.preview_visible {
            egui::SidePanel::right("preview_panel")
                .resizable(true)
                .default_width(self.config.ui.preview_width)
                .min_width(250.0)
                .show(ctx, |ui| {
                    PreviewPanel::show(ui, &self.form);
                });
        }

        // Render form
        egui::CentralPanel::default().show(ctx, |ui| {
            generate |= FormPanel::show(ui, &mut self.form);
        });

        MessageWindow::show(ctx, &mut self.message);

        // The save dialog blocks until the user answers
        if generate {
            self.generate();
        }
    }
}
