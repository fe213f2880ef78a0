//! Certificate input form

use eframe::egui;

use crate::core::config::FormDefaults;
use crate::core::fields::{FieldKey, FieldSet, WorkItemList, SUGGESTED_MAX_WORK_ITEMS};
use crate::core::workflow::FormInput;

/// Text currently typed into the form
#[derive(Debug, Clone)]
pub struct FormState {
    /// One entry per field, in form order
    values: Vec<(FieldKey, String)>,
    pub work_items: String,
    /// Required fields flagged by the last failed generate
    pub highlighted: Vec<FieldKey>,
}

impl FormState {
    /// A form pre-filled with the configured defaults
    pub fn new(defaults: &FormDefaults) -> Self {
        let values = FieldKey::ALL
            .into_iter()
            .map(|key| {
                let value = match key {
                    FieldKey::AuthorizedSignatory => defaults.authorized_signatory.clone(),
                    FieldKey::Designation => defaults.designation.clone(),
                    _ => String::new(),
                };
                (key, value)
            })
            .collect();

        Self {
            values,
            work_items: defaults.work_items.clone(),
            highlighted: Vec::new(),
        }
    }
}

#[cfg(test)]
impl FormState {
    pub fn value(&self, key: FieldKey) -> &str {
        self.values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    pub fn set_value(&mut self, key: FieldKey, value: impl Into<String>) {
        if let Some((_, v)) = self.values.iter_mut().find(|(k, _)| *k == key) {
            *v = value.into();
        }
    }
}

impl FormInput for FormState {
    fn fields(&self) -> FieldSet {
        self.values
            .iter()
            .fold(FieldSet::new(), |set, (key, value)| set.with(*key, value.clone()))
    }

    fn work_items_text(&self) -> String {
        self.work_items.clone()
    }
}

/// Form panel
pub struct FormPanel;

impl FormPanel {
    /// Show the form; returns true when "Generate Certificate" was clicked
    pub fn show(ui: &mut egui::Ui, form: &mut FormState) -> bool {
        let mut generate = false;

        egui::ScrollArea::vertical()
            .id_salt("form_scroll")
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("Experience Certificate Details");
                });
                ui.add_space(10.0);

                egui::Grid::new("certificate_fields")
                    .num_columns(2)
                    .spacing([14.0, 4.0])
                    .show(ui, |ui| {
                        for (key, value) in &mut form.values {
                            let missing = form.highlighted.contains(key);
                            Self::field_label(ui, *key, missing);
                            ui.add(egui::TextEdit::singleline(value).desired_width(f32::INFINITY));
                            ui.end_row();
                        }
                    });

                ui.add_space(10.0);
                ui.label(format!(
                    "Major Works and Quantities (up to {} items, one per line):",
                    SUGGESTED_MAX_WORK_ITEMS
                ));
                ui.add(
                    egui::TextEdit::multiline(&mut form.work_items)
                        .desired_width(f32::INFINITY)
                        .desired_rows(10),
                );
                if WorkItemList::from_text(&form.work_items).exceeds_suggested_max() {
                    ui.colored_label(
                        ui.visuals().warn_fg_color,
                        format!("More than {} items; the certificate may run long.", SUGGESTED_MAX_WORK_ITEMS),
                    );
                }

                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    if ui.button("Generate Certificate").clicked() {
                        generate = true;
                    }
                });
            });

        generate
    }

    fn field_label(ui: &mut egui::Ui, key: FieldKey, missing: bool) {
        let text = if key.is_required() {
            format!("{} *", key.label())
        } else {
            key.label().to_string()
        };
        let mut rich = egui::RichText::new(text);
        if missing {
            rich = rich.color(ui.visuals().error_fg_color);
        }
        ui.label(rich);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_prefill_signature_fields() {
        let form = FormState::new(&FormDefaults::default());
        assert_eq!(form.value(FieldKey::AuthorizedSignatory), "Sushil Acharya");
        assert_eq!(form.value(FieldKey::Designation), "Engineer");
        assert_eq!(form.value(FieldKey::OfficeName), "");
        assert!(form.work_items.starts_with("Earthwork Excavation"));
    }

    #[test]
    fn test_snapshot_is_independent_of_later_edits() {
        let mut form = FormState::new(&FormDefaults::default());
        form.set_value(FieldKey::ContractorName, "Acme");

        let snapshot = form.fields();
        form.set_value(FieldKey::ContractorName, "Other");

        assert_eq!(snapshot.get(FieldKey::ContractorName), "Acme");
        assert_eq!(form.fields().get(FieldKey::ContractorName), "Other");
    }

    #[test]
    fn test_fresh_form_is_missing_required_fields() {
        let form = FormState::new(&FormDefaults::default());
        assert_eq!(
            form.fields().missing_required(),
            vec![
                FieldKey::OfficeName,
                FieldKey::ContractorName,
                FieldKey::ContractId,
                FieldKey::ProjectName,
                FieldKey::ProjectLocation,
            ]
        );
    }
}
