//! The generate-certificate operation: snapshot, assemble, choose a path, save

use std::path::{Path, PathBuf};

use super::assembler::assemble;
use super::document::Document;
use super::error::CertificateError;
use super::fields::{FieldKey, FieldSet};
use super::file_system::{suggested_file_name, with_docx_extension};
use super::sink::DocumentSink;

/// Source of the current form values
pub trait FormInput {
    /// Immutable snapshot of the field values
    fn fields(&self) -> FieldSet;

    /// Raw text of the work-items box
    fn work_items_text(&self) -> String;
}

/// Asks the user where to save
pub trait SavePrompt {
    /// `None` means the user cancelled
    fn choose_path(&self, suggested_name: &str) -> Option<PathBuf>;
}

/// How a generate request ended when nothing went wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Absolute path of the saved file
    Saved(PathBuf),
    Cancelled,
}

/// Run one read-validate-assemble-save sequence
pub fn generate_certificate(
    input: &dyn FormInput,
    prompt: &dyn SavePrompt,
    sink: &dyn DocumentSink,
) -> Result<GenerateOutcome, CertificateError> {
    let fields = input.fields();
    let document = assemble(&fields, &input.work_items_text()).inspect_err(|e| {
        tracing::warn!("Missing mandatory fields: {:?}", e.missing);
    })?;
    tracing::debug!(
        "Assembled certificate for {}: {} paragraphs",
        fields.get(FieldKey::ContractorName),
        document.len()
    );

    let suggested = suggested_file_name(fields.get(FieldKey::ContractorName));
    let Some(path) = prompt.choose_path(&suggested) else {
        tracing::info!("Save cancelled");
        return Ok(GenerateOutcome::Cancelled);
    };

    save(sink, &document, &with_docx_extension(path))
}

fn save(
    sink: &dyn DocumentSink,
    document: &Document,
    path: &Path,
) -> Result<GenerateOutcome, CertificateError> {
    match sink.save(document, path) {
        Ok(saved) => Ok(GenerateOutcome::Saved(saved)),
        Err(e) => {
            tracing::error!("Failed to save certificate to {}: {}", path.display(), e);
            Err(e.into())
        }
    }
}
