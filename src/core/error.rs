//! Error types for certificate generation

use std::path::PathBuf;

use super::fields::FieldKey;

/// Required fields were left empty
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Please fill in all mandatory fields.")]
pub struct ValidationError {
    /// Empty required fields, in form order
    pub missing: Vec<FieldKey>,
}

impl ValidationError {
    /// Form labels of the missing fields, for display
    pub fn missing_labels(&self) -> Vec<&'static str> {
        self.missing.iter().map(|key| key.label()).collect()
    }
}

/// Serializing or persisting a document failed
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Creating, writing or renaming the file failed
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Building the .docx package failed
    #[error("failed to package document: {0}")]
    Package(String),
}

/// Anything that stops a certificate from being generated
#[derive(Debug, thiserror::Error)]
pub enum CertificateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("An error occurred while saving the file: {0}")]
    Sink(#[from] SinkError),
}
