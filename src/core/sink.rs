//! Writing certificates as .docx files
//!
//! A .docx file is a ZIP package of WordprocessingML parts. Each certificate
//! paragraph becomes one `w:p` carrying its justification, single line
//! spacing (240 twips, auto rule) and zero space-after. Blank paragraphs are
//! written without a run.

use std::path::{Path, PathBuf};

use docx_rs::{AlignmentType, Docx, LineSpacingType, Run};

use super::document::{Alignment, Document, LineSpacing, Paragraph};
use super::error::SinkError;
use super::file_system::write_atomically;

/// Twips per point
const TWIPS_PER_POINT: u32 = 20;

/// Persists a finished document
pub trait DocumentSink {
    /// Save `document` at `path`, returning the absolute path written
    fn save(&self, document: &Document, path: &Path) -> Result<PathBuf, SinkError>;
}

/// Sink producing Word documents
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxSink;

impl DocumentSink for DocxSink {
    fn save(&self, document: &Document, path: &Path) -> Result<PathBuf, SinkError> {
        let saved = write_atomically(path, |file| {
            to_docx(document)
                .build()
                .pack(file)
                .map_err(|e| SinkError::Package(e.to_string()))
        })?;
        tracing::info!("Saved certificate: {}", saved.display());
        Ok(saved)
    }
}

/// Convert a document into its docx-rs representation
pub fn to_docx(document: &Document) -> Docx {
    document
        .paragraphs()
        .iter()
        .fold(Docx::new(), |docx, p| docx.add_paragraph(to_docx_paragraph(p)))
}

fn to_docx_paragraph(paragraph: &Paragraph) -> docx_rs::Paragraph {
    // `w:line` in 240ths of a line under the auto rule
    let line = match paragraph.line_spacing() {
        LineSpacing::Single => 240,
    };
    let spacing = docx_rs::LineSpacing::new()
        .line_rule(LineSpacingType::Auto)
        .line(line)
        .after(paragraph.space_after() * TWIPS_PER_POINT);

    let out = docx_rs::Paragraph::new()
        .align(alignment_type(paragraph.alignment()))
        .line_spacing(spacing);

    if paragraph.is_blank() {
        out
    } else {
        out.add_run(Run::new().add_text(paragraph.text()))
    }
}

fn alignment_type(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
        Alignment::Right => AlignmentType::Right,
    }
}

/// Read the paragraphs (text and alignment) of a saved .docx file
#[cfg(test)]
pub(crate) fn read_paragraphs(path: &Path) -> anyhow::Result<Vec<Paragraph>> {
    use anyhow::Context;
    use docx_rs::DocumentChild;

    let bytes = std::fs::read(path).with_context(|| format!("Cannot read '{}'", path.display()))?;

    let docx = docx_rs::read_docx(&bytes)
        .map_err(|e| anyhow::anyhow!("docx-rs parse error in '{}': {:?}", path.display(), e))?;

    let paragraphs = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(from_docx_paragraph(para)),
            _ => None,
        })
        .collect();

    Ok(paragraphs)
}

#[cfg(test)]
fn from_docx_paragraph(para: &docx_rs::Paragraph) -> Paragraph {
    use docx_rs::{ParagraphChild, RunChild};

    let mut text = String::new();
    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                if let RunChild::Text(t) = rc {
                    text.push_str(&t.text);
                }
            }
        }
    }

    let alignment = para
        .property
        .alignment
        .as_ref()
        .map(|jc| Alignment::from_justification(&jc.val))
        .unwrap_or_default();

    Paragraph::new(text, alignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assembler::assemble_on;
    use docx_rs::DocumentChild;
    use std::fs;
    use crate::core::fields::FieldSet;
    use chrono::NaiveDate;

    fn certificate() -> Document {
        let fields = FieldSet::from_pairs([
            ("office_name", "Kaski"),
            ("contractor_name", "Acme Builders"),
            ("contractor_address", "Pokhara-8"),
            ("project_name", "Ward Office Building"),
            ("contract_id", "UDBC/2080/12"),
            ("project_location", "Pokhara"),
            ("agreement_date", "2023-01-10"),
            ("completion_date", "2024-02-01"),
            ("contract_amount", "1,000,000"),
            ("final_contract_amount", "980,500"),
            ("authorized_signatory", "Sushil Acharya"),
            ("designation", "Engineer"),
        ])
        .unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assemble_on(&fields, "Brickwork: 120 m3\n\nRCC: 45 m3", date).unwrap()
    }

    #[test]
    fn test_save_then_read_back_preserves_paragraphs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cert.docx");
        let doc = certificate();

        let saved = DocxSink.save(&doc, &path).unwrap();
        assert!(saved.is_absolute());

        let read = read_paragraphs(&saved).unwrap();
        let expected: Vec<_> = doc
            .paragraphs()
            .iter()
            .map(|p| (p.text().to_string(), p.alignment()))
            .collect();
        let actual: Vec<_> = read
            .iter()
            .map(|p| (p.text().to_string(), p.alignment()))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/cert.docx");
        let err = DocxSink.save(&certificate(), &path).unwrap_err();
        assert!(matches!(err, SinkError::Io { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_blank_paragraphs_have_no_runs() {
        let docx = to_docx(&Document::from_iter([Paragraph::blank(), Paragraph::left("x")]));
        let runs: Vec<usize> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(p) => Some(p.children.len()),
                _ => None,
            })
            .collect();
        assert_eq!(runs, vec![0, 1]);
    }

    #[test]
    fn test_paragraph_properties_are_written() {
        let doc = certificate();
        let xml = String::from_utf8(to_docx(&doc).build().document).unwrap();

        let properties: Vec<&str> = xml
            .split("<w:pPr>")
            .skip(1)
            .map(|rest| rest.split("</w:pPr>").next().unwrap())
            .collect();
        assert_eq!(properties.len(), doc.len());

        for (props, paragraph) in properties.iter().zip(doc.paragraphs()) {
            let jc = match paragraph.alignment() {
                Alignment::Left => "left",
                Alignment::Center => "center",
                Alignment::Right => "right",
            };
            assert!(props.contains(&format!(r#"w:jc w:val="{jc}""#)), "{props}");
            assert!(props.contains(r#"w:line="240""#), "{props}");
            assert!(props.contains(r#"w:lineRule="auto""#), "{props}");
            assert!(props.contains(r#"w:after="0""#), "{props}");
        }
    }

    #[test]
    fn test_reading_garbage_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-docx.docx");
        fs::write(&path, b"plain text").unwrap();
        assert!(read_paragraphs(&path).is_err());
    }
}
