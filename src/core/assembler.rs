//! Builds the fixed certificate layout from field values

use chrono::{Local, NaiveDate};

use super::document::{Document, Paragraph};
use super::error::ValidationError;
use super::fields::{FieldKey, FieldSet, WorkItemList};

const HEADER_LINES: [&str; 4] = [
    "Government of Nepal",
    "Ministry of Urban Development",
    "Department of Urban Development and Building Construction",
    PROJECT_OFFICE,
];

const PROJECT_OFFICE: &str = "Project Office of the Urban Development & Building Construction";

const PROJECT_DETAILS: [(&str, FieldKey); 7] = [
    ("Project Name", FieldKey::ProjectName),
    ("Contract ID", FieldKey::ContractId),
    ("Project Location", FieldKey::ProjectLocation),
    ("Contract Agreement Date", FieldKey::AgreementDate),
    ("Work Completion Date", FieldKey::CompletionDate),
    ("Contract Amount", FieldKey::ContractAmount),
    ("Final Contract Amount", FieldKey::FinalContractAmount),
];

const WORK_ITEMS_INTRO: &str =
    "The following quantities represent the major works executed by the contractor under the project:";

pub const BULLET: &str = "\u{2022}";

/// Paragraphs emitted regardless of how many work items there are
pub const FIXED_PARAGRAPHS: usize = 29;

/// Assemble a certificate dated today
pub fn assemble(fields: &FieldSet, work_items_text: &str) -> Result<Document, ValidationError> {
    assemble_on(fields, work_items_text, Local::now().date_naive())
}

/// Assemble a certificate with an explicit issue date
pub fn assemble_on(
    fields: &FieldSet,
    work_items_text: &str,
    date: NaiveDate,
) -> Result<Document, ValidationError> {
    fields.validate()?;

    let contractor = fields.get(FieldKey::ContractorName);
    let office = fields.get(FieldKey::OfficeName);
    let work_items = WorkItemList::from_text(work_items_text);

    let mut doc = Document::with_capacity(FIXED_PARAGRAPHS + work_items.len());

    for line in HEADER_LINES {
        doc.push(Paragraph::center(line));
    }
    doc.push(Paragraph::center(office));
    doc.push(Paragraph::left(format!("Date: {}", format_date(date))));
    doc.push(Paragraph::left("Ref. No.: "));
    doc.push(Paragraph::blank());

    doc.push(Paragraph::center("TO WHOM IT MAY CONCERN"));
    doc.push(Paragraph::blank());

    doc.push(Paragraph::center("Subject: Experience Certificate"));
    doc.push(Paragraph::blank());

    doc.push(Paragraph::left(format!(
        "This is to certify that {contractor}, based in {address}, has successfully completed \
         the following construction work for our organization, {PROJECT_OFFICE}, {office}.",
        address = fields.get(FieldKey::ContractorAddress),
    )));
    doc.push(Paragraph::blank());

    doc.push(Paragraph::left("Project Details:"));
    for (label, key) in PROJECT_DETAILS {
        doc.push(Paragraph::left(format!("{label}: {}", fields.get(key))));
    }

    doc.push(Paragraph::left(WORK_ITEMS_INTRO));
    for item in work_items.iter() {
        doc.push(Paragraph::left(format!("{BULLET} {item}")));
    }
    doc.push(Paragraph::blank());

    doc.push(Paragraph::left(format!(
        "We wish {contractor} every success in their future endeavours."
    )));
    doc.push(Paragraph::blank());

    doc.push(Paragraph::right("Sincerely,"));
    doc.push(Paragraph::right(fields.get(FieldKey::AuthorizedSignatory)));
    doc.push(Paragraph::right(fields.get(FieldKey::Designation)));

    Ok(doc)
}

/// "Month DD, YYYY"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::{Alignment, LineSpacing};
    use std::io;
    use std::sync::{Arc, Mutex};

    fn sample_fields() -> FieldSet {
        FieldSet::from_pairs([
            ("office_name", "X"),
            ("contractor_name", "Acme"),
            ("contractor_address", "Addr"),
            ("project_name", "P1"),
            ("contract_id", "C1"),
            ("project_location", "Loc"),
            ("authorized_signatory", "S"),
            ("designation", "Engineer"),
        ])
        .unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn test_rejects_missing_required_field() {
        let fields = sample_fields().with(FieldKey::ProjectLocation, "");
        let err = assemble_on(&fields, "Line1", date()).unwrap_err();
        assert_eq!(err.missing, vec![FieldKey::ProjectLocation]);
    }

    #[test]
    fn test_paragraph_count() {
        let fields = sample_fields();
        assert_eq!(assemble_on(&fields, "", date()).unwrap().len(), FIXED_PARAGRAPHS);
        assert_eq!(
            assemble_on(&fields, "a\n\n  \nb\nc\n", date()).unwrap().len(),
            FIXED_PARAGRAPHS + 3
        );
    }

    #[test]
    fn test_worked_example() {
        let doc = assemble_on(&sample_fields(), "Line1\n\nLine2", date()).unwrap();

        let name = doc.position("Project Name: P1").unwrap();
        let id = doc.position("Contract ID: C1").unwrap();
        assert_eq!(id, name + 1);

        let bullets: Vec<_> = doc.texts().filter(|t| t.starts_with(BULLET)).collect();
        assert_eq!(bullets, vec!["\u{2022} Line1", "\u{2022} Line2"]);
    }

    #[test]
    fn test_header_and_date_lines() {
        let doc = assemble_on(&sample_fields(), "", date()).unwrap();
        let paragraphs = doc.paragraphs();

        assert_eq!(paragraphs[0].text(), "Government of Nepal");
        assert!(paragraphs[..5].iter().all(|p| p.alignment() == Alignment::Center));
        assert_eq!(paragraphs[4].text(), "X");
        assert_eq!(paragraphs[5].text(), "Date: March 05, 2024");
        assert_eq!(paragraphs[5].alignment(), Alignment::Left);
        assert_eq!(paragraphs[6].text(), "Ref. No.: ");
        assert!(paragraphs[7].is_blank());
    }

    #[test]
    fn test_body_substitutes_office_name() {
        let doc = assemble_on(&sample_fields(), "", date()).unwrap();
        let body = doc
            .texts()
            .find(|t| t.starts_with("This is to certify"))
            .unwrap();
        assert_eq!(
            body,
            "This is to certify that Acme, based in Addr, has successfully completed the \
             following construction work for our organization, Project Office of the Urban \
             Development & Building Construction, X."
        );
        assert!(!body.contains('{'));
    }

    #[test]
    fn test_empty_optional_fields_keep_their_label() {
        let doc = assemble_on(&sample_fields(), "", date()).unwrap();
        assert!(doc.position("Contract Agreement Date: ").is_some());
        assert!(doc.position("Final Contract Amount: ").is_some());
    }

    #[test]
    fn test_signature_block_is_right_aligned() {
        let doc = assemble_on(&sample_fields(), "Line1", date()).unwrap();
        let tail: Vec<_> = doc.paragraphs().iter().rev().take(3).rev().collect();
        assert_eq!(
            tail.iter().map(|p| p.text()).collect::<Vec<_>>(),
            vec!["Sincerely,", "S", "Engineer"]
        );
        assert!(tail.iter().all(|p| p.alignment() == Alignment::Right));
        assert!(doc.position("We wish Acme every success in their future endeavours.").is_some());
    }

    #[test]
    fn test_every_paragraph_is_single_spaced() {
        let doc = assemble_on(&sample_fields(), "a\nb", date()).unwrap();
        assert!(doc
            .paragraphs()
            .iter()
            .all(|p| p.line_spacing() == LineSpacing::Single && p.space_after() == 0));
    }

    /// Collects everything a fmt subscriber writes
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_assembly_does_not_log() {
        // The preview assembles on every frame
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            assemble_on(&sample_fields(), "Line1\nLine2", date()).unwrap();
            let _ = assemble_on(&FieldSet::new(), "", date());
        });

        assert!(captured.0.lock().unwrap().is_empty());
    }
}
