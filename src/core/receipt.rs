//! Receipt generation - turns a donation record into a downloadable document.
//!
//! The layout is fixed and carries no timestamps or document IDs, so the same record
//! and donor name always produce byte-identical PDF output.

use crate::{
    core::{donation::DonationRecord, report::format_currency},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use lopdf::{
    Document, Object, Stream,
    content::{Content, Operation},
    dictionary,
};

/// Heading printed at the top of every receipt.
pub const RECEIPT_TITLE: &str = "Donation Receipt";
/// MIME type of [`Receipt::to_pdf`] output.
pub const MIME_TYPE: &str = "application/pdf";

const THANK_YOU: [&str; 3] = [
    "Thank you for your generous contribution to global education equality.",
    "Your support helps ensure every child has access to quality education.",
    "Please keep this receipt for your records.",
];

// A4 in points.
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 72;
const LINE_HEIGHT: i64 = 18;

/// A rendered receipt, ready to be shown as text or exported as PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Date of the donation the receipt covers
    pub date: NaiveDate,
    /// Field lines in print order (date, donor, amount, organizations, type)
    pub fields: Vec<String>,
    /// Closing thank-you paragraph, one entry per printed line
    pub closing: Vec<String>,
}

/// Builds the receipt for `record`.
///
/// Callers must only ask for a receipt once a donation exists; the bot layer reports
/// `NoDonation` otherwise.
#[must_use]
pub fn render_receipt(record: &DonationRecord, donor_name: &str) -> Receipt {
    let date = record.date.format("%Y-%m-%d");
    Receipt {
        date: record.date,
        fields: vec![
            format!("Date: {date}"),
            format!("Donor: {donor_name}"),
            format!("Amount: {}", format_currency(record.amount)),
            format!("Organizations: {}", record.organizations.join(", ")),
            format!("Donation Type: {}", record.frequency.label()),
        ],
        closing: THANK_YOU.iter().map(ToString::to_string).collect(),
    }
}

impl Receipt {
    /// Download name, `donation_receipt_<YYYY-MM-DD>.pdf`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("donation_receipt_{}.pdf", self.date.format("%Y-%m-%d"))
    }

    /// Plain-text rendering, one line per field.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut lines = vec![RECEIPT_TITLE.to_string(), String::new()];
        lines.extend(self.fields.iter().cloned());
        lines.push(String::new());
        lines.extend(self.closing.iter().cloned());
        lines.join("\n")
    }

    /// Renders a single-page PDF.
    pub fn to_pdf(&self) -> Result<Vec<u8>> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let body_font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let title_font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => body_font_id,
                "F2" => title_font_id,
            },
        });

        let content = Content {
            operations: self.page_operations(),
        };
        let encoded = content.encode().map_err(|e| Error::Receipt {
            message: format!("Failed to encode page content: {e}"),
        })?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).map_err(|e| Error::Receipt {
            message: format!("Failed to write PDF: {e}"),
        })?;
        Ok(buffer)
    }

    fn page_operations(&self) -> Vec<Operation> {
        let top = PAGE_HEIGHT - MARGIN;
        let mut ops = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F2".into(), 20.into()]),
            Operation::new("Td", vec![MARGIN.into(), top.into()]),
            Operation::new("Tj", vec![pdf_text(RECEIPT_TITLE)]),
            Operation::new("ET", vec![]),
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("TL", vec![LINE_HEIGHT.into()]),
            Operation::new("Td", vec![MARGIN.into(), (top - 2 * LINE_HEIGHT).into()]),
        ];

        for line in &self.fields {
            ops.push(Operation::new("Tj", vec![pdf_text(line)]));
            ops.push(Operation::new("T*", vec![]));
        }
        ops.push(Operation::new("T*", vec![]));
        for line in &self.closing {
            ops.push(Operation::new("Tj", vec![pdf_text(line)]));
            ops.push(Operation::new("T*", vec![]));
        }

        ops.push(Operation::new("ET", vec![]));
        ops
    }
}

// The base-14 fonts only cover a single-byte encoding.
fn pdf_text(text: &str) -> Object {
    let bytes: Vec<u8> = text
        .chars()
        .map(|c| u8::try_from(c).ok().filter(u8::is_ascii).unwrap_or(b'?'))
        .collect();
    Object::string_literal(bytes)
}
