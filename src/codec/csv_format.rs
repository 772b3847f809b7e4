//! CSV table layout for contacts.
//!
//! One header row (`First Name,Last Name,Title,Emails,Phones`) and one row per
//! contact. Multi-valued columns use the inline grammar from
//! [`grammar`](super::grammar).

use super::grammar;
use crate::domain::{EmailType, PhoneType};
use crate::error::{TransferError, TransferResult};
use crate::models::ContactResponse;

pub const FIRST_NAME: &str = "First Name";
pub const LAST_NAME: &str = "Last Name";
pub const TITLE: &str = "Title";
pub const EMAILS: &str = "Emails";
pub const PHONES: &str = "Phones";

/// Header row written on export, in column order.
pub const HEADERS: [&str; 5] = [FIRST_NAME, LAST_NAME, TITLE, EMAILS, PHONES];

/// Type substituted for unknown email tags.
pub const DEFAULT_EMAIL_TYPE: EmailType = EmailType::Personal;

/// Type substituted for unknown phone tags.
pub const DEFAULT_PHONE_TYPE: PhoneType = PhoneType::Personal;

/// One data row after cell decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvContactRow {
    pub first_name: String,
    pub last_name: String,
    /// `None` when the cell is empty or the column is absent
    pub title: Option<String>,
    pub emails: Vec<(String, EmailType)>,
    pub phones: Vec<(String, PhoneType)>,
}

/// Parsed CSV upload.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub rows: Vec<CsvContactRow>,

    /// Grammar segments whose type tag was replaced by the default
    pub degraded_cells: usize,

    /// Grammar segments that did not parse and were dropped
    pub dropped_segments: usize,
}

/// Maps header names to column indices.
#[derive(Debug, Default)]
struct ColumnMap {
    first_name: Option<usize>,
    last_name: Option<usize>,
    title: Option<usize>,
    emails: Option<usize>,
    phones: Option<usize>,
}

impl ColumnMap {
    /// Creates a column map from CSV headers, matching names case-insensitively.
    fn from_headers(headers: &csv::StringRecord) -> TransferResult<Self> {
        let mut map = Self::default();

        for (i, header) in headers.iter().enumerate() {
            let slot = match header.to_lowercase().as_str() {
                "first name" => &mut map.first_name,
                "last name" => &mut map.last_name,
                "title" => &mut map.title,
                "emails" => &mut map.emails,
                "phones" => &mut map.phones,
                _ => continue, // Ignore unknown columns
            };
            slot.get_or_insert(i);
        }

        if map.first_name.is_none() {
            return Err(missing_column(FIRST_NAME));
        }
        if map.last_name.is_none() {
            return Err(missing_column(LAST_NAME));
        }

        Ok(map)
    }
}

fn missing_column(name: &str) -> TransferError {
    TransferError::BadRequest(format!("CSV is missing required column '{}'", name))
}

/// Parse an uploaded CSV table.
///
/// The header row is required. Cells are trimmed; every row must have as many
/// cells as the header.
///
/// # Errors
///
/// Returns `TransferError::BadRequest` if the header is missing a required
/// column, a row has the wrong number of cells, or the input is not UTF-8.
pub fn read_contacts(bytes: &[u8]) -> TransferResult<CsvTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| TransferError::BadRequest(format!("Failed to read CSV header: {}", e)))?
        .clone();
    let columns = ColumnMap::from_headers(&headers)?;

    let mut table = CsvTable::default();
    for record in reader.records() {
        let record = record
            .map_err(|e| TransferError::BadRequest(format!("Failed to parse CSV: {}", e)))?;

        let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("");

        let emails = grammar::decode_with_report(cell(columns.emails), DEFAULT_EMAIL_TYPE);
        let phones = grammar::decode_with_report(cell(columns.phones), DEFAULT_PHONE_TYPE);
        table.degraded_cells += emails.degraded + phones.degraded;
        table.dropped_segments += emails.dropped + phones.dropped;

        let title = cell(columns.title);
        table.rows.push(CsvContactRow {
            first_name: cell(columns.first_name).to_string(),
            last_name: cell(columns.last_name).to_string(),
            title: (!title.is_empty()).then(|| title.to_string()),
            emails: emails.entries,
            phones: phones.entries,
        });
    }

    Ok(table)
}

/// Write contacts as a UTF-8 CSV table with a header row.
///
/// # Errors
///
/// Returns `TransferError::Export` if the underlying writer fails.
pub fn write_contacts(contacts: &[ContactResponse]) -> TransferResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false) // We write headers manually
        .from_writer(Vec::new());

    writer
        .write_record(HEADERS)
        .map_err(|e| TransferError::Export(format!("Failed to write CSV header: {}", e)))?;

    for contact in contacts {
        let emails = grammar::encode(
            contact
                .emails
                .iter()
                .map(|e| (e.email.as_str(), e.email_type)),
        );
        let phones = grammar::encode(
            contact
                .phones
                .iter()
                .map(|p| (p.phone_number.as_str(), p.phone_type)),
        );

        writer
            .write_record([
                contact.first_name.as_str(),
                contact.last_name.as_str(),
                contact.title.as_deref().unwrap_or(""),
                emails.as_str(),
                phones.as_str(),
            ])
            .map_err(|e| TransferError::Export(format!("Failed to write CSV row: {}", e)))?;
    }

    writer
        .into_inner()
        .map_err(|e| TransferError::Export(format!("Failed to flush CSV: {}", e)))
}
