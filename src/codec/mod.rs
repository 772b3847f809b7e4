//! Text codecs for contact import/export.
//!
//! - [`grammar`]: flattening of multi-valued email/phone lists into one cell
//! - [`csv_format`]: the CSV table layout built on top of the grammar

pub mod csv_format;
pub mod grammar;

pub use csv_format::{CsvContactRow, CsvTable};
pub use grammar::{decode, decode_with_report, encode, Decoded};
