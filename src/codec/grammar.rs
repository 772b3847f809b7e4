//! Inline grammar for multi-valued contact entries.
//!
//! A list of `(value, type)` pairs is flattened into one text cell:
//!
//! ```text
//! ada@work.example (WORK); ada@home.example (PERSONAL)
//! ```
//!
//! [`encode`] is exact for data this crate produced. [`decode`] is permissive:
//! a segment whose type tag is not a member of the enumeration takes the
//! caller's default type, and a segment with no `(...)` suffix is dropped.
//! Neither case is an error.
//!
//! Values are split off at the **last** parenthesized group that ends the
//! segment, so `Dr. (Jr) Smith (WORK)` decodes to value `Dr. (Jr) Smith`.
//! Values containing `;` do not survive a round trip.

use crate::domain::EntryType;

/// Separator between encoded entries.
pub const ENTRY_SEPARATOR: &str = "; ";

/// Result of decoding a cell, with counts of the anomalies absorbed on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<T> {
    /// Entries in segment order
    pub entries: Vec<(String, T)>,

    /// Segments whose type tag was unknown and replaced by the default
    pub degraded: usize,

    /// Non-empty segments that did not match `value (TYPE)` and were dropped
    pub dropped: usize,
}

impl<T> Decoded<T> {
    fn empty() -> Self {
        Self {
            entries: Vec::new(),
            degraded: 0,
            dropped: 0,
        }
    }

    /// Whether any segment was degraded or dropped.
    pub fn has_anomalies(&self) -> bool {
        self.degraded > 0 || self.dropped > 0
    }
}

/// Encode entries as `"<value> (<TYPE>)"` joined by `"; "`.
///
/// An empty list encodes to an empty string.
///
/// # Example
///
/// ```
/// use circle_contacts::codec::grammar::encode;
/// use circle_contacts::domain::PhoneType;
///
/// let cell = encode([("555-0100", PhoneType::Home), ("555-0199", PhoneType::Work)]);
/// assert_eq!(cell, "555-0100 (HOME); 555-0199 (WORK)");
/// ```
pub fn encode<'a, T, I>(entries: I) -> String
where
    T: EntryType,
    I: IntoIterator<Item = (&'a str, T)>,
{
    entries
        .into_iter()
        .map(|(value, kind)| format!("{} ({})", value, kind))
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}

/// Decode a cell into `(value, type)` pairs, substituting `default_type` for
/// unknown tags and dropping unparseable segments.
///
/// # Example
///
/// ```
/// use circle_contacts::codec::grammar::decode;
/// use circle_contacts::domain::EmailType;
///
/// let entries = decode("foo (BOGUS)", EmailType::Personal);
/// assert_eq!(entries, vec![("foo".to_string(), EmailType::Personal)]);
/// ```
pub fn decode<T: EntryType>(cell: &str, default_type: T) -> Vec<(String, T)> {
    decode_with_report(cell, default_type).entries
}

/// Like [`decode`], but also reports how many segments were degraded or dropped.
pub fn decode_with_report<T: EntryType>(cell: &str, default_type: T) -> Decoded<T> {
    let mut decoded = Decoded::empty();

    if cell.trim().is_empty() {
        return decoded;
    }

    for segment in cell.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let Some((value, token)) = split_segment(segment) else {
            decoded.dropped += 1;
            continue;
        };

        let kind = match token.trim().to_uppercase().parse::<T>() {
            Ok(kind) => kind,
            Err(_) => {
                decoded.degraded += 1;
                default_type
            }
        };

        decoded.entries.push((value.to_string(), kind));
    }

    decoded
}

/// Split a trimmed segment into its value and the raw content of the final
/// `(...)` group. Returns `None` if the segment does not end in a well-formed
/// group or has nothing before it.
fn split_segment(segment: &str) -> Option<(&str, &str)> {
    let body = segment.strip_suffix(')')?;
    let open = body.rfind('(')?;
    let token = &body[open + 1..];

    if token.is_empty() || token.contains(')') {
        return None;
    }

    let value = body[..open].trim();
    if value.is_empty() {
        return None;
    }

    Some((value, token))
}
