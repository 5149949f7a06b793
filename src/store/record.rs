//! Record field extraction
//!
//! A postcard record is one raw line of text with at least three
//! `;`-delimited fields:
//!
//! ```text
//! date:2020-01-01;from:alice;to:bob;saw the canals today!
//! ```
//!
//! The first three fields carry the index keys; a fourth free-text field may
//! follow and is stored verbatim but never indexed. Each key is the literal
//! substring after the first `:` of its field — no trimming, so a record whose
//! third field ends the line keeps its terminator inside the receiver key.

use crate::store::{StoreError, StoreResult};
use chrono::NaiveDate;

/// Format accepted for the date field value
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Index keys extracted from the first three fields of a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFields {
    /// Calendar date from the first field
    pub date: NaiveDate,
    /// Raw sender identifier from the second field
    pub sender: String,
    /// Raw receiver identifier from the third field
    pub receiver: String,
}

/// Extract the index keys from a raw record.
///
/// `position` is the record's place in the record sequence and is only used
/// to give errors a stable reference point.
pub fn parse_fields(position: usize, raw: &str) -> StoreResult<RecordFields> {
    let mut split = raw.split(';');

    let (date_field, from_field, to_field) = match (split.next(), split.next(), split.next()) {
        (Some(date), Some(from), Some(to)) => (date, from, to),
        _ => {
            return Err(StoreError::Parse {
                position,
                reason: format!("expected at least 3 `;`-delimited fields, got {:?}", raw),
            });
        }
    };

    let date_value = field_value(position, date_field, "date")?;
    let date = NaiveDate::parse_from_str(date_value, DATE_FORMAT).map_err(|e| StoreError::Parse {
        position,
        reason: format!("invalid date {:?}: {}", date_value, e),
    })?;

    Ok(RecordFields {
        date,
        sender: field_value(position, from_field, "from")?.to_string(),
        receiver: field_value(position, to_field, "to")?.to_string(),
    })
}

/// The literal substring after the first `:` of a field
fn field_value<'a>(position: usize, field: &'a str, name: &str) -> StoreResult<&'a str> {
    field
        .split_once(':')
        .map(|(_, value)| value)
        .ok_or_else(|| StoreError::Parse {
            position,
            reason: format!("missing `:` separator in {} field", name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_full_record() {
        let fields = parse_fields(0, "date:2020-01-01;from:alice;to:bob;hi\n").unwrap();
        assert_eq!(fields.date, date(2020, 1, 1));
        assert_eq!(fields.sender, "alice");
        assert_eq!(fields.receiver, "bob");
    }

    #[test]
    fn test_receiver_keeps_line_terminator() {
        // Without a fourth field the third field runs to end-of-line, and the
        // terminator is part of the key.
        let fields = parse_fields(0, "date:2020-01-01;from:alice;to:bob\n").unwrap();
        assert_eq!(fields.receiver, "bob\n");
    }

    #[test]
    fn test_key_is_substring_after_first_colon() {
        let fields = parse_fields(0, "date:2020-01-01;from:alice:work;to:bob;x\n").unwrap();
        assert_eq!(fields.sender, "alice:work");
    }

    #[test]
    fn test_no_trimming() {
        let fields = parse_fields(0, "date:2020-01-01;from: alice ;to:bob;x\n").unwrap();
        assert_eq!(fields.sender, " alice ");
    }

    #[test]
    fn test_too_few_fields() {
        let err = parse_fields(7, "badformat\n").unwrap_err();
        match err {
            StoreError::Parse { position, reason } => {
                assert_eq!(position, 7);
                assert!(reason.contains("3 `;`-delimited fields"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_colon_separator() {
        let err = parse_fields(0, "date:2020-01-01;alice;to:bob\n").unwrap_err();
        match err {
            StoreError::Parse { reason, .. } => assert!(reason.contains("from field")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_date() {
        assert!(parse_fields(0, "date:2020-13-01;from:a;to:b\n").is_err());
        assert!(parse_fields(0, "date:01/01/2020;from:a;to:b\n").is_err());
        assert!(parse_fields(0, "date:;from:a;to:b\n").is_err());
    }

    #[test]
    fn test_field_labels_are_not_validated() {
        // Only field order matters; labels are never checked.
        let fields = parse_fields(0, "when:2020-01-01;sender:a;rcpt:b\n").unwrap();
        assert_eq!(fields.sender, "a");
    }
}
