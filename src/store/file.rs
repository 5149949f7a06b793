//! File collaborators for the postcard store
//!
//! Whole-file synchronous reads and writes. Records are raw lines: reads keep
//! each line's terminator, and writes emit records verbatim, so a sequence
//! round-trips byte-for-byte through write and read.

use crate::store::{StoreError, StoreResult};
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Read an entire source into an ordered sequence of records.
///
/// Each record keeps its line terminator; a source whose last line lacks one
/// yields a final record without one. A missing file surfaces as
/// [`StoreError::SourceNotFound`].
pub fn read_records(path: &Path) -> StoreResult<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => StoreError::SourceNotFound(path.to_path_buf()),
        _ => StoreError::Io(e),
    })?;

    let records: Vec<String> = content.split_inclusive('\n').map(str::to_string).collect();

    tracing::debug!("Read {} records from {:?}", records.len(), path);
    Ok(records)
}

/// Write records verbatim, in order, truncating any existing destination.
pub fn write_records<S: AsRef<str>>(path: &Path, records: &[S]) -> StoreResult<()> {
    let mut file = File::create(path)?;
    for record in records {
        file.write_all(record.as_ref().as_bytes())?;
    }

    tracing::debug!("Wrote {} records to {:?}", records.len(), path);
    Ok(())
}

/// Append records verbatim to a destination without truncating it.
///
/// The destination is created if it does not exist.
pub fn append_records<S: AsRef<str>>(path: &Path, records: &[S]) -> StoreResult<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    for record in records {
        file.write_all(record.as_ref().as_bytes())?;
    }

    tracing::debug!("Appended {} records to {:?}", records.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_keeps_line_terminators() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("postcards.txt");
        std::fs::write(&path, "date:2020-01-01;from:a;to:b;hi\ndate:2020-01-02;from:b;to:a;yo\n")
            .unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], "date:2020-01-01;from:a;to:b;hi\n");
        assert_eq!(records[1], "date:2020-01-02;from:b;to:a;yo\n");
    }

    #[test]
    fn test_read_final_line_without_terminator() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("postcards.txt");
        std::fs::write(&path, "first\nsecond").unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records, vec!["first\n".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_read_empty_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();

        assert!(read_records(&path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_source() {
        let dir = tempdir().unwrap();
        let err = read_records(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, StoreError::SourceNotFound(_)));
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let records = vec!["a\n".to_string(), "b\n".to_string()];

        write_records(&path, &records).unwrap();
        assert_eq!(read_records(&path).unwrap(), records);
    }

    #[test]
    fn test_write_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_records(&path, &["old\n"]).unwrap();
        write_records(&path, &["new\n"]).unwrap();

        assert_eq!(read_records(&path).unwrap(), vec!["new\n".to_string()]);
    }

    #[test]
    fn test_append_preserves_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_records(&path, &["first\n"]).unwrap();
        append_records(&path, &["second\n"]).unwrap();

        assert_eq!(
            read_records(&path).unwrap(),
            vec!["first\n".to_string(), "second\n".to_string()]
        );
    }
}
