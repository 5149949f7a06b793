//! Postcard archive - the record sequence and its secondary indices
//!
//! `PostcardArchive` owns an ordered sequence of raw records and three
//! derived mappings (date, sender, receiver → positions). Every mutation
//! rebuilds all three indices from scratch; queries consult an index and
//! project positions back to records.
//!
//! # Architecture
//!
//! ```text
//! Mutation path:
//!   load/append → replace/extend records → rebuild all indices
//!
//! Query path:
//!   by_sender("alice") → PartyIndex → [0, 4] → records[0], records[4]
//! ```
//!
//! The archive is a plain data structure: single-threaded, synchronous, no
//! interior mutability. Callers mutate through `&mut self` and query through
//! `&self`, so exclusive ownership is enforced by the borrow checker.

use crate::index::{DateIndex, IndexStats, PartyIndex, Position};
use crate::store::{file, record, StoreResult};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// In-memory postcard collection with date, sender, and receiver indices
#[derive(Debug, Default)]
pub struct PostcardArchive {
    /// Raw records, in load/append order
    records: Vec<String>,
    /// date → positions
    by_date: DateIndex,
    /// sender → positions
    by_sender: PartyIndex,
    /// receiver → positions
    by_receiver: PartyIndex,
    /// Last source handed to a file-backed load/append, for diagnostics
    source: Option<PathBuf>,
}

impl PostcardArchive {
    /// Create an empty archive
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Mutation ====================

    /// Replace the record sequence and rebuild every index.
    ///
    /// Empty input yields empty state. On a parse failure the archive is
    /// reset to empty and the error returned; the caller must load again.
    pub fn load(&mut self, records: Vec<String>) -> StoreResult<()> {
        self.records = records;
        self.rebuild()?;

        tracing::info!("Loaded {} records", self.records.len());
        Ok(())
    }

    /// Append records after the existing ones and rebuild every index.
    ///
    /// Existing positions are unaffected by an append; the rebuild recomputes
    /// them unconditionally anyway, trading repeated work for the guarantee
    /// that indices never drift from the record sequence.
    pub fn append(&mut self, records: Vec<String>) -> StoreResult<()> {
        self.records.extend(records);
        self.rebuild()?;

        tracing::info!("Archive now holds {} records", self.records.len());
        Ok(())
    }

    /// Rebuild the three indices from scratch over the current records.
    ///
    /// Starts from cleared mappings, then walks records in position order,
    /// appending each position to the tail of its keys' lists. A malformed
    /// record aborts the rebuild, resets the archive to empty, and surfaces
    /// as [`StoreError::Parse`](crate::store::StoreError::Parse) — indices
    /// are therefore always fully consistent with the record sequence, even
    /// after a failure.
    fn rebuild(&mut self) -> StoreResult<()> {
        self.by_date.clear();
        self.by_sender.clear();
        self.by_receiver.clear();

        for position in 0..self.records.len() {
            let fields = match record::parse_fields(position, &self.records[position]) {
                Ok(fields) => fields,
                Err(e) => {
                    tracing::warn!("Rebuild failed, archive reset: {}", e);
                    self.reset();
                    return Err(e);
                }
            };

            self.by_date.add(fields.date, position);
            self.by_sender.add(&fields.sender, position);
            self.by_receiver.add(&fields.receiver, position);
        }

        Ok(())
    }

    /// Drop all records and index state, leaving an empty archive
    fn reset(&mut self) {
        self.records.clear();
        self.by_date.clear();
        self.by_sender.clear();
        self.by_receiver.clear();
    }

    // ==================== Queries ====================

    /// Number of records currently held
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Check whether the archive holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The raw record sequence, in position order
    pub fn records(&self) -> &[String] {
        &self.records
    }

    /// Records whose date lies within `[start, end]` inclusive.
    ///
    /// Dates are visited in ascending order; records sharing a date keep
    /// ascending position order. An inverted range (`start > end`) yields no
    /// matches rather than an error.
    pub fn by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&str> {
        self.project(self.by_date.find_range(start, end))
    }

    /// Records whose sender identifier exactly equals `sender`, in ascending
    /// position order. An unknown sender yields an empty result.
    pub fn by_sender(&self, sender: &str) -> Vec<&str> {
        self.project(self.by_sender.find(sender).iter().copied())
    }

    /// Records whose receiver identifier exactly equals `receiver`, in
    /// ascending position order. An unknown receiver yields an empty result.
    pub fn by_receiver(&self, receiver: &str) -> Vec<&str> {
        self.project(self.by_receiver.find(receiver).iter().copied())
    }

    /// Statistics over the current index contents
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            records: self.records.len(),
            dates_indexed: self.by_date.key_count(),
            senders_indexed: self.by_sender.key_count(),
            receivers_indexed: self.by_receiver.key_count(),
        }
    }

    /// Map positions back to the records they identify
    fn project<I>(&self, positions: I) -> Vec<&str>
    where
        I: IntoIterator<Item = Position>,
    {
        positions
            .into_iter()
            .map(|position| self.records[position].as_str())
            .collect()
    }

    // ==================== File-backed operations ====================

    /// Load the archive from a named source, replacing any prior contents
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        let records = file::read_records(path)?;
        self.source = Some(path.to_path_buf());
        self.load(records)
    }

    /// Read a named source and append its records to the archive
    pub fn append_from(&mut self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        let records = file::read_records(path)?;
        self.source = Some(path.to_path_buf());
        self.append(records)
    }

    /// Write the current records verbatim to a destination, truncating it
    pub fn write_to(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        file::write_records(path.as_ref(), &self.records)
    }

    /// Append the current records verbatim to a destination
    pub fn append_to(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        file::append_records(path.as_ref(), &self.records)
    }

    /// Source path of the most recent file-backed load or append
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
