//! Cardex index structures
//!
//! Provides the secondary indices behind the archive's queries:
//!
//! - **DateIndex**: ordered date → positions mapping for range queries
//! - **PartyIndex**: identifier → positions mapping for exact-match queries
//!   (one instance for senders, one for receivers)
//!
//! # Architecture
//!
//! ```text
//! Query: "postcards from alice"
//!        ↓
//! PartyIndex: alice → [0, 4, 9]
//!        ↓
//! Archive: project positions back to records → ["date:...;from:alice;...", ...]
//! ```
//!
//! Indices hold record positions, never records. They are rebuilt from
//! scratch after every mutation of the record sequence, so each position
//! 0..N-1 appears in exactly one list per index.

mod date_index;
mod party_index;

pub use date_index::DateIndex;
pub use party_index::PartyIndex;

use serde::Serialize;

/// Position of a record within the archive's record sequence
///
/// Assigned in sequence order; stable across appends. Deletion is
/// unsupported, so positions never move once assigned.
pub type Position = usize;

/// Statistics about index contents
#[derive(Debug, Clone, Default, Serialize)]
pub struct IndexStats {
    /// Number of records indexed
    pub records: usize,
    /// Number of distinct dates in the date index
    pub dates_indexed: usize,
    /// Number of distinct senders in the sender index
    pub senders_indexed: usize,
    /// Number of distinct receivers in the receiver index
    pub receivers_indexed: usize,
}

impl std::fmt::Display for IndexStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} records, {} dates, {} senders, {} receivers",
            self.records, self.dates_indexed, self.senders_indexed, self.receivers_indexed
        )
    }
}
