//! # Cardex
//!
//! Indexed postcard archive - load, append, and query semicolon-delimited
//! postcard records by date, sender, and receiver.
//!
//! ## Features
//!
//! - **Three secondary indices**: date, sender, and receiver, each mapping a
//!   key to the ordered positions of the records sharing it
//! - **Range queries**: inclusive calendar-date ranges over an ordered index
//! - **Exact-match queries**: case-sensitive sender/receiver lookup
//! - **Verbatim storage**: records round-trip byte-for-byte through the file
//!   collaborators
//! - **Full rebuilds**: every mutation reindexes from scratch, so indices can
//!   never drift from the record sequence
//!
//! ## Modules
//!
//! - [`store`]: the postcard archive, record parsing, file collaborators
//! - [`index`]: index structures backing the queries
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cardex::store::PostcardArchive;
//! use chrono::NaiveDate;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load a source file
//!     let mut archive = PostcardArchive::new();
//!     archive.load_from("postcards.txt")?;
//!
//!     // Who wrote to us, and when?
//!     let from_alice = archive.by_sender("alice");
//!     println!("{} postcards from alice", from_alice.len());
//!
//!     let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
//!     let end = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
//!     let in_2020 = archive.by_date_range(start, end);
//!     println!("{} postcards dated 2020", in_2020.len());
//!
//!     // Merge in another source and export everything
//!     archive.append_from("shoebox.txt")?;
//!     archive.write_to("combined.txt")?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod index;
pub mod store;

// Re-export top-level types for convenience
pub use store::{PostcardArchive, RecordFields, StoreError, StoreResult};

pub use index::{DateIndex, IndexStats, PartyIndex, Position};

pub use config::{Config, ConfigError, LoggingConfig, StoreConfig};
