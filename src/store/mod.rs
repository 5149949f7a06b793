//! Cardex postcard store
//!
//! This module provides the core postcard storage functionality:
//!
//! - **record**: record field extraction (date, sender, receiver keys)
//! - **archive**: the archive component owning records and indices
//! - **file**: file collaborators (whole-file read, write, append)
//! - **error**: error types
//!
//! # Example
//!
//! ```rust,no_run
//! use cardex::store::PostcardArchive;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut archive = PostcardArchive::new();
//!     archive.load_from("postcards.txt")?;
//!
//!     for record in archive.by_sender("alice") {
//!         print!("{}", record);
//!     }
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod error;
pub mod file;
pub mod record;

// Re-export commonly used types
pub use archive::PostcardArchive;
pub use error::{StoreError, StoreResult};
pub use record::{parse_fields, RecordFields};
