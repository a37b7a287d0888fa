//! BioSheet Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, error handling and logging for the BioSheet workspace.
//!
//! # Overview
//!
//! - **Types**: the nine-column [`EntityRecord`], the [`Category`] keys and
//!   the [`EntityTable`] a fetch produces
//! - **Error Handling**: [`BiosheetError`] and the [`Result`] alias
//! - **Logging**: `tracing` subscriber setup shared by every binary
//!
//! # Example
//!
//! ```
//! use biosheet_common::{Category, EntityRecord, RecordField};
//!
//! let category: Category = "hormones".parse().unwrap();
//! let mut record = EntityRecord::new("insulin", category.entity_type());
//! record.set_if_empty(RecordField::Location, "Extracellular");
//! assert_eq!(record.get(RecordField::Location), "Extracellular");
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{BiosheetError, Result};
pub use types::{Category, EntityRecord, EntityTable, RecordField};
