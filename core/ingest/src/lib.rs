//! FILENAME: core/ingest/src/lib.rs
//! PURPOSE: CSV ingestion for the retail analytics workspace.
//! CONTEXT: The only place where untyped text becomes `TransactionRecord`s.
//! The analytics engine assumes every record it receives is well-formed;
//! the guarantees it relies on (numeric sales/quantity/profit) are enforced
//! here by dropping rows that fail coercion.

pub mod csv_reader;
pub mod error;

pub use csv_reader::{load_csv, read_records};
pub use error::IngestError;
