//! Data layer: raw CSV ingestion, schema validation, and the typed Batch.

pub mod parse;
pub mod record;
pub mod validate;

pub use parse::RawRow;
pub use record::{Batch, Record};
