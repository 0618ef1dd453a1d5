//! CSV ingestion: read a personnel file into raw text rows.
//!
//! Expected shape (UTF-8, first line = header):
//!
//! name,age,salary,department
//! Ada,30,1000,IT
//!
//! Header order does not matter; each data row is keyed by header name. Field
//! presence and type checking is the validator's job, not ours.

use crate::Result;
use anyhow::Context;
use std::collections::BTreeMap;
use std::fs::File;

/// A raw row as read from the source: field name -> text value, before any
/// type coercion.
pub type RawRow = BTreeMap<String, String>;

/// Read a delimited file into raw rows.
///
/// Fails when the file cannot be opened or a data row does not match the
/// header width.
pub fn read_raw_rows(path: &str) -> Result<Vec<RawRow>> {
    let file = File::open(path).with_context(|| format!("read data file {}", path))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read header of {}", path))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut out = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        // Header is line 1, so the first data row is line 2.
        let record =
            record.with_context(|| format!("parse error in {} at line {}", path, idx + 2))?;

        let mut row = RawRow::new();
        for (header, field) in headers.iter().zip(record.iter()) {
            row.insert(header.clone(), field.to_string());
        }
        out.push(row);
    }

    Ok(out)
}
