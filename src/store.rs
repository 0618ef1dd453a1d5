//! Record store: owns the active Batch and its load lifecycle.
//!
//! The Store starts empty. `load` is the only mutation; it builds the
//! candidate Batch completely (read, parse, validate) and only then swaps it
//! in, so a failed load of any kind leaves the previous Batch active and no
//! caller ever observes a half-replaced dataset.

use crate::Result;
use crate::data::{Batch, RawRow, Record, parse, validate};
use crate::diagnostics;
use anyhow::bail;
use serde::Serialize;

/// Columnar projection of a Batch with numeric columns coerced, convenient
/// for bulk numeric operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    pub names: Vec<String>,
    pub ages: Vec<i64>,
    pub salaries: Vec<f64>,
    pub departments: Vec<String>,
}

#[derive(Debug, Default)]
pub struct RecordStore {
    batch: Batch,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a personnel file, replacing the active Batch on success.
    ///
    /// On any failure (unreadable file, parse error, schema violation) the
    /// reason is logged, false is returned, and the previous Batch stays
    /// active.
    pub fn load(&mut self, path: &str) -> bool {
        match build_batch(path) {
            Ok(batch) => {
                diagnostics::info(format!("loaded {}: {} records", path, batch.len()));
                self.batch = batch;
                true
            }
            Err(err) => {
                diagnostics::error(format!("load of {} failed: {:#}", path, err));
                false
            }
        }
    }

    /// The active Batch; empty until the first successful load.
    pub fn current(&self) -> &Batch {
        &self.batch
    }

    /// Columnar view with `age`/`salary` re-coerced from their text form.
    /// Pure projection, rebuilt on every call.
    pub fn as_table(&self) -> Table {
        let mut table = Table::default();
        for rec in self.batch.records() {
            let (Some(age), Some(salary)) = (rec.age_value(), rec.salary_value()) else {
                diagnostics::warn(format!(
                    "table view skipping record {:?}: uncoercible age/salary",
                    rec.name
                ));
                continue;
            };
            table.names.push(rec.name.clone());
            table.ages.push(age);
            table.salaries.push(salary);
            table.departments.push(rec.department.clone());
        }
        table
    }
}

fn build_batch(path: &str) -> Result<Batch> {
    let rows = parse::read_raw_rows(path)?;
    if !validate::validate(&rows) {
        bail!("validation rejected {}", path);
    }
    Ok(Batch::new(rows.iter().map(record_from_row).collect()))
}

/// Validation already checked field presence, so missing keys cannot occur
/// here; empty text is the inert fallback.
fn record_from_row(row: &RawRow) -> Record {
    Record {
        name: row.get("name").cloned().unwrap_or_default(),
        age: row.get("age").cloned().unwrap_or_default(),
        salary: row.get("salary").cloned().unwrap_or_default(),
        department: row.get("department").cloned().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn load(store: &mut RecordStore, contents: &str) -> bool {
        let file = write_csv(contents);
        store.load(file.path().to_str().unwrap())
    }

    #[test]
    fn successful_load_publishes_the_batch() {
        let mut store = RecordStore::new();
        assert!(load(
            &mut store,
            "name,age,salary,department\nAda,30,1000,IT\nLin,25,2000,HR\n"
        ));

        let batch = store.current();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.records()[0].name, "Ada");
        assert_eq!(batch.records()[1].salary, "2000");
    }

    #[test]
    fn failed_load_keeps_the_previous_batch() {
        let mut store = RecordStore::new();
        assert!(load(&mut store, "name,age,salary,department\nAda,30,1000,IT\n"));

        // Second file has a non-numeric salary; the first batch must survive.
        assert!(!load(&mut store, "name,age,salary,department\nLin,25,n/a,HR\n"));
        assert_eq!(store.current().len(), 1);
        assert_eq!(store.current().records()[0].name, "Ada");
    }

    #[test]
    fn missing_file_fails_and_store_stays_empty() {
        let mut store = RecordStore::new();
        assert!(!store.load("/no/such/personnel.csv"));
        assert!(store.current().is_empty());
    }

    #[test]
    fn missing_age_column_fails_and_store_stays_empty() {
        let mut store = RecordStore::new();
        assert!(!load(&mut store, "name,salary,department\nAda,1000,IT\n"));
        assert!(store.current().is_empty());
    }

    #[test]
    fn rows_missing_department_fail_schema_validation() {
        let mut store = RecordStore::new();
        assert!(!load(&mut store, "name,age,salary\nAda,30,1000\nLin,25,2000\n"));
        assert!(store.current().is_empty());
    }

    #[test]
    fn reload_replaces_the_batch_wholesale() {
        let mut store = RecordStore::new();
        assert!(load(&mut store, "name,age,salary,department\nAda,30,1000,IT\n"));
        assert!(load(
            &mut store,
            "name,age,salary,department\nLin,25,2000,HR\nMei,40,3000,IT\n"
        ));

        let names: Vec<&str> = store
            .current()
            .records()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Lin", "Mei"]);
    }

    #[test]
    fn as_table_projects_typed_columns() {
        let mut store = RecordStore::new();
        assert!(load(
            &mut store,
            "name,age,salary,department\nAda,30,1000.5,IT\nLin,25,2000,HR\n"
        ));

        let table = store.as_table();
        assert_eq!(table.names, vec!["Ada", "Lin"]);
        assert_eq!(table.ages, vec![30, 25]);
        assert_eq!(table.salaries, vec![1000.5, 2000.0]);
        assert_eq!(table.departments, vec!["IT", "HR"]);
    }

    #[test]
    fn as_table_on_empty_store_is_empty() {
        let store = RecordStore::new();
        assert_eq!(store.as_table(), Table::default());
    }
}
