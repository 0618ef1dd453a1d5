//! Schema validation for raw personnel rows.
//!
//! Runs before any Record is constructed, so downstream consumers can rely on
//! a single invariant: if a row made it into the Store, all four fields are
//! present and `age`/`salary` coerce to numbers.

use crate::data::parse::RawRow;
use crate::diagnostics;

/// Field names every personnel file must carry (presence, not position).
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "age", "salary", "department"];

/// Check a raw batch against the required schema.
///
/// All-or-nothing: an empty batch, a missing column, or a non-numeric
/// `age`/`salary` anywhere rejects the whole batch. Returns false rather than
/// erroring; each failure is logged with enough context to locate the bad
/// record.
pub fn validate(rows: &[RawRow]) -> bool {
    if rows.is_empty() {
        diagnostics::error("empty dataset: nothing to validate".to_string());
        return false;
    }

    for field in REQUIRED_FIELDS {
        if !rows[0].contains_key(field) {
            diagnostics::error(format!("missing column: {}", field));
            return false;
        }
    }

    for (idx, row) in rows.iter().enumerate() {
        let rowno = idx + 1;

        match row.get("age") {
            Some(v) if v.trim().parse::<i64>().is_ok() => {}
            Some(v) => {
                diagnostics::error(format!("row {}: age {:?} is not an integer", rowno, v));
                return false;
            }
            None => {
                diagnostics::error(format!("row {}: age field missing", rowno));
                return false;
            }
        }

        match row.get("salary") {
            Some(v) if v.trim().parse::<f64>().is_ok() => {}
            Some(v) => {
                diagnostics::error(format!("row {}: salary {:?} is not a number", rowno, v));
                return false;
            }
            None => {
                diagnostics::error(format!("row {}: salary field missing", rowno));
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, age: &str, salary: &str, department: &str) -> RawRow {
        RawRow::from([
            ("name".to_string(), name.to_string()),
            ("age".to_string(), age.to_string()),
            ("salary".to_string(), salary.to_string()),
            ("department".to_string(), department.to_string()),
        ])
    }

    #[test]
    fn accepts_well_typed_rows() {
        let rows = vec![row("Ada", "30", "1000", "IT"), row("Lin", "25", "2000.5", "HR")];
        assert!(validate(&rows));
    }

    #[test]
    fn rejects_empty_batch() {
        assert!(!validate(&[]));
    }

    #[test]
    fn rejects_rows_without_department_column() {
        // All four columns are required, even if no consumer groups by them.
        let mut r = row("Ada", "30", "1000", "IT");
        r.remove("department");
        assert!(!validate(&[r]));
    }

    #[test]
    fn rejects_non_integer_age() {
        let rows = vec![row("Ada", "30", "1000", "IT"), row("Lin", "25.5", "2000", "HR")];
        assert!(!validate(&rows));
    }

    #[test]
    fn rejects_non_numeric_salary() {
        let rows = vec![row("Ada", "30", "n/a", "IT")];
        assert!(!validate(&rows));
    }

    #[test]
    fn one_bad_row_rejects_the_whole_batch() {
        let rows = vec![
            row("Ada", "30", "1000", "IT"),
            row("Lin", "twenty", "2000", "HR"),
            row("Mei", "40", "3000", "IT"),
        ];
        assert!(!validate(&rows));
    }
}
