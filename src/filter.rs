//! Predicate filtering over a Batch.
//!
//! A predicate is a (column, operator, value) triple. `age` and `salary`
//! compare numerically under all five operators; `department` is text and
//! supports equality only. Unknown column or operator strings are rejected at
//! the FromStr boundary, and an operator or value that does not fit the
//! column is an error rather than an empty result: it signals a caller bug,
//! not a data condition.

use crate::Result;
use crate::data::{Batch, Record};
use anyhow::{Context, bail};
use std::fmt;
use std::str::FromStr;

/// Filterable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Age,
    Salary,
    Department,
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Gt,
    Ge,
    Lt,
    Le,
    Eq,
}

/// Comparison value: numeric for `age`/`salary`, text for `department`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Column {
    /// Parse a raw comparison value for this column: a number for the
    /// numeric columns, free text for `department`.
    pub fn parse_value(self, raw: &str) -> Result<Value> {
        match self {
            Column::Age | Column::Salary => {
                let n: f64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{} comparison needs a numeric value, got {:?}", self, raw))?;
                Ok(Value::Number(n))
            }
            Column::Department => Ok(Value::Text(raw.to_string())),
        }
    }
}

impl FromStr for Column {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "age" => Ok(Column::Age),
            "salary" => Ok(Column::Salary),
            "department" => Ok(Column::Department),
            other => bail!("unknown filter column: {:?}", other),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Column::Age => "age",
            Column::Salary => "salary",
            Column::Department => "department",
        };
        f.write_str(s)
    }
}

impl FromStr for CmpOp {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            ">" => Ok(CmpOp::Gt),
            ">=" => Ok(CmpOp::Ge),
            "<" => Ok(CmpOp::Lt),
            "<=" => Ok(CmpOp::Le),
            "==" => Ok(CmpOp::Eq),
            other => bail!("unknown filter operator: {:?}", other),
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
            CmpOp::Eq => "==",
        };
        f.write_str(s)
    }
}

impl CmpOp {
    fn compare(self, lhs: f64, rhs: f64) -> bool {
        match self {
            CmpOp::Gt => lhs > rhs,
            CmpOp::Ge => lhs >= rhs,
            CmpOp::Lt => lhs < rhs,
            CmpOp::Le => lhs <= rhs,
            CmpOp::Eq => lhs == rhs,
        }
    }
}

/// Select the records matching (column, op, value), preserving batch order.
///
/// Records whose column fails numeric coercion are skipped, not errors:
/// load-time validation makes them unreachable in practice. An empty result
/// (including on an empty Batch) is a normal outcome.
pub fn filter(batch: &Batch, column: Column, op: CmpOp, value: &Value) -> Result<Vec<Record>> {
    let keep: Box<dyn Fn(&Record) -> bool> = match (column, value) {
        (Column::Age, Value::Number(rhs)) => {
            let rhs = *rhs;
            Box::new(move |rec| match rec.age_value() {
                Some(age) => op.compare(age as f64, rhs),
                None => false,
            })
        }
        (Column::Salary, Value::Number(rhs)) => {
            let rhs = *rhs;
            Box::new(move |rec| match rec.salary_value() {
                Some(salary) => op.compare(salary, rhs),
                None => false,
            })
        }
        (Column::Department, Value::Text(rhs)) if op == CmpOp::Eq => {
            let rhs = rhs.clone();
            Box::new(move |rec| rec.department == rhs)
        }
        (Column::Department, Value::Text(_)) => {
            bail!("operator {} is not supported for department", op);
        }
        (col, val) => {
            bail!("value {:?} does not fit column {}", val, col);
        }
    };

    Ok(batch
        .records()
        .iter()
        .filter(|rec| keep(rec))
        .cloned()
        .collect())
}
