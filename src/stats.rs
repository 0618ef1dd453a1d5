//! Aggregate statistics over a Batch.
//!
//! Everything here is purely derived: recomputed from the active Batch on
//! every call, no caching, no mutation. An empty Batch yields no Summary,
//! which callers must treat as a normal "no data" state.

use crate::data::{Batch, Record};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate statistics computed over one Batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub mean_salary: f64,
    pub median_salary: f64,
    pub total_salary: f64,
    pub max_salary: f64,
    pub min_salary: f64,
    pub mean_age: f64,
    pub count: usize,
    /// Department label -> number of records carrying it.
    pub department_counts: BTreeMap<String, usize>,
    /// Department label -> mean salary within that department.
    pub department_mean_salary: BTreeMap<String, f64>,
}

/// Compute the full Summary, or None for an empty Batch.
pub fn statistics(batch: &Batch) -> Option<Summary> {
    if batch.is_empty() {
        return None;
    }

    let mut salaries: Vec<f64> = Vec::with_capacity(batch.len());
    let mut age_total = 0.0f64;
    let mut age_count = 0usize;
    let mut department_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut department_salaries: BTreeMap<String, (f64, usize)> = BTreeMap::new();

    for rec in batch.records() {
        // Load-time validation guarantees coercion; a record that still fails
        // is skipped rather than treated as an error.
        if let Some(salary) = rec.salary_value() {
            salaries.push(salary);
            let (total, n) = department_salaries
                .entry(rec.department.clone())
                .or_insert((0.0, 0));
            *total += salary;
            *n += 1;
        }
        if let Some(age) = rec.age_value() {
            age_total += age as f64;
            age_count += 1;
        }
        *department_counts.entry(rec.department.clone()).or_insert(0) += 1;
    }

    if salaries.is_empty() || age_count == 0 {
        return None;
    }

    let total_salary: f64 = salaries.iter().sum();
    let max_salary = salaries.iter().cloned().fold(f64::MIN, f64::max);
    let min_salary = salaries.iter().cloned().fold(f64::MAX, f64::min);

    let mut sorted = salaries.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let department_mean_salary = department_salaries
        .into_iter()
        .map(|(dept, (total, n))| (dept, total / n as f64))
        .collect();

    Some(Summary {
        mean_salary: total_salary / salaries.len() as f64,
        median_salary: median(&sorted),
        total_salary,
        max_salary,
        min_salary,
        mean_age: age_total / age_count as f64,
        count: batch.len(),
        department_counts,
        department_mean_salary,
    })
}

/// The record with the highest salary; ties keep the earliest record.
pub fn highest_paid(batch: &Batch) -> Option<&Record> {
    extreme_by_salary(batch, |candidate, best| candidate > best)
}

/// The record with the lowest salary; ties keep the earliest record.
pub fn lowest_paid(batch: &Batch) -> Option<&Record> {
    extreme_by_salary(batch, |candidate, best| candidate < best)
}

fn extreme_by_salary(batch: &Batch, beats: impl Fn(f64, f64) -> bool) -> Option<&Record> {
    let mut best: Option<(&Record, f64)> = None;
    for rec in batch.records() {
        let Some(salary) = rec.salary_value() else {
            continue;
        };
        match best {
            Some((_, best_salary)) if !beats(salary, best_salary) => {}
            _ => best = Some((rec, salary)),
        }
    }
    best.map(|(rec, _)| rec)
}

/// Middle value of a sorted sequence, or the average of the two middle
/// values for even lengths.
fn median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}
