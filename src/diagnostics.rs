//! Stderr diagnostics for load and validation outcomes.
//!
//! The engine reports load results as booleans; the detail lives here so a
//! presentation layer never has to unpack structured errors.

pub fn info(msg: String) {
    eprintln!("INFO: {}", msg);
}

pub fn warn(msg: String) {
    eprintln!("WARN: {}", msg);
}

pub fn error(msg: String) {
    eprintln!("ERROR: {}", msg);
}
