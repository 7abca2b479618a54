// src/output/mod.rs

//! Association-file result sink for benchmark reports.
//!
//! Results are exported as a flat key→value association readable by the
//! downstream analysis notebook: `<| "key" -> value, ... |>` with string,
//! integer, and numeric-array values, numbers rendered in normalized
//! scientific notation (`d.ddd*10^±ee`). Entries are buffered in memory
//! and the file is written in a single shot at [`AssocWriter::finish`], so
//! a reader never observes a partially-written record.

use std::fs;
use std::io;
use std::path::Path;

/// Renders `value` in scientific notation with `precision` digits after
/// the decimal point, base ten spelled out: `-4.321*10^-03`.
///
/// The exponent always carries a sign and at least two digits. Non-finite
/// values fall back to their plain rendering.
pub fn format_scientific(value: f64, precision: usize) -> String {
    let raw = format!("{:.*e}", precision, value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}*10^{}{:02}", mantissa, sign, exp.abs())
            }
            Err(_) => raw,
        },
        None => raw,
    }
}

/// Buffered writer for one association record.
///
/// Accumulate entries with the `put_*` methods, then call
/// [`AssocWriter::finish`] once; the write-once discipline is what makes
/// the output safe to poll from analysis tooling.
#[derive(Debug, Default)]
pub struct AssocWriter {
    entries: Vec<String>,
}

impl AssocWriter {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a string value.
    pub fn put_str(&mut self, key: &str, value: &str) {
        self.entries.push(format!("\"{}\" -> \"{}\"", key, value));
    }

    /// Adds an integer value.
    pub fn put_int(&mut self, key: &str, value: i64) {
        self.entries.push(format!("\"{}\" -> {}", key, value));
    }

    /// Adds a scalar in scientific notation.
    pub fn put_f64(&mut self, key: &str, value: f64, precision: usize) {
        self.entries
            .push(format!("\"{}\" -> {}", key, format_scientific(value, precision)));
    }

    /// Adds an array of numbers in scientific notation.
    pub fn put_f64_array(&mut self, key: &str, values: &[f64], precision: usize) {
        let rendered: Vec<String> = values
            .iter()
            .map(|&v| format_scientific(v, precision))
            .collect();
        self.entries
            .push(format!("\"{}\" -> {{{}}}", key, rendered.join(", ")));
    }

    /// The finalized record as a string.
    pub fn render(&self) -> String {
        let mut body = String::from("<|\n");
        body.push_str(&self.entries.join(",\n"));
        body.push_str("\n|>");
        body
    }

    /// Writes the finalized record to `path` in one shot.
    pub fn finish(self, path: &Path) -> io::Result<()> {
        fs::write(path, self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_scientific(0.001215, 3), "1.215*10^-03");
        assert_eq!(format_scientific(12345.0, 2), "1.23*10^+04");
        assert_eq!(format_scientific(-0.5, 1), "-5.0*10^-01");
        assert_eq!(format_scientific(0.0, 3), "0.000*10^+00");
        assert_eq!(format_scientific(1e120, 1), "1.0*10^+120");
    }

    #[test]
    fn test_render_shape() {
        let mut writer = AssocWriter::new();
        writer.put_str("note", "hello");
        writer.put_int("numQubits", 5);
        writer.put_f64_array("dur_A", &[0.25, 0.5], 2);

        let rendered = writer.render();
        assert!(rendered.starts_with("<|\n"));
        assert!(rendered.ends_with("\n|>"));
        assert!(rendered.contains("\"note\" -> \"hello\",\n"));
        assert!(rendered.contains("\"numQubits\" -> 5,\n"));
        // last entry carries no trailing comma
        assert!(rendered.contains("\"dur_A\" -> {2.50*10^-01, 5.00*10^-01}\n|>"));
    }
}
