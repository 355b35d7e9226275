//! Resolve report model and mutable report builder.

use std::collections::BTreeMap;
use std::fmt;

/// Outcome of one successful interpretation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportResolve {
    /// Resolved paths in emission order.
    pub l_paths: Vec<String>,
    /// Number of input lines consumed.
    pub cnt_lines: u64,
    /// Number of `::` fragments encountered (known or not).
    pub cnt_directives: u64,
    /// Non-fatal warnings, e.g. unknown directives.
    pub warnings: Vec<String>,
}

impl ReportResolve {
    /// Number of collected warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_lines".to_string(), self.cnt_lines);
        dict_counts.insert("cnt_directives".to_string(), self.cnt_directives);
        dict_counts.insert("cnt_paths".to_string(), self.l_paths.len() as u64);
        dict_counts.insert("cnt_warnings".to_string(), self.warning_count() as u64);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        let dict_counts = self.to_dict();
        format!(
            "{prefix} lines={} directives={} paths={} warnings={}",
            dict_counts["cnt_lines"],
            dict_counts["cnt_directives"],
            dict_counts["cnt_paths"],
            dict_counts["cnt_warnings"]
        )
    }
}

impl fmt::Display for ReportResolve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[RESOLVE]"))
    }
}

/// Mutable accumulator used while interpreting.
#[derive(Debug, Default, Clone)]
pub struct ReportResolveBuilder {
    /// See [`ReportResolve::l_paths`].
    pub l_paths: Vec<String>,
    /// See [`ReportResolve::cnt_lines`].
    pub cnt_lines: u64,
    /// See [`ReportResolve::cnt_directives`].
    pub cnt_directives: u64,
    /// See [`ReportResolve::warnings`].
    pub warnings: Vec<String>,
}

impl ReportResolveBuilder {
    pub fn add_path(&mut self, path: String) {
        self.l_paths.push(path);
    }

    pub fn add_line(&mut self) {
        self.cnt_lines += 1;
    }

    pub fn add_directive(&mut self) {
        self.cnt_directives += 1;
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportResolve {
        ReportResolve {
            l_paths: self.l_paths,
            cnt_lines: self.cnt_lines,
            cnt_directives: self.cnt_directives,
            warnings: self.warnings,
        }
    }
}
