//! Stage report models and mutable report builder.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::spec::SpecStageError;

/// Aggregate counters and diagnostics for one `stage_paths` run.
#[derive(Debug, Default, Clone)]
pub struct ReportStage {
    /// Number of resolved paths handed to the stager.
    pub cnt_requested: u64,
    /// Number of files copied into the output directory.
    pub cnt_copied: u64,
    /// Number of paths skipped (missing, not a file, excluded, dry-run).
    pub cnt_skipped: u64,
    /// Destination paths written, in copy order (repeats on overwrite).
    pub l_copied: Vec<PathBuf>,
    /// Non-fatal warnings collected during staging.
    pub warnings: Vec<String>,
    /// Per-entry failures.
    pub errors: Vec<SpecStageError>,
}

impl ReportStage {
    /// Number of collected hard errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Number of collected warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_requested".to_string(), self.cnt_requested);
        dict_counts.insert("cnt_copied".to_string(), self.cnt_copied);
        dict_counts.insert("cnt_skipped".to_string(), self.cnt_skipped);
        dict_counts.insert("cnt_errors".to_string(), self.error_count() as u64);
        dict_counts.insert("cnt_warnings".to_string(), self.warning_count() as u64);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        let dict_counts = self.to_dict();
        format!(
            "{prefix} requested={} copied={} skipped={} errors={} warnings={}",
            dict_counts["cnt_requested"],
            dict_counts["cnt_copied"],
            dict_counts["cnt_skipped"],
            dict_counts["cnt_errors"],
            dict_counts["cnt_warnings"]
        )
    }
}

impl fmt::Display for ReportStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[STAGE]"))
    }
}

/// Mutable accumulator for stage statistics.
#[derive(Debug, Default, Clone)]
pub struct ReportStageBuilder {
    /// See [`ReportStage::cnt_requested`].
    pub cnt_requested: u64,
    /// See [`ReportStage::cnt_copied`].
    pub cnt_copied: u64,
    /// See [`ReportStage::cnt_skipped`].
    pub cnt_skipped: u64,
    /// See [`ReportStage::l_copied`].
    pub l_copied: Vec<PathBuf>,
    /// See [`ReportStage::warnings`].
    pub warnings: Vec<String>,
    /// See [`ReportStage::errors`].
    pub errors: Vec<SpecStageError>,
}

impl ReportStageBuilder {
    pub fn add_requested(&mut self) {
        self.cnt_requested += 1;
    }

    /// Record one committed copy.
    pub fn add_copied(&mut self, path_file_dst: PathBuf) {
        self.cnt_copied += 1;
        self.l_copied.push(path_file_dst);
    }

    pub fn add_skipped(&mut self) {
        self.cnt_skipped += 1;
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Add one path-scoped error.
    pub fn add_error(&mut self, path: PathBuf, exception: String) {
        self.errors.push(SpecStageError { path, exception });
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportStage {
        ReportStage {
            cnt_requested: self.cnt_requested,
            cnt_copied: self.cnt_copied,
            cnt_skipped: self.cnt_skipped,
            l_copied: self.l_copied,
            warnings: self.warnings,
            errors: self.errors,
        }
    }
}
