use std::path::PathBuf;

use clap::Parser;
use refkit_io_fs::{C_NAME_DIR_STAGE_DEFAULT, SpecStageOptions};
use refkit_log::EnumLogVerbosity;
use refkit_refs::C_NAME_REFS_FILE_DEFAULT;

/// Resolve a reference list and stage the referenced files into a flat directory.
#[derive(Debug, Parser)]
#[command(name = "refkit", version)]
pub struct Cli {
    /// Reference list to interpret. `::from` paths are relative to its directory.
    #[arg(long, value_name = "FILE", default_value = C_NAME_REFS_FILE_DEFAULT)]
    pub refs: PathBuf,

    /// Output directory; removed and recreated on every run.
    #[arg(long, value_name = "DIR", default_value = C_NAME_DIR_STAGE_DEFAULT)]
    pub out: PathBuf,

    /// Skip files whose basename matches this glob (repeatable).
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Do not carry permissions, timestamps or xattrs over to the copies.
    #[arg(long)]
    pub no_metadata: bool,

    /// Resolve and report what would be copied without touching the filesystem.
    #[arg(long)]
    pub dry_run: bool,

    /// Trace scope transitions and skipped paths.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn verbosity(&self) -> EnumLogVerbosity {
        if self.verbose {
            EnumLogVerbosity::Verbose
        } else {
            EnumLogVerbosity::Normal
        }
    }

    pub fn stage_options(&self) -> SpecStageOptions {
        SpecStageOptions {
            patterns_exclude_files: (!self.exclude.is_empty()).then(|| self.exclude.clone()),
            if_preserve_metadata: !self.no_metadata,
            if_dry_run: self.dry_run,
        }
    }

    /// Base directory for `::from` targets; `None` means the working directory.
    pub fn include_base_dir(&self) -> Option<PathBuf> {
        self.refs
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
    }
}
