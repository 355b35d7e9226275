//! `refkit`: resolve `refs.txt` and stage the referenced files into `target/`.

mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};

use refkit_io_fs::stage_paths;
use refkit_log::init_console_logging;
use refkit_refs::{FsInclude, StdinPrompt, read_refs_file, resolve_refs};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_console_logging(cli.verbosity()) {
        eprintln!("{e}");
    }

    match run(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let c_refs = read_refs_file(&cli.refs).context("Failed to load reference list")?;

    let mut prompt_source = StdinPrompt;
    let mut include_source = FsInclude::new(cli.include_base_dir());
    let report_resolve = resolve_refs(&c_refs, &mut prompt_source, &mut include_source)
        .with_context(|| format!("Failed to resolve {}", cli.refs.display()))?;
    debug!("{report_resolve}");

    let report_stage = stage_paths(&report_resolve.l_paths, &cli.out, cli.stage_options())
        .with_context(|| format!("Failed to stage into {}", cli.out.display()))?;
    debug!("{report_stage}");

    if report_stage.error_count() > 0 {
        for spec_error in &report_stage.errors {
            error!("{}: {}", spec_error.path.display(), spec_error.exception);
        }
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
