//! Output directory reset and sequential flat copy orchestration.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::report::{ReportStage, ReportStageBuilder};
use crate::spec::{SpecStageOptions, StageError};
use crate::util::{
    compile_exclude_patterns, copy_file_with_metadata, derive_flat_destination_path, is_excluded,
    is_regular_file, is_same_file, reset_destination_dir,
};

/// Stage resolved paths into `dir_destination`.
///
/// This function performs:
/// 1. Exclude pattern compilation.
/// 2. Destination reset (remove recursively, recreate empty).
/// 3. In-order copy of every path naming an existing regular file to
///    `dir_destination/<basename>`. Later entries overwrite earlier ones.
/// 4. Report aggregation.
///
/// Missing paths and non-files are skipped without a log line. A `Copying
/// <path>` event is emitted for every file copied.
///
/// Returns [`StageError`] only for setup failures, before any file is copied.
/// Per-entry copy failures are collected into the report.
pub fn stage_paths<I, S, Q>(
    paths: I,
    dir_destination: Q,
    spec_stage_options: SpecStageOptions,
) -> Result<ReportStage, StageError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    Q: AsRef<Path>,
{
    let path_dir_dst = dir_destination.as_ref();
    let glob_exclude =
        compile_exclude_patterns(spec_stage_options.patterns_exclude_files.as_deref())?;
    let if_dry_run = spec_stage_options.if_dry_run;

    if !if_dry_run {
        reset_destination_dir(path_dir_dst)?;
    }

    let mut builder_stage_report = ReportStageBuilder::default();
    let mut set_names_copied: HashSet<PathBuf> = HashSet::new();

    for c_path in paths {
        let c_path = c_path.as_ref();
        builder_stage_report.add_requested();

        let path_file_src = Path::new(c_path);
        if c_path.is_empty() || !is_regular_file(path_file_src) {
            debug!(path = c_path, "not a regular file, skipped");
            builder_stage_report.add_skipped();
            continue;
        }
        let Some(path_file_dst) = derive_flat_destination_path(path_file_src, path_dir_dst) else {
            debug!(path = c_path, "no basename, skipped");
            builder_stage_report.add_skipped();
            continue;
        };
        let name_file = path_file_src
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if is_excluded(&name_file, glob_exclude.as_ref()) {
            debug!(path = c_path, "excluded by pattern");
            builder_stage_report.add_skipped();
            continue;
        }

        if if_dry_run {
            info!("Copying {c_path}");
            builder_stage_report.add_skipped();
            continue;
        }

        // Source already lives at its staged location (e.g. `out/a.txt`).
        if is_same_file(path_file_src, &path_file_dst) {
            info!("Copying {c_path}");
            set_names_copied.insert(path_file_dst.clone());
            builder_stage_report.add_copied(path_file_dst);
            continue;
        }

        match copy_file_with_metadata(
            path_file_src,
            &path_file_dst,
            spec_stage_options.if_preserve_metadata,
        ) {
            Ok(()) => {
                info!("Copying {c_path}");
                if !set_names_copied.insert(path_file_dst.clone()) {
                    debug!(path = c_path, dst = %path_file_dst.display(), "basename collision, overwrote");
                    builder_stage_report.add_warning(format!(
                        "Overwrote {} with {c_path}",
                        path_file_dst.display()
                    ));
                }
                builder_stage_report.add_copied(path_file_dst);
            }
            Err(e) => {
                warn!("Failed to copy {c_path} to {} ({e})", path_file_dst.display());
                builder_stage_report.add_error(path_file_dst, e.to_string());
            }
        }
    }

    Ok(builder_stage_report.build())
}
