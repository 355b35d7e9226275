use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::spec::StageError;

////////////////////////////////////////////////////////////////////////////////
// #region PatternMatching

pub(crate) fn compile_exclude_patterns(
    patterns: Option<&[String]>,
) -> Result<Option<GlobSet>, StageError> {
    let Some(patterns) = patterns else {
        return Ok(None);
    };
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder_glob = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| StageError::InvalidPattern(e.to_string()))?;
        builder_glob.add(glob);
    }
    builder_glob
        .build()
        .map(Some)
        .map_err(|e| StageError::InvalidPattern(e.to_string()))
}

pub(crate) fn is_excluded(name_file: &str, patterns: Option<&GlobSet>) -> bool {
    patterns.is_some_and(|p| p.is_match(name_file))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region PathUtilities

/// Remove `path_dir_dst` if present, then recreate it empty.
pub(crate) fn reset_destination_dir(path_dir_dst: &Path) -> Result<(), StageError> {
    match fs::remove_dir_all(path_dir_dst) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(StageError::DestinationResetFailed {
                path: path_dir_dst.to_path_buf(),
                source,
            });
        }
    }
    fs::create_dir_all(path_dir_dst).map_err(|source| StageError::DestinationInitFailed {
        path: path_dir_dst.to_path_buf(),
        source,
    })
}

/// Existing regular file, symlinks followed.
pub(crate) fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// Both paths resolve to the same existing file.
pub(crate) fn is_same_file(path_a: &Path, path_b: &Path) -> bool {
    match (fs::canonicalize(path_a), fs::canonicalize(path_b)) {
        (Ok(path_a), Ok(path_b)) => path_a == path_b,
        _ => false,
    }
}

/// `path_dir_dst/<basename>`; `None` when `path_src` has no basename (`..`, `/`).
pub(crate) fn derive_flat_destination_path(
    path_src: &Path,
    path_dir_dst: &Path,
) -> Option<PathBuf> {
    path_src.file_name().map(|name| path_dir_dst.join(name))
}

pub(crate) fn copy_file_with_metadata(
    path_file_src: &Path,
    path_file_dst: &Path,
    if_preserve_metadata: bool,
) -> Result<(), io::Error> {
    // Earlier copy with the same basename may be read-only; last write wins.
    match fs::remove_file(path_file_dst) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    fs::copy(path_file_src, path_file_dst)?;
    #[cfg(target_os = "linux")]
    {
        if if_preserve_metadata {
            apply_metadata_linux(path_file_src, path_file_dst)?;
        }
    }
    #[cfg(not(target_os = "linux"))]
    {
        let _ = if_preserve_metadata;
    }
    Ok(())
}

#[cfg(target_os = "linux")]
fn apply_metadata_linux(path_file_src: &Path, path_file_dst: &Path) -> Result<(), io::Error> {
    use filetime::{FileTime, set_file_times};

    let stat_src = fs::metadata(path_file_src)?;
    let file_time_access = FileTime::from_last_access_time(&stat_src);
    let file_time_modify = FileTime::from_last_modification_time(&stat_src);
    set_file_times(path_file_dst, file_time_access, file_time_modify)?;

    copy_xattrs_linux(path_file_src, path_file_dst);
    fs::set_permissions(path_file_dst, stat_src.permissions())?;
    Ok(())
}

#[cfg(target_os = "linux")]
fn copy_xattrs_linux(path_file_src: &Path, path_file_dst: &Path) {
    let iter_xattr_names = match xattr::list(path_file_src) {
        Ok(v) => v,
        Err(_) => return,
    };

    for name in iter_xattr_names {
        let Some(raw_value) = xattr::get(path_file_src, &name).ok().flatten() else {
            continue;
        };
        let _ = xattr::set(path_file_dst, &name, &raw_value);
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::{
        compile_exclude_patterns, derive_flat_destination_path, is_excluded, is_same_file,
    };
    use crate::spec::StageError;

    #[test]
    fn derive_flat_destination_path_drops_directories() {
        let path_dir_dst = Path::new("target");
        assert_eq!(
            derive_flat_destination_path(Path::new("Game/Managed/Core.dll"), path_dir_dst),
            Some(PathBuf::from("target/Core.dll"))
        );
        assert_eq!(
            derive_flat_destination_path(Path::new("a.txt"), path_dir_dst),
            Some(PathBuf::from("target/a.txt"))
        );
        assert_eq!(derive_flat_destination_path(Path::new("x/.."), path_dir_dst), None);
    }

    #[test]
    fn is_same_file_compares_resolved_paths() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path_file = tmp.path().join("a.txt");
        std::fs::write(&path_file, "A").expect("write");
        std::fs::create_dir_all(tmp.path().join("sub")).expect("mkdir");

        assert!(is_same_file(&path_file, &tmp.path().join("sub/../a.txt")));
        assert!(!is_same_file(&path_file, &tmp.path().join("b.txt")));
    }

    #[test]
    fn exclude_patterns_match_basenames() {
        let l_patterns = vec!["*.pdb".to_string()];
        let patterns = compile_exclude_patterns(Some(l_patterns.as_slice()))
            .expect("compile")
            .expect("some");
        assert!(is_excluded("Core.pdb", Some(&patterns)));
        assert!(!is_excluded("Core.dll", Some(&patterns)));
        assert!(!is_excluded("Core.pdb", None));
        let l_empty: Vec<String> = Vec::new();
        assert!(
            compile_exclude_patterns(Some(l_empty.as_slice()))
                .expect("compile")
                .is_none()
        );
    }

    #[test]
    fn invalid_exclude_pattern_rejected() {
        let l_patterns = vec!["a[".to_string()];
        let err = compile_exclude_patterns(Some(l_patterns.as_slice())).expect_err("must fail");
        assert!(matches!(err, StageError::InvalidPattern(_)));
    }
}
