//! Staging defaults.

/// Conventional output directory name, reset on every run.
pub const C_NAME_DIR_STAGE_DEFAULT: &str = "target";
