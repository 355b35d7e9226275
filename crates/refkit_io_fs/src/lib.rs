//! `refkit_io_fs` v1:
//! Flat staging of resolved files into a freshly reset directory.
//!
//! - `conf`   : default names
//! - `stage`  : reset + sequential copy orchestration
//! - `spec`   : options/errors
//! - `report` : run-time report model
//! - `util`   : shared helper functions

pub mod conf;
pub mod report;
pub mod spec;
pub mod stage;
mod util;

pub use conf::C_NAME_DIR_STAGE_DEFAULT;
pub use report::{ReportStage, ReportStageBuilder};
pub use spec::{SpecStageError, SpecStageOptions, StageError};
pub use stage::stage_paths;
