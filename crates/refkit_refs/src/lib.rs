//! `refkit_refs` v1:
//! Reference-list interpreter.
//!
//! Turns marker-nested reference text into an ordered list of composed paths.
//! - `conf`      : notation constants
//! - `spec`      : directive/transition enums and error types
//! - `directive` : directive parsing and the injectable prompt/include sources
//! - `report`    : run-time report model
//! - `resolve`   : line interpreter
//! - `scope`     : private scope stack

pub mod conf;
pub mod directive;
pub mod report;
pub mod resolve;
mod scope;
pub mod spec;

pub use conf::{
    C_DIRECTIVE_FROM, C_DIRECTIVE_PREFIX, C_DIRECTIVE_PROMPT, C_MARKER, C_NAME_REFS_FILE_DEFAULT,
};
pub use directive::{
    FsInclude, IncludeSource, MapInclude, PromptSource, ScriptedPrompt, StdinPrompt,
    parse_directive,
};
pub use report::{ReportResolve, ReportResolveBuilder};
pub use resolve::{RefResolver, read_refs_file, resolve_ref_paths, resolve_refs, split_line};
pub use spec::{EnumDepthTransition, EnumDirective, ResolveError};
