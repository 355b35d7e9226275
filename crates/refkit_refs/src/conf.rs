//! Reference-list notation constants.

/// Character whose per-line count declares the nesting depth.
pub const C_MARKER: char = '"';
/// Prefix that turns a fragment into a directive.
pub const C_DIRECTIVE_PREFIX: &str = "::";
/// Directive name: substitute the verbatim contents of a file.
pub const C_DIRECTIVE_FROM: &str = "from";
/// Directive name: substitute one line of interactive input.
pub const C_DIRECTIVE_PROMPT: &str = "prompt";
/// Conventional reference-list file name.
pub const C_NAME_REFS_FILE_DEFAULT: &str = "refs.txt";
