//! Interpreter models and top-level error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Decoded form of one line fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumDirective {
    /// Plain text, used as-is.
    Literal(String),
    /// `::from <path>`: replaced by the file contents.
    Include(PathBuf),
    /// `::prompt <message>`: replaced by one line of interactive input.
    Prompt(String),
    /// Any other `::<name>`: replaced by the empty string.
    Unknown(String),
}

/// Scope stack transition selected by a line's marker count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumDepthTransition {
    /// Deeper than the current top: push a new scope.
    Ascend,
    /// Same depth as the current top: emit the top and replace it.
    Hold,
    /// Shallower than the current top: emit the top and unwind.
    Descend,
}

impl EnumDepthTransition {
    /// Compare a declared depth against the current stack length.
    ///
    /// `n_depth` vs `n_scopes - 1`, shifted by one to stay unsigned.
    pub fn select(n_depth: usize, n_scopes: usize) -> Self {
        match (n_depth + 1).cmp(&n_scopes) {
            std::cmp::Ordering::Greater => Self::Ascend,
            std::cmp::Ordering::Equal => Self::Hold,
            std::cmp::Ordering::Less => Self::Descend,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Fatal interpretation failures. Any of these discards the partial path list.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Reference text or `::from` target could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Resource {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// A transition tried to pop from an empty scope stack.
    #[error("Malformed nesting at line {n_line}: {message}")]
    Structure {
        /// 1-based line number.
        n_line: usize,
        /// Description of the failed transition.
        message: String,
    },
    /// Interactive input could not be read for `::prompt`.
    #[error("Failed to read prompt input at line {n_line}: {source}")]
    Prompt {
        /// 1-based line number.
        n_line: usize,
        /// Underlying IO error.
        source: io::Error,
    },
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::EnumDepthTransition;

    #[test]
    fn select_transition_against_stack_length() {
        assert_eq!(EnumDepthTransition::select(0, 0), EnumDepthTransition::Ascend);
        assert_eq!(EnumDepthTransition::select(1, 1), EnumDepthTransition::Ascend);
        assert_eq!(EnumDepthTransition::select(0, 1), EnumDepthTransition::Hold);
        assert_eq!(EnumDepthTransition::select(2, 3), EnumDepthTransition::Hold);
        assert_eq!(EnumDepthTransition::select(0, 2), EnumDepthTransition::Descend);
        assert_eq!(EnumDepthTransition::select(1, 4), EnumDepthTransition::Descend);
    }
}
