//! Directive parsing and the injectable sources that resolve directives.
//!
//! `::from` and `::prompt` are the only fragments with side effects. Both go
//! through a trait object supplied by the caller, so the interpreter itself
//! never touches the filesystem or the terminal directly.

use std::collections::{BTreeMap, VecDeque};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::conf::{C_DIRECTIVE_FROM, C_DIRECTIVE_PREFIX, C_DIRECTIVE_PROMPT};
use crate::spec::EnumDirective;

////////////////////////////////////////////////////////////////////////////////
// #region Parsing

/// Decode a fragment into a directive.
///
/// The name runs from after `::` to the first space; everything after that
/// space is the argument, kept verbatim.
pub fn parse_directive(fragment: &str) -> EnumDirective {
    let Some(c_body) = fragment.strip_prefix(C_DIRECTIVE_PREFIX) else {
        return EnumDirective::Literal(fragment.to_string());
    };
    let (c_name, c_arg) = c_body.split_once(' ').unwrap_or((c_body, ""));

    match c_name {
        C_DIRECTIVE_FROM => EnumDirective::Include(PathBuf::from(c_arg)),
        C_DIRECTIVE_PROMPT => EnumDirective::Prompt(c_arg.to_string()),
        _ => EnumDirective::Unknown(c_name.to_string()),
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Sources

/// Supplies replacement text for `::prompt`.
pub trait PromptSource {
    /// Show `message` and block until one line of input is available.
    fn prompt(&mut self, message: &str) -> io::Result<String>;
}

/// Supplies replacement text for `::from`.
pub trait IncludeSource {
    /// Read the whole include target.
    fn read_include(&mut self, path: &Path) -> io::Result<String>;
}

fn strip_line_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Terminal prompt: message to stdout, answer from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinPrompt;

impl PromptSource for StdinPrompt {
    fn prompt(&mut self, message: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(message.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a line was entered",
            ));
        }
        Ok(strip_line_terminator(line))
    }
}

/// Pre-recorded answers, handed out in order. Messages are kept for inspection.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompt {
    l_answers: VecDeque<String>,
    l_messages: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            l_answers: answers.into_iter().map(Into::into).collect(),
            l_messages: Vec::new(),
        }
    }

    /// Messages shown so far, in order.
    pub fn messages(&self) -> &[String] {
        &self.l_messages
    }
}

impl PromptSource for ScriptedPrompt {
    fn prompt(&mut self, message: &str) -> io::Result<String> {
        self.l_messages.push(message.to_string());
        self.l_answers.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted answer left")
        })
    }
}

/// Reads include targets from disk, relative to an optional base directory.
#[derive(Debug, Default, Clone)]
pub struct FsInclude {
    path_dir_base: Option<PathBuf>,
}

impl FsInclude {
    /// `None` resolves relative targets against the working directory.
    pub fn new(path_dir_base: Option<PathBuf>) -> Self {
        Self { path_dir_base }
    }

    /// Final path used for `path`.
    pub fn derive_include_path(&self, path: &Path) -> PathBuf {
        match &self.path_dir_base {
            Some(path_dir_base) => path_dir_base.join(path),
            None => path.to_path_buf(),
        }
    }
}

impl IncludeSource for FsInclude {
    fn read_include(&mut self, path: &Path) -> io::Result<String> {
        fs::read_to_string(self.derive_include_path(path))
    }
}

/// In-memory include table; unknown paths fail with `NotFound`.
#[derive(Debug, Default, Clone)]
pub struct MapInclude {
    dict_files: BTreeMap<PathBuf, String>,
}

impl MapInclude {
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.dict_files.insert(path.into(), content.into());
        self
    }
}

impl IncludeSource for MapInclude {
    fn read_include(&mut self, path: &Path) -> io::Result<String> {
        self.dict_files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no include registered for {}", path.display()),
            )
        })
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
