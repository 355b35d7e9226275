//! Line interpreter: reference text to ordered path list.
//!
//! Each line contributes a marker count (its declared depth) and a fragment
//! (text after the last marker). The depth is compared with the scope stack
//! to pick a transition:
//! - Ascend: push `top + fragment`, emit nothing.
//! - Hold: emit the top, replace it with `below + fragment`.
//! - Descend: emit the top, unwind to `depth` entries, push `top + fragment`.
//!
//! At end of input the remaining top is emitted.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::conf::C_MARKER;
use crate::directive::{IncludeSource, PromptSource, parse_directive};
use crate::report::{ReportResolve, ReportResolveBuilder};
use crate::scope::ScopeStack;
use crate::spec::{EnumDepthTransition, EnumDirective, ResolveError};

/// Read a reference list from disk.
pub fn read_refs_file<P: AsRef<Path>>(path_refs: P) -> Result<String, ResolveError> {
    let path_refs = path_refs.as_ref();
    fs::read_to_string(path_refs).map_err(|source| ResolveError::Resource {
        path: path_refs.to_path_buf(),
        source,
    })
}

/// Split a line into `(marker count, fragment after the last marker)`.
pub fn split_line(line: &str) -> (usize, &str) {
    let n_depth = line.matches(C_MARKER).count();
    let c_fragment = match line.rfind(C_MARKER) {
        Some(n_idx) => &line[n_idx + C_MARKER.len_utf8()..],
        None => line,
    };
    (n_depth, c_fragment)
}

/// Interpreter bound to its prompt and include sources.
pub struct RefResolver<'a> {
    prompt_source: &'a mut dyn PromptSource,
    include_source: &'a mut dyn IncludeSource,
}

impl<'a> RefResolver<'a> {
    pub fn new(
        prompt_source: &'a mut dyn PromptSource,
        include_source: &'a mut dyn IncludeSource,
    ) -> Self {
        Self {
            prompt_source,
            include_source,
        }
    }

    /// Interpret `text` line by line.
    ///
    /// Lines are split like [`str::lines`]. Any error aborts the run and no
    /// partial path list is returned.
    pub fn resolve(&mut self, text: &str) -> Result<ReportResolve, ResolveError> {
        let mut builder_resolve = ReportResolveBuilder::default();
        let mut scopes = ScopeStack::default();

        for (n_idx, c_line) in text.lines().enumerate() {
            let n_line = n_idx + 1;
            builder_resolve.add_line();

            let (n_depth, c_fragment) = split_line(c_line);
            let c_spath = self.resolve_fragment(c_fragment, n_line, &mut builder_resolve)?;

            let enum_transition = EnumDepthTransition::select(n_depth, scopes.len());
            debug!(n_line, n_depth, n_scopes = scopes.len(), transition = ?enum_transition, "scope transition");
            match enum_transition {
                EnumDepthTransition::Ascend => scopes.push_scope(&c_spath),
                EnumDepthTransition::Hold => {
                    let c_prev = scopes
                        .hold_scope(&c_spath)
                        .ok_or_else(|| _empty_stack_error(n_line, enum_transition))?;
                    builder_resolve.add_path(c_prev);
                }
                EnumDepthTransition::Descend => {
                    let c_prev = scopes
                        .descend_scope(&c_spath, n_depth)
                        .ok_or_else(|| _empty_stack_error(n_line, enum_transition))?;
                    builder_resolve.add_path(c_prev);
                }
            }
        }

        if let Some(c_last) = scopes.finish() {
            builder_resolve.add_path(c_last);
        }
        Ok(builder_resolve.build())
    }

    fn resolve_fragment(
        &mut self,
        fragment: &str,
        n_line: usize,
        builder_resolve: &mut ReportResolveBuilder,
    ) -> Result<String, ResolveError> {
        let enum_directive = parse_directive(fragment);
        if !matches!(enum_directive, EnumDirective::Literal(_)) {
            builder_resolve.add_directive();
        }

        match enum_directive {
            EnumDirective::Literal(c_text) => Ok(c_text),
            EnumDirective::Include(path_include) => self
                .include_source
                .read_include(&path_include)
                .map_err(|source| ResolveError::Resource {
                    path: path_include,
                    source,
                }),
            EnumDirective::Prompt(c_message) => self
                .prompt_source
                .prompt(&c_message)
                .map_err(|source| ResolveError::Prompt { n_line, source }),
            EnumDirective::Unknown(c_name) => {
                let c_warning = format!("No such command {c_name}");
                warn!("{c_warning}");
                builder_resolve.add_warning(c_warning);
                Ok(String::new())
            }
        }
    }
}

fn _empty_stack_error(n_line: usize, enum_transition: EnumDepthTransition) -> ResolveError {
    ResolveError::Structure {
        n_line,
        message: format!("{enum_transition:?} transition on an empty scope stack"),
    }
}

/// Interpret `text` with the given sources.
pub fn resolve_refs(
    text: &str,
    prompt_source: &mut dyn PromptSource,
    include_source: &mut dyn IncludeSource,
) -> Result<ReportResolve, ResolveError> {
    RefResolver::new(prompt_source, include_source).resolve(text)
}

/// Like [`resolve_refs`], keeping only the path list.
pub fn resolve_ref_paths(
    text: &str,
    prompt_source: &mut dyn PromptSource,
    include_source: &mut dyn IncludeSource,
) -> Result<Vec<String>, ResolveError> {
    resolve_refs(text, prompt_source, include_source).map(|report| report.l_paths)
}

#[cfg(test)]
mod tests {
    use super::{read_refs_file, resolve_ref_paths, resolve_refs, split_line};
    use crate::directive::{FsInclude, MapInclude, ScriptedPrompt};
    use crate::spec::ResolveError;

    fn resolve_plain(text: &str) -> Vec<String> {
        resolve_ref_paths(
            text,
            &mut ScriptedPrompt::default(),
            &mut MapInclude::default(),
        )
        .expect("resolve")
    }

    #[test]
    fn split_line_counts_markers_anywhere() {
        assert_eq!(split_line("plain"), (0, "plain"));
        assert_eq!(split_line("\"a"), (1, "a"));
        assert_eq!(split_line("\"\"b.dll"), (2, "b.dll"));
        assert_eq!(split_line("x\"y\"z"), (2, "z"));
        assert_eq!(split_line("\"\""), (2, ""));
        assert_eq!(split_line(""), (0, ""));
    }

    #[test]
    fn empty_text_resolves_to_nothing() {
        assert!(resolve_plain("").is_empty());
    }

    #[test]
    fn single_line_is_flushed_at_end() {
        assert_eq!(resolve_plain("only.txt"), ["only.txt"]);
    }

    #[test]
    fn zero_marker_lines_ascend_once_then_hold() {
        assert_eq!(resolve_plain("a\nb\nc\n"), ["a", "b", "c"]);
    }

    #[test]
    fn flat_siblings_after_marked_root() {
        assert_eq!(
            resolve_plain("\"root\nfirst\nsecond"),
            ["root", "first", "second"]
        );
    }

    #[test]
    fn equal_markers_on_first_two_lines_ascend() {
        // Stack length is 1 at the second line, so depth 1 is deeper than the top.
        assert_eq!(resolve_plain("\"A\n\"B"), ["AB"]);
    }

    #[test]
    fn directory_prefix_with_children() {
        let c_text = "Game_Data/Managed/\n\"Core.dll\n\"Engine.dll\n\"UI.dll\n";
        assert_eq!(
            resolve_plain(c_text),
            [
                "Game_Data/Managed/Core.dll",
                "Game_Data/Managed/Engine.dll",
                "Game_Data/Managed/UI.dll",
            ]
        );
    }

    #[test]
    fn descend_emits_leaf_and_skips_intermediate_scope() {
        let c_text = "root/\n\"sub/\n\"\"a.txt\n\"\"b.txt\nother.txt";
        assert_eq!(
            resolve_plain(c_text),
            ["root/sub/a.txt", "root/sub/b.txt", "other.txt"]
        );
    }

    #[test]
    fn descend_by_one_level_keeps_outer_prefix() {
        let c_text = "root/\n\"sub/\n\"\"a.txt\n\"leaf.txt";
        assert_eq!(resolve_plain(c_text), ["root/sub/a.txt", "root/leaf.txt"]);
    }

    #[test]
    fn empty_lines_hold_with_empty_fragment() {
        assert_eq!(resolve_plain("a\n\nb"), ["a", "", "b"]);
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        assert_eq!(resolve_plain("dir/\r\n\"x.dll\r\n"), ["dir/x.dll"]);
    }

    #[test]
    fn lone_carriage_return_is_not_a_line_break() {
        assert_eq!(resolve_plain("a.txt\rb.txt\nc.txt"), ["a.txt\rb.txt", "c.txt"]);
    }

    #[test]
    fn include_contents_are_used_verbatim() {
        let mut include = MapInclude::default().with_file("gamedir.txt", "D:/Game/\n");
        let l_paths = resolve_ref_paths(
            "::from gamedir.txt\n\"Core.dll",
            &mut ScriptedPrompt::default(),
            &mut include,
        )
        .expect("resolve");
        assert_eq!(l_paths, ["D:/Game/\nCore.dll"]);
    }

    #[test]
    fn include_behind_markers_uses_last_fragment() {
        let mut include = MapInclude::default().with_file("name.txt", "Core.dll");
        let l_paths = resolve_ref_paths(
            "lib/\n\"::from name.txt",
            &mut ScriptedPrompt::default(),
            &mut include,
        )
        .expect("resolve");
        assert_eq!(l_paths, ["lib/Core.dll"]);
    }

    #[test]
    fn missing_include_aborts_resolution() {
        let err = resolve_ref_paths(
            "a\n::from nope.txt\nb",
            &mut ScriptedPrompt::default(),
            &mut MapInclude::default(),
        )
        .expect_err("must fail");
        assert!(matches!(err, ResolveError::Resource { ref path, .. } if path.ends_with("nope.txt")));
    }

    #[test]
    fn fs_include_reads_from_base_dir() {
        let tmp = tempfile::tempdir().expect("tempdir");
        std::fs::write(tmp.path().join("inc.txt"), "Plugins/").expect("write");

        let mut include = FsInclude::new(Some(tmp.path().to_path_buf()));
        let l_paths = resolve_ref_paths(
            "::from inc.txt\n\"a.dll",
            &mut ScriptedPrompt::default(),
            &mut include,
        )
        .expect("resolve");
        assert_eq!(l_paths, ["Plugins/a.dll"]);
    }

    #[test]
    fn prompt_answer_becomes_fragment() {
        let mut prompt = ScriptedPrompt::new(["C:/Game/"]);
        let l_paths = resolve_ref_paths(
            "::prompt Game folder: \n\"a.dll\n\"b.dll",
            &mut prompt,
            &mut MapInclude::default(),
        )
        .expect("resolve");
        assert_eq!(l_paths, ["C:/Game/a.dll", "C:/Game/b.dll"]);
        assert_eq!(prompt.messages(), ["Game folder: "]);
    }

    #[test]
    fn exhausted_prompt_is_fatal() {
        let err = resolve_ref_paths(
            "a\n::prompt Where? ",
            &mut ScriptedPrompt::default(),
            &mut MapInclude::default(),
        )
        .expect_err("must fail");
        assert!(matches!(err, ResolveError::Prompt { n_line: 2, .. }));
    }

    #[test]
    fn unknown_directive_warns_and_contributes_nothing() {
        let report = resolve_refs(
            "lib/\n\"::frobnicate x\n\"b.dll",
            &mut ScriptedPrompt::default(),
            &mut MapInclude::default(),
        )
        .expect("resolve");
        assert_eq!(report.l_paths, ["lib/", "lib/b.dll"]);
        assert_eq!(report.warnings, ["No such command frobnicate"]);
        assert_eq!(report.cnt_directives, 1);
        assert_eq!(report.cnt_lines, 3);
    }

    #[test]
    fn read_refs_file_missing_is_resource_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let err = read_refs_file(tmp.path().join("refs.txt")).expect_err("must fail");
        assert!(matches!(err, ResolveError::Resource { .. }));
        assert!(err.to_string().contains("refs.txt"));
    }
}
