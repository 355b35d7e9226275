//! Scope stack of cumulative composed-path prefixes.
//!
//! Entry `i` is always entry `i - 1` (or `""`) followed by the fragment that
//! produced it.

#[derive(Debug, Default)]
pub(crate) struct ScopeStack {
    l_scopes: Vec<String>,
}

impl ScopeStack {
    pub(crate) fn len(&self) -> usize {
        self.l_scopes.len()
    }

    fn top(&self) -> &str {
        self.l_scopes.last().map(String::as_str).unwrap_or("")
    }

    /// Push `top + fragment`.
    pub(crate) fn push_scope(&mut self, fragment: &str) {
        let c_scope = format!("{}{fragment}", self.top());
        self.l_scopes.push(c_scope);
    }

    /// Replace the top with `below + fragment`; returns the previous top.
    pub(crate) fn hold_scope(&mut self, fragment: &str) -> Option<String> {
        let c_top_prev = self.l_scopes.pop()?;
        self.push_scope(fragment);
        Some(c_top_prev)
    }

    /// Pop the top, unwind until at most `n_depth` entries remain, then push
    /// `top + fragment`. Returns the popped top.
    pub(crate) fn descend_scope(&mut self, fragment: &str, n_depth: usize) -> Option<String> {
        let c_top_prev = self.l_scopes.pop()?;
        // Bound is the live length, so the stack ends at exactly `n_depth`.
        while n_depth < self.l_scopes.len() {
            self.l_scopes.pop();
        }
        self.push_scope(fragment);
        Some(c_top_prev)
    }

    /// Consume the stack, yielding the pending top if any.
    pub(crate) fn finish(mut self) -> Option<String> {
        self.l_scopes.pop()
    }
}
