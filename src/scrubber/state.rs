//! Per-run scrubbing state: the output buffer plus the element-context
//! flags that tag and text handlers consult.

/// Mutable state for one scrubbing run. A fresh value is created per run,
/// so no state leaks between inputs.
#[derive(Debug, Default)]
pub(crate) struct ScrubState {
    /// Output fragments, concatenated by [`ScrubState::finish`].
    fragments: Vec<String>,
    /// Nesting depth of `pre` elements.
    pub(crate) pre_nest: usize,
    /// Nesting depth of `code` elements.
    pub(crate) code_nest: usize,
    /// Inside a `script` element.
    pub(crate) in_script: bool,
    /// Inside a `style` element.
    pub(crate) in_style: bool,
    /// The next table cell is the first in its row and gets no delimiter.
    pub(crate) table_row_first_column: bool,
}

impl ScrubState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends one output fragment.
    pub(crate) fn push(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    /// Appends `count` newline characters. Zero appends nothing.
    pub(crate) fn push_newlines(&mut self, count: usize) {
        if count > 0 {
            self.fragments.push("\n".repeat(count));
        }
    }

    /// Tops the buffer up to at least `target` trailing newlines. An empty
    /// buffer is left empty, so block breaks never open the output.
    pub(crate) fn ensure_trailing_newlines(&mut self, target: usize) {
        if self.fragments.is_empty() {
            return;
        }
        let missing = target.saturating_sub(self.trailing_newlines(target));
        self.push_newlines(missing);
    }

    /// Counts consecutive newlines at the end of the buffer, looking back
    /// across fragment boundaries and stopping at `limit`.
    fn trailing_newlines(&self, limit: usize) -> usize {
        let mut count = 0;
        'fragments: for fragment in self.fragments.iter().rev() {
            for ch in fragment.chars().rev() {
                if ch != '\n' || count >= limit {
                    break 'fragments;
                }
                count += 1;
            }
        }
        count
    }

    /// Consumes the state and returns the accumulated output.
    pub(crate) fn finish(self) -> String {
        self.fragments.concat()
    }
}
