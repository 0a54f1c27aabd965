#![forbid(unsafe_code)]

//! Visual state for one animated run.
//!
//! The driver owns a [`VisualState`] and mutates it from inside its own
//! observer adapters; a front end reads it between frames to decide which
//! squares to highlight or dim. The algorithms themselves never see this
//! type — they only ever talk to the observer hooks.

/// Which indices the current (or last finished) run wants emphasized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisualState {
    /// Indices currently under inspection (search cursor, comparison pair
    /// anchor, binary-search window, quick-sort pivot).
    pub highlighted: Vec<usize>,
    /// Indices settled into their final sorted position (quick sort only).
    pub dimmed: Vec<usize>,
    /// Whether the last search run located its target.
    pub found: bool,
}

impl VisualState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the highlight set with a single index.
    pub fn highlight_only(&mut self, index: usize) {
        self.highlighted.clear();
        self.highlighted.push(index);
    }

    /// Replace the highlight set with the inclusive `[lower, upper]` window.
    ///
    /// An empty window (`upper < lower`) clears the highlights; that is what
    /// binary search reports on an empty sequence.
    pub fn highlight_window(&mut self, lower: isize, upper: isize) {
        self.highlighted.clear();
        if upper >= lower {
            debug_assert!(lower >= 0);
            self.highlighted.extend(lower as usize..=upper as usize);
        }
    }

    /// Forget everything from a previous run.
    pub fn clear(&mut self) {
        self.highlighted.clear();
        self.dimmed.clear();
        self.found = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_only_replaces_previous_highlights() {
        let mut state = VisualState::new();
        state.highlighted = vec![1, 2, 3];
        state.highlight_only(7);
        assert_eq!(state.highlighted, [7]);
    }

    #[test]
    fn highlight_window_expands_inclusive_bounds() {
        let mut state = VisualState::new();
        state.highlight_window(2, 5);
        assert_eq!(state.highlighted, [2, 3, 4, 5]);

        state.highlight_window(4, 4);
        assert_eq!(state.highlighted, [4]);
    }

    #[test]
    fn empty_window_clears_highlights() {
        let mut state = VisualState::new();
        state.highlighted = vec![0, 1];
        state.highlight_window(0, -1);
        assert!(state.highlighted.is_empty());
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut state = VisualState {
            highlighted: vec![1],
            dimmed: vec![2],
            found: true,
        };
        state.clear();
        assert_eq!(state, VisualState::default());
    }
}
