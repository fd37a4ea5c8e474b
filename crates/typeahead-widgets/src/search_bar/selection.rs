#![forbid(unsafe_code)]

//! Highlight cursor and dropdown visibility.
//!
//! [`Selection`] is the Closed/Open half of the search bar. It knows nothing
//! about query text or providers; callers pass the live candidate count into
//! every move so the index can never outlive the list it points into.

/// Visibility of the candidate dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

/// Index after a forward move over `len` candidates, wrapping to the top.
///
/// `None` (nothing highlighted) moves to the first entry. An empty list has
/// nothing to highlight.
#[must_use]
pub fn next_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        Some(i) if i + 1 < len => Some(i + 1),
        _ => Some(0),
    }
}

/// Index after a backward move over `len` candidates, wrapping to the bottom.
///
/// Both `None` and the first entry wrap to the last entry.
#[must_use]
pub fn prev_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        Some(i) if i > 0 && i < len => Some(i - 1),
        _ => Some(len - 1),
    }
}

/// Selection state owned by a search bar.
///
/// # Invariants
///
/// 1. `index` is `None` or `< len` for the `len` last passed in.
/// 2. `scroll_offset <= index` and `index < scroll_offset + max_visible`
///    after every move.
/// 3. Closing always clears `index`.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    index: Option<usize>,
    state: DropdownState,
    scroll_offset: usize,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn state(&self) -> DropdownState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DropdownState::Open
    }

    /// First candidate row inside the visible window.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Drop the highlight. Called whenever the candidate list is replaced.
    pub fn reset(&mut self) {
        self.index = None;
        self.scroll_offset = 0;
    }

    pub fn open(&mut self) {
        self.state = DropdownState::Open;
    }

    pub fn close(&mut self) {
        self.state = DropdownState::Closed;
        self.reset();
    }

    /// Cyclic forward move.
    pub fn move_next(&mut self, len: usize, max_visible: usize) {
        self.index = next_index(self.index, len);
        self.adjust_scroll(max_visible);
    }

    /// Cyclic backward move.
    pub fn move_prev(&mut self, len: usize, max_visible: usize) {
        self.index = prev_index(self.index, len);
        self.adjust_scroll(max_visible);
    }

    /// Move down one page, stopping at the last entry.
    pub fn page_down(&mut self, len: usize, max_visible: usize) {
        if len == 0 {
            return;
        }
        let step = max_visible.max(1);
        self.index = Some(match self.index {
            Some(i) => i.saturating_add(step).min(len - 1),
            None => (step - 1).min(len - 1),
        });
        self.adjust_scroll(max_visible);
    }

    /// Move up one page, stopping at the first entry.
    pub fn page_up(&mut self, len: usize, max_visible: usize) {
        if len == 0 {
            return;
        }
        let step = max_visible.max(1);
        self.index = Some(self.index.map_or(0, |i| i.min(len - 1).saturating_sub(step)));
        self.adjust_scroll(max_visible);
    }

    pub fn first(&mut self, len: usize) {
        if len > 0 {
            self.index = Some(0);
            self.scroll_offset = 0;
        }
    }

    pub fn last(&mut self, len: usize, max_visible: usize) {
        if len > 0 {
            self.index = Some(len - 1);
            self.adjust_scroll(max_visible);
        }
    }

    /// Keep the highlighted row inside the visible window.
    fn adjust_scroll(&mut self, max_visible: usize) {
        let Some(selected) = self.index else {
            return;
        };
        let window = max_visible.max(1);
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset.saturating_add(window) {
            self.scroll_offset = selected + 1 - window;
        }
    }
}
