#![forbid(unsafe_code)]

//! Search bar widget with incremental suggestions.
//!
//! This module provides a typeahead search field with:
//! - Provider-ranked suggestions refreshed on every keystroke
//! - Cyclic keyboard navigation over the dropdown
//! - Commit (write the highlighted name into the query) and cancel
//! - Pointer commit by row hit testing or by textual position indicator
//! - Exact-match resolve and navigation on an explicit search action
//! - Last-keystroke-wins delivery for asynchronous providers
//!
//! # Usage
//!
//! ```ignore
//! let corpus = Corpus::new(products);
//! let mut bar = SearchBar::new(corpus.clone(), corpus);
//!
//! // In your update loop, handle events:
//! let outcome = bar.handle_event(&event);
//! match outcome.action {
//!     Some(SearchBarAction::SearchRequested) => {
//!         bar.execute_search(&mut bar_router);
//!     }
//!     Some(SearchBarAction::Committed { name, .. }) => { /* query is now `name` */ }
//!     _ => {}
//! }
//! // `outcome.consumed` tells the host to skip its own handling of the event.
//!
//! // A renderer draws the rows it gets from `visible_candidates()` and
//! // reports where it put them:
//! bar.set_layout(SearchBarLayout { rows, button });
//! ```
//!
//! # Submodules
//!
//! - [`provider`]: suggestion, resolve, and navigation contracts
//! - [`corpus`]: in-memory provider/resolver
//! - [`query`]: query controller and deferred suggestion tickets
//! - [`selection`]: highlight cursor and dropdown visibility

pub mod corpus;
pub mod provider;
pub mod query;
pub mod selection;

pub use corpus::Corpus;
pub use provider::{
    Candidate, ExactMatchResolver, NavigationSink, NullProvider, Resolved, RouteNavigator,
    SuggestionProvider,
};
pub use query::SuggestionTicket;
pub use selection::{DropdownState, Selection, next_index, prev_index};

use typeahead_core::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use typeahead_core::geometry::Rect;
use typeahead_core::{debug, debug_span};

use crate::config::SearchBarConfig;

// ---------------------------------------------------------------------------
// Actions and outcomes
// ---------------------------------------------------------------------------

/// Something the host may want to react to after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchBarAction {
    /// A candidate was written into the query and the dropdown closed.
    Committed { index: usize, name: String },
    /// The dropdown was closed without touching the query (Esc).
    Dismissed,
    /// The search button was clicked; the host should call `execute_search`.
    SearchRequested,
    /// Deferred mode only: fetch suggestions for this ticket.
    SuggestionsRequested(SuggestionTicket),
}

/// Result of [`SearchBar::handle_event`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// The widget handled the event; the host must suppress its default
    /// behaviour (cursor moves, form submission, ...).
    pub consumed: bool,
    pub action: Option<SearchBarAction>,
}

impl EventOutcome {
    fn ignored() -> Self {
        Self::default()
    }

    fn consumed(action: Option<SearchBarAction>) -> Self {
        Self {
            consumed: true,
            action,
        }
    }
}

/// Result of [`SearchBar::execute_search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query resolved and the sink was told to navigate.
    Navigated(String),
    /// No exact match. Nothing else happened.
    NoMatch,
}

/// Screen rects reported by the host renderer, used for pointer hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchBarLayout {
    /// One row per visible candidate, top row = `scroll_offset`.
    pub rows: Rect,
    /// The search button.
    pub button: Rect,
}

// ---------------------------------------------------------------------------
// Search Bar Widget
// ---------------------------------------------------------------------------

/// Typeahead search field with a suggestion dropdown.
///
/// # Invariants
///
/// 1. The selected index is `None` or `< candidates.len()`.
/// 2. Every query change resets the selection and replaces the candidates.
/// 3. The dropdown is closed whenever the query is empty.
/// 4. Commit and cancel close the dropdown and never empty the query.
#[derive(Debug)]
pub struct SearchBar<P, R> {
    provider: P,
    resolver: R,
    /// Current query text.
    query: String,
    /// Provider output for `query`, in provider order.
    candidates: Vec<Candidate>,
    selection: Selection,
    /// User closed the dropdown since the last query change.
    dismissed: bool,
    /// Bumped on every query change; tickets from older generations are stale.
    generation: u64,
    /// A deferred request for `generation` is outstanding.
    pending: bool,
    config: SearchBarConfig,
    layout: SearchBarLayout,
}

impl<P, R> SearchBar<P, R> {
    /// Create an empty, closed search bar.
    pub fn new(provider: P, resolver: R) -> Self {
        Self {
            provider,
            resolver,
            query: String::new(),
            candidates: Vec::new(),
            selection: Selection::new(),
            dismissed: false,
            generation: 0,
            pending: false,
            config: SearchBarConfig::default(),
            layout: SearchBarLayout::default(),
        }
    }

    /// Set the configuration (builder).
    pub fn with_config(mut self, config: SearchBarConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SearchBarConfig {
        &self.config
    }

    /// Record where the host drew the dropdown rows and the search button.
    pub fn set_layout(&mut self, layout: SearchBarLayout) {
        self.layout = layout;
    }

    pub fn layout(&self) -> SearchBarLayout {
        self.layout
    }

    // --- State Access ---

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.index()
    }

    pub fn selected_candidate(&self) -> Option<&Candidate> {
        self.selection.index().and_then(|i| self.candidates.get(i))
    }

    pub fn dropdown_state(&self) -> DropdownState {
        self.selection.state()
    }

    pub fn is_dropdown_visible(&self) -> bool {
        self.selection.is_open()
    }

    /// Current suggestion generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// A deferred suggestion request has not been answered yet.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn scroll_offset(&self) -> usize {
        self.selection.scroll_offset()
    }

    /// Rows to draw: `(index, candidate, is_selected)` for the scroll window.
    ///
    /// Empty while the dropdown is closed.
    pub fn visible_candidates(&self) -> impl Iterator<Item = (usize, &Candidate, bool)> + '_ {
        let len = self.candidates.len();
        let start = self.selection.scroll_offset().min(len);
        let end = if self.selection.is_open() {
            start.saturating_add(self.config.max_visible.max(1)).min(len)
        } else {
            start
        };
        let selected = self.selection.index();
        self.candidates[start..end]
            .iter()
            .enumerate()
            .map(move |(offset, candidate)| {
                let index = start + offset;
                (index, candidate, selected == Some(index))
            })
    }

    /// Navigation sink that formats `route_prefix + identifier`.
    pub fn route_navigator<F>(&self, on_route: F) -> RouteNavigator<F>
    where
        F: FnMut(String),
    {
        RouteNavigator::new(self.config.route_prefix.clone(), on_route)
    }

    // --- Selection Transitions ---

    /// Highlight the next candidate, wrapping to the first. Open only.
    pub fn select_next(&mut self) {
        if self.selection.is_open() {
            self.selection
                .move_next(self.candidates.len(), self.config.max_visible);
        }
    }

    /// Highlight the previous candidate, wrapping to the last. Open only.
    pub fn select_prev(&mut self) {
        if self.selection.is_open() {
            self.selection
                .move_prev(self.candidates.len(), self.config.max_visible);
        }
    }

    /// Commit the highlighted candidate (Enter).
    ///
    /// No-op when nothing is highlighted or the dropdown is closed.
    pub fn commit_selected(&mut self) -> Option<SearchBarAction> {
        let index = self.selection.index()?;
        self.commit_index(index)
    }

    /// Commit the candidate at `index` directly.
    ///
    /// Ignored when the dropdown is closed or `index` is out of range, so a
    /// second commit after the dropdown closed does nothing.
    pub fn commit_index(&mut self, index: usize) -> Option<SearchBarAction> {
        if !self.selection.is_open() {
            return None;
        }
        let name = self.candidates.get(index)?.name.clone();
        self.query.clone_from(&name);
        // Results still in flight were asked for a query that no longer exists.
        self.generation = self.generation.wrapping_add(1);
        self.pending = false;
        self.dismissed = true;
        self.selection.close();
        debug!(index, query_len = self.query.len(), "candidate committed");
        Some(SearchBarAction::Committed { index, name })
    }

    /// Commit from a textual row position, as attached to rendered rows.
    ///
    /// Missing, malformed, or out-of-range indicators are ignored.
    pub fn click_candidate(&mut self, indicator: &str) -> Option<SearchBarAction> {
        let Ok(index) = indicator.trim().parse::<usize>() else {
            debug!(indicator, "ignoring click with malformed position");
            return None;
        };
        self.commit_index(index)
    }

    /// Close the dropdown without touching the query (Esc).
    pub fn cancel(&mut self) -> Option<SearchBarAction> {
        if !self.selection.is_open() {
            return None;
        }
        self.dismissed = true;
        self.selection.close();
        debug!("dropdown dismissed");
        Some(SearchBarAction::Dismissed)
    }
}

impl<P, R> SearchBar<P, R>
where
    R: ExactMatchResolver,
{
    /// Resolve the current query and navigate to the match, if any.
    ///
    /// A miss is an ordinary outcome: no navigation, no state change.
    pub fn execute_search<S>(&self, sink: &mut S) -> SearchOutcome
    where
        S: NavigationSink + ?Sized,
    {
        let span = debug_span!("search_bar.execute_search", query_len = self.query.len());
        let _guard = span.enter();

        match self.resolver.resolve(&self.query) {
            Some(resolved) => {
                debug!(identifier = %resolved.identifier, "search resolved");
                sink.navigate_to(&resolved.identifier);
                SearchOutcome::Navigated(resolved.identifier)
            }
            None => {
                debug!("search found no match");
                SearchOutcome::NoMatch
            }
        }
    }
}

impl<P, R> SearchBar<P, R>
where
    P: SuggestionProvider,
{
    /// Handle an input event while the search field has focus.
    pub fn handle_event(&mut self, event: &Event) -> EventOutcome {
        let span = debug_span!("search_bar.handle_event", open = self.selection.is_open());
        let _guard = span.enter();

        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Paste(paste) => EventOutcome::consumed(self.paste(&paste.text)),
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> EventOutcome {
        if !key.is_actionable() {
            return EventOutcome::ignored();
        }
        let len = self.candidates.len();
        let page = self.config.max_visible;

        match key.code {
            // Arrow keys, Enter and Esc are always swallowed so the host
            // neither moves its text cursor nor submits.
            KeyCode::Down => {
                self.select_next();
                EventOutcome::consumed(None)
            }
            KeyCode::Up => {
                self.select_prev();
                EventOutcome::consumed(None)
            }
            KeyCode::Enter => EventOutcome::consumed(self.commit_selected()),
            KeyCode::Escape => EventOutcome::consumed(self.cancel()),

            KeyCode::PageDown if self.selection.is_open() => {
                self.selection.page_down(len, page);
                EventOutcome::consumed(None)
            }
            KeyCode::PageUp if self.selection.is_open() => {
                self.selection.page_up(len, page);
                EventOutcome::consumed(None)
            }
            KeyCode::Home if self.selection.is_open() => {
                self.selection.first(len);
                EventOutcome::consumed(None)
            }
            KeyCode::End if self.selection.is_open() => {
                self.selection.last(len, page);
                EventOutcome::consumed(None)
            }

            KeyCode::Backspace => EventOutcome::consumed(self.pop_grapheme()),
            // Ctrl+U: clear query
            KeyCode::Char('u') if key.ctrl() => EventOutcome::consumed(self.clear_query()),
            KeyCode::Char(c) if !key.ctrl() && !key.alt() => {
                EventOutcome::consumed(self.push_char(c))
            }
            _ => EventOutcome::ignored(),
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> EventOutcome {
        let (x, y) = mouse.position();
        let over_rows = self.selection.is_open() && self.layout.rows.contains(x, y);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.layout.button.contains(x, y) {
                    return EventOutcome::consumed(Some(SearchBarAction::SearchRequested));
                }
                if over_rows && let Some(row) = self.layout.rows.row_of(x, y) {
                    let index = self.selection.scroll_offset() + usize::from(row);
                    // Empty space under a short list behaves like a miss.
                    if let Some(action) = self.commit_index(index) {
                        return EventOutcome::consumed(Some(action));
                    }
                }
                EventOutcome::ignored()
            }
            MouseEventKind::ScrollDown if over_rows => {
                self.select_next();
                EventOutcome::consumed(None)
            }
            MouseEventKind::ScrollUp if over_rows => {
                self.select_prev();
                EventOutcome::consumed(None)
            }
            _ => EventOutcome::ignored(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod widget_tests {
    use super::*;
    use typeahead_core::event::{KeyEventKind, Modifiers, PasteEvent};

    fn fruit_corpus() -> Corpus {
        Corpus::new([
            Candidate::new("Apple", "a-1"),
            Candidate::new("Banana", "b-1"),
            Candidate::new("Cherry", "c-1"),
        ])
    }

    /// Bar whose provider returns the whole corpus for any query.
    fn fruit_bar() -> SearchBar<impl Fn(&str) -> Vec<Candidate>, Corpus> {
        let corpus = fruit_corpus();
        let all: Vec<Candidate> = corpus.iter().cloned().collect();
        SearchBar::new(move |_: &str| all.clone(), corpus)
    }

    fn key(code: KeyCode) -> Event {
        Event::key(code)
    }

    fn type_text<P: SuggestionProvider, R>(bar: &mut SearchBar<P, R>, text: &str) {
        for c in text.chars() {
            bar.handle_event(&key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn new_bar_is_closed_and_empty() {
        let bar = fruit_bar();
        assert!(!bar.is_dropdown_visible());
        assert_eq!(bar.dropdown_state(), DropdownState::Closed);
        assert_eq!(bar.query(), "");
        assert!(bar.candidates().is_empty());
        assert_eq!(bar.selected_index(), None);
    }

    #[test]
    fn typing_opens_dropdown() {
        let mut bar = fruit_bar();
        type_text(&mut bar, "a");
        assert_eq!(bar.query(), "a");
        assert!(bar.is_dropdown_visible());
        assert_eq!(bar.candidates().len(), 3);
    }

    #[test]
    fn arrow_scenario_commits_banana() {
        let mut bar = fruit_bar();
        type_text(&mut bar, "a");

        bar.handle_event(&key(KeyCode::Up));
        assert_eq!(bar.selected_index(), Some(2));
        bar.handle_event(&key(KeyCode::Down));
        assert_eq!(bar.selected_index(), Some(0));
        bar.handle_event(&key(KeyCode::Down));
        assert_eq!(bar.selected_index(), Some(1));

        let outcome = bar.handle_event(&key(KeyCode::Enter));
        assert!(outcome.consumed);
        assert_eq!(
            outcome.action,
            Some(SearchBarAction::Committed {
                index: 1,
                name: "Banana".into()
            })
        );
        assert_eq!(bar.query(), "Banana");
        assert!(!bar.is_dropdown_visible());
    }

    #[test]
    fn enter_without_selection_is_consumed_noop() {
        let mut bar = fruit_bar();
        type_text(&mut bar, "ch");
        let outcome = bar.handle_event(&key(KeyCode::Enter));
        assert!(outcome.consumed);
        assert_eq!(outcome.action, None);
        assert_eq!(bar.query(), "ch");
        assert!(bar.is_dropdown_visible());
    }

    #[test]
    fn second_commit_is_noop() {
        let mut bar = fruit_bar();
        type_text(&mut bar, "b");
        assert!(bar.commit_index(0).is_some());
        assert_eq!(bar.commit_index(1), None);
        assert_eq!(bar.query(), "Apple");
        let outcome = bar.handle_event(&key(KeyCode::Enter));
        assert!(outcome.consumed);
        assert_eq!(outcome.action, None);
    }

    #[test]
    fn escape_closes_without_mutating_query() {
        let mut bar = fruit_bar();
        type_text(&mut bar, "ba");
        bar.handle_event(&key(KeyCode::Down));
        let outcome = bar.handle_event(&key(KeyCode::Escape));
        assert_eq!(outcome.action, Some(SearchBarAction::Dismissed));
        assert_eq!(bar.query(), "ba");
        assert!(!bar.is_dropdown_visible());

        // Closed: Esc is swallowed but reports nothing.
        let again = bar.handle_event(&key(KeyCode::Escape));
        assert!(again.consumed);
        assert_eq!(again.action, None);
    }

    #[test]
    fn navigation_keys_do_nothing_when_closed() {
        let mut bar = fruit_bar();
        type_text(&mut bar, "a");
        bar.cancel();
        bar.handle_event(&key(KeyCode::Down));
        assert_eq!(bar.selected_index(), None);
        assert!(!bar.handle_event(&key(KeyCode::Home)).consumed);
    }

    #[test]
    fn typing_after_cancel_reopens() {
        let mut bar = fruit_bar();
        type_text(&mut bar, "a");
        bar.cancel();
        type_text(&mut bar, "p");
        assert!(bar.is_dropdown_visible());
        assert_eq!(bar.query(), "ap");
    }

    #[test]
    fn key_release_is_ignored() {
        let mut bar = fruit_bar();
        type_text(&mut bar, "a");
        let release = Event::Key(KeyEvent::new(KeyCode::Down).with_kind(KeyEventKind::Release));
        let outcome = bar.handle_event(&release);
        assert!(!outcome.consumed);
        assert_eq!(bar.selected_index(), None);
    }

    #[test]
    fn backspace_and_ctrl_u_edit_query() {
        let mut bar = fruit_bar();
        type_text(&mut bar, "abc");
        bar.handle_event(&key(KeyCode::Down));
        bar.handle_event(&key(KeyCode::Backspace));
        assert_eq!(bar.query(), "ab");
        assert_eq!(bar.selected_index(), None);

        let ctrl_u = Event::Key(KeyEvent::new(KeyCode::Char('u')).with_modifiers(Modifiers::CTRL));
        bar.handle_event(&ctrl_u);
        assert_eq!(bar.query(), "");
        assert!(!bar.is_dropdown_visible());
    }

    #[test]
    fn ctrl_chars_other_than_u_are_ignored() {
        let mut bar = fruit_bar();
        let ctrl_a = Event::Key(KeyEvent::new(KeyCode::Char('a')).with_modifiers(Modifiers::CTRL));
        let outcome = bar.handle_event(&ctrl_a);
        assert!(!outcome.consumed);
        assert_eq!(bar.query(), "");
    }

    #[test]
    fn paste_appends() {
        let mut bar = fruit_bar();
        type_text(&mut bar, "a");
        bar.handle_event(&Event::Paste(PasteEvent::new("pp\nle")));
        assert_eq!(bar.query(), "app le");
        assert!(bar.is_dropdown_visible());
    }

    #[test]
    fn click_indicator_is_parsed_defensively() {
        let mut bar = fruit_bar();
        type_text(&mut bar, "c");
        assert_eq!(bar.click_candidate(""), None);
        assert_eq!(bar.click_candidate("abc"), None);
        assert_eq!(bar.click_candidate("-1"), None);
        assert_eq!(bar.click_candidate("7"), None);
        assert!(bar.is_dropdown_visible());
        assert_eq!(bar.query(), "c");

        let action = bar.click_candidate(" 2 ");
        assert_eq!(
            action,
            Some(SearchBarAction::Committed {
                index: 2,
                name: "Cherry".into()
            })
        );
        assert!(!bar.is_dropdown_visible());
    }

    #[test]
    fn mouse_click_on_row_commits() {
        let mut bar = fruit_bar();
        bar.set_layout(SearchBarLayout {
            rows: Rect::new(0, 2, 20, 3),
            button: Rect::new(22, 1, 8, 1),
        });
        type_text(&mut bar, "x");

        let outcome = bar.handle_event(&Event::Mouse(MouseEvent::left_click(5, 3)));
        assert!(outcome.consumed);
        assert_eq!(bar.query(), "Banana");
    }

    #[test]
    fn mouse_click_outside_rows_is_ignored() {
        let mut bar = fruit_bar();
        bar.set_layout(SearchBarLayout {
            rows: Rect::new(0, 2, 20, 3),
            button: Rect::new(22, 1, 8, 1),
        });
        type_text(&mut bar, "x");
        let outcome = bar.handle_event(&Event::Mouse(MouseEvent::left_click(5, 9)));
        assert!(!outcome.consumed);
        assert_eq!(bar.query(), "x");
        assert!(bar.is_dropdown_visible());
    }

    #[test]
    fn mouse_click_on_button_requests_search() {
        let mut bar = fruit_bar();
        bar.set_layout(SearchBarLayout {
            rows: Rect::new(0, 2, 20, 3),
            button: Rect::new(22, 1, 8, 1),
        });
        let outcome = bar.handle_event(&Event::Mouse(MouseEvent::left_click(25, 1)));
        assert_eq!(outcome.action, Some(SearchBarAction::SearchRequested));
    }

    #[test]
    fn scroll_wheel_moves_selection() {
        let mut bar = fruit_bar();
        bar.set_layout(SearchBarLayout {
            rows: Rect::new(0, 2, 20, 3),
            button: Rect::default(),
        });
        type_text(&mut bar, "x");
        let wheel = MouseEvent::new(MouseEventKind::ScrollUp, 1, 2);
        bar.handle_event(&Event::Mouse(wheel));
        assert_eq!(bar.selected_index(), Some(2));
    }

    #[test]
    fn scroll_wheel_down_moves_selection() {
        let mut bar = fruit_bar();
        bar.set_layout(SearchBarLayout {
            rows: Rect::new(0, 2, 20, 3),
            button: Rect::default(),
        });
        type_text(&mut bar, "x");
        let wheel = Event::Mouse(MouseEvent::new(MouseEventKind::ScrollDown, 1, 2));
        assert!(bar.handle_event(&wheel).consumed);
        assert_eq!(bar.selected_index(), Some(0));
        bar.handle_event(&wheel);
        bar.handle_event(&wheel);
        bar.handle_event(&wheel);
        assert_eq!(bar.selected_index(), Some(0));
    }

    #[test]
    fn page_down_with_unbounded_window_clamps() {
        let mut bar =
            fruit_bar().with_config(SearchBarConfig::default().with_max_visible(usize::MAX));
        type_text(&mut bar, "x");
        bar.handle_event(&key(KeyCode::Down));
        bar.handle_event(&key(KeyCode::Down));
        let outcome = bar.handle_event(&key(KeyCode::PageDown));
        assert!(outcome.consumed);
        assert_eq!(bar.selected_index(), Some(2));
        assert_eq!(bar.visible_candidates().count(), 3);
    }

    #[test]
    fn execute_search_navigates_on_match() {
        let mut bar = fruit_bar();
        type_text(&mut bar, "cherry");
        let mut routes = Vec::new();
        let mut nav = bar.route_navigator(|path| routes.push(path));
        let outcome = bar.execute_search(&mut nav);
        assert_eq!(outcome, SearchOutcome::Navigated("c-1".into()));
        drop(nav);
        assert_eq!(routes, vec!["/product/c-1".to_string()]);
    }

    #[test]
    fn execute_search_miss_is_silent() {
        let mut bar = fruit_bar();
        type_text(&mut bar, "Zzz");
        let mut calls = 0;
        let mut sink = |_: &str| calls += 1;
        assert_eq!(bar.execute_search(&mut sink), SearchOutcome::NoMatch);
        assert_eq!(calls, 0);
        assert_eq!(bar.query(), "Zzz");
    }

    #[test]
    fn visible_candidates_window() {
        let names: Vec<Candidate> = (0..8)
            .map(|i| Candidate::new(format!("item {i}"), i.to_string()))
            .collect();
        let mut bar = SearchBar::new(move |_: &str| names.clone(), ())
            .with_config(SearchBarConfig::default().with_max_visible(3));
        bar.on_text_changed("i");
        for _ in 0..5 {
            bar.handle_event(&key(KeyCode::Down));
        }
        let rows: Vec<(usize, bool)> = bar
            .visible_candidates()
            .map(|(index, _, selected)| (index, selected))
            .collect();
        assert_eq!(rows, vec![(2, false), (3, false), (4, true)]);
        assert_eq!(bar.scroll_offset(), 2);

        bar.cancel();
        assert_eq!(bar.visible_candidates().count(), 0);
    }

    #[test]
    fn page_keys_clamp() {
        let names: Vec<Candidate> = (0..8)
            .map(|i| Candidate::new(format!("item {i}"), i.to_string()))
            .collect();
        let mut bar = SearchBar::new(move |_: &str| names.clone(), ())
            .with_config(SearchBarConfig::default().with_max_visible(3));
        bar.on_text_changed("i");
        bar.handle_event(&key(KeyCode::End));
        assert_eq!(bar.selected_index(), Some(7));
        bar.handle_event(&key(KeyCode::PageDown));
        assert_eq!(bar.selected_index(), Some(7));
        bar.handle_event(&key(KeyCode::PageUp));
        assert_eq!(bar.selected_index(), Some(4));
        bar.handle_event(&key(KeyCode::Home));
        assert_eq!(bar.selected_index(), Some(0));
    }
}
