#![forbid(unsafe_code)]

//! Query controller: text changes and the candidate list they produce.
//!
//! Every change to the query text replaces the candidate list and clears the
//! highlight. In [`SuggestMode::Sync`] the provider is called inline; in
//! [`SuggestMode::Deferred`] a [`SuggestionTicket`] is handed out and only
//! the ticket of the latest change may install results.

use typeahead_core::{debug, trace};
use unicode_segmentation::UnicodeSegmentation;

use super::provider::{Candidate, SuggestionProvider};
use super::{SearchBar, SearchBarAction};
use crate::config::SuggestMode;

/// Claim on the result of one deferred suggestion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionTicket {
    generation: u64,
    query: String,
}

impl SuggestionTicket {
    /// Generation the ticket was issued for.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Query text the host should pass to its provider.
    pub fn query(&self) -> &str {
        &self.query
    }
}

impl<P, R> SearchBar<P, R>
where
    P: SuggestionProvider,
{
    /// Replace the query and refresh candidates from the provider inline.
    ///
    /// An empty `new_text` clears the candidates and closes the dropdown
    /// without calling the provider.
    pub fn on_text_changed(&mut self, new_text: impl Into<String>) {
        if let Some(ticket) = self.begin_text_change(new_text) {
            let results = self.provider.suggest(ticket.query());
            self.install_candidates(results);
        }
    }

    /// Route an edit through the configured [`SuggestMode`].
    pub(super) fn edit_query(&mut self, new_text: String) -> Option<SearchBarAction> {
        match self.config.suggest_mode {
            SuggestMode::Sync => {
                self.on_text_changed(new_text);
                None
            }
            SuggestMode::Deferred => self
                .begin_text_change(new_text)
                .map(SearchBarAction::SuggestionsRequested),
        }
    }

    pub(super) fn push_char(&mut self, c: char) -> Option<SearchBarAction> {
        let mut text = self.query.clone();
        text.push(c);
        self.edit_query(text)
    }

    /// Remove the last grapheme cluster. No-op on an empty query.
    pub(super) fn pop_grapheme(&mut self) -> Option<SearchBarAction> {
        let (cut, _) = self.query.grapheme_indices(true).next_back()?;
        let text = self.query[..cut].to_string();
        self.edit_query(text)
    }

    pub(super) fn clear_query(&mut self) -> Option<SearchBarAction> {
        if self.query.is_empty() {
            return None;
        }
        self.edit_query(String::new())
    }

    /// Append pasted text, flattening line breaks into spaces.
    pub(super) fn paste(&mut self, pasted: &str) -> Option<SearchBarAction> {
        let flattened: String = pasted
            .chars()
            .filter(|c| *c != '\r')
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        if flattened.is_empty() {
            return None;
        }
        let mut text = self.query.clone();
        text.push_str(&flattened);
        self.edit_query(text)
    }
}

impl<P, R> SearchBar<P, R> {
    /// Replace the query without calling the provider.
    ///
    /// Returns a ticket when the new text is non-empty; the host fetches
    /// suggestions for [`SuggestionTicket::query`] and hands them back via
    /// [`apply_suggestions`](Self::apply_suggestions). Any ticket issued
    /// earlier becomes stale.
    pub fn begin_text_change(&mut self, new_text: impl Into<String>) -> Option<SuggestionTicket> {
        self.query = new_text.into();
        self.generation = self.generation.wrapping_add(1);
        self.candidates.clear();
        self.selection.reset();
        self.dismissed = false;

        if self.query.is_empty() {
            self.pending = false;
            self.selection.close();
            debug!(generation = self.generation, "query cleared");
            return None;
        }

        self.pending = true;
        if self.config.hide_on_empty {
            // Stay closed until a non-empty result arrives.
            self.selection.close();
        } else {
            self.selection.open();
        }
        trace!(
            generation = self.generation,
            query_len = self.query.len(),
            "suggestions requested"
        );
        Some(SuggestionTicket {
            generation: self.generation,
            query: self.query.clone(),
        })
    }

    /// Install results for a deferred request.
    ///
    /// Returns `false` and leaves state untouched when the ticket is stale
    /// (a newer query was issued since) or was already applied.
    pub fn apply_suggestions(&mut self, ticket: &SuggestionTicket, results: Vec<Candidate>) -> bool {
        if ticket.generation != self.generation || !self.pending {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale suggestions"
            );
            return false;
        }
        self.install_candidates(results);
        true
    }

    fn install_candidates(&mut self, results: Vec<Candidate>) {
        self.candidates = results;
        self.pending = false;
        self.selection.reset();

        // A dismissal while the request was in flight wins.
        if !self.dismissed {
            if self.candidates.is_empty() && self.config.hide_on_empty {
                self.selection.close();
            } else {
                self.selection.open();
            }
        }
        debug!(
            generation = self.generation,
            query_len = self.query.len(),
            results = self.candidates.len(),
            visible = self.selection.is_open(),
            "suggestions refreshed"
        );
    }
}
