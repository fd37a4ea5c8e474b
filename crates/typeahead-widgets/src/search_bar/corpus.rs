#![forbid(unsafe_code)]

//! In-memory candidate set.
//!
//! [`Corpus`] is the simplest provider/resolver pair: case-insensitive
//! prefix matches first, then substring matches, each tier in insertion
//! order. There is no fuzzy matching; hosts needing real ranking plug in
//! their own [`SuggestionProvider`].

use std::sync::Arc;

use super::provider::{Candidate, ExactMatchResolver, Resolved, SuggestionProvider};

#[derive(Debug)]
struct Entry {
    candidate: Candidate,
    /// Lowercased name, computed once at construction.
    folded: String,
}

/// Immutable candidate set shared cheaply between provider and resolver.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Arc<[Entry]>,
    max_results: Option<usize>,
}

impl Corpus {
    pub fn new(candidates: impl IntoIterator<Item = Candidate>) -> Self {
        let entries: Vec<Entry> = candidates
            .into_iter()
            .map(|candidate| Entry {
                folded: candidate.name.to_lowercase(),
                candidate,
            })
            .collect();
        Self {
            entries: entries.into(),
            max_results: None,
        }
    }

    /// Cap the number of suggestions returned per query (builder).
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = Some(max);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.entries.iter().map(|e| &e.candidate)
    }
}

impl FromIterator<Candidate> for Corpus {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl SuggestionProvider for Corpus {
    fn suggest(&self, prefix: &str) -> Vec<Candidate> {
        let needle = prefix.to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let limit = self.max_results.unwrap_or(usize::MAX);

        let prefix_hits = self.entries.iter().filter(|e| e.folded.starts_with(&needle));
        let substring_hits = self
            .entries
            .iter()
            .filter(|e| !e.folded.starts_with(&needle) && e.folded.contains(&needle));

        prefix_hits
            .chain(substring_hits)
            .take(limit)
            .map(|e| e.candidate.clone())
            .collect()
    }
}

impl ExactMatchResolver for Corpus {
    fn resolve(&self, name: &str) -> Option<Resolved> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|e| e.folded == needle)
            .map(|e| Resolved::new(e.candidate.identifier.clone()))
    }
}
