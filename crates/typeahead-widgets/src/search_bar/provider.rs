#![forbid(unsafe_code)]

//! Contracts between the search bar and the outside world.
//!
//! The widget never ranks, resolves, or routes on its own. It calls out
//! through three seams:
//!
//! - [`SuggestionProvider`]: ranked candidates for a query prefix
//! - [`ExactMatchResolver`]: canonical record for a finalized query
//! - [`NavigationSink`]: host routing, fired only after a successful resolve
//!
//! Closures implement all three, so tests and small hosts can wire the widget
//! without defining types.

/// One ranked suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    /// Display text. Written into the query on commit.
    pub name: String,
    /// Canonical identifier of the record behind the suggestion.
    pub identifier: String,
}

impl Candidate {
    pub fn new(name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
        }
    }
}

/// Result of an exact-match lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resolved {
    pub identifier: String,
}

impl Resolved {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

impl From<Candidate> for Resolved {
    fn from(candidate: Candidate) -> Self {
        Self {
            identifier: candidate.identifier,
        }
    }
}

/// Source of ranked suggestions.
///
/// Must be deterministic for a fixed corpus snapshot. The order of the
/// returned vector is the display order; the widget never re-sorts it.
pub trait SuggestionProvider {
    fn suggest(&self, prefix: &str) -> Vec<Candidate>;
}

impl<F> SuggestionProvider for F
where
    F: Fn(&str) -> Vec<Candidate>,
{
    fn suggest(&self, prefix: &str) -> Vec<Candidate> {
        self(prefix)
    }
}

/// Provider for hosts that fetch suggestions themselves.
///
/// Pair it with [`SuggestMode::Deferred`](crate::config::SuggestMode::Deferred)
/// and feed results back through `SearchBar::apply_suggestions`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProvider;

impl SuggestionProvider for NullProvider {
    fn suggest(&self, _prefix: &str) -> Vec<Candidate> {
        Vec::new()
    }
}

/// Lookup of a finalized query.
pub trait ExactMatchResolver {
    fn resolve(&self, name: &str) -> Option<Resolved>;
}

impl<F> ExactMatchResolver for F
where
    F: Fn(&str) -> Option<Resolved>,
{
    fn resolve(&self, name: &str) -> Option<Resolved> {
        self(name)
    }
}

/// Host routing layer.
pub trait NavigationSink {
    fn navigate_to(&mut self, identifier: &str);
}

impl<F> NavigationSink for F
where
    F: FnMut(&str),
{
    fn navigate_to(&mut self, identifier: &str) {
        self(identifier)
    }
}

/// Turns identifiers into route paths before handing them to the host.
///
/// ```ignore
/// let mut nav = RouteNavigator::new("/product/", |path| router.push(path));
/// bar.execute_search(&mut nav);
/// ```
#[derive(Debug, Clone)]
pub struct RouteNavigator<F> {
    prefix: String,
    on_route: F,
}

impl<F> RouteNavigator<F>
where
    F: FnMut(String),
{
    pub fn new(prefix: impl Into<String>, on_route: F) -> Self {
        Self {
            prefix: prefix.into(),
            on_route,
        }
    }

    /// Route path for an identifier.
    pub fn route_for(&self, identifier: &str) -> String {
        format!("{}{}", self.prefix, identifier)
    }
}

impl<F> NavigationSink for RouteNavigator<F>
where
    F: FnMut(String),
{
    fn navigate_to(&mut self, identifier: &str) {
        let route = self.route_for(identifier);
        (self.on_route)(route);
    }
}
