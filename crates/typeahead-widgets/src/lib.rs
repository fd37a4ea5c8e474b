#![forbid(unsafe_code)]

//! Typeahead search bar widget.
//!
//! The widget owns the query text, the provider-ranked candidate list, the
//! highlight cursor and dropdown visibility. It does not draw: a host
//! renderer reads [`SearchBar::visible_candidates`] and reports the rects it
//! used through [`SearchBar::set_layout`].

pub mod config;
pub mod search_bar;

pub use config::{ConfigError, SearchBarConfig, SearchBarConfigParse, SuggestMode};
pub use search_bar::{
    Candidate, Corpus, DropdownState, EventOutcome, ExactMatchResolver, NavigationSink,
    NullProvider, Resolved, RouteNavigator, SearchBar, SearchBarAction, SearchBarLayout,
    SearchOutcome, SuggestionProvider, SuggestionTicket,
};
