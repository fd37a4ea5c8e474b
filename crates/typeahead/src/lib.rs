#![forbid(unsafe_code)]

//! Typeahead search bar public facade crate.
//!
//! Re-exports the event model, hit-test geometry and the search bar widget,
//! and offers a prelude for day-to-day usage.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use typeahead_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
    PasteEvent,
};
pub use typeahead_core::geometry::Rect;

#[cfg(feature = "tracing-json")]
pub use typeahead_core::logging::init_json;

// --- Widget re-exports -----------------------------------------------------

pub use typeahead_widgets::{
    Candidate, ConfigError, Corpus, DropdownState, EventOutcome, ExactMatchResolver,
    NavigationSink, NullProvider, Resolved, RouteNavigator, SearchBar, SearchBarAction,
    SearchBarConfig, SearchBarConfigParse, SearchBarLayout, SearchOutcome, SuggestMode,
    SuggestionProvider, SuggestionTicket,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for typeahead hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// One or more configuration values were rejected.
    Config(Vec<ConfigError>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(errors) => {
                write!(f, "invalid search bar configuration")?;
                for (i, err) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{err}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(errors) => errors
                .first()
                .map(|err| err as &(dyn std::error::Error + 'static)),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(vec![err])
    }
}

impl From<Vec<ConfigError>> for Error {
    fn from(errors: Vec<ConfigError>) -> Self {
        Self::Config(errors)
    }
}

/// Standard result type for typeahead APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Read [`SearchBarConfig`] from the environment, failing on any bad value.
///
/// [`SearchBarConfig::from_env`] silently falls back to defaults; this is the
/// strict variant for hosts that want misconfiguration to stop startup.
pub fn config_from_env() -> Result<SearchBarConfig> {
    let parsed = SearchBarConfig::from_env_with_diagnostics();
    if parsed.errors.is_empty() {
        Ok(parsed.config)
    } else {
        Err(Error::Config(parsed.errors))
    }
}

/// Build a search bar configured from the environment.
pub fn search_bar_from_env<P, R>(provider: P, resolver: R) -> Result<SearchBar<P, R>> {
    let config = config_from_env()?;
    Ok(SearchBar::new(provider, resolver).with_config(config))
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Candidate, Corpus, Error, Event, EventOutcome, KeyCode, KeyEvent, Modifiers, MouseEvent,
        NavigationSink, Rect, Result, SearchBar, SearchBarAction, SearchBarConfig,
        SearchBarLayout, SearchOutcome, SuggestionProvider,
    };

    pub use crate::{core, widgets};
}

pub use typeahead_core as core;
pub use typeahead_widgets as widgets;
