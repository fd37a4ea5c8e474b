#![forbid(unsafe_code)]

//! Search bar configuration.
//!
//! Defaults reproduce the base behaviour: ten visible rows, the dropdown
//! stays open on an empty result, suggestions are fetched synchronously.
//! Every field can be overridden from the environment:
//!
//! | Variable | Field | Values |
//! |---|---|---|
//! | `TYPEAHEAD_MAX_VISIBLE` | `max_visible` | positive integer |
//! | `TYPEAHEAD_HIDE_ON_EMPTY` | `hide_on_empty` | `1/0/true/false/yes/no/on/off` |
//! | `TYPEAHEAD_ROUTE_PREFIX` | `route_prefix` | non-empty string |
//! | `TYPEAHEAD_SUGGEST_MODE` | `suggest_mode` | `sync` or `deferred` |

use std::env;
use std::fmt;

pub const ENV_MAX_VISIBLE: &str = "TYPEAHEAD_MAX_VISIBLE";
pub const ENV_HIDE_ON_EMPTY: &str = "TYPEAHEAD_HIDE_ON_EMPTY";
pub const ENV_ROUTE_PREFIX: &str = "TYPEAHEAD_ROUTE_PREFIX";
pub const ENV_SUGGEST_MODE: &str = "TYPEAHEAD_SUGGEST_MODE";

const DEFAULT_MAX_VISIBLE: usize = 10;
const DEFAULT_ROUTE_PREFIX: &str = "/product/";

/// How typing reaches the suggestion provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestMode {
    /// The provider is called inline on every query change.
    #[default]
    Sync,
    /// Query changes hand out a ticket; the host fetches and applies results.
    Deferred,
}

impl SuggestMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sync" | "inline" => Some(Self::Sync),
            "deferred" | "async" => Some(Self::Deferred),
            _ => None,
        }
    }
}

impl fmt::Display for SuggestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sync => f.write_str("sync"),
            Self::Deferred => f.write_str("deferred"),
        }
    }
}

/// Tunables for a [`SearchBar`](crate::search_bar::SearchBar).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarConfig {
    /// Rows in the scroll window; also the page size for PageUp/PageDown.
    pub max_visible: usize,
    /// Keep the dropdown closed when a non-empty query yields no candidates.
    pub hide_on_empty: bool,
    /// Prefix used by [`SearchBar::route_navigator`](crate::search_bar::SearchBar::route_navigator).
    pub route_prefix: String,
    pub suggest_mode: SuggestMode,
}

impl Default for SearchBarConfig {
    fn default() -> Self {
        Self {
            max_visible: DEFAULT_MAX_VISIBLE,
            hide_on_empty: false,
            route_prefix: DEFAULT_ROUTE_PREFIX.to_string(),
            suggest_mode: SuggestMode::Sync,
        }
    }
}

/// Configuration parse diagnostics (env + validation).
#[derive(Debug, Clone)]
pub struct SearchBarConfigParse {
    pub config: SearchBarConfig,
    pub errors: Vec<ConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl SearchBarConfig {
    pub fn with_max_visible(mut self, n: usize) -> Self {
        self.max_visible = n;
        self
    }

    pub fn with_hide_on_empty(mut self, hide: bool) -> Self {
        self.hide_on_empty = hide;
        self
    }

    pub fn with_route_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.route_prefix = prefix.into();
        self
    }

    pub fn with_suggest_mode(mut self, mode: SuggestMode) -> Self {
        self.suggest_mode = mode;
        self
    }

    /// Parse config from environment variables.
    ///
    /// Invalid values are dropped in favour of defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> SearchBarConfigParse {
        from_env_with(|key| env::var(key).ok())
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        if self.max_visible == 0 {
            errors.push(ConfigError::new(
                "max_visible",
                "0",
                "expected positive integer",
            ));
        }
        if self.route_prefix.trim().is_empty() {
            errors.push(ConfigError::new(
                "route_prefix",
                self.route_prefix.clone(),
                "route prefix must not be empty",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn from_env_with<F>(mut get: F) -> SearchBarConfigParse
where
    F: FnMut(&str) -> Option<String>,
{
    let mut config = SearchBarConfig::default();
    let mut errors = Vec::new();

    if let Some(value) = get(ENV_MAX_VISIBLE) {
        match parse_positive(&value) {
            Some(parsed) => config.max_visible = parsed,
            None => errors.push(ConfigError::new(
                "max_visible",
                value,
                "expected positive integer",
            )),
        }
    }

    if let Some(value) = get(ENV_HIDE_ON_EMPTY) {
        match parse_bool(&value) {
            Some(parsed) => config.hide_on_empty = parsed,
            None => errors.push(ConfigError::new(
                "hide_on_empty",
                value,
                "expected bool (1/0/true/false)",
            )),
        }
    }

    if let Some(value) = get(ENV_ROUTE_PREFIX) {
        if value.trim().is_empty() {
            errors.push(ConfigError::new(
                "route_prefix",
                value,
                "route prefix must not be empty",
            ));
        } else {
            config.route_prefix = value;
        }
    }

    if let Some(value) = get(ENV_SUGGEST_MODE) {
        match SuggestMode::parse(&value) {
            Some(parsed) => config.suggest_mode = parsed,
            None => errors.push(ConfigError::new(
                "suggest_mode",
                value,
                "expected sync|deferred",
            )),
        }
    }

    SearchBarConfigParse { config, errors }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_positive(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|n| *n > 0)
}
