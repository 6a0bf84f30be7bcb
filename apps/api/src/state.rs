use crate::config::Config;
use crate::matching::matcher::Matcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Wraps the read-only language model built at startup.
    pub matcher: Matcher,
}

impl AppState {
    pub fn new(config: Config, matcher: Matcher) -> Self {
        Self { config, matcher }
    }

    /// State backed by the built-in English model.
    #[cfg(test)]
    pub fn with_defaults(config: Config) -> Self {
        use crate::language::EnglishModel;
        use std::sync::Arc;

        Self::new(config, Matcher::new(Arc::new(EnglishModel::default())))
    }
}
