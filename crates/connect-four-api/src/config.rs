//! Server configuration, read once from the environment at startup.

use std::sync::Arc;
use std::str::FromStr;

use connect_four_game::domain::strategy::{GreedyStrategy, MoveStrategy, RandomStrategy};

use crate::error::AppError;

/// Storage key used when `CONNECT_FOUR_CONTEXT` is not set.
pub const DEFAULT_CONTEXT: &str = "connect_four";

/// Computer opponent selected by `CONNECT_FOUR_STRATEGY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// Uniformly random legal column.
    #[default]
    Random,
    /// Win if possible, else block, else random.
    Greedy,
}

impl StrategyKind {
    /// Instantiates the strategy.
    #[must_use]
    pub fn build(self) -> Arc<dyn MoveStrategy> {
        match self {
            Self::Random => Arc::new(RandomStrategy),
            Self::Greedy => Arc::new(GreedyStrategy),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "greedy" => Ok(Self::Greedy),
            other => Err(AppError::Config(format!(
                "CONNECT_FOUR_STRATEGY must be `random` or `greedy`, got `{other}`"
            ))),
        }
    }
}

/// Runtime configuration for the bot server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// `PostgreSQL` URL; the in-memory store is used when absent.
    pub database_url: Option<String>,
    /// Storage key of the engagement.
    pub context: String,
    /// Computer opponent.
    pub strategy: StrategyKind,
    /// OTLP collector endpoint; trace export is off when absent.
    pub otlp_endpoint: Option<String>,
}

impl ApiConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns a variable's
    /// value or `None` when unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => 5002,
        };
        let strategy = match non_empty("CONNECT_FOUR_STRATEGY") {
            Some(raw) => raw.parse()?,
            None => StrategyKind::default(),
        };

        Ok(Self {
            host: non_empty("HOST").unwrap_or_else(|| "0.0.0.0".to_owned()),
            port,
            database_url: non_empty("DATABASE_URL"),
            context: non_empty("CONNECT_FOUR_CONTEXT").unwrap_or_else(|| DEFAULT_CONTEXT.to_owned()),
            strategy,
            otlp_endpoint: non_empty("OTEL_EXPORTER_OTLP_ENDPOINT"),
        })
    }

    /// `host:port`, ready to parse as a socket address.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
