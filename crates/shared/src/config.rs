//! Application configuration management.

use serde::Deserialize;

use crate::types::Amount;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Ledger core connection.
    #[serde(default)]
    pub core: CoreConfig,
    /// History ingestion.
    #[serde(default)]
    pub ingest: IngestConfig,
    /// Payment options exposed to clients.
    #[serde(default)]
    pub payments: PaymentsConfig,
    /// Limits applied to anonymous users.
    #[serde(default)]
    pub restrictions: RestrictionsConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// History database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Ledger core connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CoreConfig {
    /// Base URL of the ledger core HTTP endpoint.
    #[serde(default = "default_core_url")]
    pub url: String,
    /// Network passphrase the core signs transactions for.
    #[serde(default)]
    pub network_passphrase: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            url: default_core_url(),
            network_passphrase: String::new(),
        }
    }
}

fn default_core_url() -> String {
    "http://localhost:11626".to_string()
}

/// Ingestion settings.
#[derive(Debug, Clone, Deserialize)]
pub struct IngestConfig {
    /// Whether this instance ingests ledger history.
    #[serde(default)]
    pub enabled: bool,
    /// Number of parallel ingestion workers.
    #[serde(default = "default_workers")]
    pub workers: u32,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            workers: default_workers(),
        }
    }
}

fn default_workers() -> u32 {
    4
}

/// Payment settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentsConfig {
    /// How long after closing a payment may still be reversed.
    #[serde(default = "default_reversal_duration")]
    pub reversal_duration_secs: u64,
}

impl Default for PaymentsConfig {
    fn default() -> Self {
        Self {
            reversal_duration_secs: default_reversal_duration(),
        }
    }
}

fn default_reversal_duration() -> u64 {
    86400 // 1 day
}

/// Anonymous user limits, written as amount strings (e.g. `"1000.0000000"`).
///
/// An unset limit is not enforced.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestrictionsConfig {
    /// Maximum outflow per day.
    pub max_daily_outcome: Option<Amount>,
    /// Maximum outflow per month.
    pub max_monthly_outcome: Option<Amount>,
    /// Maximum outflow per year.
    pub max_annual_outcome: Option<Amount>,
    /// Maximum balance.
    pub max_balance: Option<Amount>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("HORIZON").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
