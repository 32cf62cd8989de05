// Application state module
// Per-process state shared across all requests

use super::types::Config;

/// Application state
///
/// Everything here is fixed at startup and read-only afterwards, so request
/// handlers can share it through an `Arc` without any coordination.
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }
}

#[cfg(test)]
impl AppState {
    /// State with baked-in defaults, for handler and routing tests
    pub(crate) fn test_default() -> Self {
        use super::types::{
            AnalyzerConfig, HttpConfig, LoggingConfig, PerformanceConfig, RoutesConfig,
            ServerConfig,
        };

        Self::new(Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                workers: None,
            },
            analyzer: AnalyzerConfig {
                max_text_length: 250,
            },
            http: HttpConfig {
                cors_allowed_origins: vec!["http://localhost:4200".to_string()],
            },
            logging: LoggingConfig {
                access_log: false,
                format: "combined".to_string(),
                access_log_file: None,
                error_log_file: None,
            },
            performance: PerformanceConfig {
                keep_alive_timeout: 75,
                read_timeout: 30,
                write_timeout: 30,
                max_connections: None,
            },
            routes: RoutesConfig::default(),
        })
    }
}
