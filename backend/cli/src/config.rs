/// Standfast runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Relay base URL the practice client talks to
    pub relay_url: String,
    /// Directory for rolling log files
    pub log_dir: String,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8787,
            relay_url: "http://localhost:8787".to_string(),
            log_dir: "logs".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        let defaults = Config::default();
        Self {
            bind_address: std::env::var("STANDFAST_BIND").unwrap_or(defaults.bind_address),
            port: std::env::var("STANDFAST_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            relay_url: std::env::var("STANDFAST_RELAY_URL").unwrap_or(defaults.relay_url),
            log_dir: std::env::var("STANDFAST_LOG_DIR").unwrap_or(defaults.log_dir),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }
}
