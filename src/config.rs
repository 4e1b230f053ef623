//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Greeting ===
    /// Default greeting template combined with a name, e.g. "Hello" -> "Hello World!".
    #[serde(default = "default_greeting")]
    pub greeting: String,

    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origin echoed in the Access-Control-Allow-Origin response header.
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_greeting() -> String {
    "Hello".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "http://localhost:8080".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.greeting.is_empty() {
            return Err("GREETING must not be empty".to_string());
        }

        if self.cors_origin.is_empty() {
            return Err("CORS_ORIGIN must not be empty".to_string());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            port: default_port(),
            cors_origin: default_cors_origin(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}
