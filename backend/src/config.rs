//! Runtime settings of the microservice, read from the environment.

use std::env;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8002;
pub const DEFAULT_DB: &str = "deportistas.sqlite";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Path of the SQLite file. `:memory:` keeps everything in memory.
    pub db_path: String,
    /// Load the bundled athletes when the collection is empty.
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            db_path: DEFAULT_DB.to_string(),
            seed: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let mut config = Config::default();

        if let Some(host) = lookup("MS_PLANTILLA_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("MS_PLANTILLA_PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|e| format!("MS_PLANTILLA_PORT no válido ({}): {}", port, e))?;
        }
        if let Some(db) = lookup("MS_PLANTILLA_DB") {
            config.db_path = db;
        }
        if let Some(seed) = lookup("MS_PLANTILLA_SEED") {
            config.seed = match seed.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "si" | "sí" => true,
                "0" | "false" | "no" => false,
                other => return Err(format!("MS_PLANTILLA_SEED no válido: {}", other)),
            };
        }

        Ok(config)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
