use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// PostgreSQL connection string. When unset the server runs against the
    /// in-memory store.
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_connections() -> u32 {
    10
}

impl ServerConfig {
    /// Defaults, then an optional `config/default` file, then `CATALOG_*`
    /// environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .set_default("port", 8080)?
            .set_default("log_level", "info")?
            .set_default("max_connections", 10)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("CATALOG"))
            .build()?;

        s.try_deserialize()
    }
}
