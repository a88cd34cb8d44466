//! Server configuration read from the process environment.

use std::net::{AddrParseError, SocketAddr};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4000;
const DEFAULT_DB_PATH: &str = "projects.db";

/// Everything `main` needs to start serving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// sqlx connection URL for the project store.
    pub database_url: String,
    /// `*` or a comma-separated list of origins.
    pub cors_allowed_origins: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host = get("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.into());

        let port = match get("SERVER_PORT").or_else(|| get("PORT")) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, default = DEFAULT_PORT, "Invalid port, using default");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let database_url = get("DB_CONNECTION_URL").unwrap_or_else(|| {
            let path = get("PROJECTS_DB").unwrap_or_else(|| DEFAULT_DB_PATH.into());
            sqlite_url_for_path(&path)
        });

        let cors_allowed_origins = get("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| "*".into());

        Self {
            host,
            port,
            database_url,
            cors_allowed_origins,
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

/// Connection URL for a SQLite file, created if missing.
pub fn sqlite_url_for_path(path: &str) -> String {
    format!("sqlite:{}?mode=rwc", path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 4000);
        assert_eq!(config.database_url, "sqlite:projects.db?mode=rwc");
        assert_eq!(config.cors_allowed_origins, "*");
    }

    #[test]
    fn server_port_takes_precedence_over_port() {
        let config = config_from(&[("SERVER_PORT", "8081"), ("PORT", "9090")]);
        assert_eq!(config.port, 8081);

        let config = config_from(&[("PORT", "9090")]);
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let config = config_from(&[("SERVER_PORT", "not-a-port")]);
        assert_eq!(config.port, 4000);
    }

    #[test]
    fn connection_url_overrides_db_path() {
        let config = config_from(&[
            ("DB_CONNECTION_URL", "sqlite::memory:"),
            ("PROJECTS_DB", "ignored.db"),
        ]);
        assert_eq!(config.database_url, "sqlite::memory:");

        let config = config_from(&[("PROJECTS_DB", "/var/lib/envhub/projects.db")]);
        assert_eq!(
            config.database_url,
            "sqlite:/var/lib/envhub/projects.db?mode=rwc"
        );
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[("SERVER_HOST", "  "), ("CORS_ALLOWED_ORIGINS", "")]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.cors_allowed_origins, "*");
    }

    #[test]
    fn bind_addr_combines_host_and_port() {
        let config = config_from(&[("SERVER_HOST", "127.0.0.1"), ("SERVER_PORT", "5000")]);
        let addr = config.bind_addr().expect("valid address");
        assert_eq!(addr.to_string(), "127.0.0.1:5000");
    }
}
