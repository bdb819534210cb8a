use crate::cli::ServeArgs;
use minijinja::Environment;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config file. Error: {0}")]
    ParseError(#[from] serde_yaml::Error),
    #[error("Failed to read template in config. Error: {0}")]
    ReadError(#[from] minijinja::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "songs.db".to_string(),
            max_connections: 10,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

fn replace_env_vars(content: String) -> Result<String, ConfigError> {
    let env = Environment::new();
    let template = env.template_from_str(&content)?;
    let parameters = template.undeclared_variables(false);

    let mut variables = HashMap::new();
    parameters.iter().for_each(|k| {
        if let Ok(v) = std::env::var(k) {
            variables.insert(k, v);
        };
    });

    Ok(template.render(variables)?)
}

impl Config {
    /// Reads `config_path`, substituting `{{ VAR }}` from the environment.
    /// A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(config_path) {
            Ok(content) => {
                let content = replace_env_vars(content)?;
                Ok(serde_yaml::from_str(&content)?)
            }
            Err(_e) => Ok(Self::default()),
        }
    }

    pub fn apply_cli_overrides(mut self, args: &ServeArgs) -> Self {
        if let Some(host) = &args.host {
            self.http.host = host.clone();
        }
        if let Some(port) = args.port {
            self.http.port = port;
        }
        if let Some(cors) = &args.cors_origins {
            self.http.cors_allowed_origins =
                cors.split(',').map(|s| s.trim().to_string()).collect();
        }
        if let Some(url) = &args.database_url {
            self.database.url = url.clone();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/songbook/config.yaml").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.http.port, 3000);
        assert_eq!(config.database.url, "songs.db");
    }

    #[test]
    fn test_partial_file_keeps_section_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "http:\n  host: 127.0.0.1\n  port: 8080\n  cors_allowed_origins: [\"http://localhost:5173\"]"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.database, DatabaseConfig::default());
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("SONGBOOK_TEST_DB_URL", "/tmp/catalog.db");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "database:\n  url: \"{{{{ SONGBOOK_TEST_DB_URL }}}}\"\n  max_connections: 4"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.database.url, "/tmp/catalog.db");
        assert_eq!(config.database.max_connections, 4);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "http: [not, a, mapping").unwrap();

        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_cli_overrides() {
        let args = ServeArgs {
            host: Some("127.0.0.1".to_string()),
            port: Some(9000),
            cors_origins: Some("http://a.test, http://b.test".to_string()),
            database_url: Some(":memory:".to_string()),
            seed: None,
        };

        let config = Config::default().apply_cli_overrides(&args);

        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 9000);
        assert_eq!(
            config.http.cors_allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert_eq!(config.database.url, ":memory:");
        assert_eq!(config.database.max_connections, 10);
    }
}
