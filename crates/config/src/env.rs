use rollcall_common::error::{RollcallError, RollcallResult};
use serde::Deserialize;
use std::env;
use std::fmt;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

/// Postgres connection settings, read from the `DB_*` variables.
#[derive(Clone, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present, then reads required vars.
    pub fn from_env() -> RollcallResult<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        Ok(Self {
            database: DatabaseConfig::from_env()?,
            host: get_var_or("HOST", "0.0.0.0"),
            port: parse_var("PORT", &get_var_or("PORT", "8080"))?,
            log_level: get_var_or("LOG_LEVEL", "info"),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    pub fn from_env() -> RollcallResult<Self> {
        Ok(Self {
            host: get_var("DB_HOST")?,
            port: parse_var("DB_PORT", &get_var("DB_PORT")?)?,
            username: get_var("DB_USERNAME")?,
            password: get_var("DB_PASSWORD")?,
            name: get_var("DB_NAME")?,
            max_connections: parse_var(
                "DB_MAX_CONNECTIONS",
                &get_var_or("DB_MAX_CONNECTIONS", "10"),
            )?,
        })
    }
}

fn get_var(key: &str) -> RollcallResult<String> {
    env::var(key).map_err(|_| RollcallError::Config(format!("{key} is required but not set")))
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_var<T>(key: &str, raw: &str) -> RollcallResult<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| RollcallError::Config(format!("invalid {key}: {e}")))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    pub(crate) static ENV_LOCK: Mutex<()> = Mutex::new(());

    const DB_VARS: [(&str, &str); 5] = [
        ("DB_HOST", "localhost"),
        ("DB_PORT", "5432"),
        ("DB_USERNAME", "rollcall"),
        ("DB_PASSWORD", "hunter2"),
        ("DB_NAME", "rollcall_test"),
    ];

    fn set_db_vars() {
        for (key, value) in DB_VARS {
            env::set_var(key, value);
        }
    }

    fn clear_vars() {
        for (key, _) in DB_VARS {
            env::remove_var(key);
        }
        for key in ["DB_MAX_CONNECTIONS", "HOST", "PORT", "LOG_LEVEL"] {
            env::remove_var(key);
        }
    }

    #[test]
    fn config_from_env_succeeds_with_required_vars() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_vars();
        set_db_vars();

        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.database.host, "localhost");
        assert_eq!(cfg.database.port, 5432);
        assert_eq!(cfg.database.username, "rollcall");
        assert_eq!(cfg.database.password, "hunter2");
        assert_eq!(cfg.database.name, "rollcall_test");
        assert_eq!(cfg.database.max_connections, 10);
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.log_level, "info");

        clear_vars();
    }

    #[test]
    fn config_from_env_fails_without_db_host() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_vars();
        set_db_vars();
        env::remove_var("DB_HOST");

        let err = AppConfig::from_env().expect_err("missing DB_HOST must fail");
        assert!(err.to_string().contains("DB_HOST"));

        clear_vars();
    }

    #[test]
    fn config_from_env_rejects_non_numeric_port() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_vars();
        set_db_vars();
        env::set_var("DB_PORT", "five-four-three-two");

        let err = AppConfig::from_env().expect_err("bad DB_PORT must fail");
        assert!(matches!(err, RollcallError::Config(_)));
        assert!(err.to_string().contains("DB_PORT"));

        clear_vars();
    }

    #[test]
    fn config_reads_optional_overrides() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_vars();
        set_db_vars();
        env::set_var("DB_MAX_CONNECTIONS", "3");
        env::set_var("PORT", "9090");
        env::set_var("LOG_LEVEL", "debug");

        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.database.max_connections, 3);
        assert_eq!(cfg.port, 9090);
        assert_eq!(cfg.log_level, "debug");

        clear_vars();
    }

    #[test]
    fn debug_output_hides_password() {
        let cfg = DatabaseConfig {
            host: "db".to_owned(),
            port: 5432,
            username: "rollcall".to_owned(),
            password: "hunter2".to_owned(),
            name: "rollcall".to_owned(),
            max_connections: 5,
        };
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn bind_addr_formats_correctly() {
        let cfg = AppConfig {
            database: DatabaseConfig {
                host: String::new(),
                port: 5432,
                username: String::new(),
                password: String::new(),
                name: String::new(),
                max_connections: 1,
            },
            host: "127.0.0.1".to_owned(),
            port: 3000,
            log_level: "debug".to_owned(),
        };
        assert_eq!(cfg.bind_addr(), "127.0.0.1:3000");
    }
}
