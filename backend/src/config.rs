//! Process configuration from command-line flags and environment variables.
//!
//! Every flag falls back to an environment variable of the same name in
//! upper snake case. Only the database URL is required.

use std::ffi::OsString;
use std::net::{IpAddr, SocketAddr};

use clap::Parser;

use crate::outbound::hashing::Argon2CredentialHasher;

/// Service settings.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "accounts", about = "User account HTTP service")]
pub struct AppConfig {
    /// Listening port.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Listening address.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// PostgreSQL connection URL.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Maximum pooled database connections.
    #[arg(
        long,
        env = "DB_MAX_CONNECTIONS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub db_max_connections: u32,

    /// Argon2 memory cost per hash, in KiB.
    #[arg(
        long,
        env = "HASH_MEMORY_KIB",
        default_value_t = Argon2CredentialHasher::DEFAULT_MEMORY_KIB,
        value_parser = clap::value_parser!(u32).range(8..)
    )]
    pub hash_memory_kib: u32,

    /// Do not apply embedded migrations at startup.
    #[arg(long, env = "SKIP_MIGRATIONS")]
    pub skip_migrations: bool,
}

impl AppConfig {
    /// Parse from an explicit argument list; the first item is the binary
    /// name.
    ///
    /// # Errors
    ///
    /// Returns the clap error for missing or malformed values.
    pub fn load_from_iter<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    /// Socket address the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 6] = [
        "PORT",
        "HOST",
        "DATABASE_URL",
        "DB_MAX_CONNECTIONS",
        "HASH_MEMORY_KIB",
        "SKIP_MIGRATIONS",
    ];

    fn cleared_env() -> [(&'static str, Option<String>); 6] {
        VARS.map(|name| (name, None))
    }

    #[rstest]
    fn defaults_apply_when_only_database_url_is_given() {
        let _guard = lock_env(cleared_env());

        let config = AppConfig::load_from_iter(["accounts", "--database-url", "postgres://db"])
            .expect("config should load");

        assert_eq!(config.bind_addr(), "0.0.0.0:3000".parse().expect("addr"));
        assert_eq!(config.database_url, "postgres://db");
        assert_eq!(config.db_max_connections, 10);
        assert_eq!(config.hash_memory_kib, 19_456);
        assert!(!config.skip_migrations);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("PORT", Some("8081".to_owned())),
            ("HOST", Some("127.0.0.1".to_owned())),
            ("DATABASE_URL", Some("postgres://env".to_owned())),
            ("DB_MAX_CONNECTIONS", Some("4".to_owned())),
            ("HASH_MEMORY_KIB", Some("64".to_owned())),
            ("SKIP_MIGRATIONS", Some("true".to_owned())),
        ]);

        let config = AppConfig::load_from_iter(["accounts"]).expect("config should load");

        assert_eq!(config.bind_addr(), "127.0.0.1:8081".parse().expect("addr"));
        assert_eq!(config.database_url, "postgres://env");
        assert_eq!(config.db_max_connections, 4);
        assert_eq!(config.hash_memory_kib, 64);
        assert!(config.skip_migrations);
    }

    #[rstest]
    fn flags_take_precedence_over_environment() {
        let _guard = lock_env([
            ("PORT", Some("8081".to_owned())),
            ("HOST", None),
            ("DATABASE_URL", Some("postgres://env".to_owned())),
            ("DB_MAX_CONNECTIONS", None),
            ("HASH_MEMORY_KIB", None),
            ("SKIP_MIGRATIONS", None),
        ]);

        let config = AppConfig::load_from_iter(["accounts", "--port", "9000"])
            .expect("config should load");

        assert_eq!(config.port, 9000);
    }

    #[rstest]
    fn missing_database_url_is_an_error() {
        let _guard = lock_env(cleared_env());

        let err = AppConfig::load_from_iter(["accounts"]).expect_err("database url required");

        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[rstest]
    #[case("--hash-memory-kib", "4")]
    #[case("--db-max-connections", "0")]
    #[case("--port", "70000")]
    fn out_of_range_values_are_rejected(#[case] flag: &str, #[case] value: &str) {
        let _guard = lock_env(cleared_env());

        let result =
            AppConfig::load_from_iter(["accounts", "--database-url", "postgres://db", flag, value]);

        assert!(result.is_err());
    }

    #[rstest]
    fn process_arguments_parse_as_os_strings() {
        let _guard = lock_env(cleared_env());
        let args: Vec<OsString> = ["accounts", "--database-url", "postgres://db", "--skip-migrations"]
            .into_iter()
            .map(OsString::from)
            .collect();

        let config = AppConfig::load_from_iter(args).expect("config should load");

        assert!(config.skip_migrations);
        assert_eq!(config.database_url, "postgres://db");
    }
}
