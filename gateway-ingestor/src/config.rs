//! Process configuration, read from the environment at startup.

use clap::Parser;
use tracing::Level;

use crate::Result;

#[derive(Parser, Debug, Clone)]
#[command(name = "gateway", about = "Stream records into a cassandra table")]
pub struct Config {
    /// Host of the column store
    #[arg(long, env = "CASSANDRA_HOST")]
    pub cassandra_host: String,

    /// CQL native transport port of the column store
    #[arg(long, env = "CASSANDRA_PORT")]
    pub cassandra_port: u16,

    #[arg(long, env = "LOG_LEVEL", default_value_t = Level::DEBUG)]
    pub log_level: Level,
}

impl Config {
    /// Ignores process arguments, the invocation host only hands us an environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self::try_parse_from([env!("CARGO_PKG_NAME")])?)
    }

    pub fn node_address(&self) -> String {
        format!("{}:{}", self.cassandra_host, self.cassandra_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GatewayError;

    // Single test so nothing else in this binary races on the process environment.
    #[test]
    fn it_reads_and_validates_the_environment() -> anyhow::Result<()> {
        std::env::set_var("CASSANDRA_HOST", "10.0.0.7");
        std::env::set_var("CASSANDRA_PORT", "9042");
        std::env::remove_var("LOG_LEVEL");

        let config = Config::from_env()?;
        assert_eq!("10.0.0.7", config.cassandra_host);
        assert_eq!(9042, config.cassandra_port);
        assert_eq!(Level::DEBUG, config.log_level);
        assert_eq!("10.0.0.7:9042", config.node_address());

        std::env::set_var("LOG_LEVEL", "warn");
        assert_eq!(Level::WARN, Config::from_env()?.log_level);

        std::env::set_var("CASSANDRA_PORT", "nine thousand");
        assert!(matches!(Config::from_env(), Err(GatewayError::Config(_))));

        std::env::set_var("CASSANDRA_PORT", "9042");
        std::env::remove_var("CASSANDRA_HOST");
        assert!(matches!(Config::from_env(), Err(GatewayError::Config(_))));

        std::env::remove_var("CASSANDRA_PORT");
        std::env::remove_var("LOG_LEVEL");
        Ok(())
    }
}
