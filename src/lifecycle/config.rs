//! Server configuration, read from the command line or the environment.

use clap::Parser;

/// Channel capacity of the show actor.
pub const DEFAULT_BUFFER_SIZE: usize = 32;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// In-memory TV show tracker API
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "SHOWS_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "SHOWS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Capacity of the store actor's request queue
    #[arg(long, env = "SHOWS_BUFFER_SIZE", default_value_t = DEFAULT_BUFFER_SIZE)]
    pub buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl Config {
    /// The `host:port` string to bind the listener to.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
