//! Runtime configuration from flags and environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Parser)]
#[command(name = "trove", about = "Serve read-only movie, book and pokemon catalogs over HTTP")]
pub struct Config {
    /// Interface to listen on.
    #[arg(long, env = "TROVE_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Required as `Authorization: Bearer <token>` on every request. Unset
    /// disables authorization.
    #[arg(long, env = "API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Directory holding movies.json, books.json and pokedex.json. Defaults
    /// to the fixtures built into the binary.
    #[arg(long, env = "TROVE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// The configured token, treating an empty value as unset.
    pub fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref().filter(|t| !t.is_empty())
    }

    /// Checks what clap cannot: that a given data directory exists.
    pub fn validate(&self) -> Result<()> {
        match &self.data_dir {
            Some(dir) if !dir.is_dir() => {
                Err(Error::Config(format!("data dir {} is not a directory", dir.display())))
            }
            _ => Ok(()),
        }
    }
}
