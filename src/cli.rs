//! Command-line interface configuration.

use argh::FromArgs;
use std::{net::SocketAddr, path::PathBuf};

/// A local development static file server with client caching disabled
#[derive(Debug, FromArgs)]
pub struct Cli {
    /// directory to serve files from (default: '.')
    #[argh(option, default = "PathBuf::from(\".\")")]
    pub root: PathBuf,

    /// server bind address (default: '0.0.0.0:8000')
    #[argh(option, default = "\"0.0.0.0:8000\".parse().unwrap()")]
    pub bind: SocketAddr,
}
