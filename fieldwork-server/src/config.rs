use std::net::{IpAddr, SocketAddr};

use clap::Parser;

/// Server configuration, resolved from CLI flags with environment fallbacks.
#[derive(Parser, Debug, Clone)]
#[command(name = "fieldwork-server")]
#[command(about = "Job-dispatch tracker API for field inspectors")]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "FIELDWORK_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "FIELDWORK_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Log filter directive (e.g. `info`, `fieldwork_server=debug`)
    #[arg(long, env = "FIELDWORK_LOG", default_value = "info")]
    pub log: String,
}

impl Config {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
