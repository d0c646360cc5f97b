use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::store::json::STORAGE_PATH;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Parser, Debug)]
#[command(
    name = "rolodex-server",
    version,
    about = "Contact book HTTP API and static client host"
)]
pub struct Cli {
    /// Port to listen on (falls back to 3000 when unset or not a valid port)
    #[arg(long, env = "PORT")]
    pub port: Option<String>,

    /// Address to bind
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// JSON file holding the contact collection
    #[arg(long, env = "CONTACTS_DATA_FILE", default_value = STORAGE_PATH)]
    pub data_file: PathBuf,

    /// Directory of prebuilt client files, served when it exists
    #[arg(long, env = "CONTACTS_STATIC_DIR", default_value = "client")]
    pub static_dir: PathBuf,
}

impl Cli {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, resolve_port(self.port.as_deref()))
    }
}

pub fn resolve_port(raw: Option<&str>) -> u16 {
    raw.and_then(|port| port.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
