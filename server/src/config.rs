use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Default location of the exported readmission model.
pub const DEFAULT_MODEL_PATH: &str = "readmission_risk_model.json";

#[derive(Parser, Debug, Clone)]
#[command(name = "tibasasa-server")]
#[command(about = "TibaSasa - appointment scheduling and readmission risk API")]
#[command(version)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "TIBASASA_BIND_ADDR", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Path to the readmission risk model artifact (JSON)
    #[arg(long, env = "TIBASASA_MODEL_PATH", default_value = DEFAULT_MODEL_PATH)]
    pub model_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}
