// src/config.rs

use clap::Parser;
use std::{
    net::{IpAddr, SocketAddr},
    path::PathBuf,
};

/// Width x height of every rendered chart, in pixels.
pub const CHART_SIZE: (u32, u32) = (1000, 500);

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Bar charts of regional statistics read from a CSV file"
)]
pub struct Args {
    /// CSV with the columns `Область`, `Місто/Район`, `Значення`
    #[arg(
        long,
        env = "CHARTS_CSV",
        default_value = "static/chartapp/data/input_data.csv"
    )]
    pub csv: PathBuf,

    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// TrueType font used for chart text; common system fonts are tried when unset
    #[arg(long, env = "CHARTS_FONT")]
    pub font: Option<PathBuf>,

    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Settings handed to every request handler.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub csv_path: PathBuf,
    pub chart_size: (u32, u32),
}

impl AppConfig {
    pub fn new(csv_path: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
            chart_size: CHART_SIZE,
        }
    }
}

impl From<&Args> for AppConfig {
    fn from(args: &Args) -> Self {
        AppConfig::new(&args.csv)
    }
}
