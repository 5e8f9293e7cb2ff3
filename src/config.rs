// src/config.rs

use crate::format::new_release_window;
use chrono::TimeDelta;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Shoe catalog server configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "shoe_catalog", about = "Shoe catalog server", long_about = None)]
pub struct AppConfig {
    /// Address the server binds to
    #[arg(long, env = "SHOE_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// JSON file holding the shoe catalog
    #[arg(long = "catalog", env = "SHOE_CATALOG", default_value = "data/shoes.json")]
    pub catalog_path: PathBuf,

    /// Number of astra worker threads
    #[arg(long = "workers", env = "SHOE_WORKERS", default_value = "8", value_parser = parse_workers)]
    pub max_workers: usize,

    /// How many days a release stays "Just released!"
    #[arg(
        long = "new-release-days",
        env = "SHOE_NEW_RELEASE_DAYS",
        default_value = "30",
        value_parser = parse_release_window
    )]
    pub release_window: TimeDelta,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            catalog_path: PathBuf::from("data/shoes.json"),
            max_workers: 8,
            release_window: new_release_window(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    pub fn new_release_window(&self) -> TimeDelta {
        self.release_window
    }
}

fn parse_workers(raw: &str) -> Result<usize, String> {
    let n: usize = raw.trim().parse().map_err(|e| format!("{e}"))?;
    if n == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(n)
}

/// Days are checked against chrono's range here, so the window can't overflow later.
fn parse_release_window(raw: &str) -> Result<TimeDelta, String> {
    let days: i64 = raw.trim().parse().map_err(|e| format!("{e}"))?;
    if days < 0 {
        return Err("must not be negative".to_string());
    }
    TimeDelta::try_days(days).ok_or_else(|| format!("{days} days is out of range"))
}
