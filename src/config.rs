// src/config.rs

use crate::demo::ImageSelection;
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Unsplash photos used as decorative card images.
pub const DEFAULT_IMAGE_POOL: &[&str] = &[
    "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=400",
    "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa?w=400",
    "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?w=400",
    "https://images.unsplash.com/photo-1520250497591-112f2f40a3f4?w=400",
    "https://images.unsplash.com/photo-1571896349842-33c89424de2d?w=400",
];

/// Largest accepted upload body.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug)]
pub struct ConfigError(String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Config error: {}", self.0)
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub max_workers: usize,
    /// CSV rendered at startup, if any.
    pub csv_path: Option<PathBuf>,
    pub image_pool: Vec<String>,
    pub image_selection: ImageSelection,
    pub max_upload_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            csv_path: None,
            image_pool: DEFAULT_IMAGE_POOL.iter().map(|s| s.to_string()).collect(),
            image_selection: ImageSelection::Random,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl AppConfig {
    /// Reads `HOTELS_*` variables, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(addr) = lookup("HOTELS_ADDR") {
            cfg.addr = addr
                .trim()
                .parse()
                .map_err(|e| ConfigError(format!("HOTELS_ADDR={addr:?}: {e}")))?;
        }

        if let Some(workers) = lookup("HOTELS_WORKERS") {
            cfg.max_workers = workers
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError(format!("HOTELS_WORKERS={workers:?}: expected a positive integer")))?;
        }

        cfg.csv_path = lookup("HOTELS_CSV")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        if let Some(pool) = lookup("HOTELS_IMAGE_POOL") {
            cfg.image_pool = pool
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(limit) = lookup("HOTELS_MAX_UPLOAD_BYTES") {
            cfg.max_upload_bytes = limit
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ConfigError(format!("HOTELS_MAX_UPLOAD_BYTES={limit:?}: expected a positive integer"))
                })?;
        }

        if let Some(selection) = lookup("HOTELS_IMAGE_SELECTION") {
            cfg.image_selection = selection
                .parse()
                .map_err(|e| ConfigError(format!("HOTELS_IMAGE_SELECTION: {e}")))?;
        }

        Ok(cfg)
    }
}
