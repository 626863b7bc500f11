// src/state.rs

use crate::config::{AppConfig, DEFAULT_MAX_UPLOAD_BYTES};
use crate::demo::{DemoData, RandomDemoData};
use crate::domain::HotelRecord;
use crate::errors::ServerError;
use crate::panels::PanelController;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Everything a render reads: the current batch, panel visibility and the
/// demo data source. Replaced batch-wise, never patched.
pub struct AppState {
    pub hotels: Vec<HotelRecord>,
    pub panels: PanelController,
    pub demo: Box<dyn DemoData>,
}

impl AppState {
    pub fn new(demo: Box<dyn DemoData>) -> Self {
        Self {
            hotels: Vec::new(),
            panels: PanelController::new(),
            demo,
        }
    }

    /// Swaps in a new batch; all panels start hidden again.
    pub fn replace_batch(&mut self, hotels: Vec<HotelRecord>) {
        debug!(count = hotels.len(), "hotel batch replaced");
        self.hotels = hotels;
        self.panels.reset();
    }

    pub fn find(&self, id: &str) -> Option<&HotelRecord> {
        self.hotels.iter().find(|h| h.key() == id)
    }
}

/// Shared handle passed to every request.
pub struct App {
    state: Mutex<AppState>,
    max_upload_bytes: u64,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state: Mutex::new(state),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn with_upload_limit(mut self, max_upload_bytes: u64) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        let demo = RandomDemoData::new(
            StdRng::from_entropy(),
            cfg.image_pool.clone(),
            cfg.image_selection,
        );
        Self::new(AppState::new(Box::new(demo))).with_upload_limit(cfg.max_upload_bytes)
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, AppState>, ServerError> {
        self.state.lock().map_err(|_| ServerError::InternalError)
    }
}
