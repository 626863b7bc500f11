// src/panels.rs

//! Visibility of the per-hotel review panels.
//!
//! Each panel is either hidden or shown, and at most one is shown at a time.
//! Holding the shown id in a single `Option` makes that hold by construction.

use tracing::debug;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PanelController {
    shown: Option<String>,
}

impl PanelController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shown(&self, id: &str) -> bool {
        self.shown.as_deref() == Some(id)
    }

    pub fn shown(&self) -> Option<&str> {
        self.shown.as_deref()
    }

    /// Shows `id`, hiding whichever panel was shown before.
    /// Returns the ids whose visibility changed.
    pub fn open(&mut self, id: &str) -> Vec<String> {
        if self.is_shown(id) {
            return Vec::new();
        }
        let mut changed: Vec<String> = self.shown.take().into_iter().collect();
        self.shown = Some(id.to_string());
        changed.push(id.to_string());
        debug!(panel = id, "panel opened");
        changed
    }

    /// Hides `id` if it is the shown panel; otherwise a no-op.
    pub fn close(&mut self, id: &str) -> Vec<String> {
        if !self.is_shown(id) {
            return Vec::new();
        }
        debug!(panel = id, "panel closed");
        self.shown.take().into_iter().collect()
    }

    pub fn toggle(&mut self, id: &str) -> Vec<String> {
        if self.is_shown(id) {
            self.close(id)
        } else {
            self.open(id)
        }
    }

    /// Hides every panel, as for a click outside all panels and triggers.
    pub fn close_all(&mut self) -> Vec<String> {
        self.shown.take().into_iter().collect()
    }

    /// Forgets all state; used when a new batch replaces the panels.
    pub fn reset(&mut self) {
        self.shown = None;
    }
}
