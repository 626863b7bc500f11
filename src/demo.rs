// src/demo.rs

//! Synthetic display data.
//!
//! The CSV carries no prices or photos, so the cards show made-up ones. None of
//! this is domain data: swap the provider out once real pricing exists.

use rand::seq::SliceRandom;
use rand::Rng;
use std::str::FromStr;

pub const STAY_NIGHTS: u32 = 3;
pub const TAX_RATE: f64 = 0.1;

/// A made-up total for the stay plus the surcharge shown under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayPrice {
    pub total: u32,
    pub taxes: u32,
}

impl StayPrice {
    pub fn from_total(total: u32) -> Self {
        let taxes = (f64::from(total) * TAX_RATE).floor() as u32;
        Self { total, taxes }
    }
}

pub trait DemoData: Send {
    fn stay_price(&mut self) -> StayPrice;

    /// Image for the card at `index`, or `None` when there is no pool.
    fn image(&mut self, index: usize) -> Option<String>;
}

/// How card images are picked from the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSelection {
    Random,
    /// `pool[index % len]`, stable across renders.
    Cycle,
}

impl FromStr for ImageSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(ImageSelection::Random),
            "cycle" => Ok(ImageSelection::Cycle),
            other => Err(format!("unknown image selection {other:?}, expected random or cycle")),
        }
    }
}

/// Random nightly rate for a fixed stay, images from a fixed pool.
/// Drawn fresh on every render.
pub struct RandomDemoData<R> {
    rng: R,
    pool: Vec<String>,
    selection: ImageSelection,
}

impl<R: Rng + Send> RandomDemoData<R> {
    pub fn new(rng: R, pool: Vec<String>, selection: ImageSelection) -> Self {
        Self {
            rng,
            pool,
            selection,
        }
    }
}

impl<R: Rng + Send> DemoData for RandomDemoData<R> {
    fn stay_price(&mut self) -> StayPrice {
        let nightly: u32 = self.rng.gen_range(100..400);
        StayPrice::from_total(nightly * STAY_NIGHTS)
    }

    fn image(&mut self, index: usize) -> Option<String> {
        match self.selection {
            ImageSelection::Random => self.pool.choose(&mut self.rng).cloned(),
            ImageSelection::Cycle if self.pool.is_empty() => None,
            ImageSelection::Cycle => Some(self.pool[index % self.pool.len()].clone()),
        }
    }
}
