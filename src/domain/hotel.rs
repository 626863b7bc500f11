// src/domain/hotel.rs

use serde::Deserialize;

/// One CSV row as read by the renderer.
///
/// Every field is the raw cell text. Missing columns and empty cells are `None`;
/// columns not listed here are ignored. Nothing is validated, so two rows with
/// the same `listing_id` will collide in the rendered page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HotelRecord {
    pub listing_id: Option<String>,
    pub title_norm: Option<String>,
    pub source_url: Option<String>,
    pub review_count: Option<String>,
    pub rating: Option<String>,
    pub llm_summary: Option<String>,
    pub llm_pros: Option<String>,
    pub llm_cons: Option<String>,
    pub llm_rating_0_10: Option<String>,
}

impl HotelRecord {
    /// Key shared by the card (`hotel-{id}`) and its panel (`tooltip-{id}`).
    pub fn key(&self) -> &str {
        self.listing_id.as_deref().unwrap_or("")
    }

    pub fn title(&self) -> &str {
        self.title_norm.as_deref().unwrap_or("")
    }

    pub fn link(&self) -> &str {
        self.source_url.as_deref().unwrap_or("")
    }

    /// Review count as a number; absent or non-numeric counts as zero.
    /// Fractions are kept, so `"12.5"` stays `12.5`.
    pub fn review_count(&self) -> f64 {
        self.review_count
            .as_deref()
            .map(str::trim)
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|n| n.is_finite())
            .unwrap_or(0.0)
    }

    /// Badge text: the raw rating, or `-` when absent.
    pub fn rating_badge(&self) -> &str {
        present(&self.rating).unwrap_or("-")
    }

    pub fn llm_rating(&self) -> &str {
        present(&self.llm_rating_0_10).unwrap_or("-")
    }

    /// First 150 characters of the summary plus an ellipsis.
    pub fn summary_preview(&self) -> String {
        match present(&self.llm_summary) {
            Some(s) => {
                let cut: String = s.chars().take(SUMMARY_PREVIEW_CHARS).collect();
                format!("{cut}...")
            }
            None => "No summary available.".to_string(),
        }
    }
}

pub const SUMMARY_PREVIEW_CHARS: usize = 150;

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
