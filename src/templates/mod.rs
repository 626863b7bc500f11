pub mod components;
pub mod format;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{html_error_response, listing_section, render_hotels, review_panel};
pub use layouts::desktop::desktop_layout;
