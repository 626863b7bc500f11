pub mod error;
pub mod hotel_card;
pub mod review_panel;
pub mod upload;

pub use error::html_error_response;
pub use hotel_card::{hotel_card, listing_section, render_hotels};
pub use review_panel::review_panel;
pub use upload::upload_form;
