pub mod html;
pub mod static_files;

pub use crate::errors::ResultResp;

pub use html::{html_response, html_response_with_message};
pub use static_files::stylesheet_response;
