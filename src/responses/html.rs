use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

/// Header carrying the user-facing load notice for upload responses.
pub const LOAD_MESSAGE_HEADER: &str = "X-Load-Message";

pub fn html_response(markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

pub fn html_response_with_message(markup: Markup, message: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .header(LOAD_MESSAGE_HEADER, message)
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}
