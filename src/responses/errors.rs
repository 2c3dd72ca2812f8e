use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();

    if status >= 500 {
        tracing::error!(status, error = %err, "request failed");
    } else {
        tracing::warn!(status, error = %err, "request rejected");
    }

    let message = match &err {
        // Don't leak SQL details to the desk.
        ServerError::DbError(_) => "The hotel records could not be reached. Please try again.".to_string(),
        other => other.to_string(),
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(error_page(status, &message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
