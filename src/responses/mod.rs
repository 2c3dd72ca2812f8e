pub mod errors;
pub mod html;
pub mod xlsx;

pub use errors::html_error_response;
pub use html::{html_response, html_response_with_status, redirect, stylesheet_response};
pub use xlsx::xlsx_response;

pub use crate::errors::ResultResp;
