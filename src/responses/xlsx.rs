// responses/xlsx.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Send a finished workbook as a download.
pub fn xlsx_response(buffer: Vec<u8>, filename: &str) -> ResultResp {
    let length = buffer.len();

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", XLSX_MIME)
        .header("Content-Length", length)
        .header("Cache-Control", "no-store")
        .header("Content-Disposition", format!("attachment; filename=\"{filename}\""))
        .body(Body::from(buffer))
        .map_err(|e| ServerError::XlsxError(format!("building download failed: {e}")))
}
