use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
};
use serde_json::json;
use axum::Json;
use thiserror::Error;

use crate::services::converter::DocumentFailure;

/// Failure to read one analysis document. Scoped to that document only.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("XML syntax error at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },
    #[error("ill-formed XML: {0}")]
    IllFormed(String),
}

#[derive(Debug, Error)]
pub enum ExcelError {
    #[error("an XLSX workbook needs at least one sheet")]
    NoSheets,
    #[error("failed to write workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("no valid analysis files could be parsed")]
    NoValidDocuments { failures: Vec<DocumentFailure> },
    #[error(transparent)]
    Excel(#[from] ExcelError),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Upload error: {1}")]
    Upload(StatusCode, String),
    #[error("Conversion failed: {message}")]
    Unprocessable {
        message: String,
        failures: Vec<DocumentFailure>,
    },
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ConvertError> for AppError {
    fn from(err: ConvertError) -> Self {
        match err {
            ConvertError::NoValidDocuments { failures } => AppError::Unprocessable {
                message: "No valid analysis files could be parsed".to_string(),
                failures,
            },
            ConvertError::Excel(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        AppError::Upload(err.status(), err.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::Upload(status, msg) => (status, json!({ "error": msg })),
            AppError::Unprocessable { message, failures } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": message, "failures": failures }),
            ),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg })),
        };

        (status, Json(body)).into_response()
    }
}
