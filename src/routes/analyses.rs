use axum::{
    extract::{DefaultBodyLimit, Multipart},
    http::{header, HeaderName, HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::{Any, CorsLayer}, trace::TraceLayer};

use crate::{
    AppState,
    error::{AppError, ConvertError},
    models::LanguageSummary,
    services::converter::{self, DocumentFailure, SourceDocument},
};

const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const SKIPPED_HEADER: &str = "x-skipped-documents";

pub fn routes(state: &AppState) -> Router<Arc<AppState>> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .expose_headers([header::CONTENT_DISPOSITION, HeaderName::from_static(SKIPPED_HEADER)])
        .max_age(std::time::Duration::from_secs(3600));

    Router::new()
        .route("/analyses/convert", post(convert_analyses))
        .route("/analyses/summary", post(summarize_analyses))
        .layer(DefaultBodyLimit::max(state.config.max_upload_size))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    project_name: String,
    file_name: String,
    languages: Vec<LanguageSummary>,
    failures: Vec<DocumentFailure>,
}

/// Uploaded analysis files plus uploads rejected before parsing.
struct Uploads {
    sources: Vec<SourceDocument>,
    rejected: Vec<DocumentFailure>,
}

impl Uploads {
    fn no_valid_documents(mut self, mut failures: Vec<DocumentFailure>) -> AppError {
        self.rejected.append(&mut failures);
        ConvertError::NoValidDocuments {
            failures: self.rejected,
        }
        .into()
    }
}

async fn read_uploads(mut multipart: Multipart) -> Result<Uploads, AppError> {
    let mut uploads = Uploads {
        sources: Vec::new(),
        rejected: Vec::new(),
    };

    while let Some(field) = multipart.next_field().await? {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            tracing::debug!("Ignoring form field {:?} without a file", field.name());
            continue;
        };

        if !file_name.to_lowercase().ends_with(".xml") {
            tracing::warn!("Rejecting upload {}: not an XML file", file_name);
            uploads.rejected.push(DocumentFailure {
                document: file_name,
                error: "Only XML analysis files are supported".to_string(),
            });
            continue;
        }

        let bytes = field.bytes().await?;
        tracing::info!("Received {} ({}KB)", file_name, bytes.len() / 1024);
        uploads.sources.push(SourceDocument {
            name: file_name,
            bytes,
        });
    }

    if uploads.sources.is_empty() && uploads.rejected.is_empty() {
        return Err(AppError::InvalidInput("No file provided".to_string()));
    }

    Ok(uploads)
}

fn import_time_now() -> String {
    converter::format_import_time(chrono::Local::now().naive_local())
}

async fn convert_analyses(multipart: Multipart) -> Result<Response, AppError> {
    let uploads = read_uploads(multipart).await?;
    tracing::info!("Converting {} analysis file(s)", uploads.sources.len());

    let conversion = match converter::convert(&uploads.sources, &import_time_now()) {
        Ok(conversion) => conversion,
        Err(ConvertError::NoValidDocuments { failures }) => {
            return Err(uploads.no_valid_documents(failures));
        }
        Err(e) => return Err(e.into()),
    };

    for summary in &conversion.summaries {
        tracing::info!(
            "{}: {} file(s), {} words, {} weighted",
            summary.language,
            summary.files,
            summary.total_words,
            summary.weighted_words
        );
    }

    let disposition = HeaderValue::from_bytes(
        format!("attachment; filename=\"{}\"", conversion.file_name).as_bytes(),
    )
    .map_err(|e| AppError::Internal(format!("Invalid download name: {}", e)))?;
    let skipped = uploads.rejected.len() + conversion.failures.len();

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(XLSX_CONTENT_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
            (HeaderName::from_static(SKIPPED_HEADER), HeaderValue::from(skipped)),
        ],
        conversion.workbook,
    )
        .into_response())
}

async fn summarize_analyses(multipart: Multipart) -> Result<Json<SummaryResponse>, AppError> {
    let uploads = read_uploads(multipart).await?;
    let batch = converter::extract_batch(&uploads.sources);

    let Some(first) = batch.documents.first() else {
        return Err(uploads.no_valid_documents(batch.failures));
    };

    let project_name = first.project_name.clone();
    let file_name = batch.output_file_name();
    let languages = batch.summaries();
    let mut failures = uploads.rejected;
    failures.extend(batch.failures);

    Ok(Json(SummaryResponse {
        project_name,
        file_name,
        languages,
        failures,
    }))
}
