mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use bytes::Bytes;
use calamine::Reader;
use tower::ServiceExt;

use analysis_sheets::{
    app,
    config::Config,
    services::converter::{convert, SourceDocument},
};
use common::*;

const IMPORTED: &str = "05/01/2024 02:30:00 PM";

fn source(name: &str, xml: String) -> SourceDocument {
    SourceDocument {
        name: name.to_string(),
        bytes: Bytes::from(xml),
    }
}

fn upload(uri: &str, files: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(files)))
        .unwrap()
}

#[test]
fn single_document_end_to_end() {
    let sources = vec![source("fr.xml", report("Demo", "French", "intro.docx", 100, 100))];
    let conversion = convert(&sources, IMPORTED).unwrap();
    assert_eq!(conversion.file_name, "Demo_Analysis.xlsx");
    assert_eq!(conversion.summaries[0].weighted_words, 100);

    let mut workbook = open_xlsx(conversion.workbook);
    assert_eq!(workbook.sheet_names(), vec!["French".to_string()]);

    assert_eq!(text_at(&mut workbook, "French", 0, 0), "Project: Demo");
    assert_eq!(
        text_at(&mut workbook, "French", 1, 0),
        "Imported on 05/01/2024 02:30:00 PM"
    );
    assert_eq!(text_at(&mut workbook, "French", 2, 9), "Weighted (Net)");

    // Single data row on spreadsheet row 4.
    assert_eq!(number_at(&mut workbook, "French", 3, 0), 1.0);
    assert_eq!(text_at(&mut workbook, "French", 3, 1), "intro.docx");
    assert_eq!(number_at(&mut workbook, "French", 3, 2), 100.0);
    assert_eq!(number_at(&mut workbook, "French", 3, 8), 100.0);
    assert_eq!(number_at(&mut workbook, "French", 3, 9), 100.0);

    assert_eq!(text_at(&mut workbook, "French", 4, 1), "Totals");
    assert_eq!(formula_at(&mut workbook, "French", 4, 8), "SUM(I4:I4)");
    assert_eq!(formula_at(&mut workbook, "French", 4, 9), "SUM(J4:J4)");
    assert_eq!(formula_at(&mut workbook, "French", 4, 2), "SUM(C4:C4)");
}

#[test]
fn duplicate_languages_get_suffixed_sheets_in_input_order() {
    let sources = vec![
        source("fr-a.xml", report("Demo", "French", "a.docx", 10, 10)),
        source("es.xml", report("Demo", "Spanish", "b.docx", 20, 20)),
        source("fr-b.xml", report("Other", "French", "c.docx", 30, 30)),
    ];
    let conversion = convert(&sources, IMPORTED).unwrap();
    let workbook = open_xlsx(conversion.workbook);
    assert_eq!(workbook.sheet_names(), vec!["French", "Spanish", "French_1"]);
    assert_eq!(conversion.file_name, "Demo_Analysis.xlsx");
}

#[tokio::test]
async fn health_check_responds() {
    let response = app(Config::default())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn convert_endpoint_returns_workbook_and_skips_broken_uploads() {
    let french = report("Spring Catalogue", "French", "a.docx", 40, 50);
    let german = report("Spring Catalogue", "German", "b.docx", 60, 70);
    let request = upload(
        "/analyses/convert",
        &[
            ("fr.xml", french.as_str()),
            ("broken.xml", "<task><file>"),
            ("notes.txt", "hello"),
            ("de.xml", german.as_str()),
        ],
    );

    let response = app(Config::default()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"Spring Catalogue_Analysis.xlsx\""
    );
    assert_eq!(response.headers()["x-skipped-documents"], "2");

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let mut workbook = open_xlsx(body.to_vec());
    assert_eq!(workbook.sheet_names(), vec!["French", "German"]);
    assert_eq!(number_at(&mut workbook, "German", 3, 9), 60.0);
}

#[tokio::test]
async fn summary_endpoint_reports_languages_and_failures() {
    let french = report("Demo", "French", "a.docx", 40, 50);
    let request = upload(
        "/analyses/summary",
        &[("fr.xml", french.as_str()), ("broken.xml", "not xml")],
    );

    let response = app(Config::default()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["project_name"], "Demo");
    assert_eq!(json["file_name"], "Demo_Analysis.xlsx");
    assert_eq!(json["languages"][0]["language"], "French");
    assert_eq!(json["languages"][0]["files"], 1);
    assert_eq!(json["languages"][0]["total_words"], 50);
    assert_eq!(json["languages"][0]["weighted_words"], 40);
    assert_eq!(json["failures"][0]["document"], "broken.xml");
}

#[tokio::test]
async fn all_broken_uploads_is_unprocessable() {
    let request = upload(
        "/analyses/convert",
        &[("a.xml", "<task>"), ("b.csv", "id,words")],
    );

    let response = app(Config::default()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "No valid analysis files could be parsed");
    assert_eq!(json["failures"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn upload_without_files_is_rejected() {
    let request = upload("/analyses/convert", &[]);
    let response = app(Config::default()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
