//! HTTP handlers for the PDF Diff API

use axum::Json;
use pdfdiff_core::ComparisonReport;

use crate::error::ApiError;
use crate::models::CompareRequest;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Compare two extracted document versions
pub async fn compare(
    Json(req): Json<CompareRequest>,
) -> Result<Json<ComparisonReport>, ApiError> {
    let report = pdfdiff_core::compare(&req.document_a, &req.document_b)?;

    tracing::info!(
        "Compared documents: {} vs {} pages, {} differences",
        req.document_a.pages.len(),
        req.document_b.pages.len(),
        report.differences.len()
    );

    Ok(Json(report))
}
