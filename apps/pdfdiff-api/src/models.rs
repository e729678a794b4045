//! Data models for the PDF Diff API

use pdfdiff_core::Document;
use serde::{Deserialize, Serialize};

/// Request to compare two document versions. Both sides arrive already
/// extracted to positioned text blocks by the client-side collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    pub document_a: Document,
    pub document_b: Document,
}
