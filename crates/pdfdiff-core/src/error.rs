use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Invalid geometry in document {side}, page {page}: {detail}")]
    InvalidGeometry {
        side: &'static str,
        page: usize,
        detail: String,
    },
}
