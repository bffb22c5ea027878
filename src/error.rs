use thiserror::Error;

/// Terminal failures. Scene-file problems are deliberately absent: unknown
/// keywords and malformed numbers are skipped during parsing and the
/// defaults stand.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("usage: renderer <input_scene> <output_image>")]
    Usage,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
