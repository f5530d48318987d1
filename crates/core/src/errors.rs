use thiserror::Error;

/// Unified error type for the entire dashboard-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
///
/// Empty selections and empty results are NOT errors: they surface as
/// `ChartPanel::NoData` and an absent average order value.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input / File ────────────────────────────────────────────────
    #[error("Invalid file format: {0}")]
    InvalidFileFormat(String),

    #[error("Invalid record on line {line}: {message}")]
    InvalidRecord { line: u64, message: String },

    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Rendering ───────────────────────────────────────────────────
    #[error("Render error ({renderer}): {message}")]
    RenderError { renderer: String, message: String },

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<csv::Error> for CoreError {
    fn from(e: csv::Error) -> Self {
        // Row-level problems carry a position; keep the line so the user can find it.
        let line = e.position().map(|p| p.line());
        match e.into_kind() {
            csv::ErrorKind::Io(io) => CoreError::FileIO(io.to_string()),
            csv::ErrorKind::Deserialize { err, .. } => CoreError::InvalidRecord {
                line: line.unwrap_or(0),
                message: err.to_string(),
            },
            csv::ErrorKind::UnequalLengths { expected_len, len, .. } => {
                CoreError::InvalidRecord {
                    line: line.unwrap_or(0),
                    message: format!("expected {expected_len} fields, found {len}"),
                }
            }
            other => CoreError::InvalidFileFormat(format!("{other:?}")),
        }
    }
}
