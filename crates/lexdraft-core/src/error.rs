use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown export format: {0} (expected pdf or docx)")]
    UnknownExportFormat(String),
}
