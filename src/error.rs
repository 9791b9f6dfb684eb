use std::path::PathBuf;
use thiserror::Error;

pub type PeekResult<T> = Result<T, PeekError>;

#[derive(Error, Debug)]
pub enum PeekError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("not a valid workbook: {0}")]
    Format(String),

    #[error("workbook structure unreadable: {0}")]
    Corruption(String),

    #[error("cell {reference} not found in value view of sheet '{sheet}'")]
    Lookup { sheet: String, reference: String },

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl PeekError {
    /// Classify a calamine error raised while opening a workbook.
    ///
    /// Zip-level failures mean the file is not an xlsx container at all;
    /// anything past the container means the structure inside is unreadable.
    pub fn from_open(err: calamine::XlsxError) -> Self {
        match err {
            calamine::XlsxError::Io(e) => PeekError::Io(e),
            e @ calamine::XlsxError::Zip(_) => PeekError::Format(e.to_string()),
            e => PeekError::Corruption(e.to_string()),
        }
    }
}
