use std::path::PathBuf;
use thiserror::Error;

pub type SitedataResult<T> = Result<T, SitedataError>;

#[derive(Error, Debug)]
pub enum SitedataError {
    #[error("usage: sitedata <workbook.xlsx>")]
    Usage,

    #[error("workbook not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("spreadsheet support is not available: {0}")]
    MissingDependency(&'static str),

    #[error("failed to read workbook: {0}")]
    Workbook(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
