use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    /// 报告文件写入失败，不重试
    #[error("Failed to write report to '{}': {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read log input: {0}")]
    Input(#[source] std::io::Error),
    #[error("Failed to write to console: {0}")]
    Console(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TriageError>;
