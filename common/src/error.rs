//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("Unknown distance metric: {0}")]
    UnknownMetric(String),

    #[error("A prediction request is already in flight")]
    SubmissionInFlight,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
