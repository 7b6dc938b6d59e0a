use std::io;

use codec_sbc::errors::SbcCodecError;
use config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("sbc codec error: {0}")]
    Codec(#[from] SbcCodecError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logger setup failed: {0}")]
    Logger(String),
    #[error("invalid configuration byte: {0}")]
    InvalidByte(String),
    #[error("no sbc configuration available: {0}")]
    NoConfiguration(String),
}

pub(crate) type AppResult<T> = Result<T, AppError>;
