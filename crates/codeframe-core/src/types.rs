use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Svg,
    Png,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid color: {0}")]
    InvalidColor(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("surface creation: {0}")]
    Surface(String),
    #[error("encode error: {0}")]
    Encode(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
