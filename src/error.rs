use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("No home directory")]
    NoHomeDir,

    #[error("Invalid default time '{value}' (expected {expected})")]
    InvalidDefaultTime {
        value: String,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
