use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown wave preset `{0}` (expected `full` or `low`)")]
    UnknownWavePreset(String),
    #[error("navigation label list is empty")]
    EmptyNavLabels,
    #[error("invalid seed `{0}`")]
    InvalidSeed(String),
    #[error("logo url is empty")]
    EmptyLogoUrl,
}
