//! Crate error type

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Required page element #{0} is missing")]
    MissingElement(&'static str),
    #[error("JavaScript call failed: {0}")]
    Js(String),
    #[error("Graphics setup failed: {0}")]
    Graphics(String),
    #[error("Tuning could not be parsed")]
    TuningParse(#[from] serde_json::Error),
    #[error("Invalid tuning: {0}")]
    InvalidTuning(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
