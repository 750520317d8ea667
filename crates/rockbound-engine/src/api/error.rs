use thiserror::Error;

/// Configuration errors raised by the host engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("no scene registered under `{0}`")]
    UnknownScene(String),
    #[error("no active scene")]
    NoActiveScene,
}
