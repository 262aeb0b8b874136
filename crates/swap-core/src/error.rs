use thiserror::Error;

/// Rejected textual input for one of the engine's enum parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unsupported language: {0:?}")]
    Language(String),
    #[error("unsupported board size: {0:?}")]
    BoardSize(String),
    #[error("unsupported content profile: {0:?}")]
    Profile(String),
    #[error("unsupported play mode: {0:?}")]
    PlayMode(String),
}
