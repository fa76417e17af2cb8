use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Invalid card index: {0}")]
    InvalidCardIndex(usize),
    #[error("Invalid card name: {0}")]
    InvalidCardName(String),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
