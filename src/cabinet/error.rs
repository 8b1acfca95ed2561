use thiserror::Error;

#[derive(Error, Debug)]
pub enum CabinetError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store is full (capacity {0})")]
    CapacityExceeded(usize),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

pub type Result<T> = std::result::Result<T, CabinetError>;
