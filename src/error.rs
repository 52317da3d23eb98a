use thiserror::Error;

#[derive(Error, Debug)]
pub enum SphereError {
    #[error("Invalid sector count: {0} (at least 3 required)")]
    InvalidSectorCount(u32),

    #[error("Invalid stack count: {0} (at least 2 required)")]
    InvalidStackCount(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
