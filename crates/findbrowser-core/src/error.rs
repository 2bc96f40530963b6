use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Registry error: {0}")]
    Registry(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to resolve shortcut {}: {}", path.display(), message)]
    Shortcut { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
