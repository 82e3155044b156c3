use crate::config::ConfigError;
use crate::contact::ValidationError;
use crate::storage::StorageError;

/// Any error the crate can return.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("render failed: {0}")]
    Render(#[from] minijinja::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
