//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by `ScreeningService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScreeningError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ResultService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResultError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ProfileService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProfileError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
