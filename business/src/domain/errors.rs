/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.malformed_snapshot")]
    MalformedSnapshot,
    #[error("repository.storage_unavailable")]
    StorageUnavailable,
}
