use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("not authenticated — run `techhub auth login`")]
    NotAuthenticated,
}
