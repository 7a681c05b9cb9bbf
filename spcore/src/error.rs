use thiserror::Error;

#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ClipboardError {
    #[error("clipboard is unavailable in this environment")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ObserverError {
    #[error("viewport observer is unavailable in this environment")]
    Unavailable,
    #[error("viewport observer already attached")]
    AlreadyAttached,
    #[error("failed to attach viewport observer: {0}")]
    Attach(String),
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("unknown deployment: {0}")]
pub struct UnknownDeployment(pub String);
