use thiserror::Error;

use crate::contact::Field;

/// Why the contact form refused to start a submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("a message is already being sent")]
    InFlight,
}

/// Failure reported by a [`crate::contact::MessageRelay`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("message rejected: {0}")]
    Rejected(String),
    #[error("message relay unreachable: {0}")]
    Unreachable(String),
}
