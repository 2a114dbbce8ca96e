use thiserror::Error;

/// Errors raised while turning a webhook payload into an event record.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("invalid created_at timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),

    #[error("event payload is missing the `{0}` field")]
    MissingField(&'static str),
}
