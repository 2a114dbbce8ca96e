pub mod client;
pub mod error;
pub mod event;
pub mod payload;

pub use error::EventError;
pub use event::{EventRecord, pull_request_opened_event, unix_timestamp};
pub use payload::WebhookContext;
