mod core;
mod error;
pub use error::RelayError;
pub use self::core::{ChatReply, ChatRequest, Relay};
