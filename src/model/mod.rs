pub mod global_error;
pub mod message;

pub use global_error::NotifierError;
pub use message::{Block, SlackPayload, TestMessage, TextObject};
