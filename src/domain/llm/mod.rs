//! Chat message primitives shared by the provider adapters

mod message;

pub use message::{Message, MessageRole};
