pub mod client;
pub mod models;
pub mod response;

pub use client::RagClient;
pub use models::{ToolArguments, ToolCallRequest};
pub use response::Reply;
