pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod orchestrator;
pub mod ui;

pub use api::{RagClient, Reply};
pub use config::{Config, FileConfig};
pub use error::{RagChatError, Result};
