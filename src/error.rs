use serde_json::{json, Value};
use std::error::Error as _;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RagChatError {
    #[error("no se pudo conectar con {url}: {cause}")]
    Connect { url: String, cause: String },

    #[error("tiempo de espera agotado tras {secs}s ({url})")]
    Timeout { url: String, secs: u64 },

    #[error("el servidor respondió con estado {status} ({url})")]
    Status { status: u16, url: String },

    #[error("respuesta JSON inválida: {0}")]
    InvalidJson(String),

    #[error("error de red: {0}")]
    Network(String),
}

impl RagChatError {
    /// Map a reqwest failure onto the variant the user should see.
    pub fn from_reqwest(err: reqwest::Error, url: &str, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            RagChatError::Timeout {
                url: url.to_string(),
                secs: timeout_secs,
            }
        } else if err.is_connect() {
            RagChatError::Connect {
                url: url.to_string(),
                cause: cause_chain(&err),
            }
        } else if let Some(status) = err.status() {
            RagChatError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            }
        } else if err.is_decode() {
            RagChatError::InvalidJson(cause_chain(&err))
        } else {
            RagChatError::Network(cause_chain(&err))
        }
    }

    /// The `{"error": ...}` body printed in place of a server response.
    pub fn to_response(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}

// reqwest's top-level message rarely names the root cause ("Connection
// refused" lives a few sources down), so flatten the chain.
fn cause_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = inner.source();
    }
    message
}

pub type Result<T> = std::result::Result<T, RagChatError>;
