use crate::api::{RagClient, Reply};
use crate::cli::Args;
use crate::ui;
use std::io::{self, Write};

/// What the invocation asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Once(String),
    Help,
}

impl Mode {
    /// `--interactive` wins over a positional query; an empty query counts as
    /// none.
    pub fn from_args(args: &Args) -> Self {
        if args.interactive {
            return Mode::Interactive;
        }

        match args.query.as_deref() {
            Some(query) if !query.is_empty() => Mode::Once(query.to_string()),
            _ => Mode::Help,
        }
    }
}

/// Send a single question and print the outcome.
///
/// With `json` set only the raw body is written (a failed request as its
/// `{"error": ...}` body), without colour and without echoing the question.
pub async fn ask_once<W: Write>(
    client: &RagClient<'_>,
    query: &str,
    session_override: Option<&str>,
    json: bool,
    out: &mut W,
) -> io::Result<()> {
    if !json {
        ui::display_question(out, query)?;
        out.flush()?;
    }

    let result = client.ask(query, session_override).await;

    if json {
        let body = match &result {
            Ok(body) => body.clone(),
            Err(e) => e.to_response(),
        };
        ui::display_json(out, &body)?;
    } else {
        let reply = Reply::from_result(&result, client.config().include_sources);
        ui::render(out, &reply, client.config().include_sources)?;
    }

    out.flush()
}
