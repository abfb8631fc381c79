use crate::api::Reply;
use colored::*;
use serde_json::Value;
use std::io::{self, Write};

pub const FAREWELL: &str = "¡Hasta luego!";

/// Echo the question before it is sent.
pub fn display_question<W: Write>(out: &mut W, query: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "Pregunta:".blue(), query)?;
    writeln!(out)
}

/// Print a classified reply.
pub fn render<W: Write>(out: &mut W, reply: &Reply, show_sources: bool) -> io::Result<()> {
    match reply {
        Reply::Error { message } => {
            writeln!(out, "{}", format!("Error: {}", message).red())?;
        }
        Reply::Answer { text, sources } => {
            writeln!(out, "{}", "Respuesta:".green())?;
            writeln!(out, "{}", text)?;
            writeln!(out)?;

            if show_sources && !sources.is_empty() {
                writeln!(out, "{}", "Fuentes:".yellow())?;
                for source in sources {
                    writeln!(out, "  - {}", source)?;
                }
                writeln!(out)?;
            }
        }
        Reply::Unknown(body) => {
            writeln!(out, "{}", "Respuesta (JSON):".yellow())?;
            display_json(out, body)?;
        }
    }
    Ok(())
}

/// Two-space indented JSON. serde_json leaves non-ASCII characters as they
/// are, and `preserve_order` keeps the server's key order.
pub fn display_json<W: Write>(out: &mut W, body: &Value) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, body)?;
    writeln!(out)
}

pub fn display_banner<W: Write>(out: &mut W, endpoint: &str, session_id: &str) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "=== RAG Chat CLI - Modo Interactivo ===".green().bold()
    )?;
    writeln!(out, "Endpoint: {}", endpoint.blue())?;
    writeln!(out, "Session ID: {}", session_id.blue())?;
    writeln!(out, "Escribe 'exit' o 'quit' para salir")?;
    writeln!(out)
}

pub fn display_farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", FAREWELL)
}
