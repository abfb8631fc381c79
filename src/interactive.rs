//! Line-based interactive mode: one question per line, one request in flight.

use crate::api::{RagClient, Reply};
use crate::ui;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::collections::VecDeque;
use std::io::{self, Write};
use tokio::sync::mpsc;
use tracing::debug;

/// Outcome of reading one line from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    Interrupted,
    Eof,
}

pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Input>;
}

impl LineSource for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> io::Result<Input> {
        match self.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.add_history_entry(line.as_str());
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(ReadlineError::Io(e)) => Err(e),
            Err(e) => Err(io::Error::other(e.to_string())),
        }
    }
}

/// Pre-recorded input for driving the loop without a terminal. Reads past the
/// last entry return `Eof`.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<Input>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(|l| Input::Line(l.into())).collect(),
        }
    }

    pub fn push(&mut self, input: Input) {
        self.lines.push_back(input);
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Input> {
        Ok(self.lines.pop_front().unwrap_or(Input::Eof))
    }
}

fn is_exit_command(line: &str) -> bool {
    line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit")
}

/// Ctrl-C notifications for the loop.
///
/// The listener is installed once when the loop starts and replaces the
/// default SIGINT behaviour for the rest of the process. An interrupt that
/// arrives outside a request (while a reply renders, or while a line is read
/// from a non-terminal stdin) is kept and ends the loop at the next prompt
/// boundary. With a terminal, rustyline reports Ctrl-C itself.
pub struct Interrupts {
    source: InterruptSource,
}

enum InterruptSource {
    #[cfg(unix)]
    Signal(tokio::signal::unix::Signal),
    #[cfg(windows)]
    Signal(tokio::signal::windows::CtrlC),
    Channel(mpsc::UnboundedReceiver<()>),
    Disabled,
}

/// Raises interrupts on an `Interrupts` built with `Interrupts::manual`.
#[derive(Debug, Clone)]
pub struct InterruptHandle(mpsc::UnboundedSender<()>);

impl InterruptHandle {
    pub fn trigger(&self) {
        let _ = self.0.send(());
    }
}

impl Interrupts {
    /// Listen for Ctrl-C. Must be called from within the tokio runtime. If
    /// the handler cannot be installed interrupts are never reported, so
    /// requests are not cut short.
    pub fn install() -> Self {
        #[cfg(unix)]
        let installed =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())
                .map(InterruptSource::Signal);
        #[cfg(windows)]
        let installed = tokio::signal::windows::ctrl_c().map(InterruptSource::Signal);
        #[cfg(not(any(unix, windows)))]
        let installed: io::Result<InterruptSource> = Ok(InterruptSource::Disabled);

        let source = installed.unwrap_or_else(|e| {
            debug!(error = %e, "could not install Ctrl-C handler");
            InterruptSource::Disabled
        });

        Self { source }
    }

    /// Interrupts driven by hand instead of by the OS.
    pub fn manual() -> (Self, InterruptHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let interrupts = Self {
            source: InterruptSource::Channel(rx),
        };
        (interrupts, InterruptHandle(tx))
    }

    /// Resolves on the next interrupt.
    async fn recv(&mut self) {
        let received = match &mut self.source {
            #[cfg(any(unix, windows))]
            InterruptSource::Signal(signal) => signal.recv().await,
            InterruptSource::Channel(rx) => rx.recv().await,
            InterruptSource::Disabled => None,
        };

        if received.is_none() {
            std::future::pending::<()>().await;
        }
    }

    /// Whether an interrupt arrived since the last check, without waiting.
    async fn take_pending(&mut self) -> bool {
        // Let the runtime drain signal deliveries queued while the thread was
        // blocked reading input.
        tokio::task::yield_now().await;

        tokio::select! {
            biased;
            _ = self.recv() => true,
            _ = std::future::ready(()) => false,
        }
    }
}

/// Run the loop until `exit`/`quit`, an interrupt or end of input.
pub async fn run<S, W>(
    client: &RagClient<'_>,
    session_override: Option<&str>,
    input: &mut S,
    out: &mut W,
) -> io::Result<()>
where
    S: LineSource,
    W: Write,
{
    let mut interrupts = Interrupts::install();
    run_with_interrupts(client, session_override, input, out, &mut interrupts).await
}

pub async fn run_with_interrupts<S, W>(
    client: &RagClient<'_>,
    session_override: Option<&str>,
    input: &mut S,
    out: &mut W,
    interrupts: &mut Interrupts,
) -> io::Result<()>
where
    S: LineSource,
    W: Write,
{
    let session_id = session_override.unwrap_or(client.config().session_id.as_str());
    ui::display_banner(out, client.endpoint(), session_id)?;

    let prompt = format!("{} ", "Tu pregunta:".blue());

    loop {
        out.flush()?;

        if interrupts.take_pending().await {
            writeln!(out)?;
            break;
        }

        let line = input.read_line(&prompt)?;
        if interrupts.take_pending().await {
            debug!("interrupted while reading input");
            writeln!(out)?;
            break;
        }

        let query = match line {
            Input::Line(line) => line.trim().to_string(),
            Input::Interrupted | Input::Eof => {
                writeln!(out)?;
                break;
            }
        };

        if query.is_empty() {
            continue;
        }

        if is_exit_command(&query) {
            break;
        }

        ui::display_question(out, &query)?;
        out.flush()?;

        let result = tokio::select! {
            result = client.ask(&query, session_override) => result,
            _ = interrupts.recv() => {
                debug!("interrupted while waiting for a response");
                writeln!(out)?;
                break;
            }
        };

        let reply = Reply::from_result(&result, client.config().include_sources);
        ui::render(out, &reply, client.config().include_sources)?;
    }

    ui::display_farewell(out)?;
    out.flush()
}
