//! Line-oriented shell over a single session.
//!
//! Each input line is split with shell quoting rules and parsed with the
//! same command grammar as the command line, so changes made by one line
//! are visible to the next.

use std::io::{BufRead, Write};

use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

use crate::cli::{ShellCommand, ShellLine};
use crate::error::{Error, Result};
use crate::render::Renderer;
use crate::session::Session;

const PROMPT: &str = "staffdir> ";

/// What the shell should do after a line.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

/// Runs shell lines against a session.
#[derive(Debug)]
pub struct Shell<'a> {
    session: &'a mut Session,
    renderer: Renderer,
    prompt: bool,
}

impl<'a> Shell<'a> {
    /// Create a shell. When `prompt` is set a prompt is printed before
    /// every line.
    #[must_use]
    pub fn new(session: &'a mut Session, renderer: Renderer, prompt: bool) -> Self {
        Self {
            session,
            renderer,
            prompt,
        }
    }

    /// Read lines until end of input or `exit`.
    ///
    /// Command failures are reported on `output` and do not stop the shell.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(output, "{PROMPT}")?;
                output.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            match self.handle_line(&line) {
                Ok((Step::Exit, _)) => break,
                Ok((Step::Continue, Some(text))) => writeln!(output, "{text}")?,
                Ok((Step::Continue, None)) => {}
                Err(err) => writeln!(output, "error: {err}")?,
            }
        }
        if self.prompt {
            writeln!(output)?;
        }
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Result<(Step, Option<String>)> {
        let words = shell_words::split(line)
            .map_err(|e| Error::command_parse(format!("failed to parse line: {e}")))?;
        if words.is_empty() {
            return Ok((Step::Continue, None));
        }
        debug!("Shell command: {:?}", words);

        let parsed = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp) => {
                return Ok((Step::Continue, Some(err.to_string().trim_end().to_string())));
            }
            Err(err) => {
                let message = err.to_string();
                let message = message.trim_end();
                return Err(Error::command_parse(
                    message.strip_prefix("error: ").unwrap_or(message),
                ));
            }
        };

        match parsed.command {
            ShellCommand::Exit => Ok((Step::Exit, None)),
            ShellCommand::Directory(command) => {
                let outcome = self.session.execute(command)?;
                Ok((Step::Continue, Some(self.renderer.render(&outcome)?)))
            }
        }
    }
}
