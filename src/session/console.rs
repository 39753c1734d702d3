//! Console I/O boundary.
//!
//! The session talks to the player only through `Console`, so tests can
//! script input and capture output without a terminal.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Line-oriented text I/O.
pub trait Console {
    /// Write one line of output.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Show `prompt` and read one line of input, without its line ending.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Console over any buffered reader and writer.
#[derive(Debug)]
pub struct StdConsole<R, W> {
    reader: R,
    writer: W,
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    /// Create a console over a reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Take back the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        // Invalid UTF-8 is decoded lossily so it fails to parse and re-prompts.
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&bytes);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Console that replays scripted input and records output lines.
#[derive(Clone, Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: Vec<String>,
    prompts: usize,
}

impl ScriptedConsole {
    /// Create a console that answers prompts with `inputs` in order, then
    /// reports end of input.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            prompts: 0,
        }
    }

    /// Every line written so far.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Number of times input was requested.
    #[must_use]
    pub fn prompts(&self) -> usize {
        self.prompts
    }

    /// Scripted inputs not yet consumed.
    #[must_use]
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Check if any output line equals `line`.
    #[must_use]
    pub fn printed(&self, line: &str) -> bool {
        self.output.iter().any(|l| l == line)
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        self.prompts += 1;
        Ok(self.inputs.pop_front())
    }
}
