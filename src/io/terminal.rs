//! Line-oriented terminal access.
//!
//! The game talks to the player through `Terminal` so that sessions can be
//! driven from stdin/stdout or from in-memory buffers in tests.

use std::io::{self, BufRead, Write};

/// Erase the display and home the cursor. Written to the console's own
/// sink, not a tty handle, so redirected and captured output carries it too.
const CLEAR_SEQUENCE: &str = "\x1B[2J\x1B[1;1H";

/// Blocking line I/O.
pub trait Terminal {
    /// Read one line without its trailing newline.
    ///
    /// Bytes that are not UTF-8 come through as replacement characters, so
    /// they reach the prompt's own validation. End of input is reported as `io::ErrorKind::UnexpectedEof`.
    fn read_line(&mut self) -> io::Result<String>;

    /// Write text without a newline and flush, for inline prompts.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Write text followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Clear the screen, if the terminal supports it.
    fn clear(&mut self) -> io::Result<()>;
}

/// `Terminal` over any buffered reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console that never clears the screen.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    /// Emit ANSI clear sequences on `clear()`.
    #[must_use]
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Borrow the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consume the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    fn read_line(&mut self) -> io::Result<String> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        while matches!(raw.last(), Some(b'\n' | b'\r')) {
            raw.pop();
        }
        let line = String::from_utf8_lossy(&raw).into_owned();
        tracing::trace!(line = %line, "read input");
        Ok(line)
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            self.write(CLEAR_SEQUENCE)?;
        }
        Ok(())
    }
}
