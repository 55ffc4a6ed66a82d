use std::collections::VecDeque;
use std::io::{self, BufRead};

/// A source of user responses, one line at a time.
pub trait InputSource {
    /// Returns the next line without its terminator, or `None` once input
    /// is exhausted.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads lines from any buffered reader, usually locked stdin.
///
/// Bytes that are not valid UTF-8 are replaced rather than treated as an
/// error, so a garbled line is just another invalid response.
pub struct ConsoleSource<R>(R);

impl<R: BufRead> ConsoleSource<R> {
    pub fn new(reader: R) -> Self {
        Self(reader)
    }
}

impl<R: BufRead> InputSource for ConsoleSource<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.0.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Replays a fixed sequence of responses, then reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputSource for ScriptedSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
