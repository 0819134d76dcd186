//! Line input for the shell and the console dialogs.
//!
//! Both read from the same stdin; neither may hold the stdin lock between
//! lines, so production input goes through [`io::Stdin::read_line`].

use std::io::{self, BufRead};

pub trait LineSource {
    /// Next line without its line ending, or `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

fn trim_newline(mut line: String) -> String {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}

impl LineSource for io::Stdin {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(trim_newline(line))),
        }
    }
}

/// Adapter for any buffered reader (tests, piped scripts).
pub struct ReaderLines<R>(pub R);

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.0.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(trim_newline(line))),
        }
    }
}
