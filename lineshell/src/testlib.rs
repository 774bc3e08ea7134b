use core::convert::Infallible;
use std::string::String;
use std::vec::Vec;

use embedded_io::{ErrorKind, ErrorType, Write};

use crate::input::{Action, ControlCharacter, Parser};

pub mod csi {
    pub const UP: &str = "\x1b[A";
    pub const DOWN: &str = "\x1b[B";
    pub const RIGHT: &str = "\x1b[C";
    pub const LEFT: &str = "\x1b[D";
}

/// Dumb serial terminal. Renders printable bytes, backspace, carriage
/// return and line feed, and records everything it was sent.
pub struct MockTerminal {
    parser: Parser,
    screen: Vec<Vec<char>>,
    row: usize,
    column: usize,
    output: Vec<u8>,
}

impl MockTerminal {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
            screen: vec![Vec::new()],
            row: 0,
            column: 0,
            output: Vec::new(),
        }
    }

    /// Raw bytes received since creation or the last `clear_output`
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn output_as_string(&self) -> String {
        String::from_utf8(self.output.clone()).unwrap()
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Rendered screen, one line per row with trailing blanks removed
    pub fn screen_as_string(&self) -> String {
        let mut rows = self
            .screen
            .iter()
            .map(|row| Self::render(row))
            .collect::<Vec<String>>();

        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }

        rows.join("\n")
    }

    /// Rendered row under the cursor
    pub fn current_line(&self) -> String {
        Self::render(&self.screen[self.row])
    }

    /// Render `s` as if it came from the device
    pub fn print(&mut self, s: &str) {
        for byte in s.bytes() {
            self.advance(byte);
        }
    }

    fn render(row: &[char]) -> String {
        row.iter().collect::<String>().trim_end().into()
    }

    fn advance(&mut self, byte: u8) {
        self.output.push(byte);

        // Plain bytes only, the device never sends escape sequences
        self.parser.reset();

        match self.parser.advance(byte) {
            Action::Print(c) => {
                let line = &mut self.screen[self.row];

                if line.len() <= self.column {
                    line.resize(self.column + 1, ' ');
                }

                line[self.column] = c as char;
                self.column += 1;
            }
            Action::ControlCharacter(ctrl) => match ctrl {
                ControlCharacter::CtrlH => self.column = self.column.saturating_sub(1),
                ControlCharacter::CarriageReturn => self.column = 0,
                ControlCharacter::LineFeed => {
                    self.row += 1;

                    if self.screen.len() == self.row {
                        self.screen.push(Vec::new());
                    }
                }
                _ => (),
            },
            _ => (),
        }
    }
}

impl ErrorType for MockTerminal {
    type Error = Infallible;
}

impl Write for MockTerminal {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        for &byte in buf {
            self.advance(byte);
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Sink that refuses every write
pub struct FailingWriter;

impl ErrorType for FailingWriter {
    type Error = ErrorKind;
}

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> Result<usize, Self::Error> {
        Err(ErrorKind::BrokenPipe)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Err(ErrorKind::BrokenPipe)
    }
}
