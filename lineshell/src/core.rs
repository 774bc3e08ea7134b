//! Core line editing state machine.
//!
//! [`Editor`] consumes one received byte at a time and writes the echo
//! for it. When a line is submitted, a copy of it is returned and the
//! editor starts over on an empty line.

use embedded_io::Write;
use heapless::Vec;

use crate::complete::{Candidates, Completer, Completion};
use crate::error::Error;
use crate::history::{History, Recall};
use crate::input::{Action, Arrow, ControlCharacter::*, Parser};
use crate::line_buffer::LineBuffer;
use crate::output::Echo;

/// Line editor for lines of up to `C - 1` bytes
pub struct Editor<'a, const C: usize, H: History, P: Completer> {
    buffer: LineBuffer<C>,
    parser: Parser,
    history: H,
    completer: P,
    prompt: &'a str,
}

impl<'a, const C: usize, H: History, P: Completer> Editor<'a, C, H, P> {
    pub fn new(prompt: &'a str, history: H, completer: P) -> Self {
        Self {
            buffer: LineBuffer::new(),
            parser: Parser::new(),
            history,
            completer,
            prompt,
        }
    }

    pub fn buffer(&self) -> &LineBuffer<C> {
        &self.buffer
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn prompt(&self) -> &'a str {
        self.prompt
    }

    /// Advance state machine by one byte. Returns the line when `byte`
    /// submits it.
    pub fn advance<W: Write>(&mut self, byte: u8, out: &mut W) -> Result<Option<Vec<u8, C>>, Error> {
        let mut echo = Echo::new(out);
        let action = self.parser.advance(byte);

        trace!("editor: {} -> {}", byte, action);

        match action {
            Action::Ignore => (),
            Action::Print(byte) => {
                self.buffer.insert(byte, &mut echo)?;
            }
            Action::Arrow(arrow) => match arrow {
                Arrow::Up => self.history_move_up(&mut echo)?,
                Arrow::Down => self.history_move_down(&mut echo)?,
                Arrow::Right => {
                    self.buffer.move_cursor_right(&mut echo)?;
                }
                Arrow::Left => {
                    self.buffer.move_cursor_left(&mut echo)?;
                }
            },
            Action::ControlCharacter(c) => match c {
                CarriageReturn | LineFeed => return Ok(Some(self.submit())),
                CtrlH | Backspace => {
                    self.buffer.delete_before_cursor(&mut echo)?;
                }
                Tab => self.complete(&mut echo)?,
                Escape => (),
            },
        }

        Ok(None)
    }

    fn submit(&mut self) -> Vec<u8, C> {
        let bytes = self.buffer.as_slice();

        // The buffer never holds more than C - 1 bytes
        let line = Vec::from_slice(bytes).unwrap_or_default();

        self.history.save(bytes);
        self.history.reset_navigation();
        self.buffer.reset();
        self.parser.reset();

        debug!("editor: line submitted, {} bytes", line.len());

        line
    }

    fn history_move_up<W: Write>(&mut self, echo: &mut Echo<'_, W>) -> Result<(), Error> {
        if let Some(entry) = self.history.recall_up() {
            self.buffer.clear_line(echo)?;
            self.buffer.load(entry, echo)?;
        }

        Ok(())
    }

    fn history_move_down<W: Write>(&mut self, echo: &mut Echo<'_, W>) -> Result<(), Error> {
        match self.history.recall_down() {
            Some(Recall::Entry(entry)) => {
                self.buffer.clear_line(echo)?;
                self.buffer.load(entry, echo)?;
            }
            Some(Recall::Fresh) => self.buffer.clear_line(echo)?,
            None => (),
        }

        Ok(())
    }

    fn complete<W: Write>(&mut self, echo: &mut Echo<'_, W>) -> Result<(), Error> {
        match Completion::find(&self.completer, self.buffer.as_str()) {
            Completion::NoMatch => (),
            Completion::Unique(suffix) => {
                self.buffer.append(suffix.as_bytes(), echo)?;
            }
            Completion::Ambiguous(_) => {
                let prefix = self.buffer.as_str();

                echo.newline()?;

                for suffix in Candidates::new(&self.completer, prefix) {
                    echo.bytes(prefix.as_bytes())?;
                    echo.bytes(suffix.as_bytes())?;
                    echo.newline()?;
                }

                echo.bytes(self.prompt.as_bytes())?;
                echo.bytes(self.buffer.as_slice())?;
                echo.backspaces(self.buffer.len() - self.buffer.cursor())?;
            }
        }

        Ok(())
    }
}
