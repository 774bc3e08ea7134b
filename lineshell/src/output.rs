//! Terminal output
//!
//! Everything the editor sends to the terminal goes through [`Echo`].
//! Cursor control is limited to plain backspace bytes so any dumb
//! serial terminal can follow along.

use core::fmt;

use embedded_io::Write;

use crate::error::Error;
use crate::input::ControlCharacter;

const NEWLINE: &[u8] = b"\r\n";
const ERASE: &[u8] = b"\x08 \x08";

/// Byte sink for editor echo
pub struct Echo<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> Echo<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out }
    }

    pub fn bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        if bytes.is_empty() {
            return Ok(());
        }

        self.out.write_all(bytes).map_err(Error::write)
    }

    /// Move the visual cursor `n` columns left without erasing
    pub fn backspaces(&mut self, n: usize) -> Result<(), Error> {
        let backspace: u8 = ControlCharacter::CtrlH.into();

        for _ in 0..n {
            self.bytes(&[backspace])?;
        }

        Ok(())
    }

    /// Erase `n` columns left of the visual cursor
    pub fn erase(&mut self, n: usize) -> Result<(), Error> {
        for _ in 0..n {
            self.bytes(ERASE)?;
        }

        Ok(())
    }

    pub fn newline(&mut self) -> Result<(), Error> {
        self.bytes(NEWLINE)
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.out.flush().map_err(Error::write)
    }
}

/// [`fmt::Write`] adapter for an [`embedded_io::Write`] sink
///
/// `fmt::Error` carries no information, so the first transport error is
/// kept and can be recovered with [`FmtWriter::finish`].
pub struct FmtWriter<'a, W: Write> {
    out: &'a mut W,
    error: Option<embedded_io::ErrorKind>,
}

impl<'a, W: Write> FmtWriter<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out, error: None }
    }

    /// Returns the first write error seen, if any
    pub fn finish(self) -> Result<(), Error> {
        match self.error {
            Some(kind) => Err(Error::WriteError(kind)),
            None => Ok(()),
        }
    }
}

impl<'a, W: Write> fmt::Write for FmtWriter<'a, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.error.is_some() {
            return Err(fmt::Error);
        }

        self.out.write_all(s.as_bytes()).map_err(|err| {
            self.error = Some(embedded_io::Error::kind(&err));
            fmt::Error
        })
    }
}
