//! Error types

use core::fmt;

/// Enum to hold the errors surfaced by the shell
///
/// Capacity overruns are never errors, the offending bytes are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The transport refused echo or handler output
    WriteError(embedded_io::ErrorKind),
    /// Two commands in a table share a name
    DuplicateCommand(&'static str),
    /// A command tried to register the reserved listing keyword
    ReservedCommand(&'static str),
    /// Command names must be non-empty printable ASCII without spaces
    InvalidCommandName(&'static str),
}

impl Error {
    pub(crate) fn write<E: embedded_io::Error>(err: E) -> Self {
        Error::WriteError(err.kind())
    }
}

impl embedded_io::Error for Error {
    fn kind(&self) -> embedded_io::ErrorKind {
        match *self {
            Error::WriteError(kind) => kind,
            Error::DuplicateCommand(_)
            | Error::ReservedCommand(_)
            | Error::InvalidCommandName(_) => embedded_io::ErrorKind::InvalidInput,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WriteError(kind) => write!(f, "write error: {:?}", kind),
            Error::DuplicateCommand(name) => write!(f, "duplicate command: {}", name),
            Error::ReservedCommand(name) => write!(f, "reserved command name: {}", name),
            Error::InvalidCommandName(name) => write!(f, "invalid command name: '{}'", name),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
