//! Command registration
//!
//! Commands live in a `static` table of [`Command`] entries. The table
//! is validated once by [`CommandTable::new`], after which lookups are
//! guaranteed to find at most one handler per name.

use core::fmt;

use crate::complete::Completer;
use crate::dispatch::LIST_KEYWORD;
use crate::error::Error;

/// Read access to the tokens of the line being dispatched
///
/// Index 0 is the command name, arguments start at 1. Slots past the
/// last token read as empty strings.
pub trait Args {
    /// Token at `index`, empty if there is none
    fn token(&self, index: usize) -> &str;

    /// Number of token slots
    fn capacity(&self) -> usize;

    /// Argument at `index` if present and non-empty
    fn arg(&self, index: usize) -> Option<&str> {
        Some(self.token(index)).filter(|token| !token.is_empty())
    }
}

/// Errors reported by command handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Argument missing or not in the expected format
    InvalidArgument,
    DivisionByZero,
    /// Handler output could not be written
    Output,
}

impl CommandError {
    pub fn message(&self) -> &'static str {
        match self {
            CommandError::InvalidArgument => "cmd parm invalid!",
            CommandError::DivisionByZero => "cmd parm invalid! (division by zero)",
            CommandError::Output => "cmd output error!",
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<fmt::Error> for CommandError {
    fn from(_: fmt::Error) -> Self {
        CommandError::Output
    }
}

/// Command handler. Reads its arguments from `args` and writes its
/// response to `out`.
pub type Handler = fn(args: &dyn Args, out: &mut dyn fmt::Write) -> Result<(), CommandError>;

/// Command table entry
pub struct Command {
    pub name: &'static str,
    /// Usage example shown by the listing command
    pub usage: &'static str,
    pub handler: Handler,
}

impl Command {
    pub const fn new(name: &'static str, usage: &'static str, handler: Handler) -> Self {
        Self {
            name,
            usage,
            handler,
        }
    }
}

fn valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_graphic())
}

/// Validated command table
#[derive(Clone, Copy)]
pub struct CommandTable<'a> {
    commands: &'a [Command],
}

impl<'a> CommandTable<'a> {
    /// Validate `commands`. Names must be unique, printable ASCII without
    /// spaces, and must not shadow the listing keyword.
    pub fn new(commands: &'a [Command]) -> Result<Self, Error> {
        for (i, command) in commands.iter().enumerate() {
            if !valid_name(command.name) {
                return Err(Error::InvalidCommandName(command.name));
            }

            if command.name == LIST_KEYWORD {
                return Err(Error::ReservedCommand(command.name));
            }

            if commands[..i].iter().any(|other| other.name == command.name) {
                return Err(Error::DuplicateCommand(command.name));
            }
        }

        Ok(Self { commands })
    }

    /// Table without any commands, only the listing keyword works
    pub const fn empty() -> Self {
        Self { commands: &[] }
    }

    pub fn find(&self, name: &str) -> Option<&'a Command> {
        self.commands.iter().find(|command| command.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<'a> Completer for CommandTable<'a> {
    fn complete(&self, line: &str, n: usize) -> Option<&str> {
        self.commands
            .iter()
            .filter(|command| command.name.starts_with(line))
            .nth(n)
            .map(|command| &command.name[line.len()..])
    }
}
