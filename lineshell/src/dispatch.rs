//! Running a tokenized line against a command table

use core::fmt::Write as _;

use embedded_io::Write;

use crate::command::{Args, CommandError, CommandTable};
use crate::error::Error;
use crate::output::FmtWriter;

/// First token that prints the command table instead of running a command
pub const LIST_KEYWORD: &str = "ls";

const UNKNOWN_COMMAND: &str = "cmd error!";
const LIST_HEADER: &str = "-------------------- cmd table --------------------";
const LIST_FOOTER: &str = "---------------------------------------------------";

/// What happened to a dispatched line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Nothing to run
    Blank,
    /// The command table was printed
    Listed,
    /// The handler ran and succeeded
    Executed,
    /// The handler ran and reported an error
    Failed(CommandError),
    /// No command with that name
    Unknown,
}

/// Print every command with its usage
pub fn list<W: Write>(table: &CommandTable<'_>, out: &mut W) -> Result<(), Error> {
    let mut writer = FmtWriter::new(out);

    let _ = write!(writer, "{}\r\n", LIST_HEADER);
    for command in table.iter() {
        let _ = write!(writer, "cmd:{}    eg:{}\r\n", command.name, command.usage);
    }
    let _ = write!(writer, "{}\r\n", LIST_FOOTER);

    writer.finish()
}

/// Run the command named by token 0 of `args`.
///
/// Handler errors are printed and reported in the [`Outcome`]; only
/// transport failures are returned as errors.
pub fn dispatch<W: Write>(
    table: &CommandTable<'_>,
    args: &dyn Args,
    out: &mut W,
) -> Result<Outcome, Error> {
    let name = args.token(0);

    if name.is_empty() {
        return Ok(Outcome::Blank);
    }

    if name == LIST_KEYWORD {
        list(table, out)?;
        return Ok(Outcome::Listed);
    }

    let mut writer = FmtWriter::new(out);

    let outcome = match table.find(name) {
        Some(command) => {
            debug!("dispatch: {}", name);

            match (command.handler)(args, &mut writer) {
                Ok(()) => Outcome::Executed,
                Err(err) => {
                    let _ = write!(writer, "{}\r\n", err);
                    Outcome::Failed(err)
                }
            }
        }
        None => {
            debug!("dispatch: unknown command {}", name);

            let _ = write!(writer, "{}\r\n", UNKNOWN_COMMAND);
            Outcome::Unknown
        }
    };

    writer.finish()?;

    Ok(outcome)
}
