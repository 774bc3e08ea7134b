//! Lineshell is an IO-free `#[no_std]` line editor and command
//! dispatcher for serial consoles on small microcontrollers.
//!
//! Bytes arrive one at a time from a UART receive interrupt and are fed
//! to a [`shell::Receiver`], which edits the current line in place and
//! writes the terminal echo to any [`embedded_io::Write`]. When a line
//! is submitted it is handed to the foreground loop through a single
//! slot queue, where a [`shell::Dispatcher`] splits it into tokens and
//! runs the matching handler from a [`command::CommandTable`].
//!
//! Features:
//! - IO-free, no allocation, capacities fixed by const generics
//! - Cursor movement with in-line insert and backspace
//! - Line history on the up and down arrow keys
//! - Tab completion of command names
//! - `ls` prints the registered commands and their usage
//!
//! The receive side never blocks and never takes a lock. While a line
//! is waiting for the foreground, received bytes are dropped.
//!
//! # Example
//! ```
//! use core::fmt::Write;
//! use lineshell::builder::ShellBuilder;
//! use lineshell::command::{Args, Command, CommandError, CommandTable};
//! use lineshell::shell::LineQueue;
//!
//! fn hello(_: &dyn Args, out: &mut dyn Write) -> Result<(), CommandError> {
//!     write!(out, "hello\r\n")?;
//!     Ok(())
//! }
//!
//! static COMMANDS: [Command; 1] = [Command::new("hello", "hello", hello)];
//!
//! let table = CommandTable::new(&COMMANDS).unwrap();
//! let mut queue: LineQueue<64> = LineQueue::new();
//!
//! let (mut rx, mut dispatcher) = ShellBuilder::new(table)
//!     .with_prompt("> ")
//!     .with_history::<4, 64>()
//!     .split::<64, 4, 16>(&mut queue);
//!
//! let mut out: [u8; 256] = [0; 256];
//! let mut sink = &mut out[..];
//!
//! for &byte in b"hello\r" {
//!     rx.on_byte_received(byte, &mut sink).unwrap();
//! }
//!
//! assert!(dispatcher.on_line_ready_consume(&mut sink).unwrap());
//! ```

#![no_std]

#[cfg(any(test, feature = "std"))]
#[macro_use]
extern crate std;

#[macro_use]
mod log;

pub mod builder;
pub mod calculator;
pub mod command;
pub mod complete;
mod core;
pub mod dispatch;
pub mod error;
pub mod history;
mod input;
pub mod line_buffer;
mod output;
pub mod shell;
pub mod tokenizer;

#[cfg(test)]
pub(crate) mod testlib;

pub use crate::core::Editor;
pub use crate::input::{Action, Arrow, ControlCharacter, Parser};
pub use crate::output::{Echo, FmtWriter};

/// Default line buffer capacity, including the terminator slot
pub const LINE_CAPACITY: usize = 128;

/// Default number of remembered lines
pub const HISTORY_DEPTH: usize = 10;

/// Default number of token slots
pub const TOKEN_COUNT: usize = 8;

/// Default capacity of a single token slot, including the terminator slot
pub const TOKEN_CAPACITY: usize = 32;

/// Prompt printed after every processed line unless one is configured
pub const DEFAULT_PROMPT: &str = "[leon]@leon:";
