//! Interrupt and foreground halves of the shell
//!
//! The receive interrupt feeds bytes to a [`Receiver`]. Submitted lines
//! are passed through a [`LineQueue`] with room for exactly one line to
//! the [`Dispatcher`], which is polled from the main loop. While a line
//! sits in the queue the receiver drops every byte, so the line editor
//! state is never touched by both sides at once.
//!
//! ```
//! use lineshell::builder::ShellBuilder;
//! use lineshell::calculator::COMMANDS;
//! use lineshell::command::CommandTable;
//! use lineshell::shell::LineQueue;
//!
//! let mut queue: LineQueue<32> = LineQueue::new();
//! let table = CommandTable::new(&COMMANDS).unwrap();
//! let (mut rx, mut dispatcher) = ShellBuilder::new(table).split::<32, 4, 16>(&mut queue);
//!
//! let mut echo = [0u8; 64];
//! let mut echo_sink = &mut echo[..];
//!
//! for &byte in b"mul 6 7\r" {
//!     rx.on_byte_received(byte, &mut echo_sink).unwrap();
//! }
//!
//! // Gate is closed until the foreground has run the line
//! assert!(rx.is_line_pending());
//!
//! let mut output = [0u8; 64];
//! let mut output_sink = &mut output[..];
//! assert!(dispatcher.on_line_ready_consume(&mut output_sink).unwrap());
//! assert!(!rx.is_line_pending());
//!
//! assert!(output.starts_with(b"\r\nmul = 42\r\n[leon]@leon:"));
//! ```

use embedded_io::Write;
use heapless::spsc::{Consumer, Producer, Queue};
use heapless::Vec;

use crate::command::CommandTable;
use crate::complete::Completer;
use crate::core::Editor;
use crate::dispatch::{dispatch, Outcome};
use crate::error::Error;
use crate::history::History;
use crate::output::Echo;
use crate::tokenizer::TokenArray;

/// Hand-off queue holding at most one submitted line of up to `C - 1`
/// bytes
pub type LineQueue<const C: usize> = Queue<Vec<u8, C>, 2>;

/// Interrupt side of the shell
///
/// Owns the line editor. Call [`Receiver::on_byte_received`] once for
/// every byte the UART delivers; `out` receives the echo.
pub struct Receiver<'q, 'a, const C: usize, H: History, P: Completer> {
    editor: Editor<'a, C, H, P>,
    producer: Producer<'q, Vec<u8, C>, 2>,
    dropped: usize,
}

impl<'q, 'a, const C: usize, H: History, P: Completer> Receiver<'q, 'a, C, H, P> {
    pub fn new(editor: Editor<'a, C, H, P>, producer: Producer<'q, Vec<u8, C>, 2>) -> Self {
        Self {
            editor,
            producer,
            dropped: 0,
        }
    }

    /// Feed one received byte to the editor.
    ///
    /// The byte is dropped without any echo while a submitted line has
    /// not been consumed. Never blocks.
    pub fn on_byte_received<W: Write>(&mut self, byte: u8, out: &mut W) -> Result<(), Error> {
        if !self.producer.ready() {
            self.dropped = self.dropped.wrapping_add(1);
            trace!("receiver: line pending, dropped {}", byte);
            return Ok(());
        }

        if let Some(line) = self.editor.advance(byte, out)? {
            // The queue had room when this byte arrived and nothing else
            // enqueues
            let _ = self.producer.enqueue(line);
        }

        Ok(())
    }

    /// True while a submitted line waits for the foreground
    pub fn is_line_pending(&self) -> bool {
        !self.producer.ready()
    }

    /// Number of bytes dropped because a line was pending
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn editor(&self) -> &Editor<'a, C, H, P> {
        &self.editor
    }
}

/// Foreground side of the shell
///
/// Poll [`Dispatcher::on_line_ready_consume`] from the main loop.
pub struct Dispatcher<'q, 'a, const C: usize, const N: usize, const T: usize> {
    consumer: Consumer<'q, Vec<u8, C>, 2>,
    tokens: TokenArray<N, T>,
    table: CommandTable<'a>,
    prompt: &'a str,
    last_outcome: Option<Outcome>,
}

impl<'q, 'a, const C: usize, const N: usize, const T: usize> Dispatcher<'q, 'a, C, N, T> {
    pub fn new(
        consumer: Consumer<'q, Vec<u8, C>, 2>,
        table: CommandTable<'a>,
        prompt: &'a str,
    ) -> Self {
        Self {
            consumer,
            tokens: TokenArray::new(),
            table,
            prompt,
            last_outcome: None,
        }
    }

    /// Run the pending line, if any, and reopen the gate.
    ///
    /// Writes `\r\n`, the command output and a fresh prompt to `out`.
    /// Returns `false` when no line was pending. The line is consumed
    /// even if writing to `out` fails.
    pub fn on_line_ready_consume<W: Write>(&mut self, out: &mut W) -> Result<bool, Error> {
        let line = match self.consumer.peek() {
            Some(line) => line,
            None => return Ok(false),
        };

        self.tokens.tokenize(line);

        let result = self.process(out);

        self.tokens.clear();
        self.consumer.dequeue();

        self.last_outcome = Some(result?);

        Ok(true)
    }

    fn process<W: Write>(&mut self, out: &mut W) -> Result<Outcome, Error> {
        Echo::new(out).newline()?;

        let outcome = dispatch(&self.table, &self.tokens, out)?;

        self.print_prompt(out)?;

        Ok(outcome)
    }

    /// Print the prompt, e.g. once at startup
    pub fn print_prompt<W: Write>(&self, out: &mut W) -> Result<(), Error> {
        let mut echo = Echo::new(out);

        echo.bytes(self.prompt.as_bytes())?;
        echo.flush()
    }

    /// Outcome of the most recent line that was run to completion
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn tokens(&self) -> &TokenArray<N, T> {
        &self.tokens
    }

    pub fn table(&self) -> &CommandTable<'a> {
        &self.table
    }
}
