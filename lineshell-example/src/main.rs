//! Host stand-in for a UART console.
//!
//! A reader thread plays the receive interrupt and feeds stdin bytes to
//! the shell one at a time. The main thread plays the foreground loop
//! and polls for submitted lines. Ctrl-C or Ctrl-D quits.

use std::io::{self, Read, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use embedded_io::{ErrorKind, ErrorType};
use lineshell::builder::ShellBuilder;
use lineshell::calculator::COMMANDS;
use lineshell::command::CommandTable;
use lineshell::shell::LineQueue;
use lineshell::{HISTORY_DEPTH, LINE_CAPACITY, TOKEN_CAPACITY, TOKEN_COUNT};
use termion::raw::IntoRawMode;

const CTRL_C: u8 = 0x03;
const CTRL_D: u8 = 0x04;

/// Stdout as the transmit side of the UART
struct Console(Stdout);

impl ErrorType for Console {
    type Error = ErrorKind;
}

impl embedded_io::Write for Console {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.0.write(buf).map_err(|_| ErrorKind::Other)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.0.flush().map_err(|_| ErrorKind::Other)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _raw = io::stdout().into_raw_mode()?;

    let table = CommandTable::new(&COMMANDS)?;
    let mut queue: LineQueue<LINE_CAPACITY> = LineQueue::new();

    let (mut rx, mut dispatcher) = ShellBuilder::new(table)
        .with_history::<HISTORY_DEPTH, LINE_CAPACITY>()
        .split::<LINE_CAPACITY, TOKEN_COUNT, TOKEN_CAPACITY>(&mut queue);

    let running = AtomicBool::new(true);
    let mut console = Console(io::stdout());

    write!(console.0, "lineshell, type ls for a list of commands\r\n")?;
    dispatcher.print_prompt(&mut console)?;

    thread::scope(|s| {
        s.spawn(|| {
            let mut echo = Console(io::stdout());

            for byte in io::stdin().bytes() {
                let Ok(byte) = byte else {
                    break;
                };

                if byte == CTRL_C || byte == CTRL_D {
                    break;
                }

                if rx.on_byte_received(byte, &mut echo).is_err() {
                    break;
                }

                let _ = embedded_io::Write::flush(&mut echo);
            }

            running.store(false, Ordering::Relaxed);
        });

        while running.load(Ordering::Relaxed) {
            match dispatcher.on_line_ready_consume(&mut console) {
                Ok(true) => (),
                Ok(false) => thread::sleep(Duration::from_millis(10)),
                Err(_) => running.store(false, Ordering::Relaxed),
            }
        }
    });

    write!(console.0, "\r\n")?;

    Ok(())
}
