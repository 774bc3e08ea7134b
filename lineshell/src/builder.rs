//! Builder for shells

use crate::command::CommandTable;
use crate::core::Editor;
use crate::history::{History, HistoryRing, NoHistory};
use crate::shell::{Dispatcher, LineQueue, Receiver};
use crate::DEFAULT_PROMPT;

/// Builder for the [`Receiver`] and [`Dispatcher`] pair.
///
/// # Example
/// ```
/// use lineshell::builder::ShellBuilder;
/// use lineshell::calculator::COMMANDS;
/// use lineshell::command::CommandTable;
/// use lineshell::shell::LineQueue;
/// use lineshell::{HISTORY_DEPTH, LINE_CAPACITY, TOKEN_CAPACITY, TOKEN_COUNT};
///
/// let mut queue: LineQueue<LINE_CAPACITY> = LineQueue::new();
///
/// let (rx, dispatcher) = ShellBuilder::new(CommandTable::new(&COMMANDS).unwrap())
///     .with_history::<HISTORY_DEPTH, LINE_CAPACITY>()
///     .split::<LINE_CAPACITY, TOKEN_COUNT, TOKEN_CAPACITY>(&mut queue);
/// ```
pub struct ShellBuilder<'a, H: History> {
    table: CommandTable<'a>,
    prompt: &'a str,
    history: H,
}

impl<'a> ShellBuilder<'a, NoHistory> {
    /// Shell without history, using [`DEFAULT_PROMPT`]
    pub fn new(table: CommandTable<'a>) -> Self {
        Self {
            table,
            prompt: DEFAULT_PROMPT,
            history: NoHistory::new(),
        }
    }
}

impl<'a, H: History> ShellBuilder<'a, H> {
    pub fn with_prompt(self, prompt: &'a str) -> Self {
        Self { prompt, ..self }
    }

    /// Remember the last `D` lines of up to `C - 1` bytes
    pub fn with_history<const D: usize, const C: usize>(
        self,
    ) -> ShellBuilder<'a, HistoryRing<D, C>> {
        self.with_custom_history(HistoryRing::new())
    }

    pub fn with_custom_history<G: History>(self, history: G) -> ShellBuilder<'a, G> {
        ShellBuilder {
            table: self.table,
            prompt: self.prompt,
            history,
        }
    }

    /// Split `queue` into the interrupt and foreground halves.
    ///
    /// `C` is the line capacity, `N` the number of token slots and `T`
    /// the capacity of each token slot.
    #[allow(clippy::type_complexity)]
    pub fn split<'q, const C: usize, const N: usize, const T: usize>(
        self,
        queue: &'q mut LineQueue<C>,
    ) -> (
        Receiver<'q, 'a, C, H, CommandTable<'a>>,
        Dispatcher<'q, 'a, C, N, T>,
    ) {
        let (producer, consumer) = queue.split();

        debug!(
            "shell: {} commands, line capacity {}, {} tokens",
            self.table.len(),
            C,
            N
        );

        let editor = Editor::new(self.prompt, self.history, self.table);

        (
            Receiver::new(editor, producer),
            Dispatcher::new(consumer, self.table, self.prompt),
        )
    }
}
