//! Line history
//!
//! Submitted lines are kept in a ring addressed by a monotonic counter,
//! logical entry `i` lives in slot `i % H`. The counter tells how far
//! back recall can go after the ring has wrapped without a separate
//! count of valid slots.

/// Result of moving down through history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recall<'a> {
    /// A newer entry to load
    Entry(&'a [u8]),
    /// Walked past the newest entry, back to an empty line
    Fresh,
}

/// Trait for line history
pub trait History {
    /// Store a submitted line. Empty lines are not stored.
    fn save(&mut self, line: &[u8]);

    /// Step to the previous (older) entry. `None` at the oldest entry.
    fn recall_up(&mut self) -> Option<&[u8]>;

    /// Step to the next (newer) entry. `None` when already on a fresh line.
    fn recall_down(&mut self) -> Option<Recall<'_>>;

    /// Forget the navigation position, back to a fresh line
    fn reset_navigation(&mut self);

    /// Number of entries that can be recalled
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// History ring of `H` lines of up to `C - 1` bytes
pub struct HistoryRing<const H: usize, const C: usize> {
    slots: [[u8; C]; H],
    lengths: [usize; H],
    total_submitted: usize,
    read_cursor: usize,
}

impl<const H: usize, const C: usize> HistoryRing<H, C> {
    pub const fn new() -> Self {
        Self {
            slots: [[0; C]; H],
            lengths: [0; H],
            total_submitted: 0,
            read_cursor: 0,
        }
    }

    /// Logical index of the oldest entry still in the ring
    fn oldest(&self) -> usize {
        self.total_submitted - self.total_submitted.min(H)
    }

    /// Entry at logical index. Caller keeps `index` within the ring.
    fn slot(&self, index: usize) -> &[u8] {
        let slot = index % H;
        &self.slots[slot][..self.lengths[slot]]
    }

    /// Number of lines submitted since creation, including overwritten ones
    pub fn total_submitted(&self) -> usize {
        self.total_submitted
    }

    pub fn read_cursor(&self) -> usize {
        self.read_cursor
    }

    /// True while no entry is being recalled
    pub fn is_fresh(&self) -> bool {
        self.read_cursor == self.total_submitted
    }

    /// Recallable entries, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (self.oldest()..self.total_submitted).map(move |index| self.slot(index))
    }
}

impl<const H: usize, const C: usize> Default for HistoryRing<H, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const H: usize, const C: usize> History for HistoryRing<H, C> {
    fn save(&mut self, line: &[u8]) {
        if line.is_empty() || H == 0 {
            return;
        }

        let len = line.len().min(C.saturating_sub(1));
        let slot = self.total_submitted % H;

        self.slots[slot][..len].copy_from_slice(&line[..len]);
        self.lengths[slot] = len;

        self.total_submitted += 1;
        self.read_cursor = self.total_submitted;

        trace!("history: saved entry {}", self.total_submitted - 1);
    }

    fn recall_up(&mut self) -> Option<&[u8]> {
        if self.read_cursor <= self.oldest() {
            return None;
        }

        self.read_cursor -= 1;

        Some(self.slot(self.read_cursor))
    }

    fn recall_down(&mut self) -> Option<Recall<'_>> {
        if self.read_cursor >= self.total_submitted {
            return None;
        }

        self.read_cursor += 1;

        if self.read_cursor == self.total_submitted {
            Some(Recall::Fresh)
        } else {
            Some(Recall::Entry(self.slot(self.read_cursor)))
        }
    }

    fn reset_navigation(&mut self) {
        self.read_cursor = self.total_submitted;
    }

    fn len(&self) -> usize {
        self.total_submitted - self.oldest()
    }
}

/// Empty implementation for editors with no history
#[derive(Default)]
pub struct NoHistory {}

impl NoHistory {
    pub const fn new() -> Self {
        Self {}
    }
}

impl History for NoHistory {
    fn save(&mut self, _line: &[u8]) {}

    fn recall_up(&mut self) -> Option<&[u8]> {
        None
    }

    fn recall_down(&mut self) -> Option<Recall<'_>> {
        None
    }

    fn reset_navigation(&mut self) {}

    fn len(&self) -> usize {
        0
    }
}
