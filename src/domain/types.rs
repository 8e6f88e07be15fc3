/// Maximum number of history entries shown on one screen.
pub const PAGE_SIZE: usize = 5;

/// One historical commit record, as read from a line of the history file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    pub timestamp: i64,
    pub user: String,
    pub via: String,
    pub comment: String,
}

/// Inclusive `[first, last]` range of entry indices currently on screen.
///
/// Only the page number is stored, so `first` is always a multiple of
/// [`PAGE_SIZE`] and `last` is always `first + PAGE_SIZE - 1`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PageWindow {
    page: usize,
}

impl PageWindow {
    pub fn first_page() -> Self {
        Self::page(0)
    }

    pub fn page(page: usize) -> Self {
        Self { page }
    }

    pub fn first(self) -> usize {
        self.page * PAGE_SIZE
    }

    pub fn last(self) -> usize {
        self.first() + PAGE_SIZE - 1
    }

    pub fn contains(self, index: usize) -> bool {
        index >= self.first() && index <= self.last()
    }

    pub fn has_previous(self) -> bool {
        self.page > 0
    }

    pub fn has_next(self, total: usize) -> bool {
        self.last() + 1 < total
    }

    pub fn previous(self) -> Self {
        Self {
            page: self.page.saturating_sub(1),
        }
    }

    pub fn next(self) -> Self {
        Self {
            page: self.page + 1,
        }
    }
}

/// Final answer handed back to the boot script: `0` keeps the running config,
/// anything else names the history entry to restore.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Selection(u32);

impl Selection {
    pub const NO_CHANGE: Self = Self(0);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_no_change(self) -> bool {
        self.0 == 0
    }
}
