/// Fixed page size of all paginated lists.
pub const ITEMS_PER_PAGE: usize = 20;

/// Rows answered to a single `skip`/`limit` request.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<T> {
    pub items: Vec<T>,
    /// Number of rows sent by the backend, including rows
    /// that had to be dropped because they were malformed.
    pub fetched: usize,
}

impl<T> From<Vec<T>> for Batch<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            fetched: items.len(),
            items,
        }
    }
}

/// One page of a list the backend pages by `skip`/`limit`.
///
/// The backend does not report a total count. Whether another page
/// exists is guessed from the number of fetched rows: a full page is
/// assumed to have a successor, which is wrong if the list ends
/// exactly at a page boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    number: usize,
    items: Vec<T>,
    fetched: usize,
}

impl<T> Page<T> {
    /// `number` is 1-based, `0` is treated as `1`.
    pub fn new(number: usize, batch: impl Into<Batch<T>>) -> Self {
        let Batch { items, fetched } = batch.into();
        Self {
            number: number.max(1),
            items,
            fetched,
        }
    }

    pub const fn number(&self) -> usize {
        self.number
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub const fn has_next(&self) -> bool {
        self.fetched == ITEMS_PER_PAGE
    }

    pub const fn has_previous(&self) -> bool {
        self.number > 1
    }
}

/// Offset of the first item on a 1-based page.
pub const fn skip(page: usize) -> usize {
    page.saturating_sub(1) * ITEMS_PER_PAGE
}
