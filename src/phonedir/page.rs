//! Display indexing and pagination.
//!
//! Users see 1-based indexes. An index is the position of the item in the
//! sequence handed to [`paginate`], not its position on the page, so the third
//! item of page 2 with five items per page shows as `ID 8`.

use crate::model::Record;
use std::num::NonZeroUsize;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// An item paired with its 1-based display index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub index: usize,
    pub record: Record,
}

/// One page of a longer sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Page geometry as requested by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub number: usize,
    pub size: NonZeroUsize,
}

impl PageRequest {
    pub fn new(number: usize, size: NonZeroUsize) -> Self {
        Self { number, size }
    }

    pub fn first(size: NonZeroUsize) -> Self {
        Self::new(1, size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

/// `ceil(len / size)`; zero for an empty sequence.
pub fn total_pages(len: usize, size: NonZeroUsize) -> usize {
    len.div_ceil(size.get())
}

/// Slices `items` to page `number` (1-based).
///
/// Page 0 and pages past the end come back empty; they are not errors.
pub fn paginate<T: Clone>(items: &[T], size: NonZeroUsize, number: usize) -> Page<(usize, T)> {
    let total = total_pages(items.len(), size);
    let start = number
        .checked_sub(1)
        .and_then(|n| n.checked_mul(size.get()));

    let slice: Vec<(usize, T)> = match start {
        Some(start) if start < items.len() => {
            let end = (start + size.get()).min(items.len());
            items[start..end]
                .iter()
                .cloned()
                .enumerate()
                .map(|(i, item)| (start + i + 1, item))
                .collect()
        }
        _ => Vec::new(),
    };

    Page {
        items: slice,
        number,
        total_pages: total,
    }
}

/// Paginates records, attaching display indexes.
pub fn paginate_records(records: &[Record], request: PageRequest) -> Page<DisplayRecord> {
    let page = paginate(records, request.size, request.number);
    Page {
        items: page
            .items
            .into_iter()
            .map(|(index, record)| DisplayRecord { index, record })
            .collect(),
        number: page.number,
        total_pages: page.total_pages,
    }
}
