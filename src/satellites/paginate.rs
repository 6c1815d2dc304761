// Paginator - fixed-size pages over an already filtered and sorted sequence
//
// Pages are 1-based. Out-of-range requests yield an empty page; keeping the
// index in range is the caller's job.

/// Rows per page in the history table
pub const PAGE_SIZE: usize = 10;

/// One page of results plus how many pages there are in total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub visible: &'a [T],
    /// `ceil(len / page_size)`; zero for an empty input
    pub total_pages: usize,
}

/// Number of pages needed for `len` items
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Slice out page `page_index` (1-based) of `records`
pub fn paginate<T>(records: &[T], page_index: usize, page_size: usize) -> Page<'_, T> {
    let total_pages = total_pages(records.len(), page_size);

    if page_index == 0 || page_index > total_pages {
        return Page {
            visible: &[],
            total_pages,
        };
    }

    let start = (page_index - 1) * page_size;
    let end = (start + page_size).min(records.len());
    Page {
        visible: &records[start..end],
        total_pages,
    }
}
