/// Rowscope Record Store & Pagination View
///
/// The store owns the working set of decoded records for one loaded file
/// and derives the filtered, paginated view the presenter reads. Stores are
/// plain caller-owned values; any number can coexist in one process.
///
/// Filtering never reorders; it selects a subsequence of the working set in
/// original order, recomputed fresh on each call. The working set is
/// memory-resident after decoding, so an O(N) scan per view refresh is the
/// whole cost model.

use crate::filter::matches;
use crate::value::Value;

/// Records shown per page when no explicit size is given.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// One derived page plus the summary counts the presenter displays.
///
/// `start_index`/`end_index` are 0-based positions into the filtered set,
/// end exclusive. Recomputed on demand, never cached across a filter or
/// page change.
#[derive(Debug)]
pub struct PageView<'a> {
    pub records: Vec<&'a Value>,
    pub current_page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub start_index: usize,
    pub end_index: usize,
}

/// Working record set with an active filter and 1-based pagination state.
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<Value>,
    filter: String,
    current_page: usize,
    page_size: usize,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Create a store with a fixed page size. A zero size is lifted to 1.
    pub fn with_page_size(page_size: usize) -> Self {
        RecordStore {
            records: Vec::new(),
            filter: String::new(),
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Replace the working set with a freshly decoded one.
    ///
    /// The previous set is discarded, the active filter cleared and the
    /// view reset to page 1.
    pub fn load(&mut self, records: Vec<Value>) {
        self.records = records;
        self.filter.clear();
        self.current_page = 1;
    }

    /// Number of records in the working set (unfiltered).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Set the active filter text and jump back to page 1.
    pub fn set_filter(&mut self, expr: &str) {
        self.filter = expr.to_string();
        self.current_page = 1;
    }

    pub fn clear_filter(&mut self) {
        self.set_filter("");
    }

    /// The subsequence of the working set matching the active filter, in
    /// original order. Scanned fresh on every call; no incremental index.
    pub fn filtered(&self) -> Vec<&Value> {
        self.records
            .iter()
            .filter(|record| matches(record, &self.filter))
            .collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    /// `ceil(filtered_count / page_size)`; 0 when nothing matches.
    pub fn total_pages(&self) -> usize {
        (self.filtered_count() + self.page_size - 1) / self.page_size
    }

    /// The current page slice of the filtered set. Out-of-range pages yield
    /// an empty slice rather than an error.
    pub fn page(&self) -> Vec<&Value> {
        let filtered = self.filtered();
        let (start, end) = self.page_bounds(filtered.len());
        filtered[start..end].to_vec()
    }

    /// The page slice together with its summary counts.
    pub fn page_view(&self) -> PageView<'_> {
        let filtered = self.filtered();
        let filtered_count = filtered.len();
        let (start, end) = self.page_bounds(filtered_count);
        let total_pages = (filtered_count + self.page_size - 1) / self.page_size;

        PageView {
            records: filtered[start..end].to_vec(),
            current_page: self.current_page,
            total_pages,
            filtered_count,
            start_index: start,
            end_index: end,
        }
    }

    /// Advance one page, clamped so the result never exceeds the page count
    /// (and never drops below 1 when the filtered set is empty).
    pub fn next_page(&mut self) {
        self.current_page = self
            .current_page
            .saturating_add(1)
            .min(self.total_pages())
            .max(1);
    }

    /// Go back one page, clamped at 1.
    pub fn prev_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    /// Jump to a page. Clamped to >= 1 only; the upper bound is not
    /// enforced, and an out-of-range page yields an empty slice.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    fn page_bounds(&self, filtered_count: usize) -> (usize, usize) {
        let start = (self.current_page - 1)
            .saturating_mul(self.page_size)
            .min(filtered_count);
        let end = self
            .current_page
            .saturating_mul(self.page_size)
            .min(filtered_count);
        (start, end)
    }
}
