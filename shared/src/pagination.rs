/// One page of a sequence together with the page count of the whole sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
}

/// Number of pages needed for `len` items; zero items means zero pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Slices `items` into the 1-based `page`. Page 0 and pages past the end
/// come back empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);
    if page == 0 {
        return Page {
            items: Vec::new(),
            total_pages,
        };
    }
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    Page {
        items: items[start..end].to_vec(),
        total_pages,
    }
}

/// Current page and page size of a paginated view.
///
/// `page` always satisfies `1 <= page <= max(total_pages, 1)` for the
/// `total_pages` last passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    /// A zero page size is raised to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total_pages: usize) -> bool {
        self.page < total_pages
    }

    /// Advances one page; no-op on the last page.
    pub fn next(&mut self, total_pages: usize) {
        if self.has_next(total_pages) {
            self.page += 1;
        }
    }

    /// Goes back one page; no-op on the first page.
    pub fn previous(&mut self) {
        if self.has_previous() {
            self.page -= 1;
        }
    }

    /// Jumps to `page`, clamped into range.
    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// Pulls the current page back into range after the sequence shrank.
    pub fn clamp(&mut self, total_pages: usize) {
        self.go_to(self.page, total_pages);
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Changes the page size and returns to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.reset();
    }

    pub fn apply<T: Clone>(&self, items: &[T]) -> Page<T> {
        paginate(items, self.page, self.page_size)
    }
}
