//! Pagination state for GitHub listing responses.

/// Current page state for paginated results.
///
/// # Example
///
/// ```
/// use issuewatch::github::pagination::PageInfo;
///
/// let info = PageInfo::new(2).with_has_next(true);
/// assert_eq!(info.next_page(), Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page number (1-based).
    current_page: u32,
    /// Whether more pages exist after the current one.
    has_next: bool,
}

impl PageInfo {
    /// Creates a page info for `current_page` with no next page.
    #[must_use]
    pub const fn new(current_page: u32) -> Self {
        Self {
            current_page,
            has_next: false,
        }
    }

    /// Sets whether there is a next page.
    #[must_use]
    pub const fn with_has_next(mut self, has_next: bool) -> Self {
        self.has_next = has_next;
        self
    }

    /// Returns the current page number (1-based).
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Returns true if more pages exist after the current one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.has_next
    }

    /// Returns the following page number when GitHub reported one.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        if self.has_next {
            self.current_page.checked_add(1)
        } else {
            None
        }
    }
}

/// One page of listing results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginated<T> {
    /// Records on this page, in service order.
    pub items: Vec<T>,
    /// Pagination state.
    pub page_info: PageInfo,
}
