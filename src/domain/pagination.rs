//! Pagination engine for list views.
//!
//! [`paginate`] turns a collection size, a page size and whatever the client
//! sent as `?page=` into a [`PageWindow`]. Bad input never produces an error:
//! anything that is not an integer resolves to the first page, integers below
//! one resolve to the first page and integers past the end resolve to the last
//! page.

/// Default number of rows per list page.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Query string key carrying the requested page number.
pub const PAGE_PARAM: &str = "page";

/// A resolved page of an ordered collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based page number after clamping.
    pub number: u32,
    pub num_pages: u32,
    pub page_size: u32,
    /// Size of the whole collection.
    pub total: u64,
    pub has_previous: bool,
    pub has_next: bool,
    pub previous_page_url: Option<String>,
    pub next_page_url: Option<String>,
}

impl PageWindow {
    /// Zero-based index of the first row on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.number - 1) * u64::from(self.page_size)
    }

    /// Maximum number of rows on this page.
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }

    /// Whether the listing spans more than one page.
    pub fn is_paginated(&self) -> bool {
        self.num_pages > 1
    }

    /// Returns this page's slice of an in-memory collection.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = usize::try_from(self.offset())
            .unwrap_or(usize::MAX)
            .min(items.len());
        let end = start.saturating_add(self.page_size as usize).min(items.len());
        &items[start..end]
    }
}

/// Resolves `requested_page` against a collection of `collection_size` rows.
///
/// A `page_size` of zero is treated as one.
pub fn paginate(collection_size: u64, page_size: u32, requested_page: Option<&str>) -> PageWindow {
    let page_size = page_size.max(1);
    let num_pages = collection_size
        .div_ceil(u64::from(page_size))
        .clamp(1, u64::from(u32::MAX)) as u32;

    let number = match requested_page.map(str::trim).and_then(|raw| raw.parse::<i64>().ok()) {
        None => 1,
        Some(n) if n < 1 => 1,
        Some(n) if n > i64::from(num_pages) => num_pages,
        Some(n) => n as u32,
    };

    let has_previous = number > 1;
    let has_next = number < num_pages;

    PageWindow {
        number,
        num_pages,
        page_size,
        total: collection_size,
        has_previous,
        has_next,
        previous_page_url: has_previous.then(|| page_url(number - 1)),
        next_page_url: has_next.then(|| page_url(number + 1)),
    }
}

fn page_url(number: u32) -> String {
    format!("?{PAGE_PARAM}={number}")
}

/// One page of entities together with its navigation window.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub window: PageWindow,
}
