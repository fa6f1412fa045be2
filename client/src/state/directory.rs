//! Employee-directory query and listing state.
//!
//! DESIGN
//! ======
//! The query (page, filters) and the listing (rows, totals) are separate so the
//! page's fetch effect can track the query without re-running when results
//! land. Every fetch takes a sequence number from the listing; only the
//! response carrying the latest number is applied, so a slow response to a
//! superseded query can never overwrite newer rows.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use crate::net::error::RequestError;
use crate::net::types::{Employee, EmployeePage};

/// Rows per page requested from the API.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Filters and pagination for `GET /employees`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryQuery {
    pub page_number: u32,
    pub page_size: u32,
    pub department: String,
    pub search_term: String,
}

impl Default for DirectoryQuery {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            department: String::new(),
            search_term: String::new(),
        }
    }
}

impl DirectoryQuery {
    /// Change the department filter; returns to page 1.
    pub fn set_department(&mut self, department: String) {
        if self.department != department {
            self.department = department;
            self.page_number = 1;
        }
    }

    /// Change the search term; returns to page 1.
    pub fn set_search_term(&mut self, search_term: String) {
        if self.search_term != search_term {
            self.search_term = search_term;
            self.page_number = 1;
        }
    }

    /// Step back one page, never below 1.
    pub fn previous_page(&mut self) {
        self.page_number = self.page_number.saturating_sub(1).max(1);
    }

    /// Step forward one page if `total_pages` allows it.
    pub fn next_page(&mut self, total_pages: u32) {
        if Pagination::new(self.page_number, total_pages).can_next {
            self.page_number += 1;
        }
    }

    /// Query-string parameters. Blank filters are omitted.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("pageNumber".to_owned(), self.page_number.max(1).to_string()),
            ("pageSize".to_owned(), self.page_size.to_string()),
        ];
        let department = self.department.trim();
        if !department.is_empty() {
            params.push(("department".to_owned(), department.to_owned()));
        }
        let search_term = self.search_term.trim();
        if !search_term.is_empty() {
            params.push(("searchTerm".to_owned(), search_term.to_owned()));
        }
        params
    }
}

/// Enabled state of the pager buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub can_previous: bool,
    pub can_next: bool,
}

impl Pagination {
    /// `Previous` is disabled on page 1. `Next` is disabled on the last page,
    /// when there are no pages, and past the end (a refetch after deleting the
    /// last row of the last page).
    pub fn new(page_number: u32, total_pages: u32) -> Self {
        Self {
            can_previous: page_number > 1,
            can_next: total_pages > 0 && page_number < total_pages,
        }
    }

    /// Footer label, e.g. `Page 2 of 3`.
    pub fn label(page_number: u32, total_pages: u32) -> String {
        format!("Page {page_number} of {total_pages}")
    }
}

/// What the directory body should show.
#[derive(Clone, Debug, PartialEq)]
pub enum ListingView<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Rows(&'a [Employee]),
}

/// Rows for the current query plus request sequencing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectoryListing {
    pub items: Vec<Employee>,
    pub total_pages: u32,
    pub loading: bool,
    pub error: Option<String>,
    latest_seq: u64,
}

impl DirectoryListing {
    /// Start a fetch. The returned sequence number supersedes all earlier ones.
    pub fn begin(&mut self) -> u64 {
        self.latest_seq += 1;
        self.loading = true;
        self.error = None;
        self.latest_seq
    }

    /// Whether `seq` is the most recently issued fetch.
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest_seq
    }

    /// Apply a fetch result if it is still current. Returns whether it was applied.
    ///
    /// `SessionExpired` is applied as "stop loading" only; the global handler
    /// has already left the page.
    pub fn finish(&mut self, seq: u64, result: Result<EmployeePage, RequestError>) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.data;
                self.total_pages = page.total_pages;
                self.error = None;
            }
            Err(RequestError::SessionExpired) => {}
            Err(e) => {
                self.error = Some(e.user_message("Error fetching employees"));
            }
        }
        true
    }

    pub fn view(&self) -> ListingView<'_> {
        if self.loading {
            ListingView::Loading
        } else if let Some(err) = &self.error {
            ListingView::Error(err)
        } else if self.items.is_empty() {
            ListingView::Empty
        } else {
            ListingView::Rows(&self.items)
        }
    }
}

/// Delete confirmation flow for one row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PendingDelete {
    pub target: Option<Employee>,
    pub deleting: bool,
    pub error: Option<String>,
}

impl PendingDelete {
    /// Ask for confirmation before deleting `employee`.
    pub fn request(&mut self, employee: Employee) {
        self.target = Some(employee);
        self.deleting = false;
        self.error = None;
    }

    pub fn cancel(&mut self) {
        if !self.deleting {
            *self = Self::default();
        }
    }

    /// User confirmed; returns the id to delete, or `None` if nothing is
    /// pending or a delete is already in flight.
    pub fn confirm(&mut self) -> Option<i64> {
        if self.deleting {
            return None;
        }
        let id = self.target.as_ref()?.id;
        self.deleting = true;
        Some(id)
    }

    /// Record the delete outcome. Returns `true` when the listing should refetch.
    pub fn finish(&mut self, result: Result<(), RequestError>) -> bool {
        match result {
            Ok(()) => {
                *self = Self::default();
                true
            }
            Err(RequestError::SessionExpired) => {
                *self = Self::default();
                false
            }
            Err(e) => {
                self.deleting = false;
                self.error = Some(e.user_message("Error deleting employee"));
                false
            }
        }
    }
}
