use super::*;

fn employee(id: i64) -> Employee {
    Employee {
        id,
        first_name: format!("First{id}"),
        last_name: format!("Last{id}"),
        full_name: Some(format!("First{id} Last{id}")),
        email: format!("e{id}@example.com"),
        phone_number: None,
        salary: 1000.0,
        department: Some("Eng".to_owned()),
    }
}

fn page(ids: &[i64], total_pages: u32) -> EmployeePage {
    EmployeePage { data: ids.iter().copied().map(employee).collect(), total_pages }
}

// =============================================================
// DirectoryQuery
// =============================================================

#[test]
fn query_defaults_to_first_page_of_ten() {
    let q = DirectoryQuery::default();
    assert_eq!(q.page_number, 1);
    assert_eq!(q.page_size, DEFAULT_PAGE_SIZE);
    assert!(q.department.is_empty());
    assert!(q.search_term.is_empty());
}

#[test]
fn changing_department_resets_page() {
    let mut q = DirectoryQuery { page_number: 3, ..DirectoryQuery::default() };
    q.set_department("Eng".to_owned());
    assert_eq!(q.page_number, 1);
    assert_eq!(q.department, "Eng");
}

#[test]
fn changing_search_resets_page() {
    let mut q = DirectoryQuery { page_number: 2, ..DirectoryQuery::default() };
    q.set_search_term("ada".to_owned());
    assert_eq!(q.page_number, 1);
}

#[test]
fn unchanged_filter_keeps_page() {
    let mut q = DirectoryQuery { page_number: 2, department: "Eng".to_owned(), ..DirectoryQuery::default() };
    q.set_department("Eng".to_owned());
    assert_eq!(q.page_number, 2);
}

#[test]
fn previous_page_stops_at_one() {
    let mut q = DirectoryQuery::default();
    q.previous_page();
    assert_eq!(q.page_number, 1);
    q.page_number = 3;
    q.previous_page();
    assert_eq!(q.page_number, 2);
}

#[test]
fn next_page_respects_total() {
    let mut q = DirectoryQuery::default();
    q.next_page(2);
    assert_eq!(q.page_number, 2);
    q.next_page(2);
    assert_eq!(q.page_number, 2);
    q.page_number = 1;
    q.next_page(0);
    assert_eq!(q.page_number, 1);
}

#[test]
fn params_omit_blank_filters() {
    let q = DirectoryQuery { department: "  ".to_owned(), ..DirectoryQuery::default() };
    assert_eq!(
        q.to_params(),
        vec![("pageNumber".to_owned(), "1".to_owned()), ("pageSize".to_owned(), "10".to_owned())]
    );
}

#[test]
fn params_include_trimmed_filters() {
    let q = DirectoryQuery {
        page_number: 2,
        page_size: 10,
        department: " Eng ".to_owned(),
        search_term: "ada".to_owned(),
    };
    let params = q.to_params();
    assert!(params.contains(&("pageNumber".to_owned(), "2".to_owned())));
    assert!(params.contains(&("department".to_owned(), "Eng".to_owned())));
    assert!(params.contains(&("searchTerm".to_owned(), "ada".to_owned())));
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn previous_disabled_only_on_first_page() {
    assert!(!Pagination::new(1, 3).can_previous);
    assert!(Pagination::new(2, 3).can_previous);
    assert!(Pagination::new(3, 3).can_previous);
}

#[test]
fn next_disabled_on_last_page() {
    assert!(!Pagination::new(3, 3).can_next);
    assert!(!Pagination::new(1, 1).can_next);
}

#[test]
fn next_disabled_when_no_pages() {
    let p = Pagination::new(1, 0);
    assert!(!p.can_next);
    assert!(!p.can_previous);
}

#[test]
fn middle_page_enables_both() {
    // Page 2 of 3, department "Eng", no search.
    let p = Pagination::new(2, 3);
    assert!(p.can_previous);
    assert!(p.can_next);
}

#[test]
fn page_past_end_after_delete_disables_next() {
    // Known edge case: deleting the last row of the last page refetches the
    // same page number, which now lies past the end. No renumbering happens.
    let p = Pagination::new(3, 2);
    assert!(!p.can_next);
    assert!(p.can_previous);
}

#[test]
fn pagination_label() {
    assert_eq!(Pagination::label(2, 3), "Page 2 of 3");
}

// =============================================================
// DirectoryListing sequencing
// =============================================================

#[test]
fn begin_marks_loading_and_increments_sequence() {
    let mut listing = DirectoryListing::default();
    let a = listing.begin();
    let b = listing.begin();
    assert!(b > a);
    assert!(listing.loading);
    assert!(listing.is_current(b));
    assert!(!listing.is_current(a));
}

#[test]
fn current_response_is_applied() {
    let mut listing = DirectoryListing::default();
    let seq = listing.begin();
    assert!(listing.finish(seq, Ok(page(&[1, 2], 3))));
    assert!(!listing.loading);
    assert_eq!(listing.items.len(), 2);
    assert_eq!(listing.total_pages, 3);
}

#[test]
fn superseded_response_never_overwrites_rows() {
    let mut listing = DirectoryListing::default();
    let old = listing.begin();
    let new = listing.begin();

    // Newer query resolves first.
    assert!(listing.finish(new, Ok(page(&[7], 1))));
    // Older, slower query resolves afterwards and must be ignored.
    assert!(!listing.finish(old, Ok(page(&[1, 2, 3], 5))));

    assert_eq!(listing.items.iter().map(|e| e.id).collect::<Vec<_>>(), vec![7]);
    assert_eq!(listing.total_pages, 1);
}

#[test]
fn superseded_response_does_not_end_loading() {
    let mut listing = DirectoryListing::default();
    let old = listing.begin();
    let _new = listing.begin();
    assert!(!listing.finish(old, Ok(page(&[1], 1))));
    assert!(listing.loading);
}

#[test]
fn error_is_shown_inline() {
    let mut listing = DirectoryListing::default();
    let seq = listing.begin();
    listing.finish(seq, Err(RequestError::Rejected { status: 500, message: None }));
    assert_eq!(listing.view(), ListingView::Error("Error fetching employees"));
}

#[test]
fn session_expiry_is_not_an_inline_error() {
    let mut listing = DirectoryListing::default();
    let seq = listing.begin();
    listing.finish(seq, Err(RequestError::SessionExpired));
    assert!(listing.error.is_none());
    assert!(!listing.loading);
}

#[test]
fn view_states() {
    let mut listing = DirectoryListing::default();
    let seq = listing.begin();
    assert_eq!(listing.view(), ListingView::Loading);
    listing.finish(seq, Ok(page(&[], 0)));
    assert_eq!(listing.view(), ListingView::Empty);
    let seq = listing.begin();
    listing.finish(seq, Ok(page(&[1], 1)));
    assert!(matches!(listing.view(), ListingView::Rows(rows) if rows.len() == 1));
}

// =============================================================
// PendingDelete
// =============================================================

#[test]
fn delete_requires_confirmation() {
    let mut pending = PendingDelete::default();
    assert_eq!(pending.confirm(), None);
    pending.request(employee(5));
    assert_eq!(pending.confirm(), Some(5));
    assert!(pending.deleting);
    // Double-click while in flight does nothing.
    assert_eq!(pending.confirm(), None);
}

#[test]
fn cancel_discards_request() {
    let mut pending = PendingDelete::default();
    pending.request(employee(5));
    pending.cancel();
    assert_eq!(pending, PendingDelete::default());
}

#[test]
fn successful_delete_refetches() {
    let mut pending = PendingDelete::default();
    pending.request(employee(5));
    pending.confirm();
    assert!(pending.finish(Ok(())));
    assert!(pending.target.is_none());
}

#[test]
fn failed_delete_keeps_dialog_with_error() {
    let mut pending = PendingDelete::default();
    pending.request(employee(5));
    pending.confirm();
    let refetch = pending.finish(Err(RequestError::Rejected { status: 409, message: Some("In use".to_owned()) }));
    assert!(!refetch);
    assert!(!pending.deleting);
    assert_eq!(pending.error.as_deref(), Some("In use"));
    assert!(pending.target.is_some());
}
