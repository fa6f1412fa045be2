//! Employee directory: filters, paged table, role-gated row actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. One effect owns fetching: it
//! tracks the query, the refresh counter and the session, and tags each
//! request with a sequence number so only the newest response lands.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppApi;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::directory_filters::DirectoryFilters;
use crate::components::employee_table::EmployeeTable;
use crate::components::pager::Pager;
use crate::net::types::{Capability, Employee};
use crate::state::auth::AuthState;
use crate::state::directory::{DirectoryListing, DirectoryQuery, ListingView, PendingDelete};
use crate::state::session::SessionHandle;
use crate::util::auth::{RouteAccess, install_route_guard, may_render};

/// Editor route for an existing employee, or the create route.
pub fn editor_path(id: Option<i64>) -> String {
    match id {
        Some(id) => format!("/employee/{id}"),
        None => "/employee".to_owned(),
    }
}

/// The pager stays visible on an emptied page past the first so the user can
/// step back.
fn shows_pager(listing: &DirectoryListing, page_number: u32) -> bool {
    !listing.loading && listing.error.is_none() && (!listing.items.is_empty() || page_number > 1)
}

fn delete_prompt(employee: &Employee) -> String {
    format!("Are you sure you want to delete {}?", employee.display_name())
}

#[component]
pub fn DirectoryPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let api = expect_context::<AppApi>();
    let auth = session.state();
    let navigate = use_navigate();
    install_route_guard(auth, RouteAccess::Protected, navigate.clone());

    let query = RwSignal::new(DirectoryQuery::default());
    let listing = RwSignal::new(DirectoryListing::default());
    let pending = RwSignal::new(PendingDelete::default());
    let refresh = RwSignal::new(0_u32);

    let fetch_api = api.clone();
    Effect::new(move || {
        refresh.track();
        let current = query.get();
        if !auth.with(AuthState::is_active) {
            return;
        }
        let Some(seq) = listing.try_update(DirectoryListing::begin) else {
            return;
        };
        let api = fetch_api.clone();
        leptos::task::spawn_local(async move {
            let result = api.list_employees(&current).await;
            if let Err(e) = &result {
                leptos::logging::warn!("directory: fetch #{seq} failed: {e}");
            }
            if !listing.try_update(|l| l.finish(seq, result)).unwrap_or(false) {
                leptos::logging::log!("directory: dropped stale response #{seq}");
            }
        });
    });

    let can_manage = move || auth.with(|a| a.can(Capability::ManageEmployees));

    let navigate_edit = navigate.clone();
    let on_edit = Callback::new(move |id: i64| {
        navigate_edit(&editor_path(Some(id)), NavigateOptions::default());
    });
    let on_delete = Callback::new(move |employee: Employee| pending.update(|p| p.request(employee)));
    let on_delete_cancel = Callback::new(move |()| pending.update(PendingDelete::cancel));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = pending.try_update(PendingDelete::confirm).flatten() else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.delete_employee(id).await;
            if let Err(e) = &result {
                leptos::logging::warn!("directory: delete {id} failed: {e}");
            }
            if pending.try_update(|p| p.finish(result)).unwrap_or(false) {
                refresh.update(|n| *n += 1);
            }
        });
    });

    let on_previous = Callback::new(move |()| query.update(DirectoryQuery::previous_page));
    let on_next = Callback::new(move |()| {
        let total = listing.with_untracked(|l| l.total_pages);
        query.update(|q| q.next_page(total));
    });

    let navigate_add = navigate.clone();
    let on_add = Callback::new(move |()| navigate_add(&editor_path(None), NavigateOptions::default()));

    let body = move || {
        let can_manage = can_manage();
        listing.with(|l| match l.view() {
            ListingView::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
            ListingView::Error(message) => {
                view! { <div class="error-message">{message.to_owned()}</div> }.into_any()
            }
            ListingView::Empty => view! { <p class="no-data">"No employees found"</p> }.into_any(),
            ListingView::Rows(rows) => view! {
                <EmployeeTable
                    employees=rows.to_vec()
                    can_manage=can_manage
                    on_edit=on_edit
                    on_delete=on_delete
                />
            }
            .into_any(),
        })
    };

    view! {
        <Show
            when=move || auth.with(|a| may_render(RouteAccess::Protected, a))
            fallback=move || view! { <p class="loading">"Loading..."</p> }
        >
            <div class="employee-list">
                <div class="list-header">
                    <h2>"Employee List"</h2>
                    <Show when=can_manage>
                        <button class="btn-add-employee" on:click=move |_| on_add.run(())>
                            "+ Add Employee"
                        </button>
                    </Show>
                </div>

                <DirectoryFilters query=query/>

                {body}

                <Show when=move || listing.with(|l| shows_pager(l, query.with(|q| q.page_number)))>
                    <Pager
                        page_number=Signal::derive(move || query.with(|q| q.page_number))
                        total_pages=Signal::derive(move || listing.with(|l| l.total_pages))
                        on_previous=on_previous
                        on_next=on_next
                    />
                </Show>

                <Show when=move || pending.with(|p| p.target.is_some())>
                    <ConfirmDialog
                        title="Delete Employee"
                        message=Signal::derive(move || {
                            pending.with(|p| p.target.as_ref().map(delete_prompt).unwrap_or_default())
                        })
                        error=Signal::derive(move || pending.with(|p| p.error.clone()))
                        busy=Signal::derive(move || pending.with(|p| p.deleting))
                        on_confirm=on_delete_confirm
                        on_cancel=on_delete_cancel
                    />
                </Show>
            </div>
        </Show>
    }
}
