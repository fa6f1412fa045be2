//! Search and department filter inputs.

use leptos::prelude::*;

use crate::state::directory::DirectoryQuery;

/// Text filters bound to the directory query. Editing either one returns the
/// query to page 1.
#[component]
pub fn DirectoryFilters(query: RwSignal<DirectoryQuery>) -> impl IntoView {
    view! {
        <div class="filters">
            <input
                type="text"
                placeholder="Search by name or email..."
                prop:value=move || query.with(|q| q.search_term.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    query.update(|q| q.set_search_term(value));
                }
            />
            <input
                type="text"
                placeholder="Filter by department..."
                prop:value=move || query.with(|q| q.department.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    query.update(|q| q.set_department(value));
                }
            />
        </div>
    }
}
