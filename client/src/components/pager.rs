//! Previous / Next pager for the directory table.

use leptos::prelude::*;

use crate::state::directory::Pagination;

/// Pager buttons and the `Page n of m` label.
#[component]
pub fn Pager(
    #[prop(into)] page_number: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    let pagination = move || Pagination::new(page_number.get(), total_pages.get());

    view! {
        <div class="pagination">
            <button disabled=move || !pagination().can_previous on:click=move |_| on_previous.run(())>
                "Previous"
            </button>
            <span>{move || Pagination::label(page_number.get(), total_pages.get())}</span>
            <button disabled=move || !pagination().can_next on:click=move |_| on_next.run(())>
                "Next"
            </button>
        </div>
    }
}
