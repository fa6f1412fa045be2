//! Top bar showing the signed-in identity, role badge, and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{LOGIN_PATH, SessionHandle};

/// Top navigation bar. Renders nothing without an active session.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let auth = session.state();
    let navigate = use_navigate();

    let user = move || auth.with(|a| a.user().cloned());

    let on_logout = move |_| {
        session.logout();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <Show when=move || auth.with(|a| a.is_active())>
            <nav class="navbar">
                <div class="navbar-container">
                    <div class="navbar-brand">
                        <h1 class="navbar-title">"Employee Management"</h1>
                    </div>
                    <div class="navbar-menu">
                        <div class="user-info">
                            <span class="username">
                                {move || user().map(|u| u.display_name().to_owned()).unwrap_or_default()}
                            </span>
                            <span class=move || user().map_or("role-badge", |u| u.role.badge_class())>
                                {move || user().map(|u| u.role.label()).unwrap_or_default()}
                            </span>
                        </div>
                        <button class="btn-logout" on:click=on_logout.clone()>
                            "Logout"
                        </button>
                    </div>
                </div>
            </nav>
        </Show>
    }
}
