//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::config::{API_BASE_META, ApiConfig};
use crate::net::api::ApiClient;
use crate::net::transport::BrowserTransport;
use crate::pages::{directory::DirectoryPage, editor::EditorPage, login::LoginPage, register::RegisterPage};
use crate::state::auth::AuthState;
use crate::state::session::SessionHandle;

/// API client shared through context by every page.
pub type AppApi = ApiClient<BrowserTransport, SessionHandle>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions, api: ApiConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api.base_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session signal, the session handle and the API client, then
/// restores any persisted session before the route guards make decisions.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restoring());
    let session = SessionHandle::new(auth);
    let config = ApiConfig::resolve();
    let api: AppApi = ApiClient::new(BrowserTransport, session, &config.base_url);

    provide_context(auth);
    provide_context(session);
    provide_context(api);

    // Effects only run in the browser, where storage is readable.
    Effect::new(move || {
        session.restore();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/employee-directory.css"/>
        <Title text="Employee Management"/>
        <Meta name="description" content="Employee directory"/>

        <Router>
            <Navbar/>
            <main class="container">
                <Routes fallback=|| view! { <Redirect path="/"/> }>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("") view=DirectoryPage/>
                    <Route path=StaticSegment("employee") view=EditorPage/>
                    <Route path=(StaticSegment("employee"), ParamSegment("id")) view=EditorPage/>
                </Routes>
            </main>
        </Router>
    }
}
