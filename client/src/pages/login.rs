//! Login page: username + password against `POST /auth/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::AppApi;
use crate::state::auth_form::{AuthFormState, LOGIN_FAILED_MESSAGE, REGISTERED_NOTICE, login_request};
use crate::state::session::SessionHandle;
use crate::util::auth::{HOME_PATH, RouteAccess, install_route_guard, may_render};

/// Query flag set by the register page when the user still has to log in.
pub const REGISTERED_FLAG: &str = "registered";

/// Where register sends a user whose account was created without a session.
pub fn registered_redirect() -> String {
    format!("/login?{REGISTERED_FLAG}=1")
}

/// Notice to show above the form for the current query flag.
fn notice_for(flag: Option<&str>) -> Option<&'static str> {
    flag.filter(|v| !v.is_empty()).map(|_| REGISTERED_NOTICE)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let api = expect_context::<AppApi>();
    let auth = session.state();
    let navigate = use_navigate();
    let query = use_query_map();
    install_route_guard(auth, RouteAccess::Public, navigate.clone());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(AuthFormState::default());

    let notice = move || query.with(|q| notice_for(q.get(REGISTERED_FLAG).as_deref()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.try_update(AuthFormState::begin).unwrap_or(false) {
            return;
        }
        let request = match login_request(&username.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                form.update(|f| f.reject(message));
                return;
            }
        };

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.login(&request).await {
                Ok(signed_in) => match session.login(signed_in) {
                    Ok(()) => {
                        form.update(AuthFormState::succeed);
                        navigate(HOME_PATH, NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("login: failed to persist session: {e}");
                        form.update(|f| f.reject(e.to_string()));
                    }
                },
                Err(e) => {
                    leptos::logging::log!("login rejected: {e}");
                    form.update(|f| f.fail(&e, LOGIN_FAILED_MESSAGE));
                }
            }
        });
    };

    view! {
        <Show when=move || auth.with(|a| may_render(RouteAccess::Public, a))>
            <div class="auth-container">
                <div class="auth-card">
                    <h2>"Login"</h2>
                    <Show when=move || notice().is_some()>
                        <div class="success-message">{move || notice().unwrap_or_default()}</div>
                    </Show>
                    <Show when=move || form.with(|f| f.error.is_some())>
                        <div class="error-message">{move || form.with(|f| f.error.clone().unwrap_or_default())}</div>
                    </Show>
                    <form on:submit=on_submit.clone()>
                        <div class="form-group">
                            <label for="username">"Username"</label>
                            <input
                                id="username"
                                type="text"
                                required
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <input
                                id="password"
                                type="password"
                                required
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </div>
                        <button
                            type="submit"
                            class="btn-primary"
                            disabled=move || form.with(AuthFormState::is_submitting)
                        >
                            {move || if form.with(AuthFormState::is_submitting) { "Logging in..." } else { "Login" }}
                        </button>
                    </form>
                    <p class="auth-link">
                        "Don't have an account? " <a href="/register">"Register here"</a>
                    </p>
                </div>
            </div>
        </Show>
    }
}
