//! Registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppApi;
use crate::net::api::Registration;
use crate::pages::login::registered_redirect;
use crate::state::auth_form::{AuthFormState, REGISTER_FAILED_MESSAGE, register_request};
use crate::state::session::SessionHandle;
use crate::util::auth::{HOME_PATH, RouteAccess, install_route_guard, may_render};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let api = expect_context::<AppApi>();
    let auth = session.state();
    let navigate = use_navigate();
    install_route_guard(auth, RouteAccess::Public, navigate.clone());

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let form = RwSignal::new(AuthFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.try_update(AuthFormState::begin).unwrap_or(false) {
            return;
        }
        let request = match register_request(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            Ok(request) => request,
            Err(message) => {
                form.update(|f| f.reject(message));
                return;
            }
        };

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.register(&request).await {
                Ok(Registration::SignedIn(signed_in)) => match session.login(signed_in) {
                    Ok(()) => {
                        form.update(AuthFormState::succeed);
                        navigate(HOME_PATH, NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("register: failed to persist session: {e}");
                        form.update(|f| f.reject(e.to_string()));
                    }
                },
                Ok(Registration::Created { message }) => {
                    if let Some(message) = message {
                        leptos::logging::log!("register: {message}");
                    }
                    form.update(AuthFormState::succeed);
                    navigate(&registered_redirect(), NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::log!("registration rejected: {e}");
                    form.update(|f| f.fail(&e, REGISTER_FAILED_MESSAGE));
                }
            }
        });
    };

    view! {
        <Show when=move || auth.with(|a| may_render(RouteAccess::Public, a))>
            <div class="auth-container">
                <div class="auth-card">
                    <h2>"Register"</h2>
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
                            <label for="email">"Email"</label>
                            <input
                                id="email"
                                type="email"
                                required
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
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
                        <div class="form-group">
                            <label for="confirm-password">"Confirm Password"</label>
                            <input
                                id="confirm-password"
                                type="password"
                                required
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </div>
                        <button
                            type="submit"
                            class="btn-primary"
                            disabled=move || form.with(AuthFormState::is_submitting)
                        >
                            {move || if form.with(AuthFormState::is_submitting) { "Registering..." } else { "Register" }}
                        </button>
                    </form>
                    <p class="auth-link">
                        "Already have an account? " <a href="/login">"Login here"</a>
                    </p>
                </div>
            </div>
        </Show>
    }
}
