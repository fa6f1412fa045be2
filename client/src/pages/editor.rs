//! Create/edit employee form. `/employee` creates, `/employee/:id` edits.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::app::AppApi;
use crate::state::auth::AuthState;
use crate::state::editor::{EditorMode, EditorState, EmployeeForm};
use crate::state::session::SessionHandle;
use crate::util::auth::{HOME_PATH, RouteAccess, install_route_guard, may_render};

/// Reactive getter for one text field of the form.
fn form_value(
    editor: RwSignal<EditorState>,
    read: fn(&EmployeeForm) -> &String,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || editor.with(|s| read(&s.form).clone())
}

#[component]
pub fn EditorPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let api = expect_context::<AppApi>();
    let auth = session.state();
    let navigate = use_navigate();
    let params = use_params_map();
    install_route_guard(auth, RouteAccess::Protected, navigate.clone());

    let editor = RwSignal::new(EditorState::new(EditorMode::Create));

    // Re-initialise whenever the `:id` segment changes; fetch once the session is live.
    let load_api = api.clone();
    Effect::new(move || {
        let id = params.with(|p| p.get("id"));
        let state = match EditorMode::from_param(id.as_deref()) {
            Ok(mode) => EditorState::new(mode),
            Err(message) => EditorState::invalid(message),
        };
        let mode = state.mode;
        editor.set(state);

        let EditorMode::Edit(id) = mode else {
            return;
        };
        if !auth.with(AuthState::is_active) {
            return;
        }
        let api = load_api.clone();
        leptos::task::spawn_local(async move {
            let result = api.get_employee(id).await;
            if let Err(e) = &result {
                leptos::logging::warn!("editor: load {id} failed: {e}");
            }
            editor.update(|s| {
                if s.mode == EditorMode::Edit(id) {
                    s.loaded(result);
                }
            });
        });
    });

    let navigate_done = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = editor.try_update(EditorState::begin_submit).flatten() else {
            return;
        };
        let mode = editor.with_untracked(|s| s.mode);
        let api = api.clone();
        let navigate = navigate_done.clone();
        leptos::task::spawn_local(async move {
            let result = match mode {
                EditorMode::Create => api.create_employee(&input).await.map(|_| ()),
                EditorMode::Edit(id) => api.update_employee(id, &input).await.map(|_| ()),
            };
            if let Err(e) = &result {
                leptos::logging::warn!("editor: save failed: {e}");
            }
            if let Some(target) = editor.try_update(|s| s.finish_submit(result)).flatten() {
                navigate(target, NavigateOptions::default());
            }
        });
    };

    let navigate_cancel = navigate.clone();
    let on_cancel = move |_| navigate_cancel(HOME_PATH, NavigateOptions::default());

    let disabled = move || editor.with(EditorState::inputs_locked);
    let submit_disabled = move || editor.with(EditorState::is_disabled);

    view! {
        <Show
            when=move || auth.with(|a| may_render(RouteAccess::Protected, a))
            fallback=move || view! { <p class="loading">"Loading..."</p> }
        >
            <div class="employee-form-container">
                <h2>{move || editor.with(|s| s.mode.title())}</h2>
                <Show when=move || editor.with(|s| s.error.is_some())>
                    <div class="error-message">{move || editor.with(|s| s.error.clone().unwrap_or_default())}</div>
                </Show>
                <form class="employee-form" on:submit=on_submit.clone()>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="first-name">"First Name *"</label>
                            <input
                                id="first-name"
                                type="text"
                                required
                                disabled=disabled
                                prop:value=form_value(editor, |f| &f.first_name)
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    editor.update(|s| s.form.first_name = value);
                                }
                            />
                        </div>
                        <div class="form-group">
                            <label for="last-name">"Last Name *"</label>
                            <input
                                id="last-name"
                                type="text"
                                required
                                disabled=disabled
                                prop:value=form_value(editor, |f| &f.last_name)
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    editor.update(|s| s.form.last_name = value);
                                }
                            />
                        </div>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="email">"Email *"</label>
                            <input
                                id="email"
                                type="email"
                                required
                                disabled=disabled
                                prop:value=form_value(editor, |f| &f.email)
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    editor.update(|s| s.form.email = value);
                                }
                            />
                        </div>
                        <div class="form-group">
                            <label for="phone-number">"Phone Number"</label>
                            <input
                                id="phone-number"
                                type="tel"
                                disabled=disabled
                                prop:value=form_value(editor, |f| &f.phone_number)
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    editor.update(|s| s.form.phone_number = value);
                                }
                            />
                        </div>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="salary">"Salary *"</label>
                            <input
                                id="salary"
                                type="number"
                                min="0"
                                step="0.01"
                                required
                                disabled=disabled
                                prop:value=form_value(editor, |f| &f.salary)
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    editor.update(|s| s.form.salary = value);
                                }
                            />
                        </div>
                        <div class="form-group">
                            <label for="department">"Department"</label>
                            <input
                                id="department"
                                type="text"
                                disabled=disabled
                                prop:value=form_value(editor, |f| &f.department)
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    editor.update(|s| s.form.department = value);
                                }
                            />
                        </div>
                    </div>
                    <div class="form-actions">
                        <button type="submit" class="btn-primary" disabled=submit_disabled>
                            {move || {
                                editor.with(|s| if s.is_submitting() { "Saving..." } else { s.mode.submit_label() })
                            }}
                        </button>
                        <button type="button" class="btn-secondary" on:click=on_cancel.clone()>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
