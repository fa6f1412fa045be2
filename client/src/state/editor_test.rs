use super::*;

fn filled_form() -> EmployeeForm {
    EmployeeForm {
        first_name: " Ada ".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        phone_number: String::new(),
        salary: "120000".to_owned(),
        department: "Eng".to_owned(),
    }
}

fn employee_42() -> Employee {
    Employee {
        id: 42,
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        full_name: Some("Ada Lovelace".to_owned()),
        email: "ada@example.com".to_owned(),
        phone_number: Some("555-0100".to_owned()),
        salary: 120_000.0,
        department: None,
    }
}

// =============================================================
// EditorMode
// =============================================================

#[test]
fn mode_without_id_is_create() {
    assert_eq!(EditorMode::from_param(None), Ok(EditorMode::Create));
    assert_eq!(EditorMode::from_param(Some("")), Ok(EditorMode::Create));
}

#[test]
fn mode_with_numeric_id_is_edit() {
    assert_eq!(EditorMode::from_param(Some("42")), Ok(EditorMode::Edit(42)));
}

#[test]
fn mode_with_garbage_id_is_load_error() {
    assert_eq!(EditorMode::from_param(Some("abc")), Err(LOAD_FAILED_MESSAGE.to_owned()));
}

#[test]
fn mode_labels() {
    assert_eq!(EditorMode::Create.title(), "Add New Employee");
    assert_eq!(EditorMode::Edit(1).submit_label(), "Update Employee");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn valid_form_produces_trimmed_input() {
    let input = filled_form().validate().expect("valid");
    assert_eq!(input.first_name, "Ada");
    assert_eq!(input.phone_number, None);
    assert_eq!(input.department.as_deref(), Some("Eng"));
    assert!((input.salary - 120_000.0).abs() < f64::EPSILON);
}

#[test]
fn required_fields_are_enforced_in_order() {
    let mut form = filled_form();
    form.first_name = "  ".to_owned();
    assert_eq!(form.validate(), Err(ValidationError::Required("First name")));

    let mut form = filled_form();
    form.last_name.clear();
    assert_eq!(form.validate(), Err(ValidationError::Required("Last name")));

    let mut form = filled_form();
    form.email.clear();
    assert_eq!(form.validate(), Err(ValidationError::Required("Email")));

    let mut form = filled_form();
    form.salary.clear();
    assert_eq!(form.validate(), Err(ValidationError::Required("Salary")));
}

#[test]
fn email_needs_an_at_sign() {
    let mut form = filled_form();
    form.email = "ada.example.com".to_owned();
    assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
}

#[test]
fn salary_must_be_numeric_and_non_negative() {
    let mut form = filled_form();
    form.salary = "lots".to_owned();
    assert_eq!(form.validate(), Err(ValidationError::InvalidSalary));

    form.salary = "NaN".to_owned();
    assert_eq!(form.validate(), Err(ValidationError::InvalidSalary));

    form.salary = "-1".to_owned();
    assert_eq!(form.validate(), Err(ValidationError::NegativeSalary));

    form.salary = "0".to_owned();
    assert!(form.validate().is_ok());
}

#[test]
fn validation_message_text() {
    assert_eq!(ValidationError::Required("Email").to_string(), "Email is required");
}

// =============================================================
// EditorState lifecycle
// =============================================================

#[test]
fn create_mode_starts_ready_with_empty_form() {
    let state = EditorState::new(EditorMode::Create);
    assert_eq!(state.phase, EditorPhase::Ready);
    assert_eq!(state.form, EmployeeForm::default());
    assert!(!state.is_disabled());
}

#[test]
fn edit_mode_populates_from_fetch() {
    let mut state = EditorState::new(EditorMode::Edit(42));
    assert!(state.is_disabled());

    state.loaded(Ok(employee_42()));
    assert_eq!(state.phase, EditorPhase::Ready);
    assert_eq!(state.form.first_name, "Ada");
    assert_eq!(state.form.phone_number, "555-0100");
    assert_eq!(state.form.salary, "120000");
    assert_eq!(state.form.department, "");
}

#[test]
fn failed_fetch_keeps_form_disabled() {
    let mut state = EditorState::new(EditorMode::Edit(42));
    state.loaded(Err(RequestError::NotFound { message: None }));
    assert!(state.is_disabled());
    assert_eq!(state.error.as_deref(), Some("Employee not found"));
    // Not silently turned into a create form.
    assert_eq!(state.mode, EditorMode::Edit(42));
    assert_eq!(state.begin_submit(), None);
}

#[test]
fn invalid_id_state_is_disabled() {
    let state = EditorState::invalid(LOAD_FAILED_MESSAGE.to_owned());
    assert!(state.is_disabled());
    assert_eq!(state.error.as_deref(), Some(LOAD_FAILED_MESSAGE));
}

#[test]
fn submit_edit_then_navigate_home() {
    let mut state = EditorState::new(EditorMode::Edit(42));
    state.loaded(Ok(employee_42()));

    let input = state.begin_submit().expect("payload");
    assert_eq!(input.first_name, "Ada");
    assert!(state.is_submitting());
    assert_eq!(state.begin_submit(), None);

    assert_eq!(state.finish_submit(Ok(())), Some("/"));
}

#[test]
fn invalid_submit_sets_inline_error_without_submitting() {
    let mut state = EditorState::new(EditorMode::Create);
    state.form.first_name = "Ada".to_owned();
    assert_eq!(state.begin_submit(), None);
    assert_eq!(state.error.as_deref(), Some("Last name is required"));
    assert_eq!(state.phase, EditorPhase::Ready);
}

#[test]
fn failed_submit_preserves_values_and_shows_server_message() {
    let mut state = EditorState::new(EditorMode::Create);
    state.form = filled_form();
    state.begin_submit().expect("payload");

    let route = state.finish_submit(Err(RequestError::Rejected {
        status: 400,
        message: Some("Email already in use".to_owned()),
    }));
    assert_eq!(route, None);
    assert_eq!(state.error.as_deref(), Some("Email already in use"));
    assert_eq!(state.form, filled_form());
    assert!(!state.is_disabled());
}

#[test]
fn failed_submit_without_message_uses_fallback() {
    let mut state = EditorState::new(EditorMode::Create);
    state.form = filled_form();
    state.begin_submit().expect("payload");
    state.finish_submit(Err(RequestError::Rejected { status: 500, message: None }));
    assert_eq!(state.error.as_deref(), Some(SAVE_FAILED_MESSAGE));
}

#[test]
fn submitting_disables_submit_but_not_inputs() {
    let mut state = EditorState::new(EditorMode::Create);
    state.form = filled_form();
    assert!(state.begin_submit().is_some());

    assert!(state.is_disabled());
    assert!(!state.inputs_locked());
}

#[test]
fn loading_and_failed_load_lock_inputs() {
    let mut state = EditorState::new(EditorMode::Edit(42));
    assert!(state.inputs_locked());

    state.loaded(Err(RequestError::Network("offline".to_owned())));
    assert!(state.inputs_locked());
    assert!(EditorState::invalid(LOAD_FAILED_MESSAGE.to_owned()).inputs_locked());
}
