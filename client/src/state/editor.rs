//! Employee editor form state (create and edit share one form).

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::net::error::RequestError;
use crate::net::types::{Employee, EmployeeInput};

/// Which operation the form performs on submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(i64),
}

impl EditorMode {
    /// Mode from the optional `:id` route parameter.
    ///
    /// # Errors
    ///
    /// Returns the load-failure message when the id is not a number.
    pub fn from_param(id: Option<&str>) -> Result<Self, String> {
        match id.map(str::trim) {
            None | Some("") => Ok(Self::Create),
            Some(raw) => raw
                .parse::<i64>()
                .map(Self::Edit)
                .map_err(|_| LOAD_FAILED_MESSAGE.to_owned()),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Create => "Add New Employee",
            Self::Edit(_) => "Edit Employee",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Create => "Add Employee",
            Self::Edit(_) => "Update Employee",
        }
    }
}

/// Shown when an edit-mode fetch fails.
pub const LOAD_FAILED_MESSAGE: &str = "Error loading employee data";
/// Fallback when a save fails without a server message.
pub const SAVE_FAILED_MESSAGE: &str = "Error saving employee";

/// A required field left blank, or a malformed value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Salary must be a number")]
    InvalidSalary,
    #[error("Salary cannot be negative")]
    NegativeSalary,
}

/// Raw form inputs, kept as typed text so failed submits preserve them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub salary: String,
    pub department: String,
}

impl EmployeeForm {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            phone_number: employee.phone_number.clone().unwrap_or_default(),
            salary: employee.salary.to_string(),
            department: employee.department.clone().unwrap_or_default(),
        }
    }

    /// Check required fields and convert into the API payload.
    ///
    /// # Errors
    ///
    /// Returns the first failing field.
    pub fn validate(&self) -> Result<EmployeeInput, ValidationError> {
        let first_name = required(&self.first_name, "First name")?;
        let last_name = required(&self.last_name, "Last name")?;
        let email = required(&self.email, "Email")?;
        if !is_plausible_email(&email) {
            return Err(ValidationError::InvalidEmail);
        }
        let salary_raw = required(&self.salary, "Salary")?;
        let salary: f64 = salary_raw.parse().map_err(|_| ValidationError::InvalidSalary)?;
        if !salary.is_finite() {
            return Err(ValidationError::InvalidSalary);
        }
        if salary < 0.0 {
            return Err(ValidationError::NegativeSalary);
        }

        Ok(EmployeeInput {
            first_name,
            last_name,
            email,
            phone_number: optional(&self.phone_number),
            salary,
            department: optional(&self.department),
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(trimmed.to_owned())
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Same bar as `<input type="email">`: something on both sides of one `@`.
pub(crate) fn is_plausible_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Lifecycle of the editor page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorPhase {
    /// Fetching the record to edit.
    Loading,
    /// Fetch failed; the form stays disabled.
    LoadFailed(String),
    Ready,
    Submitting,
}

/// Whole editor state: mode, inputs, phase and the inline error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorState {
    pub mode: EditorMode,
    pub form: EmployeeForm,
    pub phase: EditorPhase,
    pub error: Option<String>,
}

impl EditorState {
    pub fn new(mode: EditorMode) -> Self {
        let phase = match mode {
            EditorMode::Create => EditorPhase::Ready,
            EditorMode::Edit(_) => EditorPhase::Loading,
        };
        Self { mode, form: EmployeeForm::default(), phase, error: None }
    }

    /// Editor for an unparseable `:id`: disabled with the load error.
    pub fn invalid(message: String) -> Self {
        Self {
            mode: EditorMode::Create,
            form: EmployeeForm::default(),
            phase: EditorPhase::LoadFailed(message.clone()),
            error: Some(message),
        }
    }

    /// Submit is disabled while loading, submitting or after a failed load.
    pub fn is_disabled(&self) -> bool {
        !matches!(self.phase, EditorPhase::Ready)
    }

    /// Inputs lock only while there is no record to edit. During a submit
    /// just the submit button is disabled.
    pub fn inputs_locked(&self) -> bool {
        matches!(self.phase, EditorPhase::Loading | EditorPhase::LoadFailed(_))
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, EditorPhase::Submitting)
    }

    /// Apply the edit-mode fetch.
    pub fn loaded(&mut self, result: Result<Employee, RequestError>) {
        match result {
            Ok(employee) => {
                self.form = EmployeeForm::from_employee(&employee);
                self.phase = EditorPhase::Ready;
                self.error = None;
            }
            Err(e) => {
                let message = match e {
                    RequestError::NotFound { .. } => "Employee not found".to_owned(),
                    RequestError::Network(_) => e.user_message(LOAD_FAILED_MESSAGE),
                    _ => LOAD_FAILED_MESSAGE.to_owned(),
                };
                self.phase = EditorPhase::LoadFailed(message.clone());
                self.error = Some(message);
            }
        }
    }

    /// Validate and enter `Submitting`. Returns the payload to send, or `None`
    /// when the form is not ready or fails validation (error set inline).
    pub fn begin_submit(&mut self) -> Option<EmployeeInput> {
        if self.is_disabled() {
            return None;
        }
        self.error = None;
        match self.form.validate() {
            Ok(input) => {
                self.phase = EditorPhase::Submitting;
                Some(input)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Record the save outcome. Returns the route to navigate to on success.
    /// Entered values are kept on failure.
    pub fn finish_submit(&mut self, result: Result<(), RequestError>) -> Option<&'static str> {
        self.phase = EditorPhase::Ready;
        match result {
            Ok(()) => Some("/"),
            Err(RequestError::SessionExpired) => None,
            Err(e) => {
                self.error = Some(e.user_message(SAVE_FAILED_MESSAGE));
                None
            }
        }
    }
}
