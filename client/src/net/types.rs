//! Shared wire-protocol DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the remote API's camelCase JSON so serde round-trips
//! stay lossless. Role strings are folded into a closed enum at decode time;
//! views check capabilities instead of comparing strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role attached to an authenticated user.
///
/// Anything the server sends other than `"Admin"` decodes as `Employee`,
/// which is read-only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>")]
pub enum Role {
    Admin,
    #[default]
    Employee,
}

/// An action gated by role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    /// Add, edit and delete employee records.
    ManageEmployees,
    /// Read the directory.
    ViewEmployees,
}

impl Role {
    /// Whether this role may perform `capability`.
    pub fn allows(self, capability: Capability) -> bool {
        match capability {
            Capability::ViewEmployees => true,
            Capability::ManageEmployees => matches!(self, Self::Admin),
        }
    }

    /// Display label for the role badge.
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Employee => "Employee",
        }
    }

    /// CSS modifier for the role badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Admin => "role-badge admin",
            Self::Employee => "role-badge employee",
        }
    }
}

impl From<Option<String>> for Role {
    fn from(value: Option<String>) -> Self {
        if value.as_deref() == Some("Admin") { Self::Admin } else { Self::Employee }
    }
}

/// Authenticated user profile as returned by `/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// Name shown in the top bar: username, else email.
    pub fn display_name(&self) -> &str {
        if self.username.trim().is_empty() {
            self.email.as_deref().unwrap_or_default()
        } else {
            &self.username
        }
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.role.allows(capability)
    }
}

/// Token + user pair. One value so neither half can exist alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// `POST /auth/login` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /auth/login` response.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /auth/register` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// `POST /auth/register` response. Some deployments also sign the user in.
#[derive(Clone, Debug, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// An employee record owned by the remote API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub salary: f64,
    #[serde(default)]
    pub department: Option<String>,
}

impl Employee {
    /// Server-provided full name, derived from first/last when blank.
    pub fn display_name(&self) -> String {
        match self.full_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => format!("{} {}", self.first_name, self.last_name).trim().to_owned(),
        }
    }

    /// Department cell text.
    pub fn department_label(&self) -> &str {
        match self.department.as_deref() {
            Some(d) if !d.trim().is_empty() => d,
            _ => "N/A",
        }
    }
}

/// Create/update payload for `POST /employees` and `PUT /employees/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub salary: f64,
    pub department: Option<String>,
}

/// One page of `GET /employees`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePage {
    #[serde(default)]
    pub data: Vec<Employee>,
    #[serde(default)]
    pub total_pages: u32,
}

/// Error body shape used by the API (`message`) or ASP.NET problem details (`title`).
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl ErrorBody {
    /// Best human-readable message in the body, if any.
    pub fn into_message(self) -> Option<String> {
        self.message
            .filter(|m| !m.trim().is_empty())
            .or(self.title.filter(|t| !t.trim().is_empty()))
    }
}

/// Format a salary the way the directory table shows it: `$75,000`, `$1,234.5`.
pub fn format_salary(salary: f64) -> String {
    let negative = salary < 0.0;
    let cents = (salary.abs() * 100.0).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = cents as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    if frac == 0 {
        format!("{sign}${grouped}")
    } else {
        let frac = format!("{frac:02}");
        format!("{sign}${grouped}.{}", frac.trim_end_matches('0'))
    }
}
