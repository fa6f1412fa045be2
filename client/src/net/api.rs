//! REST API client for the employee-directory backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page talks to the backend through one [`ApiClient`] provided via
//! context. The client reads the bearer token from the session at call time
//! and, on a 401 from an authenticated endpoint, asks the session to expire
//! itself. Login and register are unauthenticated: a 401 there is a rejected
//! credential, not an expired session.
//!
//! ERROR HANDLING
//! ==============
//! All methods return `Result<_, RequestError>`; nothing panics on malformed
//! responses.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::RequestError;
use super::transport::{HttpRequest, HttpResponse, Method, Transport};
use super::types::{
    Employee, EmployeeInput, EmployeePage, ErrorBody, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse, Session,
};
use crate::state::directory::DirectoryQuery;

/// Session hooks the API client needs: read the token, expire on 401.
pub trait SessionGate {
    /// Token to send as `Authorization: Bearer`, read at call time.
    fn bearer_token(&self) -> Option<String>;
    /// Clear the session and leave protected views. Must be idempotent.
    fn expire(&self);
}

/// Whether a call requires (and is invalidated by) a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Access {
    Public,
    Authenticated,
}

/// Outcome of a successful registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Registration {
    /// The server also signed the user in.
    SignedIn(Session),
    /// Account created; the user still has to log in.
    Created { message: Option<String> },
}

/// Typed client for the remote REST API.
#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    transport: T,
    session: S,
    base_url: String,
}

impl<T: Transport, S: SessionGate> ApiClient<T, S> {
    pub fn new(transport: T, session: S, base_url: &str) -> Self {
        Self {
            transport,
            session,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /auth/login`. Returns the session to store on success.
    ///
    /// # Errors
    ///
    /// `Auth` when the server rejects the credentials or answers `success: false`.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<Session, RequestError> {
        let resp = self
            .send(Method::Post, "/auth/login", Vec::new(), Some(encode(credentials)?), Access::Public)
            .await
            .map_err(into_auth_error)?;
        let body: LoginResponse = decode(&resp)?;
        if !body.success {
            return Err(RequestError::Auth { status: Some(resp.status), message: body.message });
        }
        match (body.token, body.user) {
            (Some(token), Some(user)) if !token.is_empty() => Ok(Session { token, user }),
            _ => Err(RequestError::Decode("login response missing token or user".to_owned())),
        }
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// `Auth` when the server rejects the registration.
    pub async fn register(&self, data: &RegisterRequest) -> Result<Registration, RequestError> {
        let resp = self
            .send(Method::Post, "/auth/register", Vec::new(), Some(encode(data)?), Access::Public)
            .await
            .map_err(into_auth_error)?;
        let body: RegisterResponse = decode(&resp)?;
        if !body.success {
            return Err(RequestError::Auth { status: Some(resp.status), message: body.message });
        }
        Ok(match (body.token, body.user) {
            (Some(token), Some(user)) if !token.is_empty() => Registration::SignedIn(Session { token, user }),
            _ => Registration::Created { message: body.message },
        })
    }

    /// `GET /employees` for one directory query.
    ///
    /// # Errors
    ///
    /// Any [`RequestError`]; `SessionExpired` after the session was cleared.
    pub async fn list_employees(&self, query: &DirectoryQuery) -> Result<EmployeePage, RequestError> {
        let resp = self
            .send(Method::Get, "/employees", query.to_params(), None, Access::Authenticated)
            .await?;
        decode(&resp)
    }

    /// `GET /employees/{id}`.
    ///
    /// # Errors
    ///
    /// `NotFound` when the id does not exist.
    pub async fn get_employee(&self, id: i64) -> Result<Employee, RequestError> {
        let resp = self
            .send(Method::Get, &format!("/employees/{id}"), Vec::new(), None, Access::Authenticated)
            .await?;
        decode(&resp)
    }

    /// `POST /employees`.
    ///
    /// # Errors
    ///
    /// `Rejected` with the server's validation message.
    pub async fn create_employee(&self, data: &EmployeeInput) -> Result<Employee, RequestError> {
        let resp = self
            .send(Method::Post, "/employees", Vec::new(), Some(encode(data)?), Access::Authenticated)
            .await?;
        decode(&resp)
    }

    /// `PUT /employees/{id}`. Tolerates an empty 2xx body.
    ///
    /// # Errors
    ///
    /// `Rejected` with the server's validation message, `NotFound` for a stale id.
    pub async fn update_employee(&self, id: i64, data: &EmployeeInput) -> Result<Option<Employee>, RequestError> {
        let resp = self
            .send(
                Method::Put,
                &format!("/employees/{id}"),
                Vec::new(),
                Some(encode(data)?),
                Access::Authenticated,
            )
            .await?;
        if resp.body.trim().is_empty() {
            return Ok(None);
        }
        decode(&resp).map(Some)
    }

    /// `DELETE /employees/{id}`; expects 204.
    ///
    /// # Errors
    ///
    /// `NotFound` when the record is already gone.
    pub async fn delete_employee(&self, id: i64) -> Result<(), RequestError> {
        self.send(Method::Delete, &format!("/employees/{id}"), Vec::new(), None, Access::Authenticated)
            .await
            .map(|_| ())
    }

    /// `GET /employees/department/{dept}`.
    ///
    /// # Errors
    ///
    /// Any [`RequestError`].
    pub async fn employees_by_department(&self, department: &str) -> Result<Vec<Employee>, RequestError> {
        let path = format!("/employees/department/{}", urlencoding::encode(department));
        let resp = self.send(Method::Get, &path, Vec::new(), None, Access::Authenticated).await?;
        decode(&resp)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<String>,
        access: Access,
    ) -> Result<HttpResponse, RequestError> {
        let mut request = HttpRequest::new(method, format!("{}{path}", self.base_url));
        request.query = query;
        request.body = body;
        if let Some(token) = self.session.bearer_token() {
            request.headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }

        let resp = self.transport.send(request).await.map_err(|e| {
            leptos::logging::warn!("request to {path} failed: {e}");
            RequestError::Network(e)
        })?;

        if resp.is_success() {
            return Ok(resp);
        }

        if resp.status == 401 && access == Access::Authenticated {
            leptos::logging::warn!("401 from {path}; expiring session");
            self.session.expire();
            return Err(RequestError::SessionExpired);
        }

        let message = error_message(&resp);
        Err(match resp.status {
            404 => RequestError::NotFound { message },
            status => RequestError::Rejected { status, message },
        })
    }
}

/// Login/register failures are credential problems, whatever the status.
fn into_auth_error(err: RequestError) -> RequestError {
    match err {
        RequestError::Rejected { status, message } => RequestError::Auth { status: Some(status), message },
        RequestError::NotFound { message } => RequestError::Auth { status: Some(404), message },
        other => other,
    }
}

fn error_message(resp: &HttpResponse) -> Option<String> {
    serde_json::from_str::<ErrorBody>(&resp.body)
        .map_or(None, ErrorBody::into_message)
}

fn encode<B: Serialize>(body: &B) -> Result<String, RequestError> {
    serde_json::to_string(body).map_err(|e| RequestError::Decode(e.to_string()))
}

fn decode<R: DeserializeOwned>(resp: &HttpResponse) -> Result<R, RequestError> {
    serde_json::from_str(&resp.body).map_err(|e| RequestError::Decode(e.to_string()))
}
