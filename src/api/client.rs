//! HTTP client for the roster service endpoints.

use std::time::Duration;

use reqwest::{Client, Response};
use tracing::debug;

use crate::api::error::ApiError;
use crate::api::types::{NewStudent, Student};

/// Collection resource path, relative to the configured base URL.
const STUDENTS_PATH: &str = "/api/v1/students";

/// Typed wrapper around the roster service.
///
/// One instance is built at startup and handed to the API worker. Every
/// method is a single round-trip with the configured timeouts applied by
/// the underlying client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url` with the given timeouts.
    pub fn new(
        base_url: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the whole collection, in server order.
    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        let response = self.http.get(self.students_url()).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Create a student. The service assigns the id, so nothing useful
    /// comes back on success.
    pub async fn create_student(&self, student: &NewStudent) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.students_url())
            .json(student)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Delete the student with `id`.
    pub async fn delete_student(&self, id: i64) -> Result<(), ApiError> {
        let response = self.http.delete(self.student_url(id)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    fn students_url(&self) -> String {
        format!("{}{}", self.base_url, STUDENTS_PATH)
    }

    fn student_url(&self, id: i64) -> String {
        format!("{}{}/{}", self.base_url, STUDENTS_PATH, id)
    }

    /// Pass 2xx responses through, decode anything else into [`ApiError`].
    ///
    /// A body that cannot even be read is treated as empty, which then
    /// degrades to `MalformedBody` instead of surfacing a second failure.
    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        debug!(
            status = status.as_u16(),
            "roster service returned an error response"
        );
        Err(ApiError::from_error_body(status.as_u16(), &body))
    }
}
