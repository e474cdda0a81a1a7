use serde::de::DeserializeOwned;
use shared_types::{
    AppError, ClientConfig, CreateEmployerProfileRequest, EmployerProfile, JobListing,
    LoginRequest, LoginResponse, SessionToken,
};

use crate::services::{AuthService, ListingService, ProfileService};

/// HTTP client for the InnoSphere REST backend.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn transport_error(e: reqwest::Error) -> AppError {
    AppError::network(format!("request failed: {e}"))
}

/// Turn a non-2xx response into an `AppError`, otherwise hand back the body text.
async fn success_body(response: reqwest::Response) -> Result<String, AppError> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;
    if status.is_success() {
        Ok(body)
    } else {
        Err(AppError::from_status(status.as_u16(), &body))
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
    let body = success_body(response).await?;
    serde_json::from_str(&body)
        .map_err(|e| AppError::internal(format!("invalid response body: {e}")))
}

impl ProfileService for ApiClient {
    #[tracing::instrument(skip(self, token))]
    async fn fetch_profile(
        &self,
        token: &SessionToken,
    ) -> Result<Option<EmployerProfile>, AppError> {
        let response = self
            .http
            .get(self.url("/employer/profile"))
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(transport_error)?;

        let body = success_body(response).await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&body)
            .map_err(|e| AppError::internal(format!("invalid profile body: {e}")))
    }

    #[tracing::instrument(skip(self, token, request))]
    async fn create_profile(
        &self,
        token: &SessionToken,
        request: &CreateEmployerProfileRequest,
    ) -> Result<EmployerProfile, AppError> {
        let response = self
            .http
            .post(self.url("/employer/profile"))
            .bearer_auth(token.as_str())
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let profile: EmployerProfile = read_json(response).await?;
        tracing::info!(company = ?profile.company_name, "Employer profile created");
        Ok(profile)
    }
}

impl ListingService for ApiClient {
    #[tracing::instrument(skip(self))]
    async fn homepage_listings(&self, limit: u32) -> Result<Vec<JobListing>, AppError> {
        let response = self
            .http
            .get(self.url("/jobs/homepage"))
            .query(&[("limit", limit)])
            .send()
            .await
            .map_err(transport_error)?;

        read_json(response).await
    }
}

impl AuthService for ApiClient {
    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        read_json(response).await
    }
}
