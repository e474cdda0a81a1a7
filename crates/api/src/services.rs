//! Seams between the UI and the backend.
//!
//! The browser runtime is single-threaded, so these traits use plain
//! `async fn` without `Send` bounds.
#![allow(async_fn_in_trait)]

use shared_types::{
    AppError, CreateEmployerProfileRequest, EmployerProfile, JobListing, LoginRequest,
    LoginResponse, SessionToken,
};

/// Access to the current employer's profile.
pub trait ProfileService {
    /// `Ok(None)` when the backend answers with a `null` body. A missing
    /// profile is usually reported as an error of kind `NotFound` instead.
    async fn fetch_profile(
        &self,
        token: &SessionToken,
    ) -> Result<Option<EmployerProfile>, AppError>;

    async fn create_profile(
        &self,
        token: &SessionToken,
        request: &CreateEmployerProfileRequest,
    ) -> Result<EmployerProfile, AppError>;
}

/// Job listings shown on the public pages.
pub trait ListingService {
    async fn homepage_listings(&self, limit: u32) -> Result<Vec<JobListing>, AppError>;
}

pub trait AuthService {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError>;
}
