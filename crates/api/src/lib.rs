//! Backend access for the InnoSphere client: the HTTP client, the service
//! traits the UI depends on, and the employer onboarding guard.

pub mod client;
pub mod guard;
pub mod services;

pub use client::ApiClient;
pub use guard::{
    check_profile_and_redirect, evaluate_guard, handle_avatar_click, handle_login_redirect,
};
pub use services::{AuthService, ListingService, ProfileService};
