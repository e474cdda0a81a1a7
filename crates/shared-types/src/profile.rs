use serde::{Deserialize, Serialize};

use crate::{AppError, Role};

/// Employer profile as returned by the backend.
///
/// Only existence matters to the guard; the fields are carried for the
/// onboarding form and the dashboard header.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployerProfile {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub tax_code: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Onboarding form payload posted to create a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployerProfileRequest {
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl CreateEmployerProfileRequest {
    /// Build a request from raw form input. Blank optional fields are dropped.
    pub fn from_form(
        company_name: &str,
        tax_code: &str,
        address: &str,
        website: &str,
    ) -> Result<Self, AppError> {
        let company_name = company_name.trim();
        if company_name.is_empty() {
            return Err(AppError::bad_request("Vui lòng nhập tên công ty"));
        }

        fn optional(s: &str) -> Option<String> {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }

        Ok(Self {
            company_name: company_name.to_string(),
            tax_code: optional(tax_code),
            address: optional(address),
            website: optional(website),
        })
    }
}

/// What the profile service said about the current employer.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileLookup {
    Found,
    Missing,
    Failed(AppError),
}

impl ProfileLookup {
    /// Collapse a profile-service result into one of the three lookups.
    ///
    /// A `null` body counts as missing, the same as a 404.
    pub fn from_result(result: Result<Option<EmployerProfile>, AppError>) -> Self {
        match result {
            Ok(Some(_)) => ProfileLookup::Found,
            Ok(None) => ProfileLookup::Missing,
            Err(e) if e.is_not_found() => ProfileLookup::Missing,
            Err(e) => ProfileLookup::Failed(e),
        }
    }
}

/// Result of running the onboarding guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Proceed,
    RedirectToOnboarding,
    /// The profile service failed; navigation is allowed anyway.
    ProceedAfterError,
}

impl GuardOutcome {
    pub fn allows_navigation(self) -> bool {
        !matches!(self, GuardOutcome::RedirectToOnboarding)
    }
}

/// Decide whether navigation may proceed.
///
/// Only employers are guarded. A missing profile sends them to onboarding; a
/// failing profile service never blocks them.
pub fn decide(role: &Role, lookup: &ProfileLookup) -> GuardOutcome {
    if !role.is_employer() {
        return GuardOutcome::Proceed;
    }
    match lookup {
        ProfileLookup::Found => GuardOutcome::Proceed,
        ProfileLookup::Missing => GuardOutcome::RedirectToOnboarding,
        ProfileLookup::Failed(_) => GuardOutcome::ProceedAfterError,
    }
}
