//! Employer onboarding guard.
//!
//! Employers without a profile are sent to the business-info form. Every
//! other failure lets navigation continue: a backend outage must not lock
//! employers out of their dashboard.

use shared_types::{decide, paths, GuardOutcome, ProfileLookup, SessionToken};

use crate::services::ProfileService;

/// Run the guard without side effects and report what should happen.
///
/// Undecodable tokens are treated like non-employer tokens: the guard only
/// governs employer flows, and the backend rejects bad tokens on its own.
pub async fn evaluate_guard<S: ProfileService>(
    token: &SessionToken,
    service: &S,
) -> GuardOutcome {
    let role = match token.role() {
        Ok(role) => role,
        Err(e) => {
            tracing::warn!(error = %e, "Could not decode session token; skipping profile guard");
            return GuardOutcome::Proceed;
        }
    };

    if !role.is_employer() {
        return GuardOutcome::Proceed;
    }

    let lookup = ProfileLookup::from_result(service.fetch_profile(token).await);
    if let ProfileLookup::Failed(e) = &lookup {
        tracing::error!(error = %e, "Employer profile check failed; allowing navigation");
    }
    decide(&role, &lookup)
}

/// Check the employer profile and redirect to onboarding when it is missing.
///
/// Returns `false` only when a redirect was issued.
pub async fn check_profile_and_redirect<N, S>(
    mut navigate: N,
    token: &SessionToken,
    service: &S,
) -> bool
where
    N: FnMut(&str),
    S: ProfileService,
{
    let outcome = evaluate_guard(token, service).await;
    if outcome == GuardOutcome::RedirectToOnboarding {
        tracing::info!("Employer profile missing; redirecting to onboarding");
        navigate(paths::EMPLOYER_BUSINESS_INFO);
    }
    outcome.allows_navigation()
}

/// Avatar click in the employer header.
pub async fn handle_avatar_click<N, S>(mut navigate: N, token: &SessionToken, service: &S)
where
    N: FnMut(&str),
    S: ProfileService,
{
    if check_profile_and_redirect(&mut navigate, token, service).await {
        navigate(paths::EMPLOYER_DASHBOARD);
    }
}

/// Destination hop right after a successful employer login.
pub async fn handle_login_redirect<N, S>(mut navigate: N, token: &SessionToken, service: &S)
where
    N: FnMut(&str),
    S: ProfileService,
{
    if check_profile_and_redirect(&mut navigate, token, service).await {
        navigate(paths::EMPLOYER_DASHBOARD);
    }
}
