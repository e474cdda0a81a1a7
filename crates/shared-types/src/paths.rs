//! Client-side route paths shared by the navigation tables, the guard and
//! the router.

pub const HOME: &str = "/";
pub const JOBS: &str = "/jobs";
pub const BLOG: &str = "/blog";
pub const LOGIN: &str = "/login";
pub const LOGOUT: &str = "/logout";

pub const EMPLOYER_DASHBOARD: &str = "/employer/dashboard";
/// Onboarding form an employer lands on while their profile is missing.
pub const EMPLOYER_BUSINESS_INFO: &str = "/employer/business-info";
pub const EMPLOYER_JOBS: &str = "/employer/jobs";
pub const EMPLOYER_CANDIDATES: &str = "/employer/candidates";
pub const EMPLOYER_MESSAGES: &str = "/employer/messages";
pub const EMPLOYER_SETTINGS: &str = "/employer/settings";

pub const ADMIN_DASHBOARD: &str = "/admin";
pub const ADMIN_USERS: &str = "/admin/users";
pub const ADMIN_JOBS: &str = "/admin/jobs";
pub const ADMIN_REPORTS: &str = "/admin/reports";
