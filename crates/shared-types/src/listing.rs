use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::format::{format_hourly_rate, format_time_ago_str, format_time_range};
use crate::SITE;

/// Moderation/lifecycle status of a job listing.
///
/// The backend set is open; anything unrecognised is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    Approved,
    Rejected,
    Pending,
    Closed,
    Completed,
    Other(String),
}

impl From<String> for JobStatus {
    fn from(s: String) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "APPROVED" => JobStatus::Approved,
            "REJECTED" => JobStatus::Rejected,
            "PENDING" => JobStatus::Pending,
            "CLOSED" => JobStatus::Closed,
            "COMPLETED" => JobStatus::Completed,
            _ => JobStatus::Other(s),
        }
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::Approved => "APPROVED".to_string(),
            JobStatus::Rejected => "REJECTED".to_string(),
            JobStatus::Pending => "PENDING".to_string(),
            JobStatus::Closed => "CLOSED".to_string(),
            JobStatus::Completed => "COMPLETED".to_string(),
            JobStatus::Other(s) => s,
        }
    }
}

impl JobStatus {
    /// Rejected, pending, closed and completed listings never reach the homepage.
    pub fn is_visible(&self) -> bool {
        !matches!(
            self,
            JobStatus::Rejected | JobStatus::Pending | JobStatus::Closed | JobStatus::Completed
        )
    }
}

/// A job listing as returned by the homepage endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: serde_json::Value,
    pub title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub hourly_rate: f64,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub created_at: String,
    pub status: JobStatus,
    #[serde(default)]
    pub location: Option<String>,
    /// More specific city name; wins over `location` when present.
    #[serde(default)]
    pub city_name: Option<String>,
}

impl JobListing {
    /// City shown on the card: the override if non-empty, else the location.
    pub fn display_city(&self) -> String {
        self.city_name
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .or_else(|| self.location.as_deref().map(str::trim))
            .unwrap_or_default()
            .to_string()
    }

    /// Identifier rendered as a string, whatever JSON type the backend used.
    pub fn id_string(&self) -> String {
        match &self.id {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Display projection of a listing for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingCard {
    pub id: String,
    pub title: String,
    pub company: String,
    pub rate: String,
    pub time_ago: String,
    pub time_range: String,
    pub category: &'static str,
    pub city: String,
}

/// Category label for the card at `index` in the filtered list.
///
/// Labels cycle through the static table by position, so the same listing can
/// get a different label when the page order changes.
pub fn category_for(index: usize) -> &'static str {
    let categories = SITE.job_categories;
    categories[index % categories.len()]
}

/// Keep only listings whose status is visible, preserving order.
pub fn visible_listings(items: &[JobListing]) -> Vec<&JobListing> {
    items.iter().filter(|l| l.status.is_visible()).collect()
}

/// Filter then project fetched listings into cards.
pub fn project_listings(items: &[JobListing], now: DateTime<Utc>) -> Vec<ListingCard> {
    visible_listings(items)
        .into_iter()
        .enumerate()
        .map(|(index, listing)| ListingCard {
            id: listing.id_string(),
            title: listing.title.clone(),
            company: listing.company_name.clone(),
            rate: format_hourly_rate(listing.hourly_rate),
            time_ago: format_time_ago_str(&listing.created_at, now),
            time_range: format_time_range(&listing.start_time, &listing.end_time),
            category: category_for(index),
            city: listing.display_city(),
        })
        .collect()
}
