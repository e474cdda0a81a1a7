use api::ListingService;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use shared_types::{project_listings, AppErrorKind, JobStatus};

use crate::common::{self, reply};

const LISTINGS: &str = r#"[
    {"id":1,"title":"Phục vụ bàn","companyName":"Inno Café","hourlyRate":28000,
     "startTime":"2024-06-01T07:00:00","endTime":"2024-06-01T11:00:00",
     "createdAt":"2024-06-01T09:30:00Z","status":"APPROVED","location":"Hà Nội"},
    {"id":2,"title":"Thu ngân","companyName":"Mart 24h","hourlyRate":30000,
     "startTime":"2024-06-01T13:00:00","endTime":"2024-06-01T17:00:00",
     "createdAt":"2024-05-30T12:00:00Z","status":"PENDING","location":"Hà Nội"},
    {"id":"job-3","title":"Giao hàng","companyName":"Nhanh Express","hourlyRate":35000,
     "startTime":"2024-06-01T08:00:00","endTime":"2024-06-01T12:00:00",
     "createdAt":"2024-05-30T12:00:00Z","status":"Approved","location":"Hà Nội","cityName":"Hải Phòng"}
]"#;

#[tokio::test]
async fn homepage_listings_sends_limit_and_parses_body() {
    let backend = common::spawn_backend(vec![reply("GET", "/jobs/homepage", 200, LISTINGS)]).await;

    let items = backend.client.homepage_listings(8).await.unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[1].status, JobStatus::Pending);
    let requests = backend.requests();
    assert_eq!(requests[0].path, "/api/jobs/homepage");
    assert_eq!(requests[0].query.as_deref(), Some("limit=8"));
    assert_eq!(requests[0].authorization, None);
}

#[tokio::test]
async fn fetched_listings_project_into_cards() {
    let backend = common::spawn_backend(vec![reply("GET", "/jobs/homepage", 200, LISTINGS)]).await;
    let items = backend.client.homepage_listings(8).await.unwrap();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

    let cards = project_listings(&items, now);

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].title, "Phục vụ bàn");
    assert_eq!(cards[0].time_ago, "2 giờ trước");
    assert_eq!(cards[0].time_range, "07:00 - 11:00");
    assert_eq!(cards[0].rate, "28.000 đ/giờ");
    assert_eq!(cards[1].id, "job-3");
    assert_eq!(cards[1].city, "Hải Phòng");
    assert_eq!(cards[1].time_ago, "2 ngày trước");
    assert_ne!(cards[0].category, cards[1].category);
}

#[tokio::test]
async fn server_error_is_reported() {
    let backend = common::spawn_backend(vec![reply("GET", "/jobs/homepage", 500, "")]).await;
    let err = backend.client.homepage_listings(8).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert_eq!(err.message, "HTTP 500");
}

#[tokio::test]
async fn malformed_body_is_internal_error() {
    let backend =
        common::spawn_backend(vec![reply("GET", "/jobs/homepage", 200, r#"{"items":[]}"#)]).await;
    let err = backend.client.homepage_listings(8).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InternalError);
}

#[tokio::test]
async fn connection_refused_is_network_error() {
    let client = common::unreachable_client().await;
    let err = client.homepage_listings(8).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Network);
}
