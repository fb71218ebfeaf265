#![allow(clippy::unused_async)]
//! Tests for GET and HEAD on collections.
//!
//! Verifies content negotiation, calendar assembly, free/busy redaction and
//! the generic listing.

use salvo::http::StatusCode;

use almanac_test::component::model::TicketVisibility;

use super::helpers::*;

// ============================================================================
// Raw calendar rendering
// ============================================================================

/// ## Summary
/// Test that `Accept: text/calendar` on a calendar collection returns the
/// assembled iCalendar document.
#[test_log::test(tokio::test)]
async fn get_calendar_with_accept_returns_icalendar() {
    let server = TestServer::new();
    let cal = server.seed_calendar("work");
    server.seed_event(&cal, "team-sync", team_sync_event());

    let response = TestRequest::get(cal.as_str())
        .accept("text/calendar")
        .send(&server.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header("Content-Type", "text/calendar; charset=utf-8")
        .assert_body_contains("BEGIN:VCALENDAR")
        .assert_body_contains("VERSION:2.0")
        .assert_body_contains("PRODID:-//Almanac//Almanac CalDAV Server//EN")
        .assert_body_contains("SUMMARY:Team sync")
        .assert_body_contains("BEGIN:VALARM")
        .assert_body_contains("END:VCALENDAR");

    let etag = response.get_etag().unwrap_or_default();
    assert!(etag.starts_with('"') && etag.ends_with('"'), "ETag {etag}");
}

/// ## Summary
/// Test that a case-variant Accept value still selects the raw rendering.
#[test_log::test(tokio::test)]
async fn get_calendar_accept_is_case_insensitive() {
    let server = TestServer::new();
    let cal = server.seed_calendar("work");

    TestRequest::get(cal.as_str())
        .accept("Text/Calendar")
        .send(&server.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header("Content-Type", "text/calendar; charset=utf-8")
        .assert_body_contains("BEGIN:VCALENDAR");
}

/// ## Summary
/// Test that HEAD carries the GET headers and no body.
#[test_log::test(tokio::test)]
async fn head_calendar_has_headers_without_body() {
    let server = TestServer::new();
    let cal = server.seed_calendar("work");
    server.seed_event(&cal, "team-sync", team_sync_event());

    let get = TestRequest::get(cal.as_str())
        .accept("text/calendar")
        .send(&server.service)
        .await
        .assert_status(StatusCode::OK);

    let head = TestRequest::head(cal.as_str())
        .accept("text/calendar")
        .send(&server.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header("Content-Type", "text/calendar; charset=utf-8")
        .assert_body_empty();

    assert_eq!(head.get_etag(), get.get_etag());
}

// ============================================================================
// Free/busy redaction
// ============================================================================

/// ## Summary
/// Test that a free/busy ticket registered on the calendar yields a redacted
/// document.
#[test_log::test(tokio::test)]
async fn get_calendar_with_free_busy_ticket_is_redacted() {
    let server = TestServer::new();
    let cal = server.seed_calendar("work");
    server.seed_event(&cal, "team-sync", team_sync_event());
    server.seed_ticket(&cal, "fb-ticket", TicketVisibility::FreeBusy);

    TestRequest::get(cal.as_str())
        .accept("text/calendar")
        .header("Ticket", "fb-ticket")
        .send(&server.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("SUMMARY:Busy")
        .assert_body_contains("DESCRIPTION:Busy")
        .assert_body_contains("LOCATION:Busy")
        .assert_body_contains("DTSTART:20261020T090000Z")
        .assert_body_contains("UID:team-sync@example.com")
        .assert_body_not_contains("Team sync")
        .assert_body_not_contains("BEGIN:VALARM")
        .assert_body_not_contains("mailto:")
        .assert_body_not_contains("The Boss");
}

/// ## Summary
/// Test that the ticket may also be presented as a query parameter.
#[test_log::test(tokio::test)]
async fn get_calendar_with_ticket_query_parameter_is_redacted() {
    let server = TestServer::new();
    let cal = server.seed_calendar("work");
    server.seed_event(&cal, "team-sync", team_sync_event());
    server.seed_ticket(&cal, "fb-ticket", TicketVisibility::FreeBusy);

    TestRequest::get(&format!("{cal}?ticket=fb-ticket"))
        .accept("text/calendar")
        .send(&server.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("SUMMARY:Busy");
}

/// ## Summary
/// Test that read-only tickets and tickets registered elsewhere see full data.
#[test_log::test(tokio::test)]
async fn get_calendar_with_other_tickets_is_not_redacted() {
    let server = TestServer::new();
    let cal = server.seed_calendar("work");
    let other = server.seed_calendar("private");
    server.seed_event(&cal, "team-sync", team_sync_event());
    server.seed_ticket(&cal, "ro-ticket", TicketVisibility::ReadOnly);
    server.seed_ticket(&other, "other-fb", TicketVisibility::FreeBusy);

    for key in ["ro-ticket", "other-fb", "unknown"] {
        TestRequest::get(cal.as_str())
            .accept("text/calendar")
            .header("Ticket", key)
            .send(&server.service)
            .await
            .assert_status(StatusCode::OK)
            .assert_body_contains("SUMMARY:Team sync")
            .assert_body_contains("BEGIN:VALARM");
    }
}

// ============================================================================
// Generic rendering
// ============================================================================

/// ## Summary
/// Test that GET without a calendar Accept value falls back to the listing.
#[test_log::test(tokio::test)]
async fn get_calendar_without_accept_is_listing() {
    let server = TestServer::new();
    let cal = server.seed_calendar("work");
    server.seed_event(&cal, "team-sync", team_sync_event());

    for accept in [None, Some("text/html"), Some("text/calendar, text/html")] {
        let mut request = TestRequest::get(cal.as_str());
        if let Some(value) = accept {
            request = request.accept(value);
        }
        request
            .send(&server.service)
            .await
            .assert_status(StatusCode::OK)
            .assert_header("Content-Type", "text/html; charset=utf-8")
            .assert_body_contains("<dt>Kind</dt><dd>calendar</dd>")
            .assert_body_contains("<li>team-sync (note)</li>")
            .assert_body_not_contains("BEGIN:VCALENDAR");
    }
}

/// ## Summary
/// Test that the listing reports whether the calendar is excluded from
/// free/busy rollups.
#[test_log::test(tokio::test)]
async fn get_listing_reports_rollup_exclusion() {
    let server = TestServer::new();
    let cal = server.seed_calendar("work");

    TestRequest::get(cal.as_str())
        .send(&server.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("<dt>Excluded from free/busy rollups</dt><dd>no</dd>");

    server.exclude_from_rollups(&cal);

    TestRequest::get(cal.as_str())
        .send(&server.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("<dt>Excluded from free/busy rollups</dt><dd>yes</dd>");
}

/// ## Summary
/// Test that a home collection is listed even when a calendar is requested.
#[test_log::test(tokio::test)]
async fn get_home_with_calendar_accept_is_listing() {
    let server = TestServer::new();
    let cal = server.seed_calendar("work");

    TestRequest::get(&home_path(OWNER))
        .accept("text/calendar")
        .send(&server.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header("Content-Type", "text/html; charset=utf-8")
        .assert_body_contains("<dd>home-collection</dd>")
        .assert_body_contains(&format!("<a href=\"{cal}/\">work</a>"));
}

/// ## Summary
/// Test that GET on a path without a collection is 404.
#[test_log::test(tokio::test)]
async fn get_missing_collection_is_not_found() {
    let server = TestServer::new();

    TestRequest::get(&cal_path(OWNER, "nope"))
        .accept("text/calendar")
        .send(&server.service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
