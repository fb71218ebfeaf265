#![allow(clippy::unused_async, clippy::unwrap_used)]
//! Tests for MKCALENDAR.
//!
//! Verifies creation statuses, per-property outcomes and precondition bodies.

use salvo::http::StatusCode;

use almanac_test::component::store::CalendarStore;
use almanac_test::rfc::rfc::dav::core::Href;

use super::helpers::*;

const MKCALENDAR_BODY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<C:mkcalendar xmlns:D="DAV:" xmlns:C="urn:ietf:params:xml:ns:caldav">
  <D:set>
    <D:prop>
      <D:displayname>Work</D:displayname>
      <C:calendar-description xml:lang="en">Meetings and deadlines</C:calendar-description>
    </D:prop>
  </D:set>
</C:mkcalendar>"#;

// ============================================================================
// Successful creation
// ============================================================================

/// ## Summary
/// Test that MKCALENDAR without a body under a home collection returns 201
/// with caching disabled and an empty body.
#[test_log::test(tokio::test)]
async fn mkcalendar_empty_body_is_created() {
    let server = TestServer::new();
    let path = cal_path(OWNER, "work");

    TestRequest::mkcalendar(&path)
        .send(&server.service)
        .await
        .assert_status(StatusCode::CREATED)
        .assert_header("Cache-Control", "no-cache")
        .assert_header("Pragma", "no-cache")
        .assert_header_exists("Location")
        .assert_body_empty();

    let created = server.store.collection(&Href::new(&path)).unwrap();
    assert!(created.is_calendar_collection());
}

/// ## Summary
/// Test that initial properties from the request body are applied.
#[test_log::test(tokio::test)]
async fn mkcalendar_with_properties_is_created() {
    let server = TestServer::new();
    let path = cal_path(OWNER, "work");

    TestRequest::mkcalendar(&path)
        .xml_body(MKCALENDAR_BODY)
        .send(&server.service)
        .await
        .assert_status(StatusCode::CREATED)
        .assert_header("Cache-Control", "no-cache");

    let created = server.store.collection(&Href::new(&path)).unwrap();
    assert_eq!(created.display_name.as_deref(), Some("Work"));
    assert_eq!(created.description.as_deref(), Some("Meetings and deadlines"));
}

/// ## Summary
/// Test that unknown properties are kept as dead properties.
#[test_log::test(tokio::test)]
async fn mkcalendar_stores_dead_properties() {
    let server = TestServer::new();
    let path = cal_path(OWNER, "work");
    let body = r#"<?xml version="1.0" encoding="utf-8"?>
<C:mkcalendar xmlns:D="DAV:" xmlns:C="urn:ietf:params:xml:ns:caldav" xmlns:A="http://apple.com/ns/ical/">
  <D:set><D:prop><A:calendar-color>#FF0000</A:calendar-color></D:prop></D:set>
</C:mkcalendar>"#;

    TestRequest::mkcalendar(&path)
        .xml_body(body)
        .send(&server.service)
        .await
        .assert_status(StatusCode::CREATED);

    let dead = server.store.dead_properties(&Href::new(&path));
    assert_eq!(dead.len(), 1);
    assert_eq!(dead[0].name.local_name(), "calendar-color");
    assert_eq!(dead[0].text_value(), Some("#FF0000"));
}

// ============================================================================
// Property failures
// ============================================================================

/// ## Summary
/// Test that a protected property yields 207 with per-property statuses
/// while the collection is still created.
#[test_log::test(tokio::test)]
async fn mkcalendar_protected_property_is_multistatus() {
    let server = TestServer::new();
    let path = cal_path(OWNER, "work");
    let body = r#"<?xml version="1.0" encoding="utf-8"?>
<C:mkcalendar xmlns:D="DAV:" xmlns:C="urn:ietf:params:xml:ns:caldav">
  <D:set>
    <D:prop>
      <D:displayname>Work</D:displayname>
      <D:getetag>"forged"</D:getetag>
    </D:prop>
  </D:set>
</C:mkcalendar>"#;

    TestRequest::mkcalendar(&path)
        .xml_body(body)
        .send(&server.service)
        .await
        .assert_status(StatusCode::MULTI_STATUS)
        .assert_body_contains("<D:multistatus")
        .assert_body_contains(&format!("<D:href>{path}</D:href>"))
        .assert_body_contains("<D:getetag/>")
        .assert_body_contains("HTTP/1.1 403 Forbidden")
        .assert_body_contains("<D:displayname/>")
        .assert_body_contains("HTTP/1.1 200 OK");

    let created = server.store.collection(&Href::new(&path)).unwrap();
    assert!(created.is_calendar_collection());
    assert_eq!(created.display_name.as_deref(), Some("Work"));
}

// ============================================================================
// Preconditions
// ============================================================================

/// ## Summary
/// Test that MKCALENDAR inside a calendar collection is refused with
/// `calendar-collection-location-ok`, with or without properties.
#[test_log::test(tokio::test)]
async fn mkcalendar_inside_calendar_is_forbidden() {
    let server = TestServer::new();
    server.seed_calendar("work");
    let nested = format!("{}/nested", cal_path(OWNER, "work"));

    for request in [
        TestRequest::mkcalendar(&nested),
        TestRequest::mkcalendar(&nested).xml_body(MKCALENDAR_BODY),
    ] {
        request
            .send(&server.service)
            .await
            .assert_status(StatusCode::FORBIDDEN)
            .assert_body_contains("<C:calendar-collection-location-ok/>");
    }

    assert!(server.store.collection(&Href::new(&nested)).is_none());
}

/// ## Summary
/// Test that MKCALENDAR on an existing collection conflicts.
#[test_log::test(tokio::test)]
async fn mkcalendar_existing_target_conflicts() {
    let server = TestServer::new();
    server.seed_calendar("work");

    TestRequest::mkcalendar(&cal_path(OWNER, "work"))
        .send(&server.service)
        .await
        .assert_status(StatusCode::CONFLICT)
        .assert_body_contains("<D:resource-must-be-null/>");
}

/// ## Summary
/// Test that MKCALENDAR below a missing intermediate collection conflicts.
#[test_log::test(tokio::test)]
async fn mkcalendar_missing_parent_conflicts() {
    let server = TestServer::new();

    TestRequest::mkcalendar(&format!("{}/work", cal_path(OWNER, "missing")))
        .send(&server.service)
        .await
        .assert_status(StatusCode::CONFLICT)
        .assert_body_contains("intermediate collections");
}

/// ## Summary
/// Test that a malformed body is a bad request and creates nothing.
#[test_log::test(tokio::test)]
async fn mkcalendar_malformed_body_is_bad_request() {
    let server = TestServer::new();
    let path = cal_path(OWNER, "work");

    TestRequest::mkcalendar(&path)
        .xml_body("<C:mkcalendar xmlns:C=\"urn:ietf:params:xml:ns:caldav\"><D:set>")
        .send(&server.service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert!(server.store.collection(&Href::new(&path)).is_none());
}

/// ## Summary
/// Test that entity declarations are refused with `no-external-entities`.
#[test_log::test(tokio::test)]
async fn mkcalendar_entity_declaration_is_forbidden() {
    let server = TestServer::new();
    let body = r#"<?xml version="1.0"?>
<!DOCTYPE mkcalendar [<!ENTITY xxe SYSTEM "file:///etc/passwd">]>
<C:mkcalendar xmlns:D="DAV:" xmlns:C="urn:ietf:params:xml:ns:caldav">
  <D:set><D:prop><D:displayname>&xxe;</D:displayname></D:prop></D:set>
</C:mkcalendar>"#;

    TestRequest::mkcalendar(&cal_path(OWNER, "work"))
        .xml_body(body)
        .send(&server.service)
        .await
        .assert_status(StatusCode::FORBIDDEN)
        .assert_body_contains("<D:no-external-entities/>");
}

/// ## Summary
/// Test that a reference to an undeclared entity is a bad request, not a
/// `no-external-entities` refusal.
#[test_log::test(tokio::test)]
async fn mkcalendar_undeclared_entity_reference_is_bad_request() {
    let server = TestServer::new();
    let path = cal_path(OWNER, "work");
    let body = r#"<C:mkcalendar xmlns:D="DAV:" xmlns:C="urn:ietf:params:xml:ns:caldav">
  <D:set><D:prop><D:displayname>a &foo; b</D:displayname></D:prop></D:set>
</C:mkcalendar>"#;

    TestRequest::mkcalendar(&path)
        .xml_body(body)
        .send(&server.service)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_body_not_contains("no-external-entities");

    assert!(server.store.collection(&Href::new(&path)).is_none());
}
