#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Creating a test Salvo service backed by a fresh in-memory store
//! - Seeding collections, events and tickets
//! - Making HTTP requests and asserting on responses

use std::sync::Arc;

use salvo::http::header::HeaderName;
use salvo::http::{Method, ReqBody, StatusCode};
use salvo::prelude::*;
use salvo::test::{RequestBuilder, ResponseExt, TestClient};

use almanac_test::component::config::{ConfigHandler, Settings};
use almanac_test::component::constants::CALDAV_ROUTE_PREFIX;
use almanac_test::component::model::{AccessTicket, Collection, Item, Stamp, TicketVisibility};
use almanac_test::component::store::CalendarStore;
use almanac_test::component::store::memory::InMemoryStore;
use almanac_test::rfc::rfc::dav::core::Href;
use almanac_test::rfc::rfc::ical::{Alarm, EventComponent, Parameter, Property};

pub use tracing;

/// Owner of the home collection every test server starts with.
pub const OWNER: &str = "alice";

/// ## Summary
/// Builds the request path of a collection in `owner`'s home.
#[must_use]
pub fn cal_path(owner: &str, collection: &str) -> String {
    format!("{CALDAV_ROUTE_PREFIX}/{owner}/{collection}")
}

/// ## Summary
/// Builds the request path of `owner`'s home collection.
#[must_use]
pub fn home_path(owner: &str) -> String {
    format!("{CALDAV_ROUTE_PREFIX}/{owner}")
}

fn test_config() -> Settings {
    Settings::defaults()
        .expect("defaults should register")
        .build()
        .expect("defaults should build")
        .try_deserialize::<Settings>()
        .expect("defaults should deserialize")
}

/// A service together with the store it serves.
pub struct TestServer {
    pub service: Service,
    pub store: Arc<InMemoryStore>,
}

impl TestServer {
    /// ## Summary
    /// Creates a server whose store holds the root and `OWNER`'s home.
    ///
    /// ## Panics
    /// Panics if the service cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::new(Href::new(CALDAV_ROUTE_PREFIX)));
        store.add_home(OWNER).expect("home should be created");

        let shared: Arc<dyn CalendarStore> = store.clone();
        let router = Router::new()
            .hoop(almanac_test::app::store_handler::StoreHandler { store: shared })
            .hoop(ConfigHandler {
                settings: test_config(),
            })
            .push(almanac_test::app::api::routes().expect("API routes should be valid"));

        Self {
            service: Service::new(router),
            store,
        }
    }

    /// ## Summary
    /// Creates a calendar collection named `name` in `OWNER`'s home.
    ///
    /// ## Panics
    /// Panics if the collection cannot be created.
    pub fn seed_calendar(&self, name: &str) -> Href {
        let home = Href::new(home_path(OWNER));
        let href = home.join(name);
        self.store
            .add_collection(&home, Collection::calendar(href.clone()), &[])
            .expect("calendar should be created");
        href
    }

    /// ## Summary
    /// Adds a note carrying `event` to the collection at `href`.
    ///
    /// ## Panics
    /// Panics if the item cannot be added.
    pub fn seed_event(&self, href: &Href, name: &str, event: EventComponent) {
        self.store
            .add_item(href, Item::note(name).with_stamp(Stamp::Event(event)))
            .expect("event should be added");
    }

    /// ## Summary
    /// Registers a ticket with `key` and `visibility` on the collection at `href`.
    ///
    /// ## Panics
    /// Panics if the ticket cannot be registered.
    pub fn seed_ticket(&self, href: &Href, key: &str, visibility: TicketVisibility) {
        self.store
            .register_ticket(href, AccessTicket::new(key, visibility))
            .expect("ticket should be registered");
    }

    /// ## Summary
    /// Excludes the collection at `href` from free/busy rollups.
    ///
    /// ## Panics
    /// Panics if there is no such collection.
    pub fn exclude_from_rollups(&self, href: &Href) {
        self.store
            .set_exclude_free_busy_rollup(href, true)
            .expect("collection should exist");
    }
}

/// ## Summary
/// The "Team sync" event with an alarm, organizer and attendees.
#[must_use]
pub fn team_sync_event() -> EventComponent {
    let mut event = EventComponent::new();
    event.add_property(Property::text("UID", "team-sync@example.com"));
    event.add_property(Property::raw("DTSTAMP", "20261001T120000Z"));
    event.add_property(Property::raw("DTSTART", "20261020T090000Z"));
    event.add_property(Property::raw("DTEND", "20261020T093000Z"));
    event.add_property(Property::text("SUMMARY", "Team sync"));
    event.add_property(Property::text("DESCRIPTION", "Weekly numbers"));
    event.add_property(Property::text("LOCATION", "Room 4"));
    event.add_property(
        Property::cal_address("ORGANIZER", "mailto:boss@example.com")
            .with_param(Parameter::cn("The Boss")),
    );
    event.add_property(Property::cal_address("ATTENDEE", "mailto:bob@example.com"));
    event.add_alarm(Alarm::display("-PT15M", "Team sync in 15 minutes"));
    event
}

/// Test request builder for constructing HTTP requests.
pub struct TestRequest {
    method: Method,
    path: String,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl TestRequest {
    /// Creates a new test request with the given method and path.
    #[must_use]
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Creates a new GET request.
    #[must_use]
    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    /// Creates a new HEAD request.
    #[must_use]
    pub fn head(path: &str) -> Self {
        Self::new(Method::HEAD, path)
    }

    /// Creates a new MKCALENDAR request.
    #[must_use]
    pub fn mkcalendar(path: &str) -> Self {
        Self::new(
            Method::from_bytes(b"MKCALENDAR").expect("Valid method"),
            path,
        )
    }

    /// Adds a header to the request.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Sets the Accept header.
    #[must_use]
    pub fn accept(self, value: &str) -> Self {
        self.header("Accept", value)
    }

    /// Sets the Content-Type header.
    #[must_use]
    pub fn content_type(self, content_type: &str) -> Self {
        self.header("Content-Type", content_type)
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets an XML request body.
    #[must_use]
    pub fn xml_body(self, xml: &str) -> Self {
        self.content_type("application/xml; charset=utf-8")
            .body(xml.as_bytes().to_vec())
    }

    /// Sends the request to the test service and returns the response.
    ///
    /// ## Panics
    /// Panics if the request cannot be sent or the response cannot be read.
    pub async fn send(self, service: &Service) -> TestResponse {
        let url = format!("http://127.0.0.1:5800{}", self.path);

        let mut client = match self.method.as_str() {
            "GET" => TestClient::get(&url),
            "HEAD" => TestClient::head(&url),
            // Extension methods such as MKCALENDAR
            _ => RequestBuilder::new(&url, self.method.clone()),
        };

        for (name, value) in self.headers {
            if let Ok(header_name) = HeaderName::try_from(name.as_str()) {
                // Repeated headers are kept, not overwritten
                client = client.add_header(header_name, value, false);
            }
        }

        if let Some(body_bytes) = self.body {
            client = client.body(ReqBody::Once(body_bytes.into()));
        }

        let mut response = client.send(service).await;

        let status = response
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();

        let body: Vec<u8> = response.take_bytes(None).await.unwrap_or_default().to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Represents an HTTP test response for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Asserts that the response status matches the expected code.
    #[must_use]
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status, expected,
            "Expected status {expected} but got {}: {}",
            self.status,
            self.body_string()
        );
        self
    }

    /// Asserts that a header exists with the expected value.
    #[must_use]
    pub fn assert_header(self, name: &str, expected: &str) -> Self {
        let value = self
            .get_header(name)
            .unwrap_or_else(|| panic!("Header '{name}' not found in response"));
        assert_eq!(
            value, expected,
            "Header '{name}' expected '{expected}' but got '{value}'"
        );
        self
    }

    /// Asserts that a header exists (regardless of value).
    #[must_use]
    pub fn assert_header_exists(self, name: &str) -> Self {
        assert!(
            self.get_header(name).is_some(),
            "Header '{name}' not found in response"
        );
        self
    }

    /// Asserts that the response body contains the expected substring.
    #[must_use]
    pub fn assert_body_contains(self, expected: &str) -> Self {
        let body = self.body_string();
        assert!(
            body.contains(expected),
            "Expected body to contain '{expected}' but got:\n{body}"
        );
        self
    }

    /// Asserts that the response body does not contain the specified substring.
    #[must_use]
    pub fn assert_body_not_contains(self, unexpected: &str) -> Self {
        let body = self.body_string();
        assert!(
            !body.contains(unexpected),
            "Expected body to NOT contain '{unexpected}' but got:\n{body}"
        );
        self
    }

    /// Asserts that the response body is empty.
    #[must_use]
    pub fn assert_body_empty(self) -> Self {
        assert!(
            self.body.is_empty(),
            "Expected empty body but got {} bytes",
            self.body.len()
        );
        self
    }

    /// Returns the body as a UTF-8 string.
    #[must_use]
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Gets a header value by name (case-insensitive).
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Gets the ETag header value.
    #[must_use]
    pub fn get_etag(&self) -> Option<&str> {
        self.get_header("ETag")
    }
}
