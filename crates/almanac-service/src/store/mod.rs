//! Persistence boundary for the collection tree.
//!
//! Handlers only see `dyn CalendarStore`; the in-memory implementation backs
//! the binary and the tests.

pub mod memory;

use almanac_rfc::rfc::dav::core::{DavProperty, Href, PropstatResponse};

use crate::error::ServiceResult;
use crate::model::{AccessTicket, Collection, CollectionLocation};

/// Storage of collections, their items and registered tickets.
pub trait CalendarStore: Send + Sync {
    /// Resolves the structural state of `href` for creation checks.
    fn locate(&self, href: &Href) -> CollectionLocation;

    /// Returns a snapshot of the collection at `href`.
    fn collection(&self, href: &Href) -> Option<Collection>;

    /// Returns the hrefs of the direct child collections of `href`.
    fn children_of(&self, href: &Href) -> Vec<Href>;

    /// ## Summary
    /// Adds `collection` under `parent` and applies the initial `properties`.
    ///
    /// Returns one propstat entry per requested property.
    ///
    /// ## Errors
    /// `AlreadyExists` if something occupies the target, `MissingParent` if
    /// `parent` is not a collection, `InvalidLocation` if a calendar
    /// collection would be nested in another.
    fn add_collection(
        &self,
        parent: &Href,
        collection: Collection,
        properties: &[DavProperty],
    ) -> ServiceResult<PropstatResponse>;

    /// Returns the tickets registered on the collection at `href`.
    fn tickets_of(&self, href: &Href) -> Vec<AccessTicket>;

    /// Looks up an issued ticket by key.
    fn find_ticket(&self, key: &str) -> Option<AccessTicket>;
}
