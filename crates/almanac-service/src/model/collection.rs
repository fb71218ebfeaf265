//! Collection nodes of the resource tree.

use almanac_core::types::ResourceKind;
use almanac_rfc::rfc::dav::core::Href;

use super::item::Item;

/// A collection in the hierarchical resource tree.
///
/// The store owns the tree; values handed out by it are snapshots, so
/// mutating one never affects persisted state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub id: uuid::Uuid,
    pub href: Href,
    pub kind: ResourceKind,
    /// Non-owning back reference; `None` only for the root.
    pub parent: Option<Href>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    /// Whether free/busy rollups skip this collection.
    pub exclude_free_busy_rollup: bool,
    /// Child items in stored order.
    pub children: Vec<Item>,
}

impl Collection {
    /// Creates an empty collection of the given kind at `href`.
    #[must_use]
    pub fn new(href: Href, kind: ResourceKind) -> Self {
        let parent = href.parent();
        Self {
            id: uuid::Uuid::new_v4(),
            href,
            kind,
            parent,
            display_name: None,
            description: None,
            exclude_free_busy_rollup: false,
            children: Vec::new(),
        }
    }

    /// Creates an empty calendar collection at `href`.
    #[must_use]
    pub fn calendar(href: Href) -> Self {
        Self::new(href, ResourceKind::CalendarCollection)
    }

    #[must_use]
    pub fn is_calendar_collection(&self) -> bool {
        self.kind.is_calendar_collection()
    }

    #[must_use]
    pub fn is_home_collection(&self) -> bool {
        self.kind.is_home_collection()
    }

    /// Display name, falling back to the last path segment.
    #[must_use]
    pub fn title(&self) -> &str {
        self.display_name
            .as_deref()
            .or_else(|| self.href.name())
            .unwrap_or("/")
    }
}

/// State of the parent of a creation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentState {
    /// No collection exists at the parent path.
    Missing,
    /// A collection of the given kind exists at the parent path.
    Present(ResourceKind),
}

/// Structural facts about a target path, resolved before creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionLocation {
    pub href: Href,
    /// Whether any resource already exists at `href`.
    pub exists: bool,
    pub parent: ParentState,
}

impl CollectionLocation {
    /// Returns the parent href of the target.
    #[must_use]
    pub fn parent_href(&self) -> Option<Href> {
        self.href.parent()
    }
}
