//! In-memory collection tree.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use almanac_core::types::ResourceKind;
use almanac_rfc::rfc::dav::core::{
    DavProperty, Href, PropstatResponse, QName, Status, caldav_props, dav_props,
};

use super::CalendarStore;
use crate::error::{ServiceError, ServiceResult};
use crate::model::{AccessTicket, Collection, CollectionLocation, Item, ParentState};

#[derive(Debug, Default)]
struct Tree {
    collections: BTreeMap<Href, Collection>,
    /// Dead properties per collection, in the order they were set.
    dead_properties: HashMap<Href, Vec<DavProperty>>,
    tickets: HashMap<String, AccessTicket>,
    /// Ticket keys per collection, in registration order.
    registrations: HashMap<Href, Vec<String>>,
}

impl Tree {
    /// Whether a collection or an item occupies `href`.
    fn occupied(&self, href: &Href) -> bool {
        if self.collections.contains_key(href) {
            return true;
        }
        let (Some(parent), Some(name)) = (href.parent(), href.name()) else {
            return false;
        };
        self.collections
            .get(&parent)
            .is_some_and(|c| c.children.iter().any(|item| item.name == name))
    }

    fn collection_mut(&mut self, href: &Href) -> ServiceResult<&mut Collection> {
        self.collections
            .get_mut(href)
            .ok_or_else(|| ServiceError::NotFound(href.to_string()))
    }
}

/// A `CalendarStore` holding the whole tree behind a lock.
#[derive(Debug)]
pub struct InMemoryStore {
    root: Href,
    tree: RwLock<Tree>,
}

impl InMemoryStore {
    /// Creates a store containing only a plain root collection at `root`.
    #[must_use]
    pub fn new(root: Href) -> Self {
        let mut tree = Tree::default();
        let mut root_collection = Collection::new(root.clone(), ResourceKind::Collection);
        root_collection.parent = None;
        tree.collections.insert(root.clone(), root_collection);

        Self {
            root,
            tree: RwLock::new(tree),
        }
    }

    /// Href of the root collection.
    #[must_use]
    pub fn root(&self) -> &Href {
        &self.root
    }

    fn read(&self) -> RwLockReadGuard<'_, Tree> {
        self.tree.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tree> {
        self.tree.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// ## Summary
    /// Creates a home collection named `name` directly under the root.
    ///
    /// Creating a home that already exists is a no-op.
    ///
    /// ## Errors
    /// `AlreadyExists` if a non-home resource occupies the path.
    pub fn add_home(&self, name: &str) -> ServiceResult<Href> {
        let href = self.root.join(name);
        let mut tree = self.write();

        match tree.collections.get(&href) {
            Some(existing) if existing.is_home_collection() => return Ok(href),
            Some(_) => return Err(ServiceError::AlreadyExists(href.to_string())),
            None if tree.occupied(&href) => {
                return Err(ServiceError::AlreadyExists(href.to_string()));
            }
            None => {}
        }

        tree.collections.insert(
            href.clone(),
            Collection::new(href.clone(), ResourceKind::HomeCollection),
        );
        tracing::debug!(href = %href, "Created home collection");
        Ok(href)
    }

    /// ## Summary
    /// Appends `item` to the children of the collection at `href`.
    ///
    /// ## Errors
    /// `NotFound` if there is no such collection, `AlreadyExists` if the
    /// item's path is taken.
    pub fn add_item(&self, href: &Href, item: Item) -> ServiceResult<()> {
        let mut tree = self.write();
        let target = href.join(&item.name);
        if tree.occupied(&target) {
            return Err(ServiceError::AlreadyExists(target.to_string()));
        }
        tree.collection_mut(href)?.children.push(item);
        Ok(())
    }

    /// ## Summary
    /// Issues `ticket` and registers it on the collection at `href`.
    ///
    /// ## Errors
    /// `NotFound` if there is no such collection.
    pub fn register_ticket(&self, href: &Href, ticket: AccessTicket) -> ServiceResult<()> {
        let mut tree = self.write();
        if !tree.collections.contains_key(href) {
            return Err(ServiceError::NotFound(href.to_string()));
        }
        let keys = tree.registrations.entry(href.clone()).or_default();
        if !keys.contains(&ticket.key) {
            keys.push(ticket.key.clone());
        }
        tree.tickets.insert(ticket.key.clone(), ticket);
        Ok(())
    }

    /// ## Summary
    /// Sets whether the collection is excluded from free/busy rollups.
    ///
    /// ## Errors
    /// `NotFound` if there is no such collection.
    pub fn set_exclude_free_busy_rollup(&self, href: &Href, excluded: bool) -> ServiceResult<()> {
        self.write().collection_mut(href)?.exclude_free_busy_rollup = excluded;
        Ok(())
    }

    /// Dead properties stored on the collection at `href`.
    #[must_use]
    pub fn dead_properties(&self, href: &Href) -> Vec<DavProperty> {
        self.read()
            .dead_properties
            .get(href)
            .cloned()
            .unwrap_or_default()
    }
}

fn is_protected(name: &QName) -> bool {
    [
        dav_props::getetag(),
        dav_props::getcontentlength(),
        dav_props::getlastmodified(),
        dav_props::resourcetype(),
    ]
    .contains(name)
}

impl CalendarStore for InMemoryStore {
    fn locate(&self, href: &Href) -> CollectionLocation {
        let tree = self.read();
        let parent = href
            .parent()
            .and_then(|p| tree.collections.get(&p))
            .map_or(ParentState::Missing, |c| ParentState::Present(c.kind));

        CollectionLocation {
            href: href.clone(),
            exists: tree.occupied(href),
            parent,
        }
    }

    fn collection(&self, href: &Href) -> Option<Collection> {
        self.read().collections.get(href).cloned()
    }

    fn children_of(&self, href: &Href) -> Vec<Href> {
        self.read()
            .collections
            .values()
            .filter(|c| c.parent.as_ref() == Some(href))
            .map(|c| c.href.clone())
            .collect()
    }

    fn add_collection(
        &self,
        parent: &Href,
        mut collection: Collection,
        properties: &[DavProperty],
    ) -> ServiceResult<PropstatResponse> {
        let mut tree = self.write();
        let href = collection.href.clone();

        if tree.occupied(&href) {
            return Err(ServiceError::AlreadyExists(href.to_string()));
        }
        match tree.collections.get(parent) {
            None => return Err(ServiceError::MissingParent(href.to_string())),
            Some(p) if p.is_calendar_collection() && collection.is_calendar_collection() => {
                return Err(ServiceError::InvalidLocation(href.to_string()));
            }
            Some(_) => {}
        }
        collection.parent = Some(parent.clone());

        let mut response = PropstatResponse::new(href.clone());
        let mut dead = Vec::new();
        for prop in properties {
            let status = if is_protected(&prop.name) {
                Status::Forbidden
            } else if prop.name == dav_props::displayname() {
                collection.display_name = prop.text_value().map(str::to_owned);
                Status::Ok
            } else if prop.name == caldav_props::calendar_description() {
                collection.description = prop.text_value().map(str::to_owned);
                Status::Ok
            } else {
                dead.push(prop.clone());
                Status::Ok
            };
            response.push(status, DavProperty::name_only(prop.name.clone()));
        }

        tracing::debug!(
            href = %href,
            kind = %collection.kind,
            properties = properties.len(),
            "Added collection"
        );
        if !dead.is_empty() {
            tree.dead_properties.insert(href.clone(), dead);
        }
        tree.collections.insert(href, collection);
        Ok(response)
    }

    fn tickets_of(&self, href: &Href) -> Vec<AccessTicket> {
        let tree = self.read();
        tree.registrations
            .get(href)
            .into_iter()
            .flatten()
            .filter_map(|key| tree.tickets.get(key).cloned())
            .collect()
    }

    fn find_ticket(&self, key: &str) -> Option<AccessTicket> {
        self.read().tickets.get(key).cloned()
    }
}
