//! Calendar collection creation (RFC 4791 §5.3.1).

use almanac_core::types::ResourceKind;
use almanac_rfc::rfc::dav::core::{DavProperty, PropstatResponse};

use crate::error::{ServiceError, ServiceResult};
use crate::model::{Collection, CollectionLocation, ParentState};
use crate::store::CalendarStore;

/// Result of a successful MKCALENDAR.
#[derive(Debug, Clone)]
pub enum CreationOutcome {
    /// Collection created and every requested property applied.
    Created,
    /// Collection created; the per-property record carries failures.
    MultiStatus(PropstatResponse),
}

/// ## Summary
/// Checks that a calendar collection may be created at `location`.
///
/// Checks run in order: the target must not exist, its parent must exist,
/// and the parent must not itself be a calendar collection.
///
/// ## Errors
/// `AlreadyExists`, `MissingParent` or `InvalidLocation`, per the first
/// check that fails.
pub fn validate_creation(location: &CollectionLocation) -> ServiceResult<()> {
    let href = location.href.to_string();

    if location.exists {
        tracing::debug!(href = %href, "MKCALENDAR target already exists");
        return Err(ServiceError::AlreadyExists(href));
    }

    match location.parent {
        ParentState::Missing => {
            tracing::debug!(href = %href, "MKCALENDAR parent is missing");
            Err(ServiceError::MissingParent(href))
        }
        ParentState::Present(ResourceKind::CalendarCollection) => {
            tracing::debug!(href = %href, "MKCALENDAR inside a calendar collection");
            Err(ServiceError::InvalidLocation(href))
        }
        ParentState::Present(ResourceKind::Collection | ResourceKind::HomeCollection) => Ok(()),
    }
}

/// ## Summary
/// Creates a calendar collection at `location` with initial `properties`.
///
/// The location is validated first; on success the store adds the node and
/// applies the properties. The outcome is `Created` when there were no
/// properties or none of them failed, otherwise `MultiStatus`.
///
/// ## Errors
/// Validation failures are returned untouched, as are store errors.
pub fn create_calendar_collection(
    store: &dyn CalendarStore,
    location: &CollectionLocation,
    properties: &[DavProperty],
) -> ServiceResult<CreationOutcome> {
    validate_creation(location)?;

    let parent = location
        .parent_href()
        .ok_or_else(|| ServiceError::MissingParent(location.href.to_string()))?;

    let record = store.add_collection(
        &parent,
        Collection::calendar(location.href.clone()),
        properties,
    )?;

    if properties.is_empty() || !record.has_failures() {
        tracing::info!(href = %location.href, "Created calendar collection");
        Ok(CreationOutcome::Created)
    } else {
        tracing::info!(
            href = %location.href,
            "Created calendar collection with property failures"
        );
        Ok(CreationOutcome::MultiStatus(record))
    }
}
