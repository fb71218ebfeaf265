use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Resource already exists: {0}")]
    AlreadyExists(String),

    #[error("One or more intermediate collections must be created: {0}")]
    MissingParent(String),

    #[error("Calendar collection cannot be created under another calendar collection: {0}")]
    InvalidLocation(String),

    #[error("Resource is not a calendar collection: {0}")]
    IncompatibleResourceType(String),

    #[error("Malformed calendar data: {0}")]
    MalformedCalendarData(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
