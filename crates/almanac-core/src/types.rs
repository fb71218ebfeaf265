/// Kind tag carried by every collection resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Plain WebDAV collection.
    Collection,
    /// A principal's home collection.
    HomeCollection,
    /// CalDAV calendar collection (RFC 4791 §4.2).
    CalendarCollection,
}

impl ResourceKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Collection => "collection",
            Self::HomeCollection => "home-collection",
            Self::CalendarCollection => "calendar",
        }
    }

    #[must_use]
    pub const fn is_calendar_collection(self) -> bool {
        matches!(self, Self::CalendarCollection)
    }

    #[must_use]
    pub const fn is_home_collection(self) -> bool {
        matches!(self, Self::HomeCollection)
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
