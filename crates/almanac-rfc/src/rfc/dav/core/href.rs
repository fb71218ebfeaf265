//! DAV href type.

use std::fmt;

/// A `WebDAV` href: an absolute, slash-separated resource path.
///
/// Collection hrefs are kept without a trailing slash so that `/a/b` and
/// `/a/b/` address the same collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Href(String);

impl Href {
    /// Creates a new href, normalizing duplicate and trailing slashes.
    #[must_use]
    pub fn new(path: impl AsRef<str>) -> Self {
        let segments: Vec<&str> = path.as_ref().split('/').filter(|s| !s.is_empty()).collect();
        Self(format!("/{}", segments.join("/")))
    }

    /// Returns the href as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether this is the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Returns the parent path, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        let idx = self.0.rfind('/')?;
        Some(Self::new(&self.0[..idx]))
    }

    /// Returns the last path segment (resource name).
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        if self.is_root() {
            return None;
        }
        self.0.rsplit('/').next()
    }

    /// Joins a child path.
    #[must_use]
    pub fn join(&self, child: &str) -> Self {
        Self::new(format!("{}/{child}", self.0))
    }
}

impl fmt::Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Href {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Href {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
