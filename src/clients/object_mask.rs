//! Object mask value type.
//!
//! SoftLayer object masks are ordered lists of dotted field paths that
//! restrict which fields an endpoint includes in its response, e.g.
//! `["id", "item.keyName", "prices.categories.name"]`. The mask travels
//! as the `objectMask` query parameter with the paths joined by `;`.

use std::fmt;

/// An ordered set of dotted field paths limiting a response payload.
///
/// Paths keep their insertion order and are never deduplicated; the server
/// ignores repeats. An empty mask means "no mask" and is dropped by the
/// request builder rather than sent on the wire.
///
/// # Example
///
/// ```rust
/// use softlayer_api::ObjectMask;
///
/// let mask = ObjectMask::from_paths(["id", "longName", "name"]);
/// assert_eq!(mask.to_query(), "id;longName;name");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectMask {
    paths: Vec<String>,
}

impl ObjectMask {
    /// Creates an empty mask.
    #[must_use]
    pub const fn new() -> Self {
        Self { paths: Vec::new() }
    }

    /// Creates a mask from an ordered list of field paths.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Appends a field path, preserving insertion order.
    #[must_use]
    pub fn push(mut self, path: impl Into<String>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Returns the field paths in insertion order.
    #[must_use]
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Returns true if the mask contains no paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Renders the mask as the `objectMask` query parameter value.
    #[must_use]
    pub fn to_query(&self) -> String {
        self.paths.join(";")
    }
}

impl fmt::Display for ObjectMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query())
    }
}

impl<S: Into<String>> FromIterator<S> for ObjectMask {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_paths(iter)
    }
}
