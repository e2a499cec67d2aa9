//! Generic paging wrappers used by every list endpoint.
//!
//! The API returns collections either offset-paged ([`Page`]) or
//! cursor-paged ([`CursorPage`], e.g. followed artists).

use serde::{Deserialize, Serialize};

/// Offset-based paging wrapper.
///
/// `next` and `previous` are full request URLs for the adjacent pages and
/// are null at the collection boundaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// URL of the request that produced this page.
    pub href: String,

    /// Items on this page.
    pub items: Vec<T>,

    /// Maximum number of items the request asked for.
    pub limit: u32,

    /// URL of the next page, if any.
    pub next: Option<String>,

    /// Offset of the first item on this page.
    pub offset: u32,

    /// URL of the previous page, if any.
    pub previous: Option<String>,

    /// Total number of items in the collection.
    ///
    /// Server-controlled; `items.len() <= limit` is not guaranteed and is
    /// never asserted here.
    pub total: u32,
}

impl<T> Page<T> {
    /// Whether this is the last page of the collection.
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }

    /// Whether this is the first page of the collection.
    pub fn is_first(&self) -> bool {
        self.previous.is_none()
    }
}

/// Cursor marker for cursor-based paging.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cursor {
    /// Cursor for the page after this one. Absent once the collection
    /// has been read to the end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

/// Cursor-based paging wrapper.
///
/// Replaces `offset`/`previous` with an opaque `cursors.after` marker.
/// `total` does not always match the documentation and is observed absent
/// on some endpoints, so it is optional here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CursorPage<T> {
    /// URL of the request that produced this page.
    pub href: String,

    /// Items on this page.
    pub items: Vec<T>,

    /// Maximum number of items the request asked for.
    pub limit: u32,

    /// URL of the next page, if any.
    pub next: Option<String>,

    /// Cursor pointing past this page.
    pub cursors: Cursor,

    /// Total number of items in the collection, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
}

impl<T> CursorPage<T> {
    /// Cursor for requesting the next page, if the collection continues.
    pub fn after(&self) -> Option<&str> {
        self.cursors.after.as_deref()
    }

    /// Whether this is the last page of the collection.
    pub fn is_last(&self) -> bool {
        self.cursors.after.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_boundaries() {
        let page: Page<String> = serde_json::from_value(json!({
            "href": "https://api.spotify.com/v1/me/tracks?offset=0&limit=20",
            "items": ["a", "b"],
            "limit": 20,
            "next": null,
            "offset": 0,
            "previous": null,
            "total": 2
        }))
        .unwrap();
        assert!(page.is_first());
        assert!(page.is_last());
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn test_cursor_page_exposes_after() {
        let page: CursorPage<String> = serde_json::from_value(json!({
            "href": "https://api.spotify.com/v1/me/following?type=artist",
            "items": [],
            "limit": 20,
            "next": "https://api.spotify.com/v1/me/following?type=artist&after=0aV6DOiouImYTqrR5Yl",
            "cursors": { "after": "0aV6DOiouImYTqrR5Yl" },
            "total": 183
        }))
        .unwrap();
        assert_eq!(page.after(), Some("0aV6DOiouImYTqrR5Yl"));
        assert!(!page.is_last());
    }

    #[test]
    fn test_cursor_page_absent_after_is_end() {
        let page: CursorPage<String> = serde_json::from_value(json!({
            "href": "https://api.spotify.com/v1/me/following?type=artist",
            "items": [],
            "limit": 20,
            "next": null,
            "cursors": {}
        }))
        .unwrap();
        assert!(page.is_last());
        assert_eq!(page.total, None);
    }
}
