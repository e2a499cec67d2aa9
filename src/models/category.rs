//! Browse category model.

use serde::{Deserialize, Serialize};

use super::common::Image;

/// A category used to tag items in the browse tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// API endpoint for full category details.
    pub href: String,

    /// Category icons in various sizes.
    pub icons: Vec<Image>,

    /// Category ID, e.g. "party".
    pub id: String,

    /// Category display name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_decodes() {
        let category: Category = serde_json::from_value(json!({
            "href": "https://api.spotify.com/v1/browse/categories/party",
            "icons": [{ "url": "https://datsnxq1rwndn.cloudfront.net/media/party.jpg", "height": 274, "width": 274 }],
            "id": "party",
            "name": "Party"
        }))
        .unwrap();
        assert_eq!(category.id, "party");
        assert_eq!(category.icons.len(), 1);
    }
}
