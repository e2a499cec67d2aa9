//! Artist-related models.

use serde::{Deserialize, Serialize};

use super::common::{ExternalUrls, Followers, Image, ObjectType};

/// Artist as embedded inside tracks and albums.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimplifiedArtist {
    /// Known external URLs.
    pub external_urls: ExternalUrls,

    /// API endpoint for full artist details.
    pub href: String,

    /// Spotify ID of the artist.
    pub id: String,

    /// Artist name.
    pub name: String,

    /// Object type tag, always "artist".
    #[serde(rename = "type")]
    pub type_: ObjectType,

    /// Spotify URI of the artist.
    pub uri: String,
}

/// A full artist record.
///
/// Every simplified field plus followers, genres, images, and popularity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FullArtist {
    /// The simplified field set, flattened into this object on the wire.
    #[serde(flatten)]
    pub simplified: SimplifiedArtist,

    /// Follower information.
    pub followers: Followers,

    /// Genres the artist is associated with.
    pub genres: Vec<String>,

    /// Artist images in various sizes, widest first.
    pub images: Vec<Image>,

    /// Popularity between 0 and 100.
    pub popularity: u32,
}

impl FullArtist {
    /// Artist name.
    pub fn name(&self) -> &str {
        &self.simplified.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_artist_decodes_as_simplified() {
        // Full payloads are supersets of the simplified shape.
        let raw = json!({
            "external_urls": { "spotify": "https://open.spotify.com/artist/0OdUWJ0sBjDrqHygGUXeCF" },
            "followers": { "href": null, "total": 306565 },
            "genres": ["indie folk"],
            "href": "https://api.spotify.com/v1/artists/0OdUWJ0sBjDrqHygGUXeCF",
            "id": "0OdUWJ0sBjDrqHygGUXeCF",
            "images": [{ "url": "https://i.scdn.co/image/966a", "height": 816, "width": 1000 }],
            "name": "Band of Horses",
            "popularity": 59,
            "type": "artist",
            "uri": "spotify:artist:0OdUWJ0sBjDrqHygGUXeCF"
        });

        let full: FullArtist = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(full.name(), "Band of Horses");
        assert_eq!(full.followers.total, 306565);

        let simplified: SimplifiedArtist = serde_json::from_value(raw).unwrap();
        assert_eq!(simplified.name, "Band of Horses");
    }
}
