//! Album-related models.
//!
//! Albums come in a simplified variant (embedded in tracks and browse
//! lists) and a full variant carrying copyrights, genres, and the album's
//! own track listing.

use serde::{Deserialize, Serialize};

use super::artist::SimplifiedArtist;
use super::common::{Copyright, ExternalIds, ExternalUrls, Image, ObjectType};
use super::page::Page;
use super::track::SimplifiedTrack;

/// Album as embedded inside other entities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimplifiedAlbum {
    /// Kind of release: "album", "single", or "compilation".
    pub album_type: String,

    /// ISO 3166-1 alpha-2 markets the album is playable in.
    ///
    /// Documented as required but omitted on some endpoints, so optional.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_markets: Option<Vec<String>>,

    /// Known external URLs.
    pub external_urls: ExternalUrls,

    /// API endpoint for full album details.
    pub href: String,

    /// Spotify ID of the album.
    pub id: String,

    /// Cover art in various sizes, widest first.
    pub images: Vec<Image>,

    /// Album name.
    pub name: String,

    /// Object type tag, always "album".
    #[serde(rename = "type")]
    pub type_: ObjectType,

    /// Spotify URI of the album.
    pub uri: String,
}

/// A full album record.
///
/// Every simplified field plus copyrights, external IDs, genres,
/// popularity, release information, and the track listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FullAlbum {
    /// The simplified field set, flattened into this object on the wire.
    #[serde(flatten)]
    pub simplified: SimplifiedAlbum,

    /// Artists credited on the album.
    pub artists: Vec<SimplifiedArtist>,

    /// Copyright statements.
    pub copyrights: Vec<Copyright>,

    /// Known external identifiers (UPC/EAN).
    pub external_ids: ExternalIds,

    /// Genres the album is associated with.
    pub genres: Vec<String>,

    /// Popularity between 0 and 100.
    pub popularity: u32,

    /// Release date, e.g. "1981-12" or "1981-12-15".
    pub release_date: String,

    /// Precision of `release_date`: "year", "month", or "day".
    pub release_date_precision: String,

    /// First page of the album's tracks.
    pub tracks: Page<SimplifiedTrack>,
}

impl FullAlbum {
    /// Get all credited artist names joined by a separator.
    pub fn artists_string(&self, separator: &str) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Release year parsed from `release_date`.
    pub fn release_year(&self) -> Option<u32> {
        self.release_date.split('-').next()?.parse().ok()
    }
}

/// Album saved in the user's library, with the timestamp it was added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedAlbum {
    /// ISO 8601 timestamp at which the album was saved.
    pub added_at: String,

    /// The saved album.
    pub album: FullAlbum,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn simplified_album_json() -> serde_json::Value {
        json!({
            "album_type": "album",
            "external_urls": { "spotify": "https://open.spotify.com/album/6akEvsycLGftJxYudPjmqK" },
            "href": "https://api.spotify.com/v1/albums/6akEvsycLGftJxYudPjmqK",
            "id": "6akEvsycLGftJxYudPjmqK",
            "images": [{ "url": "https://i.scdn.co/image/f295", "height": 640, "width": 640 }],
            "name": "Hot Fuss",
            "type": "album",
            "uri": "spotify:album:6akEvsycLGftJxYudPjmqK"
        })
    }

    #[test]
    fn test_simplified_album_without_markets() {
        let album: SimplifiedAlbum = serde_json::from_value(simplified_album_json()).unwrap();
        assert_eq!(album.name, "Hot Fuss");
        assert_eq!(album.available_markets, None);
        assert_eq!(album.type_, ObjectType::Album);
    }

    #[test]
    fn test_full_album_release_year() {
        let mut raw = simplified_album_json();
        let full = raw.as_object_mut().unwrap();
        full.insert("artists".into(), json!([]));
        full.insert("copyrights".into(), json!([{ "text": "(c) 2004", "type": "C" }]));
        full.insert("external_ids".into(), json!({ "upc": "602498648124" }));
        full.insert("genres".into(), json!(["indie rock"]));
        full.insert("popularity".into(), json!(74));
        full.insert("release_date".into(), json!("2004-06-15"));
        full.insert("release_date_precision".into(), json!("day"));
        full.insert(
            "tracks".into(),
            json!({
                "href": "https://api.spotify.com/v1/albums/6akEvsycLGftJxYudPjmqK/tracks",
                "items": [],
                "limit": 50,
                "next": null,
                "offset": 0,
                "previous": null,
                "total": 12
            }),
        );

        let album: FullAlbum = serde_json::from_value(raw).unwrap();
        assert_eq!(album.release_year(), Some(2004));
        assert_eq!(album.simplified.id, "6akEvsycLGftJxYudPjmqK");
        assert!(album.tracks.is_last());
    }
}
