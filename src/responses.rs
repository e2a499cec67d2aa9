//! Response envelopes for individual API endpoints.
//!
//! Several endpoints wrap their payload in a single-key object (e.g.
//! `{"albums": [...]}`) or add a browse-tab `message`. The envelopes here
//! cover those; endpoints that return a bare entity or page decode
//! directly with the model types.

use serde::{Deserialize, Serialize};

use crate::models::{
    AudioFeatures, Category, CursorPage, FullAlbum, FullArtist, FullTrack, Page, SimplifiedAlbum,
    SimplifiedPlaylist,
};

/// Snapshot returned by playlist mutation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaylistSnapshot {
    /// Version identifier of the playlist after the change.
    pub snapshot_id: String,
}

/// Error payload the API returns on failed requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u32,

    /// Human-readable cause.
    pub message: String,
}

/// Wire wrapper around [`ApiError`]: `{"error": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEnvelope {
    /// The error itself.
    pub error: ApiError,
}

/// Response of `GET /v1/albums?ids={ids}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Albums {
    /// Requested albums, in request order.
    pub albums: Vec<FullAlbum>,
}

/// Response of `GET /v1/artists?ids={ids}` and related-artists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artists {
    /// Requested artists, in request order.
    pub artists: Vec<FullArtist>,
}

/// Response of `GET /v1/tracks?ids={ids}` and artist top-tracks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tracks {
    /// Requested tracks, in request order.
    pub tracks: Vec<FullTrack>,
}

/// Response of `GET /v1/audio-features?ids={ids}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AudioFeaturesList {
    /// Features per requested track, in request order.
    pub audio_features: Vec<AudioFeatures>,
}

/// Response of `GET /v1/browse/featured-playlists`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeaturedPlaylists {
    /// Banner message for the browse tab.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The featured playlists.
    pub playlists: Page<SimplifiedPlaylist>,
}

/// Response of `GET /v1/browse/new-releases`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewReleases {
    /// Banner message for the browse tab.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The newly released albums.
    pub albums: Page<SimplifiedAlbum>,
}

/// Response of `GET /v1/browse/categories`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Categories {
    /// The browse categories.
    pub categories: Page<Category>,
}

/// Response of `GET /v1/browse/categories/{id}/playlists`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryPlaylists {
    /// Playlists tagged with the category.
    pub playlists: Page<SimplifiedPlaylist>,
}

/// Response of `GET /v1/me/following?type=artist`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FollowedArtists {
    /// The followed artists, cursor-paged.
    pub artists: CursorPage<FullArtist>,
}

/// Response of `GET /v1/search?type=album`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchAlbums {
    /// Matching albums.
    pub albums: Page<SimplifiedAlbum>,
}

/// Response of `GET /v1/search?type=artist`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchArtists {
    /// Matching artists.
    pub artists: Page<FullArtist>,
}

/// Response of `GET /v1/search?type=playlist`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchPlaylists {
    /// Matching playlists.
    pub playlists: Page<SimplifiedPlaylist>,
}

/// Response of `GET /v1/search?type=track`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchTracks {
    /// Matching tracks.
    pub tracks: Page<FullTrack>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_envelope() {
        let envelope: ErrorEnvelope = serde_json::from_value(json!({
            "error": { "status": 404, "message": "non existing id" }
        }))
        .unwrap();
        assert_eq!(envelope.error.status, 404);
    }

    #[test]
    fn test_playlist_snapshot() {
        let snapshot: PlaylistSnapshot = serde_json::from_value(json!({
            "snapshot_id": "JbtmHBDBAYu3/bt8BOXKjzKx3i0b6LCa/wVjyl6qQ2Yf6nFXkbmzuEa+ZI/U1yF+"
        }))
        .unwrap();
        assert!(snapshot.snapshot_id.starts_with("JbtmHBDB"));
    }

    #[test]
    fn test_new_releases_with_message() {
        let releases: NewReleases = serde_json::from_value(json!({
            "message": "New Music Friday",
            "albums": {
                "href": "https://api.spotify.com/v1/browse/new-releases?offset=0&limit=20",
                "items": [],
                "limit": 20,
                "next": null,
                "offset": 0,
                "previous": null,
                "total": 0
            }
        }))
        .unwrap();
        assert_eq!(releases.message.as_deref(), Some("New Music Friday"));
    }
}
