//! Track-related models.
//!
//! This module contains the simplified/full track pair along with the
//! track relinking link object and the saved-track library wrapper.

use serde::{Deserialize, Serialize};

use super::album::SimplifiedAlbum;
use super::artist::SimplifiedArtist;
use super::common::{ExternalIds, ExternalUrls, ObjectType};

/// Link to the originally requested track when track relinking applies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackLink {
    /// Known external URLs.
    pub external_urls: ExternalUrls,

    /// API endpoint for the linked track.
    pub href: String,

    /// Spotify ID of the linked track.
    pub id: String,

    /// Object type tag, always "track".
    #[serde(rename = "type")]
    pub type_: ObjectType,

    /// Spotify URI of the linked track.
    pub uri: String,
}

/// Track as embedded inside an album.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimplifiedTrack {
    /// Artists who performed the track.
    pub artists: Vec<SimplifiedArtist>,

    /// ISO 3166-1 alpha-2 markets the track is playable in.
    ///
    /// Documented as required but omitted on some endpoints, so optional.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_markets: Option<Vec<String>>,

    /// Disc number (1-indexed).
    pub disc_number: u32,

    /// Duration in milliseconds.
    pub duration_ms: u32,

    /// Whether the track has explicit content.
    pub explicit: bool,

    /// Known external URLs.
    pub external_urls: ExternalUrls,

    /// API endpoint for full track details.
    pub href: String,

    /// Spotify ID of the track.
    pub id: String,

    /// Whether the track is playable in the requesting market. Only
    /// present when track relinking is applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_playable: Option<bool>,

    /// The originally requested track when relinking substituted this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_from: Option<TrackLink>,

    /// Track name.
    pub name: String,

    /// URL of a 30-second preview clip, when one exists.
    pub preview_url: Option<String>,

    /// Track number on the disc (1-indexed).
    pub track_number: u32,

    /// Object type tag, always "track".
    #[serde(rename = "type")]
    pub type_: ObjectType,

    /// Spotify URI of the track.
    pub uri: String,
}

impl SimplifiedTrack {
    /// Get the primary artist name.
    pub fn primary_artist(&self) -> Option<&str> {
        self.artists.first().map(|a| a.name.as_str())
    }

    /// Get all artist names joined by a separator.
    pub fn artists_string(&self, separator: &str) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Get duration formatted as MM:SS.
    pub fn duration_formatted(&self) -> String {
        let total_seconds = self.duration_ms / 1000;
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// A full track record.
///
/// Every simplified field plus the containing album, external IDs, and
/// popularity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FullTrack {
    /// The simplified field set, flattened into this object on the wire.
    #[serde(flatten)]
    pub simplified: SimplifiedTrack,

    /// Album the track appears on.
    pub album: SimplifiedAlbum,

    /// Known external identifiers (ISRC).
    pub external_ids: ExternalIds,

    /// Popularity between 0 and 100.
    pub popularity: u32,
}

impl FullTrack {
    /// Track name.
    pub fn name(&self) -> &str {
        &self.simplified.name
    }

    /// Get the primary artist name.
    pub fn primary_artist(&self) -> Option<&str> {
        self.simplified.primary_artist()
    }
}

/// Track saved in the user's library, with the timestamp it was added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedTrack {
    /// ISO 8601 timestamp at which the track was saved.
    pub added_at: String,

    /// The saved track.
    pub track: FullTrack,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn simplified_track_json() -> serde_json::Value {
        json!({
            "artists": [{
                "external_urls": { "spotify": "https://open.spotify.com/artist/3WrFJ7ztbogyGnTHbHJFl2" },
                "href": "https://api.spotify.com/v1/artists/3WrFJ7ztbogyGnTHbHJFl2",
                "id": "3WrFJ7ztbogyGnTHbHJFl2",
                "name": "The Beatles",
                "type": "artist",
                "uri": "spotify:artist:3WrFJ7ztbogyGnTHbHJFl2"
            }],
            "disc_number": 1,
            "duration_ms": 215000,
            "explicit": false,
            "external_urls": { "spotify": "https://open.spotify.com/track/6dGnYIeXmHdcikdzNNDMm2" },
            "href": "https://api.spotify.com/v1/tracks/6dGnYIeXmHdcikdzNNDMm2",
            "id": "6dGnYIeXmHdcikdzNNDMm2",
            "name": "Here Comes The Sun",
            "preview_url": null,
            "track_number": 7,
            "type": "track",
            "uri": "spotify:track:6dGnYIeXmHdcikdzNNDMm2"
        })
    }

    #[test]
    fn test_track_without_markets_decodes() {
        let track: SimplifiedTrack = serde_json::from_value(simplified_track_json()).unwrap();
        assert_eq!(track.available_markets, None);
        assert_eq!(track.preview_url, None);
        assert_eq!(track.primary_artist(), Some("The Beatles"));
    }

    #[test]
    fn test_track_duration_formatted() {
        let track: SimplifiedTrack = serde_json::from_value(simplified_track_json()).unwrap();
        assert_eq!(track.duration_formatted(), "03:35");
    }

    #[test]
    fn test_track_relinking_fields() {
        let mut raw = simplified_track_json();
        let obj = raw.as_object_mut().unwrap();
        obj.insert("is_playable".into(), json!(true));
        obj.insert(
            "linked_from".into(),
            json!({
                "external_urls": { "spotify": "https://open.spotify.com/track/6kLCHFM39wkFjOuyPGLGeQ" },
                "href": "https://api.spotify.com/v1/tracks/6kLCHFM39wkFjOuyPGLGeQ",
                "id": "6kLCHFM39wkFjOuyPGLGeQ",
                "type": "track",
                "uri": "spotify:track:6kLCHFM39wkFjOuyPGLGeQ"
            }),
        );

        let track: SimplifiedTrack = serde_json::from_value(raw).unwrap();
        assert_eq!(track.is_playable, Some(true));
        let linked = track.linked_from.unwrap();
        assert_eq!(linked.id, "6kLCHFM39wkFjOuyPGLGeQ");
    }
}
