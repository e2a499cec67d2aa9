//! Common types shared across all models.

use serde::{Deserialize, Serialize};

/// Known external URLs for an object.
///
/// The API documents only the `spotify` key; any others the server adds
/// are ignored on decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExternalUrls {
    /// Canonical open.spotify.com URL for the object.
    pub spotify: String,
}

impl ExternalUrls {
    /// Create external URLs from a single Spotify URL.
    pub fn new<S: Into<String>>(spotify: S) -> Self {
        Self {
            spotify: spotify.into(),
        }
    }
}

/// Known external identifiers for an object.
///
/// Different fields are populated depending on the type of content.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExternalIds {
    /// International Standard Recording Code (for tracks).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isrc: Option<String>,

    /// International Article Number (for albums).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ean: Option<String>,

    /// Universal Product Code (for albums).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
}

impl ExternalIds {
    /// Create identifiers with just an ISRC.
    pub fn with_isrc<S: Into<String>>(isrc: S) -> Self {
        Self {
            isrc: Some(isrc.into()),
            ..Default::default()
        }
    }
}

/// Image with URL and optional dimensions.
///
/// Dimensions are nullable upstream, so both are optional here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Image {
    /// URL to the image.
    pub url: String,

    /// Height in pixels, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Width in pixels, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

impl Image {
    /// Create a new image with known dimensions.
    pub fn new<S: Into<String>>(url: S, height: u32, width: u32) -> Self {
        Self {
            url: url.into(),
            height: Some(height),
            width: Some(width),
        }
    }
}

/// Follower information for artists, users, and playlists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Followers {
    /// Link to full follower details. Always null at the time of writing,
    /// as the Web API does not expose it.
    pub href: Option<String>,

    /// Total number of followers.
    pub total: u32,
}

/// Kind of copyright statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopyrightKind {
    /// The copyright.
    #[serde(rename = "C")]
    Copyright,
    /// The sound recording (performance) copyright.
    #[serde(rename = "P")]
    Performance,
}

/// Copyright statement on an album.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Copyright {
    /// The copyright text.
    pub text: String,

    /// Whether this is a "C" or "P" statement.
    #[serde(rename = "type")]
    pub kind: CopyrightKind,
}

/// Closed set of object types the API tags its entities with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    /// An album object.
    Album,
    /// An artist object.
    Artist,
    /// A track object.
    Track,
    /// A playlist object.
    Playlist,
    /// A user object.
    User,
    /// An audio features object.
    AudioFeatures,
}

impl ObjectType {
    /// Wire name of this object type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Album => "album",
            ObjectType::Artist => "artist",
            ObjectType::Track => "track",
            ObjectType::Playlist => "playlist",
            ObjectType::User => "user",
            ObjectType::AudioFeatures => "audio_features",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_copyright_kind_wire_names() {
        let c: Copyright = serde_json::from_value(json!({
            "text": "2016 A Label",
            "type": "C"
        }))
        .unwrap();
        assert_eq!(c.kind, CopyrightKind::Copyright);

        let p: Copyright = serde_json::from_value(json!({
            "text": "2016 A Label",
            "type": "P"
        }))
        .unwrap();
        assert_eq!(p.kind, CopyrightKind::Performance);
    }

    #[test]
    fn test_copyright_rejects_unknown_kind() {
        let err = serde_json::from_value::<Copyright>(json!({
            "text": "2016 A Label",
            "type": "X"
        }));
        assert!(err.is_err());
    }

    #[test]
    fn test_object_type_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(ObjectType::AudioFeatures).unwrap(),
            json!("audio_features")
        );
        assert_eq!(ObjectType::Album.as_str(), "album");
    }

    #[test]
    fn test_image_optional_dimensions() {
        let image: Image =
            serde_json::from_value(json!({ "url": "https://i.scdn.co/image/abc" })).unwrap();
        assert_eq!(image.height, None);
        assert_eq!(image.width, None);
    }

    #[test]
    fn test_followers_null_href() {
        let followers: Followers =
            serde_json::from_value(json!({ "href": null, "total": 306565 })).unwrap();
        assert_eq!(followers.href, None);
        assert_eq!(followers.total, 306565);
    }
}
