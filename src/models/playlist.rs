//! Playlist-related models.
//!
//! The simplified and full playlist variants diverge in their `tracks`
//! field (a href/total reference vs an embedded page of playlist tracks),
//! so the shared fields live in [`PlaylistBase`] and both variants flatten
//! it rather than extending one another.

use serde::{Deserialize, Serialize};

use super::common::{ExternalUrls, Followers, Image, ObjectType};
use super::page::Page;
use super::track::FullTrack;
use super::user::PublicUser;

/// Field set shared by both playlist variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaylistBase {
    /// Whether the owner allows other users to modify the playlist.
    pub collaborative: bool,

    /// Known external URLs.
    pub external_urls: ExternalUrls,

    /// API endpoint for full playlist details.
    pub href: String,

    /// Spotify ID of the playlist.
    pub id: String,

    /// Cover images in various sizes, widest first.
    pub images: Vec<Image>,

    /// Playlist name.
    pub name: String,

    /// User who owns the playlist.
    pub owner: PublicUser,

    /// Whether the playlist is public.
    pub public: Option<bool>,

    /// Version identifier of the current playlist contents.
    pub snapshot_id: String,

    /// Object type tag, always "playlist".
    #[serde(rename = "type")]
    pub type_: ObjectType,

    /// Spotify URI of the playlist.
    pub uri: String,
}

/// Reference to a playlist's tracks without the tracks themselves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaylistTracksRef {
    /// API endpoint for the playlist's tracks.
    pub href: String,

    /// Total number of tracks in the playlist.
    pub total: u32,
}

/// Playlist as returned by list and browse endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimplifiedPlaylist {
    /// The shared field set, flattened into this object on the wire.
    #[serde(flatten)]
    pub base: PlaylistBase,

    /// Where to fetch the playlist's tracks, and how many there are.
    pub tracks: PlaylistTracksRef,
}

/// A full playlist record.
///
/// The shared field set plus description, followers, and the first page
/// of the playlist's tracks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FullPlaylist {
    /// The shared field set, flattened into this object on the wire.
    #[serde(flatten)]
    pub base: PlaylistBase,

    /// Owner-supplied description, if any.
    pub description: Option<String>,

    /// Follower information.
    pub followers: Followers,

    /// First page of the playlist's tracks.
    pub tracks: Page<PlaylistTrack>,
}

impl FullPlaylist {
    /// Playlist name.
    pub fn name(&self) -> &str {
        &self.base.name
    }

    /// Display name or ID of the playlist owner.
    pub fn owner_name(&self) -> &str {
        self.base
            .owner
            .display_name
            .as_deref()
            .unwrap_or(&self.base.owner.id)
    }
}

/// A track entry inside a playlist.
///
/// Wraps the full track with playlist-specific bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaylistTrack {
    /// ISO 8601 timestamp at which the track was added.
    pub added_at: String,

    /// User who added the track.
    pub added_by: PublicUser,

    /// Whether the track is a local file rather than a catalog track.
    pub is_local: bool,

    /// The track itself.
    pub track: FullTrack,
}
