//! Data models for Spotify Web API responses.
//!
//! This module contains all the data structures used to represent
//! albums, artists, tracks, playlists, users, and related metadata,
//! with wire field names kept exactly as the API sends them.

pub mod album;
pub mod artist;
pub mod audio;
pub mod category;
pub mod common;
pub mod page;
pub mod playlist;
pub mod recommendations;
pub mod search;
pub mod track;
pub mod user;

// Re-exports for convenience
pub use album::{FullAlbum, SavedAlbum, SimplifiedAlbum};
pub use artist::{FullArtist, SimplifiedArtist};
pub use audio::AudioFeatures;
pub use category::Category;
pub use common::{
    Copyright, CopyrightKind, ExternalIds, ExternalUrls, Followers, Image, ObjectType,
};
pub use page::{Cursor, CursorPage, Page};
pub use playlist::{
    FullPlaylist, PlaylistBase, PlaylistTrack, PlaylistTracksRef, SimplifiedPlaylist,
};
pub use recommendations::{RecommendationSeed, Recommendations, SeedType};
pub use search::{SearchQuery, SearchType};
pub use track::{FullTrack, SavedTrack, SimplifiedTrack, TrackLink};
pub use user::{PrivateUser, PublicUser};
