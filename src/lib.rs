//! # Spotify Schema
//!
//! Typed models for the Spotify Web API object model, plus a schema
//! registry that validates raw JSON against the documented shapes before
//! handing back strongly typed values.
//!
//! ## Quick Start
//!
//! Models deserialize directly with serde:
//!
//! ```rust
//! use spotify_schema::models::SimplifiedArtist;
//!
//! let artist: SimplifiedArtist = serde_json::from_value(serde_json::json!({
//!     "external_urls": { "spotify": "https://open.spotify.com/artist/0C0XlULifJtAgn6ZNCW2eu" },
//!     "href": "https://api.spotify.com/v1/artists/0C0XlULifJtAgn6ZNCW2eu",
//!     "id": "0C0XlULifJtAgn6ZNCW2eu",
//!     "name": "The Killers",
//!     "type": "artist",
//!     "uri": "spotify:artist:0C0XlULifJtAgn6ZNCW2eu"
//! }))?;
//! assert_eq!(artist.name, "The Killers");
//! # Ok::<(), serde_json::Error>(())
//! ```
//!
//! The registry adds structural validation with field-path errors, useful
//! when an HTTP layer wants to report exactly where a response diverged:
//!
//! ```rust
//! use spotify_schema::{registry, DecodeError, Entity};
//!
//! let raw = serde_json::json!({ "text": "(C) 2004", "type": "X" });
//! let err = registry::decode(Entity::Copyright, &raw).unwrap_err();
//! assert!(matches!(err, DecodeError::InvalidDiscriminant { .. }));
//! ```
//!
//! ## Features
//!
//! - **Every object shape** from the API's object model: simplified/full
//!   album, artist, track, and playlist pairs, users, categories, audio
//!   features, recommendations, and library wrappers
//! - **Generic paging** via [`models::Page`] and [`models::CursorPage`]
//! - **Validating decoder** that reports missing fields, type mismatches,
//!   and invalid discriminants by dotted field path, and ignores unknown
//!   extra fields for forward compatibility
//! - **Response envelopes** for endpoints that wrap their payload
//!
//! This crate is the data-model layer only: no HTTP client, no auth, no
//! rate-limit or retry handling. Pair it with the HTTP stack of your
//! choice.

pub mod error;
pub mod models;
pub mod registry;
pub mod responses;
mod schema;

pub use error::{DecodeError, Result};
pub use models::{
    CursorPage, FullAlbum, FullArtist, FullPlaylist, FullTrack, Page, SearchQuery, SimplifiedAlbum,
    SimplifiedArtist, SimplifiedPlaylist, SimplifiedTrack,
};
pub use registry::{Decoded, Entity};
