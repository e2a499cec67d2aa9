//! The schema registry: named entities and the validating decoder.
//!
//! Decoding is a pure function of its inputs: a raw JSON value is checked
//! against the entity's declared shape, and only then converted into the
//! typed model. Nothing is coerced and unknown extra fields are ignored.
//! Paging wrappers are generic, so the caller names the item entity when
//! decoding a page (the JSON itself carries no type information).

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{DecodeError, Result};
use crate::models::{
    AudioFeatures, Category, Copyright, Cursor, CursorPage, ExternalIds, ExternalUrls, Followers,
    FullAlbum, FullArtist, FullPlaylist, FullTrack, Image, Page, PlaylistTrack, PlaylistTracksRef,
    PrivateUser, PublicUser, RecommendationSeed, Recommendations, SavedAlbum, SavedTrack,
    SimplifiedAlbum, SimplifiedArtist, SimplifiedPlaylist, SimplifiedTrack, TrackLink,
};
use crate::schema;

/// Closed set of entities the registry can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    /// Album as embedded inside other entities.
    AlbumSimplified,
    /// Full album record.
    AlbumFull,
    /// Artist as embedded inside other entities.
    ArtistSimplified,
    /// Full artist record.
    ArtistFull,
    /// Track as embedded inside an album.
    TrackSimplified,
    /// Full track record.
    TrackFull,
    /// Relinking link to the originally requested track.
    TrackLink,
    /// Playlist as returned by list endpoints.
    PlaylistSimplified,
    /// Full playlist record.
    PlaylistFull,
    /// Href/total reference to a playlist's tracks.
    PlaylistTracksRef,
    /// Track entry inside a playlist.
    PlaylistTrack,
    /// Track saved in the user's library.
    SavedTrack,
    /// Album saved in the user's library.
    SavedAlbum,
    /// Publicly visible user profile.
    UserPublic,
    /// The authenticated user's own profile.
    UserPrivate,
    /// Browse category.
    Category,
    /// Copyright statement.
    Copyright,
    /// Image with URL and optional dimensions.
    Image,
    /// Follower information.
    Followers,
    /// Known external identifiers.
    ExternalIds,
    /// Known external URLs.
    ExternalUrls,
    /// Audio feature analysis of a track.
    AudioFeatures,
    /// Recommendation response.
    Recommendations,
    /// Seed of a recommendation response.
    RecommendationSeed,
    /// Cursor marker for cursor-based paging.
    Cursor,
}

impl Entity {
    /// Every entity the registry knows.
    pub const ALL: &'static [Entity] = &[
        Entity::AlbumSimplified,
        Entity::AlbumFull,
        Entity::ArtistSimplified,
        Entity::ArtistFull,
        Entity::TrackSimplified,
        Entity::TrackFull,
        Entity::TrackLink,
        Entity::PlaylistSimplified,
        Entity::PlaylistFull,
        Entity::PlaylistTracksRef,
        Entity::PlaylistTrack,
        Entity::SavedTrack,
        Entity::SavedAlbum,
        Entity::UserPublic,
        Entity::UserPrivate,
        Entity::Category,
        Entity::Copyright,
        Entity::Image,
        Entity::Followers,
        Entity::ExternalIds,
        Entity::ExternalUrls,
        Entity::AudioFeatures,
        Entity::Recommendations,
        Entity::RecommendationSeed,
        Entity::Cursor,
    ];

    /// Registry name of this entity.
    pub fn name(&self) -> &'static str {
        match self {
            Entity::AlbumSimplified => "album_simplified",
            Entity::AlbumFull => "album_full",
            Entity::ArtistSimplified => "artist_simplified",
            Entity::ArtistFull => "artist_full",
            Entity::TrackSimplified => "track_simplified",
            Entity::TrackFull => "track_full",
            Entity::TrackLink => "track_link",
            Entity::PlaylistSimplified => "playlist_simplified",
            Entity::PlaylistFull => "playlist_full",
            Entity::PlaylistTracksRef => "playlist_tracks_ref",
            Entity::PlaylistTrack => "playlist_track",
            Entity::SavedTrack => "saved_track",
            Entity::SavedAlbum => "saved_album",
            Entity::UserPublic => "user_public",
            Entity::UserPrivate => "user_private",
            Entity::Category => "category",
            Entity::Copyright => "copyright",
            Entity::Image => "image",
            Entity::Followers => "followers",
            Entity::ExternalIds => "external_ids",
            Entity::ExternalUrls => "external_urls",
            Entity::AudioFeatures => "audio_features",
            Entity::Recommendations => "recommendations",
            Entity::RecommendationSeed => "recommendation_seed",
            Entity::Cursor => "cursor",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Entity {
    type Err = DecodeError;

    fn from_str(name: &str) -> Result<Self> {
        Entity::ALL
            .iter()
            .find(|e| e.name() == name)
            .copied()
            .ok_or_else(|| DecodeError::UnknownEntity(name.to_string()))
    }
}

/// A successfully decoded entity, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// Album as embedded inside other entities.
    AlbumSimplified(SimplifiedAlbum),
    /// Full album record.
    AlbumFull(FullAlbum),
    /// Artist as embedded inside other entities.
    ArtistSimplified(SimplifiedArtist),
    /// Full artist record.
    ArtistFull(FullArtist),
    /// Track as embedded inside an album.
    TrackSimplified(SimplifiedTrack),
    /// Full track record.
    TrackFull(FullTrack),
    /// Relinking link to the originally requested track.
    TrackLink(TrackLink),
    /// Playlist as returned by list endpoints.
    PlaylistSimplified(SimplifiedPlaylist),
    /// Full playlist record.
    PlaylistFull(FullPlaylist),
    /// Href/total reference to a playlist's tracks.
    PlaylistTracksRef(PlaylistTracksRef),
    /// Track entry inside a playlist.
    PlaylistTrack(PlaylistTrack),
    /// Track saved in the user's library.
    SavedTrack(SavedTrack),
    /// Album saved in the user's library.
    SavedAlbum(SavedAlbum),
    /// Publicly visible user profile.
    UserPublic(PublicUser),
    /// The authenticated user's own profile.
    UserPrivate(PrivateUser),
    /// Browse category.
    Category(Category),
    /// Copyright statement.
    Copyright(Copyright),
    /// Image with URL and optional dimensions.
    Image(Image),
    /// Follower information.
    Followers(Followers),
    /// Known external identifiers.
    ExternalIds(ExternalIds),
    /// Known external URLs.
    ExternalUrls(ExternalUrls),
    /// Audio feature analysis of a track.
    AudioFeatures(AudioFeatures),
    /// Recommendation response.
    Recommendations(Recommendations),
    /// Seed of a recommendation response.
    RecommendationSeed(RecommendationSeed),
    /// Cursor marker for cursor-based paging.
    Cursor(Cursor),
}

impl Decoded {
    /// Which entity this value was decoded as.
    pub fn kind(&self) -> Entity {
        match self {
            Decoded::AlbumSimplified(_) => Entity::AlbumSimplified,
            Decoded::AlbumFull(_) => Entity::AlbumFull,
            Decoded::ArtistSimplified(_) => Entity::ArtistSimplified,
            Decoded::ArtistFull(_) => Entity::ArtistFull,
            Decoded::TrackSimplified(_) => Entity::TrackSimplified,
            Decoded::TrackFull(_) => Entity::TrackFull,
            Decoded::TrackLink(_) => Entity::TrackLink,
            Decoded::PlaylistSimplified(_) => Entity::PlaylistSimplified,
            Decoded::PlaylistFull(_) => Entity::PlaylistFull,
            Decoded::PlaylistTracksRef(_) => Entity::PlaylistTracksRef,
            Decoded::PlaylistTrack(_) => Entity::PlaylistTrack,
            Decoded::SavedTrack(_) => Entity::SavedTrack,
            Decoded::SavedAlbum(_) => Entity::SavedAlbum,
            Decoded::UserPublic(_) => Entity::UserPublic,
            Decoded::UserPrivate(_) => Entity::UserPrivate,
            Decoded::Category(_) => Entity::Category,
            Decoded::Copyright(_) => Entity::Copyright,
            Decoded::Image(_) => Entity::Image,
            Decoded::Followers(_) => Entity::Followers,
            Decoded::ExternalIds(_) => Entity::ExternalIds,
            Decoded::ExternalUrls(_) => Entity::ExternalUrls,
            Decoded::AudioFeatures(_) => Entity::AudioFeatures,
            Decoded::Recommendations(_) => Entity::Recommendations,
            Decoded::RecommendationSeed(_) => Entity::RecommendationSeed,
            Decoded::Cursor(_) => Entity::Cursor,
        }
    }
}

/// Validate a raw JSON value against an entity's shape.
///
/// Returns every divergence, not just the first; an empty vector means
/// the payload conforms.
pub fn validate(entity: Entity, raw: &Value) -> Vec<DecodeError> {
    let mut errors = Vec::new();
    schema::check_shape(schema::catalog::shape(entity), raw, "", &mut errors);
    errors
}

/// Decode a raw JSON value as the given entity.
///
/// Fails on the first structural divergence from the declared shape.
pub fn decode(entity: Entity, raw: &Value) -> Result<Decoded> {
    trace!("decoding {}", entity);
    if let Some(err) = validate(entity, raw).into_iter().next() {
        debug!("validation of {} failed: {}", entity, err);
        return Err(err);
    }
    to_decoded(entity, raw)
}

/// Decode a raw JSON value against an entity named at runtime.
pub fn decode_by_name(name: &str, raw: &Value) -> Result<Decoded> {
    decode(name.parse()?, raw)
}

/// Decode an offset-based page whose items are the given entity.
pub fn decode_page(item: Entity, raw: &Value) -> Result<Page<Decoded>> {
    trace!("decoding page of {}", item);
    let mut errors = Vec::new();
    schema::check_page(item, raw, "", &mut errors);
    if let Some(err) = errors.into_iter().next() {
        debug!("validation of page of {} failed: {}", item, err);
        return Err(err);
    }

    let page: Page<Value> = from_raw(raw)?;
    let items = page
        .items
        .into_iter()
        .map(|value| to_decoded(item, &value))
        .collect::<Result<Vec<_>>>()?;

    Ok(Page {
        href: page.href,
        items,
        limit: page.limit,
        next: page.next,
        offset: page.offset,
        previous: page.previous,
        total: page.total,
    })
}

/// Decode a cursor-based page whose items are the given entity.
pub fn decode_cursor_page(item: Entity, raw: &Value) -> Result<CursorPage<Decoded>> {
    trace!("decoding cursor page of {}", item);
    let mut errors = Vec::new();
    schema::check_cursor_page(item, raw, "", &mut errors);
    if let Some(err) = errors.into_iter().next() {
        debug!("validation of cursor page of {} failed: {}", item, err);
        return Err(err);
    }

    let page: CursorPage<Value> = from_raw(raw)?;
    let items = page
        .items
        .into_iter()
        .map(|value| to_decoded(item, &value))
        .collect::<Result<Vec<_>>>()?;

    Ok(CursorPage {
        href: page.href,
        items,
        limit: page.limit,
        next: page.next,
        cursors: page.cursors,
        total: page.total,
    })
}

fn from_raw<T: DeserializeOwned>(raw: &Value) -> Result<T> {
    Ok(serde_json::from_value(raw.clone())?)
}

/// Convert an already validated value into its typed model.
fn to_decoded(entity: Entity, raw: &Value) -> Result<Decoded> {
    let decoded = match entity {
        Entity::AlbumSimplified => Decoded::AlbumSimplified(from_raw(raw)?),
        Entity::AlbumFull => Decoded::AlbumFull(from_raw(raw)?),
        Entity::ArtistSimplified => Decoded::ArtistSimplified(from_raw(raw)?),
        Entity::ArtistFull => Decoded::ArtistFull(from_raw(raw)?),
        Entity::TrackSimplified => Decoded::TrackSimplified(from_raw(raw)?),
        Entity::TrackFull => Decoded::TrackFull(from_raw(raw)?),
        Entity::TrackLink => Decoded::TrackLink(from_raw(raw)?),
        Entity::PlaylistSimplified => Decoded::PlaylistSimplified(from_raw(raw)?),
        Entity::PlaylistFull => Decoded::PlaylistFull(from_raw(raw)?),
        Entity::PlaylistTracksRef => Decoded::PlaylistTracksRef(from_raw(raw)?),
        Entity::PlaylistTrack => Decoded::PlaylistTrack(from_raw(raw)?),
        Entity::SavedTrack => Decoded::SavedTrack(from_raw(raw)?),
        Entity::SavedAlbum => Decoded::SavedAlbum(from_raw(raw)?),
        Entity::UserPublic => Decoded::UserPublic(from_raw(raw)?),
        Entity::UserPrivate => Decoded::UserPrivate(from_raw(raw)?),
        Entity::Category => Decoded::Category(from_raw(raw)?),
        Entity::Copyright => Decoded::Copyright(from_raw(raw)?),
        Entity::Image => Decoded::Image(from_raw(raw)?),
        Entity::Followers => Decoded::Followers(from_raw(raw)?),
        Entity::ExternalIds => Decoded::ExternalIds(from_raw(raw)?),
        Entity::ExternalUrls => Decoded::ExternalUrls(from_raw(raw)?),
        Entity::AudioFeatures => Decoded::AudioFeatures(from_raw(raw)?),
        Entity::Recommendations => Decoded::Recommendations(from_raw(raw)?),
        Entity::RecommendationSeed => Decoded::RecommendationSeed(from_raw(raw)?),
        Entity::Cursor => Decoded::Cursor(from_raw(raw)?),
    };
    Ok(decoded)
}
