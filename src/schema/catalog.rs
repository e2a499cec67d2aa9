//! Canonical field tables for every entity in the registry.
//!
//! Tables for full variants repeat the simplified fields rather than
//! referencing them, so each table is the complete wire contract on its
//! own; `test_full_tables_are_supersets` keeps the pairs in sync.
//!
//! Fields documented as required upstream but observed absent or null in
//! real responses (`available_markets`, scope-gated profile fields,
//! cursor-page `total`) are declared optional or nullable here; the
//! observed behavior governs.

use super::{Field, FieldKind};
use crate::registry::Entity;

const EXTERNAL_URLS: &[Field] = &[Field::req("spotify", FieldKind::String)];

const EXTERNAL_IDS: &[Field] = &[
    Field::opt("isrc", FieldKind::String),
    Field::opt("ean", FieldKind::String),
    Field::opt("upc", FieldKind::String),
];

const IMAGE: &[Field] = &[
    Field::req("url", FieldKind::String),
    Field::opt("height", FieldKind::UInt),
    Field::opt("width", FieldKind::UInt),
];

const FOLLOWERS: &[Field] = &[
    Field::req_null("href", FieldKind::String),
    Field::req("total", FieldKind::UInt),
];

const COPYRIGHT: &[Field] = &[
    Field::req("text", FieldKind::String),
    Field::req("type", FieldKind::Literal(&["C", "P"])),
];

const CURSOR: &[Field] = &[Field::opt("after", FieldKind::String)];

const ALBUM_SIMPLIFIED: &[Field] = &[
    Field::req("album_type", FieldKind::String),
    Field::opt("available_markets", FieldKind::StringArray),
    Field::req("external_urls", FieldKind::Entity(Entity::ExternalUrls)),
    Field::req("href", FieldKind::String),
    Field::req("id", FieldKind::String),
    Field::req("images", FieldKind::EntityArray(Entity::Image)),
    Field::req("name", FieldKind::String),
    Field::req("type", FieldKind::Literal(&["album"])),
    Field::req("uri", FieldKind::String),
];

const ALBUM_FULL: &[Field] = &[
    Field::req("album_type", FieldKind::String),
    Field::opt("available_markets", FieldKind::StringArray),
    Field::req("external_urls", FieldKind::Entity(Entity::ExternalUrls)),
    Field::req("href", FieldKind::String),
    Field::req("id", FieldKind::String),
    Field::req("images", FieldKind::EntityArray(Entity::Image)),
    Field::req("name", FieldKind::String),
    Field::req("type", FieldKind::Literal(&["album"])),
    Field::req("uri", FieldKind::String),
    Field::req("artists", FieldKind::EntityArray(Entity::ArtistSimplified)),
    Field::req("copyrights", FieldKind::EntityArray(Entity::Copyright)),
    Field::req("external_ids", FieldKind::Entity(Entity::ExternalIds)),
    Field::req("genres", FieldKind::StringArray),
    Field::req("popularity", FieldKind::UInt),
    Field::req("release_date", FieldKind::String),
    Field::req("release_date_precision", FieldKind::String),
    Field::req("tracks", FieldKind::Page(Entity::TrackSimplified)),
];

const ARTIST_SIMPLIFIED: &[Field] = &[
    Field::req("external_urls", FieldKind::Entity(Entity::ExternalUrls)),
    Field::req("href", FieldKind::String),
    Field::req("id", FieldKind::String),
    Field::req("name", FieldKind::String),
    Field::req("type", FieldKind::Literal(&["artist"])),
    Field::req("uri", FieldKind::String),
];

const ARTIST_FULL: &[Field] = &[
    Field::req("external_urls", FieldKind::Entity(Entity::ExternalUrls)),
    Field::req("href", FieldKind::String),
    Field::req("id", FieldKind::String),
    Field::req("name", FieldKind::String),
    Field::req("type", FieldKind::Literal(&["artist"])),
    Field::req("uri", FieldKind::String),
    Field::req("followers", FieldKind::Entity(Entity::Followers)),
    Field::req("genres", FieldKind::StringArray),
    Field::req("images", FieldKind::EntityArray(Entity::Image)),
    Field::req("popularity", FieldKind::UInt),
];

const TRACK_SIMPLIFIED: &[Field] = &[
    Field::req("artists", FieldKind::EntityArray(Entity::ArtistSimplified)),
    Field::opt("available_markets", FieldKind::StringArray),
    Field::req("disc_number", FieldKind::UInt),
    Field::req("duration_ms", FieldKind::UInt),
    Field::req("explicit", FieldKind::Bool),
    Field::req("external_urls", FieldKind::Entity(Entity::ExternalUrls)),
    Field::req("href", FieldKind::String),
    Field::req("id", FieldKind::String),
    Field::opt("is_playable", FieldKind::Bool),
    Field::opt("linked_from", FieldKind::Entity(Entity::TrackLink)),
    Field::req("name", FieldKind::String),
    Field::req_null("preview_url", FieldKind::String),
    Field::req("track_number", FieldKind::UInt),
    Field::req("type", FieldKind::Literal(&["track"])),
    Field::req("uri", FieldKind::String),
];

const TRACK_FULL: &[Field] = &[
    Field::req("artists", FieldKind::EntityArray(Entity::ArtistSimplified)),
    Field::opt("available_markets", FieldKind::StringArray),
    Field::req("disc_number", FieldKind::UInt),
    Field::req("duration_ms", FieldKind::UInt),
    Field::req("explicit", FieldKind::Bool),
    Field::req("external_urls", FieldKind::Entity(Entity::ExternalUrls)),
    Field::req("href", FieldKind::String),
    Field::req("id", FieldKind::String),
    Field::opt("is_playable", FieldKind::Bool),
    Field::opt("linked_from", FieldKind::Entity(Entity::TrackLink)),
    Field::req("name", FieldKind::String),
    Field::req_null("preview_url", FieldKind::String),
    Field::req("track_number", FieldKind::UInt),
    Field::req("type", FieldKind::Literal(&["track"])),
    Field::req("uri", FieldKind::String),
    Field::req("album", FieldKind::Entity(Entity::AlbumSimplified)),
    Field::req("external_ids", FieldKind::Entity(Entity::ExternalIds)),
    Field::req("popularity", FieldKind::UInt),
];

const TRACK_LINK: &[Field] = &[
    Field::req("external_urls", FieldKind::Entity(Entity::ExternalUrls)),
    Field::req("href", FieldKind::String),
    Field::req("id", FieldKind::String),
    Field::req("type", FieldKind::Literal(&["track"])),
    Field::req("uri", FieldKind::String),
];

const PLAYLIST_SIMPLIFIED: &[Field] = &[
    Field::req("collaborative", FieldKind::Bool),
    Field::req("external_urls", FieldKind::Entity(Entity::ExternalUrls)),
    Field::req("href", FieldKind::String),
    Field::req("id", FieldKind::String),
    Field::req("images", FieldKind::EntityArray(Entity::Image)),
    Field::req("name", FieldKind::String),
    Field::req("owner", FieldKind::Entity(Entity::UserPublic)),
    Field::req_null("public", FieldKind::Bool),
    Field::req("snapshot_id", FieldKind::String),
    Field::req("type", FieldKind::Literal(&["playlist"])),
    Field::req("uri", FieldKind::String),
    Field::req("tracks", FieldKind::Entity(Entity::PlaylistTracksRef)),
];

const PLAYLIST_FULL: &[Field] = &[
    Field::req("collaborative", FieldKind::Bool),
    Field::req("external_urls", FieldKind::Entity(Entity::ExternalUrls)),
    Field::req("href", FieldKind::String),
    Field::req("id", FieldKind::String),
    Field::req("images", FieldKind::EntityArray(Entity::Image)),
    Field::req("name", FieldKind::String),
    Field::req("owner", FieldKind::Entity(Entity::UserPublic)),
    Field::req_null("public", FieldKind::Bool),
    Field::req("snapshot_id", FieldKind::String),
    Field::req("type", FieldKind::Literal(&["playlist"])),
    Field::req("uri", FieldKind::String),
    Field::req_null("description", FieldKind::String),
    Field::req("followers", FieldKind::Entity(Entity::Followers)),
    Field::req("tracks", FieldKind::Page(Entity::PlaylistTrack)),
];

const PLAYLIST_TRACKS_REF: &[Field] = &[
    Field::req("href", FieldKind::String),
    Field::req("total", FieldKind::UInt),
];

const PLAYLIST_TRACK: &[Field] = &[
    Field::req("added_at", FieldKind::String),
    Field::req("added_by", FieldKind::Entity(Entity::UserPublic)),
    Field::req("is_local", FieldKind::Bool),
    Field::req("track", FieldKind::Entity(Entity::TrackFull)),
];

const SAVED_TRACK: &[Field] = &[
    Field::req("added_at", FieldKind::String),
    Field::req("track", FieldKind::Entity(Entity::TrackFull)),
];

const SAVED_ALBUM: &[Field] = &[
    Field::req("added_at", FieldKind::String),
    Field::req("album", FieldKind::Entity(Entity::AlbumFull)),
];

const USER_PUBLIC: &[Field] = &[
    Field::opt("display_name", FieldKind::String),
    Field::req("external_urls", FieldKind::Entity(Entity::ExternalUrls)),
    Field::opt("followers", FieldKind::Entity(Entity::Followers)),
    Field::req("href", FieldKind::String),
    Field::req("id", FieldKind::String),
    Field::opt("images", FieldKind::EntityArray(Entity::Image)),
    Field::req("type", FieldKind::Literal(&["user"])),
    Field::req("uri", FieldKind::String),
];

const USER_PRIVATE: &[Field] = &[
    Field::opt("display_name", FieldKind::String),
    Field::req("external_urls", FieldKind::Entity(Entity::ExternalUrls)),
    Field::opt("followers", FieldKind::Entity(Entity::Followers)),
    Field::req("href", FieldKind::String),
    Field::req("id", FieldKind::String),
    Field::opt("images", FieldKind::EntityArray(Entity::Image)),
    Field::req("type", FieldKind::Literal(&["user"])),
    Field::req("uri", FieldKind::String),
    Field::opt("birthdate", FieldKind::String),
    Field::opt("country", FieldKind::String),
    Field::opt("email", FieldKind::String),
    Field::opt("product", FieldKind::String),
];

const CATEGORY: &[Field] = &[
    Field::req("href", FieldKind::String),
    Field::req("icons", FieldKind::EntityArray(Entity::Image)),
    Field::req("id", FieldKind::String),
    Field::req("name", FieldKind::String),
];

const AUDIO_FEATURES: &[Field] = &[
    Field::req("acousticness", FieldKind::Float),
    Field::req("analysis_url", FieldKind::String),
    Field::req("danceability", FieldKind::Float),
    Field::req("duration_ms", FieldKind::UInt),
    Field::req("energy", FieldKind::Float),
    Field::req("id", FieldKind::String),
    Field::req("instrumentalness", FieldKind::Float),
    Field::req("key", FieldKind::Int),
    Field::req("liveness", FieldKind::Float),
    Field::req("loudness", FieldKind::Float),
    Field::req("mode", FieldKind::Int),
    Field::req("speechiness", FieldKind::Float),
    Field::req("tempo", FieldKind::Float),
    Field::req("time_signature", FieldKind::Int),
    Field::req("track_href", FieldKind::String),
    Field::req("type", FieldKind::Literal(&["audio_features"])),
    Field::req("uri", FieldKind::String),
    Field::req("valence", FieldKind::Float),
];

const RECOMMENDATIONS: &[Field] = &[
    Field::req("seeds", FieldKind::EntityArray(Entity::RecommendationSeed)),
    Field::req("tracks", FieldKind::EntityArray(Entity::TrackSimplified)),
];

const RECOMMENDATION_SEED: &[Field] = &[
    Field::req("afterFilteringSize", FieldKind::UInt),
    Field::req("afterRelinkingSize", FieldKind::UInt),
    Field::req_null("href", FieldKind::String),
    Field::req("id", FieldKind::String),
    Field::req("initialPoolSize", FieldKind::UInt),
    Field::req("type", FieldKind::Literal(&["artist", "track", "genre"])),
];

/// Canonical field table for an entity.
pub(crate) fn shape(entity: Entity) -> &'static [Field] {
    match entity {
        Entity::AlbumSimplified => ALBUM_SIMPLIFIED,
        Entity::AlbumFull => ALBUM_FULL,
        Entity::ArtistSimplified => ARTIST_SIMPLIFIED,
        Entity::ArtistFull => ARTIST_FULL,
        Entity::TrackSimplified => TRACK_SIMPLIFIED,
        Entity::TrackFull => TRACK_FULL,
        Entity::TrackLink => TRACK_LINK,
        Entity::PlaylistSimplified => PLAYLIST_SIMPLIFIED,
        Entity::PlaylistFull => PLAYLIST_FULL,
        Entity::PlaylistTracksRef => PLAYLIST_TRACKS_REF,
        Entity::PlaylistTrack => PLAYLIST_TRACK,
        Entity::SavedTrack => SAVED_TRACK,
        Entity::SavedAlbum => SAVED_ALBUM,
        Entity::UserPublic => USER_PUBLIC,
        Entity::UserPrivate => USER_PRIVATE,
        Entity::Category => CATEGORY,
        Entity::Copyright => COPYRIGHT,
        Entity::Image => IMAGE,
        Entity::Followers => FOLLOWERS,
        Entity::ExternalIds => EXTERNAL_IDS,
        Entity::ExternalUrls => EXTERNAL_URLS,
        Entity::AudioFeatures => AUDIO_FEATURES,
        Entity::Recommendations => RECOMMENDATIONS,
        Entity::RecommendationSeed => RECOMMENDATION_SEED,
        Entity::Cursor => CURSOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_superset(simplified: Entity, full: Entity) {
        for field in shape(simplified) {
            let counterpart = shape(full)
                .iter()
                .find(|f| f.name == field.name)
                .unwrap_or_else(|| {
                    panic!(
                        "{:?} is missing `{}` declared on {:?}",
                        full, field.name, simplified
                    )
                });
            assert_eq!(
                counterpart.kind, field.kind,
                "`{}` differs in kind between {:?} and {:?}",
                field.name, simplified, full
            );
            assert_eq!(
                counterpart.required, field.required,
                "`{}` differs in optionality between {:?} and {:?}",
                field.name, simplified, full
            );
        }
    }

    #[test]
    fn test_full_tables_are_supersets() {
        assert_superset(Entity::AlbumSimplified, Entity::AlbumFull);
        assert_superset(Entity::ArtistSimplified, Entity::ArtistFull);
        assert_superset(Entity::TrackSimplified, Entity::TrackFull);
        assert_superset(Entity::UserPublic, Entity::UserPrivate);
    }

    #[test]
    fn test_every_entity_has_a_shape() {
        for &entity in Entity::ALL {
            assert!(!shape(entity).is_empty(), "{:?} has an empty table", entity);
        }
    }
}
