//! Recommendation models.

use serde::{Deserialize, Serialize};

use super::track::SimplifiedTrack;

/// Kind of seed a recommendation was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedType {
    /// Seeded by an artist ID.
    Artist,
    /// Seeded by a track ID.
    Track,
    /// Seeded by a genre name.
    Genre,
}

/// One seed that contributed to a recommendation response.
///
/// The pool-size fields use the API's camelCase names verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationSeed {
    /// Tracks left after min/max filters were applied.
    #[serde(rename = "afterFilteringSize")]
    pub after_filtering_size: u32,

    /// Tracks left after relinking for the requesting market.
    #[serde(rename = "afterRelinkingSize")]
    pub after_relinking_size: u32,

    /// API endpoint for the seed object, null for genre seeds.
    pub href: Option<String>,

    /// ID or genre name the seed was built from.
    pub id: String,

    /// Tracks available from this seed before filtering.
    #[serde(rename = "initialPoolSize")]
    pub initial_pool_size: u32,

    /// Whether this seed was an artist, track, or genre.
    #[serde(rename = "type")]
    pub kind: SeedType,
}

/// A recommendation response: the seeds used and the tracks produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendations {
    /// Seeds the recommendations were generated from.
    pub seeds: Vec<RecommendationSeed>,

    /// Recommended tracks, ordered by relevance.
    pub tracks: Vec<SimplifiedTrack>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seed_type_closed_set() {
        let seed: RecommendationSeed = serde_json::from_value(json!({
            "afterFilteringSize": 380,
            "afterRelinkingSize": 365,
            "href": "https://api.spotify.com/v1/artists/4NHQUGzhtTLFvgF5SZesLK",
            "id": "4NHQUGzhtTLFvgF5SZesLK",
            "initialPoolSize": 500,
            "type": "artist"
        }))
        .unwrap();
        assert_eq!(seed.kind, SeedType::Artist);

        let bad = serde_json::from_value::<RecommendationSeed>(json!({
            "afterFilteringSize": 0,
            "afterRelinkingSize": 0,
            "href": null,
            "id": "podcast",
            "initialPoolSize": 0,
            "type": "podcast"
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_genre_seed_null_href() {
        let seed: RecommendationSeed = serde_json::from_value(json!({
            "afterFilteringSize": 219,
            "afterRelinkingSize": 219,
            "href": null,
            "id": "chill",
            "initialPoolSize": 250,
            "type": "genre"
        }))
        .unwrap();
        assert_eq!(seed.href, None);
        assert_eq!(seed.kind, SeedType::Genre);
    }
}
