//! Audio features model.

use serde::{Deserialize, Serialize};

use super::common::ObjectType;

/// Audio feature analysis of a single track.
///
/// Confidence-style measures (`acousticness`, `danceability`, `energy`,
/// `instrumentalness`, `liveness`, `speechiness`, `valence`) range from
/// 0.0 to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AudioFeatures {
    /// Confidence the track is acoustic.
    pub acousticness: f32,

    /// URL of the full audio analysis for the track.
    pub analysis_url: String,

    /// How suitable the track is for dancing.
    pub danceability: f32,

    /// Duration in milliseconds.
    pub duration_ms: u32,

    /// Perceptual measure of intensity and activity.
    pub energy: f32,

    /// Spotify ID of the track.
    pub id: String,

    /// Confidence the track contains no vocals.
    pub instrumentalness: f32,

    /// Estimated key of the track using pitch class notation, -1 if unknown.
    pub key: i32,

    /// Confidence an audience is present in the recording.
    pub liveness: f32,

    /// Overall loudness in decibels.
    pub loudness: f32,

    /// Modality: 1 for major, 0 for minor.
    pub mode: i32,

    /// Confidence the track consists of spoken words.
    pub speechiness: f32,

    /// Estimated tempo in beats per minute.
    pub tempo: f32,

    /// Estimated number of beats per bar.
    pub time_signature: i32,

    /// API endpoint for full track details.
    pub track_href: String,

    /// Object type tag, always "audio_features".
    #[serde(rename = "type")]
    pub type_: ObjectType,

    /// Spotify URI of the track.
    pub uri: String,

    /// Musical positiveness conveyed by the track.
    pub valence: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_audio_features_decodes() {
        let features: AudioFeatures = serde_json::from_value(json!({
            "acousticness": 0.00242,
            "analysis_url": "https://api.spotify.com/v1/audio-analysis/2takcwOaAZWiXQijPHIx7B",
            "danceability": 0.585,
            "duration_ms": 237040,
            "energy": 0.842,
            "id": "2takcwOaAZWiXQijPHIx7B",
            "instrumentalness": 0.00686,
            "key": 9,
            "liveness": 0.0866,
            "loudness": -5.883,
            "mode": 0,
            "speechiness": 0.0556,
            "tempo": 118.211,
            "time_signature": 4,
            "track_href": "https://api.spotify.com/v1/tracks/2takcwOaAZWiXQijPHIx7B",
            "type": "audio_features",
            "uri": "spotify:track:2takcwOaAZWiXQijPHIx7B",
            "valence": 0.428
        }))
        .unwrap();
        assert_eq!(features.key, 9);
        assert_eq!(features.type_, ObjectType::AudioFeatures);
        assert!((features.tempo - 118.211).abs() < 1e-3);
    }
}
