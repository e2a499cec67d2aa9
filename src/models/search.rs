//! Search request parameters.
//!
//! The only request-parameter shapes the API defines; everything else in
//! this crate describes responses.

use serde::{Deserialize, Serialize};

/// Item types a search can run across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Search for albums.
    Album,
    /// Search for artists.
    Artist,
    /// Search for playlists.
    Playlist,
    /// Search for tracks.
    Track,
}

impl SearchType {
    /// Wire name of this search type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Album => "album",
            SearchType::Artist => "artist",
            SearchType::Playlist => "playlist",
            SearchType::Track => "track",
        }
    }
}

/// Parameters for the search endpoint.
///
/// `q` and `types` are required by the API; `market`, `limit`, and
/// `offset` are optional. Limit defaults to 20 server-side (max 50),
/// offset to 0 (max 100000).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchQuery {
    /// Search keywords, with optional field filters and operators.
    pub q: String,

    /// Item types to search across.
    pub types: Vec<SearchType>,

    /// ISO 3166-1 alpha-2 country code, or "from_token".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,

    /// Maximum number of results per type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Index of the first result to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl SearchQuery {
    /// Create a query over the given types.
    pub fn new<S: Into<String>>(q: S, types: &[SearchType]) -> Self {
        Self {
            q: q.into(),
            types: types.to_vec(),
            ..Default::default()
        }
    }

    /// Create a track-only query.
    pub fn tracks<S: Into<String>>(q: S) -> Self {
        Self::new(q, &[SearchType::Track])
    }

    /// Create an album-only query.
    pub fn albums<S: Into<String>>(q: S) -> Self {
        Self::new(q, &[SearchType::Album])
    }

    /// Restrict results to a market.
    pub fn market<S: Into<String>>(mut self, market: S) -> Self {
        self.market = Some(market.into());
        self
    }

    /// Set the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the page offset.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Render as query pairs for an HTTP layer, with `type` as the
    /// comma-separated list the endpoint expects.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("q", self.q.clone())];

        let types = self
            .types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(",");
        pairs.push(("type", types));

        if let Some(market) = &self.market {
            pairs.push(("market", market.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_comma_separated_types() {
        let query = SearchQuery::new("nirvana", &[SearchType::Artist, SearchType::Album]);
        let pairs = query.to_query_pairs();
        assert_eq!(pairs[0], ("q", "nirvana".to_string()));
        assert_eq!(pairs[1], ("type", "artist,album".to_string()));
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_query_builder_options() {
        let query = SearchQuery::tracks("here comes the sun")
            .market("SE")
            .limit(10)
            .offset(20);
        let pairs = query.to_query_pairs();
        assert!(pairs.contains(&("market", "SE".to_string())));
        assert!(pairs.contains(&("limit", "10".to_string())));
        assert!(pairs.contains(&("offset", "20".to_string())));
    }
}
