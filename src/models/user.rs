//! User profile models.

use serde::{Deserialize, Serialize};

use super::common::{ExternalUrls, Followers, Image, ObjectType};

/// Publicly visible user profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublicUser {
    /// Display name, when the user has set one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Known external URLs.
    pub external_urls: ExternalUrls,

    /// Follower information. Omitted when the user is embedded in other
    /// objects (e.g. as a playlist track adder).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers: Option<Followers>,

    /// API endpoint for the user's profile.
    pub href: String,

    /// Spotify ID of the user.
    pub id: String,

    /// Profile images. Omitted on some embeddings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,

    /// Object type tag, always "user".
    #[serde(rename = "type")]
    pub type_: ObjectType,

    /// Spotify URI of the user.
    pub uri: String,
}

/// The authenticated user's own profile.
///
/// The additional fields are scope-gated: the server omits them unless
/// the access token carries the matching `user-read-*` scopes, so all of
/// them are optional here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrivateUser {
    /// The public field set, flattened into this object on the wire.
    #[serde(flatten)]
    pub public: PublicUser,

    /// Date of birth, requires `user-read-birthdate`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,

    /// ISO 3166-1 alpha-2 country, requires `user-read-private`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Email address, requires `user-read-email`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Subscription level, requires `user-read-private`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_public_user_minimal_embedding() {
        // The playlist-adder embedding carries neither followers nor images.
        let user: PublicUser = serde_json::from_value(json!({
            "external_urls": { "spotify": "https://open.spotify.com/user/jmperezperez" },
            "href": "https://api.spotify.com/v1/users/jmperezperez",
            "id": "jmperezperez",
            "type": "user",
            "uri": "spotify:user:jmperezperez"
        }))
        .unwrap();
        assert_eq!(user.display_name, None);
        assert_eq!(user.followers, None);
    }

    #[test]
    fn test_private_user_without_scoped_fields() {
        let user: PrivateUser = serde_json::from_value(json!({
            "display_name": "JM Wizzler",
            "external_urls": { "spotify": "https://open.spotify.com/user/wizzler" },
            "followers": { "href": null, "total": 3829 },
            "href": "https://api.spotify.com/v1/users/wizzler",
            "id": "wizzler",
            "images": [],
            "type": "user",
            "uri": "spotify:user:wizzler"
        }))
        .unwrap();
        assert_eq!(user.email, None);
        assert_eq!(user.public.id, "wizzler");
    }
}
