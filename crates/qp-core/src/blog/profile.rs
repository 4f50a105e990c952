use serde::{Deserialize, Serialize};

use super::post::Post;

/// The authenticated user's own profile, or another user's public one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub github: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    /// Base64-encoded picture bytes, passed through to the webview.
    pub profile_picture: Option<String>,
}

/// Body of a profile update; the service expects every field on each PUT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub bio: String,
    pub github: String,
    pub instagram: String,
    pub linkedin: String,
    pub twitter: String,
}

/// Another user's profile page: their profile plus their posts,
/// aggregated by a single endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UserProfileView {
    pub profile: UserProfile,
    pub posts: Vec<Post>,
}

/// A row in the user-search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSummary {
    pub id: u64,
    pub username: String,
    pub full_name: String,
    pub profile_picture: Option<String>,
}
