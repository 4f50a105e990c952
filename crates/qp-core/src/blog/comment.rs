use serde::{Deserialize, Serialize};

/// A comment under a post.
///
/// The service capitalizes the timestamp keys (`created_Date`,
/// `created_Time`); the renames below keep the wire format intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Comment {
    pub id: u64,
    pub content: String,
    #[serde(rename = "created_Date")]
    pub created_date: Option<String>,
    #[serde(rename = "created_Time")]
    pub created_time: Option<String>,
    pub user: Option<CommentAuthor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentAuthor {
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub profile_picture: Option<String>,
}
