use serde::{Deserialize, Serialize};

/// The post under composition. Serialized as the `dto` part of the
/// multipart create-post request, so field names follow the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    #[serde(rename = "picture_name")]
    pub picture_name: Option<String>,
    pub image_type: Option<String>,
}

/// Partial draft edit; absent fields stay untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl DraftUpdate {
    pub fn apply(self, draft: &mut PostDraft) {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(content) = self.content {
            draft.content = content;
        }
    }
}

/// An attachment staged for upload.
///
/// The bytes stay in memory and are only transmitted at final submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureFile {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

/// Media type guessed from a file name extension.
pub fn media_type_for(file_name: &str) -> String {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
    .to_string()
}
