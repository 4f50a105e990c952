use serde::{Deserialize, Serialize};

/// A post as served by the feed and user-profile endpoints.
///
/// Field names follow the service wire format, including its irregular
/// `picture_content` spelling. Picture bytes arrive base64-encoded inside
/// the JSON and pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author_name: String,
    #[serde(rename = "picture_content")]
    pub picture_content: Option<String>,
    #[serde(rename = "picture_name")]
    pub picture_name: Option<String>,
    pub image_type: Option<String>,
    pub created_date: Option<String>,
    pub created_time: Option<String>,
}

/// Display form of a post timestamp: `"<date> | <time>"`, with placeholder
/// words when the service omitted either half.
pub fn display_timestamp(date: Option<&str>, time: Option<&str>) -> String {
    let date = match date {
        Some(d) if !d.is_empty() => d,
        _ => "Date",
    };
    let time = match time {
        Some(t) if !t.is_empty() => t,
        _ => "Time",
    };
    format!("{} | {}", date, time)
}

#[cfg(test)]
mod tests {
    use super::display_timestamp;

    #[test]
    fn display_timestamp_joins_both_halves() {
        assert_eq!(
            display_timestamp(Some("2025-06-01"), Some("10:42")),
            "2025-06-01 | 10:42"
        );
    }

    #[test]
    fn display_timestamp_falls_back_to_placeholders() {
        assert_eq!(display_timestamp(None, None), "Date | Time");
        assert_eq!(display_timestamp(Some(""), Some("10:42")), "Date | 10:42");
    }
}
