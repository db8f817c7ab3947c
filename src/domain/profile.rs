//! Profile header section: name, country, website and an optional photo.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

/// Personal information shown in the résumé header.
///
/// The photo is stored inline as a `data:` URI so the whole section stays a
/// single JSON value in the durable store; it is never decoded by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub country: String,
    pub website: String,
    pub photo: Option<String>,
}

impl PersonalInfo {
    /// Attach a profile photo from raw image bytes.
    ///
    /// Encodes the bytes as a base64 `data:` URI. An empty selection or a
    /// missing MIME type is treated as a no-op, not an error.
    pub fn set_photo_from_bytes(&mut self, mime: &str, bytes: &[u8]) {
        if mime.trim().is_empty() || bytes.is_empty() {
            return;
        }
        self.photo = Some(format!("data:{};base64,{}", mime.trim(), BASE64.encode(bytes)));
    }

    /// Remove the profile photo.
    pub fn clear_photo(&mut self) {
        self.photo = None;
    }
}

impl Default for PersonalInfo {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            country: "Your Country".to_string(),
            website: "https://example.com".to_string(),
            photo: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_photo_builds_data_uri() {
        let mut info = PersonalInfo::default();
        info.set_photo_from_bytes("image/png", &[0x89, 0x50, 0x4e, 0x47]);
        let photo = info.photo.unwrap();
        assert!(photo.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_set_photo_empty_selection_is_noop() {
        let mut info = PersonalInfo::default();
        info.set_photo_from_bytes("image/png", &[]);
        assert!(info.photo.is_none());

        info.set_photo_from_bytes("", &[1, 2, 3]);
        assert!(info.photo.is_none());
    }

    #[test]
    fn test_clear_photo() {
        let mut info = PersonalInfo::default();
        info.set_photo_from_bytes("image/jpeg", &[1, 2, 3]);
        assert!(info.photo.is_some());
        info.clear_photo();
        assert!(info.photo.is_none());
    }

    #[test]
    fn test_serde_field_names() {
        let info = PersonalInfo::default();
        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("name").is_some());
        assert!(json.get("country").is_some());
        assert!(json.get("website").is_some());
        assert!(json.get("photo").is_some());
    }
}
