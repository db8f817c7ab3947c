//! Contact section: reachability links, no format validation enforced.

use serde::{Deserialize, Serialize};

/// Contact details shown at the bottom of the résumé.
///
/// All fields are free-form strings; malformed URLs or phone numbers are the
/// user's own business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub website: String,
    pub online_cv: String,
    pub email: String,
    pub phone: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            website: "https://www.example.com".to_string(),
            online_cv: "https://www.example.com/cv".to_string(),
            email: "mail@example.com".to_string(),
            phone: "+1234567890".to_string(),
        }
    }
}
