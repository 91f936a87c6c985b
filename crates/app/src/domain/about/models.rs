//! About-post Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Upper bound on post content length, in characters.
pub const MAX_CONTENT_CHARS: usize = 2000;

/// About-post Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutPost {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub product_id: String,

    #[serde(default)]
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

/// New About-post Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewAboutPost {
    pub product_id: String,
    pub content: String,
    pub author: Option<String>,
}
