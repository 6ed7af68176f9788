// ── Domain model ──

use serde::{Deserialize, Serialize};

/// One amphibian entry, as shown to the user.
///
/// `name` doubles as the display key; uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amphibian {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub image_url: String,
}
