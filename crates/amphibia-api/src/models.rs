// Wire types for the amphibians endpoint.

use serde::{Deserialize, Serialize};

/// One element of the JSON array returned by `GET /amphibians`.
///
/// Field names follow the wire format; `type` is a Rust keyword and is
/// exposed as `kind`, `imgSrc` as `img_src`. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmphibianRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(rename = "imgSrc")]
    pub img_src: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_field_names() {
        let json = r#"{
            "name": "Great Basin Spadefoot",
            "type": "Toad",
            "description": "This toad spends most of its life underground.",
            "imgSrc": "https://example.test/great-basin-spadefoot.png"
        }"#;
        let record: AmphibianRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, "Toad");
        assert_eq!(
            record.img_src,
            "https://example.test/great-basin-spadefoot.png"
        );
    }

    #[test]
    fn missing_field_is_rejected() {
        let json = r#"{"name": "Frog", "type": "Anura", "description": "..."}"#;
        assert!(serde_json::from_str::<AmphibianRecord>(json).is_err());
    }
}
