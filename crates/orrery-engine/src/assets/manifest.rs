use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Texture manifest: overrides where the host fetches each named texture.
/// Loaded from a JSON string at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextureManifest {
    /// Prefix joined in front of every relative texture path (e.g. "./img/").
    #[serde(default)]
    pub base_path: Option<String>,
    /// Named textures: name → file descriptor.
    #[serde(default)]
    pub textures: HashMap<String, TextureDescriptor>,
}

/// Describes a single image file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Path relative to the base path (e.g. "earth_daymap.jpg").
    pub path: String,
}

impl TextureManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_manifest() {
        let json = r#"{
            "base_path": "/assets/planets/",
            "textures": {
                "earth": { "path": "earth_nightmap.jpg" },
                "stars": { "path": "milky_way.jpg" }
            }
        }"#;
        let manifest = TextureManifest::from_json(json).unwrap();
        assert_eq!(manifest.base_path.as_deref(), Some("/assets/planets/"));
        assert_eq!(manifest.textures.len(), 2);
        assert_eq!(manifest.textures["earth"].path, "earth_nightmap.jpg");
    }

    #[test]
    fn every_field_is_optional() {
        let manifest = TextureManifest::from_json("{}").unwrap();
        assert!(manifest.base_path.is_none());
        assert!(manifest.textures.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(TextureManifest::from_json(r#"{"textures": [1, 2]}"#).is_err());
        assert!(TextureManifest::from_json("not json").is_err());
    }
}
