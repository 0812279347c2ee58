use std::collections::HashMap;
use serde::Serialize;
use crate::assets::manifest::TextureManifest;

/// Default prefix for texture files, relative to the host page.
pub const DEFAULT_BASE_PATH: &str = "./img/";

/// Handle to a registered texture. Written into mesh instances as a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TextureId(pub u32);

#[derive(Debug, Clone, Serialize)]
struct TextureEntry {
    id: u32,
    name: String,
    #[serde(skip)]
    file: String,
    path: String,
}

/// Registry of named textures the host should load.
/// Ids are dense and assigned in registration order.
#[derive(Debug, Clone)]
pub struct TextureRegistry {
    base_path: String,
    entries: Vec<TextureEntry>,
    by_name: HashMap<String, TextureId>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::with_base_path(DEFAULT_BASE_PATH)
    }

    pub fn with_base_path(base_path: &str) -> Self {
        Self {
            base_path: base_path.to_string(),
            entries: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Register `file` under `name`. Registering a known name returns its
    /// existing id and keeps the first file.
    pub fn register(&mut self, name: &str, file: &str) -> TextureId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = TextureId(self.entries.len() as u32);
        self.entries.push(TextureEntry {
            id: id.0,
            name: name.to_string(),
            file: file.to_string(),
            path: format!("{}{}", self.base_path, file),
        });
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Look up a texture by name. Returns None if not registered.
    pub fn get(&self, name: &str) -> Option<TextureId> {
        self.by_name.get(name).copied()
    }

    /// Full path the host should fetch for `id`.
    pub fn path(&self, id: TextureId) -> Option<&str> {
        self.entries.get(id.0 as usize).map(|e| e.path.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply manifest overrides. A new base path re-prefixes every entry;
    /// listed textures replace the file of a known name or register a new one.
    /// Ids of existing textures never change.
    pub fn apply_manifest(&mut self, manifest: &TextureManifest) {
        if let Some(base) = &manifest.base_path {
            self.base_path = base.clone();
        }
        for (name, desc) in &manifest.textures {
            match self.by_name.get(name) {
                Some(id) => self.entries[id.0 as usize].file = desc.path.clone(),
                None => {
                    self.register(name, &desc.path);
                }
            }
        }
        for entry in &mut self.entries {
            entry.path = format!("{}{}", self.base_path, entry.file);
        }
    }

    /// JSON array of `{id, name, path}` for the host loader.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_assigns_dense_ids() {
        let mut reg = TextureRegistry::new();
        let sun = reg.register("sun", "sun.jpg");
        let earth = reg.register("earth", "earth_daymap.jpg");
        assert_eq!(sun, TextureId(0));
        assert_eq!(earth, TextureId(1));
        assert_eq!(reg.path(earth), Some("./img/earth_daymap.jpg"));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn register_is_idempotent_by_name() {
        let mut reg = TextureRegistry::new();
        let a = reg.register("moon", "moon.jpg");
        let b = reg.register("moon", "other.jpg");
        assert_eq!(a, b);
        assert_eq!(reg.path(a), Some("./img/moon.jpg"));
    }

    #[test]
    fn unknown_returns_none() {
        let reg = TextureRegistry::new();
        assert!(reg.get("pluto").is_none());
        assert!(reg.path(TextureId(7)).is_none());
    }

    #[test]
    fn manifest_overrides_keep_ids() {
        let mut reg = TextureRegistry::new();
        let earth = reg.register("earth", "earth_daymap.jpg");
        let mars = reg.register("mars", "mars.jpg");
        let manifest = TextureManifest::from_json(r#"{
            "base_path": "/cdn/",
            "textures": { "earth": { "path": "earth_night.jpg" }, "ring": { "path": "ring.png" } }
        }"#).unwrap();
        reg.apply_manifest(&manifest);

        assert_eq!(reg.get("earth"), Some(earth));
        assert_eq!(reg.path(earth), Some("/cdn/earth_night.jpg"));
        assert_eq!(reg.path(mars), Some("/cdn/mars.jpg"));
        let ring = reg.get("ring").expect("ring should be registered");
        assert_eq!(ring, TextureId(2));
        assert_eq!(reg.path(ring), Some("/cdn/ring.png"));
    }

    #[test]
    fn json_lists_entries_in_id_order() {
        let mut reg = TextureRegistry::new();
        reg.register("sun", "sun.jpg");
        reg.register("stars", "stars.jpg");
        let json = reg.to_json().unwrap();
        assert_eq!(
            json,
            r#"[{"id":0,"name":"sun","path":"./img/sun.jpg"},{"id":1,"name":"stars","path":"./img/stars.jpg"}]"#
        );
    }
}
