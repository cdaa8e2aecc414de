// src/app/presets.rs
use crate::db::{KeyValueStore, Result, PRESETS_KEY};
use crate::models::{GenerationConfig, Preset};

/// The three presets written on first access.
pub fn default_presets() -> Vec<Preset> {
    vec![
        Preset {
            name: "High Security".to_string(),
            config: GenerationConfig {
                length: 24,
                include_uppercase: true,
                include_lowercase: true,
                include_numbers: true,
                include_symbols: true,
                exclude_ambiguous: true,
                prevent_sequential: true,
                prevent_repeat: true,
            },
        },
        Preset {
            name: "Balanced".to_string(),
            config: GenerationConfig {
                length: 16,
                include_uppercase: true,
                include_lowercase: true,
                include_numbers: true,
                include_symbols: true,
                exclude_ambiguous: false,
                prevent_sequential: false,
                prevent_repeat: false,
            },
        },
        Preset {
            name: "PIN Mode".to_string(),
            config: GenerationConfig {
                length: 6,
                include_uppercase: false,
                include_lowercase: false,
                include_numbers: true,
                include_symbols: false,
                exclude_ambiguous: false,
                prevent_sequential: true,
                prevent_repeat: true,
            },
        },
    ]
}

/// Named generation configs, upserted by name.
pub struct PresetStore<S> {
    store: S,
}

impl<S: KeyValueStore> PresetStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns all presets, seeding the defaults if nothing was ever stored.
    /// An empty stored list is kept as-is.
    pub fn list(&self) -> Result<Vec<Preset>> {
        if let Some(presets) = self.store.get_json(PRESETS_KEY)? {
            return Ok(presets);
        }

        let defaults = default_presets();
        self.store.set_json(PRESETS_KEY, &defaults)?;
        log::info!("Seeded {} default presets", defaults.len());
        Ok(defaults)
    }

    pub fn save(&self, name: &str, config: &GenerationConfig) -> Result<()> {
        let mut presets = self.list()?;

        match presets.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.config = config.clone(),
            None => presets.push(Preset { name: name.to_string(), config: config.clone() }),
        }

        self.store.set_json(PRESETS_KEY, &presets)
    }

    pub fn load(&self, name: &str) -> Result<Option<GenerationConfig>> {
        Ok(self
            .list()?
            .into_iter()
            .find(|p| p.name == name)
            .map(|p| p.config))
    }

    /// Removes the preset. Returns false if no preset had that name.
    pub fn delete(&self, name: &str) -> Result<bool> {
        let mut presets = self.list()?;
        let before = presets.len();
        presets.retain(|p| p.name != name);

        self.store.set_json(PRESETS_KEY, &presets)?;
        Ok(presets.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    #[test]
    fn test_seeds_defaults_on_first_access() {
        let store = MemoryStore::new();
        let presets = PresetStore::new(&store);

        let names: Vec<String> = presets.list().unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["High Security", "Balanced", "PIN Mode"]);
        assert!(store.get(PRESETS_KEY).unwrap().is_some());

        let pin = presets.load("PIN Mode").unwrap().unwrap();
        assert_eq!(pin.length, 6);
        assert!(pin.include_numbers && !pin.include_lowercase);
        assert!(pin.prevent_sequential && pin.prevent_repeat);
    }

    #[test]
    fn test_never_reseeds_after_delete() {
        let store = MemoryStore::new();
        let presets = PresetStore::new(&store);
        for preset in default_presets() {
            assert!(presets.delete(&preset.name).unwrap());
        }

        assert!(presets.list().unwrap().is_empty());
        assert!(presets.list().unwrap().is_empty());
    }

    #[test]
    fn test_save_upserts_by_name() {
        let store = MemoryStore::new();
        let presets = PresetStore::new(&store);

        let mut config = GenerationConfig::default();
        config.length = 40;
        presets.save("Mine", &config).unwrap();
        config.length = 42;
        presets.save("Mine", &config).unwrap();
        presets.save("Balanced", &config).unwrap();

        let all = presets.list().unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[3].name, "Mine");
        assert_eq!(presets.load("Mine").unwrap().unwrap().length, 42);
        assert_eq!(presets.load("Balanced").unwrap().unwrap().length, 42);
    }

    #[test]
    fn test_load_and_delete_missing() {
        let store = MemoryStore::new();
        let presets = PresetStore::new(&store);
        assert_eq!(presets.load("Nope").unwrap(), None);
        assert!(!presets.delete("Nope").unwrap());
        assert_eq!(presets.list().unwrap().len(), 3);
    }

    #[test]
    fn test_reads_original_json_layout() {
        let store = MemoryStore::new();
        store
            .set(
                PRESETS_KEY,
                r#"[{"name":"Legacy","config":{"length":9,"includeUppercase":false,"includeLowercase":true,"includeNumbers":false,"includeSymbols":false,"excludeAmbiguous":true,"preventSequential":false,"preventRepeat":true}}]"#,
            )
            .unwrap();

        let presets = PresetStore::new(&store);
        let legacy = presets.load("Legacy").unwrap().unwrap();
        assert_eq!(legacy.length, 9);
        assert!(legacy.exclude_ambiguous && legacy.prevent_repeat);
    }
}
