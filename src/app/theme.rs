// src/app/theme.rs
use crate::db::{KeyValueStore, Result, THEME_KEY};
use crate::models::Theme;

pub struct ThemeStore<S> {
    store: S,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn current(&self) -> Result<Theme> {
        Ok(self.store.get_json(THEME_KEY)?.unwrap_or_default())
    }

    pub fn toggle(&self) -> Result<Theme> {
        let next = self.current()?.toggle();
        self.store.set_json(THEME_KEY, &next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    #[test]
    fn test_defaults_to_dark_and_toggle_persists() {
        let store = MemoryStore::new();
        let themes = ThemeStore::new(&store);
        assert_eq!(themes.current().unwrap(), Theme::Dark);

        assert_eq!(themes.toggle().unwrap(), Theme::Light);
        assert_eq!(ThemeStore::new(&store).current().unwrap(), Theme::Light);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("\"light\""));

        assert_eq!(themes.toggle().unwrap(), Theme::Dark);
    }
}
