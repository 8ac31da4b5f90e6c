use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const THEME_KEY: &str = "theme";
pub const LANGUAGE_KEY: &str = "language";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("Unknown theme '{0}'")]
    UnknownTheme(String),
    #[error("Unsupported language '{0}'")]
    UnknownLanguage(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Resolves the host colour-scheme signal, if there is one.
    pub fn from_prefers_dark(prefers_dark: Option<bool>) -> Self {
        match prefers_dark {
            Some(true) => Self::Dark,
            Some(false) => Self::Light,
            None => Self::default(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(PreferenceError::UnknownTheme(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::De];

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::De => "Deutsch",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.code() == s)
            .ok_or_else(|| PreferenceError::UnknownLanguage(s.to_string()))
    }
}

/// String slots the preferences persist to. Writes are best-effort.
pub trait PreferenceBackend {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&mut self, key: &str, value: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceBackend for MemoryBackend {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn store(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Theme and language preferences, read once from the backend and written
/// through on every change.
#[derive(Debug, Clone)]
pub struct PreferenceStore<B> {
    backend: B,
    theme: Theme,
    language: Language,
}

fn load_value<T, B>(backend: &B, key: &str) -> Option<T>
where
    T: FromStr<Err = PreferenceError>,
    B: PreferenceBackend,
{
    let raw = backend.load(key)?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("ignoring stored {key}: {e}");
            None
        }
    }
}

impl<B: PreferenceBackend> PreferenceStore<B> {
    /// Starts from the defaults without reading the backend.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            theme: Theme::default(),
            language: Language::default(),
        }
    }

    /// A stored theme wins over `prefers_dark`, the host colour-scheme signal.
    pub fn load(backend: B, prefers_dark: Option<bool>) -> Self {
        let mut store = Self::new(backend);
        store.reload(prefers_dark);
        store
    }

    /// Re-reads both preferences from the backend. Nothing is written back.
    pub fn reload(&mut self, prefers_dark: Option<bool>) {
        self.theme = load_value(&self.backend, THEME_KEY)
            .unwrap_or_else(|| Theme::from_prefers_dark(prefers_dark));
        self.language = load_value(&self.backend, LANGUAGE_KEY).unwrap_or_default();
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.backend.store(THEME_KEY, theme.as_str());
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.backend.store(LANGUAGE_KEY, language.code());
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_theme_persists() {
        let mut store = PreferenceStore::load(MemoryBackend::new(), Some(false));
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.backend().load(THEME_KEY), None);

        assert_eq!(store.toggle_theme(), Theme::Dark);
        assert_eq!(store.backend().load(THEME_KEY).as_deref(), Some("dark"));

        assert_eq!(store.toggle_theme(), Theme::Light);
        assert_eq!(store.backend().load(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_initial_theme() {
        let store = PreferenceStore::load(MemoryBackend::new(), None);
        assert_eq!(store.theme(), Theme::Light);

        let store = PreferenceStore::load(MemoryBackend::new(), Some(true));
        assert_eq!(store.theme(), Theme::Dark);

        // Stored value wins over the colour-scheme signal
        let backend = MemoryBackend::new().with_entry(THEME_KEY, "light");
        let store = PreferenceStore::load(backend, Some(true));
        assert_eq!(store.theme(), Theme::Light);

        // Garbage is ignored
        let backend = MemoryBackend::new().with_entry(THEME_KEY, "sepia");
        let store = PreferenceStore::load(backend, Some(true));
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_reload_applies_stored_values() {
        let backend = MemoryBackend::new()
            .with_entry(THEME_KEY, "dark")
            .with_entry(LANGUAGE_KEY, "de");
        let mut store = PreferenceStore::new(backend);
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.language(), Language::En);

        store.reload(Some(false));
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(store.language(), Language::De);
        // Reloading doesn't write anything back
        assert_eq!(store.backend().load(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(store.backend().load(LANGUAGE_KEY).as_deref(), Some("de"));

        // The first toggle after a reload flips the stored theme
        assert_eq!(store.toggle_theme(), Theme::Light);
        assert_eq!(store.backend().load(THEME_KEY).as_deref(), Some("light"));

        // Nothing stored falls back to the colour-scheme signal
        let mut store = PreferenceStore::new(MemoryBackend::new());
        store.reload(Some(true));
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(store.backend().load(THEME_KEY), None);
    }

    #[test]
    fn test_language() {
        let store = PreferenceStore::load(MemoryBackend::new(), None);
        assert_eq!(store.language(), Language::En);

        let backend = MemoryBackend::new().with_entry(LANGUAGE_KEY, "de");
        let mut store = PreferenceStore::load(backend, None);
        assert_eq!(store.language(), Language::De);

        store.set_language(Language::En);
        assert_eq!(store.language(), Language::En);
        assert_eq!(store.backend().load(LANGUAGE_KEY).as_deref(), Some("en"));

        let backend = MemoryBackend::new().with_entry(LANGUAGE_KEY, "fr");
        let store = PreferenceStore::load(backend, None);
        assert_eq!(store.language(), Language::En);
    }

    #[test]
    fn test_preferences_are_independent() {
        let mut store = PreferenceStore::load(MemoryBackend::new(), None);
        store.set_language(Language::De);
        store.set_theme(Theme::Dark);
        assert_eq!(store.language(), Language::De);
        assert_eq!(store.theme(), Theme::Dark);
        store.toggle_theme();
        assert_eq!(store.language(), Language::De);
    }

    #[test]
    fn test_parse_values() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(
            "Dark".parse::<Theme>(),
            Err(PreferenceError::UnknownTheme("Dark".to_string()))
        );
        assert_eq!("de".parse::<Language>(), Ok(Language::De));
        assert!("xx".parse::<Language>().is_err());
        for lang in Language::ALL {
            assert_eq!(lang.to_string().parse::<Language>(), Ok(lang));
        }
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
