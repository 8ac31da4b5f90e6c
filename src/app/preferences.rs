use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::{storage::use_local_storage, use_preferred_dark};

#[cfg(feature = "hydrate")]
use crate::preferences::{PreferenceBackend, LANGUAGE_KEY, THEME_KEY};
#[cfg(not(feature = "hydrate"))]
use crate::preferences::MemoryBackend;
use crate::preferences::{Language, PreferenceStore, Theme};

#[cfg(feature = "hydrate")]
type StorageSlot = (Signal<String>, WriteSignal<String>);

/// Browser `localStorage`, one slot per preference key.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
pub struct LocalStorageBackend {
    theme: StorageSlot,
    language: StorageSlot,
}

#[cfg(feature = "hydrate")]
impl LocalStorageBackend {
    pub fn new() -> Self {
        let (theme, set_theme, _) = use_local_storage::<String, FromToStringCodec>(THEME_KEY);
        let (language, set_language, _) =
            use_local_storage::<String, FromToStringCodec>(LANGUAGE_KEY);
        Self {
            theme: (theme, set_theme),
            language: (language, set_language),
        }
    }

    fn slot(&self, key: &str) -> Option<&StorageSlot> {
        match key {
            THEME_KEY => Some(&self.theme),
            LANGUAGE_KEY => Some(&self.language),
            _ => None,
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceBackend for LocalStorageBackend {
    fn load(&self, key: &str) -> Option<String> {
        let (value, _) = self.slot(key)?;
        let value = value.get_untracked();
        (!value.is_empty()).then_some(value)
    }

    fn store(&mut self, key: &str, value: &str) {
        match self.slot(key) {
            Some((_, set_value)) => set_value.set(value.to_string()),
            None => log::warn!("no storage slot for preference {key}"),
        }
    }
}

#[cfg(feature = "hydrate")]
pub type AppBackend = LocalStorageBackend;
#[cfg(not(feature = "hydrate"))]
pub type AppBackend = MemoryBackend;

/// Handle to the preference store shared through context.
#[derive(Clone, Copy)]
pub struct Preferences(RwSignal<PreferenceStore<AppBackend>>);

impl Preferences {
    pub fn theme(&self) -> Theme {
        self.0.with(|p| p.theme())
    }

    pub fn toggle_theme(&self) {
        self.0.update(|p| {
            let theme = p.toggle_theme();
            log::debug!("theme set to {theme}");
        });
    }

    pub fn language(&self) -> Language {
        self.0.with(|p| p.language())
    }

    pub fn set_language(&self, language: Language) {
        self.0.update(|p| p.set_language(language));
    }
}

/// The store starts from the server-side defaults so hydration matches the
/// server HTML. The stored values and the colour-scheme signal are applied
/// once the page is hydrated.
pub fn provide_preferences() -> Preferences {
    #[cfg(feature = "hydrate")]
    let prefs = {
        let prefs = Preferences(RwSignal::new(PreferenceStore::new(LocalStorageBackend::new())));
        let prefers_dark = use_preferred_dark();
        Effect::watch(
            || (),
            move |_, _, _| {
                let dark = prefers_dark.get_untracked();
                prefs.0.update(|p| p.reload(Some(dark)));
            },
            true,
        );
        prefs
    };
    // no colour-scheme signal while rendering on the server
    #[cfg(not(feature = "hydrate"))]
    let prefs = Preferences(RwSignal::new(PreferenceStore::load(MemoryBackend::new(), None)));

    provide_context(prefs);
    prefs
}

pub fn use_preferences() -> Preferences {
    expect_context::<Preferences>()
}
