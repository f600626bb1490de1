//! Theme and text-size toggles.
//!
//! The theme is the only persisted state in the client: it is read once by
//! [`ThemeToggle::restore`] and written on every [`ThemeToggle::toggle`].

use crate::core::{PreferenceStore, View};
use crate::domain::model::{TextSize, Theme};

pub const THEME_KEY: &str = "theme";

pub struct ThemeToggle<P: PreferenceStore> {
    store: P,
    current: Theme,
}

impl<P: PreferenceStore> ThemeToggle<P> {
    pub fn new(store: P) -> Self {
        Self {
            store,
            current: Theme::default(),
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    /// 讀取已儲存的偏好並套用
    pub fn restore<V: View + ?Sized>(&mut self, view: &mut V) -> Theme {
        let stored = match self.store.get_item(THEME_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Could not read theme preference: {}", e);
                None
            }
        };

        self.current = Theme::from_stored(stored.as_deref());
        tracing::debug!("Restored theme: {}", self.current);
        view.apply_theme(self.current);
        self.current
    }

    pub fn toggle<V: View + ?Sized>(&mut self, view: &mut V) -> Theme {
        self.current = self.current.toggled();
        view.apply_theme(self.current);

        if let Err(e) = self.store.set_item(THEME_KEY, self.current.as_str()) {
            tracing::warn!("Could not save theme preference: {}", e);
        }

        self.current
    }
}

#[derive(Debug, Default)]
pub struct TextSizeToggle {
    current: TextSize,
}

impl TextSizeToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> TextSize {
        self.current
    }

    pub fn toggle<V: View + ?Sized>(&mut self, view: &mut V) -> TextSize {
        self.current = self.current.toggled();
        view.apply_text_size(self.current);
        self.current
    }
}
