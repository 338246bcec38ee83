//! Process-wide presentation state
//!
//! Holds the palette the rendering layer reads. The store is an explicit
//! observable object rather than ambient global mutation: `compute_theme`
//! stays pure, and applying its result is a separate, single call site.
//!
//! There is exactly one writer per derivation run. `apply` replaces all
//! five colors in one swap, so readers never observe a partially updated
//! palette; subscribers see each published palette exactly once.

use std::sync::OnceLock;

use tokio::sync::watch;

use crate::palette::Palette;

/// Observable store for the currently active palette
pub struct ThemeStore {
    tx: watch::Sender<Palette>,
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeStore {
    /// Create a store seeded with the startup palette
    pub fn new() -> Self {
        Self::with_initial(Palette::default())
    }

    /// Create a store seeded with a specific palette
    pub fn with_initial(palette: Palette) -> Self {
        let (tx, _rx) = watch::channel(palette);
        Self { tx }
    }

    /// The process-wide store instance
    pub fn global() -> &'static ThemeStore {
        static STORE: OnceLock<ThemeStore> = OnceLock::new();
        STORE.get_or_init(ThemeStore::new)
    }

    /// Snapshot of the currently active palette
    pub fn current(&self) -> Palette {
        self.tx.borrow().clone()
    }

    /// Subscribe to palette changes
    ///
    /// The receiver observes every published palette as an atomic unit;
    /// await `changed()` to react to updates.
    pub fn subscribe(&self) -> watch::Receiver<Palette> {
        self.tx.subscribe()
    }

    /// Publish a new palette, replacing the previous one wholesale
    pub fn apply(&self, palette: Palette) {
        self.tx.send_replace(palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn sample_palette(seed: u8) -> Palette {
        Palette {
            primary: Rgb::new(seed, 0, 0),
            accent1: Rgb::new(0, seed, 0),
            accent2: Rgb::new(0, 0, seed),
            text: Rgb::new(seed, seed, seed),
            muted: Rgb::new(seed, 0, seed),
        }
    }

    #[test]
    fn test_store_starts_with_default_palette() {
        let store = ThemeStore::new();
        assert_eq!(store.current(), Palette::default());
    }

    #[test]
    fn test_apply_overwrites_previous_palette() {
        let store = ThemeStore::new();
        store.apply(sample_palette(10));
        store.apply(sample_palette(20));
        assert_eq!(store.current(), sample_palette(20));
    }

    #[tokio::test]
    async fn test_subscribers_observe_whole_palettes() {
        let store = ThemeStore::new();
        let mut rx = store.subscribe();

        store.apply(sample_palette(42));
        rx.changed().await.unwrap();

        let seen = rx.borrow_and_update().clone();
        assert_eq!(seen, sample_palette(42));
    }

    #[test]
    fn test_global_store_is_shared() {
        let a = ThemeStore::global() as *const ThemeStore;
        let b = ThemeStore::global() as *const ThemeStore;
        assert_eq!(a, b);
    }
}
