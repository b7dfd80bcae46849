//! Colour mode state holder
//!
//! [`ModeState`] is a two-state machine (`Dark` ⇄ `Light`) that owns the
//! theme built for the current mode. The theme is rebuilt once per toggle
//! and handed out as a shared [`Arc`], so readers keep pointer-equal values
//! between transitions and never observe a partially built theme.

use std::sync::Arc;

use crate::mode::Mode;
use crate::settings::{ThemeSettings, build_theme_settings};

/// Theme cache keyed by mode
///
/// Holds at most the entry for the active mode. A lookup with a different
/// mode replaces the entry, so a mode transition is the only thing that
/// triggers a rebuild.
#[derive(Debug, Default)]
pub struct ThemeCache {
    entry: Option<(Mode, Arc<ThemeSettings>)>,
    builds: u64,
}

impl ThemeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached theme for `mode`, if that is the entry held.
    pub fn get(&self, mode: Mode) -> Option<Arc<ThemeSettings>> {
        match &self.entry {
            Some((cached, theme)) if *cached == mode => Some(Arc::clone(theme)),
            _ => None,
        }
    }

    /// Return the cached theme for `mode`, building it on a miss.
    pub fn get_or_build(&mut self, mode: Mode) -> Arc<ThemeSettings> {
        if let Some(theme) = self.get(mode) {
            return theme;
        }

        let theme = Arc::new(build_theme_settings(mode));
        self.builds += 1;
        tracing::trace!(mode = %mode, builds = self.builds, "built theme settings");
        self.entry = Some((mode, Arc::clone(&theme)));
        theme
    }

    /// Number of themes built over the cache's lifetime
    pub fn builds(&self) -> u64 {
        self.builds
    }
}

/// Current colour mode plus the cache holding its theme
#[derive(Debug)]
pub struct ModeState {
    mode: Mode,
    cache: ThemeCache,
}

impl ModeState {
    /// Start in the default mode ([`Mode::Dark`]).
    pub fn new() -> Self {
        Self::with_mode(Mode::default())
    }

    pub fn with_mode(mode: Mode) -> Self {
        let mut cache = ThemeCache::new();
        cache.get_or_build(mode);
        Self { mode, cache }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Flip the mode and rebuild the theme. Returns the new mode.
    pub fn toggle(&mut self) -> Mode {
        let previous = self.mode;
        self.mode = previous.toggled();
        self.cache.get_or_build(self.mode);
        tracing::debug!(from = %previous, to = %self.mode, "colour mode toggled");
        self.mode
    }

    /// The theme for the current mode. Pointer-equal until the next toggle.
    pub fn theme(&self) -> Arc<ThemeSettings> {
        // The cache always holds the current mode after construction and
        // after every toggle
        self.cache
            .get(self.mode)
            .unwrap_or_else(|| Arc::new(build_theme_settings(self.mode)))
    }

    /// Number of theme builds so far: one at construction plus one per toggle
    pub fn builds(&self) -> u64 {
        self.cache.builds()
    }
}

impl Default for ModeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_hits_same_mode() {
        let mut cache = ThemeCache::new();
        let first = cache.get_or_build(Mode::Dark);
        let second = cache.get_or_build(Mode::Dark);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.builds(), 1);
        assert!(cache.get(Mode::Dark).is_some());
        assert!(cache.get(Mode::Light).is_none());
    }

    #[test]
    fn test_cache_replaces_entry_on_mode_change() {
        let mut cache = ThemeCache::new();
        let dark = cache.get_or_build(Mode::Dark);
        let light = cache.get_or_build(Mode::Light);
        assert!(!Arc::ptr_eq(&dark, &light));
        assert_eq!(cache.builds(), 2);
        assert!(cache.get(Mode::Dark).is_none());
        assert!(Arc::ptr_eq(&cache.get(Mode::Light).unwrap(), &light));
    }

    #[test]
    fn test_empty_cache_misses() {
        let cache = ThemeCache::new();
        assert!(cache.get(Mode::Dark).is_none());
        assert_eq!(cache.builds(), 0);
    }

    #[test]
    fn test_state_theme_is_the_cached_entry() {
        let mut state = ModeState::new();
        assert!(Arc::ptr_eq(&state.theme(), &state.cache.get(Mode::Dark).unwrap()));
        state.toggle();
        assert!(Arc::ptr_eq(&state.theme(), &state.cache.get(Mode::Light).unwrap()));
        assert_eq!(state.builds(), 2);
    }

    #[test]
    fn test_toggle_returns_new_mode() {
        let mut state = ModeState::new();
        assert_eq!(state.toggle(), Mode::Light);
        assert_eq!(state.toggle(), Mode::Dark);
    }
}
