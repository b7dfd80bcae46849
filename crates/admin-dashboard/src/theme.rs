//! Colour mode wiring for Dioxus
//!
//! The root owns the mode state in a signal and hands it down through two
//! separate contexts: the toggle controller, and the memoized theme the
//! components style themselves with.

use std::sync::Arc;

use admin_theme::{Mode, ModeState, ThemeSettings};
use dioxus::prelude::*;

use crate::css::root_style;

/// Toggle handle shared with every component below the root
#[derive(Clone, Copy)]
pub struct ColourModeController {
    state: Signal<ModeState>,
}

impl ColourModeController {
    /// Flip between dark and light mode
    pub fn toggle(&self) {
        let mut state = self.state;
        let mode = state.write().toggle();
        tracing::info!(mode = %mode, "colour mode changed");
    }

    pub fn mode(&self) -> Mode {
        self.state.read().mode()
    }
}

/// Theme channel, kept apart from the controller
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: Memo<Arc<ThemeSettings>>,
}

/// Create the colour mode state and provide both contexts.
///
/// Call once, at the root of the app.
pub fn use_colour_mode() -> ColourModeController {
    let state = use_signal(ModeState::new);
    let controller = use_context_provider(|| ColourModeController { state });

    // ModeState already caches the theme, the memo only tracks the signal
    let theme = use_memo(move || state.read().theme());
    use_context_provider(|| ThemeContext { theme });

    controller
}

/// Hook to access the colour mode controller
pub fn use_colour_mode_controller() -> ColourModeController {
    use_context::<ColourModeController>()
}

/// Hook to read the current theme settings
pub fn use_theme_settings() -> Arc<ThemeSettings> {
    let ctx = use_context::<ThemeContext>();
    let theme = ctx.theme.read();
    Arc::clone(&theme)
}

/// Themed wrapper component - applies the theme as CSS custom properties
///
/// Use this below the component that called [`use_colour_mode`]:
/// ```rust,ignore
/// rsx! {
///     ThemedRoot {
///         // Your app content here
///     }
/// }
/// ```
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = use_theme_settings();
    let style = root_style(&theme);

    rsx! {
        div {
            class: "themed-root",
            "data-theme": theme.mode().as_str(),
            style: "{style}",
            {children}
        }
    }
}
