//! Top navigation bar
//!
//! Search box on the left, icon buttons on the right. Only the colour mode
//! button does anything; the other icons are placeholders.

use admin_theme::{Mode, ShadeStop};
use dioxus::prelude::*;

use crate::theme::{use_colour_mode_controller, use_theme_settings};

pub const DARK_MODE_GLYPH: &str = "\u{1F319}";
pub const LIGHT_MODE_GLYPH: &str = "\u{2600}";
const SEARCH_GLYPH: &str = "\u{1F50D}";
const NOTIFICATIONS_GLYPH: &str = "\u{1F514}";
const SETTINGS_GLYPH: &str = "\u{2699}";
const PROFILE_GLYPH: &str = "\u{1F464}";

/// Glyph for the colour mode button: the moon while dark, the sun while light
pub fn mode_icon(mode: Mode) -> &'static str {
    match mode {
        Mode::Dark => DARK_MODE_GLYPH,
        Mode::Light => LIGHT_MODE_GLYPH,
    }
}

#[component]
pub fn Topbar() -> Element {
    let theme = use_theme_settings();
    let controller = use_colour_mode_controller();
    let mut query = use_signal(String::new);

    let search_background = theme.tokens.primary[ShadeStop::S400];
    let icon = mode_icon(controller.mode());

    rsx! {
        div { class: "topbar",
            div {
                class: "search-box",
                style: "background-color: {search_background};",
                input {
                    class: "search-input",
                    placeholder: "Search",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
                button {
                    class: "icon-button",
                    r#type: "button",
                    onclick: move |_| {
                        let current = query.read().clone();
                        tracing::debug!(query = %current, "search submitted");
                    },
                    "{SEARCH_GLYPH}"
                }
            }
            div { class: "icon-row",
                button {
                    class: "icon-button",
                    title: "Toggle colour mode",
                    onclick: move |_| controller.toggle(),
                    "{icon}"
                }
                button { class: "icon-button", title: "Notifications", "{NOTIFICATIONS_GLYPH}" }
                button { class: "icon-button", title: "Settings", "{SETTINGS_GLYPH}" }
                button { class: "icon-button", title: "Profile", "{PROFILE_GLYPH}" }
            }
        }
    }
}
