use dioxus::prelude::*;

use crate::components::{Dashboard, Topbar};
use crate::page::Page;
use crate::theme::{ThemedRoot, use_colour_mode};

/// Root App component for the admin dashboard
///
/// Owns the colour mode state and provides it to the rest of the tree:
/// - Toggle controller context for the top bar button
/// - Memoized theme context for styling
#[component]
pub fn App() -> Element {
    use_colour_mode();
    let current_page = Page::default();

    rsx! {
        ThemedRoot {
            div { class: "app",
                main { class: "content",
                    Topbar {}
                    match current_page {
                        Page::Dashboard => rsx! { Dashboard {} },
                    }
                }
            }
        }
    }
}
