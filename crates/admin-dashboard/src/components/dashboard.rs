use admin_theme::{HeadingLevel, ShadeStop};
use dioxus::prelude::*;

use crate::page::Page;
use crate::theme::use_theme_settings;

/// Page title with a coloured subtitle
#[component]
pub fn Header(title: String, subtitle: String) -> Element {
    let theme = use_theme_settings();
    let title_colour = theme.tokens.grey[ShadeStop::S100];
    let subtitle_colour = theme.tokens.green_accent[ShadeStop::S400];
    let title_size = theme.typography.heading(HeadingLevel::H2).font_size;
    let subtitle_size = theme.typography.heading(HeadingLevel::H5).font_size;

    rsx! {
        div { class: "header",
            h2 {
                style: "color: {title_colour}; font-size: {title_size}px; font-weight: bold; margin: 0 0 5px 0;",
                "{title}"
            }
            h5 {
                style: "color: {subtitle_colour}; font-size: {subtitle_size}px; margin: 0;",
                "{subtitle}"
            }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let page = Page::Dashboard;

    rsx! {
        div { class: "page dashboard",
            Header {
                title: page.title().to_string(),
                subtitle: page.subtitle().to_string(),
            }
        }
    }
}
