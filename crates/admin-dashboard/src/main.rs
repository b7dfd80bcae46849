use dioxus::prelude::*;

mod app;
mod components;
mod css;
mod page;
pub mod theme;

/// Component CSS (loaded from assets/style.css at compile time)
const STYLE_CSS: &str = include_str!("../assets/style.css");

const WINDOW_TITLE: &str = "Admin Dashboard";

fn main() -> anyhow::Result<()> {
    // Keep the guard alive so buffered log output is flushed on exit
    let _log_guard = admin_logging::init_development()?;

    tracing::info!("starting admin dashboard");

    LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(WINDOW_TITLE)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 800.0)),
                )
                .with_custom_head(format!(r#"<style>{}</style>"#, STYLE_CSS)),
        )
        .launch(app::App);

    Ok(())
}
