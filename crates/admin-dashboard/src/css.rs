//! CSS adapter for theme settings
//!
//! Components style themselves through CSS custom properties set on the
//! themed root, so a mode change only touches one `style` attribute.

use admin_theme::{ShadeStop, ThemeSettings};

fn push_var(out: &mut String, name: &str, value: impl std::fmt::Display) {
    out.push_str(&format!("--{name}: {value}; "));
}

/// Render `theme` as a list of CSS custom property declarations.
///
/// Emits the semantic roles, the typography scale, and one
/// `--<ramp>-<stop>` variable per ramp stop.
pub fn css_variables(theme: &ThemeSettings) -> String {
    let mut out = String::new();
    let palette = &theme.palette;

    push_var(&mut out, "primary-main", palette.primary.main);
    push_var(&mut out, "secondary-main", palette.secondary.main);
    push_var(&mut out, "neutral-dark", palette.neutral.dark);
    push_var(&mut out, "neutral-main", palette.neutral.main);
    push_var(&mut out, "neutral-light", palette.neutral.light);
    push_var(&mut out, "background-default", palette.background.default);
    let background = palette.background.default.rgb();
    push_var(
        &mut out,
        "background-default-rgb",
        format!("{}, {}, {}", background.r, background.g, background.b),
    );

    let typography = &theme.typography;
    push_var(&mut out, "font-family", typography.font_family);
    push_var(&mut out, "font-size", format!("{}px", typography.font_size));
    for (level, style) in typography.headings() {
        push_var(
            &mut out,
            &format!("{}-size", level.as_str()),
            format!("{}px", style.font_size),
        );
    }

    for (name, ramp) in theme.tokens.ramps() {
        for (stop, colour) in ramp.iter() {
            push_var(&mut out, &format!("{}-{}", name.css_name(), stop), colour);
        }
    }

    out
}

/// Full inline style for the themed root element
pub fn root_style(theme: &ThemeSettings) -> String {
    format!(
        "{}background-color: {}; color: {}; font-family: {}; font-size: {}px; min-height: 100vh; width: 100%;",
        css_variables(theme),
        theme.palette.background.default,
        theme.tokens.grey[ShadeStop::S100],
        theme.typography.font_family,
        theme.typography.font_size,
    )
}
