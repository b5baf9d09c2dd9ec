//! Theme Panel Component
//!
//! A sample surface painted in one palette, with a short description and
//! a solid + outline button pair.

use dioxus::prelude::*;

use crate::features::Palette;

use super::{Button, ButtonVariant};

/// Properties for the ThemePanel component
#[derive(Clone, PartialEq, Props)]
pub struct ThemePanelProps {
    /// Panel heading, e.g. "Pink Theme"
    pub title: String,
    /// One line under the heading
    pub description: String,
    /// Palette the panel surface is painted in
    pub palette: Palette,
    /// Palette for the two buttons
    pub accent: Palette,
    /// Labels for the solid and outline buttons
    pub actions: (String, String),
}

/// Displays one theme sample panel
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ThemePanel {
///         title: "Pink Theme".to_string(),
///         description: "Warm and friendly".to_string(),
///         palette: Palette::Pink,
///         accent: Palette::White,
///         actions: ("Get Started".to_string(), "Learn More".to_string()),
///     }
/// }
/// ```
#[component]
pub fn ThemePanel(props: ThemePanelProps) -> Element {
    let (primary, secondary) = props.actions.clone();
    let palette = props.palette.class();
    let accent = props.accent;

    rsx! {
        section { class: "theme-panel {palette}",
            h2 { class: "theme-panel__title", "{props.title}" }
            p { class: "theme-panel__text", "{props.description}" }
            div { class: "theme-panel__actions",
                Button { variant: ButtonVariant::Solid, palette: accent, "{primary}" }
                Button { variant: ButtonVariant::Outline, palette: accent, "{secondary}" }
            }
        }
    }
}
