//! Tag Pill Component
//!
//! Small rounded label with a color swatch dot.

use dioxus::prelude::*;

use crate::features::Palette;

/// A single palette tag
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TagPill { palette: Palette::Gray }
/// }
/// ```
#[component]
pub fn TagPill(palette: Palette) -> Element {
    let class = palette.class();
    let label = palette.label();

    rsx! {
        span { class: "tag-pill", "data-palette": "{class}",
            span { class: "tag-pill__swatch {class}", "aria-hidden": "true" }
            "{label}"
        }
    }
}
