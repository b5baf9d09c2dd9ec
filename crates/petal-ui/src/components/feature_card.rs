//! Feature Card Component
//!
//! A single tile in the feature grid: icon badge on top, title below.

use dioxus::prelude::*;

use crate::features::FeatureItem;

use super::IconGlyph;

/// Displays one feature tile
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for item in showcase_features() {
///         FeatureCard { item }
///     }
/// }
/// ```
#[component]
pub fn FeatureCard(item: FeatureItem) -> Element {
    let palette = item.theme.class();

    rsx! {
        div { class: "feature-card", "data-palette": "{palette}",
            div { class: "feature-card__badge {palette}",
                IconGlyph { icon: item.icon, size: 28 }
            }
            h3 { class: "feature-card__title", "{item.title}" }
        }
    }
}
