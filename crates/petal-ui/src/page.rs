//! Showcase page - the whole demo in one view.
//!
//! Header, feature grid, the two theme samples and a closing summary.

use dioxus::prelude::*;

use crate::components::{FeatureCard, Icon, IconGlyph, TagPill, ThemePanel};
use crate::features::{showcase_features, Palette};

/// Showcase page component.
///
/// Takes no props and renders the same markup on every call.
#[component]
pub fn ShowcasePage() -> Element {
    let features = showcase_features();

    rsx! {
        main { class: "showcase",
            header { class: "showcase-header",
                div { class: "logo-mark",
                    IconGlyph { icon: Icon::Heart, size: 40 }
                }
                h1 { class: "page-title", "Pink & White Theme" }
                p { class: "page-subtitle",
                    "A soft, clean palette for caring products"
                }
            }

            div { class: "feature-grid",
                for item in features {
                    FeatureCard { key: "{item.title}", item }
                }
            }

            div { class: "theme-samples",
                ThemePanel {
                    title: "Pink Theme".to_string(),
                    description: "Warm accents that feel friendly and approachable.".to_string(),
                    palette: Palette::Pink,
                    accent: Palette::White,
                    actions: ("Get Started".to_string(), "Learn More".to_string()),
                }
                ThemePanel {
                    title: "White Theme".to_string(),
                    description: "Bright surfaces that keep the content front and center.".to_string(),
                    palette: Palette::White,
                    accent: Palette::Pink,
                    actions: ("Sign Up".to_string(), "Explore".to_string()),
                }
            }

            section { class: "summary-panel",
                h2 { class: "section-header", "Theme Summary" }
                p { class: "body-text",
                    "Pink for warmth, white for clarity and gray to keep everything calm."
                }
                div { class: "summary-panel__tags",
                    for palette in Palette::ALL {
                        TagPill { key: "{palette:?}", palette }
                    }
                }
            }
        }
    }
}
