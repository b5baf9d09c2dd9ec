//! Icon Component
//!
//! Inline SVG line icons drawn on a 24x24 grid with round caps, so they
//! inherit `currentColor` from the surrounding text.

use dioxus::prelude::*;

/// The fixed set of glyphs used on the showcase page
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    Baby,
    Users,
    BarChart,
    Heart,
}

impl Icon {
    /// SVG path data, one entry per `path` element
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Icon::Baby => &[
                "M9 12h.01",
                "M15 12h.01",
                "M10 16c.5.3 1.2.5 2 .5s1.5-.2 2-.5",
                "M19 6.3a9 9 0 0 1 1.8 3.9 2 2 0 0 1 0 3.6 9 9 0 0 1-17.6 0 2 2 0 0 1 0-3.6A9 9 0 0 1 12 3c2 0 3.5 1.1 3.5 2.5s-.9 2.5-2 2.5c-.8 0-1.5-.4-1.5-1",
            ],
            Icon::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Icon::BarChart => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
            Icon::Heart => &[
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
            ],
        }
    }

    /// Accessible name for the glyph
    pub fn label(&self) -> &'static str {
        match self {
            Icon::Baby => "baby",
            Icon::Users => "users",
            Icon::BarChart => "bar chart",
            Icon::Heart => "heart",
        }
    }
}

/// Properties for the IconGlyph component
#[derive(Clone, PartialEq, Props)]
pub struct IconGlyphProps {
    /// Which glyph to draw
    pub icon: Icon,
    /// Rendered width and height in pixels (default: 24)
    #[props(default = 24)]
    pub size: u32,
    /// Stroke width on the 24 unit grid (default: 2)
    #[props(default = 2.0)]
    pub stroke_width: f32,
}

/// Renders one icon as an inline SVG
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     IconGlyph { icon: Icon::Heart, size: 32 }
/// }
/// ```
#[component]
pub fn IconGlyph(props: IconGlyphProps) -> Element {
    let size = props.size;
    let stroke_width = props.stroke_width;
    let label = props.icon.label();

    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            width: "{size}",
            height: "{size}",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "{stroke_width}",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            role: "img",
            "aria-label": "{label}",
            for d in props.icon.paths().iter() {
                path { d: "{d}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_paths() {
        for icon in [Icon::Baby, Icon::Users, Icon::BarChart, Icon::Heart] {
            assert!(!icon.paths().is_empty(), "{icon:?} has no path data");
            assert!(icon.paths().iter().all(|d| d.starts_with('M')));
        }
    }

    #[test]
    fn icon_labels() {
        assert_eq!(Icon::Baby.label(), "baby");
        assert_eq!(Icon::Users.label(), "users");
        assert_eq!(Icon::BarChart.label(), "bar chart");
        assert_eq!(Icon::Heart.label(), "heart");
    }
}
