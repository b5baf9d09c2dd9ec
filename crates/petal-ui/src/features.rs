//! Feature list and palette tags shown on the showcase page.

use crate::components::Icon;

/// Theme color tag used for cards, panels and summary pills.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Palette {
    /// Soft pink accent
    #[default]
    Pink,
    /// Plain white surface
    White,
    /// Neutral gray
    Gray,
}

impl Palette {
    /// All palettes in display order.
    pub const ALL: [Palette; 3] = [Palette::Pink, Palette::White, Palette::Gray];

    /// Returns the CSS modifier class for this palette
    pub fn class(&self) -> &'static str {
        match self {
            Palette::Pink => "palette-pink",
            Palette::White => "palette-white",
            Palette::Gray => "palette-gray",
        }
    }

    /// Returns the tag label shown in the summary panel
    pub fn label(&self) -> &'static str {
        match self {
            Palette::Pink => "Beautiful Pink",
            Palette::White => "Pure White",
            Palette::Gray => "Clean Gray",
        }
    }
}

/// One card in the feature grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FeatureItem {
    pub icon: Icon,
    pub title: &'static str,
    pub theme: Palette,
}

/// Builds the four feature cards.
pub fn showcase_features() -> [FeatureItem; 4] {
    [
        FeatureItem {
            icon: Icon::Baby,
            title: "Child Care",
            theme: Palette::Pink,
        },
        FeatureItem {
            icon: Icon::Users,
            title: "Family",
            theme: Palette::Pink,
        },
        FeatureItem {
            icon: Icon::BarChart,
            title: "Analytics",
            theme: Palette::Pink,
        },
        FeatureItem {
            icon: Icon::Heart,
            title: "Health",
            theme: Palette::Pink,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showcase_features_has_four() {
        let features = showcase_features();
        assert_eq!(features.len(), 4);
        let titles: Vec<_> = features.iter().map(|f| f.title).collect();
        assert_eq!(titles, ["Child Care", "Family", "Analytics", "Health"]);
    }

    #[test]
    fn every_feature_uses_a_distinct_icon() {
        let features = showcase_features();
        for (i, a) in features.iter().enumerate() {
            for b in &features[i + 1..] {
                assert_ne!(a.icon, b.icon);
            }
        }
    }

    #[test]
    fn features_are_pink() {
        assert!(showcase_features().iter().all(|f| f.theme == Palette::Pink));
    }

    #[test]
    fn palette_labels() {
        assert_eq!(Palette::Pink.label(), "Beautiful Pink");
        assert_eq!(Palette::White.label(), "Pure White");
        assert_eq!(Palette::Gray.label(), "Clean Gray");
    }

    #[test]
    fn palette_classes() {
        assert_eq!(Palette::Pink.class(), "palette-pink");
        assert_eq!(Palette::White.class(), "palette-white");
        assert_eq!(Palette::Gray.class(), "palette-gray");
    }

    #[test]
    fn palette_default_is_pink() {
        assert_eq!(Palette::default(), Palette::Pink);
    }
}
