//! Button Components
//!
//! Decorative action buttons for the theme sample panels:
//! - Solid: filled with the palette color
//! - Outline: transparent with a palette-colored border

use dioxus::prelude::*;

use crate::features::Palette;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled background, used for the main action
    #[default]
    Solid,
    /// Bordered, transparent background
    Outline,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Solid => "btn-solid",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Color the button is drawn in
    #[props(default)]
    pub palette: Palette,
    /// Button content (text, icons, etc.)
    pub children: Element,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Solid,
///         palette: Palette::Pink,
///         "Get Started"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.palette);

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            {props.children}
        }
    }
}

fn button_class(variant: ButtonVariant, palette: Palette) -> String {
    format!("btn {} {}", variant.class(), palette.class())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Solid.class(), "btn-solid");
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Solid);
    }

    #[test]
    fn button_class_combines_variant_and_palette() {
        assert_eq!(
            button_class(ButtonVariant::Outline, Palette::White),
            "btn btn-outline palette-white"
        );
        assert_eq!(
            button_class(ButtonVariant::Solid, Palette::Pink),
            "btn btn-solid palette-pink"
        );
    }

    fn outline_white() -> Element {
        rsx! {
            Button { variant: ButtonVariant::Outline, palette: Palette::White, "Explore" }
        }
    }

    #[test]
    fn button_renders_without_handler() {
        let mut dom = VirtualDom::new(outline_white);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.starts_with("<button"));
        assert!(html.contains(r#"class="btn btn-outline palette-white""#));
        assert!(html.contains(r#"type="button""#));
        assert!(html.contains(">Explore</button>"));
        assert!(!html.contains("onclick"));
    }
}
