use dioxus::prelude::*;
use petal_ui::theme::GLOBAL_STYLES;
use petal_ui::ShowcasePage;

/// Root application component.
///
/// Provides global styles and mounts the showcase page.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        ShowcasePage {}
    }
}
