//! Petal Showcase UI
//!
//! This crate provides the Dioxus page and components for a fixed demo page
//! showing off a soft pink & white theme.
//!
//! ## Palette
//!
//! - **Pink (#ec4899)**: Accents, icons, primary actions
//! - **White (#ffffff)**: Card and panel surfaces
//! - **Gray (#6b7280)**: Body text, borders, quiet labels
//!
//! ## Layout
//!
//! The page is a header, a four card feature grid, two theme sample panels
//! and a closing summary panel. It takes no props and renders the same
//! markup every time.

pub mod components;
pub mod export;
pub mod features;
pub mod page;
pub mod render;
pub mod theme;

pub use components::*;
pub use export::{export_document, ExportError};
pub use features::{showcase_features, FeatureItem, Palette};
pub use page::ShowcasePage;
pub use render::{render_document, render_page};
