//! Presentational components for the showcase page
//!
//! Every component is stateless and styled through the classes defined in
//! `theme::styles`.

mod button;
mod feature_card;
mod icon;
mod tag_pill;
mod theme_panel;

pub use button::*;
pub use feature_card::*;
pub use icon::*;
pub use tag_pill::*;
pub use theme_panel::*;
