//! Color constants for the pink & white theme.

// === PINK (Accents, Icons, Primary Actions) ===
pub const PINK: &str = "#ec4899";
pub const PINK_DEEP: &str = "#db2777";
pub const PINK_SOFT: &str = "#fce7f3";
pub const PINK_GLOW: &str = "rgba(236, 72, 153, 0.25)";

// === WHITE (Surfaces) ===
pub const WHITE: &str = "#ffffff";
pub const WHITE_WARM: &str = "#fff7fb";

// === GRAY (Text, Borders) ===
pub const GRAY: &str = "#6b7280";
pub const GRAY_LIGHT: &str = "#e5e7eb";
pub const GRAY_DARK: &str = "#374151";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#1f2937";
pub const TEXT_SECONDARY: &str = "#6b7280";
