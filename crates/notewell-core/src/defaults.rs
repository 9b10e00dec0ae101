//! Centralized default constants for the notewell client.
//!
//! **This module is the single source of truth** for shared default values.
//! Both crates reference these constants instead of defining their own
//! magic values.

// =============================================================================
// COLORS
// =============================================================================

/// Color a note takes when the draft does not choose one.
pub const NOTE_COLOR: &str = "#ffffff";

/// Color the label form starts from.
pub const LABEL_COLOR: &str = "#2196f3";

/// The fixed note color palette offered by the UI. The server accepts any
/// hex value; this list only drives pickers and test fixtures.
pub const NOTE_PALETTE: [&str; 14] = [
    "#ffffff", // White
    "#fbbf24", // Amber
    "#fde047", // Yellow
    "#a3e635", // Lime
    "#4ade80", // Green
    "#2dd4bf", // Teal
    "#22d3ee", // Cyan
    "#60a5fa", // Blue
    "#818cf8", // Indigo
    "#a78bfa", // Purple
    "#e879f9", // Fuchsia
    "#f472b6", // Pink
    "#fb7185", // Rose
    "#f87171", // Red
];

// =============================================================================
// HTTP
// =============================================================================

/// Default API base URL.
pub const API_BASE: &str = "http://localhost:4000/api";

/// Timeout for API requests (seconds).
pub const HTTP_TIMEOUT_SECS: u64 = 30;
