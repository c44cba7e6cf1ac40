//! Shared color constants for the UI.

use egui::Color32;

/// Link blue, used for male owners.
pub const COLOR_LINK: Color32 = Color32::from_rgb(72, 95, 199);

/// Danger red, used for female owners.
pub const COLOR_DANGER: Color32 = Color32::from_rgb(241, 70, 104);
