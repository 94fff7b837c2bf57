//! Theme and styling constants

use demog_model::Rgb;
use egui::Color32;

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

/// Chart drawing constants
pub mod chart {
    /// Space below the plot for group labels.
    pub const LABEL_BAND: f32 = 36.0;
    /// Space left of the plot for value ticks.
    pub const AXIS_GUTTER: f32 = 44.0;
    pub const TICK_FONT: f32 = 11.0;
    pub const LABEL_FONT: f32 = 12.0;
    pub const TICKS: usize = 4;
}

/// Egui colour for a palette entry.
pub fn to_color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.0, color.1, color.2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use demog_model::Gender;

    #[test]
    fn test_palette_conversion() {
        assert_eq!(
            to_color32(Gender::Female.color()),
            Color32::from_rgb(0x71, 0x8d, 0xbf)
        );
    }
}
