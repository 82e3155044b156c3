//! The ten particle colors.

use crate::surface::Rgba;

/// Alpha shared by every palette entry.
pub const PALETTE_ALPHA: f32 = 0.7;

/// Named particle colors, in draw order.
pub const PALETTE: [(&str, Rgba); 10] = [
    ("red", Rgba::new(255, 107, 107, PALETTE_ALPHA)),
    ("blue", Rgba::new(54, 162, 235, PALETTE_ALPHA)),
    ("yellow", Rgba::new(255, 206, 84, PALETTE_ALPHA)),
    ("teal", Rgba::new(75, 192, 192, PALETTE_ALPHA)),
    ("purple", Rgba::new(153, 102, 255, PALETTE_ALPHA)),
    ("orange", Rgba::new(255, 159, 64, PALETTE_ALPHA)),
    ("grey", Rgba::new(199, 199, 199, PALETTE_ALPHA)),
    ("indigo", Rgba::new(83, 102, 255, PALETTE_ALPHA)),
    ("pink", Rgba::new(255, 99, 132, PALETTE_ALPHA)),
    ("green", Rgba::new(54, 235, 162, PALETTE_ALPHA)),
];

pub fn contains(color: &Rgba) -> bool {
    PALETTE.iter().any(|(_, c)| c == color)
}

/// Name of a palette color, if it is one.
pub fn name_of(color: &Rgba) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|(_, c)| c == color)
        .map(|(name, _)| *name)
}
