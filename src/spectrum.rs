//! A plain three segment spectrum, for comparing against the [crate::rainbow::Rainbow]
//!
//! Every hue has the same total brightness (R+G+B) before saturation and value
//! are applied, which makes yellow look much brighter than blue on real LEDs.
use rgb::Rgb;

use crate::liber8tion::Hsv;

/// Converts a color using a linear spectrum with uniform brightness
///
/// Value is applied first, then saturation adds a floor of `256 - saturation`
/// to every channel. Channels are clamped to 255.
pub fn hsv2rgb_spectrum(hsv: Hsv) -> Rgb<u8> {
    let hue = hsv.hue as u16;
    let value = hsv.value as u16;
    let saturation = hsv.saturation as u16;

    let (r, g, b) = if hue <= 85 {
        (256 - hue * 3, hue * 3, 0)
    } else if hue <= 170 {
        let hue = hue - 85;
        (0, 256 - hue * 3, hue * 3)
    } else {
        let hue = hue - 170;
        (hue * 3, 0, 256 - hue * 3)
    };

    let channel = |x: u16| {
        let x = x * value / 256;
        (x * saturation / 256 + (256 - saturation)).min(255) as u8
    };

    Rgb::new(channel(r), channel(g), channel(b))
}
