#![doc = "A partial rust implementation of FastLED's lib8tion for fast 8 bit math on microcontrollers"]
pub mod interpolate;

use rgb::Rgb;

use crate::rainbow::Rainbow;

/// A color in 8 bit hue, saturation and value
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct Hsv {
    /// Position on the color wheel, where 0 and 256 are both red
    pub hue: u8,
    /// 0 is white, 255 is the pure hue
    pub saturation: u8,
    /// Brightness
    pub value: u8
}

impl Hsv {
    /// Creates a new color
    pub const fn new(hue: u8, saturation: u8, value: u8) -> Self {
        Hsv {
            hue,
            saturation,
            value
        }
    }

    /// A fully saturated, full brightness color of the given hue
    pub const fn from_hue(hue: u8) -> Self {
        Self::new(hue, 255, 255)
    }
}

// Pre-defined hue values, one per rainbow sector
/// Red (0°)
pub const HUE_RED: u8 = 0;
/// Orange (45°)
pub const HUE_ORANGE: u8 = 32;
/// Yellow (90°)
pub const HUE_YELLOW: u8 = 64;
/// Green (135°)
pub const HUE_GREEN: u8 = 96;
/// Aqua (180°)
pub const HUE_AQUA: u8 = 128;
/// Blue (225°)
pub const HUE_BLUE: u8 = 160;
/// Purple (270°)
pub const HUE_PURPLE: u8 = 192;
/// Pink (315°)
pub const HUE_PINK: u8 = 224;

impl From<Hsv> for Rgb<u8> {
    /// Converts with the default [Rainbow]
    fn from(hsv: Hsv) -> Self {
        Rainbow::DEFAULT.convert(hsv)
    }
}
