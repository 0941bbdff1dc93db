//! FastLED's "rainbow" hue wheel
//!
//! The rainbow spends more of the hue range on orange and yellow than a plain
//! spectrum does, and renders yellow brighter than the other hues so that it
//! appears about as bright as its neighbours on real LEDs.
use core::fmt::Debug;
use core::ops::{Add, Sub};
use num::Zero;
use rgb::Rgb;

use crate::liber8tion::interpolate::{scalef, scalef_video, Fract8, Fract8Ops};
use crate::liber8tion::Hsv;

/// How strongly the orange and yellow sectors are brightened
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum YellowBoost {
    /// No boost. The orange-yellow and yellow-green sectors render black.
    Off,
    /// A moderate boost (FastLED's `Y1`)
    #[default]
    Moderate,
    /// A strong boost (FastLED's `Y2`)
    Strong,
    /// Both `Y1` and `Y2`. The strong boost is evaluated last and overrides the moderate one.
    Stacked
}

impl YellowBoost {
    /// Whether the moderate boost formulas run
    pub const fn y1(self) -> bool {
        matches!(self, YellowBoost::Moderate | YellowBoost::Stacked)
    }

    /// Whether the strong boost formulas run
    pub const fn y2(self) -> bool {
        matches!(self, YellowBoost::Strong | YellowBoost::Stacked)
    }
}

/// Tuning for a [Rainbow]. These depend greatly on your particular LEDs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RainbowConfig {
    /// Yellow boost level
    pub yellow_boost: YellowBoost,
    /// Divide all greens by two
    pub halve_green: bool,
    /// Scale green down by this fraction. 0 disables the scaling.
    pub green_scale: Fract8
}

impl RainbowConfig {
    /// Moderate yellow boost, green untouched
    pub const DEFAULT: Self = Self::new(YellowBoost::Moderate);

    /// A config with the given yellow boost and no green adjustment
    pub const fn new(yellow_boost: YellowBoost) -> Self {
        Self {
            yellow_boost,
            halve_green: false,
            green_scale: 0
        }
    }

    /// Replaces the yellow boost
    pub const fn with_yellow_boost(self, yellow_boost: YellowBoost) -> Self {
        Self { yellow_boost, ..self }
    }

    /// Enables or disables halving of the green channel
    pub const fn with_halved_green(self, halve_green: bool) -> Self {
        Self { halve_green, ..self }
    }

    /// Sets the extra green attenuation
    pub const fn with_green_scale(self, green_scale: Fract8) -> Self {
        Self { green_scale, ..self }
    }
}

impl Default for RainbowConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One of the 8 equal, 32 hue wide slices of the rainbow
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[repr(u8)]
pub enum HueSector {
    /// Red to orange
    RedOrange = 0,
    /// Orange to yellow
    OrangeYellow,
    /// Yellow to green
    YellowGreen,
    /// Green to aqua
    GreenAqua,
    /// Aqua to blue
    AquaBlue,
    /// Blue to purple
    BluePurple,
    /// Purple to pink
    PurplePink,
    /// Pink back to red
    PinkRed
}

impl HueSector {
    /// Every sector, in hue order
    pub const ALL: [HueSector; 8] = [
        HueSector::RedOrange,
        HueSector::OrangeYellow,
        HueSector::YellowGreen,
        HueSector::GreenAqua,
        HueSector::AquaBlue,
        HueSector::BluePurple,
        HueSector::PurplePink,
        HueSector::PinkRed
    ];

    /// The sector containing a hue, selected by its top 3 bits
    pub const fn from_hue(hue: u8) -> Self {
        Self::from_index(hue >> 5)
    }

    /// The sector with the given index. Only the low 3 bits are used.
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index & 0x07) as usize]
    }

    /// Position of the sector around the wheel, 0..8
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The first hue inside this sector
    pub const fn start_hue(self) -> u8 {
        self.index() << 5
    }
}

/// Numeric types the rainbow can be computed in
///
/// `u8` gives FastLED's truncating fixed point results, `f32` gives the same
/// ramps without any rounding.
pub trait RainbowChannel: Copy + PartialEq + Debug + Zero + From<u8> + Add<Output = Self> + Sub<Output = Self> {
    /// Scale factor for a ramp from 0 to ~85 across a sector
    const THIRD: Self;
    /// Scale factor for a ramp from 0 to ~170 across a sector
    const TWO_THIRDS: Self;
    /// Multiplies by `scale / 256`, counting `scale` as one more than it is
    fn scale(self, scale: Self) -> Self;
    /// Like [RainbowChannel::scale], with a floor of 1 for nonzero inputs
    fn scale_video(self, scale: Self) -> Self;
    /// Divides by two
    fn halve(self) -> Self;
}

impl RainbowChannel for u8 {
    const THIRD: u8 = (256 / 3) as u8;
    const TWO_THIRDS: u8 = (256 * 2 / 3) as u8;

    #[inline(always)]
    fn scale(self, scale: Self) -> Self {
        self.scale8(scale)
    }

    #[inline(always)]
    fn scale_video(self, scale: Self) -> Self {
        self.scale8_video(scale)
    }

    #[inline(always)]
    fn halve(self) -> Self {
        self >> 1
    }
}

impl RainbowChannel for f32 {
    const THIRD: f32 = 256.0 / 3.0;
    const TWO_THIRDS: f32 = 256.0 * 2.0 / 3.0;

    #[inline(always)]
    fn scale(self, scale: Self) -> Self {
        scalef(self, scale)
    }

    #[inline(always)]
    fn scale_video(self, scale: Self) -> Self {
        scalef_video(self, scale)
    }

    #[inline(always)]
    fn halve(self) -> Self {
        self / 2.0
    }
}

/// Converts hues into visually balanced colors
///
/// A [Rainbow] only holds its [RainbowConfig], so it is cheap to copy and
/// safe to share between threads.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rainbow {
    config: RainbowConfig
}

impl Rainbow {
    /// A rainbow with [RainbowConfig::DEFAULT]
    pub const DEFAULT: Self = Self { config: RainbowConfig::DEFAULT };

    /// Creates a rainbow with the given tuning
    pub fn new(config: RainbowConfig) -> Self {
        #[cfg(feature = "log-04")]
        {
            if config.yellow_boost == YellowBoost::Stacked {
                log::warn!("Both yellow boosts are enabled, the strong boost takes precedence");
            }
            log::debug!("rainbow config={:?}", config);
        }
        Self { config }
    }

    /// The tuning this rainbow was created with
    pub const fn config(&self) -> &RainbowConfig {
        &self.config
    }

    /// Converts an 8 bit hue, saturation and value with FastLED's fixed point math
    pub fn convert_fixed(&self, hue: u8, saturation: u8, value: u8) -> Rgb<u8> {
        let offset8 = (hue & 0x1F) << 3;
        let mut rgb = self.base_color(HueSector::from_hue(hue), offset8);

        if saturation != 255 {
            if saturation == 0 {
                rgb = Rgb::new(255, 255, 255);
            } else {
                let desat = (255 - saturation).scale8_video(255 - saturation);
                let satscale = 255 - desat;
                rgb = rgb.scale8(satscale).qadd8(desat);
            }
        }

        if value != 255 {
            let value = value.scale8_video(value);
            if value == 0 {
                rgb = Rgb::new(0, 0, 0);
            } else {
                rgb = rgb.scale8(value);
            }
        }

        rgb
    }

    /// Converts an [Hsv] with [Rainbow::convert_fixed]
    pub fn convert(&self, hsv: Hsv) -> Rgb<u8> {
        self.convert_fixed(hsv.hue, hsv.saturation, hsv.value)
    }

    /// Converts a continuous hue into the unrounded, fully saturated and fully bright base color.
    ///
    /// The hue wraps every 256. Non-finite hues are treated as red.
    pub fn convert_continuous(&self, hue: f32) -> Rgb<f32> {
        let hue = wrap_hue(hue);
        let offset8 = (hue % 32.0) * 8.0;
        self.base_color(HueSector::from_hue(hue as u8), offset8)
    }

    /// [Rainbow::convert_continuous], rounded to the nearest 8 bit color
    pub fn wheel(&self, hue: f32) -> Rgb<u8> {
        let rgb = self.convert_continuous(hue);
        Rgb::new(round8(rgb.r), round8(rgb.g), round8(rgb.b))
    }

    /// Fills a strip of pixels with the rainbow, advancing the hue by `delta_hue` per pixel
    pub fn fill_rainbow(&self, pixels: &mut [Rgb<u8>], initial_hue: u8, delta_hue: u8) {
        let mut hue = initial_hue;
        for pixel in pixels.iter_mut() {
            *pixel = self.convert_fixed(hue, 255, 255);
            hue = hue.wrapping_add(delta_hue);
        }
    }

    /// The sector's ramp at `offset8` (0..256 across the sector), with the green adjustments applied
    fn base_color<C: RainbowChannel>(&self, sector: HueSector, offset8: C) -> Rgb<C> {
        let c = |value: u8| C::from(value);
        let third = offset8.scale(C::THIRD);
        let twothirds = offset8.scale(C::TWO_THIRDS);
        let zero = C::zero();

        let mut rgb = match sector {
            HueSector::RedOrange => Rgb::new(c(255) - third, third, zero),
            // The strong boost assigns every channel, so with both boosts it always wins
            HueSector::OrangeYellow => match self.config.yellow_boost {
                YellowBoost::Off => Rgb::new(zero, zero, zero),
                YellowBoost::Moderate => Rgb::new(c(171), c(85) + third, zero),
                YellowBoost::Strong | YellowBoost::Stacked => Rgb::new(c(170) + third, c(85) + twothirds, zero)
            },
            HueSector::YellowGreen => match self.config.yellow_boost {
                YellowBoost::Off => Rgb::new(zero, zero, zero),
                YellowBoost::Moderate => Rgb::new(c(171) - twothirds, c(170) + third, zero),
                YellowBoost::Strong | YellowBoost::Stacked => Rgb::new(c(255) - offset8, c(255), zero)
            },
            HueSector::GreenAqua => Rgb::new(zero, c(255) - third, third),
            HueSector::AquaBlue => Rgb::new(zero, c(171) - twothirds, c(85) + twothirds),
            HueSector::BluePurple => Rgb::new(third, zero, c(255) - third),
            HueSector::PurplePink => Rgb::new(c(85) + third, zero, c(171) - third),
            HueSector::PinkRed => Rgb::new(c(170) + third, zero, c(85) - third)
        };

        if self.config.halve_green {
            rgb.g = rgb.g.halve();
        }
        if self.config.green_scale != 0 {
            rgb.g = rgb.g.scale_video(c(self.config.green_scale));
        }

        rgb
    }
}

/// Reduces a hue into 0..256
fn wrap_hue(hue: f32) -> f32 {
    if !hue.is_finite() {
        return 0.0;
    }
    let wrapped = hue % 256.0;
    let wrapped = if wrapped < 0.0 { wrapped + 256.0 } else { wrapped };
    // -tiny + 256.0 rounds up to 256.0
    if wrapped >= 256.0 { 0.0 } else { wrapped }
}

#[inline]
fn round8(value: f32) -> u8 {
    // float to int casts saturate, which clamps overshoot at the end of a sector
    (value + 0.5) as u8
}
