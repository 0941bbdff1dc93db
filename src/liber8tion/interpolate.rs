//! Scaling with 8 bit fixed point fractions
use rgb::*;

/// An alias for u8 to indicate that the value is a fraction from 0-255 where 0 is 0% and 255 is ~100%
pub type Fract8 = u8;

macro_rules! fract8_color_impl {
    ($color_type:tt $($component:ident),+) => {
        impl<T> Fract8Ops for $color_type<T> where T: Fract8Ops {
            #[inline(always)]
            fn scale8(self, scale: Fract8) -> Self {
                Self {
                    $($component: self.$component.scale8(scale)),*
                }
            }

            #[inline(always)]
            fn scale8_video(self, scale: Fract8) -> Self {
                Self {
                    $($component: self.$component.scale8_video(scale)),*
                }
            }

            #[inline(always)]
            fn qadd8(self, floor: Fract8) -> Self {
                Self {
                    $($component: self.$component.qadd8(floor)),*
                }
            }
        }
    };
}

fract8_color_impl!(Rgb r,g,b);
fract8_color_impl!(Grb g,r,b);
fract8_color_impl!(Bgr b,g,r);

/// Fixed point 8 bit operations on pixels and their components
pub trait Fract8Ops {
    /// Scales the value by `scale / 256`, where a scale of 255 is treated as 256
    fn scale8(self, scale: Fract8) -> Self;
    /// Like [Fract8Ops::scale8], but never scales a nonzero value to zero with a nonzero scale
    fn scale8_video(self, scale: Fract8) -> Self;
    /// Adds a constant to every component, saturating at 255
    fn qadd8(self, floor: Fract8) -> Self;
}

impl Fract8Ops for u8 {
    #[inline(always)]
    fn scale8(self, scale: Fract8) -> Self {
        ((self as u16 * (1 + scale as u16)) >> 8) as u8
    }

    #[inline(always)]
    fn scale8_video(self, scale: Fract8) -> Self {
        let floor = (self != 0 && scale != 0) as u8;
        (((self as u16 * scale as u16) >> 8) as u8) + floor
    }

    #[inline(always)]
    fn qadd8(self, floor: Fract8) -> Self {
        self.saturating_add(floor)
    }
}

/// Scales `i` by `scale / 256`, treating 255 as 256. The result is truncated.
#[inline(always)]
pub fn scale8<T: Fract8Ops>(i: T, scale: Fract8) -> T {
    i.scale8(scale)
}

/// Scales `i` by `scale / 256`, rounding up to 1 if both `i` and `scale` are nonzero.
///
/// This keeps dim pixels visible instead of switching them off entirely.
#[inline(always)]
pub fn scale8_video<T: Fract8Ops>(i: T, scale: Fract8) -> T {
    i.scale8_video(scale)
}

/// Floating point [scale8], with no truncation
#[inline(always)]
pub fn scalef(i: f32, scale: f32) -> f32 {
    (i * (1.0 + scale)) / 256.0
}

/// Floating point [scale8_video], with no truncation
#[inline(always)]
pub fn scalef_video(i: f32, scale: f32) -> f32 {
    let floor = if i != 0.0 && scale != 0.0 { 1.0 } else { 0.0 };
    floor + (i * scale) / 256.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale8_is_fixed_point_multiply() {
        assert_eq!(scale8(255u8, 255), 255);
        assert_eq!(scale8(128u8, 128), 64);
        assert_eq!(scale8(1u8, 255), 1);
        assert_eq!(scale8(255u8, 0), 0);
        assert_eq!(scale8(248u8, 85), 83);
        assert_eq!(scale8(248u8, 170), 165);
    }

    #[test]
    fn scale8_never_grows() {
        for i in 0..=255u8 {
            for scale in 0..=255u8 {
                assert!(scale8(i, scale) <= i);
            }
        }
    }

    #[test]
    fn scale8_video_keeps_a_floor() {
        for i in 0..=255u8 {
            for scale in 0..=255u8 {
                let scaled = scale8_video(i, scale);
                if i == 0 || scale == 0 {
                    assert_eq!(scaled, 0, "i={} scale={}", i, scale);
                } else {
                    assert!(scaled >= 1, "i={} scale={}", i, scale);
                }
            }
        }
        assert_eq!(scale8_video(1u8, 1), 1);
        assert_eq!(scale8_video(255u8, 255), 255);
        assert_eq!(scale8_video(127u8, 127), 64);
    }

    #[test]
    fn scalef_does_not_truncate() {
        assert_eq!(scalef(128.0, 127.0), 64.0);
        assert_eq!(scalef(4.0, 85.0), 1.34375);
        assert_eq!(scalef_video(0.0, 200.0), 0.0);
        assert_eq!(scalef_video(128.0, 0.0), 0.0);
        assert_eq!(scalef_video(128.0, 128.0), 65.0);
    }

    #[test]
    fn pixels_scale_per_channel() {
        let pixel = Rgb::new(255u8, 128, 0);
        assert_eq!(pixel.scale8(128), Rgb::new(128, 64, 0));
        assert_eq!(pixel.scale8_video(1), Rgb::new(1, 1, 0));
        assert_eq!(pixel.qadd8(10), Rgb::new(255, 138, 10));

        let grb = Grb { g: 200u8, r: 100, b: 0 };
        assert_eq!(grb.scale8(127), Grb { g: 100, r: 50, b: 0 });
    }
}
