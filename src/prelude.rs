//! Commonly used types
pub use crate::{
    rainbow::*,
    liber8tion::Hsv
};

pub use crate::liber8tion::interpolate::{Fract8, Fract8Ops};

pub use rgb::Rgb;
