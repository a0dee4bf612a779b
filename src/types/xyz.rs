//! CIE 1931 XYZ under the D65 white point.

use crate::channel::{self, Channel};
use crate::errors::Error;
use crate::model::ColorModel;
use crate::space::ColorSpace;

use super::RgbColor;

type Result<T> = std::result::Result<T, Error>;

const LINEAR_SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.41239079926595934, 0.357584339383878, 0.1804807884018343],
    [0.21263900587151027, 0.715168678767756, 0.07219231536073371],
    [0.01933081871559182, 0.11919477979462598, 0.9505321522496607],
];

const XYZ_TO_LINEAR_SRGB: [[f64; 3]; 3] = [
    [3.2409699419045226, -1.537383177570094, -0.4986107602930034],
    [-0.9692436362808796, 1.8759675015077202, 0.04155505740717559],
    [0.05563007969699366, -0.20397695888897652, 1.0569715142428786],
];

/// XYZ of sRGB white, scaled so that Y is 100.
pub(crate) const WHITE_POINT: [f64; 3] = [95.04559270516717, 100.0, 108.90577507598785];

const XYZ_CHANNELS: [Channel; 3] = [
    Channel::new("x", 0.0, WHITE_POINT[0]),
    Channel::new("y", 0.0, WHITE_POINT[1]),
    Channel::new("z", 0.0, WHITE_POINT[2]),
];

pub(crate) fn multiply(matrix: &[[f64; 3]; 3], [a, b, c]: [f64; 3]) -> [f64; 3] {
    matrix.map(|[m0, m1, m2]| m0 * a + m1 * b + m2 * c)
}

/// sRGB transfer function, gamma-encoded to linear.
fn linearize(value: f64) -> f64 {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

fn compand(value: f64) -> f64 {
    if value <= 0.0031308 {
        value * 12.92
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    }
}

/// Unclamped tristimulus values (Y from 0 to 100) of an RGB color.
pub(crate) fn tristimulus(rgb: &RgbColor) -> [f64; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, rgb.to_unit().map(linearize)).map(|v| v * 100.0)
}

/// RGB of raw tristimulus values, clamped into the sRGB gamut.
pub(crate) fn rgb_from_tristimulus(space: ColorSpace, xyz: [f64; 3], alpha: u8) -> RgbColor {
    let linear = multiply(&XYZ_TO_LINEAR_SRGB, xyz.map(|v| v / 100.0));
    RgbColor::from_unit(space, linear.map(compand), alpha)
}

/// Tristimulus values, each bounded by the D65 white point (Y from 0 to 100).
///
/// Perceptual models convert among themselves through raw tristimulus values
/// rather than through RGB, so [`LabColor`](super::LabColor) and
/// [`OklabColor`](super::OklabColor) values outside the sRGB gamut survive.
/// Converting into `XyzColor` itself clamps to the white-point box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct XyzColor {
    x: f64,
    y: f64,
    z: f64,
    alpha: u8,
}

impl XyzColor {
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        Self::from_list(&[x, y, z])
    }

    pub fn new_with_alpha(x: f64, y: f64, z: f64, alpha: u32) -> Result<Self> {
        Self::from_list(&[x, y, z, alpha as f64])
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn with_x(&self, x: f64) -> Result<Self> {
        self.with_channel(0, x)
    }

    pub fn with_y(&self, y: f64) -> Result<Self> {
        self.with_channel(1, y)
    }

    pub fn with_z(&self, z: f64) -> Result<Self> {
        self.with_channel(2, z)
    }

    pub(crate) fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl ColorModel for XyzColor {
    const SPACE: ColorSpace = ColorSpace::Xyz;
    const CHANNELS: &'static [Channel] = &XYZ_CHANNELS;

    fn to_list(&self) -> Vec<f64> {
        vec![self.x, self.y, self.z]
    }

    fn alpha(&self) -> u8 {
        self.alpha
    }

    fn clamped(values: &[f64], alpha: u8) -> Self {
        let v = channel::clamp_list(Self::CHANNELS, values);
        XyzColor {
            x: v[0],
            y: v[1],
            z: v[2],
            alpha,
        }
    }

    fn to_rgb(&self) -> RgbColor {
        rgb_from_tristimulus(Self::SPACE, self.to_array(), self.alpha)
    }

    fn from_rgb(rgb: &RgbColor) -> Self {
        Self::clamped(&tristimulus(rgb), rgb.alpha())
    }

    fn to_xyz(&self) -> XyzColor {
        *self
    }

    fn from_xyz(xyz: &XyzColor) -> Self {
        *xyz
    }
}

impl_color_traits!(XyzColor, Xyz);
