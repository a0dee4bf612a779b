//! CIE L*a*b* relative to the D65 white point.

use crate::channel::{self, Channel};
use crate::errors::Error;
use crate::model::ColorModel;
use crate::space::ColorSpace;

use super::xyz::{self, WHITE_POINT};
use super::{RgbColor, XyzColor};

type Result<T> = std::result::Result<T, Error>;

const LAB_CHANNELS: [Channel; 3] = [
    Channel::new("lightness", 0.0, 100.0),
    Channel::new("a", -128.0, 127.0),
    Channel::new("b", -128.0, 127.0),
];

const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

fn forward(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

fn inverse(f: f64) -> f64 {
    let cubed = f.powi(3);
    if cubed > EPSILON {
        cubed
    } else {
        (116.0 * f - 16.0) / KAPPA
    }
}

/// Lightness (0-100) with the green-red `a` and blue-yellow `b` opponent
/// axes (-128 to 127).
///
/// Conversions to and from other perceptual models go through
/// [`XyzColor`], so values outside the sRGB gamut are kept; they are only
/// clamped when turned into RGB.
///
/// # Examples
///
/// ```
/// use color_models_rs::{ColorModel, LabColor, RgbColor};
///
/// let white = LabColor::from_model(&RgbColor::rgb8(255, 255, 255));
/// assert!((white.lightness() - 100.0).abs() < 1e-9);
/// assert!(white.a().abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct LabColor {
    lightness: f64,
    a: f64,
    b: f64,
    alpha: u8,
}

impl LabColor {
    pub fn new(lightness: f64, a: f64, b: f64) -> Result<Self> {
        Self::from_list(&[lightness, a, b])
    }

    pub fn new_with_alpha(lightness: f64, a: f64, b: f64, alpha: u32) -> Result<Self> {
        Self::from_list(&[lightness, a, b, alpha as f64])
    }

    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn with_lightness(&self, lightness: f64) -> Result<Self> {
        self.with_channel(0, lightness)
    }

    pub fn with_a(&self, a: f64) -> Result<Self> {
        self.with_channel(1, a)
    }

    pub fn with_b(&self, b: f64) -> Result<Self> {
        self.with_channel(2, b)
    }
}

impl ColorModel for LabColor {
    const SPACE: ColorSpace = ColorSpace::Lab;
    const CHANNELS: &'static [Channel] = &LAB_CHANNELS;

    fn to_list(&self) -> Vec<f64> {
        vec![self.lightness, self.a, self.b]
    }

    fn alpha(&self) -> u8 {
        self.alpha
    }

    fn clamped(values: &[f64], alpha: u8) -> Self {
        let v = channel::clamp_list(Self::CHANNELS, values);
        LabColor {
            lightness: v[0],
            a: v[1],
            b: v[2],
            alpha,
        }
    }

    fn to_rgb(&self) -> RgbColor {
        xyz::rgb_from_tristimulus(Self::SPACE, self.tristimulus(), self.alpha)
    }

    fn from_rgb(rgb: &RgbColor) -> Self {
        Self::from_tristimulus(xyz::tristimulus(rgb), rgb.alpha())
    }

    fn tristimulus(&self) -> [f64; 3] {
        let fy = (self.lightness + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;

        let y = if self.lightness > KAPPA * EPSILON {
            fy.powi(3)
        } else {
            self.lightness / KAPPA
        };

        [
            inverse(fx) * WHITE_POINT[0],
            y * WHITE_POINT[1],
            inverse(fz) * WHITE_POINT[2],
        ]
    }

    fn from_tristimulus([x, y, z]: [f64; 3], alpha: u8) -> Self {
        let fx = forward(x / WHITE_POINT[0]);
        let fy = forward(y / WHITE_POINT[1]);
        let fz = forward(z / WHITE_POINT[2]);

        Self::clamped(
            &[116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)],
            alpha,
        )
    }

    fn to_xyz(&self) -> XyzColor {
        XyzColor::clamped(&self.tristimulus(), self.alpha)
    }

    fn from_xyz(xyz: &XyzColor) -> Self {
        Self::from_tristimulus(xyz.to_array(), xyz.alpha())
    }
}

impl_color_traits!(LabColor, Lab);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_close;

    #[test]
    fn test_from_rgb() {
        let red = LabColor::from_rgb(&RgbColor::rgb8(255, 0, 0));
        assert_close(
            &red.to_list(),
            &[53.23711559542936, 80.09011352310385, 67.20326351172214],
            1e-6,
        );

        let black = LabColor::from_rgb(&RgbColor::rgb8(0, 0, 0));
        assert_close(&black.to_list(), &[0.0, 0.0, 0.0], 1e-9);
    }

    #[test]
    fn test_to_xyz() {
        let xyz = LabColor::new(60.0, 100.0, -60.0).unwrap().to_xyz();
        assert_close(
            &xyz.to_list(),
            &[59.441947811192456, 28.123334290048792, 94.90655815236852],
            1e-6,
        );
    }

    #[test]
    fn test_rgb_round_trip() {
        for bytes in [[255, 0, 0], [18, 52, 86], [200, 200, 200], [3, 1, 2], [0, 255, 128]] {
            let rgb = RgbColor::rgb8(bytes[0], bytes[1], bytes[2]);
            let back = LabColor::from_rgb(&rgb).to_rgb();
            assert_close(&back.to_list(), &rgb.to_list(), 1e-6);
        }
    }

    #[test]
    fn test_out_of_gamut_to_rgb_is_clamped() {
        let rgb = LabColor::new(60.0, 100.0, -60.0).unwrap().to_rgb();
        assert!(rgb.to_list().iter().all(|v| (0.0..=255.0).contains(v)));
    }

    #[test]
    fn test_bounds() {
        assert!(LabColor::new(50.0, -128.0, 127.0).is_ok());
        assert!(LabColor::new(50.0, 0.0, 128.0).is_err());
        assert!(LabColor::new(101.0, 0.0, 0.0).is_err());
    }
}
