//! Oklab, a perceptually uniform space derived from XYZ.

use crate::channel::{self, Channel};
use crate::errors::Error;
use crate::model::ColorModel;
use crate::space::ColorSpace;

use super::xyz::{self, multiply};
use super::{RgbColor, XyzColor};

type Result<T> = std::result::Result<T, Error>;

const OKLAB_CHANNELS: [Channel; 3] = [
    Channel::new("lightness", 0.0, 1.0),
    Channel::new("a", -0.5, 0.5),
    Channel::new("b", -0.5, 0.5),
];

const XYZ_TO_OKLMS: [[f64; 3]; 3] = [
    [0.8190224379967030, 0.3619062600528904, -0.1288737815209879],
    [0.0329836539323885, 0.9292868615863434, 0.0361446663506424],
    [0.0481771893596242, 0.2642395317527308, 0.6335478284694309],
];

const OKLMS_TO_OKLAB: [[f64; 3]; 3] = [
    [0.2104542683093140, 0.7936177747023054, -0.0040720430116193],
    [1.9779985324311684, -2.4285922420485799, 0.4505937096174110],
    [0.0259040424655478, 0.7827717124575296, -0.8086757549230774],
];

const OKLAB_TO_OKLMS: [[f64; 3]; 3] = [
    [1.0, 0.3963377773761749, 0.2158037573099136],
    [1.0, -0.1055613458156586, -0.0638541728258133],
    [1.0, -0.0894841775298119, -1.2914855480194092],
];

const OKLMS_TO_XYZ: [[f64; 3]; 3] = [
    [1.2268798758459243, -0.5578149944602171, 0.2813910456659647],
    [-0.0405757452148008, 1.1122868032803170, -0.0717110580655164],
    [-0.0763729366746601, -0.4214933324022432, 1.5869240198367816],
];

/// Lightness (0-1) with opponent axes `a` and `b` (-0.5 to 0.5).
///
/// Interpolating in Oklab keeps perceived lightness and hue steadier than
/// interpolating in RGB or HSB.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct OklabColor {
    lightness: f64,
    a: f64,
    b: f64,
    alpha: u8,
}

impl OklabColor {
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

impl ColorModel for OklabColor {
    const SPACE: ColorSpace = ColorSpace::Oklab;
    const CHANNELS: &'static [Channel] = &OKLAB_CHANNELS;

    fn to_list(&self) -> Vec<f64> {
        vec![self.lightness, self.a, self.b]
    }

    fn alpha(&self) -> u8 {
        self.alpha
    }

    fn clamped(values: &[f64], alpha: u8) -> Self {
        let v = channel::clamp_list(Self::CHANNELS, values);
        OklabColor {
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
        let lms = multiply(&OKLAB_TO_OKLMS, [self.lightness, self.a, self.b]);
        multiply(&OKLMS_TO_XYZ, lms.map(|v| v.powi(3))).map(|v| v * 100.0)
    }

    fn from_tristimulus(xyz: [f64; 3], alpha: u8) -> Self {
        let lms = multiply(&XYZ_TO_OKLMS, xyz.map(|v| v / 100.0));
        Self::clamped(&multiply(&OKLMS_TO_OKLAB, lms.map(f64::cbrt)), alpha)
    }

    fn to_xyz(&self) -> XyzColor {
        XyzColor::clamped(&self.tristimulus(), self.alpha)
    }

    fn from_xyz(xyz: &XyzColor) -> Self {
        Self::from_tristimulus(xyz.to_array(), xyz.alpha())
    }
}

impl_color_traits!(OklabColor, Oklab);
