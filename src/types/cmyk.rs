//! Cyan, Magenta, Yellow and Key (black) color representation.

use crate::channel::{self, Channel};
use crate::errors::Error;
use crate::model::ColorModel;
use crate::space::ColorSpace;

use super::RgbColor;

type Result<T> = std::result::Result<T, Error>;

const CMYK_CHANNELS: [Channel; 4] = [
    Channel::percent("cyan"),
    Channel::percent("magenta"),
    Channel::percent("yellow"),
    Channel::percent("key"),
];

/// Subtractive ink coverage, each channel 0-100.
///
/// Conversion from RGB always produces the canonical form with as much key
/// (black) as possible, so a color built with both ink and key may come back
/// with different channel values but the same RGB equivalent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct CmykColor {
    cyan: f64,
    magenta: f64,
    yellow: f64,
    key: f64,
    alpha: u8,
}

impl CmykColor {
    pub fn new(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Result<Self> {
        Self::from_list(&[cyan, magenta, yellow, key])
    }

    pub fn new_with_alpha(cyan: f64, magenta: f64, yellow: f64, key: f64, alpha: u32) -> Result<Self> {
        Self::from_list(&[cyan, magenta, yellow, key, alpha as f64])
    }

    pub fn cyan(&self) -> f64 {
        self.cyan
    }

    pub fn magenta(&self) -> f64 {
        self.magenta
    }

    pub fn yellow(&self) -> f64 {
        self.yellow
    }

    pub fn key(&self) -> f64 {
        self.key
    }

    pub fn with_cyan(&self, cyan: f64) -> Result<Self> {
        self.with_channel(0, cyan)
    }

    pub fn with_magenta(&self, magenta: f64) -> Result<Self> {
        self.with_channel(1, magenta)
    }

    pub fn with_yellow(&self, yellow: f64) -> Result<Self> {
        self.with_channel(2, yellow)
    }

    pub fn with_key(&self, key: f64) -> Result<Self> {
        self.with_channel(3, key)
    }
}

impl ColorModel for CmykColor {
    const SPACE: ColorSpace = ColorSpace::Cmyk;
    const CHANNELS: &'static [Channel] = &CMYK_CHANNELS;

    fn to_list(&self) -> Vec<f64> {
        vec![self.cyan, self.magenta, self.yellow, self.key]
    }

    fn alpha(&self) -> u8 {
        self.alpha
    }

    fn clamped(values: &[f64], alpha: u8) -> Self {
        let v = channel::clamp_list(Self::CHANNELS, values);
        CmykColor {
            cyan: v[0],
            magenta: v[1],
            yellow: v[2],
            key: v[3],
            alpha,
        }
    }

    fn to_rgb(&self) -> RgbColor {
        let white = 1.0 - self.key / 100.0;
        let ink = |value: f64| (1.0 - value / 100.0) * white;
        RgbColor::from_unit(
            Self::SPACE,
            [ink(self.cyan), ink(self.magenta), ink(self.yellow)],
            self.alpha,
        )
    }

    fn from_rgb(rgb: &RgbColor) -> Self {
        let [r, g, b] = rgb.to_unit();
        let key = 1.0 - r.max(g).max(b);
        if key >= 1.0 {
            return Self::clamped(&[0.0, 0.0, 0.0, 100.0], rgb.alpha());
        }

        let ink = |value: f64| (1.0 - value - key) / (1.0 - key) * 100.0;
        Self::clamped(&[ink(r), ink(g), ink(b), key * 100.0], rgb.alpha())
    }
}

impl_color_traits!(CmykColor, Cmyk);
