//! Hue, Saturation and Lightness color representation.

use crate::channel::{self, Channel};
use crate::errors::Error;
use crate::interpolate::wrap_hue;
use crate::model::ColorModel;
use crate::space::ColorSpace;

use super::{RgbColor, hexagonal_hue};

type Result<T> = std::result::Result<T, Error>;

const HSL_CHANNELS: [Channel; 3] = [
    Channel::hue(),
    Channel::percent("saturation"),
    Channel::percent("lightness"),
];

/// Hue (0-360), saturation (0-100) and lightness (0-100).
///
/// Lightness is the midpoint of the strongest and weakest RGB components, so
/// fully saturated colors sit at 50% lightness.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct HslColor {
    hue: f64,
    saturation: f64,
    lightness: f64,
    alpha: u8,
}

impl HslColor {
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Result<Self> {
        Self::from_list(&[hue, saturation, lightness])
    }

    pub fn new_with_alpha(hue: f64, saturation: f64, lightness: f64, alpha: u32) -> Result<Self> {
        Self::from_list(&[hue, saturation, lightness, alpha as f64])
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    pub fn with_hue(&self, hue: f64) -> Result<Self> {
        self.with_channel(0, hue)
    }

    pub fn with_saturation(&self, saturation: f64) -> Result<Self> {
        self.with_channel(1, saturation)
    }

    pub fn with_lightness(&self, lightness: f64) -> Result<Self> {
        self.with_channel(2, lightness)
    }
}

impl ColorModel for HslColor {
    const SPACE: ColorSpace = ColorSpace::Hsl;
    const CHANNELS: &'static [Channel] = &HSL_CHANNELS;

    fn to_list(&self) -> Vec<f64> {
        vec![self.hue, self.saturation, self.lightness]
    }

    fn alpha(&self) -> u8 {
        self.alpha
    }

    fn clamped(values: &[f64], alpha: u8) -> Self {
        let v = channel::clamp_list(Self::CHANNELS, values);
        HslColor {
            hue: v[0],
            saturation: v[1],
            lightness: v[2],
            alpha,
        }
    }

    fn to_rgb(&self) -> RgbColor {
        let s = self.saturation / 100.0;
        let l = self.lightness / 100.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h = wrap_hue(self.hue) / 60.0;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - chroma / 2.0;

        let [r, g, b] = match h as u8 {
            0 => [chroma, x, 0.0],
            1 => [x, chroma, 0.0],
            2 => [0.0, chroma, x],
            3 => [0.0, x, chroma],
            4 => [x, 0.0, chroma],
            _ => [chroma, 0.0, x],
        };

        RgbColor::from_unit(Self::SPACE, [r + m, g + m, b + m], self.alpha)
    }

    fn from_rgb(rgb: &RgbColor) -> Self {
        let [r, g, b] = rgb.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        let saturation = if max == min {
            0.0
        } else {
            (max - min) / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        Self::clamped(
            &[hexagonal_hue(r, g, b), saturation * 100.0, lightness * 100.0],
            rgb.alpha(),
        )
    }
}

impl_color_traits!(HslColor, Hsl);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_channels_close, assert_close};

    #[test]
    fn test_from_rgb() {
        let red = HslColor::from_rgb(&RgbColor::rgb8(255, 0, 0));
        assert_eq!(red.to_list(), vec![0.0, 100.0, 50.0]);

        let gray = HslColor::from_rgb(&RgbColor::rgb8(51, 51, 51));
        assert_close(&gray.to_list(), &[0.0, 0.0, 20.0], 1e-9);

        let white = HslColor::from_rgb(&RgbColor::rgb8(255, 255, 255));
        assert_eq!(white.to_list(), vec![0.0, 0.0, 100.0]);
    }

    #[test]
    fn test_to_rgb() {
        let color = HslColor::new(210.0, 50.0, 40.0).unwrap();
        assert_close(&color.to_rgb().to_list(), &[51.0, 102.0, 153.0], 1e-9);

        let magenta = HslColor::new(300.0, 100.0, 50.0).unwrap();
        assert_eq!(magenta.to_rgb().to_bytes(), [255, 0, 255, 255]);
    }

    #[test]
    fn test_round_trip() {
        for hue in (0..360).step_by(15) {
            for (saturation, lightness) in [(10.0, 10.0), (50.0, 50.0), (90.0, 75.0), (100.0, 30.0)] {
                let color = HslColor::new(hue as f64, saturation, lightness).unwrap();
                let back = HslColor::from_rgb(&color.to_rgb());
                assert_channels_close(HslColor::CHANNELS, &back.to_list(), &color.to_list(), 1e-6);
            }
        }
    }

    #[test]
    fn test_validation() {
        assert!(HslColor::new(0.0, 0.0, 100.1).is_err());
        assert!(HslColor::new(0.0, 0.0, 0.0).unwrap().with_lightness(-1.0).is_err());
        assert_eq!(
            HslColor::new(0.0, 0.0, 0.0).unwrap().with_hue(90.0).unwrap().hue(),
            90.0
        );
    }
}
