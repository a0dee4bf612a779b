//! Hue, Saturation and Perceived brightness color representation.

use crate::channel::{self, Channel};
use crate::errors::Error;
use crate::interpolate::wrap_hue;
use crate::model::ColorModel;
use crate::space::ColorSpace;

use super::{RgbColor, hexagonal_hue, max_saturation};

type Result<T> = std::result::Result<T, Error>;

const HSP_CHANNELS: [Channel; 3] = [
    Channel::hue(),
    Channel::percent("saturation"),
    Channel::percent("perceived_brightness"),
];

/// Perceptual weights of the red, green and blue components.
const WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Hue (0-360), saturation (0-100) and perceived brightness (0-100).
///
/// Hue and saturation match [`HsbColor`](super::HsbColor); the third channel
/// is `sqrt(0.299 R² + 0.587 G² + 0.114 B²)`, which tracks how bright a color
/// looks rather than its strongest component.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct HspColor {
    hue: f64,
    saturation: f64,
    perceived_brightness: f64,
    alpha: u8,
}

impl HspColor {
    pub fn new(hue: f64, saturation: f64, perceived_brightness: f64) -> Result<Self> {
        Self::from_list(&[hue, saturation, perceived_brightness])
    }

    pub fn new_with_alpha(
        hue: f64,
        saturation: f64,
        perceived_brightness: f64,
        alpha: u32,
    ) -> Result<Self> {
        Self::from_list(&[hue, saturation, perceived_brightness, alpha as f64])
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn perceived_brightness(&self) -> f64 {
        self.perceived_brightness
    }

    pub fn with_hue(&self, hue: f64) -> Result<Self> {
        self.with_channel(0, hue)
    }

    pub fn with_saturation(&self, saturation: f64) -> Result<Self> {
        self.with_channel(1, saturation)
    }

    pub fn with_perceived_brightness(&self, perceived_brightness: f64) -> Result<Self> {
        self.with_channel(2, perceived_brightness)
    }
}

impl ColorModel for HspColor {
    const SPACE: ColorSpace = ColorSpace::Hsp;
    const CHANNELS: &'static [Channel] = &HSP_CHANNELS;

    fn to_list(&self) -> Vec<f64> {
        vec![self.hue, self.saturation, self.perceived_brightness]
    }

    fn alpha(&self) -> u8 {
        self.alpha
    }

    fn clamped(values: &[f64], alpha: u8) -> Self {
        let v = channel::clamp_list(Self::CHANNELS, values);
        HspColor {
            hue: v[0],
            saturation: v[1],
            perceived_brightness: v[2],
            alpha,
        }
    }

    fn to_rgb(&self) -> RgbColor {
        let s = self.saturation / 100.0;
        let p = self.perceived_brightness / 100.0;

        let scaled = wrap_hue(self.hue) / 60.0;
        let sector = (scaled.floor() as usize).min(5);
        let f = scaled - sector as f64;

        // indices of the strongest, middle and weakest components, and how far
        // the middle one sits between the other two
        let (high, mid, low, h) = match sector {
            0 => (0, 1, 2, f),
            1 => (1, 0, 2, 1.0 - f),
            2 => (1, 2, 0, f),
            3 => (2, 1, 0, 1.0 - f),
            4 => (2, 0, 1, f),
            _ => (0, 2, 1, 1.0 - f),
        };

        let mut rgb = [0.0; 3];
        let min_over_max = 1.0 - s;
        if min_over_max > 0.0 {
            let part = 1.0 + h * (1.0 / min_over_max - 1.0);
            let weakest = p
                / (WEIGHTS[high] / min_over_max.powi(2)
                    + WEIGHTS[mid] * part.powi(2)
                    + WEIGHTS[low])
                    .sqrt();
            let strongest = weakest / min_over_max;
            rgb[high] = strongest;
            rgb[mid] = weakest + h * (strongest - weakest);
            rgb[low] = weakest;
        } else {
            let strongest = (p * p / (WEIGHTS[high] + WEIGHTS[mid] * h * h)).sqrt();
            rgb[high] = strongest;
            rgb[mid] = strongest * h;
        }

        RgbColor::from_unit(Self::SPACE, rgb, self.alpha)
    }

    fn from_rgb(rgb: &RgbColor) -> Self {
        let [r, g, b] = rgb.to_unit();
        let perceived = (WEIGHTS[0] * r * r + WEIGHTS[1] * g * g + WEIGHTS[2] * b * b).sqrt();

        Self::clamped(
            &[
                hexagonal_hue(r, g, b),
                max_saturation(r, g, b) * 100.0,
                perceived * 100.0,
            ],
            rgb.alpha(),
        )
    }
}

impl_color_traits!(HspColor, Hsp);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_channels_close, assert_close};

    #[test]
    fn test_from_rgb() {
        let red = HspColor::from_rgb(&RgbColor::rgb8(255, 0, 0));
        assert_close(&red.to_list(), &[0.0, 100.0, 54.680892457969264], 1e-9);

        let white = HspColor::from_rgb(&RgbColor::rgb8(255, 255, 255));
        assert_close(&white.to_list(), &[0.0, 0.0, 100.0], 1e-9);
    }

    #[test]
    fn test_to_rgb() {
        let green = HspColor::new(120.0, 50.0, 50.0).unwrap();
        assert_close(
            &green.to_rgb().to_list(),
            &[76.73208186160709, 153.46416372321417, 76.73208186160709],
            1e-6,
        );

        let gray = HspColor::new(45.0, 0.0, 40.0).unwrap();
        assert_close(&gray.to_rgb().to_list(), &[102.0, 102.0, 102.0], 1e-9);
    }

    #[test]
    fn test_round_trip() {
        for hue in (0..360).step_by(10) {
            for (saturation, brightness) in [(20.0, 20.0), (50.0, 50.0), (80.0, 25.0), (100.0, 20.0)] {
                let color = HspColor::new(hue as f64, saturation, brightness).unwrap();
                let back = HspColor::from_rgb(&color.to_rgb());
                assert_channels_close(HspColor::CHANNELS, &back.to_list(), &color.to_list(), 1e-6);
            }
        }
    }

    #[test]
    fn test_brightness_differs_from_hsb() {
        // same HSB value, very different perceived brightness
        let yellow = HspColor::from_rgb(&RgbColor::rgb8(255, 255, 0));
        let blue = HspColor::from_rgb(&RgbColor::rgb8(0, 0, 255));
        assert!(yellow.perceived_brightness() > 90.0);
        assert!(blue.perceived_brightness() < 40.0);
    }
}
