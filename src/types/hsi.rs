//! Hue, Saturation and Intensity color representation.

use crate::channel::{self, Channel};
use crate::errors::Error;
use crate::interpolate::wrap_hue;
use crate::model::ColorModel;
use crate::space::ColorSpace;

use super::RgbColor;

type Result<T> = std::result::Result<T, Error>;

const HSI_CHANNELS: [Channel; 3] = [
    Channel::hue(),
    Channel::percent("saturation"),
    Channel::percent("intensity"),
];

/// Hue (0-360), saturation (0-100) and intensity (0-100).
///
/// Intensity is the mean of the RGB components and the hue is the geometric
/// angle around the gray axis. Not every combination is displayable: high
/// saturation at high intensity leaves the RGB cube and is clamped when
/// converted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct HsiColor {
    hue: f64,
    saturation: f64,
    intensity: f64,
    alpha: u8,
}

impl HsiColor {
    pub fn new(hue: f64, saturation: f64, intensity: f64) -> Result<Self> {
        Self::from_list(&[hue, saturation, intensity])
    }

    pub fn new_with_alpha(hue: f64, saturation: f64, intensity: f64, alpha: u32) -> Result<Self> {
        Self::from_list(&[hue, saturation, intensity, alpha as f64])
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    pub fn with_hue(&self, hue: f64) -> Result<Self> {
        self.with_channel(0, hue)
    }

    pub fn with_saturation(&self, saturation: f64) -> Result<Self> {
        self.with_channel(1, saturation)
    }

    pub fn with_intensity(&self, intensity: f64) -> Result<Self> {
        self.with_channel(2, intensity)
    }
}

impl ColorModel for HsiColor {
    const SPACE: ColorSpace = ColorSpace::Hsi;
    const CHANNELS: &'static [Channel] = &HSI_CHANNELS;

    fn to_list(&self) -> Vec<f64> {
        vec![self.hue, self.saturation, self.intensity]
    }

    fn alpha(&self) -> u8 {
        self.alpha
    }

    fn clamped(values: &[f64], alpha: u8) -> Self {
        let v = channel::clamp_list(Self::CHANNELS, values);
        HsiColor {
            hue: v[0],
            saturation: v[1],
            intensity: v[2],
            alpha,
        }
    }

    fn to_rgb(&self) -> RgbColor {
        let s = self.saturation / 100.0;
        let i = self.intensity / 100.0;
        let hue = wrap_hue(self.hue);

        // primary component of the 120 degree sector starting at the weakest one
        let primary = |h: f64| i * (1.0 + s * h.to_radians().cos() / (60.0 - h).to_radians().cos());
        let low = i * (1.0 - s);

        let rgb = if hue < 120.0 {
            let r = primary(hue);
            [r, 3.0 * i - (r + low), low]
        } else if hue < 240.0 {
            let g = primary(hue - 120.0);
            [low, g, 3.0 * i - (low + g)]
        } else {
            let b = primary(hue - 240.0);
            [3.0 * i - (low + b), low, b]
        };

        RgbColor::from_unit(Self::SPACE, rgb, self.alpha)
    }

    fn from_rgb(rgb: &RgbColor) -> Self {
        let [r, g, b] = rgb.to_unit();
        let intensity = (r + g + b) / 3.0;
        let saturation = if intensity == 0.0 {
            0.0
        } else {
            1.0 - r.min(g).min(b) / intensity
        };

        let numerator = 0.5 * ((r - g) + (r - b));
        let denominator = ((r - g).powi(2) + (r - b) * (g - b)).sqrt();
        let hue = if denominator == 0.0 {
            0.0
        } else {
            let theta = (numerator / denominator).clamp(-1.0, 1.0).acos().to_degrees();
            if b <= g { theta } else { 360.0 - theta }
        };

        Self::clamped(
            &[wrap_hue(hue), saturation * 100.0, intensity * 100.0],
            rgb.alpha(),
        )
    }
}

impl_color_traits!(HsiColor, Hsi);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_channels_close, assert_close};

    #[test]
    fn test_from_rgb() {
        let red = HsiColor::from_rgb(&RgbColor::rgb8(255, 0, 0));
        assert_close(&red.to_list(), &[0.0, 100.0, 100.0 / 3.0], 1e-9);

        let blue = HsiColor::from_rgb(&RgbColor::rgb8(0, 0, 255));
        assert_close(&blue.to_list(), &[240.0, 100.0, 100.0 / 3.0], 1e-9);

        let gray = HsiColor::from_rgb(&RgbColor::rgb8(128, 128, 128));
        assert_eq!(gray.hue(), 0.0);
        assert_eq!(gray.saturation(), 0.0);
    }

    #[test]
    fn test_to_rgb() {
        let green = HsiColor::new(120.0, 50.0, 50.0).unwrap();
        assert_close(&green.to_rgb().to_list(), &[63.75, 255.0, 63.75], 1e-9);
    }

    #[test]
    fn test_round_trip() {
        for hue in (0..360).step_by(10) {
            for (saturation, intensity) in [(20.0, 20.0), (40.0, 50.0), (10.0, 80.0), (100.0, 30.0)] {
                let color = HsiColor::new(hue as f64, saturation, intensity).unwrap();
                let back = HsiColor::from_rgb(&color.to_rgb());
                assert_channels_close(HsiColor::CHANNELS, &back.to_list(), &color.to_list(), 1e-6);
            }
        }
    }

    #[test]
    fn test_out_of_gamut_is_clamped() {
        let color = HsiColor::new(0.0, 100.0, 100.0).unwrap();
        assert_eq!(color.to_rgb().to_bytes(), [255, 0, 0, 255]);
    }
}
