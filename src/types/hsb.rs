//! Hue, Saturation and Brightness (HSV) color representation.

use crate::channel::{self, Channel};
use crate::errors::Error;
use crate::model::ColorModel;
use crate::space::ColorSpace;

use super::{RgbColor, hexagonal_hue, max_saturation};

type Result<T> = std::result::Result<T, Error>;

const HSB_CHANNELS: [Channel; 3] = [
    Channel::hue(),
    Channel::percent("saturation"),
    Channel::percent("brightness"),
];

/// Hue, Saturation and Brightness color representation.
///
/// - Hue: The color angle on the color wheel (0-360 degrees)
/// - Saturation: The intensity of the color (0-100 percent)
/// - Brightness: The value of the strongest RGB component (0-100 percent)
///
/// This is commonly used in color pickers and provides a more intuitive
/// way to select colors than RGB values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct HsbColor {
    hue: f64,
    saturation: f64,
    brightness: f64,
    alpha: u8,
}

impl HsbColor {
    /// Create a new opaque HsbColor with the given values.
    ///
    /// # Arguments
    ///
    /// * `hue` - Hue angle in degrees (0-360)
    /// * `saturation` - Saturation percentage (0-100)
    /// * `brightness` - Brightness percentage (0-100)
    ///
    /// Returns [`Error::RangeViolation`] if values are outside valid ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_models_rs::HsbColor;
    ///
    /// assert!(HsbColor::new(0.0, 100.0, 100.0).is_ok());   // Red at full saturation
    /// assert!(HsbColor::new(120.0, 50.0, 75.0).is_ok());  // Muted green
    /// assert!(HsbColor::new(361.0, 50.0, 50.0).is_err()); // Invalid hue
    /// assert!(HsbColor::new(180.0, -1.0, 50.0).is_err()); // Invalid saturation
    /// ```
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Result<Self> {
        Self::from_list(&[hue, saturation, brightness])
    }

    pub fn new_with_alpha(hue: f64, saturation: f64, brightness: f64, alpha: u32) -> Result<Self> {
        Self::from_list(&[hue, saturation, brightness, alpha as f64])
    }

    /// Get the hue value.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Get the saturation value.
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Get the brightness value.
    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    pub fn with_hue(&self, hue: f64) -> Result<Self> {
        self.with_channel(0, hue)
    }

    pub fn with_saturation(&self, saturation: f64) -> Result<Self> {
        self.with_channel(1, saturation)
    }

    pub fn with_brightness(&self, brightness: f64) -> Result<Self> {
        self.with_channel(2, brightness)
    }
}

impl ColorModel for HsbColor {
    const SPACE: ColorSpace = ColorSpace::Hsb;
    const CHANNELS: &'static [Channel] = &HSB_CHANNELS;

    fn to_list(&self) -> Vec<f64> {
        vec![self.hue, self.saturation, self.brightness]
    }

    fn alpha(&self) -> u8 {
        self.alpha
    }

    fn clamped(values: &[f64], alpha: u8) -> Self {
        let v = channel::clamp_list(Self::CHANNELS, values);
        HsbColor {
            hue: v[0],
            saturation: v[1],
            brightness: v[2],
            alpha,
        }
    }

    /// Convert to RGB.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_models_rs::{ColorModel, HsbColor};
    ///
    /// let hsb = HsbColor::new(0.0, 100.0, 100.0).unwrap();
    /// assert_eq!(hsb.to_rgb().to_bytes(), [255, 0, 0, 255]);
    /// ```
    fn to_rgb(&self) -> RgbColor {
        let s = self.saturation / 100.0;
        let v = self.brightness / 100.0;

        if s == 0.0 {
            return RgbColor::from_unit(Self::SPACE, [v, v, v], self.alpha);
        }

        let h = self.hue / 60.0;
        let i = h.floor() as i32;
        let f = h - i as f64;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let rgb = match i % 6 {
            0 => [v, t, p],
            1 => [q, v, p],
            2 => [p, v, t],
            3 => [p, q, v],
            4 => [t, p, v],
            _ => [v, p, q],
        };

        RgbColor::from_unit(Self::SPACE, rgb, self.alpha)
    }

    fn from_rgb(rgb: &RgbColor) -> Self {
        let [r, g, b] = rgb.to_unit();
        Self::clamped(
            &[
                hexagonal_hue(r, g, b),
                max_saturation(r, g, b) * 100.0,
                r.max(g).max(b) * 100.0,
            ],
            rgb.alpha(),
        )
    }
}

impl_color_traits!(HsbColor, Hsb);
