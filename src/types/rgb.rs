//! RGB, the hub every other model converts through.

use std::str::FromStr;

use log::debug;

use crate::channel::{self, ALPHA_MAX, Channel};
use crate::errors::Error;
use crate::model::ColorModel;
use crate::space::ColorSpace;

type Result<T> = std::result::Result<T, Error>;

const RGB_CHANNELS: [Channel; 3] = [
    Channel::new("red", 0.0, 255.0),
    Channel::new("green", 0.0, 255.0),
    Channel::new("blue", 0.0, 255.0),
];

/// Slack before a converted component counts as out of gamut.
const GAMUT_EPSILON: f64 = 1e-6;

/// An RGB color with red, green, and blue components (0-255 each).
///
/// Components are kept as floating point so that conversions through the hub
/// do not quantize; they are rounded to 8 bits only when packed into ARGB or
/// hex form.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct RgbColor {
    red: f64,
    green: f64,
    blue: f64,
    alpha: u8,
}

impl RgbColor {
    pub const RED: usize = 0;
    pub const GREEN: usize = 1;
    pub const BLUE: usize = 2;

    /// Create an opaque color, failing if a component is outside 0-255.
    pub fn new(red: f64, green: f64, blue: f64) -> Result<Self> {
        Self::from_list(&[red, green, blue])
    }

    pub fn new_with_alpha(red: f64, green: f64, blue: f64, alpha: u32) -> Result<Self> {
        Self::from_list(&[red, green, blue, alpha as f64])
    }

    /// Create an opaque color from 8-bit components.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_models_rs::{ColorModel, RgbColor};
    ///
    /// let orange = RgbColor::rgb8(255, 128, 0);
    /// assert_eq!(orange.to_hex(), "#FF8000");
    /// ```
    pub fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::from_bytes([red, green, blue, ALPHA_MAX])
    }

    pub fn red(&self) -> f64 {
        self.red
    }

    pub fn green(&self) -> f64 {
        self.green
    }

    pub fn blue(&self) -> f64 {
        self.blue
    }

    pub(crate) fn from_bytes([red, green, blue, alpha]: [u8; 4]) -> Self {
        RgbColor {
            red: red as f64,
            green: green as f64,
            blue: blue as f64,
            alpha,
        }
    }

    /// `[red, green, blue, alpha]` rounded to the nearest 8-bit value.
    pub fn to_bytes(&self) -> [u8; 4] {
        let byte = |value: f64| value.round().clamp(0.0, 255.0) as u8;
        [byte(self.red), byte(self.green), byte(self.blue), self.alpha]
    }

    /// Components scaled onto 0-1.
    pub(crate) fn to_unit(&self) -> [f64; 3] {
        [self.red / 255.0, self.green / 255.0, self.blue / 255.0]
    }

    /// Build from 0-1 components produced by a model conversion, clamping any
    /// component that fell outside the sRGB gamut.
    pub(crate) fn from_unit(space: ColorSpace, [red, green, blue]: [f64; 3], alpha: u8) -> Self {
        let outside = |value: f64| !(-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(&value);
        if outside(red) || outside(green) || outside(blue) {
            debug!("{space} color maps outside the sRGB gamut ({red}, {green}, {blue}); clamping");
        }
        Self::clamped(&[red * 255.0, green * 255.0, blue * 255.0], alpha)
    }
}

impl ColorModel for RgbColor {
    const SPACE: ColorSpace = ColorSpace::Rgb;
    const CHANNELS: &'static [Channel] = &RGB_CHANNELS;

    fn to_list(&self) -> Vec<f64> {
        vec![self.red, self.green, self.blue]
    }

    fn alpha(&self) -> u8 {
        self.alpha
    }

    fn clamped(values: &[f64], alpha: u8) -> Self {
        let v = channel::clamp_list(Self::CHANNELS, values);
        RgbColor {
            red: v[0],
            green: v[1],
            blue: v[2],
            alpha,
        }
    }

    fn to_rgb(&self) -> RgbColor {
        *self
    }

    fn from_rgb(rgb: &RgbColor) -> Self {
        *rgb
    }
}

impl_color_traits!(RgbColor, Rgb);

impl FromStr for RgbColor {
    type Err = Error;

    /// Parse from comma-separated string (e.g., "255,128,0" or "255,128,0,64").
    fn from_str(s: &str) -> Result<Self> {
        let parts = s
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<std::result::Result<Vec<f64>, _>>()
            .map_err(|_| Error::color_string(s))?;

        if parts.len() == 3 || parts.len() == 4 {
            Self::from_list(&parts)
        } else {
            Err(Error::color_string(s))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates() {
        assert!(RgbColor::new(0.0, 127.5, 255.0).is_ok());
        assert_eq!(
            RgbColor::new(256.0, 0.0, 0.0).unwrap_err(),
            Error::range(ColorSpace::Rgb, "red", 256.0, 0.0, 255.0)
        );
        assert!(RgbColor::new(0.0, -1.0, 0.0).is_err());
        assert!(RgbColor::new_with_alpha(0.0, 0.0, 0.0, 256).is_err());
    }

    #[test]
    fn test_to_bytes_rounds() {
        let color = RgbColor::new_with_alpha(127.5, 0.4, 254.6, 9).unwrap();
        assert_eq!(color.to_bytes(), [128, 0, 255, 9]);
    }

    #[test]
    fn test_from_str() {
        let color: RgbColor = "255, 128,0".parse().unwrap();
        assert_eq!(color, RgbColor::rgb8(255, 128, 0));

        let color: RgbColor = "1,2,3,4".parse().unwrap();
        assert_eq!(color.alpha(), 4);

        assert!("255,128".parse::<RgbColor>().is_err());
        assert!("red,green,blue".parse::<RgbColor>().is_err());
        assert!("300,0,0".parse::<RgbColor>().is_err());
    }

    #[test]
    fn test_argb_round_trip() {
        let color = RgbColor::from_argb(0x80FF_8000);
        assert_eq!(color.to_bytes(), [255, 128, 0, 128]);
        assert_eq!(color.to_argb(), 0x80FF_8000);
        assert_eq!(color.to_hex(), "#FF800080");
    }

    #[test]
    fn test_from_unit_clamps() {
        let color = RgbColor::from_unit(ColorSpace::Lab, [1.2, -0.1, 0.5], 255);
        assert_eq!(color.to_list(), vec![255.0, 0.0, 127.5]);
    }

    #[test]
    fn test_display() {
        assert_eq!(RgbColor::rgb8(1, 2, 3).to_string(), "rgb(1, 2, 3, 255)");
    }
}
