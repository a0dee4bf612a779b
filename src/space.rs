//! Model identities and the tagged [`AnyColor`] value used when the model is
//! only known at runtime.

use std::fmt;

use strum_macros::{EnumIter, EnumString};

use crate::channel::Channel;
use crate::errors::Error;
use crate::model::ColorModel;
use crate::types::{
    CmykColor, HsbColor, HsiColor, HslColor, HspColor, LabColor, OklabColor, RgbColor, XyzColor,
};

type Result<T> = std::result::Result<T, Error>;

/// Evaluate `$body` with `$color` bound to the concrete model inside an
/// [`AnyColor`].
macro_rules! dispatch {
    ($any:expr, $color:ident => $body:expr) => {
        match $any {
            $crate::space::AnyColor::Rgb($color) => $body,
            $crate::space::AnyColor::Hsb($color) => $body,
            $crate::space::AnyColor::Hsl($color) => $body,
            $crate::space::AnyColor::Hsi($color) => $body,
            $crate::space::AnyColor::Hsp($color) => $body,
            $crate::space::AnyColor::Cmyk($color) => $body,
            $crate::space::AnyColor::Lab($color) => $body,
            $crate::space::AnyColor::Xyz($color) => $body,
            $crate::space::AnyColor::Oklab($color) => $body,
        }
    };
}

pub(crate) use dispatch;

/// Evaluate `$body` with the type alias `$model` set to the model of `$space`.
macro_rules! with_model {
    ($space:expr, $model:ident => $body:expr) => {
        match $space {
            ColorSpace::Rgb => {
                type $model = RgbColor;
                $body
            }
            ColorSpace::Hsb => {
                type $model = HsbColor;
                $body
            }
            ColorSpace::Hsl => {
                type $model = HslColor;
                $body
            }
            ColorSpace::Hsi => {
                type $model = HsiColor;
                $body
            }
            ColorSpace::Hsp => {
                type $model = HspColor;
                $body
            }
            ColorSpace::Cmyk => {
                type $model = CmykColor;
                $body
            }
            ColorSpace::Lab => {
                type $model = LabColor;
                $body
            }
            ColorSpace::Xyz => {
                type $model = XyzColor;
                $body
            }
            ColorSpace::Oklab => {
                type $model = OklabColor;
                $body
            }
        }
    };
}

/// Identity of a color model.
///
/// Parsing is case-insensitive and accepts `hsv` as an alias of `hsb`.
///
/// # Examples
///
/// ```
/// use color_models_rs::ColorSpace;
///
/// assert_eq!("HSV".parse::<ColorSpace>().unwrap(), ColorSpace::Hsb);
/// assert_eq!(ColorSpace::Oklab.to_string(), "oklab");
/// assert_eq!(ColorSpace::Cmyk.channels().len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, strum_macros::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ColorSpace {
    Rgb,
    #[strum(to_string = "hsb", serialize = "hsv")]
    Hsb,
    Hsl,
    Hsi,
    Hsp,
    Cmyk,
    Lab,
    Xyz,
    Oklab,
}

impl ColorSpace {
    /// Channel descriptors of the model, in storage order.
    pub fn channels(&self) -> &'static [Channel] {
        with_model!(self, T => T::CHANNELS)
    }

    /// Whether the model stores a cyclic hue channel.
    pub fn has_hue(&self) -> bool {
        self.channels().iter().any(|channel| channel.cyclic)
    }

    /// Whether the model converts through CIE XYZ rather than RGB.
    pub fn is_perceptual(&self) -> bool {
        matches!(self, ColorSpace::Lab | ColorSpace::Xyz | ColorSpace::Oklab)
    }
}

/// A color of any model, tagged with its [`ColorSpace`].
///
/// Operations keep the model of the receiver; the other operand of binary
/// operations is converted into it first.
///
/// # Examples
///
/// ```
/// use color_models_rs::{AnyColor, ColorSpace};
///
/// let red = AnyColor::from_hex(ColorSpace::Hsl, "#FF0000").unwrap();
/// assert_eq!(red.space(), ColorSpace::Hsl);
/// assert_eq!(red.to_list(), vec![0.0, 100.0, 50.0]);
///
/// let cyan = red.cast(ColorSpace::Cmyk).opposite();
/// assert_eq!(cyan.to_hex(), "#00FFFF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "space", content = "channels", rename_all = "lowercase")
)]
pub enum AnyColor {
    Rgb(RgbColor),
    Hsb(HsbColor),
    Hsl(HslColor),
    Hsi(HsiColor),
    Hsp(HspColor),
    Cmyk(CmykColor),
    Lab(LabColor),
    Xyz(XyzColor),
    Oklab(OklabColor),
}

fn space_of<T: ColorModel>(_: &T) -> ColorSpace {
    T::SPACE
}

fn interpolate_dyn<T: ColorModel>(color: &T, other: &AnyColor, t: f64) -> Result<AnyColor> {
    color.interpolate(&T::from_any(other), t).map(Into::into)
}

fn lerp_dyn<T: ColorModel>(
    color: &T,
    other: &AnyColor,
    steps: usize,
    exclude_original_colors: bool,
) -> Result<Vec<AnyColor>> {
    let colors = color.lerp_to(&T::from_any(other), steps, exclude_original_colors)?;
    Ok(colors.into_iter().map(Into::into).collect())
}

impl AnyColor {
    pub fn space(&self) -> ColorSpace {
        dispatch!(self, color => space_of(color))
    }

    pub fn alpha(&self) -> u8 {
        dispatch!(self, color => color.alpha())
    }

    pub fn to_list(&self) -> Vec<f64> {
        dispatch!(self, color => color.to_list())
    }

    pub fn to_rgb(&self) -> RgbColor {
        dispatch!(self, color => color.to_rgb())
    }

    pub fn to_argb(&self) -> u32 {
        dispatch!(self, color => color.to_argb())
    }

    pub fn to_hex(&self) -> String {
        dispatch!(self, color => color.to_hex())
    }

    pub fn from_rgb(space: ColorSpace, rgb: &RgbColor) -> Self {
        with_model!(space, T => T::from_rgb(rgb).into())
    }

    /// Build a color of `space` from `N` or `N + 1` values.
    pub fn from_list(space: ColorSpace, values: &[f64]) -> Result<Self> {
        with_model!(space, T => T::from_list(values).map(Into::into))
    }

    pub fn from_argb(space: ColorSpace, argb: u32) -> Self {
        with_model!(space, T => T::from_argb(argb).into())
    }

    pub fn from_hex(space: ColorSpace, hex: &str) -> Result<Self> {
        with_model!(space, T => T::from_hex(hex).map(Into::into))
    }

    /// The same color re-expressed in `space`.
    pub fn cast(&self, space: ColorSpace) -> Self {
        with_model!(space, T => T::from_any(self).into())
    }

    /// The same color as a concrete model type.
    pub fn to_model<T: ColorModel>(&self) -> T {
        T::from_any(self)
    }

    pub fn interpolate(&self, other: &AnyColor, t: f64) -> Result<Self> {
        dispatch!(self, color => interpolate_dyn(color, other, t))
    }

    pub fn lerp_to(
        &self,
        other: &AnyColor,
        steps: usize,
        exclude_original_colors: bool,
    ) -> Result<Vec<Self>> {
        dispatch!(self, color => lerp_dyn(color, other, steps, exclude_original_colors))
    }

    pub fn inverted(&self) -> Self {
        dispatch!(self, color => color.inverted().into())
    }

    pub fn opposite(&self) -> Self {
        dispatch!(self, color => color.opposite().into())
    }

    pub fn rotate_hue(&self, amount: f64) -> Self {
        dispatch!(self, color => color.rotate_hue(amount).into())
    }

    pub fn warmer(&self, amount: f64, relative: bool) -> Result<Self> {
        dispatch!(self, color => color.warmer(amount, relative).map(Into::into))
    }

    pub fn cooler(&self, amount: f64, relative: bool) -> Result<Self> {
        dispatch!(self, color => color.cooler(amount, relative).map(Into::into))
    }

    /// A uniformly random opaque color of `space`.
    pub fn random(space: ColorSpace) -> Self {
        with_model!(space, T => T::random().into())
    }
}

impl fmt::Display for AnyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, color => fmt::Display::fmt(color, f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_channels_close;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_space() {
        assert_eq!("rgb".parse::<ColorSpace>().unwrap(), ColorSpace::Rgb);
        assert_eq!("HSB".parse::<ColorSpace>().unwrap(), ColorSpace::Hsb);
        assert_eq!("hsv".parse::<ColorSpace>().unwrap(), ColorSpace::Hsb);
        assert_eq!("OkLab".parse::<ColorSpace>().unwrap(), ColorSpace::Oklab);
        assert!("yuv".parse::<ColorSpace>().is_err());
    }

    #[test]
    fn test_space_properties() {
        assert_eq!(ColorSpace::iter().count(), 9);
        for space in ColorSpace::iter() {
            assert_eq!(space.to_string().parse::<ColorSpace>().unwrap(), space);
            let expected = if space == ColorSpace::Cmyk { 4 } else { 3 };
            assert_eq!(space.channels().len(), expected);
        }

        let hued: Vec<ColorSpace> = ColorSpace::iter().filter(|s| s.has_hue()).collect();
        assert_eq!(
            hued,
            vec![
                ColorSpace::Hsb,
                ColorSpace::Hsl,
                ColorSpace::Hsi,
                ColorSpace::Hsp
            ]
        );
        assert!(ColorSpace::Xyz.is_perceptual());
        assert!(!ColorSpace::Cmyk.is_perceptual());
    }

    #[test]
    fn test_cast_is_total() {
        let orange = AnyColor::from(RgbColor::rgb8(255, 128, 0));
        for space in ColorSpace::iter() {
            let cast = orange.cast(space);
            assert_eq!(cast.space(), space);
            assert_eq!(cast.to_argb(), 0xFFFF_8000, "{space}");
        }
    }

    #[test]
    fn test_to_model() {
        let any = AnyColor::from_list(ColorSpace::Hsb, &[0.0, 100.0, 100.0, 64.0]).unwrap();
        let rgb: RgbColor = any.to_model();
        assert_eq!(rgb.to_bytes(), [255, 0, 0, 64]);
        assert_eq!(any.to_model::<HsbColor>(), HsbColor::new_with_alpha(0.0, 100.0, 100.0, 64).unwrap());
    }

    #[test]
    fn test_from_list_errors() {
        assert_eq!(
            AnyColor::from_list(ColorSpace::Cmyk, &[0.0; 3]).unwrap_err(),
            Error::arity(ColorSpace::Cmyk, 4, 3)
        );
        assert!(AnyColor::from_list(ColorSpace::Lab, &[50.0, 200.0, 0.0]).is_err());
    }

    #[test]
    fn test_dynamic_ops_keep_receiver_model() {
        let hsl = AnyColor::from_list(ColorSpace::Hsl, &[350.0, 100.0, 50.0]).unwrap();
        let hsb = AnyColor::from_list(ColorSpace::Hsb, &[10.0, 100.0, 100.0]).unwrap();

        let mid = hsl.interpolate(&hsb, 0.5).unwrap();
        assert_eq!(mid.space(), ColorSpace::Hsl);
        assert_channels_close(HslColor::CHANNELS, &mid.to_list(), &[0.0, 100.0, 50.0], 1e-9);

        let colors = hsl.lerp_to(&hsb, 4, false).unwrap();
        assert_eq!(colors.len(), 4);
        assert!(colors.iter().all(|c| c.space() == ColorSpace::Hsl));
        assert_eq!(colors[0], hsl);

        assert_eq!(hsl.rotate_hue(20.0).to_list()[0], 10.0);
        assert_eq!(hsl.opposite().space(), ColorSpace::Hsl);
        assert_eq!(hsl.inverted().inverted(), hsl);
        assert!(hsl.warmer(0.0, true).is_err());
        assert_eq!(hsl.warmer(100.0, true).unwrap().to_list()[0], 0.0);
        assert_eq!(hsl.cooler(10.0, false).unwrap().to_list()[0], 340.0);
    }

    #[test]
    fn test_display() {
        let any = AnyColor::from(CmykColor::new(0.0, 50.0, 100.0, 0.0).unwrap());
        assert_eq!(any.to_string(), "cmyk(0, 50, 100, 0, 255)");
    }

    #[test]
    fn test_random() {
        let color = AnyColor::random(ColorSpace::Oklab);
        assert_eq!(color.space(), ColorSpace::Oklab);
        assert_eq!(color.alpha(), 255);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let any = AnyColor::from_list(ColorSpace::Hsb, &[120.0, 50.0, 25.0]).unwrap();
        let value = serde_json::to_value(any).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"space": "hsb", "channels": [120.0, 50.0, 25.0, 255.0]})
        );
        let back: AnyColor = serde_json::from_value(value).unwrap();
        assert_eq!(back, any);

        let invalid = r#"{"space": "hsb", "channels": [361, 0, 0]}"#;
        assert!(serde_json::from_str::<AnyColor>(invalid).is_err());

        let space: ColorSpace = serde_json::from_str(r#""oklab""#).unwrap();
        assert_eq!(space, ColorSpace::Oklab);

        let rgb: RgbColor = serde_json::from_str("[255, 0, 0, 128]").unwrap();
        assert_eq!(rgb.to_bytes(), [255, 0, 0, 128]);
        assert!(serde_json::from_str::<RgbColor>("[255, 0]").is_err());
    }
}
