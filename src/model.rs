//! The capability trait shared by every color model.

use std::fmt;

use rand::Rng;

use crate::channel::{self, ALPHA_MAX, Channel};
use crate::errors::Error;
use crate::hex;
use crate::interpolate::{self, hue_delta, wrap_hue};
use crate::random;
use crate::space::{AnyColor, ColorSpace, dispatch};
use crate::types::{HsbColor, RgbColor, XyzColor};

type Result<T> = std::result::Result<T, Error>;

/// The warm anchor of [`ColorModel::warmer`] (red).
pub const WARM_HUE: f64 = 0.0;

/// The cool anchor of [`ColorModel::cooler`] (cyan).
pub const COOL_HUE: f64 = 180.0;

/// A color representation that converts losslessly through the RGB hub.
///
/// Implementors only provide storage access and the conversion to and from
/// [`RgbColor`]; everything else (list and hex constructors, interpolation,
/// hue operations, inversion, random sampling) is shared through default
/// methods. Every operation returns a new value of the receiver's type.
///
/// # Examples
///
/// ```
/// use color_models_rs::{ColorModel, HsbColor, HslColor};
///
/// let hsb = HsbColor::new(120.0, 100.0, 100.0).unwrap();
/// let hsl = HslColor::from_model(&hsb);
/// assert_eq!(hsl.lightness(), 50.0);
/// assert_eq!(hsl.to_hex(), "#00FF00");
/// ```
pub trait ColorModel: Copy + fmt::Debug + PartialEq + Into<AnyColor> {
    /// The model identity.
    const SPACE: ColorSpace;

    /// Channel names and inclusive bounds, in storage order.
    const CHANNELS: &'static [Channel];

    /// Channel values in storage order, without alpha.
    fn to_list(&self) -> Vec<f64>;

    /// Alpha from 0 (transparent) to 255 (opaque).
    fn alpha(&self) -> u8;

    /// Build a value from raw channels, clamping every channel into bounds.
    ///
    /// Missing channels take their lower bound and `NaN` is treated as the
    /// lower bound, so this never fails.
    fn clamped(values: &[f64], alpha: u8) -> Self;

    fn to_rgb(&self) -> RgbColor;

    fn from_rgb(rgb: &RgbColor) -> Self;

    /// Convert into the CIE XYZ hub used by the perceptual models.
    fn to_xyz(&self) -> XyzColor {
        XyzColor::from_rgb(&self.to_rgb())
    }

    fn from_xyz(xyz: &XyzColor) -> Self {
        Self::from_rgb(&xyz.to_rgb())
    }

    /// Tristimulus values (Y from 0 to 100) without the white-point bound
    /// of [`XyzColor`].
    fn tristimulus(&self) -> [f64; 3] {
        self.to_xyz().to_array()
    }

    fn from_tristimulus(xyz: [f64; 3], alpha: u8) -> Self {
        Self::from_xyz(&XyzColor::clamped(&xyz, alpha))
    }

    /// Re-express a color of any model in this model.
    ///
    /// Conversions between perceptual models (LAB, XYZ, Oklab) carry raw
    /// tristimulus values, everything else goes through RGB.
    fn from_model<C: ColorModel>(other: &C) -> Self {
        if C::SPACE == Self::SPACE {
            Self::clamped(&other.to_list(), other.alpha())
        } else if C::SPACE.is_perceptual() && Self::SPACE.is_perceptual() {
            Self::from_tristimulus(other.tristimulus(), other.alpha())
        } else {
            Self::from_rgb(&other.to_rgb())
        }
    }

    /// Convert a tagged color into this model.
    fn from_any(any: &AnyColor) -> Self {
        dispatch!(any, color => Self::from_model(color))
    }

    /// `other` re-expressed in this color's model.
    fn convert<C: ColorModel>(&self, other: &C) -> Self {
        Self::from_model(other)
    }

    /// Build from `N` channel values, or `N + 1` with a trailing alpha.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_models_rs::{ColorModel, HsbColor};
    ///
    /// let color = HsbColor::from_list(&[0.0, 100.0, 100.0, 128.0]).unwrap();
    /// assert_eq!(color.alpha(), 128);
    /// assert!(HsbColor::from_list(&[0.0, 100.0]).is_err());
    /// assert!(HsbColor::from_list(&[361.0, 100.0, 100.0]).is_err());
    /// ```
    fn from_list(values: &[f64]) -> Result<Self> {
        let (values, alpha) = channel::validate_list(Self::SPACE, Self::CHANNELS, values)?;
        Ok(Self::clamped(&values, alpha))
    }

    /// Build from normalized 0-1 values scaled onto each channel's range.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_models_rs::{ColorModel, HsbColor};
    ///
    /// let color = HsbColor::extrapolate(&[0.5, 1.0, 0.25]).unwrap();
    /// assert_eq!(color.to_list(), vec![180.0, 100.0, 25.0]);
    /// ```
    fn extrapolate(values: &[f64]) -> Result<Self> {
        let (values, alpha) = channel::denormalize_list(Self::SPACE, Self::CHANNELS, values)?;
        Ok(Self::clamped(&values, alpha))
    }

    fn to_list_with_alpha(&self) -> Vec<f64> {
        let mut values = self.to_list();
        values.push(self.alpha() as f64);
        values
    }

    /// Channel values and alpha mapped onto 0-1; the inverse of
    /// [`ColorModel::extrapolate`].
    fn to_normalized_list(&self) -> Vec<f64> {
        let mut values: Vec<f64> = Self::CHANNELS
            .iter()
            .zip(self.to_list())
            .map(|(channel, value)| channel.normalize(value))
            .collect();
        values.push(self.alpha() as f64 / ALPHA_MAX as f64);
        values
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    ///
    /// # Examples
    ///
    /// ```
    /// use color_models_rs::{ColorModel, HsbColor};
    ///
    /// let red = HsbColor::from_hex("#F00").unwrap();
    /// assert_eq!(red, HsbColor::from_list(&[0.0, 100.0, 100.0]).unwrap());
    /// ```
    fn from_hex(hex: &str) -> Result<Self> {
        let bytes = hex::parse_hex(hex)?;
        Ok(Self::from_rgb(&RgbColor::from_bytes(bytes)))
    }

    /// `#RRGGBB` when opaque, `#RRGGBBAA` otherwise.
    fn to_hex(&self) -> String {
        hex::format_hex(self.to_rgb().to_bytes())
    }

    /// Build from a packed `0xAARRGGBB` integer.
    fn from_argb(argb: u32) -> Self {
        Self::from_rgb(&RgbColor::from_bytes(hex::unpack_argb(argb)))
    }

    /// Pack into a `0xAARRGGBB` integer, rounding each channel to 8 bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_models_rs::{ColorModel, HsbColor};
    ///
    /// let color = HsbColor::new(0.0, 100.0, 100.0).unwrap();
    /// assert_eq!(color.to_argb(), 0xFFFF0000);
    /// assert_eq!(HsbColor::from_argb(0xFFFF0000), color);
    /// ```
    fn to_argb(&self) -> u32 {
        hex::pack_argb(self.to_rgb().to_bytes())
    }

    fn opacity(&self) -> f64 {
        self.alpha() as f64 / ALPHA_MAX as f64
    }

    fn with_alpha(&self, alpha: u32) -> Result<Self> {
        let alpha = channel::validate_alpha(Self::SPACE, alpha as f64)?;
        Ok(Self::clamped(&self.to_list(), alpha))
    }

    /// Replace alpha with `opacity * 255`, rounded.
    fn with_opacity(&self, opacity: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(Error::range(Self::SPACE, "opacity", opacity, 0.0, 1.0));
        }
        self.with_alpha((opacity * ALPHA_MAX as f64).round() as u32)
    }

    /// Replace the channel at `index` (storage order).
    fn with_channel(&self, index: usize, value: f64) -> Result<Self> {
        let channel = Self::CHANNELS.get(index).ok_or(Error::UnknownChannel {
            space: Self::SPACE,
            index,
        })?;
        let value = channel.validate(Self::SPACE, value)?;

        let mut values = self.to_list();
        if let Some(slot) = values.get_mut(index) {
            *slot = value;
        }
        Ok(Self::clamped(&values, self.alpha()))
    }

    /// Replace the red component of the color's RGB equivalent.
    fn with_red(&self, red: f64) -> Result<Self> {
        let rgb = self.to_rgb().with_channel(RgbColor::RED, red)?;
        Ok(Self::from_rgb(&rgb))
    }

    fn with_green(&self, green: f64) -> Result<Self> {
        let rgb = self.to_rgb().with_channel(RgbColor::GREEN, green)?;
        Ok(Self::from_rgb(&rgb))
    }

    fn with_blue(&self, blue: f64) -> Result<Self> {
        let rgb = self.to_rgb().with_channel(RgbColor::BLUE, blue)?;
        Ok(Self::from_rgb(&rgb))
    }

    /// Interpolate towards `other` (converted into this model first).
    ///
    /// Hue channels take the shorter arc.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_models_rs::{ColorModel, HsbColor};
    ///
    /// let a = HsbColor::new(350.0, 100.0, 100.0).unwrap();
    /// let b = HsbColor::new(10.0, 100.0, 100.0).unwrap();
    /// assert_eq!(a.interpolate(&b, 0.5).unwrap().hue(), 0.0);
    /// assert!(a.interpolate(&b, 1.5).is_err());
    /// ```
    fn interpolate<C: ColorModel>(&self, other: &C, t: f64) -> Result<Self> {
        let t = interpolate::check_factor(t)?;
        Ok(lerp_same(self, &Self::from_model(other), t))
    }

    /// An evenly spaced sequence of `steps` colors towards `other`.
    ///
    /// With `exclude_original_colors` the sequence holds only intermediate
    /// colors; otherwise it starts with `self` and ends with `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_models_rs::{ColorModel, HslColor, RgbColor};
    ///
    /// let black = HslColor::new(0.0, 0.0, 0.0).unwrap();
    /// let white = RgbColor::rgb8(255, 255, 255);
    ///
    /// let colors = black.lerp_to(&white, 3, false).unwrap();
    /// assert_eq!(colors.len(), 3);
    /// assert_eq!(colors[1].lightness(), 50.0);
    ///
    /// let colors = black.lerp_to(&white, 3, true).unwrap();
    /// assert_eq!(colors[0].lightness(), 25.0);
    /// ```
    fn lerp_to<C: ColorModel>(
        &self,
        other: &C,
        steps: usize,
        exclude_original_colors: bool,
    ) -> Result<Vec<Self>> {
        let factors = interpolate::step_factors(steps, exclude_original_colors)?;
        let other = Self::from_model(other);
        Ok(factors
            .into_iter()
            .map(|t| lerp_same(self, &other, t))
            .collect())
    }

    /// The RGB inverse (`255 - c` per component) in this model.
    ///
    /// Hue channels are rotated by exactly 180 degrees so that inverting twice
    /// restores the original hue, even for achromatic colors.
    fn inverted(&self) -> Self {
        let rgb = self.to_rgb();
        let inverse = RgbColor::clamped(
            &[255.0 - rgb.red(), 255.0 - rgb.green(), 255.0 - rgb.blue()],
            rgb.alpha(),
        );
        let color = Self::from_rgb(&inverse);

        match hue_index::<Self>() {
            Some(index) => {
                let mut values = color.to_list();
                values[index] = wrap_hue(self.to_list()[index] + 180.0);
                Self::clamped(&values, color.alpha())
            }
            None => color,
        }
    }

    /// The color on the opposite side of the hue wheel.
    fn opposite(&self) -> Self {
        self.rotate_hue(180.0)
    }

    /// Add `amount` degrees to the hue, wrapping into `[0, 360)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_models_rs::{ColorModel, HsbColor};
    ///
    /// let color = HsbColor::new(300.0, 50.0, 50.0).unwrap();
    /// assert_eq!(color.rotate_hue(90.0).hue(), 30.0);
    /// assert_eq!(color.rotate_hue(-330.0).hue(), 330.0);
    /// ```
    fn rotate_hue(&self, amount: f64) -> Self {
        map_hue(self, |hue| hue + amount)
    }

    /// Move the hue towards red along the shorter arc.
    ///
    /// With `relative` the `amount` is a percentage (0-100] of the remaining
    /// distance, otherwise it is in degrees and never overshoots red.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_models_rs::{ColorModel, HsbColor};
    ///
    /// let color = HsbColor::new(90.0, 100.0, 100.0).unwrap();
    /// assert_eq!(color.warmer(50.0, true).unwrap().hue(), 45.0);
    /// assert_eq!(color.warmer(120.0, false).unwrap().hue(), 0.0);
    /// assert!(color.warmer(0.0, true).is_err());
    /// ```
    fn warmer(&self, amount: f64, relative: bool) -> Result<Self> {
        shift_hue_toward(self, WARM_HUE, amount, relative)
    }

    /// Move the hue away from red, towards cyan, along the shorter arc.
    fn cooler(&self, amount: f64, relative: bool) -> Result<Self> {
        shift_hue_toward(self, COOL_HUE, amount, relative)
    }

    /// Uniformly sample every channel over its full range (opaque).
    fn random() -> Self {
        let values = random::sample_full(&mut rand::thread_rng(), Self::CHANNELS);
        Self::clamped(&values, ALPHA_MAX)
    }

    /// Uniformly sample each channel within one `(min, max)` pair per
    /// channel. A hue range with `min > max` wraps through 0.
    fn random_within(ranges: &[(f64, f64)]) -> Result<Self> {
        Self::random_within_using(&mut rand::thread_rng(), ranges)
    }

    fn random_within_using<R: Rng + ?Sized>(rng: &mut R, ranges: &[(f64, f64)]) -> Result<Self> {
        let values = random::sample(rng, Self::SPACE, Self::CHANNELS, ranges)?;
        Ok(Self::clamped(&values, ALPHA_MAX))
    }

    /// Whether both colors pack to the same ARGB value.
    fn equals<C: ColorModel>(&self, other: &C) -> bool {
        self.to_argb() == other.to_argb()
    }

    fn is_black(&self) -> bool {
        matches!(self.to_rgb().to_bytes(), [0, 0, 0, _])
    }

    fn is_white(&self) -> bool {
        matches!(self.to_rgb().to_bytes(), [255, 255, 255, _])
    }

    /// Whether red, green and blue are equal after quantization.
    fn is_monochromatic(&self) -> bool {
        let [red, green, blue, _] = self.to_rgb().to_bytes();
        red == green && green == blue
    }
}

/// Index of the cyclic (hue) channel, if the model has one.
pub(crate) fn hue_index<T: ColorModel>() -> Option<usize> {
    T::CHANNELS.iter().position(|channel| channel.cyclic)
}

fn lerp_same<T: ColorModel>(from: &T, to: &T, t: f64) -> T {
    if t == 0.0 {
        return *from;
    }
    if t == 1.0 {
        return *to;
    }

    let values = interpolate::lerp_channels(T::CHANNELS, &from.to_list(), &to.to_list(), t);
    T::clamped(&values, interpolate::lerp_alpha(from.alpha(), to.alpha(), t))
}

/// Apply `f` to the hue, going through HSB for models without a hue channel.
fn map_hue<T: ColorModel>(color: &T, f: impl Fn(f64) -> f64) -> T {
    match hue_index::<T>() {
        Some(index) => {
            let mut values = color.to_list();
            values[index] = wrap_hue(f(values[index]));
            T::clamped(&values, color.alpha())
        }
        None => T::from_model(&map_hue(&HsbColor::from_model(color), f)),
    }
}

fn shift_hue_toward<T: ColorModel>(color: &T, anchor: f64, amount: f64, relative: bool) -> Result<T> {
    if !(amount > 0.0) || (relative && amount > 100.0) {
        return Err(Error::InvalidAmount(amount));
    }

    Ok(map_hue(color, |hue| {
        let delta = hue_delta(hue, anchor);
        if relative {
            hue + delta * amount / 100.0
        } else {
            hue + delta.signum() * amount.min(delta.abs())
        }
    }))
}
