//! Per-model channel descriptors and range validation.

use crate::errors::Error;
use crate::space::ColorSpace;

type Result<T> = std::result::Result<T, Error>;

/// Upper bound of the alpha channel.
pub const ALPHA_MAX: u8 = 255;

/// A single numeric channel of a color model.
///
/// Bounds are inclusive. Cyclic channels (hue) are angles in degrees and wrap
/// around when rotated or interpolated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channel {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub cyclic: bool,
}

impl Channel {
    pub const fn new(name: &'static str, min: f64, max: f64) -> Self {
        Channel {
            name,
            min,
            max,
            cyclic: false,
        }
    }

    /// A hue angle from 0 to 360 degrees.
    pub const fn hue() -> Self {
        Channel {
            name: "hue",
            min: 0.0,
            max: 360.0,
            cyclic: true,
        }
    }

    /// A percentage from 0 to 100.
    pub const fn percent(name: &'static str) -> Self {
        Channel::new(name, 0.0, 100.0)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// `NaN` is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp into bounds, mapping `NaN` to the lower bound.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Map a native value onto 0-1.
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }

    /// Map a 0-1 value onto the native range.
    pub fn denormalize(&self, factor: f64) -> f64 {
        self.min + factor * self.span()
    }

    pub(crate) fn validate(&self, space: ColorSpace, value: f64) -> Result<f64> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(Error::range(space, self.name, value, self.min, self.max))
        }
    }
}

pub(crate) fn validate_alpha(space: ColorSpace, alpha: f64) -> Result<u8> {
    if (0.0..=ALPHA_MAX as f64).contains(&alpha) {
        Ok(alpha.round() as u8)
    } else {
        Err(Error::range(space, "alpha", alpha, 0.0, ALPHA_MAX as f64))
    }
}

/// Returns exactly one clamped value per channel; missing values take the
/// channel's lower bound.
pub(crate) fn clamp_list(channels: &[Channel], values: &[f64]) -> Vec<f64> {
    channels
        .iter()
        .enumerate()
        .map(|(i, channel)| channel.clamp(values.get(i).copied().unwrap_or(channel.min)))
        .collect()
}

/// Validate a raw `[c1, .., cN]` or `[c1, .., cN, alpha]` list.
pub(crate) fn validate_list(
    space: ColorSpace,
    channels: &[Channel],
    values: &[f64],
) -> Result<(Vec<f64>, u8)> {
    let count = channels.len();
    if values.len() != count && values.len() != count + 1 {
        return Err(Error::arity(space, count, values.len()));
    }

    let checked = channels
        .iter()
        .zip(values)
        .map(|(channel, &value)| channel.validate(space, value))
        .collect::<Result<Vec<f64>>>()?;

    let alpha = match values.get(count) {
        Some(&alpha) => validate_alpha(space, alpha)?,
        None => ALPHA_MAX,
    };

    Ok((checked, alpha))
}

/// Validate a normalized list and scale every value onto its channel range.
pub(crate) fn denormalize_list(
    space: ColorSpace,
    channels: &[Channel],
    factors: &[f64],
) -> Result<(Vec<f64>, u8)> {
    let count = channels.len();
    if factors.len() != count && factors.len() != count + 1 {
        return Err(Error::arity(space, count, factors.len()));
    }

    let unit = Channel::new("", 0.0, 1.0);
    let mut scaled = Vec::with_capacity(count);
    for (channel, &factor) in channels.iter().zip(factors) {
        if !unit.contains(factor) {
            return Err(Error::range(space, channel.name, factor, 0.0, 1.0));
        }
        scaled.push(channel.clamp(channel.denormalize(factor)));
    }

    let alpha = match factors.get(count) {
        Some(&factor) if unit.contains(factor) => (factor * ALPHA_MAX as f64).round() as u8,
        Some(&factor) => return Err(Error::range(space, "alpha", factor, 0.0, 1.0)),
        None => ALPHA_MAX,
    };

    Ok((scaled, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHANNELS: [Channel; 3] = [
        Channel::hue(),
        Channel::percent("saturation"),
        Channel::percent("brightness"),
    ];

    #[test]
    fn test_validate_list_accepts_optional_alpha() {
        let (values, alpha) = validate_list(ColorSpace::Hsb, &CHANNELS, &[10.0, 20.0, 30.0]).unwrap();
        assert_eq!(values, vec![10.0, 20.0, 30.0]);
        assert_eq!(alpha, 255);

        let (_, alpha) =
            validate_list(ColorSpace::Hsb, &CHANNELS, &[10.0, 20.0, 30.0, 128.0]).unwrap();
        assert_eq!(alpha, 128);
    }

    #[test]
    fn test_validate_list_arity() {
        let err = validate_list(ColorSpace::Hsb, &CHANNELS, &[1.0, 2.0]).unwrap_err();
        assert_eq!(err, Error::arity(ColorSpace::Hsb, 3, 2));
        assert!(validate_list(ColorSpace::Hsb, &CHANNELS, &[0.0; 5]).is_err());
    }

    #[test]
    fn test_validate_list_names_channel() {
        let err = validate_list(ColorSpace::Hsb, &CHANNELS, &[0.0, 101.0, 0.0]).unwrap_err();
        assert_eq!(
            err,
            Error::range(ColorSpace::Hsb, "saturation", 101.0, 0.0, 100.0)
        );
        assert!(validate_list(ColorSpace::Hsb, &CHANNELS, &[0.0, 0.0, 0.0, 256.0]).is_err());
        assert!(validate_list(ColorSpace::Hsb, &CHANNELS, &[f64::NAN, 0.0, 0.0]).is_err());
    }

    #[test]
    fn test_denormalize_list() {
        let (values, alpha) =
            denormalize_list(ColorSpace::Hsb, &CHANNELS, &[0.5, 1.0, 0.0, 0.5]).unwrap();
        assert_eq!(values, vec![180.0, 100.0, 0.0]);
        assert_eq!(alpha, 128);
        assert!(denormalize_list(ColorSpace::Hsb, &CHANNELS, &[1.5, 0.0, 0.0]).is_err());
    }

    #[test]
    fn test_denormalize_list_rejects_bad_lists() {
        assert_eq!(
            denormalize_list(ColorSpace::Hsb, &CHANNELS, &[0.5, 0.5]).unwrap_err(),
            Error::arity(ColorSpace::Hsb, 3, 2)
        );
        assert_eq!(
            denormalize_list(ColorSpace::Hsb, &CHANNELS, &[0.5, 0.5, 0.5, 1.5]).unwrap_err(),
            Error::range(ColorSpace::Hsb, "alpha", 1.5, 0.0, 1.0)
        );
    }

    #[test]
    fn test_clamp_list_fills_missing() {
        assert_eq!(
            clamp_list(&CHANNELS, &[400.0, f64::NAN]),
            vec![360.0, 0.0, 0.0]
        );
    }
}
