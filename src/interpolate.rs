//! Linear and hue-circular interpolation primitives.

use log::trace;

use crate::channel::Channel;
use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// Wrap an angle into `[0, 360)`.
pub fn wrap_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round tiny negative inputs up to 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Signed shortest-arc distance from `from` to `to`, in `(-180, 180]`.
pub fn hue_delta(from: f64, to: f64) -> f64 {
    let delta = (to - from).rem_euclid(360.0);
    if delta > 180.0 { delta - 360.0 } else { delta }
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolate two hues along the shorter arc.
pub fn lerp_hue(a: f64, b: f64, t: f64) -> f64 {
    wrap_hue(a + hue_delta(a, b) * t)
}

pub(crate) fn lerp_alpha(a: u8, b: u8, t: f64) -> u8 {
    lerp(a as f64, b as f64, t).round().clamp(0.0, 255.0) as u8
}

pub(crate) fn check_factor(t: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&t) {
        Ok(t)
    } else {
        Err(Error::InvalidStep(format!(
            "interpolation factor must be within 0..=1, got {t}"
        )))
    }
}

/// Channel-wise interpolation, hue-aware on cyclic channels.
pub(crate) fn lerp_channels(channels: &[Channel], a: &[f64], b: &[f64], t: f64) -> Vec<f64> {
    channels
        .iter()
        .zip(a.iter().zip(b))
        .map(|(channel, (&x, &y))| {
            if channel.cyclic {
                lerp_hue(x, y, t)
            } else {
                lerp(x, y, t)
            }
        })
        .collect()
}

/// Interpolation factors for an N-step sequence.
///
/// When excluding the original colors the factors are `i / (steps + 1)` for
/// `i` in `1..=steps`. Otherwise both endpoints are included and the factors
/// are `i / (steps - 1)` for `i` in `0..steps`; a single step yields `[0.0]`.
pub(crate) fn step_factors(steps: usize, exclude_original_colors: bool) -> Result<Vec<f64>> {
    if steps == 0 {
        return Err(Error::InvalidStep("steps must be greater than 0".into()));
    }

    let factors: Vec<f64> = if exclude_original_colors {
        let divisor = (steps + 1) as f64;
        (1..=steps).map(|i| i as f64 / divisor).collect()
    } else if steps == 1 {
        vec![0.0]
    } else {
        let divisor = (steps - 1) as f64;
        (0..steps).map(|i| i as f64 / divisor).collect()
    };

    trace!("lerp factors for {steps} steps: {factors:?}");
    Ok(factors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_hue() {
        assert_eq!(wrap_hue(360.0), 0.0);
        assert_eq!(wrap_hue(-90.0), 270.0);
        assert_eq!(wrap_hue(725.0), 5.0);
        assert!(wrap_hue(-1e-20) < 360.0);
    }

    #[test]
    fn test_hue_delta_takes_short_arc() {
        assert_eq!(hue_delta(350.0, 10.0), 20.0);
        assert_eq!(hue_delta(10.0, 350.0), -20.0);
        assert_eq!(hue_delta(0.0, 180.0), 180.0);
        assert_eq!(hue_delta(90.0, 90.0), 0.0);
    }

    #[test]
    fn test_lerp_hue_wraps() {
        assert_eq!(lerp_hue(350.0, 10.0, 0.5), 0.0);
        assert_eq!(lerp_hue(10.0, 350.0, 0.25), 5.0);
        assert_eq!(lerp_hue(0.0, 90.0, 1.0), 90.0);
    }

    #[test]
    fn test_lerp_alpha_rounds() {
        assert_eq!(lerp_alpha(0, 255, 0.5), 128);
        assert_eq!(lerp_alpha(255, 0, 1.0), 0);
    }

    #[test]
    fn test_check_factor() {
        assert!(check_factor(0.0).is_ok());
        assert!(check_factor(1.0).is_ok());
        assert!(check_factor(-0.01).is_err());
        assert!(check_factor(1.01).is_err());
        assert!(check_factor(f64::NAN).is_err());
    }

    #[test]
    fn test_step_factors() {
        assert_eq!(step_factors(3, false).unwrap(), vec![0.0, 0.5, 1.0]);
        assert_eq!(step_factors(3, true).unwrap(), vec![0.25, 0.5, 0.75]);
        assert_eq!(step_factors(1, false).unwrap(), vec![0.0]);
        assert_eq!(step_factors(1, true).unwrap(), vec![0.5]);
        assert!(step_factors(0, false).is_err());
    }
}
