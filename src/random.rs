//! Uniform sampling of channel values within caller-supplied bounds.

use rand::Rng;

use crate::channel::Channel;
use crate::errors::Error;
use crate::interpolate::wrap_hue;
use crate::space::ColorSpace;

type Result<T> = std::result::Result<T, Error>;

/// Sample one value per channel from `ranges`.
///
/// Every bound must lie within its channel. On a cyclic channel `min > max`
/// selects the arc that passes through 360/0; on any other channel it is an
/// error.
pub(crate) fn sample<R: Rng + ?Sized>(
    rng: &mut R,
    space: ColorSpace,
    channels: &[Channel],
    ranges: &[(f64, f64)],
) -> Result<Vec<f64>> {
    if ranges.len() != channels.len() {
        return Err(Error::arity(space, channels.len(), ranges.len()));
    }

    channels
        .iter()
        .zip(ranges)
        .map(|(channel, &(min, max))| {
            if !channel.contains(min) || !channel.contains(max) {
                return Err(Error::random_range(space, channel.name, min, max));
            }

            if min <= max {
                Ok(rng.gen_range(min..=max))
            } else if channel.cyclic {
                Ok(wrap_hue(rng.gen_range(min..=max + 360.0)))
            } else {
                Err(Error::random_range(space, channel.name, min, max))
            }
        })
        .collect()
}

/// Sample every channel across its full range.
pub(crate) fn sample_full<R: Rng + ?Sized>(rng: &mut R, channels: &[Channel]) -> Vec<f64> {
    channels
        .iter()
        .map(|channel| rng.gen_range(channel.min..=channel.max))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const CHANNELS: [Channel; 2] = [Channel::hue(), Channel::percent("saturation")];

    #[test]
    fn test_wrapping_hue_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let values = sample(
                &mut rng,
                ColorSpace::Hsb,
                &CHANNELS,
                &[(350.0, 10.0), (0.0, 100.0)],
            )
            .unwrap();
            let hue = values[0];
            assert!(hue >= 350.0 || hue <= 10.0, "hue {hue} escaped the arc");
            assert!(hue < 360.0);
        }
    }

    #[test]
    fn test_direct_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let values = sample(
                &mut rng,
                ColorSpace::Hsb,
                &CHANNELS,
                &[(10.0, 20.0), (40.0, 40.0)],
            )
            .unwrap();
            assert!((10.0..=20.0).contains(&values[0]));
            assert_eq!(values[1], 40.0);
        }
    }

    #[test]
    fn test_rejects_inverted_linear_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = sample(
            &mut rng,
            ColorSpace::Hsb,
            &CHANNELS,
            &[(0.0, 360.0), (60.0, 40.0)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::random_range(ColorSpace::Hsb, "saturation", 60.0, 40.0)
        );
    }

    #[test]
    fn test_sample_full_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            let values = sample_full(&mut rng, &CHANNELS);
            assert_eq!(values.len(), 2);
            assert!(CHANNELS.iter().zip(&values).all(|(c, &v)| c.contains(v)));
        }
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(sample(&mut rng, ColorSpace::Hsb, &CHANNELS, &[(0.0, 361.0), (0.0, 1.0)]).is_err());
        assert!(sample(&mut rng, ColorSpace::Hsb, &CHANNELS, &[(0.0, 1.0)]).is_err());
    }
}
