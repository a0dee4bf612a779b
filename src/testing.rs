//! Shared assertions for unit tests.

pub(crate) fn assert_close(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!(
            (a - e).abs() <= tolerance,
            "{actual:?} differs from {expected:?} by more than {tolerance}"
        );
    }
}

/// Like [`assert_close`], comparing cyclic channels along the shorter arc.
pub(crate) fn assert_channels_close(
    channels: &[crate::channel::Channel],
    actual: &[f64],
    expected: &[f64],
    tolerance: f64,
) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for ((channel, a), e) in channels.iter().zip(actual).zip(expected) {
        let difference = if channel.cyclic {
            crate::interpolate::hue_delta(*e, *a).abs()
        } else {
            (a - e).abs()
        };
        assert!(
            difference <= tolerance,
            "{} of {actual:?} differs from {expected:?} by {difference}",
            channel.name
        );
    }
}
