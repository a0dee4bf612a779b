//! Concrete color models.

use crate::interpolate::wrap_hue;

/// Shared trait impls for a model: tagging into [`crate::AnyColor`], the
/// `[c1, .., alpha]` list form used by serde, and `Display`.
macro_rules! impl_color_traits {
    ($model:ident, $variant:ident) => {
        impl From<$model> for crate::space::AnyColor {
            fn from(color: $model) -> Self {
                crate::space::AnyColor::$variant(color)
            }
        }

        impl From<$model> for Vec<f64> {
            fn from(color: $model) -> Self {
                crate::model::ColorModel::to_list_with_alpha(&color)
            }
        }

        impl TryFrom<Vec<f64>> for $model {
            type Error = crate::errors::Error;

            fn try_from(values: Vec<f64>) -> std::result::Result<Self, Self::Error> {
                <$model as crate::model::ColorModel>::from_list(&values)
            }
        }

        impl std::fmt::Display for $model {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                use crate::model::ColorModel;

                write!(f, "{}(", Self::SPACE)?;
                for value in self.to_list() {
                    write!(f, "{value}, ")?;
                }
                write!(f, "{})", self.alpha())
            }
        }
    };
}

mod cmyk;
mod hsb;
mod hsi;
mod hsl;
mod hsp;
mod lab;
mod oklab;
mod rgb;
mod xyz;

pub use cmyk::CmykColor;
pub use hsb::HsbColor;
pub use hsi::HsiColor;
pub use hsl::HslColor;
pub use hsp::HspColor;
pub use lab::LabColor;
pub use oklab::OklabColor;
pub use rgb::RgbColor;
pub use xyz::XyzColor;

/// Hexagonal hue of unit RGB components, in `[0, 360)`; 0 when achromatic.
pub(crate) fn hexagonal_hue(red: f64, green: f64, blue: f64) -> f64 {
    let max = red.max(green).max(blue);
    let delta = max - red.min(green).min(blue);
    if delta == 0.0 {
        return 0.0;
    }

    let sector = if max == red {
        (green - blue) / delta
    } else if max == green {
        (blue - red) / delta + 2.0
    } else {
        (red - green) / delta + 4.0
    };
    wrap_hue(sector * 60.0)
}

/// `(max - min) / max` of unit RGB components; 0 for black.
pub(crate) fn max_saturation(red: f64, green: f64, blue: f64) -> f64 {
    let max = red.max(green).max(blue);
    if max == 0.0 {
        0.0
    } else {
        (max - red.min(green).min(blue)) / max
    }
}
