//! # color_models_rs
//!
//! Color models that convert through a common RGB hub, validate every channel
//! against the model's bounds, and share one set of operations.
//!
//! Every model implements [`ColorModel`], so interpolation, hue rotation,
//! inversion, random sampling, and the hex/ARGB boundary behave the same way
//! whichever representation a color is held in. Operations always return a
//! value of the receiver's model.
//!
//! ## Quick Start
//!
//! ```
//! use color_models_rs::{ColorModel, HsbColor, LabColor, RgbColor};
//!
//! let red = HsbColor::from_hex("#FF0000")?;
//! let blue = RgbColor::rgb8(0, 0, 255);
//!
//! // three colors from red to blue, interpolated in HSB
//! let steps = red.lerp_to(&blue, 3, false)?;
//! assert_eq!(steps[1].hue(), 300.0);
//!
//! // perceptual models round-trip through CIE XYZ
//! let lab = LabColor::from_model(&red);
//! assert_eq!(lab.to_argb(), 0xFFFF0000);
//! # Ok::<(), color_models_rs::Error>(())
//! ```
//!
//! ## Models
//!
//! - [`RgbColor`]: red, green, blue (0-255), the conversion hub
//! - [`HsbColor`], [`HslColor`], [`HsiColor`], [`HspColor`]: hue based models
//! - [`CmykColor`]: subtractive ink coverage
//! - [`XyzColor`], [`LabColor`], [`OklabColor`]: perceptual models
//!
//! [`AnyColor`] holds a color of any model when it is only known at runtime,
//! tagged with its [`ColorSpace`].
//!
//! ## Host Boundary
//!
//! Colors leave the library as `0xAARRGGBB` integers ([`ColorModel::to_argb`])
//! or hex strings ([`ColorModel::to_hex`]). Channels are kept as `f64`
//! internally and rounded to 8 bits only there.
//!
//! ## Feature Flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` for every model (as a
//!   `[c1, .., alpha]` list), [`ColorSpace`] and [`AnyColor`]

mod channel;
mod errors;
mod hex;
pub mod interpolate;
mod model;
mod random;
mod space;
#[cfg(test)]
mod testing;
mod types;

// Re-export public API
pub use channel::{ALPHA_MAX, Channel};
pub use errors::Error;
pub use model::{COOL_HUE, ColorModel, WARM_HUE};
pub use space::{AnyColor, ColorSpace};
pub use types::{
    CmykColor, HsbColor, HsiColor, HslColor, HspColor, LabColor, OklabColor, RgbColor, XyzColor,
};
