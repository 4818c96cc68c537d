//! Tinct: CSS colors as strongly-typed values.
//!
//! Parse any CSS color definition into a [`Color`], read it back in any
//! supported model, and inspect it for accessibility. The conversion work is
//! done by [`tinct_core`]; this crate adds the CSS grammar, the memoized
//! color object and the inspectors.
//!
//! ```
//! use tinct::{Color, inspect};
//!
//! let color: Color = "hsl(0 100% 50%)".parse().unwrap();
//! assert_eq!(color.hex().hex(), "#ff0000");
//!
//! let white: Color = "white".parse().unwrap();
//! assert!(inspect::contrast_ratio(&color, &white) > 3.9);
//! ```

pub mod cache;
pub mod color;
pub mod config;
pub mod inspect;
pub mod parse;

// Re-exports for convenience.
pub use cache::Memo;
pub use color::Color;
pub use config::InspectorConfig;
pub use inspect::{HueFamily, Shade, TextSize, WcagRating};
pub use tinct_core::{
    ChannelsData, CmykChannels, ColorError, ColorMode, ColorModel, ConversionModel, HexChannels,
    HslChannels, HsvChannels, HwbChannels, NamedColorChannels, OklchChannels, RgbChannels,
    SUPPORTED_COLOR_MODELS, ValidationError, validate_channels_data,
};
