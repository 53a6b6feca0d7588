// src/lib.rs

//! msdf-core: signed, pseudo and multi-channel signed distance fields from
//! vector outlines.
//!
//! A [`Shape`] is a set of closed [`Contour`]s made of linear, quadratic and
//! cubic [`EdgeSegment`]s. The generators sample it on a pixel grid and write
//! `distance / range + 0.5` per pixel, so the outline sits at 0.5, the inside
//! below it and the outside above it.
//!
//! ```ignore
//! use msdf_core::{Bitmap, GeneratorConfig, Rgb, Shape};
//!
//! let mut shape: Shape = serde_json::from_str(glyph_json)?;
//! shape.normalize();
//! shape.validate()?;
//!
//! let config = GeneratorConfig::from_json(r#"{ "range": 4.0, "scale": { "x": 2.0, "y": 2.0 } }"#)?;
//! let mut msdf = Bitmap::<Rgb>::new(32, 32);
//! config.generate_msdf(&mut msdf, &shape);
//! ```

pub mod bitmap;
pub mod config;
pub mod edge;
pub mod equation;
pub mod error;
pub mod generate;
pub mod geometry;
pub mod shape;
pub mod signed_distance;

pub use bitmap::{median, Bitmap, Rgb};
pub use config::GeneratorConfig;
pub use edge::{EdgeColor, EdgeSegment};
pub use equation::{solve_cubic, solve_quadratic, Roots};
pub use error::ShapeError;
pub use generate::{generate_msdf, generate_pseudo_sdf, generate_sdf, msdf_error_correction};
pub use geometry::{Bounds, Point2, Vector2};
pub use shape::{Contour, Shape};
pub use signed_distance::SignedDistance;
