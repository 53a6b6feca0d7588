// src/config.rs

//! Generation parameters.
//!
//! `GeneratorConfig` bundles the inputs every generator call takes besides the
//! shape and the output bitmap. It can be deserialized from JSON (any missing
//! field falls back to its default) so batch tools can keep per-font settings
//! in a file next to the glyph set.

use crate::bitmap::{Bitmap, Rgb};
use crate::generate;
use crate::geometry::Vector2;
use crate::shape::Shape;
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

/// Default MSDF clash threshold, just above 1 so exact-1 steps are ignored.
pub const DEFAULT_EDGE_THRESHOLD: f64 = 1.00000001;

/// Parameters for the distance-field generators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Distance (shape units) mapped onto the full `[0, 1]` output span.
    pub range: f64,
    /// Pixels per shape unit, per axis.
    pub scale: Vector2,
    /// Shape-space offset applied before scaling.
    pub translate: Vector2,
    /// MSDF error-correction threshold; `0` disables correction.
    pub edge_threshold: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            range: 4.0,
            scale: Vector2::splat(1.0),
            translate: Vector2::ZERO,
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
        }
    }
}

impl GeneratorConfig {
    /// Parses a JSON config and checks that it describes a usable mapping.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GeneratorConfig =
            serde_json::from_str(json).context("Failed to parse generator config JSON")?;
        config.check()?;
        Ok(config)
    }

    /// Rejects parameters that would make every output value non-finite.
    pub fn check(&self) -> Result<()> {
        ensure!(
            self.range.is_finite() && self.range > 0.0,
            "range must be positive and finite, got {}",
            self.range
        );
        ensure!(
            self.scale.is_finite() && self.scale.x != 0.0 && self.scale.y != 0.0,
            "scale must be finite and non-zero, got {:?}",
            self.scale
        );
        ensure!(
            self.translate.is_finite(),
            "translate must be finite, got {:?}",
            self.translate
        );
        ensure!(
            self.edge_threshold >= 0.0,
            "edge_threshold must not be negative, got {}",
            self.edge_threshold
        );
        Ok(())
    }

    pub fn generate_sdf(&self, output: &mut Bitmap<f32>, shape: &Shape) {
        generate::generate_sdf(output, shape, self.range, self.scale, self.translate);
    }

    pub fn generate_pseudo_sdf(&self, output: &mut Bitmap<f32>, shape: &Shape) {
        generate::generate_pseudo_sdf(output, shape, self.range, self.scale, self.translate);
    }

    pub fn generate_msdf(&self, output: &mut Bitmap<Rgb>, shape: &Shape) {
        generate::generate_msdf(
            output,
            shape,
            self.range,
            self.scale,
            self.translate,
            self.edge_threshold,
        );
    }
}
