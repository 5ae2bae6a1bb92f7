use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::adjust::{AdjustMode, RangeAdjustment};
use super::ColorModel;
use crate::error::{AstroError, Result};

/// Per-pixel hue/saturation adjustment over planar RGB channels.
///
/// Pixels arrive in `in_model`, are adjusted in the working `model` and are
/// written back in `out_model`. The working model is HSV when `model` is
/// [`ColorModel::Hsv`] and HSL otherwise. `adjustment.center` is an RGB
/// colour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HueSaturation {
    pub in_model: ColorModel,
    pub model: ColorModel,
    pub out_model: ColorModel,
    pub adjustment: RangeAdjustment,
}

impl Default for HueSaturation {
    fn default() -> Self {
        Self {
            in_model: ColorModel::Rgb,
            model: ColorModel::Hsl,
            out_model: ColorModel::Rgb,
            adjustment: RangeAdjustment {
                adjust: [0.0, 1.0, 1.0],
                center: [0.25, 0.75, 0.75],
                range: [1.0; 3],
                transition: [0.1; 3],
                mode: AdjustMode::Multiply,
            },
        }
    }
}

impl HueSaturation {
    fn working_model(&self) -> ColorModel {
        match self.model {
            ColorModel::Hsv => ColorModel::Hsv,
            _ => ColorModel::Hsl,
        }
    }

    /// Process a single pixel.
    pub fn process_pixel(&self, color: [f32; 3]) -> [f32; 3] {
        let working = self.working_model();
        let adjustment = RangeAdjustment {
            center: working.from_rgb(self.adjustment.center),
            ..self.adjustment.clone()
        };
        self.process_with(&adjustment, working, color)
    }

    fn process_with(
        &self,
        adjustment: &RangeAdjustment,
        working: ColorModel,
        color: [f32; 3],
    ) -> [f32; 3] {
        let mut c = color;
        if self.in_model != working {
            c = working.from_rgb(self.in_model.to_rgb(c));
        }
        if !adjustment.is_identity() {
            c = adjustment.apply(c);
        }
        if self.out_model != working {
            c = self.out_model.from_rgb(working.to_rgb(c));
        }
        c
    }

    /// Process planar channels in place.
    pub fn process_channels(&self, r: &mut [f32], g: &mut [f32], b: &mut [f32]) -> Result<()> {
        let expected = r.len();
        for actual in [g.len(), b.len()] {
            if actual != expected {
                return Err(AstroError::InvalidDimensions { expected, actual });
            }
        }

        let working = self.working_model();
        let adjustment = RangeAdjustment {
            center: working.from_rgb(self.adjustment.center),
            ..self.adjustment.clone()
        };
        debug!(
            pixels = expected,
            in_model = %self.in_model,
            model = %working,
            out_model = %self.out_model,
            "Hue/saturation pass"
        );

        r.par_iter_mut()
            .zip(g.par_iter_mut())
            .zip(b.par_iter_mut())
            .for_each(|((r, g), b)| {
                let [nr, ng, nb] = self.process_with(&adjustment, working, [*r, *g, *b]);
                *r = nr;
                *g = ng;
                *b = nb;
            });

        Ok(())
    }
}
